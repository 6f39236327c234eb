//! RetroOS Kernel
//!
//! A tiny interrupt-driven x86_64 kernel whose only job is a text console:
//! keyboard interrupts in, an edited command line and VGA text out.
//!
//! # Architecture
//!
//! The kernel is structured into the following modules:
//! - `arch`: Platform-specific code (VGA, PIC, IDT, keyboard port, serial)
//! - `boot`: Banner and the startup sequence
//! - `logger`: `log` backend writing to the serial port
//!
//! The console logic itself lives in the `retro-console` crate and reaches the
//! hardware only through the `retro-hal` traits implemented here.
//!
//! # Safety
//!
//! This is a `#![no_std]` kernel. All unsafe code is documented with safety
//! invariants explaining why the usage is correct.

#![no_std]
#![feature(abi_x86_interrupt)]
#![warn(missing_docs)]

pub mod arch;
pub mod boot;
pub mod logger;
pub mod tests;
pub mod testutil;

/// Initializes core kernel subsystems.
///
/// Called first thing in the boot process: serial log, logger, and the global
/// console context. Nothing is drawn yet.
pub fn init() {
    #[cfg(target_arch = "x86_64")]
    {
        arch::x86_64::serial::init();
        if let Err(err) = logger::init(logger::LOG_LEVEL) {
            serial_println!("logger unavailable: {}", err);
        }
        arch::x86_64::vga::init(boot::CONSOLE_CONFIG);
        log::info!("RetroOS {} starting", env!("CARGO_PKG_VERSION"));
    }
}
