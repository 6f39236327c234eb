//! x86_64 architecture support.
//!
//! Provides VGA text mode output, PIC and IDT setup for the keyboard line, and
//! serial port logging for x86_64 platforms.

pub mod interrupts;
pub mod keyboard;
pub mod pic;
pub mod serial;
pub mod vga;

/// Halts the CPU until the next interrupt.
///
/// Used in idle loops to reduce power consumption.
#[inline]
pub fn hlt() {
    ::x86_64::instructions::hlt();
}

/// Halts the CPU in an infinite loop.
///
/// This is the kernel's idle state: everything else happens in the keyboard
/// interrupt handler.
pub fn halt_loop() -> ! {
    loop {
        hlt();
    }
}
