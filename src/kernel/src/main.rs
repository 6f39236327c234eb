//! RetroOS Kernel Entry Point
//!
//! This is the main entry point for the RetroOS kernel.

#![no_std]
#![no_main]

use bootloader::{entry_point, BootInfo};
use core::panic::PanicInfo;
use retro_console::Color;
use retro_kernel::arch::x86_64::{halt_loop, vga};
use retro_kernel::{boot, serial_println};

entry_point!(kernel_main);

/// Kernel entry point.
///
/// Called by the bootloader with interrupts disabled.
fn kernel_main(_boot_info: &'static BootInfo) -> ! {
    retro_kernel::init();

    #[cfg(feature = "test")]
    retro_kernel::tests::run_all();

    boot::start();

    // Everything from here on happens in the keyboard interrupt handler.
    halt_loop()
}

/// Panic handler.
///
/// Called when the kernel encounters an unrecoverable error.
#[panic_handler]
fn panic(info: &PanicInfo) -> ! {
    ::x86_64::instructions::interrupts::disable();

    // Use the already-initialized serial port
    serial_println!("KERNEL PANIC: {}", info);

    // The panic may have happened with the console locked.
    if let Some(mut console) = vga::CONSOLE.get().and_then(|console| console.try_lock()) {
        use core::fmt::Write;

        let console = console.console_mut();
        console.set_color(Color::LightRed, Color::Black);
        let _ = write!(console, "\n\n!!! KERNEL PANIC !!!\n");
        console.set_color(Color::White, Color::Black);
        let _ = writeln!(console, "{}", info);
    }

    halt_loop()
}
