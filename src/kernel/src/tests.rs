//! Kernel-level tests.
//!
//! Run over serial during boot when the `test` feature is enabled, before the
//! console takes over the screen.

use crate::arch::x86_64::pic::{self, InterruptIndex, PicBridge};
use crate::arch::x86_64::vga;
use crate::serial_println;
use retro_hal::InterruptController;
use x86_64::instructions::interrupts;

/// Runs all kernel tests.
pub fn run_all() {
    serial_println!("Running kernel tests...");

    test_pic_masks();
    test_keyboard_vector();
    test_console_write();

    serial_println!("All kernel tests passed!");
}

fn test_pic_masks() {
    serial_println!("test_pic_masks... ");
    PicBridge.initialize();
    assert_eq!(pic::masks(), [pic::MASTER_MASK, pic::SLAVE_MASK]);
    assert_eq!(pic::masks(), [0xFD, 0xFF]);
    serial_println!("[ok]");
}

fn test_keyboard_vector() {
    serial_println!("test_keyboard_vector... ");
    assert_eq!(InterruptIndex::Keyboard.as_u8(), 33);
    assert_eq!(InterruptIndex::Keyboard.as_usize(), 33);
    serial_println!("[ok]");
}

fn test_console_write() {
    serial_println!("test_console_write... ");
    interrupts::without_interrupts(|| {
        let mut context = vga::console().lock();
        let console = context.console_mut();
        console.clear_screen();
        console.write_bytes(b"ok");
        assert_eq!(console.cell(0, 0).ascii_character, b'o');
        assert_eq!(console.cell(0, 1).ascii_character, b'k');
        assert_eq!(console.cursor().col, 2);
    });
    serial_println!("[ok]");
}
