//! VGA text mode driver for x86_64.
//!
//! Exposes the text buffer at 0xB8000 and the CRTC cursor registers through
//! the HAL traits, and owns the global console context built on top of them.

use core::ptr;

use retro_console::{ConsoleConfig, ConsoleContext, HEIGHT, WIDTH};
use retro_hal::{CursorPort, TextSurface};
use spin::Mutex;
use x86_64::instructions::port::Port;

/// VGA text buffer memory-mapped I/O address.
const VGA_BUFFER_ADDR: usize = 0xB8000;

/// CRTC index register.
const CRTC_INDEX_PORT: u16 = 0x3D4;
/// CRTC data register.
const CRTC_DATA_PORT: u16 = 0x3D5;
/// CRTC cursor location, high byte.
const CURSOR_LOCATION_HIGH: u8 = 0x0E;
/// CRTC cursor location, low byte.
const CURSOR_LOCATION_LOW: u8 = 0x0F;

/// The VGA text buffer layout: one `u16` per cell, character in the low byte.
#[repr(transparent)]
struct Buffer {
    chars: [[u16; WIDTH]; HEIGHT],
}

/// VGA text memory as a [`TextSurface`].
pub struct VgaSurface {
    /// Pointer to the VGA buffer.
    ///
    /// SAFETY: This pointer is valid for the lifetime of the kernel.
    /// The VGA buffer at 0xB8000 is always mapped by the bootloader.
    buffer: *mut Buffer,
}

// SAFETY: VgaSurface only accesses the VGA buffer through volatile operations.
// The buffer is memory-mapped hardware that exists for the kernel's lifetime.
// Access is synchronized through the CONSOLE spinlock.
unsafe impl Send for VgaSurface {}

impl VgaSurface {
    /// Creates a handle to the text buffer.
    ///
    /// Only the global console should own one; use [`console`] to reach it.
    fn new() -> Self {
        VgaSurface {
            // SAFETY: VGA_BUFFER_ADDR (0xB8000) is the standard VGA text buffer
            // address on x86 systems. This memory is always present and mapped
            // when running on x86 hardware or in QEMU.
            buffer: VGA_BUFFER_ADDR as *mut Buffer,
        }
    }
}

impl TextSurface for VgaSurface {
    fn read_cell(&self, row: usize, col: usize) -> u16 {
        debug_assert!(row < HEIGHT && col < WIDTH, "cell out of bounds");

        // SAFETY: indexing the array is bounds checked, and the buffer pointer
        // was validated at construction time. Volatile because the display
        // hardware shares this memory.
        unsafe { ptr::read_volatile(&(*self.buffer).chars[row][col]) }
    }

    fn write_cell(&mut self, row: usize, col: usize, value: u16) {
        debug_assert!(row < HEIGHT && col < WIDTH, "cell out of bounds");

        // SAFETY: as in `read_cell`; the write must not be elided because the
        // display hardware reads this memory.
        unsafe { ptr::write_volatile(&mut (*self.buffer).chars[row][col], value) }
    }
}

/// The blinking hardware cursor, driven through the CRTC registers.
pub struct VgaCursor {
    index: Port<u8>,
    data: Port<u8>,
}

impl VgaCursor {
    fn new() -> Self {
        VgaCursor {
            index: Port::new(CRTC_INDEX_PORT),
            data: Port::new(CRTC_DATA_PORT),
        }
    }
}

impl CursorPort for VgaCursor {
    fn set_position(&mut self, offset: u16) {
        // SAFETY: 0x3D4/0x3D5 are the color CRTC ports. Writing the cursor
        // location registers only moves the cursor.
        unsafe {
            self.index.write(CURSOR_LOCATION_LOW);
            self.data.write((offset & 0xFF) as u8);
            self.index.write(CURSOR_LOCATION_HIGH);
            self.data.write((offset >> 8) as u8);
        }
    }
}

/// The console context the kernel runs on.
pub type KernelConsole = ConsoleContext<VgaSurface, VgaCursor>;

/// Global console instance.
///
/// Shared between the boot code and the keyboard interrupt handler.
pub static CONSOLE: spin::Once<Mutex<KernelConsole>> = spin::Once::new();

/// Initializes the global console with `config`.
///
/// Idempotent - only the first call's configuration takes effect.
pub fn init(config: ConsoleConfig) {
    CONSOLE.call_once(|| {
        Mutex::new(ConsoleContext::new(
            VgaSurface::new(),
            VgaCursor::new(),
            config,
        ))
    });
}

/// Returns the global console, initializing it with the default configuration
/// if the boot code has not done so yet.
pub fn console() -> &'static Mutex<KernelConsole> {
    init(ConsoleConfig::DEFAULT);
    CONSOLE.get().expect("console not initialized")
}
