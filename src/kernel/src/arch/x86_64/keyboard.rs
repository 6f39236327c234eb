//! PS/2 keyboard data port.

use retro_hal::ScancodeSource;
use x86_64::instructions::port::PortReadOnly;

/// PS/2 controller data port.
const KEYBOARD_DATA_PORT: u16 = 0x60;

/// The keyboard as a source of set-1 scancodes.
pub struct Ps2Keyboard {
    data: PortReadOnly<u8>,
}

impl Ps2Keyboard {
    /// Opens the data port.
    pub const fn new() -> Self {
        Ps2Keyboard {
            data: PortReadOnly::new(KEYBOARD_DATA_PORT),
        }
    }
}

impl Default for Ps2Keyboard {
    fn default() -> Self {
        Self::new()
    }
}

impl ScancodeSource for Ps2Keyboard {
    fn read_scancode(&mut self) -> u8 {
        // SAFETY: 0x60 is the PS/2 data port. It is only read from the
        // keyboard interrupt, when the controller has a byte waiting.
        unsafe { self.data.read() }
    }
}
