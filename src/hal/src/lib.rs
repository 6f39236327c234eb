//! RetroOS Hardware Abstraction Layer (HAL) traits.
//!
//! This crate defines traits that abstract away platform-specific hardware details,
//! so the console core can run against VGA memory on real hardware and against
//! plain arrays in host tests.

#![no_std]

/// A fixed grid of raw text cells.
///
/// Each cell is a `u16`: the low byte is the character code, the high byte the
/// `(background << 4) | foreground` color attribute.
pub trait TextSurface {
    /// Reads the cell at `row`, `col`.
    fn read_cell(&self, row: usize, col: usize) -> u16;
    /// Writes the cell at `row`, `col`.
    fn write_cell(&mut self, row: usize, col: usize, value: u16);
}

/// The blinking hardware cursor.
pub trait CursorPort {
    /// Moves the hardware cursor to the linear cell offset `row * width + col`.
    fn set_position(&mut self, offset: u16);
}

/// A source of raw keyboard scancodes.
pub trait ScancodeSource {
    /// Reads the pending scancode byte.
    fn read_scancode(&mut self) -> u8;
}

/// Trait for controlling interrupts.
pub trait InterruptController {
    /// Programs the controller and unmasks the lines the kernel services.
    fn initialize(&mut self);
    /// Signals the end of an interrupt to the controller.
    fn end_of_interrupt(&mut self, vector: u8);
}
