//! In-memory stand-ins for the hardware traits.

use std::cell::Cell;
use std::collections::VecDeque;
use std::rc::Rc;

use retro_hal::{CursorPort, InterruptController, ScancodeSource, TextSurface};

use crate::buffer::ConsoleBuffer;
use crate::config::ConsoleConfig;
use crate::context::ConsoleContext;
use crate::{HEIGHT, WIDTH};

/// Video memory as a plain array, counting every cell write.
pub struct MemorySurface {
    pub cells: [[u16; WIDTH]; HEIGHT],
    pub writes: Rc<Cell<usize>>,
}

impl MemorySurface {
    /// A surface full of leftover firmware garbage.
    pub fn new() -> Self {
        MemorySurface {
            cells: [[0x4f3f; WIDTH]; HEIGHT],
            writes: Rc::new(Cell::new(0)),
        }
    }

    /// The characters of one row with trailing blanks removed.
    pub fn row_text(&self, row: usize) -> String {
        let text: String = self.cells[row].iter().map(|&cell| (cell as u8) as char).collect();
        text.trim_end_matches(' ').to_string()
    }
}

impl TextSurface for MemorySurface {
    fn read_cell(&self, row: usize, col: usize) -> u16 {
        self.cells[row][col]
    }

    fn write_cell(&mut self, row: usize, col: usize, value: u16) {
        self.cells[row][col] = value;
        self.writes.set(self.writes.get() + 1);
    }
}

/// Remembers every hardware cursor update.
#[derive(Default)]
pub struct RecordingCursor {
    pub positions: Vec<u16>,
}

impl RecordingCursor {
    pub fn last(&self) -> Option<u16> {
        self.positions.last().copied()
    }
}

impl CursorPort for RecordingCursor {
    fn set_position(&mut self, offset: u16) {
        self.positions.push(offset);
    }
}

/// Hands out a fixed sequence of scancodes.
pub struct FixedScancodes {
    codes: VecDeque<u8>,
}

impl FixedScancodes {
    pub fn new(codes: &[u8]) -> Self {
        FixedScancodes {
            codes: codes.iter().copied().collect(),
        }
    }
}

impl ScancodeSource for FixedScancodes {
    fn read_scancode(&mut self) -> u8 {
        self.codes.pop_front().expect("no scancode queued")
    }
}

/// Records each EOI together with the surface write count at that moment.
pub struct RecordingController {
    pub eois: Vec<(u8, usize)>,
    writes: Rc<Cell<usize>>,
}

impl RecordingController {
    pub fn new(writes: Rc<Cell<usize>>) -> Self {
        RecordingController {
            eois: Vec::new(),
            writes,
        }
    }
}

impl InterruptController for RecordingController {
    fn initialize(&mut self) {}

    fn end_of_interrupt(&mut self, vector: u8) {
        self.eois.push((vector, self.writes.get()));
    }
}

pub fn console() -> ConsoleBuffer<MemorySurface, RecordingCursor> {
    ConsoleBuffer::new(
        MemorySurface::new(),
        RecordingCursor::default(),
        ConsoleConfig::DEFAULT,
    )
}

pub fn context() -> ConsoleContext<MemorySurface, RecordingCursor> {
    ConsoleContext::new(
        MemorySurface::new(),
        RecordingCursor::default(),
        ConsoleConfig::DEFAULT,
    )
}
