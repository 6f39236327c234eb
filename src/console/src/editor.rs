//! Command line editing and dispatch.

use retro_hal::{CursorPort, TextSurface};

use crate::buffer::{ConsoleBuffer, BACKSPACE};
use crate::command::Command;

/// Size of the line buffer. One slot stays reserved, so 63 bytes are usable.
pub const LINE_CAPACITY: usize = 64;

/// The line being typed at the prompt.
#[derive(Debug, Clone)]
pub struct CommandLine {
    bytes: [u8; LINE_CAPACITY],
    len: usize,
}

impl CommandLine {
    /// Creates an empty line.
    pub const fn new() -> Self {
        CommandLine {
            bytes: [0; LINE_CAPACITY],
            len: 0,
        }
    }

    /// Number of bytes typed.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether nothing has been typed.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Whether another byte would be dropped.
    pub fn is_full(&self) -> bool {
        self.len >= LINE_CAPACITY - 1
    }

    /// The typed bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len]
    }

    /// Appends a byte. Returns `false` and leaves the line unchanged when full.
    pub fn push(&mut self, byte: u8) -> bool {
        if self.is_full() {
            return false;
        }
        self.bytes[self.len] = byte;
        self.len += 1;
        true
    }

    /// Drops the last byte, if any.
    pub fn pop(&mut self) -> Option<u8> {
        if self.len == 0 {
            return None;
        }
        self.len -= 1;
        Some(self.bytes[self.len])
    }

    /// Forgets the typed bytes.
    pub fn clear(&mut self) {
        self.len = 0;
    }
}

impl Default for CommandLine {
    fn default() -> Self {
        Self::new()
    }
}

/// Turns decoded key bytes into line edits and command dispatches.
#[derive(Debug, Default)]
pub struct LineEditor {
    line: CommandLine,
}

impl LineEditor {
    /// Creates an editor with an empty line.
    pub const fn new() -> Self {
        LineEditor {
            line: CommandLine::new(),
        }
    }

    /// The line typed so far.
    pub fn line(&self) -> &CommandLine {
        &self.line
    }

    /// Handles one decoded byte.
    ///
    /// Backspace shortens the line and asks the console to erase; the console
    /// decides whether the erase is allowed. Newline submits. Anything else is
    /// appended and echoed, or dropped silently once the line is full.
    pub fn feed<S: TextSurface, C: CursorPort>(
        &mut self,
        byte: u8,
        console: &mut ConsoleBuffer<S, C>,
    ) {
        match byte {
            BACKSPACE => {
                self.line.pop();
                console.erase_last();
            }
            b'\n' => {
                console.write_char(b'\n');
                self.submit(console);
            }
            byte => {
                if self.line.push(byte) {
                    console.write_char(byte);
                } else {
                    log::trace!("line full, dropping {:#04x}", byte);
                }
            }
        }
    }

    /// Dispatches the current line and shows a fresh prompt.
    fn submit<S: TextSurface, C: CursorPort>(&mut self, console: &mut ConsoleBuffer<S, C>) {
        if let Some(command) = Command::parse(self.line.as_bytes()) {
            log::debug!("dispatching {} command", command.name());
            command.execute(console);
        }

        self.line.clear();
        console.print_prompt();
    }
}
