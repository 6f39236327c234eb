//! Built-in shell commands.

use core::fmt::Write;

use retro_hal::{CursorPort, TextSurface};

use crate::buffer::ConsoleBuffer;

/// Shell command types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command<'a> {
    /// Display help information.
    Help,
    /// Clear the scroll region.
    Clear,
    /// Input that matched no table entry.
    Unknown(&'a [u8]),
}

/// One row of the command table.
#[derive(Debug)]
pub struct CommandEntry {
    /// Exact, case-sensitive name typed at the prompt.
    pub name: &'static str,
    /// One-line description shown by `help`.
    pub summary: &'static str,
    /// Command run on a match.
    pub command: Command<'static>,
}

/// The fixed command table.
pub const COMMANDS: &[CommandEntry] = &[
    CommandEntry {
        name: "help",
        summary: "show this message",
        command: Command::Help,
    },
    CommandEntry {
        name: "clear",
        summary: "clear the screen",
        command: Command::Clear,
    },
];

impl<'a> Command<'a> {
    /// Parse a submitted line.
    ///
    /// Matching is exact: no trimming, no case folding, no prefixes. Returns
    /// `None` for an empty line.
    pub fn parse(input: &'a [u8]) -> Option<Command<'a>> {
        if input.is_empty() {
            return None;
        }

        let command = COMMANDS
            .iter()
            .find(|entry| entry.name.as_bytes() == input)
            .map_or(Command::Unknown(input), |entry| entry.command);
        Some(command)
    }

    /// Short name for logs.
    pub fn name(&self) -> &'static str {
        match self {
            Command::Help => "help",
            Command::Clear => "clear",
            Command::Unknown(_) => "unknown",
        }
    }

    /// Execute a command, rendering its output to `console`.
    pub fn execute<S: TextSurface, C: CursorPort>(self, console: &mut ConsoleBuffer<S, C>) {
        match self {
            Command::Help => cmd_help(console),
            Command::Clear => console.clear_region(),
            Command::Unknown(input) => {
                let text_color = console.config().text_color;
                console.set_color_code(console.config().error_color);
                console.write_bytes(b"Unknown command: ");
                console.write_bytes(input);
                console.set_color_code(text_color);
                console.write_char(b'\n');
            }
        }
    }
}

/// Display help information.
fn cmd_help<S: TextSurface, C: CursorPort>(console: &mut ConsoleBuffer<S, C>) {
    console.write_bytes(b"Available commands:\n");
    for entry in COMMANDS {
        // The console never reports a formatting error.
        let _ = writeln!(console, "  {:<5} - {}", entry.name, entry.summary);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_is_exact_and_case_sensitive() {
        assert_eq!(Command::parse(b"help"), Some(Command::Help));
        assert_eq!(Command::parse(b"clear"), Some(Command::Clear));
        assert_eq!(Command::parse(b"HELP"), Some(Command::Unknown(b"HELP")));
        assert_eq!(Command::parse(b"hel"), Some(Command::Unknown(b"hel")));
        assert_eq!(Command::parse(b"help "), Some(Command::Unknown(b"help ")));
        assert_eq!(Command::parse(b""), None);
    }
}
