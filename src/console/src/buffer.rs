//! Console buffer: the only writer of the display surface.
//!
//! Tracks the cursor, the current color, the scroll region below the banner and
//! the input anchor left behind by the last prompt. Backspace never crosses the
//! anchor, so a prompt (and anything printed before it) cannot be erased from
//! the keyboard.

use core::fmt;

use retro_hal::{CursorPort, TextSurface};

use crate::color::{Color, ColorCode};
use crate::config::ConsoleConfig;
use crate::{HEIGHT, WIDTH};

/// ASCII backspace control code.
pub const BACKSPACE: u8 = 0x08;

/// Glyph shown for characters the code page 437 font cannot represent.
const PLACEHOLDER: u8 = 0xfe;

/// A single character cell in the text buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(C)]
pub struct ScreenChar {
    /// Code page 437 character.
    pub ascii_character: u8,
    /// Attribute byte.
    pub color_code: ColorCode,
}

impl ScreenChar {
    /// A space in the given color.
    pub const fn blank(color_code: ColorCode) -> Self {
        ScreenChar {
            ascii_character: b' ',
            color_code,
        }
    }

    /// Encodes the cell as stored in video memory.
    pub const fn to_raw(self) -> u16 {
        (self.color_code.as_u8() as u16) << 8 | self.ascii_character as u16
    }

    /// Decodes a cell read from video memory.
    pub const fn from_raw(raw: u16) -> Self {
        ScreenChar {
            ascii_character: raw as u8,
            color_code: ColorCode::from_raw((raw >> 8) as u8),
        }
    }
}

/// A cell coordinate. Ordering is row-major.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Position {
    /// Row, `0..HEIGHT`.
    pub row: usize,
    /// Column, `0..WIDTH`.
    pub col: usize,
}

impl Position {
    /// Creates a position.
    pub const fn new(row: usize, col: usize) -> Self {
        Position { row, col }
    }

    /// Linear cell offset, as programmed into the CRTC cursor registers.
    pub const fn offset(self) -> u16 {
        (self.row * WIDTH + self.col) as u16
    }
}

/// Rows `[start, end)` that may scroll.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollRegion {
    /// First scrollable row.
    pub start: usize,
    /// One past the last scrollable row.
    pub end: usize,
}

impl ScrollRegion {
    /// The region from `start` down to the bottom of the screen.
    pub const fn below(start: usize) -> Self {
        ScrollRegion { start, end: HEIGHT }
    }

    /// The row the cursor is pinned to once output reaches the bottom.
    pub const fn last_row(self) -> usize {
        self.end - 1
    }
}

/// Text console over a [`TextSurface`] with a hardware cursor.
pub struct ConsoleBuffer<S, C> {
    surface: S,
    cursor_port: C,
    cursor: Position,
    anchor: Position,
    color: ColorCode,
    region: ScrollRegion,
    config: ConsoleConfig,
}

impl<S: TextSurface, C: CursorPort> ConsoleBuffer<S, C> {
    /// Creates a console with the cursor and anchor at the top-left corner.
    ///
    /// The surface is left untouched; call [`clear_screen`](Self::clear_screen)
    /// or [`clear_region`](Self::clear_region) to wipe stale contents.
    pub fn new(surface: S, cursor_port: C, config: ConsoleConfig) -> Self {
        ConsoleBuffer {
            surface,
            cursor_port,
            cursor: Position::default(),
            anchor: Position::default(),
            color: config.text_color,
            region: ScrollRegion::below(config.scroll_start),
            config,
        }
    }

    /// The configuration this console was built with.
    pub fn config(&self) -> &ConsoleConfig {
        &self.config
    }

    /// Current write position.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// First editable cell after the most recent prompt.
    pub fn anchor(&self) -> Position {
        self.anchor
    }

    /// Rows eligible for scrolling.
    pub fn scroll_region(&self) -> ScrollRegion {
        self.region
    }

    /// Color used for new cells.
    pub fn color(&self) -> ColorCode {
        self.color
    }

    /// Sets the foreground and background colors for subsequent writes.
    pub fn set_color(&mut self, foreground: Color, background: Color) {
        self.color = ColorCode::new(foreground, background);
    }

    /// Sets the color for subsequent writes from a packed attribute.
    pub fn set_color_code(&mut self, color: ColorCode) {
        self.color = color;
    }

    /// The underlying surface.
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// The hardware cursor port.
    pub fn cursor_port(&self) -> &C {
        &self.cursor_port
    }

    /// Reads back one cell.
    pub fn cell(&self, row: usize, col: usize) -> ScreenChar {
        ScreenChar::from_raw(self.surface.read_cell(row, col))
    }

    /// Writes a single byte at the cursor.
    ///
    /// Backspace erases, newline moves to the next row, everything else is
    /// stored as a glyph. Wraps and scrolls as needed.
    pub fn write_char(&mut self, byte: u8) {
        match byte {
            BACKSPACE => self.erase_last(),
            b'\n' => {
                self.new_line();
                self.sync_cursor();
            }
            byte => {
                self.put(
                    self.cursor,
                    ScreenChar {
                        ascii_character: byte,
                        color_code: self.color,
                    },
                );
                self.cursor.col += 1;
                if self.cursor.col >= WIDTH {
                    self.new_line();
                }
                self.sync_cursor();
            }
        }
    }

    /// Writes every byte through [`write_char`](Self::write_char).
    pub fn write_bytes(&mut self, bytes: &[u8]) {
        for &byte in bytes {
            self.write_char(byte);
        }
    }

    /// Erases the cell before the cursor, unless the cursor sits at or before
    /// the input anchor.
    pub fn erase_last(&mut self) {
        if self.cursor <= self.anchor {
            return;
        }

        // cursor > anchor, so column 0 implies a previous row exists.
        if self.cursor.col == 0 {
            self.cursor.row -= 1;
            self.cursor.col = WIDTH - 1;
        } else {
            self.cursor.col -= 1;
        }

        self.put(self.cursor, ScreenChar::blank(self.color));
        self.sync_cursor();
    }

    /// Prints the prompt in the accent color and anchors input right after it.
    pub fn print_prompt(&mut self) {
        self.color = self.config.prompt_color;
        for byte in self.config.prompt.bytes() {
            self.write_char(byte);
        }
        self.color = self.config.text_color;

        self.anchor = self.cursor;
    }

    /// Blanks the scroll region and moves the cursor to its top-left cell.
    ///
    /// The banner rows above the region survive.
    pub fn clear_region(&mut self) {
        for row in self.region.start..HEIGHT {
            self.clear_row(row);
        }
        self.cursor = Position::new(self.region.start, 0);
        self.sync_cursor();
    }

    /// Blanks the entire surface, banner included, and homes the cursor.
    pub fn clear_screen(&mut self) {
        for row in 0..HEIGHT {
            self.clear_row(row);
        }
        self.cursor = Position::default();
        self.sync_cursor();
    }

    fn new_line(&mut self) {
        self.cursor.col = 0;
        self.cursor.row += 1;
        self.scroll_if_needed();
    }

    /// Scrolls the region up by one row once the cursor reaches its last row.
    fn scroll_if_needed(&mut self) {
        let last = self.region.last_row();
        if self.cursor.row < last {
            return;
        }

        for row in self.region.start..last {
            for col in 0..WIDTH {
                let value = self.surface.read_cell(row + 1, col);
                self.surface.write_cell(row, col, value);
            }
        }
        self.clear_row(last);

        self.cursor.row = last;
    }

    /// Clears a single row by filling it with spaces in the current color.
    fn clear_row(&mut self, row: usize) {
        debug_assert!(row < HEIGHT, "row index out of bounds");

        let blank = ScreenChar::blank(self.color).to_raw();
        for col in 0..WIDTH {
            self.surface.write_cell(row, col, blank);
        }
    }

    fn put(&mut self, at: Position, cell: ScreenChar) {
        self.surface.write_cell(at.row, at.col, cell.to_raw());
    }

    fn sync_cursor(&mut self) {
        self.cursor_port.set_position(self.cursor.offset());
    }
}

impl<S: TextSurface, C: CursorPort> fmt::Write for ConsoleBuffer<S, C> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        for c in s.chars() {
            let byte = if c.is_ascii() { c as u8 } else { PLACEHOLDER };
            self.write_char(byte);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{console, MemorySurface, RecordingCursor};
    use core::fmt::Write;

    fn banner(console: &mut ConsoleBuffer<MemorySurface, RecordingCursor>) {
        console.clear_screen();
        for row in 0..console.scroll_region().start {
            writeln!(console, "banner row {}", row).unwrap();
        }
        console.clear_region();
    }

    fn rows(
        console: &ConsoleBuffer<MemorySurface, RecordingCursor>,
        range: core::ops::Range<usize>,
    ) -> Vec<[u16; WIDTH]> {
        range.map(|row| console.surface().cells[row]).collect()
    }

    #[test]
    fn write_char_uses_current_color_and_advances() {
        let mut console = console();
        console.clear_screen();
        console.set_color(Color::Cyan, Color::Blue);
        console.write_char(b'x');

        let cell = console.cell(0, 0);
        assert_eq!(cell.ascii_character, b'x');
        assert_eq!(cell.color_code, ColorCode::new(Color::Cyan, Color::Blue));
        assert_eq!(console.cursor(), Position::new(0, 1));
    }

    #[test]
    fn hardware_cursor_follows_logical_cursor() {
        let mut console = console();
        console.clear_region();
        console.write_bytes(b"abc\nde");

        assert_eq!(console.cursor(), Position::new(8, 2));
        assert_eq!(console.cursor_port().last(), Some(8 * 80 + 2));
    }

    #[test]
    fn wraps_at_the_right_edge() {
        let mut console = console();
        console.clear_region();
        for _ in 0..WIDTH {
            console.write_char(b'#');
        }

        assert_eq!(console.cursor(), Position::new(8, 0));
        assert_eq!(console.surface().row_text(7).len(), WIDTH);
    }

    #[test]
    fn clear_region_is_idempotent_and_spares_the_banner() {
        let mut console = console();
        banner(&mut console);
        console.write_bytes(b"some output\nmore output");

        console.clear_region();
        let first = console.surface().cells;
        console.clear_region();

        assert_eq!(console.surface().cells, first);
        assert_eq!(console.surface().row_text(0), "banner row 0");
        assert_eq!(console.cursor(), Position::new(7, 0));
        for row in 7..HEIGHT {
            assert_eq!(console.surface().row_text(row), "");
        }
    }

    #[test]
    fn scrolling_keeps_banner_and_shows_latest_line_at_bottom() {
        let mut console = console();
        banner(&mut console);
        let reserved = rows(&console, 0..7);

        let lines = HEIGHT + 3;
        for i in 0..lines {
            if i > 0 {
                console.write_char(b'\n');
            }
            write!(console, "line {}", i).unwrap();
        }

        assert_eq!(rows(&console, 0..7), reserved);
        assert_eq!(console.surface().row_text(HEIGHT - 1), format!("line {}", lines - 1));
        assert_eq!(console.surface().row_text(HEIGHT - 2), format!("line {}", lines - 2));
        assert_eq!(console.cursor().row, HEIGHT - 1);
    }

    #[test]
    fn repeated_newlines_pin_cursor_to_last_row() {
        let mut console = console();
        banner(&mut console);
        let reserved = rows(&console, 0..7);

        for _ in 0..(HEIGHT * 2) {
            console.write_char(b'\n');
        }

        assert_eq!(console.cursor(), Position::new(HEIGHT - 1, 0));
        assert_eq!(rows(&console, 0..7), reserved);
    }

    #[test]
    fn prompt_sets_anchor_after_its_text() {
        let mut console = console();
        console.clear_region();
        console.print_prompt();

        let prompt_len = console.config().prompt.len();
        assert_eq!(console.anchor(), Position::new(7, prompt_len));
        assert_eq!(console.cursor(), console.anchor());
        assert_eq!(console.cell(7, 0).color_code, console.config().prompt_color);
        assert_eq!(console.color(), console.config().text_color);
        assert_eq!(console.surface().row_text(7), "RetroOS>");
    }

    #[test]
    fn backspace_never_crosses_the_anchor() {
        let mut console = console();
        banner(&mut console);
        console.write_bytes(b"earlier output\n");
        console.print_prompt();
        let before = rows(&console, 0..8);
        let anchor = console.anchor();

        console.write_bytes(b"ab");
        for _ in 0..10 {
            console.erase_last();
            assert!(console.cursor() >= anchor);
        }

        assert_eq!(console.cursor(), anchor);
        assert_eq!(rows(&console, 0..8), before);
        assert_eq!(console.surface().row_text(8), "RetroOS>");
    }

    #[test]
    fn backspace_at_column_zero_wraps_to_previous_row() {
        let mut console = console();
        console.clear_region();
        console.print_prompt();
        let typed = WIDTH - console.anchor().col;
        for _ in 0..typed {
            console.write_char(b'z');
        }
        assert_eq!(console.cursor(), Position::new(8, 0));

        console.write_char(BACKSPACE);

        assert_eq!(console.cursor(), Position::new(7, WIDTH - 1));
        assert_eq!(console.cell(7, WIDTH - 1).ascii_character, b' ');
        assert_eq!(console.cell(7, WIDTH - 2).ascii_character, b'z');
    }

    #[test]
    fn wrapping_onto_the_last_row_scrolls_the_region() {
        let mut console = console();
        banner(&mut console);
        let reserved = rows(&console, 0..7);
        let last = console.scroll_region().last_row();

        for i in 0..(last - 1 - 7) {
            writeln!(console, "line {}", i).unwrap();
        }
        assert_eq!(console.cursor(), Position::new(last - 1, 0));

        for _ in 0..WIDTH {
            console.write_char(b'#');
        }

        assert_eq!(console.cursor(), Position::new(HEIGHT - 1, 0));
        assert_eq!(console.cursor_port().last(), Some(((HEIGHT - 1) * WIDTH) as u16));
        assert_eq!(rows(&console, 0..7), reserved);
        assert_eq!(console.surface().row_text(7), "line 1");
        assert_eq!(console.surface().row_text(last - 2), "#".repeat(WIDTH));
        assert_eq!(console.surface().row_text(last), "");
    }

    #[test]
    fn fmt_write_replaces_non_ascii() {
        let mut console = console();
        console.clear_region();
        write!(console, "{}:{}", 'é', 42).unwrap();

        assert_eq!(console.cell(7, 0).ascii_character, 0xfe);
        assert_eq!(console.cell(7, 1).ascii_character, b':');
        assert!(console.surface().row_text(7).ends_with(":42"));
    }
}
