//! The single owned console state threaded through the keyboard interrupt.

use retro_hal::{CursorPort, InterruptController, ScancodeSource, TextSurface};

use crate::buffer::ConsoleBuffer;
use crate::config::ConsoleConfig;
use crate::decoder::ScancodeDecoder;
use crate::editor::LineEditor;

/// Display, keyboard decoder and line editor in one place.
///
/// The kernel keeps exactly one of these behind a lock; the interrupt entry
/// point acquires it and passes it down by `&mut`.
pub struct ConsoleContext<S, C> {
    console: ConsoleBuffer<S, C>,
    decoder: ScancodeDecoder,
    editor: LineEditor,
}

impl<S: TextSurface, C: CursorPort> ConsoleContext<S, C> {
    /// Creates the context. Nothing is drawn yet.
    pub fn new(surface: S, cursor_port: C, config: ConsoleConfig) -> Self {
        ConsoleContext {
            console: ConsoleBuffer::new(surface, cursor_port, config),
            decoder: ScancodeDecoder::new(),
            editor: LineEditor::new(),
        }
    }

    /// The display.
    pub fn console(&self) -> &ConsoleBuffer<S, C> {
        &self.console
    }

    /// The display, for direct output.
    pub fn console_mut(&mut self) -> &mut ConsoleBuffer<S, C> {
        &mut self.console
    }

    /// The keyboard decoder.
    pub fn decoder(&self) -> &ScancodeDecoder {
        &self.decoder
    }

    /// The line editor.
    pub fn editor(&self) -> &LineEditor {
        &self.editor
    }

    /// Draws the boot screen: wipes whatever the firmware left in video
    /// memory, prints `banner` above the scroll region, and leaves the cursor
    /// at the top of the empty region.
    pub fn startup(&mut self, banner: &[&str]) {
        let config = *self.console.config();

        self.console.clear_screen();
        self.console.set_color_code(config.banner_color);
        for line in banner {
            self.console.write_bytes(line.as_bytes());
            self.console.write_char(b'\n');
        }
        self.console.set_color_code(config.text_color);
        self.console.clear_region();
    }

    /// Prints the prompt and anchors input after it.
    pub fn print_prompt(&mut self) {
        self.console.print_prompt();
    }

    /// Feeds one decoded byte to the line editor.
    pub fn handle_key(&mut self, byte: u8) {
        self.editor.feed(byte, &mut self.console);
    }

    /// Decodes one scancode and feeds the result, if any, to the line editor.
    pub fn handle_scancode(&mut self, scancode: u8) {
        if let Some(byte) = self.decoder.decode(scancode) {
            self.handle_key(byte);
        }
    }

    /// Services one keyboard interrupt.
    ///
    /// Reads the scancode, runs the whole decode/edit/render chain, and only
    /// then acknowledges `vector` on the interrupt controller. The line stays
    /// masked until that acknowledgment, so the chain never runs reentrantly.
    pub fn service_interrupt<K, I>(&mut self, keyboard: &mut K, controller: &mut I, vector: u8)
    where
        K: ScancodeSource,
        I: InterruptController,
    {
        let scancode = keyboard.read_scancode();
        self.handle_scancode(scancode);
        controller.end_of_interrupt(vector);
    }
}
