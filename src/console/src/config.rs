//! Console configuration.

use crate::color::{Color, ColorCode};
use crate::editor::LINE_CAPACITY;
use crate::{HEIGHT, WIDTH};

/// Rows reserved for the boot banner above the scroll region.
pub const BANNER_HEIGHT: usize = 7;

/// Shell prompt literal.
pub const PROMPT: &str = "RetroOS> ";

/// Longest prompt that still fits a full input line on the prompt row.
///
/// The input anchor does not follow the region when it scrolls, so input must
/// never wrap past the right edge.
pub const MAX_PROMPT_LEN: usize = WIDTH - (LINE_CAPACITY - 1);

/// Tunables of the text console.
///
/// Built once at boot; the console never changes it afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConsoleConfig {
    /// First row of the scroll region. Rows above it are never scrolled or cleared.
    pub scroll_start: usize,
    /// Prompt printed before each input line.
    pub prompt: &'static str,
    /// Accent color of the prompt.
    pub prompt_color: ColorCode,
    /// Default color of text and input.
    pub text_color: ColorCode,
    /// Color of the boot banner.
    pub banner_color: ColorCode,
    /// Color of error messages such as unknown commands.
    pub error_color: ColorCode,
}

impl ConsoleConfig {
    /// Green `RetroOS> ` prompt, white text, yellow banner of [`BANNER_HEIGHT`] rows.
    pub const DEFAULT: ConsoleConfig = ConsoleConfig {
        scroll_start: BANNER_HEIGHT,
        prompt: PROMPT,
        prompt_color: ColorCode::new(Color::LightGreen, Color::Black),
        text_color: ColorCode::new(Color::White, Color::Black),
        banner_color: ColorCode::new(Color::Yellow, Color::Black),
        error_color: ColorCode::new(Color::LightRed, Color::Black),
    };

    /// Sets the first scrollable row.
    ///
    /// Clamped so the region always keeps at least one row.
    pub const fn with_scroll_start(mut self, row: usize) -> Self {
        self.scroll_start = if row < HEIGHT { row } else { HEIGHT - 1 };
        self
    }

    /// Sets the prompt literal.
    ///
    /// # Panics
    ///
    /// If `prompt` is longer than [`MAX_PROMPT_LEN`] bytes. In a `const`
    /// context this is a compile error.
    pub const fn with_prompt(mut self, prompt: &'static str) -> Self {
        assert!(
            prompt.len() <= MAX_PROMPT_LEN,
            "prompt leaves no room for a full input line"
        );
        self.prompt = prompt;
        self
    }
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn longest_prompt_keeps_input_on_one_row() {
        let prompt = "seventeen bytes> ";
        assert_eq!(prompt.len(), MAX_PROMPT_LEN);

        let config = ConsoleConfig::DEFAULT.with_prompt(prompt);
        assert_eq!(config.prompt.len() + LINE_CAPACITY - 1, WIDTH);
    }

    #[test]
    #[should_panic(expected = "prompt leaves no room")]
    fn overlong_prompt_is_rejected() {
        let _ = ConsoleConfig::DEFAULT.with_prompt("eighteen bytes >> ");
    }

    #[test]
    fn scroll_start_keeps_one_row() {
        let config = ConsoleConfig::DEFAULT.with_scroll_start(HEIGHT + 5);
        assert_eq!(config.scroll_start, HEIGHT - 1);
    }
}
