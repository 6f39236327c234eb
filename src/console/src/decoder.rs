//! Scancode set 1 decoder with shift and caps-lock tracking.

use bitflags::bitflags;

use crate::keymap::{KeyMap, US_QWERTY};

/// Left shift make code.
pub const LEFT_SHIFT: u8 = 0x2A;
/// Right shift make code.
pub const RIGHT_SHIFT: u8 = 0x36;
/// Left shift break code.
pub const LEFT_SHIFT_RELEASE: u8 = 0xAA;
/// Right shift break code.
pub const RIGHT_SHIFT_RELEASE: u8 = 0xB6;
/// Caps lock make code.
pub const CAPS_LOCK: u8 = 0x3A;
/// Bit set on every break (key release) code.
pub const RELEASE_BIT: u8 = 0x80;

/// Make codes of the three letter rows (`q`..`p`, `a`..`l`, `z`..`m` and the
/// keys between them). Caps lock only affects these.
const LETTER_ROWS: core::ops::RangeInclusive<u8> = 0x10..=0x32;

bitflags! {
    /// Modifier keys the decoder tracks.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Modifiers: u8 {
        /// Either shift key held.
        const SHIFT     = 1 << 0;
        /// Caps lock toggled on.
        const CAPS_LOCK = 1 << 1;
    }
}

/// Stateful scancode → ASCII translator.
#[derive(Debug)]
pub struct ScancodeDecoder {
    modifiers: Modifiers,
    keymap: &'static KeyMap,
}

impl ScancodeDecoder {
    /// Creates a decoder for the US layout with no modifiers active.
    pub fn new() -> Self {
        Self::with_keymap(&US_QWERTY)
    }

    /// Creates a decoder for another layout.
    pub fn with_keymap(keymap: &'static KeyMap) -> Self {
        ScancodeDecoder {
            modifiers: Modifiers::empty(),
            keymap,
        }
    }

    /// Currently active modifiers.
    pub fn modifiers(&self) -> Modifiers {
        self.modifiers
    }

    /// Feeds one scancode, returning the byte it produces, if any.
    ///
    /// Modifier codes are checked before the generic release filter, so shift
    /// releases still clear the shift state.
    pub fn decode(&mut self, scancode: u8) -> Option<u8> {
        match scancode {
            LEFT_SHIFT | RIGHT_SHIFT => {
                self.modifiers.insert(Modifiers::SHIFT);
                return None;
            }
            LEFT_SHIFT_RELEASE | RIGHT_SHIFT_RELEASE => {
                self.modifiers.remove(Modifiers::SHIFT);
                return None;
            }
            CAPS_LOCK => {
                self.modifiers.toggle(Modifiers::CAPS_LOCK);
                return None;
            }
            _ => {}
        }

        if scancode & RELEASE_BIT != 0 {
            return None;
        }

        let shift = self.modifiers.contains(Modifiers::SHIFT);
        let shifted = if LETTER_ROWS.contains(&scancode) {
            shift ^ self.modifiers.contains(Modifiers::CAPS_LOCK)
        } else {
            shift
        };

        let byte = self.keymap.lookup(scancode, shifted);
        if byte.is_none() {
            log::trace!("unmapped scancode {:#04x}", scancode);
        }
        byte
    }
}

impl Default for ScancodeDecoder {
    fn default() -> Self {
        Self::new()
    }
}
