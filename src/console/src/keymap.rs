//! US QWERTY key maps for scancode set 1.

/// Entries per key map; one per 7-bit make code.
pub const KEYMAP_LEN: usize = 128;

/// A pair of scancode → ASCII lookup tables. `0` marks an unmapped key.
#[derive(Debug)]
pub struct KeyMap {
    /// Layout without modifiers.
    pub normal: [u8; KEYMAP_LEN],
    /// Layout with shift held.
    pub shifted: [u8; KEYMAP_LEN],
}

impl KeyMap {
    /// Looks up `scancode` in the shifted or unshifted table.
    ///
    /// Returns `None` for unmapped keys and for codes outside the table.
    pub fn lookup(&self, scancode: u8, shifted: bool) -> Option<u8> {
        let table = if shifted { &self.shifted } else { &self.normal };
        match table.get(usize::from(scancode)) {
            Some(0) | None => None,
            Some(&byte) => Some(byte),
        }
    }
}

/// Pads a prefix of make codes `0x00..` into a full table.
const fn table(prefix: &[u8]) -> [u8; KEYMAP_LEN] {
    let mut table = [0; KEYMAP_LEN];
    let mut i = 0;
    while i < prefix.len() {
        table[i] = prefix[i];
        i += 1;
    }
    table
}

/// US 101/104-key layout, make codes `0x00..=0x39`.
pub static US_QWERTY: KeyMap = KeyMap {
    normal: table(&[
        0, 0x1b, b'1', b'2', b'3', b'4', b'5', b'6', b'7', b'8', b'9', b'0', b'-', b'=', 0x08,
        b'\t', b'q', b'w', b'e', b'r', b't', b'y', b'u', b'i', b'o', b'p', b'[', b']', b'\n',
        0, b'a', b's', b'd', b'f', b'g', b'h', b'j', b'k', b'l', b';', b'\'', b'`',
        0, b'\\', b'z', b'x', b'c', b'v', b'b', b'n', b'm', b',', b'.', b'/',
        0, b'*', 0, b' ',
    ]),
    shifted: table(&[
        0, 0x1b, b'!', b'@', b'#', b'$', b'%', b'^', b'&', b'*', b'(', b')', b'_', b'+', 0x08,
        b'\t', b'Q', b'W', b'E', b'R', b'T', b'Y', b'U', b'I', b'O', b'P', b'{', b'}', b'\n',
        0, b'A', b'S', b'D', b'F', b'G', b'H', b'J', b'K', b'L', b':', b'"', b'~',
        0, b'|', b'Z', b'X', b'C', b'V', b'B', b'N', b'M', b'<', b'>', b'?',
        0, b'*', 0, b' ',
    ]),
};
