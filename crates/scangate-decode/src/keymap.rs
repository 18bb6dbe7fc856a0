//! Static key code table for keyboard-class scanners.
//!
//! Maps physical key identifiers to the symbol the scanner meant to emit:
//! either a literal character (letters, digits, punctuation, and the
//! control characters newline/tab/backspace) or a named modifier tag.
//! Only the shift tag influences decoding; the remaining tags are
//! recognized so that a scanner emitting them does not pollute the code
//! buffer with unmapped noise.

use evdev::Key;
use serde::{Deserialize, Serialize};

/// Named modifier keys recognized by the table.
///
/// Left and right variants are normalized to a single tag, so `Shift`
/// matches whichever shift key the device reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModifierKey {
    Shift,
    Caps,
    Alt,
    Ctrl,
    Meta,
    Back,
    Esc,
}

/// The logical symbol behind one physical key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeySymbol {
    /// A literal character, including the control characters `'\n'`,
    /// `'\t'` and backspace (`'\u{8}'`).
    Char(char),

    /// A modifier tag; produces no output by itself.
    Modifier(ModifierKey),
}

impl KeySymbol {
    /// Get the literal character, if this symbol is one.
    #[must_use]
    pub fn as_char(&self) -> Option<char> {
        match self {
            KeySymbol::Char(c) => Some(*c),
            KeySymbol::Modifier(_) => None,
        }
    }

    /// Returns `true` if this symbol is a modifier tag.
    #[must_use]
    pub fn is_modifier(&self) -> bool {
        matches!(self, KeySymbol::Modifier(_))
    }
}

/// Look up the symbol for a physical key.
///
/// Returns `None` for codes outside the table (function keys, numpad,
/// media keys); the decoder ignores those events entirely.
#[must_use]
pub fn symbol_for(key: Key) -> Option<KeySymbol> {
    let symbol = match key {
        // Alphabet
        Key::KEY_A => KeySymbol::Char('a'),
        Key::KEY_B => KeySymbol::Char('b'),
        Key::KEY_C => KeySymbol::Char('c'),
        Key::KEY_D => KeySymbol::Char('d'),
        Key::KEY_E => KeySymbol::Char('e'),
        Key::KEY_F => KeySymbol::Char('f'),
        Key::KEY_G => KeySymbol::Char('g'),
        Key::KEY_H => KeySymbol::Char('h'),
        Key::KEY_I => KeySymbol::Char('i'),
        Key::KEY_J => KeySymbol::Char('j'),
        Key::KEY_K => KeySymbol::Char('k'),
        Key::KEY_L => KeySymbol::Char('l'),
        Key::KEY_M => KeySymbol::Char('m'),
        Key::KEY_N => KeySymbol::Char('n'),
        Key::KEY_O => KeySymbol::Char('o'),
        Key::KEY_P => KeySymbol::Char('p'),
        Key::KEY_Q => KeySymbol::Char('q'),
        Key::KEY_R => KeySymbol::Char('r'),
        Key::KEY_S => KeySymbol::Char('s'),
        Key::KEY_T => KeySymbol::Char('t'),
        Key::KEY_U => KeySymbol::Char('u'),
        Key::KEY_V => KeySymbol::Char('v'),
        Key::KEY_W => KeySymbol::Char('w'),
        Key::KEY_X => KeySymbol::Char('x'),
        Key::KEY_Y => KeySymbol::Char('y'),
        Key::KEY_Z => KeySymbol::Char('z'),

        // Numerals
        Key::KEY_1 => KeySymbol::Char('1'),
        Key::KEY_2 => KeySymbol::Char('2'),
        Key::KEY_3 => KeySymbol::Char('3'),
        Key::KEY_4 => KeySymbol::Char('4'),
        Key::KEY_5 => KeySymbol::Char('5'),
        Key::KEY_6 => KeySymbol::Char('6'),
        Key::KEY_7 => KeySymbol::Char('7'),
        Key::KEY_8 => KeySymbol::Char('8'),
        Key::KEY_9 => KeySymbol::Char('9'),
        Key::KEY_0 => KeySymbol::Char('0'),

        // Punctuation marks
        Key::KEY_DOT => KeySymbol::Char('.'),
        Key::KEY_COMMA => KeySymbol::Char(','),
        Key::KEY_SEMICOLON => KeySymbol::Char(';'),
        Key::KEY_APOSTROPHE => KeySymbol::Char('\''),
        Key::KEY_MINUS => KeySymbol::Char('-'),
        Key::KEY_EQUAL => KeySymbol::Char('='),
        Key::KEY_LEFTBRACE => KeySymbol::Char('['),
        Key::KEY_RIGHTBRACE => KeySymbol::Char(']'),
        Key::KEY_BACKSLASH => KeySymbol::Char('\\'),
        Key::KEY_SLASH => KeySymbol::Char('/'),
        Key::KEY_BACKSPACE => KeySymbol::Char('\u{8}'),

        // Special keys
        Key::KEY_ENTER => KeySymbol::Char('\n'),
        Key::KEY_SPACE => KeySymbol::Char(' '),
        Key::KEY_TAB => KeySymbol::Char('\t'),

        // Modifier tags
        Key::KEY_LEFTSHIFT | Key::KEY_RIGHTSHIFT => KeySymbol::Modifier(ModifierKey::Shift),
        Key::KEY_CAPSLOCK => KeySymbol::Modifier(ModifierKey::Caps),
        Key::KEY_LEFTALT | Key::KEY_RIGHTALT => KeySymbol::Modifier(ModifierKey::Alt),
        Key::KEY_LEFTCTRL | Key::KEY_RIGHTCTRL => KeySymbol::Modifier(ModifierKey::Ctrl),
        Key::KEY_LEFTMETA | Key::KEY_RIGHTMETA => KeySymbol::Modifier(ModifierKey::Meta),
        Key::KEY_BACK => KeySymbol::Modifier(ModifierKey::Back),
        Key::KEY_ESC => KeySymbol::Modifier(ModifierKey::Esc),

        _ => return None,
    };

    Some(symbol)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Key::KEY_A, 'a')]
    #[case(Key::KEY_Z, 'z')]
    #[case(Key::KEY_1, '1')]
    #[case(Key::KEY_0, '0')]
    #[case(Key::KEY_DOT, '.')]
    #[case(Key::KEY_APOSTROPHE, '\'')]
    #[case(Key::KEY_BACKSLASH, '\\')]
    #[case(Key::KEY_BACKSPACE, '\u{8}')]
    #[case(Key::KEY_ENTER, '\n')]
    #[case(Key::KEY_SPACE, ' ')]
    #[case(Key::KEY_TAB, '\t')]
    fn test_character_mappings(#[case] key: Key, #[case] expected: char) {
        assert_eq!(symbol_for(key), Some(KeySymbol::Char(expected)));
    }

    #[rstest]
    #[case(Key::KEY_LEFTSHIFT, ModifierKey::Shift)]
    #[case(Key::KEY_RIGHTSHIFT, ModifierKey::Shift)]
    #[case(Key::KEY_CAPSLOCK, ModifierKey::Caps)]
    #[case(Key::KEY_LEFTALT, ModifierKey::Alt)]
    #[case(Key::KEY_RIGHTALT, ModifierKey::Alt)]
    #[case(Key::KEY_LEFTCTRL, ModifierKey::Ctrl)]
    #[case(Key::KEY_RIGHTCTRL, ModifierKey::Ctrl)]
    #[case(Key::KEY_LEFTMETA, ModifierKey::Meta)]
    #[case(Key::KEY_RIGHTMETA, ModifierKey::Meta)]
    #[case(Key::KEY_BACK, ModifierKey::Back)]
    #[case(Key::KEY_ESC, ModifierKey::Esc)]
    fn test_modifier_mappings(#[case] key: Key, #[case] expected: ModifierKey) {
        assert_eq!(symbol_for(key), Some(KeySymbol::Modifier(expected)));
    }

    #[test]
    fn test_unmapped_keys() {
        assert_eq!(symbol_for(Key::KEY_F1), None);
        assert_eq!(symbol_for(Key::KEY_KP1), None);
        assert_eq!(symbol_for(Key::KEY_VOLUMEUP), None);
    }

    #[test]
    fn test_symbol_accessors() {
        assert_eq!(KeySymbol::Char('a').as_char(), Some('a'));
        assert!(!KeySymbol::Char('a').is_modifier());

        let shift = KeySymbol::Modifier(ModifierKey::Shift);
        assert_eq!(shift.as_char(), None);
        assert!(shift.is_modifier());
    }
}
