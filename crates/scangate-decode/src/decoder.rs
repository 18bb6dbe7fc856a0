//! Stateful raw-event to character translation.

use crate::keymap::{KeySymbol, ModifierKey, symbol_for};
use evdev::Key;
use serde::{Deserialize, Serialize};

/// Key transition as reported by the input subsystem.
///
/// Mirrors the kernel's event values: 0 = released, 1 = pressed,
/// 2 = autorepeat while held.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyState {
    Released,
    Pressed,
    Autorepeat,
}

impl KeyState {
    /// Translate a raw event value into a key state.
    ///
    /// Returns `None` for values outside the kernel's 0/1/2 contract.
    #[must_use]
    pub fn from_value(value: i32) -> Option<Self> {
        match value {
            0 => Some(KeyState::Released),
            1 => Some(KeyState::Pressed),
            2 => Some(KeyState::Autorepeat),
            _ => None,
        }
    }

    /// Returns `true` while the key is physically down.
    ///
    /// Autorepeat events only occur for held keys, so they count as held.
    #[must_use]
    pub fn is_held(self) -> bool {
        matches!(self, KeyState::Pressed | KeyState::Autorepeat)
    }
}

/// One raw key transition from the scanning device.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawKeyEvent {
    /// Physical key identifier.
    pub key: Key,

    /// Press, release, or autorepeat.
    pub state: KeyState,
}

impl RawKeyEvent {
    /// Create a raw key event.
    #[must_use]
    pub fn new(key: Key, state: KeyState) -> Self {
        Self { key, state }
    }

    /// Convenience constructor for a press event.
    #[must_use]
    pub fn pressed(key: Key) -> Self {
        Self::new(key, KeyState::Pressed)
    }

    /// Convenience constructor for a release event.
    #[must_use]
    pub fn released(key: Key) -> Self {
        Self::new(key, KeyState::Released)
    }
}

/// Modifier hold state tracked across events within one device session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ModifierState {
    /// Whether a shift key is currently held.
    pub shift_active: bool,
}

/// Stateful translator from raw key events to characters.
///
/// The decoder owns the modifier state for one device session. It must see
/// every event (presses, releases, and autorepeats) because shift hold
/// state is tracked on both edges; character output itself only happens on
/// press transitions. Shift affects only the next non-modifier key, never
/// retroactively: the case decision is made at the moment the key event is
/// decoded.
///
/// A fresh decoder is created each time the device is (re)opened, so stale
/// modifier state never leaks across sessions.
///
/// # Examples
///
/// ```
/// use evdev::Key;
/// use scangate_decode::{KeyDecoder, RawKeyEvent};
///
/// let mut decoder = KeyDecoder::new();
///
/// assert_eq!(decoder.decode(RawKeyEvent::pressed(Key::KEY_A)), Some('a'));
///
/// decoder.decode(RawKeyEvent::pressed(Key::KEY_LEFTSHIFT));
/// assert_eq!(decoder.decode(RawKeyEvent::pressed(Key::KEY_A)), Some('A'));
///
/// decoder.decode(RawKeyEvent::released(Key::KEY_LEFTSHIFT));
/// assert_eq!(decoder.decode(RawKeyEvent::pressed(Key::KEY_A)), Some('a'));
/// ```
#[derive(Debug, Default)]
pub struct KeyDecoder {
    modifiers: ModifierState,
}

impl KeyDecoder {
    /// Create a decoder with no modifiers held.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current modifier state, for diagnostics and tests.
    #[must_use]
    pub fn modifiers(&self) -> ModifierState {
        self.modifiers
    }

    /// Decode one raw key event into at most one character.
    ///
    /// Returns `None` for modifier keys (shift updates hold state; the
    /// other tags are recognized no-ops), for release and autorepeat
    /// transitions of non-modifier keys, and for unmapped codes.
    ///
    /// Shifted characters are emitted in ASCII uppercase; control
    /// characters (newline, tab, backspace) and symbols without an ASCII
    /// uppercase form pass through unchanged.
    pub fn decode(&mut self, event: RawKeyEvent) -> Option<char> {
        let symbol = symbol_for(event.key)?;

        // Shift is tracked on every edge so hold state always reflects the
        // last press/release, not a toggle count.
        if symbol == KeySymbol::Modifier(ModifierKey::Shift) {
            self.modifiers.shift_active = event.state.is_held();
            return None;
        }

        if event.state != KeyState::Pressed {
            return None;
        }

        match symbol {
            KeySymbol::Char(c) if self.modifiers.shift_active => Some(c.to_ascii_uppercase()),
            KeySymbol::Char(c) => Some(c),
            KeySymbol::Modifier(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(key: Key) -> RawKeyEvent {
        RawKeyEvent::pressed(key)
    }

    fn release(key: Key) -> RawKeyEvent {
        RawKeyEvent::released(key)
    }

    #[test]
    fn test_plain_press_decodes_lowercase() {
        let mut decoder = KeyDecoder::new();
        assert_eq!(decoder.decode(press(Key::KEY_A)), Some('a'));
        assert_eq!(decoder.decode(press(Key::KEY_5)), Some('5'));
    }

    #[test]
    fn test_release_emits_nothing() {
        let mut decoder = KeyDecoder::new();
        assert_eq!(decoder.decode(release(Key::KEY_A)), None);
    }

    #[test]
    fn test_autorepeat_of_printable_emits_nothing() {
        let mut decoder = KeyDecoder::new();
        assert_eq!(
            decoder.decode(RawKeyEvent::new(Key::KEY_A, KeyState::Autorepeat)),
            None
        );
    }

    #[test]
    fn test_shift_hold_uppercases_letters() {
        let mut decoder = KeyDecoder::new();

        assert_eq!(decoder.decode(press(Key::KEY_LEFTSHIFT)), None);
        assert_eq!(decoder.decode(press(Key::KEY_A)), Some('A'));
        assert_eq!(decoder.decode(press(Key::KEY_B)), Some('B'));

        assert_eq!(decoder.decode(release(Key::KEY_LEFTSHIFT)), None);
        assert_eq!(decoder.decode(press(Key::KEY_A)), Some('a'));
    }

    #[test]
    fn test_right_shift_tracked_too() {
        let mut decoder = KeyDecoder::new();
        decoder.decode(press(Key::KEY_RIGHTSHIFT));
        assert_eq!(decoder.decode(press(Key::KEY_Q)), Some('Q'));
        decoder.decode(release(Key::KEY_RIGHTSHIFT));
        assert_eq!(decoder.decode(press(Key::KEY_Q)), Some('q'));
    }

    #[test]
    fn test_shift_repress_is_idempotent() {
        let mut decoder = KeyDecoder::new();

        // Two presses in a row without a release must not toggle the state
        // off; state reflects the last edge, not a toggle count.
        decoder.decode(press(Key::KEY_LEFTSHIFT));
        decoder.decode(press(Key::KEY_LEFTSHIFT));
        assert!(decoder.modifiers().shift_active);
        assert_eq!(decoder.decode(press(Key::KEY_A)), Some('A'));

        decoder.decode(release(Key::KEY_LEFTSHIFT));
        assert!(!decoder.modifiers().shift_active);
    }

    #[test]
    fn test_shift_autorepeat_keeps_state_held() {
        let mut decoder = KeyDecoder::new();
        decoder.decode(press(Key::KEY_LEFTSHIFT));
        decoder.decode(RawKeyEvent::new(Key::KEY_LEFTSHIFT, KeyState::Autorepeat));
        assert!(decoder.modifiers().shift_active);
    }

    #[test]
    fn test_shift_does_not_alter_control_characters() {
        let mut decoder = KeyDecoder::new();
        decoder.decode(press(Key::KEY_LEFTSHIFT));

        // Enter still terminates; tab and backspace stay control characters.
        assert_eq!(decoder.decode(press(Key::KEY_ENTER)), Some('\n'));
        assert_eq!(decoder.decode(press(Key::KEY_TAB)), Some('\t'));
        assert_eq!(decoder.decode(press(Key::KEY_BACKSPACE)), Some('\u{8}'));
    }

    #[test]
    fn test_shift_leaves_digits_unchanged() {
        let mut decoder = KeyDecoder::new();
        decoder.decode(press(Key::KEY_LEFTSHIFT));
        assert_eq!(decoder.decode(press(Key::KEY_1)), Some('1'));
        assert_eq!(decoder.decode(press(Key::KEY_MINUS)), Some('-'));
    }

    #[test]
    fn test_non_shift_modifiers_are_silent_noops() {
        let mut decoder = KeyDecoder::new();

        for key in [
            Key::KEY_LEFTCTRL,
            Key::KEY_RIGHTALT,
            Key::KEY_LEFTMETA,
            Key::KEY_CAPSLOCK,
            Key::KEY_ESC,
            Key::KEY_BACK,
        ] {
            assert_eq!(decoder.decode(press(key)), None);
            assert_eq!(decoder.decode(release(key)), None);
        }

        // And they must not have disturbed shift tracking.
        assert!(!decoder.modifiers().shift_active);
        assert_eq!(decoder.decode(press(Key::KEY_A)), Some('a'));
    }

    #[test]
    fn test_unmapped_key_emits_nothing() {
        let mut decoder = KeyDecoder::new();
        assert_eq!(decoder.decode(press(Key::KEY_F12)), None);
    }
}
