//! Key-event decoding for keyboard-class scanning devices.
//!
//! A USB hand scanner presents itself as a keyboard: every scanned symbol
//! arrives as a sequence of raw key press/release events, with shifted
//! symbols wrapped in shift press/release pairs and each code terminated
//! by an enter key. This crate turns that raw stream back into logical
//! codes in two stages:
//!
//! 1. [`KeyDecoder`]: a stateful translator from raw key events to
//!    characters, tracking the shift modifier across events.
//! 2. [`LineAccumulator`]: collects decoded characters until the
//!    terminator arrives, then emits a completed [`ScannedCode`].
//!
//! Both stages are pure in-memory state machines with no device or I/O
//! dependencies, so decode sequences are deterministic to test.
//!
//! ```
//! use evdev::Key;
//! use scangate_decode::{KeyDecoder, LineAccumulator, RawKeyEvent};
//!
//! let mut decoder = KeyDecoder::new();
//! let mut line = LineAccumulator::new();
//!
//! let mut completed = None;
//! for key in [Key::KEY_Q, Key::KEY_R, Key::KEY_1, Key::KEY_ENTER] {
//!     if let Some(ch) = decoder.decode(RawKeyEvent::pressed(key)) {
//!         completed = line.feed(ch);
//!     }
//! }
//!
//! assert_eq!(completed.unwrap().as_str(), "qr1");
//! ```
//!
//! [`ScannedCode`]: scangate_core::ScannedCode

pub mod decoder;
pub mod keymap;
pub mod line;

pub use decoder::{KeyDecoder, KeyState, ModifierState, RawKeyEvent};
pub use keymap::{KeySymbol, ModifierKey, symbol_for};
pub use line::LineAccumulator;
