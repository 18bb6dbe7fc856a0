//! Terminator-delimited accumulation of decoded characters.

use scangate_core::ScannedCode;
use scangate_core::constants::TERMINATOR;

/// Collects decoded characters into one in-progress code.
///
/// At most one code is in progress at any time: the terminator always
/// fully drains the buffer before the next character is accepted. All
/// non-terminator characters are appended literally; backspace does not
/// erase and tab is kept as-is, matching what the physical scanner
/// actually emitted.
///
/// # Examples
///
/// ```
/// use scangate_decode::LineAccumulator;
///
/// let mut line = LineAccumulator::new();
/// assert_eq!(line.feed('Q'), None);
/// assert_eq!(line.feed('R'), None);
/// assert_eq!(line.feed('1'), None);
///
/// let code = line.feed('\n').unwrap();
/// assert_eq!(code.as_str(), "QR1");
/// assert!(line.is_empty());
/// ```
#[derive(Debug, Default)]
pub struct LineAccumulator {
    buffer: String,
}

impl LineAccumulator {
    /// Create an accumulator with an empty buffer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one decoded character.
    ///
    /// Returns the completed code when `ch` is the terminator (the buffer
    /// is drained and reset, and may be empty), `None` otherwise.
    pub fn feed(&mut self, ch: char) -> Option<ScannedCode> {
        if ch == TERMINATOR {
            return Some(ScannedCode::new(std::mem::take(&mut self.buffer)));
        }
        self.buffer.push(ch);
        None
    }

    /// Characters currently buffered.
    #[must_use]
    pub fn buffered(&self) -> &str {
        &self.buffer
    }

    /// Returns `true` if no code is in progress.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Discard any in-progress code.
    ///
    /// Used when a device session is torn down so a partial scan never
    /// bleeds into the next session.
    pub fn clear(&mut self) {
        self.buffer.clear();
    }
}
