//! Mock scanning device for testing and development.

use crate::traits::EventSource;
use evdev::Key;
use scangate_core::{Error, Result};
use scangate_decode::RawKeyEvent;
use tokio::sync::mpsc;

/// Mock scanning device fed through an internal channel.
///
/// Simulates one opened device session. Tests send key events (or whole
/// scanned codes) through a [`MockScannerHandle`]; the supervisor reads
/// them back as if they came from the kernel. Dropping the handle closes
/// the channel, which reads as a disconnected device.
///
/// # Examples
///
/// ```
/// use scangate_hardware::mock::MockScanner;
/// use scangate_hardware::traits::EventSource;
///
/// #[tokio::main]
/// async fn main() -> scangate_core::Result<()> {
///     let (mut scanner, handle) = MockScanner::new();
///
///     handle.send_code("qr1")?;
///
///     // First event: press of 'q'
///     let event = scanner.next_event().await?;
///     assert_eq!(event.key, evdev::Key::KEY_Q);
///     Ok(())
/// }
/// ```
#[derive(Debug)]
pub struct MockScanner {
    event_rx: mpsc::UnboundedReceiver<Result<RawKeyEvent>>,
    name: String,
}

impl MockScanner {
    /// Create a mock scanner with the default name.
    pub fn new() -> (Self, MockScannerHandle) {
        Self::with_name("Mock Scanner".to_string())
    }

    /// Create a mock scanner with a custom name.
    pub fn with_name(name: String) -> (Self, MockScannerHandle) {
        let (event_tx, event_rx) = mpsc::unbounded_channel();

        let scanner = Self {
            event_rx,
            name: name.clone(),
        };
        let handle = MockScannerHandle { event_tx, name };

        (scanner, handle)
    }

    /// Device name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl EventSource for MockScanner {
    async fn next_event(&mut self) -> Result<RawKeyEvent> {
        match self.event_rx.recv().await {
            Some(result) => result,
            None => Err(Error::Disconnected {
                device: self.name.clone(),
            }),
        }
    }
}

/// Handle for feeding a mock scanner.
///
/// Can be cloned and shared across tasks. Events are queued, so a test
/// may script an entire session up front before the component under test
/// starts reading.
#[derive(Debug, Clone)]
pub struct MockScannerHandle {
    event_tx: mpsc::UnboundedSender<Result<RawKeyEvent>>,
    name: String,
}

impl MockScannerHandle {
    /// Send one raw key event.
    ///
    /// # Errors
    ///
    /// Returns an error if the scanner has been dropped.
    pub fn send_event(&self, event: RawKeyEvent) -> Result<()> {
        self.event_tx
            .send(Ok(event))
            .map_err(|_| Error::Disconnected {
                device: self.name.clone(),
            })
    }

    /// Send a press/release pair for one key.
    ///
    /// # Errors
    ///
    /// Returns an error if the scanner has been dropped.
    pub fn send_key(&self, key: Key) -> Result<()> {
        self.send_event(RawKeyEvent::pressed(key))?;
        self.send_event(RawKeyEvent::released(key))
    }

    /// Send the key sequence a keyboard-class scanner would emit for
    /// `text`, wrapping uppercase letters in shift press/release pairs.
    ///
    /// Supports ASCII letters, digits, space, tab and newline.
    ///
    /// # Errors
    ///
    /// Returns an error if a character has no key sequence or the scanner
    /// has been dropped.
    pub fn send_text(&self, text: &str) -> Result<()> {
        for c in text.chars() {
            let (key, shifted) = key_for_char(c)
                .ok_or_else(|| Error::Config(format!("no key sequence for character {c:?}")))?;

            if shifted {
                self.send_event(RawKeyEvent::pressed(Key::KEY_LEFTSHIFT))?;
                self.send_key(key)?;
                self.send_event(RawKeyEvent::released(Key::KEY_LEFTSHIFT))?;
            } else {
                self.send_key(key)?;
            }
        }
        Ok(())
    }

    /// Send a complete scanned code followed by the terminator key.
    ///
    /// # Errors
    ///
    /// Returns an error if a character has no key sequence or the scanner
    /// has been dropped.
    pub fn send_code(&self, code: &str) -> Result<()> {
        self.send_text(code)?;
        self.send_key(Key::KEY_ENTER)
    }

    /// Make the scanner's next read fail with `err`, as if the device
    /// became unreadable.
    pub fn fail(&self, err: Error) {
        let _ = self.event_tx.send(Err(err));
    }

    /// Device name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Reverse lookup from a character to the key that produces it, plus
/// whether shift must be held.
fn key_for_char(c: char) -> Option<(Key, bool)> {
    if c.is_ascii_uppercase() {
        let (key, _) = key_for_char(c.to_ascii_lowercase())?;
        return Some((key, true));
    }

    let key = match c {
        'a' => Key::KEY_A,
        'b' => Key::KEY_B,
        'c' => Key::KEY_C,
        'd' => Key::KEY_D,
        'e' => Key::KEY_E,
        'f' => Key::KEY_F,
        'g' => Key::KEY_G,
        'h' => Key::KEY_H,
        'i' => Key::KEY_I,
        'j' => Key::KEY_J,
        'k' => Key::KEY_K,
        'l' => Key::KEY_L,
        'm' => Key::KEY_M,
        'n' => Key::KEY_N,
        'o' => Key::KEY_O,
        'p' => Key::KEY_P,
        'q' => Key::KEY_Q,
        'r' => Key::KEY_R,
        's' => Key::KEY_S,
        't' => Key::KEY_T,
        'u' => Key::KEY_U,
        'v' => Key::KEY_V,
        'w' => Key::KEY_W,
        'x' => Key::KEY_X,
        'y' => Key::KEY_Y,
        'z' => Key::KEY_Z,
        '0' => Key::KEY_0,
        '1' => Key::KEY_1,
        '2' => Key::KEY_2,
        '3' => Key::KEY_3,
        '4' => Key::KEY_4,
        '5' => Key::KEY_5,
        '6' => Key::KEY_6,
        '7' => Key::KEY_7,
        '8' => Key::KEY_8,
        '9' => Key::KEY_9,
        ' ' => Key::KEY_SPACE,
        '\t' => Key::KEY_TAB,
        '\n' => Key::KEY_ENTER,
        _ => return None,
    };

    Some((key, false))
}

#[cfg(test)]
mod tests {
    use super::*;
    use scangate_decode::{KeyDecoder, LineAccumulator};

    async fn decode_all(scanner: &mut MockScanner, events: usize) -> String {
        let mut decoder = KeyDecoder::new();
        let mut out = String::new();
        for _ in 0..events {
            let event = scanner.next_event().await.unwrap();
            if let Some(ch) = decoder.decode(event) {
                out.push(ch);
            }
        }
        out
    }

    #[tokio::test]
    async fn test_send_key_emits_press_release() {
        let (mut scanner, handle) = MockScanner::new();
        handle.send_key(Key::KEY_Q).unwrap();

        let press = scanner.next_event().await.unwrap();
        let release = scanner.next_event().await.unwrap();
        assert_eq!(press, RawKeyEvent::pressed(Key::KEY_Q));
        assert_eq!(release, RawKeyEvent::released(Key::KEY_Q));
    }

    #[tokio::test]
    async fn test_send_text_roundtrips_through_decoder() {
        let (mut scanner, handle) = MockScanner::new();
        handle.send_text("aB3").unwrap();

        // 'a': 2 events, 'B': 4 (shift wrap), '3': 2
        let decoded = decode_all(&mut scanner, 8).await;
        assert_eq!(decoded, "aB3");
    }

    #[tokio::test]
    async fn test_send_code_terminates_line() {
        let (mut scanner, handle) = MockScanner::new();
        handle.send_code("QR1").unwrap();

        let mut decoder = KeyDecoder::new();
        let mut line = LineAccumulator::new();
        loop {
            let event = scanner.next_event().await.unwrap();
            if let Some(ch) = decoder.decode(event) {
                if let Some(code) = line.feed(ch) {
                    assert_eq!(code.as_str(), "QR1");
                    return;
                }
            }
        }
    }

    #[tokio::test]
    async fn test_unsupported_character_is_rejected() {
        let (_scanner, handle) = MockScanner::new();
        let err = handle.send_text("é").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[tokio::test]
    async fn test_fail_forwards_error() {
        let (mut scanner, handle) = MockScanner::new();
        handle.fail(Error::DeviceMissing {
            path: "/dev/input/event3".to_string(),
        });

        let err = scanner.next_event().await.unwrap_err();
        assert!(matches!(err, Error::DeviceMissing { .. }));
    }

    #[tokio::test]
    async fn test_dropped_handle_reads_as_disconnected() {
        let (mut scanner, handle) = MockScanner::new();
        drop(handle);

        let err = scanner.next_event().await.unwrap_err();
        assert!(matches!(err, Error::Disconnected { .. }));
    }
}
