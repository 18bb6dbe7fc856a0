use serde::{Deserialize, Serialize};
use std::fmt;
use subtle::ConstantTimeEq;

/// Path to an input device file (e.g. `/dev/input/event3`).
///
/// The path is only valid for the duration of one device session: once the
/// read loop terminates abnormally, the path must be re-fetched through
/// discovery before the device is opened again.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DevicePath(String);

impl DevicePath {
    /// Wrap a device path as reported by discovery.
    #[must_use]
    pub fn new(path: impl Into<String>) -> Self {
        DevicePath(path.into())
    }

    /// Get the path as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DevicePath {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for DevicePath {
    fn from(s: &str) -> Self {
        DevicePath(s.to_string())
    }
}

/// A completed scanned code, drained from the line accumulator when the
/// terminator key arrives.
///
/// A code may be empty: pressing the terminator on an empty buffer still
/// produces (and submits) an empty code.
///
/// # Security
/// Codes act as credentials, so this type implements constant-time
/// comparison to prevent timing attacks when codes are compared.
#[derive(Debug, Clone, Eq, Serialize, Deserialize)]
pub struct ScannedCode(String);

impl ScannedCode {
    /// Wrap a completed line as a scanned code.
    #[must_use]
    pub fn new(code: impl Into<String>) -> Self {
        ScannedCode(code.into())
    }

    /// Get the code as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` if the code contains no characters.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Code length in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl fmt::Display for ScannedCode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ScannedCode {
    fn from(s: &str) -> Self {
        ScannedCode(s.to_string())
    }
}

/// Constant-time comparison implementation for ScannedCode
///
/// This prevents timing attacks by ensuring comparison takes the same time
/// regardless of where the strings differ.
impl PartialEq for ScannedCode {
    fn eq(&self, other: &Self) -> bool {
        self.0.as_bytes().ct_eq(other.0.as_bytes()).into()
    }
}

/// Hash implementation for ScannedCode
///
/// Implements standard hashing for use in hash-based collections.
impl std::hash::Hash for ScannedCode {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.0.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_device_path_roundtrip() {
        let path = DevicePath::new("/dev/input/event5");
        assert_eq!(path.as_str(), "/dev/input/event5");
        assert_eq!(path.to_string(), "/dev/input/event5");
    }

    #[test]
    fn test_scanned_code_equality() {
        let a = ScannedCode::new("QR1");
        let b = ScannedCode::from("QR1");
        let c = ScannedCode::new("QR2");
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_scanned_code_empty() {
        let code = ScannedCode::new("");
        assert!(code.is_empty());
        assert_eq!(code.len(), 0);
        assert_eq!(code.as_str(), "");
    }

    #[test]
    fn test_scanned_code_preserves_control_characters() {
        // Backspace and tab are kept literally; no editing semantics.
        let code = ScannedCode::new("AB\u{8}\tC");
        assert_eq!(code.as_str(), "AB\u{8}\tC");
        assert_eq!(code.len(), 5);
    }
}
