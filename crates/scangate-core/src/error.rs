use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    // Discovery errors
    #[error("No USB input device found")]
    DeviceNotFound,

    #[error("Device discovery failed: {stderr}")]
    DiscoveryFailed { stderr: String },

    // Device access errors
    #[error("Input device missing: {path}")]
    DeviceMissing { path: String },

    #[error("Permission denied while accessing {path}; run with sufficient privileges")]
    PermissionDenied { path: String },

    #[error("Device disconnected: {device}")]
    Disconnected { device: String },

    // Validation errors
    #[error("Validation transport error: {message}")]
    Transport { message: String },

    // Actuation errors
    #[error("Relay actuation failed: {message}")]
    Actuation { message: String },

    // Supervisor errors
    #[error("Invalid state transition from {from} to {to}")]
    InvalidStateTransition { from: String, to: String },

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Create a transport error from any displayable cause.
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    /// Create an actuation error from any displayable cause.
    pub fn actuation(message: impl Into<String>) -> Self {
        Self::Actuation {
            message: message.into(),
        }
    }

    /// Classify an I/O failure against a device path.
    ///
    /// Missing-file and permission failures get dedicated variants so the
    /// supervisor can log which case occurred; everything else stays a
    /// plain [`Error::Io`].
    pub fn from_device_io(path: &str, err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => Self::DeviceMissing {
                path: path.to_string(),
            },
            std::io::ErrorKind::PermissionDenied => Self::PermissionDenied {
                path: path.to_string(),
            },
            _ => Self::Io(err),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_device_io_classification() {
        let err = Error::from_device_io(
            "/dev/input/event3",
            std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        );
        assert!(matches!(err, Error::DeviceMissing { .. }));
        assert_eq!(err.to_string(), "Input device missing: /dev/input/event3");

        let err = Error::from_device_io(
            "/dev/input/event3",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "nope"),
        );
        assert!(matches!(err, Error::PermissionDenied { .. }));

        let err = Error::from_device_io(
            "/dev/input/event3",
            std::io::Error::new(std::io::ErrorKind::Interrupted, "eintr"),
        );
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_discovery_failed_display() {
        let err = Error::DiscoveryFailed {
            stderr: "udevadm: not found".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Device discovery failed: udevadm: not found"
        );
    }

    #[test]
    fn test_transport_constructor() {
        let err = Error::transport("connection refused");
        assert!(matches!(err, Error::Transport { .. }));
        assert_eq!(
            err.to_string(),
            "Validation transport error: connection refused"
        );
    }
}
