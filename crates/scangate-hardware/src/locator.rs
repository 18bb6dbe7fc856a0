//! USB scanning-device discovery via privileged shell enumeration.

use scangate_core::{DevicePath, Error, Result};
use tokio::process::Command;
use tracing::debug;

/// Shell pipeline that enumerates USB-attached input devices.
///
/// Walks the kernel's USB device tree, resolves each device node name
/// through udevadm, keeps those exposed under `input/`, and prints the
/// device file path for every device carrying a non-empty serial
/// identifier. In normal operation exactly one scanner is attached, so
/// stdout holds a single path.
const DISCOVERY_SCRIPT: &str = r#"
find /sys/bus/usb/devices/usb*/ -name dev | while IFS= read -r sysdevpath; do
    syspath="${sysdevpath%/dev}"
    devname="$(udevadm info -q name -p "$syspath")"
    if [[ "$devname" == "input/"* ]]; then
        eval "$(udevadm info -q property --export -p "$syspath")"
        if [[ -n "$ID_SERIAL" ]]; then
            echo "/dev/$devname"
        fi
    fi
done
"#;

/// Locates the USB scanning device through the system enumeration script.
///
/// Discovery is a one-shot operation with no internal retry; the
/// supervisor decides when to try again. Any diagnostic output on stderr
/// marks the attempt as failed even when a path was also produced; the
/// locator reports the failure rather than guessing which half to trust.
#[derive(Debug, Clone)]
pub struct UsbDeviceLocator {
    script: String,
}

impl UsbDeviceLocator {
    /// Create a locator running the standard USB enumeration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_script(DISCOVERY_SCRIPT)
    }

    /// Create a locator running a custom enumeration command.
    ///
    /// Used by tests to substitute the privileged system call with a
    /// scripted stand-in.
    #[must_use]
    pub fn with_script(script: impl Into<String>) -> Self {
        Self {
            script: script.into(),
        }
    }

    /// Run the enumeration and return the device path it printed.
    ///
    /// The exit status of the script is not consulted: stderr governs
    /// failure, and an empty trimmed stdout means no device was found.
    ///
    /// # Errors
    ///
    /// - [`Error::DiscoveryFailed`] if the script wrote anything to stderr.
    /// - [`Error::DeviceNotFound`] if stdout was empty after trimming.
    /// - [`Error::Io`] if the shell itself could not be spawned.
    pub async fn locate(&self) -> Result<DevicePath> {
        let output = Command::new("bash")
            .arg("-c")
            .arg(&self.script)
            .output()
            .await?;

        let stderr = String::from_utf8_lossy(&output.stderr);
        if !stderr.is_empty() {
            return Err(Error::DiscoveryFailed {
                stderr: stderr.trim_end().to_string(),
            });
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        let path = stdout.trim();
        if path.is_empty() {
            return Err(Error::DeviceNotFound);
        }

        debug!(path, "discovery produced device path");
        Ok(DevicePath::new(path))
    }
}

impl Default for UsbDeviceLocator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_locate_returns_trimmed_stdout() {
        let locator = UsbDeviceLocator::with_script("echo '/dev/input/event7'");
        let path = locator.locate().await.unwrap();
        assert_eq!(path.as_str(), "/dev/input/event7");
    }

    #[tokio::test]
    async fn test_stderr_fails_even_with_stdout() {
        let locator =
            UsbDeviceLocator::with_script("echo '/dev/input/event7'; echo 'boom' >&2");
        let err = locator.locate().await.unwrap_err();
        match err {
            Error::DiscoveryFailed { stderr } => assert_eq!(stderr, "boom"),
            other => panic!("expected DiscoveryFailed, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_empty_stdout_is_not_found() {
        let locator = UsbDeviceLocator::with_script("true");
        let err = locator.locate().await.unwrap_err();
        assert!(matches!(err, Error::DeviceNotFound));
    }

    #[tokio::test]
    async fn test_whitespace_only_stdout_is_not_found() {
        let locator = UsbDeviceLocator::with_script("printf '\\n  \\n'");
        let err = locator.locate().await.unwrap_err();
        assert!(matches!(err, Error::DeviceNotFound));
    }

    #[tokio::test]
    async fn test_nonzero_exit_without_stderr_still_uses_stdout() {
        // The enumeration's exit status is not part of the contract.
        let locator = UsbDeviceLocator::with_script("echo '/dev/input/event2'; exit 3");
        let path = locator.locate().await.unwrap();
        assert_eq!(path.as_str(), "/dev/input/event2");
    }
}
