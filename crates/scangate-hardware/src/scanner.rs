//! Evdev-backed event source and the USB input port.

use crate::locator::UsbDeviceLocator;
use crate::traits::{EventSource, InputPort};
use evdev::{Device, EventType, Key};
use scangate_core::{DevicePath, Error, Result};
use scangate_decode::{KeyState, RawKeyEvent};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// One opened, exclusively-grabbed scanning device.
///
/// The kernel read is blocking, so the device is serviced by a dedicated
/// blocking task that forwards key events into a channel; `next_event`
/// awaits the channel. When the device becomes unreadable the task
/// forwards the classified error and exits, which also closes the channel.
///
/// Grabbing the device keeps scanned codes out of every other consumer of
/// the input subsystem (a scanner is a keyboard; without the grab each
/// badge would be typed into whatever has focus).
#[derive(Debug)]
pub struct EvdevScanner {
    event_rx: mpsc::UnboundedReceiver<Result<RawKeyEvent>>,

    /// Device name as reported by the kernel, for diagnostics.
    name: String,
}

impl EvdevScanner {
    /// Open and grab the device at `path`, then start servicing it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DeviceMissing`] or [`Error::PermissionDenied`]
    /// when the device file cannot be opened, classified from the I/O
    /// failure; grab failures surface the same way.
    pub fn open(path: &DevicePath) -> Result<Self> {
        let mut device =
            Device::open(path.as_str()).map_err(|e| Error::from_device_io(path.as_str(), e))?;
        device
            .grab()
            .map_err(|e| Error::from_device_io(path.as_str(), e))?;

        let name = device
            .name()
            .unwrap_or("unnamed input device")
            .to_string();
        info!(device = %name, path = %path, "listening to scanning device");

        let (event_tx, event_rx) = mpsc::unbounded_channel();
        let read_path = path.clone();
        tokio::task::spawn_blocking(move || Self::service(device, read_path, event_tx));

        Ok(Self { event_rx, name })
    }

    /// Blocking read loop: forward key events until the device dies or the
    /// receiver is dropped.
    fn service(
        mut device: Device,
        path: DevicePath,
        event_tx: mpsc::UnboundedSender<Result<RawKeyEvent>>,
    ) {
        loop {
            let events = match device.fetch_events() {
                Ok(events) => events,
                Err(e) => {
                    let err = Error::from_device_io(path.as_str(), e);
                    warn!(path = %path, error = %err, "device read failed");
                    let _ = event_tx.send(Err(err));
                    return;
                }
            };

            for event in events {
                if event.event_type() != EventType::KEY {
                    continue;
                }
                let Some(state) = KeyState::from_value(event.value()) else {
                    continue;
                };
                let raw = RawKeyEvent::new(Key::new(event.code()), state);
                if event_tx.send(Ok(raw)).is_err() {
                    // Session torn down; stop servicing the device.
                    debug!(path = %path, "event receiver dropped, releasing device");
                    return;
                }
            }
        }
    }

    /// Kernel-reported device name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl EventSource for EvdevScanner {
    async fn next_event(&mut self) -> Result<RawKeyEvent> {
        match self.event_rx.recv().await {
            Some(result) => result,
            None => Err(Error::Disconnected {
                device: self.name.clone(),
            }),
        }
    }
}

/// The production input port: shell enumeration plus evdev.
///
/// # Examples
///
/// ```no_run
/// use scangate_hardware::{InputPort, UsbScannerPort};
///
/// # async fn example() -> scangate_core::Result<()> {
/// let mut port = UsbScannerPort::new();
/// let path = port.locate().await?;
/// let source = port.open(&path).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct UsbScannerPort {
    locator: UsbDeviceLocator,
}

impl UsbScannerPort {
    /// Create a port using the standard USB enumeration.
    #[must_use]
    pub fn new() -> Self {
        Self {
            locator: UsbDeviceLocator::new(),
        }
    }

    /// Create a port with a custom locator.
    #[must_use]
    pub fn with_locator(locator: UsbDeviceLocator) -> Self {
        Self { locator }
    }
}

impl InputPort for UsbScannerPort {
    type Source = EvdevScanner;

    async fn locate(&mut self) -> Result<DevicePath> {
        self.locator.locate().await
    }

    async fn open(&mut self, path: &DevicePath) -> Result<Self::Source> {
        EvdevScanner::open(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_open_missing_device_is_classified() {
        let path = DevicePath::new("/dev/input/event-does-not-exist");
        let err = EvdevScanner::open(&path).unwrap_err();
        assert!(matches!(err, Error::DeviceMissing { .. }));
    }

    #[tokio::test]
    async fn test_port_open_propagates_classification() {
        let mut port = UsbScannerPort::new();
        let path = DevicePath::new("/dev/input/event-does-not-exist");
        let err = port.open(&path).await.unwrap_err();
        assert!(matches!(err, Error::DeviceMissing { .. }));
    }
}
