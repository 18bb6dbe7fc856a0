//! Hardware access layer for the scangate station.
//!
//! This crate owns every boundary where the pipeline touches the outside
//! world, behind narrow traits so the supervisor can be driven by mocks:
//!
//! - [`InputPort`]: locate a scanning device and open it for exclusive
//!   reading. The USB implementation ([`UsbScannerPort`]) combines the
//!   privileged shell enumeration ([`UsbDeviceLocator`]) with a grabbed
//!   evdev device ([`EvdevScanner`]).
//! - [`EventSource`]: a stream of raw key transitions from one opened
//!   device session.
//! - [`RelayPin`]: the digital output driving the gate relay, implemented
//!   on the Raspberry Pi GPIO header ([`GpioRelayPin`]).
//!
//! Mock implementations with cloneable control handles live in [`mock`]
//! for development and testing without physical hardware.
//!
//! Device reads are blocking at the kernel boundary; [`EvdevScanner`]
//! bridges them onto the async runtime through a dedicated blocking task
//! feeding a channel, so a silent device parks only that task.
//!
//! [`InputPort`]: traits::InputPort
//! [`EventSource`]: traits::EventSource
//! [`RelayPin`]: traits::RelayPin

pub mod gpio;
pub mod locator;
pub mod mock;
pub mod scanner;
pub mod traits;

pub use gpio::GpioRelayPin;
pub use locator::UsbDeviceLocator;
pub use scanner::{EvdevScanner, UsbScannerPort};
pub use traits::{EventSource, InputPort, RelayPin};
