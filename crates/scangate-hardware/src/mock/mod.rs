//! Mock hardware implementations for testing and development.
//!
//! Each mock comes with a cloneable control handle: the mock itself is
//! handed to the component under test, while the handle stays with the
//! test to feed input or inspect output.

mod port;
mod relay;
mod scanner;

pub use port::{MockInputPort, MockPortStats};
pub use relay::{MockRelayHandle, MockRelayPin, PinLevel, PinTransition};
pub use scanner::{MockScanner, MockScannerHandle};
