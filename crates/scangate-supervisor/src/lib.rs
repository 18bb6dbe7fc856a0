//! Supervisor loop: acquire, listen, validate, actuate, recover.
//!
//! The supervisor owns the whole lifetime of the gate station. It
//! acquires the scanning device, runs the read → decode → accumulate →
//! validate → actuate pipeline for as long as the device stays readable,
//! and recovers from every failure by tearing the session down and
//! re-acquiring, indefinitely, until cancelled from outside. No error is
//! fatal to the process: the loop favors availability over fast failure.
//!
//! # States
//!
//! ```text
//! Idle ──> Acquiring ──> Listening ──> Recovering ──> Acquiring ──> …
//!              │ ^                         ^
//!              └─┘ (discovery retry)       │ (open failure)
//!
//! any state ──> Cancelled (external interrupt)
//! ```
//!
//! The relay pin is initialized inactive before the loop starts and is
//! returned to inactive on every exit path, including cancellation.
//!
//! # Examples
//!
//! ```no_run
//! use scangate_hardware::{GpioRelayPin, UsbScannerPort};
//! use scangate_supervisor::Supervisor;
//! use scangate_validate::{RemoteValidator, ValidatorConfig};
//! use scangate_core::constants::RELAY_BCM_PIN;
//! use tokio_util::sync::CancellationToken;
//!
//! # async fn example() -> scangate_core::Result<()> {
//! let port = UsbScannerPort::new();
//! let validator = RemoteValidator::new(ValidatorConfig::default())?;
//! let relay = GpioRelayPin::new(RELAY_BCM_PIN)?;
//!
//! let supervisor = Supervisor::new(port, validator, relay)?;
//! let cancel = CancellationToken::new();
//! supervisor.run(cancel).await?;
//! # Ok(())
//! # }
//! ```

pub mod actuator;
pub mod retry;
pub mod state;
pub mod supervisor;

pub use actuator::Actuator;
pub use retry::RetryPolicy;
pub use state::{StateMachine, SupervisorState};
pub use supervisor::Supervisor;
