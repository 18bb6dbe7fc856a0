//! The supervisor loop itself.

use crate::actuator::Actuator;
use crate::retry::RetryPolicy;
use crate::state::{StateMachine, SupervisorState};
use scangate_core::{Error, Result};
use scangate_decode::{KeyDecoder, LineAccumulator};
use scangate_hardware::{EventSource, InputPort, RelayPin};
use scangate_validate::CodeValidator;
use tokio_util::sync::CancellationToken;
use tracing::{error, info, warn};

/// Owns the acquire → listen → validate → actuate pipeline and its
/// recovery loop.
///
/// The supervisor is generic over its three collaborators so the entire
/// loop can be exercised against mocks. It runs until the cancellation
/// token fires; every failure short of that tears the device session down
/// and re-enters acquisition.
///
/// Each completed code is resolved fully (validated and, if granted,
/// actuated) before the next raw event is taken; there are never
/// concurrent validation requests.
pub struct Supervisor<P, V, R>
where
    P: InputPort,
    V: CodeValidator,
    R: RelayPin,
{
    port: P,
    validator: V,
    actuator: Actuator<R>,
    policy: RetryPolicy,
    machine: StateMachine,
}

impl<P, V, R> Supervisor<P, V, R>
where
    P: InputPort,
    V: CodeValidator,
    R: RelayPin,
{
    /// Build a supervisor, taking ownership of the relay pin and driving
    /// it to its inactive level.
    ///
    /// # Errors
    ///
    /// Returns an error if the initial pin write fails.
    pub fn new(port: P, validator: V, relay: R) -> Result<Self> {
        Ok(Self {
            port,
            validator,
            actuator: Actuator::new(relay)?,
            policy: RetryPolicy::default(),
            machine: StateMachine::new(),
        })
    }

    /// Replace the default retry policy.
    #[must_use]
    pub fn with_policy(mut self, policy: RetryPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Current supervisor state.
    #[must_use]
    pub fn state(&self) -> SupervisorState {
        self.machine.current()
    }

    /// Run until `cancel` fires.
    ///
    /// The relay pin is reset to inactive on every exit path, including
    /// cancellation.
    ///
    /// # Errors
    ///
    /// Cancellation is not an error; the only error this returns is an
    /// internal state machine violation, which indicates a bug.
    pub async fn run(mut self, cancel: CancellationToken) -> Result<()> {
        info!("supervisor starting");

        let outcome = tokio::select! {
            _ = cancel.cancelled() => {
                info!("interrupt received, shutting down");
                Ok(())
            }
            result = self.serve() => result,
        };

        self.machine.cancel();
        if let Err(e) = self.actuator.reset() {
            error!(error = %e, "failed to reset relay pin during shutdown");
        }
        info!("exiting");
        outcome
    }

    /// The infinite acquire/listen/recover cycle. Never returns except on
    /// an internal state machine violation.
    async fn serve(&mut self) -> Result<()> {
        self.machine.transition_to(SupervisorState::Acquiring)?;

        loop {
            let path = match self.port.locate().await {
                Ok(path) => path,
                Err(err) => {
                    warn!(error = %err, "USB input source discovery failed");
                    // A failed discovery loops straight back into another
                    // attempt; no device was opened, so there is nothing
                    // to recover.
                    self.machine.transition_to(SupervisorState::Acquiring)?;
                    self.policy.pause_acquire().await;
                    continue;
                }
            };

            let mut source = match self.port.open(&path).await {
                Ok(source) => source,
                Err(err) => {
                    self.recover(err).await?;
                    continue;
                }
            };

            self.machine.transition_to(SupervisorState::Listening)?;
            info!(path = %path, "device session opened");

            let err = self.listen(&mut source).await;
            drop(source);
            self.recover(err).await?;
        }
    }

    /// Pipeline over one device session; returns the error that ended it.
    ///
    /// Decoder and accumulator are created fresh here, so modifier state
    /// and partial codes never survive a session boundary.
    async fn listen(&mut self, source: &mut P::Source) -> Error {
        let mut decoder = KeyDecoder::new();
        let mut line = LineAccumulator::new();

        loop {
            let event = match source.next_event().await {
                Ok(event) => event,
                Err(err) => return err,
            };

            let Some(ch) = decoder.decode(event) else {
                continue;
            };
            let Some(code) = line.feed(ch) else {
                continue;
            };

            match self.validator.validate(&code).await {
                Ok(true) => {
                    info!(code = %code, granted = true, "code authorized, releasing gate");
                    if let Err(err) = self.actuator.pulse().await {
                        return err;
                    }
                }
                Ok(false) => {
                    info!(code = %code, granted = false, "code rejected");
                }
                Err(err) => return err,
            }
        }
    }

    /// Log the classified session failure, wait out the backoff, and
    /// re-enter acquisition.
    async fn recover(&mut self, err: Error) -> Result<()> {
        self.machine.transition_to(SupervisorState::Recovering)?;

        match &err {
            Error::DeviceMissing { path } => {
                error!(path = %path, "input device vanished");
            }
            Error::PermissionDenied { path } => {
                error!(path = %path, "input device access denied");
            }
            _ => {
                error!(error = %err, "session failed");
            }
        }

        self.policy.pause_recover().await;
        self.machine.transition_to(SupervisorState::Acquiring)
    }
}
