//! Timed relay pulse, gated on a granted decision.

use scangate_core::Result;
use scangate_core::constants::RELAY_PULSE;
use scangate_hardware::RelayPin;
use std::time::Duration;
use tokio::time::sleep;
use tracing::{debug, warn};

/// Drives the relay pin through fixed-duration pulses.
///
/// Construction drives the pin inactive so the relay state is known
/// before anything else happens. A pulse is active → hold → inactive and
/// nothing else proceeds while it runs: each granted scan is fully
/// actuated before the next event is read.
///
/// Dropping the actuator re-asserts the inactive level, so the pin is
/// left safe even if the owner is torn down without an explicit
/// [`reset`](Actuator::reset).
#[derive(Debug)]
pub struct Actuator<R: RelayPin> {
    pin: R,
    pulse_width: Duration,
}

impl<R: RelayPin> Actuator<R> {
    /// Take ownership of the pin with the standard pulse width, driving
    /// it inactive.
    ///
    /// # Errors
    ///
    /// Returns an error if the initial inactive write fails.
    pub fn new(pin: R) -> Result<Self> {
        Self::with_pulse_width(pin, RELAY_PULSE)
    }

    /// Take ownership of the pin with a custom pulse width, driving it
    /// inactive.
    ///
    /// # Errors
    ///
    /// Returns an error if the initial inactive write fails.
    pub fn with_pulse_width(mut pin: R, pulse_width: Duration) -> Result<Self> {
        pin.set_inactive()?;
        Ok(Self { pin, pulse_width })
    }

    /// Pulse the relay: active, hold, inactive.
    ///
    /// # Errors
    ///
    /// Returns an error if either level write fails.
    pub async fn pulse(&mut self) -> Result<()> {
        debug!(width_ms = self.pulse_width.as_millis() as u64, "pulsing relay");
        self.pin.set_active()?;
        sleep(self.pulse_width).await;
        self.pin.set_inactive()
    }

    /// Return the pin to the inactive level.
    ///
    /// Called on every supervisor exit path; also covers a pulse that was
    /// cancelled between its level writes.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails.
    pub fn reset(&mut self) -> Result<()> {
        self.pin.set_inactive()
    }
}

impl<R: RelayPin> Drop for Actuator<R> {
    fn drop(&mut self) {
        if let Err(e) = self.pin.set_inactive() {
            warn!(error = %e, "failed to reset relay pin on drop");
        }
    }
}
