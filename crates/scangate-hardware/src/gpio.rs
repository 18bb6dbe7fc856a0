//! Relay pin on the Raspberry Pi GPIO header.

use crate::traits::RelayPin;
use rppal::gpio::{Gpio, OutputPin};
use scangate_core::{Error, Result};
use tracing::debug;

/// Relay pin driven through the Pi's GPIO character device.
///
/// Pins are addressed by BCM number; the deployment constant pair lives in
/// [`scangate_core::constants`] (`RELAY_BCM_PIN` = 23, which is physical
/// header pin `RELAY_HEADER_PIN` = 16). The pin is driven low (inactive)
/// at acquisition so the relay state is known before the supervisor
/// starts, and the driver returns it to an unclaimed input when the
/// handle is dropped.
#[derive(Debug)]
pub struct GpioRelayPin {
    pin: OutputPin,
    bcm: u8,
}

impl GpioRelayPin {
    /// Acquire the given BCM pin as a low output.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Actuation`] if the GPIO peripheral is unavailable
    /// (not running on supported hardware, or `/dev/gpiomem` access was
    /// denied) or the pin is already claimed.
    pub fn new(bcm: u8) -> Result<Self> {
        let gpio = Gpio::new()
            .map_err(|e| Error::actuation(format!("GPIO peripheral unavailable: {e}")))?;
        let pin = gpio
            .get(bcm)
            .map_err(|e| Error::actuation(format!("GPIO pin {bcm} unavailable: {e}")))?
            .into_output_low();

        debug!(bcm, "relay pin acquired, initialized inactive");
        Ok(Self { pin, bcm })
    }

    /// The BCM number this pin was acquired as.
    #[must_use]
    pub fn bcm(&self) -> u8 {
        self.bcm
    }
}

impl RelayPin for GpioRelayPin {
    fn set_active(&mut self) -> Result<()> {
        self.pin.set_high();
        Ok(())
    }

    fn set_inactive(&mut self) -> Result<()> {
        self.pin.set_low();
        Ok(())
    }
}
