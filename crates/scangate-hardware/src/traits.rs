//! Hardware boundary trait definitions.
//!
//! These traits establish the contract between the supervisor pipeline and
//! the physical world (USB scanner discovery, the device event stream, and
//! the relay output pin), enabling substitution between real hardware and
//! the mock implementations in [`crate::mock`].
//!
//! All async traits use native `async fn` methods (Edition 2024 RPITIT);
//! consumers take them as generic type parameters rather than trait
//! objects.

#![allow(async_fn_in_trait)]

use scangate_core::{DevicePath, Result};
use scangate_decode::RawKeyEvent;

/// A stream of raw key transitions from one opened device session.
///
/// A source is consumed until it fails; there is no clean end-of-stream.
/// When the device vanishes, access is revoked, or the event channel
/// closes, `next_event` returns the classified error and the session is
/// over; the caller re-discovers and reopens the device.
///
/// # Examples
///
/// ```no_run
/// use scangate_hardware::traits::EventSource;
/// use scangate_core::Result;
/// use scangate_decode::{KeyDecoder, LineAccumulator};
///
/// async fn read_one_code<S: EventSource>(source: &mut S) -> Result<String> {
///     let mut decoder = KeyDecoder::new();
///     let mut line = LineAccumulator::new();
///
///     loop {
///         let event = source.next_event().await?;
///         if let Some(ch) = decoder.decode(event) {
///             if let Some(code) = line.feed(ch) {
///                 return Ok(code.as_str().to_string());
///             }
///         }
///     }
/// }
/// ```
pub trait EventSource: Send {
    /// Wait for the next raw key transition.
    ///
    /// There is no timeout on this wait: a connected but silent device
    /// suspends the caller indefinitely.
    ///
    /// # Errors
    ///
    /// Returns an error if the device file vanished, access was revoked,
    /// or the underlying event channel closed.
    async fn next_event(&mut self) -> Result<RawKeyEvent>;
}

/// Discovery and exclusive acquisition of a scanning device.
///
/// The port separates *finding* a device from *opening* it, because the
/// two fail differently: discovery failures retry immediately, while open
/// and read failures go through the recovery backoff. A located path is
/// only valid until the session it was opened for ends.
pub trait InputPort: Send {
    /// The event source produced by a successful open.
    type Source: EventSource;

    /// Locate a scanning device.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DeviceNotFound`] when enumeration produced no
    /// candidate and [`Error::DiscoveryFailed`] when it reported
    /// diagnostics; in both cases no device may be opened.
    ///
    /// [`Error::DeviceNotFound`]: scangate_core::Error::DeviceNotFound
    /// [`Error::DiscoveryFailed`]: scangate_core::Error::DiscoveryFailed
    async fn locate(&mut self) -> Result<DevicePath>;

    /// Open the located device for exclusive raw reading.
    ///
    /// # Errors
    ///
    /// Returns an error if the device file is missing, access is denied,
    /// or the exclusive grab fails.
    async fn open(&mut self, path: &DevicePath) -> Result<Self::Source>;
}

/// The digital output pin driving the gate relay.
///
/// The pin has exactly one writer and must be left at the inactive level
/// whenever ownership is released, on every path including errors and
/// cancellation. Level changes are synchronous register writes.
pub trait RelayPin: Send {
    /// Drive the pin to the active level (relay energized).
    ///
    /// # Errors
    ///
    /// Returns an error if the GPIO write fails.
    fn set_active(&mut self) -> Result<()>;

    /// Drive the pin to the inactive level (relay released).
    ///
    /// # Errors
    ///
    /// Returns an error if the GPIO write fails.
    fn set_inactive(&mut self) -> Result<()>;
}
