//! Recovery pacing policy.

use scangate_core::constants::{ACQUIRE_BACKOFF, RECOVER_BACKOFF};
use std::time::Duration;
use tokio::time::sleep;

/// Delays applied between supervisor retry attempts.
///
/// Discovery failures retry immediately by default (the enumeration
/// itself is cheap and the device may appear at any moment), while a
/// failed session backs off briefly before re-discovery so a flapping
/// device or endpoint cannot spin the loop hot.
///
/// # Examples
///
/// ```
/// use scangate_supervisor::RetryPolicy;
/// use std::time::Duration;
///
/// let policy = RetryPolicy::new()
///     .with_recover_delay(Duration::from_millis(250));
/// assert_eq!(policy.recover_delay(), Duration::from_millis(250));
/// ```
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    acquire_delay: Duration,
    recover_delay: Duration,
}

impl RetryPolicy {
    /// Create a policy with the default delays.
    #[must_use]
    pub fn new() -> Self {
        Self {
            acquire_delay: ACQUIRE_BACKOFF,
            recover_delay: RECOVER_BACKOFF,
        }
    }

    /// Set the delay between failed discovery attempts.
    #[must_use]
    pub fn with_acquire_delay(mut self, delay: Duration) -> Self {
        self.acquire_delay = delay;
        self
    }

    /// Set the delay between a failed session and re-discovery.
    #[must_use]
    pub fn with_recover_delay(mut self, delay: Duration) -> Self {
        self.recover_delay = delay;
        self
    }

    /// Delay between failed discovery attempts.
    #[must_use]
    pub fn acquire_delay(&self) -> Duration {
        self.acquire_delay
    }

    /// Delay between a failed session and re-discovery.
    #[must_use]
    pub fn recover_delay(&self) -> Duration {
        self.recover_delay
    }

    /// Wait out the discovery retry delay.
    pub async fn pause_acquire(&self) {
        if !self.acquire_delay.is_zero() {
            sleep(self.acquire_delay).await;
        }
    }

    /// Wait out the recovery backoff.
    pub async fn pause_recover(&self) {
        if !self.recover_delay.is_zero() {
            sleep(self.recover_delay).await;
        }
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::Instant;

    #[test]
    fn test_default_delays() {
        let policy = RetryPolicy::default();
        assert_eq!(policy.acquire_delay(), Duration::ZERO);
        assert_eq!(policy.recover_delay(), Duration::from_secs(1));
    }

    #[tokio::test(start_paused = true)]
    async fn test_pause_recover_waits_configured_delay() {
        let policy = RetryPolicy::new().with_recover_delay(Duration::from_secs(1));

        let before = Instant::now();
        policy.pause_recover().await;
        assert_eq!(before.elapsed(), Duration::from_secs(1));
    }

    #[tokio::test(start_paused = true)]
    async fn test_zero_acquire_delay_returns_immediately() {
        let policy = RetryPolicy::default();

        let before = Instant::now();
        policy.pause_acquire().await;
        assert_eq!(before.elapsed(), Duration::ZERO);
    }
}
