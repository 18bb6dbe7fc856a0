//! Mock relay pin recording level transitions.

use crate::traits::RelayPin;
use scangate_core::Result;
use std::sync::{Arc, Mutex};
use tokio::time::Instant;

/// Logical level of the relay pin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PinLevel {
    Active,
    Inactive,
}

/// One recorded level change with its timestamp.
#[derive(Debug, Clone)]
pub struct PinTransition {
    pub level: PinLevel,
    pub at: Instant,
}

/// Relay pin that records every level change for later inspection.
///
/// # Examples
///
/// ```
/// use scangate_hardware::mock::{MockRelayPin, PinLevel};
/// use scangate_hardware::traits::RelayPin;
///
/// let (mut pin, handle) = MockRelayPin::new();
/// pin.set_active().unwrap();
/// pin.set_inactive().unwrap();
///
/// assert_eq!(handle.levels(), vec![PinLevel::Active, PinLevel::Inactive]);
/// assert_eq!(handle.last_level(), Some(PinLevel::Inactive));
/// ```
#[derive(Debug)]
pub struct MockRelayPin {
    log: Arc<Mutex<Vec<PinTransition>>>,
}

impl MockRelayPin {
    /// Create a mock pin and its inspection handle.
    pub fn new() -> (Self, MockRelayHandle) {
        let log = Arc::new(Mutex::new(Vec::new()));
        let pin = Self {
            log: Arc::clone(&log),
        };
        let handle = MockRelayHandle { log };
        (pin, handle)
    }

    fn record(&self, level: PinLevel) {
        let mut log = self.log.lock().unwrap_or_else(|e| e.into_inner());
        log.push(PinTransition {
            level,
            at: Instant::now(),
        });
    }
}

impl RelayPin for MockRelayPin {
    fn set_active(&mut self) -> Result<()> {
        self.record(PinLevel::Active);
        Ok(())
    }

    fn set_inactive(&mut self) -> Result<()> {
        self.record(PinLevel::Inactive);
        Ok(())
    }
}

/// Inspection handle for a [`MockRelayPin`].
#[derive(Debug, Clone)]
pub struct MockRelayHandle {
    log: Arc<Mutex<Vec<PinTransition>>>,
}

impl MockRelayHandle {
    /// All recorded transitions, oldest first.
    #[must_use]
    pub fn transitions(&self) -> Vec<PinTransition> {
        self.log
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    /// Just the levels, oldest first.
    #[must_use]
    pub fn levels(&self) -> Vec<PinLevel> {
        self.transitions().iter().map(|t| t.level).collect()
    }

    /// The most recent level, if any change was recorded.
    #[must_use]
    pub fn last_level(&self) -> Option<PinLevel> {
        self.levels().last().copied()
    }

    /// Number of times the pin went active.
    #[must_use]
    pub fn activations(&self) -> usize {
        self.levels()
            .iter()
            .filter(|l| **l == PinLevel::Active)
            .count()
    }
}
