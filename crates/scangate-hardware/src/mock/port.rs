//! Scripted input port for supervisor tests.

use crate::mock::MockScanner;
use crate::traits::InputPort;
use scangate_core::{DevicePath, Error, Result};
use std::collections::VecDeque;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Input port that replays scripted discovery and open outcomes.
///
/// Each `locate`/`open` call consumes the next queued outcome. When a
/// queue runs dry the call parks forever, which lets tests hold the
/// supervisor in the acquiring state until it is cancelled.
///
/// # Examples
///
/// ```
/// use scangate_hardware::mock::{MockInputPort, MockScanner};
/// use scangate_hardware::traits::InputPort;
///
/// # async fn example() -> scangate_core::Result<()> {
/// let (scanner, handle) = MockScanner::new();
///
/// let mut port = MockInputPort::new();
/// port.queue_locate_ok("/dev/input/event9");
/// port.queue_open_ok(scanner);
///
/// let path = port.locate().await?;
/// let _source = port.open(&path).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Default)]
pub struct MockInputPort {
    locate_results: VecDeque<Result<DevicePath>>,
    open_results: VecDeque<Result<MockScanner>>,
    stats: MockPortStats,
}

impl MockInputPort {
    /// Create a port with empty scripts.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle for observing how often the port was used.
    #[must_use]
    pub fn stats(&self) -> MockPortStats {
        self.stats.clone()
    }

    /// Queue a successful discovery producing `path`.
    pub fn queue_locate_ok(&mut self, path: &str) {
        self.locate_results.push_back(Ok(DevicePath::new(path)));
    }

    /// Queue a failed discovery.
    pub fn queue_locate_err(&mut self, err: Error) {
        self.locate_results.push_back(Err(err));
    }

    /// Queue a successful open producing `scanner`.
    pub fn queue_open_ok(&mut self, scanner: MockScanner) {
        self.open_results.push_back(Ok(scanner));
    }

    /// Queue a failed open.
    pub fn queue_open_err(&mut self, err: Error) {
        self.open_results.push_back(Err(err));
    }
}

impl InputPort for MockInputPort {
    type Source = MockScanner;

    async fn locate(&mut self) -> Result<DevicePath> {
        self.stats.locates.fetch_add(1, Ordering::SeqCst);
        match self.locate_results.pop_front() {
            Some(result) => result,
            // Script exhausted: park until the caller is cancelled.
            None => std::future::pending().await,
        }
    }

    async fn open(&mut self, _path: &DevicePath) -> Result<Self::Source> {
        self.stats.opens.fetch_add(1, Ordering::SeqCst);
        match self.open_results.pop_front() {
            Some(result) => result,
            None => std::future::pending().await,
        }
    }
}

/// Cloneable usage counters for a [`MockInputPort`].
#[derive(Debug, Clone, Default)]
pub struct MockPortStats {
    locates: Arc<AtomicUsize>,
    opens: Arc<AtomicUsize>,
}

impl MockPortStats {
    /// Number of `locate` calls observed.
    #[must_use]
    pub fn locates(&self) -> usize {
        self.locates.load(Ordering::SeqCst)
    }

    /// Number of `open` calls observed.
    #[must_use]
    pub fn opens(&self) -> usize {
        self.opens.load(Ordering::SeqCst)
    }
}
