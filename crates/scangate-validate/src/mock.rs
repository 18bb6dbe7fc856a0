//! Scripted validator for testing.

use crate::traits::CodeValidator;
use scangate_core::{Error, Result, ScannedCode};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tracing::warn;

/// Validator that replays scripted decisions and records submissions.
///
/// Clones share state, so a test can keep one clone for inspection while
/// the supervisor owns another. With no scripted decision left the
/// validator denies, so an under-scripted test can never actuate the
/// relay by accident.
///
/// # Examples
///
/// ```
/// use scangate_validate::{CodeValidator, MockValidator};
/// use scangate_core::ScannedCode;
///
/// # async fn example() -> scangate_core::Result<()> {
/// let validator = MockValidator::new();
/// validator.queue_decision(true);
///
/// assert!(validator.validate(&ScannedCode::new("QR1")).await?);
/// assert_eq!(validator.calls(), vec![ScannedCode::new("QR1")]);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct MockValidator {
    inner: Arc<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    decisions: Mutex<VecDeque<Result<bool>>>,
    calls: Mutex<Vec<ScannedCode>>,
}

impl MockValidator {
    /// Create a validator with an empty script.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a grant (`true`) or deny (`false`) decision.
    pub fn queue_decision(&self, granted: bool) {
        self.lock_decisions().push_back(Ok(granted));
    }

    /// Queue a transport failure.
    pub fn queue_error(&self, err: Error) {
        self.lock_decisions().push_back(Err(err));
    }

    /// Codes submitted so far, in order.
    #[must_use]
    pub fn calls(&self) -> Vec<ScannedCode> {
        self.inner
            .calls
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    /// Number of submissions so far.
    #[must_use]
    pub fn call_count(&self) -> usize {
        self.calls().len()
    }

    fn lock_decisions(&self) -> std::sync::MutexGuard<'_, VecDeque<Result<bool>>> {
        self.inner
            .decisions
            .lock()
            .unwrap_or_else(|e| e.into_inner())
    }
}

impl CodeValidator for MockValidator {
    async fn validate(&self, code: &ScannedCode) -> Result<bool> {
        self.inner
            .calls
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(code.clone());

        match self.lock_decisions().pop_front() {
            Some(result) => result,
            None => {
                warn!(code = %code, "no scripted decision left; denying");
                Ok(false)
            }
        }
    }
}
