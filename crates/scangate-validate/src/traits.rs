//! Validator trait definition.

#![allow(async_fn_in_trait)]

use scangate_core::{Result, ScannedCode};

/// Authorization decision for one scanned code.
///
/// Implementations return `Ok(true)` to grant, `Ok(false)` to deny, and
/// reserve errors for transport-level failures (the request could not be
/// completed at all). A negative decision is a normal outcome, never an
/// error.
pub trait CodeValidator: Send {
    /// Submit a completed code for authorization.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Transport`] when the validation request cannot be
    /// completed.
    ///
    /// [`Error::Transport`]: scangate_core::Error::Transport
    async fn validate(&self, code: &ScannedCode) -> Result<bool>;
}
