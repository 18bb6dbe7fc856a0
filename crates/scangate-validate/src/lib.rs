//! Remote authorization of scanned codes.
//!
//! Every completed code is submitted to the remote validation endpoint,
//! which answers with a bare boolean body. The decision contract is
//! deliberately narrow: the trimmed response body must equal exactly
//! `true` for access to be granted; every other body (`false`, empty,
//! malformed, differently cased) is a denial, not an error. Only
//! transport-level failures surface as errors, and the supervisor treats
//! those as session-fatal.
//!
//! The [`CodeValidator`] trait is the seam between the supervisor and the
//! transport; [`RemoteValidator`] is the HTTP implementation and
//! [`MockValidator`] the scripted test double.

pub mod config;
pub mod mock;
pub mod remote;
pub mod traits;

pub use config::{CallerIdentity, ValidatorConfig};
pub use mock::MockValidator;
pub use remote::{RemoteValidator, grant_decision};
pub use traits::CodeValidator;
