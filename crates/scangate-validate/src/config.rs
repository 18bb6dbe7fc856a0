//! Validator configuration.

use scangate_core::constants::{
    DEFAULT_BASIC_CREDENTIAL, DEFAULT_ENDPOINT, DEFAULT_REQUEST_TIMEOUT, DEFAULT_STATION_IP,
    DEFAULT_STATION_MAC, DEFAULT_STATION_USER_ID,
};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Static identity this station reports to the authorization endpoint.
///
/// This struct is serialized verbatim as the request body. Note that the
/// scanned code is not part of it: the endpoint keys its decision on the
/// caller's identity alone, and the scan only triggers the submission.
/// (Flagged for product-owner confirmation; see DESIGN.md.)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CallerIdentity {
    /// Station IP address.
    pub ip_address: String,

    /// Station user id.
    pub user_id: u32,

    /// Station MAC identifier.
    pub mac_id: String,
}

impl Default for CallerIdentity {
    fn default() -> Self {
        Self {
            ip_address: DEFAULT_STATION_IP.to_string(),
            user_id: DEFAULT_STATION_USER_ID,
            mac_id: DEFAULT_STATION_MAC.to_string(),
        }
    }
}

/// Configuration for the remote validator.
///
/// # Example
///
/// ```
/// use scangate_validate::ValidatorConfig;
/// use std::time::Duration;
///
/// let config = ValidatorConfig {
///     request_timeout: Duration::from_secs(5),
///     ..ValidatorConfig::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct ValidatorConfig {
    /// Authorization endpoint URL.
    pub endpoint: String,

    /// Pre-encoded HTTP Basic credential, sent on every request.
    pub basic_credential: String,

    /// Identity payload submitted with every request.
    pub identity: CallerIdentity,

    /// Timeout for one validation request.
    pub request_timeout: Duration,

    /// Skip TLS certificate verification.
    ///
    /// Defaults to `true`: the station favors availability over transport
    /// trust and accepts the endpoint's certificate unverified. This is a
    /// known security concern carried deliberately, not an oversight.
    pub accept_invalid_certs: bool,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            basic_credential: DEFAULT_BASIC_CREDENTIAL.to_string(),
            identity: CallerIdentity::default(),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            accept_invalid_certs: true,
        }
    }
}
