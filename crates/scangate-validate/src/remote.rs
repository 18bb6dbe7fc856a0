//! HTTP implementation of the validator.

use crate::config::ValidatorConfig;
use crate::traits::CodeValidator;
use reqwest::header::AUTHORIZATION;
use scangate_core::constants::GRANT_BODY;
use scangate_core::{Error, Result, ScannedCode};
use tracing::debug;

/// Interpret a response body as an authorization decision.
///
/// Grant if and only if the body, after trimming surrounding whitespace,
/// equals exactly `true`. Everything else (`false`, empty, `True`, `1`,
/// arbitrary garbage) is a denial.
#[must_use]
pub fn grant_decision(body: &str) -> bool {
    body.trim() == GRANT_BODY
}

/// Validator backed by the remote authorization endpoint.
///
/// Each completed scan triggers one `POST` carrying the station's static
/// [`CallerIdentity`] payload and the embedded Basic credential; the
/// decision is read from the response body via [`grant_decision`]. HTTP
/// status codes are not consulted; the body is the whole contract.
///
/// [`CallerIdentity`]: crate::config::CallerIdentity
pub struct RemoteValidator {
    client: reqwest::Client,
    config: ValidatorConfig,
}

impl RemoteValidator {
    /// Build a validator from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Transport`] if the HTTP client cannot be
    /// constructed (TLS backend initialization failure).
    pub fn new(config: ValidatorConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .danger_accept_invalid_certs(config.accept_invalid_certs)
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| Error::transport(format!("HTTP client construction failed: {e}")))?;

        Ok(Self { client, config })
    }

    /// The configured endpoint URL.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.config.endpoint
    }
}

impl CodeValidator for RemoteValidator {
    async fn validate(&self, code: &ScannedCode) -> Result<bool> {
        debug!(code = %code, endpoint = %self.config.endpoint, "submitting validation request");

        let response = self
            .client
            .post(&self.config.endpoint)
            .header(
                AUTHORIZATION,
                format!("Basic {}", self.config.basic_credential),
            )
            .json(&self.config.identity)
            .send()
            .await
            .map_err(|e| Error::transport(e.to_string()))?;

        let body = response
            .text()
            .await
            .map_err(|e| Error::transport(e.to_string()))?;

        let granted = grant_decision(&body);
        debug!(code = %code, granted, "validation decision received");
        Ok(granted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("true", true)]
    #[case(" true\n", true)]
    #[case("\ttrue\t", true)]
    #[case("True", false)]
    #[case("false", false)]
    #[case("", false)]
    #[case("1", false)]
    #[case("truee", false)]
    #[case("\"true\"", false)]
    fn test_grant_decision_exact_match(#[case] body: &str, #[case] expected: bool) {
        assert_eq!(grant_decision(body), expected);
    }

    #[test]
    fn test_validator_builds_from_default_config() {
        let validator = RemoteValidator::new(ValidatorConfig::default()).unwrap();
        assert_eq!(
            validator.endpoint(),
            "https://worfact-api.infoart.com.tr/qrcode/scan"
        );
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_transport_error() {
        // Port 9 on localhost (discard) is expected to refuse the connection.
        let config = ValidatorConfig {
            endpoint: "http://127.0.0.1:9/qrcode/scan".to_string(),
            request_timeout: std::time::Duration::from_millis(500),
            ..ValidatorConfig::default()
        };
        let validator = RemoteValidator::new(config).unwrap();

        let err = validator
            .validate(&ScannedCode::new("QR1"))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Transport { .. }));
    }
}
