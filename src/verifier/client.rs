//! Score-threshold verifier for reCAPTCHA v3 tokens.

use crate::config::VerifierConfig;
use crate::error::{Error, Result};
use crate::verifier::response::VerificationResponse;
use crate::verifier::transport::{FormPoster, HttpTransport};
use std::fmt;
use tracing::{debug, warn};

/// Fixed `siteverify` endpoint of the verification service.
pub const SITEVERIFY_URL: &str = "https://www.google.com/recaptcha/api/siteverify";

/// Verifies tokens and turns the service's score into an admission decision.
///
/// Fields are read-only after construction, so one verifier can be shared
/// between tasks (e.g. behind an `Arc`) and called concurrently.
pub struct Verifier<T = HttpTransport> {
    /// Shared secret issued for the site.
    secret: String,
    /// Lowest score that is still admitted.
    min_score: f64,
    /// Verification endpoint.
    endpoint: String,
    /// HTTP transport.
    transport: T,
}

impl Verifier<HttpTransport> {
    /// Create a verifier using the default HTTP transport.
    ///
    /// The default transport imposes no deadline of its own; use
    /// [`Verifier::with_transport`] with [`HttpTransport::with_timeout`] to
    /// bound the request.
    #[must_use]
    pub fn new(secret: impl Into<String>, min_score: f64) -> Self {
        Self::with_transport(secret, min_score, HttpTransport::default())
    }

    /// Create a verifier from a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the HTTP client
    /// cannot be built.
    pub fn from_config(config: &VerifierConfig) -> Result<Self> {
        config.validate()?;

        let transport = match config.timeout() {
            Some(timeout) => HttpTransport::with_timeout(timeout)?,
            None => HttpTransport::default(),
        };

        Ok(
            Self::with_transport(config.secret.clone(), config.min_score, transport)
                .with_endpoint(config.endpoint.clone()),
        )
    }
}

impl<T: FormPoster> Verifier<T> {
    /// Create a verifier with a custom transport.
    #[must_use]
    pub fn with_transport(secret: impl Into<String>, min_score: f64, transport: T) -> Self {
        Self {
            secret: secret.into(),
            min_score,
            endpoint: SITEVERIFY_URL.to_string(),
            transport,
        }
    }

    /// Send requests to `endpoint` instead of [`SITEVERIFY_URL`].
    #[must_use]
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Verify `token` and decide whether its score clears the threshold.
    ///
    /// `remote_ip` is forwarded to the service as-is; neither argument is
    /// validated locally.
    ///
    /// # Returns
    ///
    /// * `Ok(true)` - The score is at or above the threshold
    /// * `Ok(false)` - The token verified but its score is below the threshold
    /// * `Err(_)` - The token could not be verified
    ///
    /// # Errors
    ///
    /// Returns [`Error::Transport`] if the request fails, [`Error::Decode`] if
    /// the body is malformed and [`Error::Rejected`] if the service reported
    /// error codes.
    pub async fn verify(&self, token: &str, remote_ip: &str) -> Result<bool> {
        let response = self.fetch(token, remote_ip).await?;
        let admitted = response.meets(self.min_score);

        debug!(
            "Token scored {} against threshold {} (action={:?}, hostname={:?}, admitted={})",
            response.score, self.min_score, response.action, response.hostname, admitted
        );

        Ok(admitted)
    }

    /// Verify `token` and return the decoded response without judging the score.
    ///
    /// # Errors
    ///
    /// Same as [`Verifier::verify`].
    pub async fn fetch(&self, token: &str, remote_ip: &str) -> Result<VerificationResponse> {
        let form = [
            ("secret", self.secret.as_str()),
            ("response", token),
            ("remoteip", remote_ip),
        ];

        debug!("Sending verification request to {}", self.endpoint);
        let body = self
            .transport
            .post_form(&self.endpoint, &form)
            .await
            .map_err(Error::transport)?;

        let response: VerificationResponse = serde_json::from_slice(&body)?;

        let codes = response.error_codes();
        if !codes.is_empty() {
            warn!("Verification service reported errors: {}", codes.join(", "));
            return Err(Error::Rejected {
                codes: codes.to_vec(),
            });
        }

        Ok(response)
    }

    /// Lowest score that is still admitted.
    #[must_use]
    pub fn min_score(&self) -> f64 {
        self.min_score
    }

    /// Endpoint requests are sent to.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl<T> fmt::Debug for Verifier<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Verifier")
            .field("secret", &"<redacted>")
            .field("min_score", &self.min_score)
            .field("endpoint", &self.endpoint)
            .finish_non_exhaustive()
    }
}
