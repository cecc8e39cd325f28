//! HTTP transport used to reach the verification service.

use crate::error::{Error, Result};
use bytes::Bytes;
use reqwest::header::USER_AGENT;
use std::future::Future;
use std::time::Duration;
use tracing::debug;

/// Posts a form-encoded body to a URL and returns the response body.
///
/// This is the only collaborator a [`crate::Verifier`] needs. Tests substitute
/// a double that returns canned bodies or errors without touching the network.
pub trait FormPoster: Send + Sync {
    /// Error reported when the exchange fails.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Send `form` as `application/x-www-form-urlencoded` to `url`.
    ///
    /// Fields are sent in the order given.
    fn post_form(
        &self,
        url: &str,
        form: &[(&str, &str)],
    ) -> impl Future<Output = std::result::Result<Bytes, Self::Error>> + Send;
}

/// Production transport backed by a `reqwest` client.
#[derive(Debug, Clone, Default)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    /// Create a transport whose requests fail after `timeout`.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn with_timeout(timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(Error::transport)?;
        Ok(Self { client })
    }

    /// Use a preconfigured `reqwest` client (proxies, TLS roots, deadlines).
    #[must_use]
    pub fn from_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl FormPoster for HttpTransport {
    type Error = reqwest::Error;

    async fn post_form(
        &self,
        url: &str,
        form: &[(&str, &str)],
    ) -> std::result::Result<Bytes, reqwest::Error> {
        let response = self
            .client
            .post(url)
            .header(
                USER_AGENT,
                format!("recaptcha-v3/{}", env!("CARGO_PKG_VERSION")),
            )
            .form(form)
            .send()
            .await?
            .error_for_status()?;

        debug!("Verification service answered with {}", response.status());
        response.bytes().await
    }
}
