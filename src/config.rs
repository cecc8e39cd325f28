//! Configuration for recaptcha-v3.

use crate::verifier::SITEVERIFY_URL;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Verifier configuration.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct VerifierConfig {
    /// Shared secret issued for the site.
    #[serde(default)]
    pub secret: String,

    /// Lowest score that is still admitted, within `[0, 1]`.
    #[serde(default = "default_min_score")]
    pub min_score: f64,

    /// Verification endpoint.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Request deadline in seconds (0 disables it).
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Log level.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for VerifierConfig {
    fn default() -> Self {
        Self {
            secret: String::new(),
            min_score: default_min_score(),
            endpoint: default_endpoint(),
            timeout_secs: default_timeout_secs(),
            log_level: default_log_level(),
        }
    }
}

impl std::fmt::Debug for VerifierConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VerifierConfig")
            .field("secret", &"<redacted>")
            .field("min_score", &self.min_score)
            .field("endpoint", &self.endpoint)
            .field("timeout_secs", &self.timeout_secs)
            .field("log_level", &self.log_level)
            .finish()
    }
}

const fn default_min_score() -> f64 {
    0.5
}

fn default_endpoint() -> String {
    SITEVERIFY_URL.to_string()
}

const fn default_timeout_secs() -> u64 {
    10
}

fn default_log_level() -> String {
    "info".to_string()
}

impl VerifierConfig {
    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &std::path::Path) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| crate::Error::Config(e.to_string()))
    }

    /// Save configuration to a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn to_file(&self, path: &std::path::Path) -> crate::Result<()> {
        let content =
            toml::to_string_pretty(self).map_err(|e| crate::Error::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Check the threshold range and the endpoint URL.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Config`] describing the first invalid field.
    pub fn validate(&self) -> crate::Result<()> {
        if !(0.0..=1.0).contains(&self.min_score) {
            return Err(crate::Error::Config(format!(
                "min_score must be within [0, 1], got {}",
                self.min_score
            )));
        }

        let url = reqwest::Url::parse(&self.endpoint)
            .map_err(|e| crate::Error::Config(format!("invalid endpoint {}: {e}", self.endpoint)))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(crate::Error::Config(format!(
                "endpoint must be http or https, got {}",
                url.scheme()
            )));
        }

        Ok(())
    }

    /// Request deadline, or `None` when disabled.
    #[must_use]
    pub fn timeout(&self) -> Option<Duration> {
        (self.timeout_secs > 0).then(|| Duration::from_secs(self.timeout_secs))
    }
}
