//! Wire shape of a `siteverify` response.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Decoded body of a verification response.
///
/// Fields the service omits decode to their defaults, so a body carrying only
/// `error_codes` still decodes and is then rejected on those codes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VerificationResponse {
    /// Whether the token was valid for this site.
    #[serde(default)]
    pub success: bool,
    /// When the challenge was solved (RFC 3339).
    #[serde(default)]
    pub challenge_ts: Option<DateTime<Utc>>,
    /// Hostname of the site where the challenge was solved.
    #[serde(default)]
    pub hostname: String,
    /// Likelihood the interaction was legitimate, from 0.0 to 1.0.
    #[serde(default)]
    pub score: f64,
    /// Action name supplied when the token was requested.
    #[serde(default)]
    pub action: String,
    /// Error codes reported by the service, if any.
    #[serde(default, alias = "error-codes")]
    pub error_codes: Option<Vec<String>>,
}

impl VerificationResponse {
    /// Error codes as a slice; empty when the field was absent.
    #[must_use]
    pub fn error_codes(&self) -> &[String] {
        self.error_codes.as_deref().unwrap_or_default()
    }

    /// Returns true if the score reaches `min_score` (inclusive).
    #[must_use]
    pub fn meets(&self, min_score: f64) -> bool {
        self.score >= min_score
    }
}
