//! Error types for recaptcha-v3.

use thiserror::Error;

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while verifying a token.
///
/// A score below the configured threshold is not an error: it is reported as
/// `Ok(false)` by [`crate::Verifier::verify`].
#[derive(Debug, Error)]
pub enum Error {
    /// The HTTP exchange with the verification service failed.
    #[error(transparent)]
    Transport(Box<dyn std::error::Error + Send + Sync + 'static>),

    /// The response body did not match the expected shape.
    #[error(transparent)]
    Decode(#[from] serde_json::Error),

    /// The verification service reported one or more error codes.
    #[error("verification service reported errors: {}", .codes.join(", "))]
    Rejected {
        /// Error codes in the order the service returned them.
        codes: Vec<String>,
    },

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Wrap a transport failure, keeping its message unchanged.
    pub fn transport<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Transport(Box::new(err))
    }
}
