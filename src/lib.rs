//! # recaptcha-v3
//!
//! Verifies reCAPTCHA v3 tokens against Google's `siteverify` service and
//! reduces the answer to an admission decision: the token is admitted when
//! its score reaches a configured threshold.
//!
//! A low score is a normal negative decision (`Ok(false)`); errors are kept
//! for the cases where the token could not be verified at all, so callers can
//! choose their own fail-open or fail-closed policy.
//!
//! ## Example
//!
//! ```rust,no_run
//! use recaptcha_v3::Verifier;
//!
//! # async fn run() -> recaptcha_v3::Result<()> {
//! let verifier = Verifier::new("site-secret", 0.5);
//! if verifier.verify("token-from-browser", "203.0.113.7").await? {
//!     println!("admitted");
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Testing
//!
//! Implement [`FormPoster`] to substitute the HTTP layer and pass it to
//! [`Verifier::with_transport`].

pub mod config;
pub mod error;
pub mod verifier;

pub use config::VerifierConfig;
pub use error::{Error, Result};
pub use verifier::{FormPoster, HttpTransport, VerificationResponse, Verifier, SITEVERIFY_URL};
