//! Token verification against the reCAPTCHA v3 `siteverify` service.
//!
//! # Flow
//!
//! ```text
//! verify(token, remote_ip)
//!        │
//!        ▼
//! ┌──────────────────────────┐
//! │ POST form to siteverify  │──── transport error ──▶ Err(Transport)
//! └────────────┬─────────────┘
//!              ▼
//! ┌──────────────────────────┐
//! │ Decode JSON body         │──── malformed ────────▶ Err(Decode)
//! └────────────┬─────────────┘
//!              ▼
//! ┌──────────────────────────┐
//! │ Check error codes        │──── non-empty ────────▶ Err(Rejected)
//! └────────────┬─────────────┘
//!              ▼
//!     score >= min_score ?
//!        │            │
//!       YES           NO
//!        ▼            ▼
//!    Ok(true)     Ok(false)
//! ```

mod client;
mod response;
mod transport;

pub use client::{Verifier, SITEVERIFY_URL};
pub use response::VerificationResponse;
pub use transport::{FormPoster, HttpTransport};
