//! # slack-auth
//!
//! Verification of inbound Slack requests signed with an app's signing secret.
//!
//! Slack signs every slash command it delivers: it concatenates a version tag,
//! the request timestamp and the raw body, computes an HMAC-SHA256 of that
//! string with the shared signing secret, and sends the result in the
//! `X-Slack-Signature` header. This crate rebuilds that signature from the
//! request and compares it against the presented one.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use slack_auth::signature::{HmacRequestVerifier, SignedRequest, VerificationOptions};
//!
//! let verifier = HmacRequestVerifier::new(secret, VerificationOptions::default());
//! verifier.verify(&SignedRequest::new(timestamp, signature, &body))?;
//! ```

pub mod error;
pub mod signature;

// Re-export commonly used types
pub use error::{Error, ErrorKind, SignatureErrorKind};
