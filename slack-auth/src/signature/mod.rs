//! Slack request signature verification.

mod hmac;

pub use self::hmac::HmacRequestVerifier;

use crate::error::Error;

/// Header carrying the request timestamp, in decimal seconds since the epoch.
pub const TIMESTAMP_HEADER: &str = "X-Slack-Request-Timestamp";

/// Header carrying the request signature, formatted `<version>=<hex digest>`.
pub const SIGNATURE_HEADER: &str = "X-Slack-Signature";

/// Trait for verifying signed inbound requests.
pub trait RequestVerifier: Send + Sync {
    /// Verify a signed request.
    ///
    /// Returns `Ok(())` when the request may be trusted, otherwise an error
    /// naming the first check that failed.
    fn verify(&self, request: &SignedRequest<'_>) -> Result<(), Error>;
}

/// The parts of an inbound request that its signature covers.
///
/// Borrowed from the request for the duration of a single verification.
#[derive(Debug, Clone, Copy)]
pub struct SignedRequest<'a> {
    pub timestamp: Option<&'a str>,
    pub signature: Option<&'a str>,
    pub body: &'a [u8],
}

impl<'a> SignedRequest<'a> {
    /// Empty header values are treated the same as missing ones.
    pub fn new(timestamp: Option<&'a str>, signature: Option<&'a str>, body: &'a [u8]) -> Self {
        Self {
            timestamp: timestamp.filter(|t| !t.is_empty()),
            signature: signature.filter(|s| !s.is_empty()),
            body,
        }
    }
}

/// Tunables for request verification.
#[derive(Debug, Clone, PartialEq)]
pub struct VerificationOptions {
    /// Version tag the signing base string starts with and the signature is prefixed by.
    pub version_tag: String,
    /// Reject requests older than `timestamp_tolerance_secs`.
    pub verify_timestamps: bool,
    pub timestamp_tolerance_secs: u64,
    /// When false every request is accepted without looking at it.
    pub enabled: bool,
}

impl Default for VerificationOptions {
    fn default() -> Self {
        Self {
            version_tag: "v0".to_string(),
            verify_timestamps: true,
            timestamp_tolerance_secs: 300,
            enabled: true,
        }
    }
}
