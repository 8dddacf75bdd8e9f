//! HMAC-SHA256 request signature verification.

use chrono::Utc;
use hmac::{Hmac, Mac};
use log::*;
use secrecy::{ExposeSecret, SecretString};
use sha2::Sha256;
use subtle::ConstantTimeEq;

use super::{RequestVerifier, SignedRequest, VerificationOptions};
use crate::error::{key_error, signature_error, Error, SignatureErrorKind};

type HmacSha256 = Hmac<Sha256>;

/// HMAC-SHA256 request verifier.
///
/// Rebuilds the signature Slack computes over `<version>:<timestamp>:<body>`
/// and compares it with the one presented on the request.
pub struct HmacRequestVerifier {
    secret: SecretString,
    options: VerificationOptions,
}

impl HmacRequestVerifier {
    /// Create a new HMAC request verifier.
    ///
    /// # Arguments
    ///
    /// * `secret` - The app's signing secret
    /// * `options` - Version tag, timestamp policy and on/off switch
    pub fn new(secret: SecretString, options: VerificationOptions) -> Self {
        Self { secret, options }
    }

    pub fn options(&self) -> &VerificationOptions {
        &self.options
    }

    /// Computes the signature for `timestamp` and `body`, in the same
    /// `<version>=<lowercase hex>` form Slack sends.
    ///
    /// The timestamp and body are signed exactly as received.
    pub fn sign(&self, timestamp: &str, body: &[u8]) -> Result<String, Error> {
        let version = &self.options.version_tag;

        let mut mac = HmacSha256::new_from_slice(self.secret.expose_secret().as_bytes())
            .map_err(|_| key_error("Invalid HMAC key"))?;
        mac.update(version.as_bytes());
        mac.update(b":");
        mac.update(timestamp.as_bytes());
        mac.update(b":");
        mac.update(body);

        let digest = hex::encode(mac.finalize().into_bytes());
        Ok(format!("{version}={digest}"))
    }

    /// Verifies `request` as if the current time were `now` (seconds since the epoch).
    pub fn verify_at(&self, request: &SignedRequest<'_>, now: i64) -> Result<(), Error> {
        if !self.options.enabled {
            trace!("Request signature verification is disabled, accepting request");
            return Ok(());
        }

        let timestamp = request.timestamp.ok_or_else(|| {
            signature_error(
                SignatureErrorKind::MissingTimestamp,
                "Missing request timestamp",
            )
        })?;

        if self.options.verify_timestamps {
            let issued_at: i64 = timestamp.parse().map_err(|_| {
                signature_error(
                    SignatureErrorKind::MalformedTimestamp,
                    &format!("Request timestamp is not an integer: {timestamp}"),
                )
            })?;

            // Only the lower bound is enforced; future timestamps pass.
            let tolerance = i64::try_from(self.options.timestamp_tolerance_secs).unwrap_or(i64::MAX);
            if issued_at < now.saturating_sub(tolerance) {
                return Err(signature_error(
                    SignatureErrorKind::StaleRequest,
                    &format!("Request timestamp {issued_at} is older than the tolerance window"),
                ));
            }
        }

        let expected = self.sign(timestamp, request.body)?;

        let presented = request.signature.ok_or_else(|| {
            signature_error(
                SignatureErrorKind::MissingSignature,
                "Missing request signature",
            )
        })?;

        // Lengths are compared in the clear; the contents are not.
        let matches: bool = expected.as_bytes().ct_eq(presented.as_bytes()).into();
        if !matches {
            return Err(signature_error(
                SignatureErrorKind::SignatureMismatch,
                "Request signature does not match",
            ));
        }

        Ok(())
    }
}

impl RequestVerifier for HmacRequestVerifier {
    fn verify(&self, request: &SignedRequest<'_>) -> Result<(), Error> {
        self.verify_at(request, Utc::now().timestamp())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    // Example request from Slack's "Verifying requests from Slack" guide.
    const SLACK_SECRET: &str = "8f742231b10e8888abcd99yyyzzz85a5";
    const SLACK_TIMESTAMP: &str = "1531420618";
    const SLACK_SIGNATURE: &str =
        "v0=a2114d57b48eac39b9ad189dd8316235a7b4a8d21a10bd27519666489c69b503";
    const SLACK_BODY: &str = "token=xyzz0WbapA4vBCDEFasx0q6G&team_id=T1DC2JH3J&team_domain=testteamnow&channel_id=G8PSS9T3V&channel_name=foobar&user_id=U2CERLKJA&user_name=roadrunner&command=%2Fwebhook-collect&text=&response_url=https%3A%2F%2Fhooks.slack.com%2Fcommands%2FT1DC2JH3J%2F397700885554%2F96rGlfmibIGlgcZRskXaIFfN&trigger_id=398738663015.47445629121.803a0bc887a14d10d2c447fce8b6703c";

    fn verifier(options: VerificationOptions) -> HmacRequestVerifier {
        HmacRequestVerifier::new(SecretString::from(SLACK_SECRET.to_string()), options)
    }

    fn signature_kind(result: Result<(), Error>) -> SignatureErrorKind {
        match result.unwrap_err().error_kind {
            ErrorKind::Signature(kind) => kind,
            other => panic!("Expected a signature error, got: {:?}", other),
        }
    }

    fn slack_request() -> SignedRequest<'static> {
        SignedRequest::new(
            Some(SLACK_TIMESTAMP),
            Some(SLACK_SIGNATURE),
            SLACK_BODY.as_bytes(),
        )
    }

    #[test]
    fn test_sign_matches_slack_example() {
        let verifier = verifier(VerificationOptions::default());

        let signature = verifier
            .sign(SLACK_TIMESTAMP, SLACK_BODY.as_bytes())
            .unwrap();
        assert_eq!(signature, SLACK_SIGNATURE);
    }

    #[test]
    fn test_valid_signature_without_timestamp_checks() {
        let verifier = verifier(VerificationOptions {
            verify_timestamps: false,
            ..Default::default()
        });

        assert!(verifier.verify(&slack_request()).is_ok());
    }

    #[test]
    fn test_valid_signature_within_tolerance() {
        let verifier = verifier(VerificationOptions::default());
        let issued_at: i64 = SLACK_TIMESTAMP.parse().unwrap();

        assert!(verifier.verify_at(&slack_request(), issued_at + 300).is_ok());
    }

    #[test]
    fn test_stale_request_is_rejected() {
        let verifier = verifier(VerificationOptions::default());

        // The example request is from 2018
        let kind = signature_kind(verifier.verify(&slack_request()));
        assert_eq!(kind, SignatureErrorKind::StaleRequest);
    }

    #[test]
    fn test_stale_boundary_is_exclusive() {
        let verifier = verifier(VerificationOptions::default());
        let issued_at: i64 = SLACK_TIMESTAMP.parse().unwrap();

        let kind = signature_kind(verifier.verify_at(&slack_request(), issued_at + 301));
        assert_eq!(kind, SignatureErrorKind::StaleRequest);
    }

    #[test]
    fn test_huge_tolerance_accepts_any_past_timestamp() {
        let verifier = verifier(VerificationOptions {
            timestamp_tolerance_secs: u64::MAX,
            ..Default::default()
        });

        assert!(verifier.verify_at(&slack_request(), i64::MAX).is_ok());
    }

    #[test]
    fn test_tolerance_window_saturates_at_the_earliest_instant() {
        let verifier = verifier(VerificationOptions {
            timestamp_tolerance_secs: 300,
            ..Default::default()
        });

        assert!(verifier.verify_at(&slack_request(), i64::MIN).is_ok());
    }

    #[test]
    fn test_future_timestamp_is_accepted() {
        let verifier = verifier(VerificationOptions::default());
        let issued_at: i64 = SLACK_TIMESTAMP.parse().unwrap();

        assert!(verifier
            .verify_at(&slack_request(), issued_at - 86_400)
            .is_ok());
    }

    #[test]
    fn test_missing_timestamp() {
        let verifier = verifier(VerificationOptions::default());
        let request = SignedRequest::new(None, Some(SLACK_SIGNATURE), SLACK_BODY.as_bytes());

        let kind = signature_kind(verifier.verify(&request));
        assert_eq!(kind, SignatureErrorKind::MissingTimestamp);
    }

    #[test]
    fn test_missing_timestamp_is_checked_even_without_timestamp_verification() {
        let verifier = verifier(VerificationOptions {
            verify_timestamps: false,
            ..Default::default()
        });
        let request = SignedRequest::new(Some(""), Some(SLACK_SIGNATURE), SLACK_BODY.as_bytes());

        let kind = signature_kind(verifier.verify(&request));
        assert_eq!(kind, SignatureErrorKind::MissingTimestamp);
    }

    #[test]
    fn test_malformed_timestamp() {
        let verifier = verifier(VerificationOptions::default());
        let request = SignedRequest::new(
            Some("yesterday"),
            Some(SLACK_SIGNATURE),
            SLACK_BODY.as_bytes(),
        );

        let kind = signature_kind(verifier.verify(&request));
        assert_eq!(kind, SignatureErrorKind::MalformedTimestamp);
    }

    #[test]
    fn test_unchecked_timestamp_is_signed_verbatim() {
        let verifier = verifier(VerificationOptions {
            verify_timestamps: false,
            ..Default::default()
        });
        let signature = verifier.sign("yesterday", b"text=hi").unwrap();
        let request = SignedRequest::new(Some("yesterday"), Some(signature.as_str()), b"text=hi");

        assert!(verifier.verify(&request).is_ok());
    }

    #[test]
    fn test_missing_signature() {
        let verifier = verifier(VerificationOptions {
            verify_timestamps: false,
            ..Default::default()
        });
        let request = SignedRequest::new(Some(SLACK_TIMESTAMP), None, SLACK_BODY.as_bytes());

        let kind = signature_kind(verifier.verify(&request));
        assert_eq!(kind, SignatureErrorKind::MissingSignature);
    }

    #[test]
    fn test_signature_mismatch() {
        let verifier = verifier(VerificationOptions {
            verify_timestamps: false,
            ..Default::default()
        });
        let tampered = SLACK_BODY.replace("text=", "text=add");
        let request = SignedRequest::new(
            Some(SLACK_TIMESTAMP),
            Some(SLACK_SIGNATURE),
            tampered.as_bytes(),
        );

        let kind = signature_kind(verifier.verify(&request));
        assert_eq!(kind, SignatureErrorKind::SignatureMismatch);
    }

    #[test]
    fn test_signature_is_case_sensitive() {
        let verifier = verifier(VerificationOptions {
            verify_timestamps: false,
            ..Default::default()
        });
        let upper = SLACK_SIGNATURE.to_uppercase();
        let request = SignedRequest::new(Some(SLACK_TIMESTAMP), Some(upper.as_str()), SLACK_BODY.as_bytes());

        let kind = signature_kind(verifier.verify(&request));
        assert_eq!(kind, SignatureErrorKind::SignatureMismatch);
    }

    #[test]
    fn test_version_tag_is_part_of_the_signature() {
        let verifier = verifier(VerificationOptions {
            version_tag: "v1".to_string(),
            verify_timestamps: false,
            ..Default::default()
        });

        let signature = verifier.sign(SLACK_TIMESTAMP, SLACK_BODY.as_bytes()).unwrap();
        assert!(signature.starts_with("v1="));
        assert_ne!(&signature[3..], &SLACK_SIGNATURE[3..]);

        let kind = signature_kind(verifier.verify(&slack_request()));
        assert_eq!(kind, SignatureErrorKind::SignatureMismatch);
    }

    #[test]
    fn test_disabled_verification_accepts_anything() {
        let verifier = verifier(VerificationOptions {
            enabled: false,
            ..Default::default()
        });
        let request = SignedRequest::new(None, Some("v0=nonsense"), b"");

        assert!(verifier.verify(&request).is_ok());
    }
}
