//! Verification of inbound slash command requests.
//!
//! Wraps `slack_auth` so the web layer only deals with domain errors.

use crate::error::Error;
use log::*;
use secrecy::SecretString;
use service::config::Config;

pub use slack_auth::signature::{
    HmacRequestVerifier, RequestVerifier, SignedRequest, VerificationOptions, SIGNATURE_HEADER,
    TIMESTAMP_HEADER,
};

/// Builds the request verifier described by `config`.
///
/// With validation disabled the verifier accepts everything, so a missing
/// signing secret only matters when validation is on.
pub fn verifier(config: &Config) -> HmacRequestVerifier {
    let options = VerificationOptions {
        version_tag: config.api_version().to_string(),
        verify_timestamps: config.verify_timestamps,
        timestamp_tolerance_secs: config.timestamp_tolerance_secs,
        enabled: config.with_validation,
    };
    let secret = SecretString::from(config.signing_secret().unwrap_or_default().to_string());

    HmacRequestVerifier::new(secret, options)
}

/// Verifies `request`, logging which check failed. The caller only ever sees
/// that verification failed, not why.
pub fn verify(verifier: &dyn RequestVerifier, request: &SignedRequest<'_>) -> Result<(), Error> {
    verifier.verify(request).map_err(|err| {
        warn!("Rejecting unverified request: {err}");
        Error::from(err)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{DomainErrorKind, ExternalErrorKind};
    use clap::Parser;

    fn config(args: &[&str]) -> Config {
        Config::try_parse_from(std::iter::once("resourceful").chain(args.iter().copied()))
            .unwrap()
    }

    #[test]
    fn test_verifier_takes_options_from_config() {
        let verifier = verifier(&config(&[
            "--api-version",
            "v1",
            "--verify-timestamps",
            "false",
            "--timestamp-tolerance-secs",
            "60",
            "--with-validation",
            "true",
            "--signing-secret",
            "shh",
        ]));

        assert_eq!(
            verifier.options(),
            &VerificationOptions {
                version_tag: "v1".to_string(),
                verify_timestamps: false,
                timestamp_tolerance_secs: 60,
                enabled: true,
            }
        );
    }

    #[test]
    fn test_verify_signed_request() {
        let verifier = verifier(&config(&["--signing-secret", "shh"]));
        let timestamp = unix_now().to_string();
        let signature = verifier.sign(&timestamp, b"text=hi").unwrap();
        let request = SignedRequest::new(Some(timestamp.as_str()), Some(signature.as_str()), b"text=hi");

        assert!(verify(&verifier, &request).is_ok());
    }

    #[test]
    fn test_verify_failure_is_unverified() {
        let verifier = verifier(&config(&["--signing-secret", "shh"]));
        let request = SignedRequest::new(None, None, b"text=hi");

        let error = verify(&verifier, &request).unwrap_err();
        assert_eq!(
            error.error_kind,
            DomainErrorKind::External(ExternalErrorKind::Unverified)
        );
    }

    #[test]
    fn test_disabled_validation_needs_no_secret() {
        let verifier = verifier(&config(&["--with-validation", "false"]));
        let request = SignedRequest::new(None, None, b"text=hi");

        assert!(verify(&verifier, &request).is_ok());
    }

    fn unix_now() -> i64 {
        chrono::Utc::now().timestamp()
    }
}
