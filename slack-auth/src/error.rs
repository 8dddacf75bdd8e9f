//! Error types for the `slack-auth` crate.
//!
//! Follows the same pattern as domain::error with a root Error struct and error kind enums.

use std::error::Error as StdError;
use std::fmt;

/// Top-level error type for slack-auth crate.
/// Holds error kind and optional source for error chaining.
#[derive(Debug)]
pub struct Error {
    pub source: Option<Box<dyn StdError + Send + Sync>>,
    pub error_kind: ErrorKind,
}

/// Major categories of errors in slack-auth.
#[derive(Debug, PartialEq)]
pub enum ErrorKind {
    Signature(SignatureErrorKind),
    Key,
}

/// Reasons a signed request is rejected.
#[derive(Debug, PartialEq)]
pub enum SignatureErrorKind {
    MissingTimestamp,
    MalformedTimestamp,
    StaleRequest,
    MissingSignature,
    SignatureMismatch,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.error_kind {
            ErrorKind::Signature(kind) => write!(f, "Signature error: {:?}", kind),
            ErrorKind::Key => write!(f, "Signing key error"),
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn StdError + 'static))
    }
}

/// Helper function to create signature errors.
pub fn signature_error(kind: SignatureErrorKind, message: &str) -> Error {
    Error {
        source: Some(message.to_string().into()),
        error_kind: ErrorKind::Signature(kind),
    }
}

/// Helper function to create signing key errors.
pub fn key_error(message: &str) -> Error {
    Error {
        source: Some(message.to_string().into()),
        error_kind: ErrorKind::Key,
    }
}
