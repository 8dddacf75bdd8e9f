//! Error types for entity API
use std::error::Error as StdError;
use std::fmt;

use serde::Serialize;

/// Errors while executing operations against a resource repository.
/// The in-memory store never fails, but other stores behind the `Repository`
/// trait report through this type.
#[derive(Debug)]
pub struct Error {
    // Underlying error emitted by the store implementation
    pub source: Option<Box<dyn StdError + Send + Sync>>,
    // Enum representing which category of error
    pub error_kind: EntityApiErrorKind,
}

#[derive(Debug, PartialEq, Serialize)]
pub enum EntityApiErrorKind {
    // Record not written
    RecordNotSaved,
    // Errors related to interactions with the store itself
    SystemError,
    // A location token that is not a well-formed URI reference
    InvalidLocation,
    // Other errors
    Other,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Entity API Error: {:?}", self)
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn StdError + 'static))
    }
}

impl Error {
    pub fn system(message: &str) -> Self {
        Error {
            source: Some(message.to_string().into()),
            error_kind: EntityApiErrorKind::SystemError,
        }
    }

    pub fn invalid_location(message: &str) -> Self {
        Error {
            source: Some(message.to_string().into()),
            error_kind: EntityApiErrorKind::InvalidLocation,
        }
    }
}
