//! Service error taxonomy
//!
//! Every failure a request can produce, as typed values rather than panics.
//! The construction site is captured so debug responses can report file/line.

use std::fmt;
use std::panic::Location;

use thiserror::Error;

/// Required submission fields, in validation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequiredField {
    Name,
    Email,
    Text,
}

impl RequiredField {
    /// JSON key of the field in the submission payload.
    pub const fn key(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Text => "text",
        }
    }

    const fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Email => "Email",
            Self::Text => "Text",
        }
    }
}

/// Request-scoped failure kinds. Messages are the service's public wording.
#[derive(Debug, Error)]
pub enum ErrorKind {
    #[error("Unsupported path: {0}")]
    UnsupportedPath(String),
    #[error("Unsupported request method: {0}")]
    UnsupportedMethod(String),
    #[error("Nothing was submitted.")]
    EmptyPayload,
    #[error("{} is required.", .0.label())]
    MissingField(RequiredField),
    #[error("Entry for this user already exists.")]
    DuplicateSubmission,
    #[error("Entries file is corrupt: {0}")]
    CorruptStore(String),
    #[error("Config file is corrupt: {0}")]
    CorruptConfig(String),
    #[error("Entries file is busy, try again later.")]
    StoreBusy,
    #[error("Store I/O error: {0}")]
    Io(String),
}

impl ErrorKind {
    /// Stable taxonomy name, exposed as `kind` in debug error details.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::UnsupportedPath(_) => "UnsupportedPathError",
            Self::UnsupportedMethod(_) => "UnsupportedMethodError",
            Self::EmptyPayload => "EmptyPayloadError",
            Self::MissingField(_) => "MissingFieldError",
            Self::DuplicateSubmission => "DuplicateSubmissionError",
            Self::CorruptStore(_) => "CorruptStoreError",
            Self::CorruptConfig(_) => "CorruptConfigError",
            Self::StoreBusy => "StoreBusyError",
            Self::Io(_) => "StoreIoError",
        }
    }
}

/// An `ErrorKind` plus the source location where it was raised.
#[derive(Debug)]
pub struct ServiceError {
    kind: ErrorKind,
    location: &'static Location<'static>,
}

impl ServiceError {
    #[track_caller]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            location: Location::caller(),
        }
    }

    pub const fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    pub const fn location(&self) -> &'static Location<'static> {
        self.location
    }
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.kind, f)
    }
}

impl std::error::Error for ServiceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.kind)
    }
}

impl From<ErrorKind> for ServiceError {
    #[track_caller]
    fn from(kind: ErrorKind) -> Self {
        Self::new(kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_messages() {
        assert_eq!(ErrorKind::EmptyPayload.to_string(), "Nothing was submitted.");
        assert_eq!(
            ErrorKind::MissingField(RequiredField::Email).to_string(),
            "Email is required."
        );
        assert_eq!(
            ErrorKind::DuplicateSubmission.to_string(),
            "Entry for this user already exists."
        );
        assert_eq!(
            ErrorKind::UnsupportedPath("/x".to_string()).to_string(),
            "Unsupported path: /x"
        );
    }

    #[test]
    fn test_location_capture() {
        let err = ServiceError::new(ErrorKind::StoreBusy);
        assert!(err.location().file().ends_with("error.rs"));
        assert_eq!(err.kind().name(), "StoreBusyError");
    }
}
