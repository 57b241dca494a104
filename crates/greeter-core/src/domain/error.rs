// ============================================================================
// domain/error.rs - CLOSED ERROR TAXONOMY
// ============================================================================

use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Category of a failure.
///
/// The set is closed: business-rule violations originate in the domain as
/// `Validation`, everything the write boundary cannot complete surfaces as
/// `Infrastructure`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorKind {
    /// Caller input violates a business rule. Never transient.
    Validation,
    /// The outbound collaborator could not complete (I/O, cancellation, panic).
    Infrastructure,
}

impl ErrorKind {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::Infrastructure => "infrastructure",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The only failure payload in the core: a kind plus a human-readable message.
///
/// All errors are:
/// - Cloneable (callers may keep a copy for reporting)
/// - Categorizable (for CLI display and exit codes)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq, Eq, Serialize)]
#[error("{kind} error: {message}")]
pub struct ErrorType {
    kind: ErrorKind,
    message: String,
}

impl ErrorType {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Validation, message)
    }

    pub fn infrastructure(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Infrastructure, message)
    }

    pub const fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub const fn is_validation(&self) -> bool {
        matches!(self.kind, ErrorKind::Validation)
    }

    pub const fn is_infrastructure(&self) -> bool {
        matches!(self.kind, ErrorKind::Infrastructure)
    }

    /// Whether retrying the same call could succeed.
    ///
    /// Validation failures are deterministic; infrastructure failures may be
    /// transient. The core itself never retries.
    pub const fn is_retryable(&self) -> bool {
        self.is_infrastructure()
    }

    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self.kind {
            ErrorKind::Validation => vec![
                format!("Check your input: {}", self.message),
                "Names must contain 1 to 100 characters and not be blank".into(),
            ],
            ErrorKind::Infrastructure => vec![
                format!("Output failed: {}", self.message),
                "Check that the output stream is still open".into(),
                "The operation may succeed if retried".into(),
            ],
        }
    }
}
