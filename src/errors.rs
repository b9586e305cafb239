//! The single signal type raised across the harness.
//!
//! Every failure that can cross an `it` boundary is a [`KataError`], and every
//! variant carries a message. Reporting code never has to guess where the
//! human-readable text lives.

use miette::Diagnostic;
use thiserror::Error;

/// Result type for test case actions and assertions.
pub type CaseResult = Result<(), KataError>;

/// Type-safe classification of a [`KataError`], used by reporters and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// An `assert::*` contract was violated
    Assertion,
    /// Exercise code failed, or a case panicked
    Raised,
    /// The test definition itself is malformed
    Structure,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::Assertion => "Assertion",
            ErrorKind::Raised => "Raised",
            ErrorKind::Structure => "Structure",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Error, Diagnostic)]
pub enum KataError {
    #[error("{message}")]
    #[diagnostic(code(kata::assertion))]
    Assertion {
        message: String,
        /// Rendering of the expected value, when the assertion compared values.
        expected: Option<String>,
        /// Rendering of the actual value, when the assertion compared values.
        actual: Option<String>,
    },

    #[error("{message}")]
    #[diagnostic(code(kata::raised))]
    Raised { message: String },

    #[error("{message}")]
    #[diagnostic(
        code(kata::structure),
        help("failures outside of an `it` case abort the run; move the check into a case")
    )]
    Structure { message: String },
}

impl KataError {
    /// An assertion failure with no attached values.
    pub fn assertion(message: impl Into<String>) -> Self {
        KataError::Assertion {
            message: message.into(),
            expected: None,
            actual: None,
        }
    }

    /// An assertion failure that compared two rendered values.
    pub fn mismatch(
        message: impl Into<String>,
        expected: impl Into<String>,
        actual: impl Into<String>,
    ) -> Self {
        KataError::Assertion {
            message: message.into(),
            expected: Some(expected.into()),
            actual: Some(actual.into()),
        }
    }

    /// Wraps any displayable error raised by exercise code.
    ///
    /// Intended for `map_err`: `contact.set_phone(n).map_err(KataError::raised)?`.
    pub fn raised(error: impl std::fmt::Display) -> Self {
        KataError::Raised {
            message: error.to_string(),
        }
    }

    pub fn structure(message: impl Into<String>) -> Self {
        KataError::Structure {
            message: message.into(),
        }
    }

    /// Converts a payload caught by `catch_unwind` into a raised error.
    pub fn from_panic(payload: Box<dyn std::any::Any + Send>) -> Self {
        let detail = if let Some(s) = payload.downcast_ref::<&str>() {
            (*s).to_string()
        } else if let Some(s) = payload.downcast_ref::<String>() {
            s.clone()
        } else {
            "unknown panic payload".to_string()
        };
        KataError::Raised {
            message: format!("panicked: {}", detail),
        }
    }

    pub fn message(&self) -> &str {
        match self {
            KataError::Assertion { message, .. }
            | KataError::Raised { message }
            | KataError::Structure { message } => message,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            KataError::Assertion { .. } => ErrorKind::Assertion,
            KataError::Raised { .. } => ErrorKind::Raised,
            KataError::Structure { .. } => ErrorKind::Structure,
        }
    }
}

impl From<String> for KataError {
    fn from(message: String) -> Self {
        KataError::Raised { message }
    }
}

impl From<&str> for KataError {
    fn from(message: &str) -> Self {
        KataError::Raised {
            message: message.to_string(),
        }
    }
}
