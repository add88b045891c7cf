//! Construction errors for the builder and factory.

use thiserror::Error;

use crate::domain::foundation::{ErrorCode, ValidationError};

/// Errors raised while assembling an employee from staged input.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BuildError {
    #[error("Builder is missing required fields: {}", .missing.join(", "))]
    IncompleteBuilder { missing: Vec<&'static str> },

    #[error("Unknown employee kind '{value}'")]
    UnknownKind { value: String },

    #[error(transparent)]
    Invalid(#[from] ValidationError),
}

impl BuildError {
    /// Creates an incomplete builder error.
    pub fn incomplete(missing: Vec<&'static str>) -> Self {
        BuildError::IncompleteBuilder { missing }
    }

    /// Creates an unknown kind error.
    pub fn unknown_kind(value: impl Into<String>) -> Self {
        BuildError::UnknownKind {
            value: value.into(),
        }
    }

    /// Returns the error code.
    pub fn code(&self) -> ErrorCode {
        match self {
            BuildError::IncompleteBuilder { .. } => ErrorCode::IncompleteBuilder,
            BuildError::UnknownKind { .. } => ErrorCode::UnknownEmployeeKind,
            BuildError::Invalid(err) => err.code(),
        }
    }
}
