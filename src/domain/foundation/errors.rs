//! Error types for the domain layer.

use std::fmt;
use thiserror::Error;

/// Errors that occur during entity and value object construction.
///
/// Raised synchronously by constructors and narrow setters, never deferred
/// to salary calculation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Field '{field}' must be a positive integer, got {actual}")]
    InvalidId { field: String, actual: i64 },

    #[error("Field '{field}' cannot be empty")]
    EmptyName { field: String },

    #[error("Field '{field}' must be a non-negative amount, got {actual}")]
    NegativeSalary { field: String, actual: f64 },

    #[error("Invalid bonus: {reason}")]
    InvalidBonus { reason: String },

    #[error("Invalid level '{value}': expected junior, middle or senior")]
    InvalidLevel { value: String },

    #[error("Invalid commission: {reason}")]
    InvalidCommission { reason: String },

    #[error("Invalid project status '{value}'")]
    InvalidStatus { value: String },

    #[error("Employee {id} is a {actual}, operation requires a {expected}")]
    RoleMismatch {
        id: i64,
        expected: &'static str,
        actual: &'static str,
    },
}

impl ValidationError {
    /// Creates an invalid id error.
    pub fn invalid_id(field: impl Into<String>, actual: i64) -> Self {
        ValidationError::InvalidId {
            field: field.into(),
            actual,
        }
    }

    /// Creates an empty name error.
    pub fn empty_name(field: impl Into<String>) -> Self {
        ValidationError::EmptyName { field: field.into() }
    }

    /// Creates a negative amount error.
    pub fn negative_salary(field: impl Into<String>, actual: f64) -> Self {
        ValidationError::NegativeSalary {
            field: field.into(),
            actual,
        }
    }

    /// Creates an invalid bonus error.
    pub fn invalid_bonus(reason: impl Into<String>) -> Self {
        ValidationError::InvalidBonus {
            reason: reason.into(),
        }
    }

    /// Creates an invalid level error.
    pub fn invalid_level(value: impl Into<String>) -> Self {
        ValidationError::InvalidLevel {
            value: value.into(),
        }
    }

    /// Creates an invalid commission error.
    pub fn invalid_commission(reason: impl Into<String>) -> Self {
        ValidationError::InvalidCommission {
            reason: reason.into(),
        }
    }

    /// Creates an invalid project status error.
    pub fn invalid_status(value: impl Into<String>) -> Self {
        ValidationError::InvalidStatus {
            value: value.into(),
        }
    }

    /// Returns the error code for this validation failure.
    pub fn code(&self) -> ErrorCode {
        match self {
            ValidationError::InvalidId { .. } => ErrorCode::InvalidId,
            ValidationError::EmptyName { .. } => ErrorCode::EmptyName,
            ValidationError::NegativeSalary { .. } => ErrorCode::NegativeSalary,
            ValidationError::InvalidBonus { .. } => ErrorCode::InvalidBonus,
            ValidationError::InvalidLevel { .. } => ErrorCode::InvalidLevel,
            ValidationError::InvalidCommission { .. } => ErrorCode::InvalidCommission,
            ValidationError::InvalidStatus { .. } => ErrorCode::InvalidStatus,
            ValidationError::RoleMismatch { .. } => ErrorCode::RoleMismatch,
        }
    }
}

/// Error codes organized by category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Validation errors
    InvalidId,
    EmptyName,
    NegativeSalary,
    InvalidBonus,
    InvalidLevel,
    InvalidCommission,
    InvalidStatus,
    RoleMismatch,

    // Construction errors
    IncompleteBuilder,
    UnknownEmployeeKind,

    // Policy errors
    NonEmptyDepartment,

    // Infrastructure errors
    StorageError,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::InvalidId => "INVALID_ID",
            ErrorCode::EmptyName => "EMPTY_NAME",
            ErrorCode::NegativeSalary => "NEGATIVE_SALARY",
            ErrorCode::InvalidBonus => "INVALID_BONUS",
            ErrorCode::InvalidLevel => "INVALID_LEVEL",
            ErrorCode::InvalidCommission => "INVALID_COMMISSION",
            ErrorCode::InvalidStatus => "INVALID_STATUS",
            ErrorCode::RoleMismatch => "ROLE_MISMATCH",
            ErrorCode::IncompleteBuilder => "INCOMPLETE_BUILDER",
            ErrorCode::UnknownEmployeeKind => "UNKNOWN_EMPLOYEE_KIND",
            ErrorCode::NonEmptyDepartment => "NON_EMPTY_DEPARTMENT",
            ErrorCode::StorageError => "STORAGE_ERROR",
        };
        write!(f, "{}", s)
    }
}
