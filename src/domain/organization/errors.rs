//! Company-level errors.

use thiserror::Error;

use crate::domain::foundation::ErrorCode;
use crate::ports::RepositoryError;

/// Errors from company operations.
#[derive(Debug, Error)]
pub enum CompanyError {
    #[error("Cannot remove department '{name}': it still has {employees} employees")]
    NonEmptyDepartment { name: String, employees: usize },

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl CompanyError {
    pub fn non_empty_department(name: impl Into<String>, employees: usize) -> Self {
        CompanyError::NonEmptyDepartment {
            name: name.into(),
            employees,
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            CompanyError::NonEmptyDepartment { .. } => ErrorCode::NonEmptyDepartment,
            CompanyError::Repository(err) => err.code(),
        }
    }
}
