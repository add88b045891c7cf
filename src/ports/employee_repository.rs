//! Employee repository port.
//!
//! Defines the contract for storing and retrieving employees by id.
//! Implementations decide where the records live.
//!
//! # Design
//!
//! - **Keyed by id**: one record per `EmployeeId`, last write wins
//! - **Lookups never fail**: a missing id is `None`, not an error
//! - **Only writes can fail**: durable adapters report I/O problems through
//!   [`RepositoryError`]

use std::path::PathBuf;

use thiserror::Error;

use crate::domain::foundation::{EmployeeId, ErrorCode, ValidationError};
use crate::domain::staff::Employee;

/// Errors raised by repository adapters.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Storage I/O failed for {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to encode employee records: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Stored employee record {id} is invalid: {source}")]
    CorruptRecord {
        id: i64,
        #[source]
        source: ValidationError,
    },
}

impl RepositoryError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        RepositoryError::Io {
            path: path.into(),
            source,
        }
    }

    pub fn code(&self) -> ErrorCode {
        ErrorCode::StorageError
    }
}

/// Repository port for employee persistence.
///
/// Implementations must ensure:
/// - `add` replaces any existing record with the same id
/// - `get_all` yields employees ordered by id
pub trait EmployeeRepository: Send + Sync {
    /// Stores an employee, returning the record it replaced.
    ///
    /// # Errors
    ///
    /// - `Io` / `Serialization` if a durable adapter cannot persist the change
    fn add(&mut self, employee: Employee) -> Result<Option<Employee>, RepositoryError>;

    /// Finds an employee by id.
    ///
    /// Returns `None` if not found.
    fn find_by_id(&self, id: EmployeeId) -> Option<&Employee>;

    /// All stored employees, ordered by id.
    fn get_all(&self) -> Vec<&Employee>;

    /// Removes an employee, returning it if it was present.
    ///
    /// # Errors
    ///
    /// - `Io` / `Serialization` if a durable adapter cannot persist the change
    fn remove(&mut self, id: EmployeeId) -> Result<Option<Employee>, RepositoryError>;

    /// Number of stored employees.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn contains(&self, id: EmployeeId) -> bool {
        self.find_by_id(id).is_some()
    }
}
