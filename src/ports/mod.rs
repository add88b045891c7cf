//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Persistence Ports
//!
//! - `EmployeeRepository` - Keyed employee storage used by the company aggregate

mod employee_repository;

pub use employee_repository::{EmployeeRepository, RepositoryError};
