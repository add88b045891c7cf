//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `repository` - Employee repository implementations (in-memory, JSON file)
//! - `export` - One-way company snapshots

pub mod export;
pub mod repository;

pub use export::{CompanySnapshot, DepartmentSummary, ProjectSummary};
pub use repository::{InMemoryEmployeeRepository, JsonFileEmployeeRepository};
