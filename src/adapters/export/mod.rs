//! Export adapters.
//!
//! Write-only views of the company for reporting. Nothing here is read back.

mod snapshot;

pub use snapshot::{CompanySnapshot, DepartmentSummary, ProjectSummary};
