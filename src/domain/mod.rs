//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, validation errors)
//! - `staff` - Employee entity, salary strategies and construction patterns
//! - `organization` - Departments, projects and the company aggregate

pub mod foundation;
pub mod organization;
pub mod staff;
