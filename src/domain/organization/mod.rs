//! Organization module - how employees are grouped.
//!
//! - `department` - ordered employee collection with salary aggregates
//! - `project` - team with a deadline and lifecycle status
//! - `company` - root aggregate owning departments, projects and the repository

mod company;
mod department;
mod errors;
mod project;

pub use company::Company;
pub use department::Department;
pub use errors::CompanyError;
pub use project::{Project, ProjectStatus};
