//! Staff module - the employee entity and its construction patterns.
//!
//! - `employee` - the validated entity
//! - `strategy` - polymorphic salary computation
//! - `builder` / `factory` - staged and kind-driven construction
//! - `decorator` - salary wrappers

mod builder;
mod decorator;
mod employee;
mod errors;
mod factory;
mod level;
mod strategy;
pub mod validator;

pub use builder::EmployeeBuilder;
pub use decorator::{BonusDecorator, Payable};
pub use employee::Employee;
pub use errors::BuildError;
pub use factory::{EmployeeDraft, EmployeeFactory};
pub use level::Level;
pub use strategy::{EmployeeKind, SalaryStrategy};
