//! Staffing - employees, departments, projects and companies
//!
//! This crate models a small organization: validated employees with
//! role-specific salary strategies, grouped into departments and projects
//! under a company that keeps its staff in a pluggable repository.
//! Employees can be assembled with a fluent builder or a kind-driven
//! factory, and wrapped in salary decorators.

pub mod adapters;
pub mod config;
pub mod context;
pub mod domain;
pub mod ports;
pub mod telemetry;

pub use context::{AppContext, ContextError};
