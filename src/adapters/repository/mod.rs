//! Employee Repository Adapters
//!
//! Implementations of the EmployeeRepository port.
//!
//! ## Available Adapters
//!
//! - **InMemoryEmployeeRepository** - Keeps employees in memory (default, tests)
//! - **JsonFileEmployeeRepository** - Mirrors every change into a JSON file
//!
//! ## Usage
//!
//! ```ignore
//! use staffing::adapters::repository::{InMemoryEmployeeRepository, JsonFileEmployeeRepository};
//!
//! let repo = InMemoryEmployeeRepository::new();
//! let repo = JsonFileEmployeeRepository::open("./data/employees.json")?;
//! ```

mod in_memory;
mod json_file;

pub use in_memory::InMemoryEmployeeRepository;
pub use json_file::JsonFileEmployeeRepository;
