//! Strongly-typed identifier value objects.
//!
//! Identifiers are positive integers. Construction rejects zero and negative
//! values, so any id held by an entity is already known to be legal.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident, $field:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(try_from = "i64", into = "i64")]
        pub struct $name(i64);

        impl $name {
            /// Creates an id, returning error unless the value is positive.
            pub fn new(value: i64) -> Result<Self, ValidationError> {
                if value <= 0 {
                    return Err(ValidationError::invalid_id($field, value));
                }
                Ok(Self(value))
            }

            /// Returns the inner integer.
            pub fn value(&self) -> i64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl TryFrom<i64> for $name {
            type Error = ValidationError;

            fn try_from(value: i64) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for i64 {
            fn from(id: $name) -> i64 {
                id.0
            }
        }

        impl FromStr for $name {
            type Err = ValidationError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let value: i64 = s
                    .trim()
                    .parse()
                    .map_err(|_| ValidationError::invalid_id($field, 0))?;
                Self::new(value)
            }
        }
    };
}

define_id!(
    /// Unique identifier for an employee.
    EmployeeId,
    "id"
);

define_id!(
    /// Unique identifier for a project.
    ProjectId,
    "project_id"
);
