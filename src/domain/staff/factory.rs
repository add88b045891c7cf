//! Kind-driven employee construction.
//!
//! [`EmployeeDraft`] is the staging structure shared with the builder: every
//! field is optional until a concrete employee is produced. The factory turns
//! a draft plus an explicit [`EmployeeKind`] into a validated [`Employee`],
//! filling unset role fields with their defaults.

use super::employee::Employee;
use super::errors::BuildError;
use super::level::Level;
use super::strategy::{EmployeeKind, SalaryStrategy};

/// Unvalidated employee fields collected before construction.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EmployeeDraft {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub department: Option<String>,
    pub base_salary: Option<f64>,
    pub bonus: Option<f64>,
    pub skills: Option<Vec<String>>,
    pub level: Option<String>,
    pub commission_rate: Option<f64>,
    pub sales_volume: Option<f64>,
}

impl EmployeeDraft {
    /// Names of the mandatory fields that are still unset.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.id.is_none() {
            missing.push("id");
        }
        if self.name.is_none() {
            missing.push("name");
        }
        if self.department.is_none() {
            missing.push("department");
        }
        if self.base_salary.is_none() {
            missing.push("base_salary");
        }
        missing
    }

    /// Picks the role implied by the fields that were set.
    ///
    /// Precedence, first match wins: bonus → manager, level → developer,
    /// commission → salesperson, otherwise a base employee. Skills without a
    /// level and sales without a commission do not select a role.
    pub fn resolve_kind(&self) -> EmployeeKind {
        if self.bonus.is_some() {
            EmployeeKind::Manager
        } else if self.level.is_some() {
            EmployeeKind::Developer
        } else if self.commission_rate.is_some() {
            EmployeeKind::Salesperson
        } else {
            EmployeeKind::Employee
        }
    }
}

/// Creates employees of an explicitly requested kind.
pub struct EmployeeFactory;

impl EmployeeFactory {
    /// Builds an employee of `kind` from `draft`.
    ///
    /// Unset role fields default to: bonus 0, level junior, no skills,
    /// commission 0, sales 0. Role fields that belong to another kind are
    /// ignored.
    ///
    /// # Errors
    ///
    /// - `IncompleteBuilder` if id, name, department or base salary is unset
    /// - `Invalid` for any validation failure, including an unknown level
    pub fn create(kind: EmployeeKind, draft: &EmployeeDraft) -> Result<Employee, BuildError> {
        let (Some(id), Some(name), Some(department), Some(base_salary)) = (
            draft.id,
            draft.name.as_deref(),
            draft.department.as_deref(),
            draft.base_salary,
        ) else {
            return Err(BuildError::incomplete(draft.missing_fields()));
        };

        let strategy = match kind {
            EmployeeKind::Employee => SalaryStrategy::Base,
            EmployeeKind::Manager => SalaryStrategy::manager(draft.bonus.unwrap_or(0.0)),
            EmployeeKind::Developer => {
                let level = match draft.level.as_deref() {
                    Some(level) => level.parse::<Level>()?,
                    None => Level::default(),
                };
                SalaryStrategy::developer(level, draft.skills.clone().unwrap_or_default())
            }
            EmployeeKind::Salesperson => SalaryStrategy::salesperson(
                draft.commission_rate.unwrap_or(0.0),
                draft.sales_volume.unwrap_or(0.0),
            ),
        };

        Ok(Employee::with_strategy(
            id,
            name,
            department,
            base_salary,
            strategy,
        )?)
    }

    /// Builds an employee whose kind is given as text (`"manager"`, ...).
    ///
    /// # Errors
    ///
    /// - `UnknownKind` if the text names no known role
    /// - anything [`EmployeeFactory::create`] can return
    pub fn create_named(kind: &str, draft: &EmployeeDraft) -> Result<Employee, BuildError> {
        Self::create(kind.parse()?, draft)
    }
}
