//! Fluent employee builder.
//!
//! Setters only record values; nothing is validated until [`EmployeeBuilder::build`].
//! The role is inferred from which fields were set, see
//! [`EmployeeDraft::resolve_kind`] for the precedence.

use std::fmt;

use super::employee::Employee;
use super::errors::BuildError;
use super::factory::{EmployeeDraft, EmployeeFactory};

/// Staged constructor resolving to the matching employee role.
#[derive(Debug, Clone, Default)]
pub struct EmployeeBuilder {
    draft: EmployeeDraft,
}

impl EmployeeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_id(mut self, id: i64) -> Self {
        self.draft.id = Some(id);
        self
    }

    pub fn set_name(mut self, name: impl Into<String>) -> Self {
        self.draft.name = Some(name.into());
        self
    }

    pub fn set_department(mut self, department: impl Into<String>) -> Self {
        self.draft.department = Some(department.into());
        self
    }

    pub fn set_base_salary(mut self, base_salary: f64) -> Self {
        self.draft.base_salary = Some(base_salary);
        self
    }

    pub fn set_bonus(mut self, bonus: f64) -> Self {
        self.draft.bonus = Some(bonus);
        self
    }

    pub fn set_skills<I, S>(mut self, skills: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.draft.skills = Some(skills.into_iter().map(Into::into).collect());
        self
    }

    /// Records a seniority level. Accepts text or a [`Level`](super::Level);
    /// unknown text fails at `build()`.
    pub fn set_level(mut self, level: impl fmt::Display) -> Self {
        self.draft.level = Some(level.to_string());
        self
    }

    /// Alias for [`EmployeeBuilder::set_level`].
    pub fn set_seniority(self, level: impl fmt::Display) -> Self {
        self.set_level(level)
    }

    pub fn set_commission(mut self, commission_rate: f64) -> Self {
        self.draft.commission_rate = Some(commission_rate);
        self
    }

    pub fn set_sales(mut self, sales_volume: f64) -> Self {
        self.draft.sales_volume = Some(sales_volume);
        self
    }

    /// Returns the staged fields.
    pub fn draft(&self) -> &EmployeeDraft {
        &self.draft
    }

    /// Validates the staged fields and produces an employee.
    ///
    /// The builder is left untouched, so it can be reused as a template.
    ///
    /// # Errors
    ///
    /// - `IncompleteBuilder` if id, name, department or base salary is unset
    /// - `Invalid` if any staged value fails validation
    pub fn build(&self) -> Result<Employee, BuildError> {
        let kind = self.draft.resolve_kind();
        tracing::debug!(kind = %kind, id = ?self.draft.id, "Building employee");
        EmployeeFactory::create(kind, &self.draft)
    }
}
