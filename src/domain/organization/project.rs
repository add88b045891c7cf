//! Project entity - a time-boxed team with a lifecycle status.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::{EmployeeId, ProjectId, ValidationError};
use crate::domain::staff::{validator, Employee};

/// Project lifecycle status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    #[default]
    Planning,
    InProgress,
    Completed,
    Cancelled,
}

impl ProjectStatus {
    pub const ALL: [ProjectStatus; 4] = [
        ProjectStatus::Planning,
        ProjectStatus::InProgress,
        ProjectStatus::Completed,
        ProjectStatus::Cancelled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectStatus::Planning => "planning",
            ProjectStatus::InProgress => "in_progress",
            ProjectStatus::Completed => "completed",
            ProjectStatus::Cancelled => "cancelled",
        }
    }

    /// True while work is planned or under way.
    pub fn is_open(&self) -> bool {
        matches!(self, ProjectStatus::Planning | ProjectStatus::InProgress)
    }
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ProjectStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        ProjectStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == normalized)
            .ok_or_else(|| ValidationError::invalid_status(s))
    }
}

/// A project and the employees assigned to it.
#[derive(Debug, Clone)]
pub struct Project {
    id: ProjectId,
    name: String,
    description: String,
    deadline: NaiveDate,
    status: ProjectStatus,
    team: Vec<Employee>,
}

impl Project {
    /// Creates a project with an empty team.
    ///
    /// # Errors
    ///
    /// - `InvalidId` if `id <= 0`
    /// - `EmptyName` if `name` is blank
    pub fn new(
        id: i64,
        name: impl Into<String>,
        description: impl Into<String>,
        deadline: NaiveDate,
        status: ProjectStatus,
    ) -> Result<Self, ValidationError> {
        let id = ProjectId::new(id)?;
        let name = validator::validate_name("project_name", name)?;
        Ok(Self {
            id,
            name,
            description: description.into(),
            deadline,
            status,
            team: Vec::new(),
        })
    }

    // ─── Accessors ───

    pub fn id(&self) -> ProjectId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn deadline(&self) -> NaiveDate {
        self.deadline
    }

    pub fn status(&self) -> ProjectStatus {
        self.status
    }

    pub fn team(&self) -> &[Employee] {
        &self.team
    }

    pub fn team_size(&self) -> usize {
        self.team.len()
    }

    pub fn has_member(&self, id: EmployeeId) -> bool {
        self.team.iter().any(|e| e.id() == id)
    }

    /// True if the deadline is before `today` and the project is still open.
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        self.status.is_open() && self.deadline < today
    }

    pub fn calculate_total_salary(&self) -> f64 {
        self.team.iter().map(Employee::calculate_salary).sum()
    }

    // ─── Mutations ───

    /// Replaces the status and returns the previous one.
    pub fn set_status(&mut self, status: ProjectStatus) -> ProjectStatus {
        tracing::debug!(project_id = %self.id, from = %self.status, to = %status, "Project status changed");
        std::mem::replace(&mut self.status, status)
    }

    pub fn add_team_member(&mut self, employee: Employee) {
        self.team.push(employee);
    }

    /// Removes every team member with the given id and returns them.
    pub fn remove_team_member(&mut self, id: EmployeeId) -> Vec<Employee> {
        let (removed, kept): (Vec<_>, Vec<_>) = std::mem::take(&mut self.team)
            .into_iter()
            .partition(|e| e.id() == id);
        self.team = kept;
        removed
    }
}
