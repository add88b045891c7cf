//! Company snapshot for reporting
//!
//! A flat summary of a company: department sizes, project statuses and the
//! total monthly cost. Serializes to JSON; there is no import path.

use serde::Serialize;

use crate::domain::foundation::ProjectId;
use crate::domain::organization::{Company, Department, Project, ProjectStatus};

/// Summary of a company at one point in time.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompanySnapshot {
    pub name: String,
    pub departments: Vec<DepartmentSummary>,
    pub projects: Vec<ProjectSummary>,
    /// Same value as `Company::calculate_total_monthly_cost`
    pub total_cost: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DepartmentSummary {
    pub name: String,
    pub employee_count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectSummary {
    pub id: ProjectId,
    pub name: String,
    pub status: ProjectStatus,
}

impl CompanySnapshot {
    pub fn from_company(company: &Company) -> Self {
        Self {
            name: company.name().to_string(),
            departments: company
                .get_departments()
                .iter()
                .map(DepartmentSummary::from)
                .collect(),
            projects: company.get_projects().iter().map(ProjectSummary::from).collect(),
            total_cost: company.calculate_total_monthly_cost(),
        }
    }

    /// Compact JSON rendering.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Indented JSON rendering.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

impl From<&Company> for CompanySnapshot {
    fn from(company: &Company) -> Self {
        Self::from_company(company)
    }
}

impl From<&Department> for DepartmentSummary {
    fn from(department: &Department) -> Self {
        Self {
            name: department.name().to_string(),
            employee_count: department.len(),
        }
    }
}

impl From<&Project> for ProjectSummary {
    fn from(project: &Project) -> Self {
        Self {
            id: project.id(),
            name: project.name().to_string(),
            status: project.status(),
        }
    }
}
