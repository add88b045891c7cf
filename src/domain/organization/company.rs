//! Company aggregate.
//!
//! A company owns its departments and projects, and an employee repository.
//! Employee lookups treat the repository and the departments as one
//! population, de-duplicated by id with the repository copy taking
//! precedence.

use std::collections::HashSet;
use std::fmt;

use super::department::Department;
use super::errors::CompanyError;
use super::project::{Project, ProjectStatus};
use crate::domain::foundation::{EmployeeId, ProjectId, ValidationError};
use crate::domain::staff::{validator, Employee};
use crate::ports::EmployeeRepository;

pub struct Company {
    name: String,
    departments: Vec<Department>,
    projects: Vec<Project>,
    repository: Box<dyn EmployeeRepository>,
}

impl Company {
    /// Creates a company with no departments or projects.
    ///
    /// # Errors
    ///
    /// - `EmptyName` if `name` is blank
    pub fn new(
        name: impl Into<String>,
        repository: Box<dyn EmployeeRepository>,
    ) -> Result<Self, ValidationError> {
        let name = validator::validate_name("company_name", name)?;
        Ok(Self {
            name,
            departments: Vec::new(),
            projects: Vec::new(),
            repository,
        })
    }

    // ─── Accessors ───

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn repository(&self) -> &dyn EmployeeRepository {
        self.repository.as_ref()
    }

    pub fn get_departments(&self) -> &[Department] {
        &self.departments
    }

    pub fn get_projects(&self) -> &[Project] {
        &self.projects
    }

    // ─── Departments ───

    pub fn add_department(&mut self, department: Department) {
        tracing::info!(company = %self.name, department = %department.name(), "Department added");
        self.departments.push(department);
    }

    /// First department with the given name.
    pub fn find_department(&self, name: &str) -> Option<&Department> {
        self.departments.iter().find(|d| d.name() == name)
    }

    pub fn find_department_mut(&mut self, name: &str) -> Option<&mut Department> {
        self.departments.iter_mut().find(|d| d.name() == name)
    }

    /// Removes the first department with the given name.
    ///
    /// Returns `Ok(None)` if no department has that name.
    ///
    /// # Errors
    ///
    /// - `NonEmptyDepartment` if the department still has members; the
    ///   company is left unchanged
    pub fn remove_department(&mut self, name: &str) -> Result<Option<Department>, CompanyError> {
        let Some(index) = self.departments.iter().position(|d| d.name() == name) else {
            return Ok(None);
        };
        let members = self.departments[index].len();
        if members > 0 {
            return Err(CompanyError::non_empty_department(name, members));
        }
        tracing::info!(company = %self.name, department = %name, "Department removed");
        Ok(Some(self.departments.remove(index)))
    }

    // ─── Employees ───

    /// Stores an employee in the repository, returning the record it replaced.
    ///
    /// # Errors
    ///
    /// - `Repository` if the repository cannot persist the change
    pub fn add_employee(&mut self, employee: Employee) -> Result<Option<Employee>, CompanyError> {
        Ok(self.repository.add(employee)?)
    }

    /// Removes an employee from the repository. Department membership is
    /// left alone.
    ///
    /// # Errors
    ///
    /// - `Repository` if the repository cannot persist the change
    pub fn remove_employee(&mut self, id: EmployeeId) -> Result<Option<Employee>, CompanyError> {
        Ok(self.repository.remove(id)?)
    }

    /// Looks in the repository first, then each department in order.
    pub fn find_employee_by_id(&self, id: EmployeeId) -> Option<&Employee> {
        self.repository
            .find_by_id(id)
            .or_else(|| self.departments.iter().find_map(|d| d.find_by_id(id)))
    }

    /// Repository employees (by id) followed by department members not
    /// already seen, in department order.
    pub fn get_all_employees(&self) -> Vec<&Employee> {
        let mut seen = HashSet::new();
        let mut all = Vec::new();
        let departments = self.departments.iter().flat_map(Department::iter);
        for employee in self.repository.get_all().into_iter().chain(departments) {
            if seen.insert(employee.id()) {
                all.push(employee);
            }
        }
        all
    }

    /// Sum of computed salaries over [`Company::get_all_employees`].
    ///
    /// Project teams are not counted separately.
    pub fn calculate_total_monthly_cost(&self) -> f64 {
        self.get_all_employees()
            .into_iter()
            .map(Employee::calculate_salary)
            .sum()
    }

    // ─── Projects ───

    pub fn add_project(&mut self, project: Project) {
        tracing::info!(company = %self.name, project_id = %project.id(), "Project added");
        self.projects.push(project);
    }

    pub fn find_project(&self, id: ProjectId) -> Option<&Project> {
        self.projects.iter().find(|p| p.id() == id)
    }

    pub fn find_project_mut(&mut self, id: ProjectId) -> Option<&mut Project> {
        self.projects.iter_mut().find(|p| p.id() == id)
    }

    pub fn get_projects_by_status(&self, status: ProjectStatus) -> Vec<&Project> {
        self.projects.iter().filter(|p| p.status() == status).collect()
    }

    pub fn get_info(&self) -> String {
        format!(
            "Company {}: {} employees in {} departments, {} projects, monthly cost {:.2}",
            self.name,
            self.get_all_employees().len(),
            self.departments.len(),
            self.projects.len(),
            self.calculate_total_monthly_cost()
        )
    }
}

impl fmt::Debug for Company {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Company")
            .field("name", &self.name)
            .field("departments", &self.departments.len())
            .field("projects", &self.projects.len())
            .field("repository_len", &self.repository.len())
            .finish()
    }
}
