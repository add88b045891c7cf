//! Department aggregate - an ordered collection of employees.

use std::ops::Index;

use crate::domain::foundation::{EmployeeId, ValidationError};
use crate::domain::staff::{validator, Employee};

/// A named, ordered group of employees.
///
/// Insertion order is preserved. Id uniqueness is not enforced here; the
/// company de-duplicates when it merges departments with the repository.
#[derive(Debug, Clone)]
pub struct Department {
    name: String,
    employees: Vec<Employee>,
}

impl Department {
    /// Creates an empty department.
    ///
    /// # Errors
    ///
    /// - `EmptyName` if `name` is blank
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = validator::validate_name("department", name)?;
        Ok(Self {
            name,
            employees: Vec::new(),
        })
    }

    // ─── Accessors ───

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    pub fn len(&self) -> usize {
        self.employees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Employee> {
        self.employees.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Employee> {
        self.employees.iter()
    }

    pub fn contains(&self, id: EmployeeId) -> bool {
        self.employees.iter().any(|e| e.id() == id)
    }

    // ─── Queries ───

    /// First member with the given id.
    pub fn find_by_id(&self, id: EmployeeId) -> Option<&Employee> {
        self.employees.iter().find(|e| e.id() == id)
    }

    pub fn find_by_id_mut(&mut self, id: EmployeeId) -> Option<&mut Employee> {
        self.employees.iter_mut().find(|e| e.id() == id)
    }

    /// All members whose name matches exactly.
    pub fn find_by_name(&self, name: &str) -> Vec<&Employee> {
        self.employees.iter().filter(|e| e.name() == name).collect()
    }

    pub fn calculate_total_salary(&self) -> f64 {
        self.employees.iter().map(Employee::calculate_salary).sum()
    }

    /// Mean computed salary, `0.0` for an empty department.
    pub fn calculate_average_salary(&self) -> f64 {
        if self.employees.is_empty() {
            return 0.0;
        }
        self.calculate_total_salary() / self.employees.len() as f64
    }

    pub fn get_info(&self) -> String {
        format!(
            "Department {}: {} employees, total salary {:.2}",
            self.name,
            self.employees.len(),
            self.calculate_total_salary()
        )
    }

    // ─── Mutations ───

    /// Appends an employee.
    pub fn add(&mut self, employee: Employee) {
        tracing::debug!(department = %self.name, employee_id = %employee.id(), "Adding employee to department");
        self.employees.push(employee);
    }

    /// Removes every member with the given id and returns them.
    ///
    /// Removing an absent id is a no-op.
    pub fn remove(&mut self, id: EmployeeId) -> Vec<Employee> {
        let (removed, kept): (Vec<_>, Vec<_>) = std::mem::take(&mut self.employees)
            .into_iter()
            .partition(|e| e.id() == id);
        self.employees = kept;
        if !removed.is_empty() {
            tracing::debug!(department = %self.name, employee_id = %id, count = removed.len(), "Removed employee from department");
        }
        removed
    }
}

impl Index<usize> for Department {
    type Output = Employee;

    fn index(&self, index: usize) -> &Employee {
        &self.employees[index]
    }
}

impl<'a> IntoIterator for &'a Department {
    type Item = &'a Employee;
    type IntoIter = std::slice::Iter<'a, Employee>;

    fn into_iter(self) -> Self::IntoIter {
        self.employees.iter()
    }
}
