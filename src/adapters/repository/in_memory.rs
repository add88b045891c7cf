//! In-Memory Employee Repository Adapter
//!
//! Stores employees in an ordered map keyed by id.

use std::collections::BTreeMap;

use crate::domain::foundation::EmployeeId;
use crate::domain::staff::Employee;
use crate::ports::{EmployeeRepository, RepositoryError};

/// In-memory employee storage. Never fails.
#[derive(Debug, Clone, Default)]
pub struct InMemoryEmployeeRepository {
    employees: BTreeMap<EmployeeId, Employee>,
}

impl InMemoryEmployeeRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear all stored employees (useful for tests)
    pub fn clear(&mut self) {
        self.employees.clear();
    }
}

impl FromIterator<Employee> for InMemoryEmployeeRepository {
    fn from_iter<I: IntoIterator<Item = Employee>>(iter: I) -> Self {
        Self {
            employees: iter.into_iter().map(|e| (e.id(), e)).collect(),
        }
    }
}

impl EmployeeRepository for InMemoryEmployeeRepository {
    fn add(&mut self, employee: Employee) -> Result<Option<Employee>, RepositoryError> {
        Ok(self.employees.insert(employee.id(), employee))
    }

    fn find_by_id(&self, id: EmployeeId) -> Option<&Employee> {
        self.employees.get(&id)
    }

    fn get_all(&self) -> Vec<&Employee> {
        self.employees.values().collect()
    }

    fn remove(&mut self, id: EmployeeId) -> Result<Option<Employee>, RepositoryError> {
        Ok(self.employees.remove(&id))
    }

    fn len(&self) -> usize {
        self.employees.len()
    }
}
