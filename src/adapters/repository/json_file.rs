//! JSON File Employee Repository Adapter
//!
//! Keeps employees in memory and rewrites a single JSON file after every
//! mutation. Writes go to a temporary file that is then renamed over the
//! target, so readers never observe a half-written file.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::foundation::EmployeeId;
use crate::domain::staff::{Employee, SalaryStrategy};
use crate::ports::{EmployeeRepository, RepositoryError};

/// On-disk shape of one employee.
#[derive(Debug, Serialize, Deserialize)]
struct StoredEmployee {
    id: i64,
    name: String,
    department: String,
    base_salary: f64,
    strategy: SalaryStrategy,
}

impl From<&Employee> for StoredEmployee {
    fn from(employee: &Employee) -> Self {
        Self {
            id: employee.id().value(),
            name: employee.name().to_string(),
            department: employee.department().to_string(),
            base_salary: employee.base_salary(),
            strategy: employee.strategy().clone(),
        }
    }
}

impl TryFrom<StoredEmployee> for Employee {
    type Error = RepositoryError;

    fn try_from(record: StoredEmployee) -> Result<Self, Self::Error> {
        let id = record.id;
        Employee::with_strategy(
            record.id,
            record.name,
            record.department,
            record.base_salary,
            record.strategy,
        )
        .map_err(|source| RepositoryError::CorruptRecord { id, source })
    }
}

/// File-backed employee storage.
#[derive(Debug)]
pub struct JsonFileEmployeeRepository {
    path: PathBuf,
    employees: BTreeMap<EmployeeId, Employee>,
}

impl JsonFileEmployeeRepository {
    /// Opens the repository at `path`, loading any existing records.
    ///
    /// A missing file is an empty repository; it is created on first write.
    ///
    /// # Errors
    ///
    /// - `Io` if the file exists but cannot be read
    /// - `Serialization` if the file is not a JSON array of employees
    /// - `CorruptRecord` if a stored employee fails validation
    pub fn open(path: impl AsRef<Path>) -> Result<Self, RepositoryError> {
        let path = path.as_ref().to_path_buf();
        let mut employees = BTreeMap::new();

        if path.exists() {
            let json = fs::read_to_string(&path).map_err(|e| RepositoryError::io(&path, e))?;
            let records: Vec<StoredEmployee> = serde_json::from_str(&json)?;
            for record in records {
                let employee = Employee::try_from(record)?;
                employees.insert(employee.id(), employee);
            }
        }

        tracing::info!(path = %path.display(), employees = employees.len(), "Opened employee file");
        Ok(Self { path, employees })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.file_name().unwrap_or_default().to_os_string();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    /// Rewrites the whole file from the in-memory state.
    fn persist(&self) -> Result<(), RepositoryError> {
        let records: Vec<StoredEmployee> =
            self.employees.values().map(StoredEmployee::from).collect();
        let json = serde_json::to_string_pretty(&records)?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| RepositoryError::io(parent, e))?;
        }

        let temp_path = self.temp_path();
        fs::write(&temp_path, json).map_err(|e| RepositoryError::io(&temp_path, e))?;
        fs::rename(&temp_path, &self.path).map_err(|e| RepositoryError::io(&self.path, e))?;

        tracing::debug!(path = %self.path.display(), employees = records.len(), "Persisted employee file");
        Ok(())
    }
}

impl EmployeeRepository for JsonFileEmployeeRepository {
    fn add(&mut self, employee: Employee) -> Result<Option<Employee>, RepositoryError> {
        let id = employee.id();
        let previous = self.employees.insert(id, employee);

        if let Err(err) = self.persist() {
            // Roll back so memory matches the file.
            match previous {
                Some(old) => {
                    self.employees.insert(id, old);
                }
                None => {
                    self.employees.remove(&id);
                }
            }
            return Err(err);
        }
        Ok(previous)
    }

    fn find_by_id(&self, id: EmployeeId) -> Option<&Employee> {
        self.employees.get(&id)
    }

    fn get_all(&self) -> Vec<&Employee> {
        self.employees.values().collect()
    }

    fn remove(&mut self, id: EmployeeId) -> Result<Option<Employee>, RepositoryError> {
        let Some(removed) = self.employees.remove(&id) else {
            return Ok(None);
        };

        if let Err(err) = self.persist() {
            self.employees.insert(id, removed);
            return Err(err);
        }
        Ok(Some(removed))
    }

    fn len(&self) -> usize {
        self.employees.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::staff::Level;
    use tempfile::TempDir;

    fn id(value: i64) -> EmployeeId {
        EmployeeId::new(value).unwrap()
    }

    fn setup() -> (TempDir, PathBuf) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("data").join("employees.json");
        (temp_dir, path)
    }

    #[test]
    fn missing_file_opens_empty() {
        let (_temp, path) = setup();
        let repo = JsonFileEmployeeRepository::open(&path).unwrap();
        assert!(repo.is_empty());
        assert!(!path.exists());
    }

    #[test]
    fn records_survive_reopen() {
        let (_temp, path) = setup();
        {
            let mut repo = JsonFileEmployeeRepository::open(&path).unwrap();
            repo.add(Employee::manager(1, "Ivy", "Ops", 5000.0, 1000.0).unwrap())
                .unwrap();
            repo.add(
                Employee::developer(2, "Jon", "R&D", 4000.0, ["go", "rust"], Level::Senior)
                    .unwrap(),
            )
            .unwrap();
            repo.add(Employee::salesperson(3, "Kim", "Sales", 3000.0, 0.1, 2000.0).unwrap())
                .unwrap();
        }

        let repo = JsonFileEmployeeRepository::open(&path).unwrap();
        assert_eq!(repo.len(), 3);
        assert_eq!(repo.find_by_id(id(1)).unwrap().calculate_salary(), 6000.0);
        let dev = repo.find_by_id(id(2)).unwrap();
        assert_eq!(dev.level(), Some(Level::Senior));
        assert_eq!(dev.skills(), ["go".to_string(), "rust".to_string()]);
        assert_eq!(repo.find_by_id(id(3)).unwrap().calculate_salary(), 3200.0);
    }

    #[test]
    fn remove_is_persisted() {
        let (_temp, path) = setup();
        let mut repo = JsonFileEmployeeRepository::open(&path).unwrap();
        repo.add(Employee::new(1, "A", "IT", 1.0).unwrap()).unwrap();
        repo.add(Employee::new(2, "B", "IT", 2.0).unwrap()).unwrap();
        assert!(repo.remove(id(1)).unwrap().is_some());
        assert!(repo.remove(id(1)).unwrap().is_none());

        let reopened = JsonFileEmployeeRepository::open(&path).unwrap();
        let ids: Vec<i64> = reopened.get_all().into_iter().map(|e| e.id().value()).collect();
        assert_eq!(ids, vec![2]);
    }

    #[test]
    fn no_temp_file_left_behind() {
        let (_temp, path) = setup();
        let mut repo = JsonFileEmployeeRepository::open(&path).unwrap();
        repo.add(Employee::new(1, "A", "IT", 1.0).unwrap()).unwrap();
        assert!(path.exists());
        assert!(!repo.temp_path().exists());
    }

    #[test]
    fn invalid_record_is_reported_as_corrupt() {
        let (_temp, path) = setup();
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(
            &path,
            r#"[{"id": 4, "name": "", "department": "IT", "base_salary": 10.0,
                "strategy": {"kind": "employee"}}]"#,
        )
        .unwrap();

        match JsonFileEmployeeRepository::open(&path) {
            Err(RepositoryError::CorruptRecord { id, .. }) => assert_eq!(id, 4),
            other => panic!("Expected CorruptRecord, got {:?}", other),
        }
    }

    #[test]
    fn malformed_json_is_a_serialization_error() {
        let (_temp, path) = setup();
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "not json").unwrap();
        assert!(matches!(
            JsonFileEmployeeRepository::open(&path),
            Err(RepositoryError::Serialization(_))
        ));
    }

    #[test]
    fn failed_write_rolls_back_memory() {
        let (temp, _) = setup();
        // A directory where the file should be makes the rename fail.
        let path = temp.path().join("occupied");
        fs::create_dir_all(path.join("child")).unwrap();
        let mut repo = JsonFileEmployeeRepository {
            path: path.clone(),
            employees: BTreeMap::new(),
        };

        let result = repo.add(Employee::new(1, "A", "IT", 1.0).unwrap());
        assert!(matches!(result, Err(RepositoryError::Io { .. })));
        assert!(repo.is_empty());
    }
}
