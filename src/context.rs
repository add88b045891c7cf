//! Application context.
//!
//! Holds the loaded configuration and the company it describes. Callers
//! construct one explicitly and pass it where it is needed; there is no
//! global instance.

use thiserror::Error;

use crate::adapters::repository::{InMemoryEmployeeRepository, JsonFileEmployeeRepository};
use crate::config::{
    AppConfig, ConfigError, StorageBackend, StorageConfig,
    ValidationError as ConfigValidationError,
};
use crate::domain::foundation::ValidationError;
use crate::domain::organization::Company;
use crate::ports::{EmployeeRepository, RepositoryError};
use crate::telemetry;

/// Errors raised while assembling an [`AppContext`].
#[derive(Debug, Error)]
pub enum ContextError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(#[from] ConfigValidationError),

    #[error(transparent)]
    Domain(#[from] ValidationError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

#[derive(Debug)]
pub struct AppContext {
    config: AppConfig,
    company: Company,
}

impl AppContext {
    /// Builds a context from an already loaded configuration.
    ///
    /// # Errors
    ///
    /// - `InvalidConfig` if the configuration fails validation
    /// - `Repository` if the configured employee file cannot be opened
    pub fn new(config: AppConfig) -> Result<Self, ContextError> {
        config.validate()?;
        let repository = open_repository(&config.storage)?;
        let company = Company::new(config.company.name.as_str(), repository)?;

        tracing::info!(
            company = %company.name(),
            backend = ?config.storage.backend,
            employees = company.repository().len(),
            "Application context ready"
        );
        Ok(Self { config, company })
    }

    /// Loads configuration from the environment, installs tracing and
    /// builds the context.
    pub fn from_env() -> Result<Self, ContextError> {
        let config = AppConfig::load()?;
        telemetry::init(&config.logging);
        Self::new(config)
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn company(&self) -> &Company {
        &self.company
    }

    pub fn company_mut(&mut self) -> &mut Company {
        &mut self.company
    }

    pub fn into_company(self) -> Company {
        self.company
    }
}

fn open_repository(storage: &StorageConfig) -> Result<Box<dyn EmployeeRepository>, ContextError> {
    match storage.backend {
        StorageBackend::Memory => Ok(Box::new(InMemoryEmployeeRepository::new())),
        StorageBackend::JsonFile => {
            let Some(path) = storage.path.as_ref() else {
                return Err(ConfigValidationError::MissingRequired("storage.path").into());
            };
            Ok(Box::new(JsonFileEmployeeRepository::open(path)?))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::EmployeeId;
    use crate::domain::staff::Employee;
    use tempfile::TempDir;

    #[test]
    fn default_config_builds_in_memory_company() {
        let ctx = AppContext::new(AppConfig::default()).unwrap();
        assert_eq!(ctx.company().name(), "Company");
        assert!(ctx.company().repository().is_empty());
    }

    #[test]
    fn invalid_config_is_rejected() {
        let mut config = AppConfig::default();
        config.company.name = " ".to_string();
        assert!(matches!(
            AppContext::new(config),
            Err(ContextError::InvalidConfig(ConfigValidationError::EmptyCompanyName))
        ));
    }

    #[test]
    fn json_file_backend_persists_between_contexts() {
        let temp_dir = TempDir::new().unwrap();
        let mut config = AppConfig::default();
        config.company.name = "Acme".to_string();
        config.storage.backend = StorageBackend::JsonFile;
        config.storage.path = Some(temp_dir.path().join("employees.json"));

        let mut ctx = AppContext::new(config.clone()).unwrap();
        ctx.company_mut()
            .add_employee(Employee::new(1, "Lea", "IT", 1500.0).unwrap())
            .unwrap();
        drop(ctx);

        let company = AppContext::new(config).unwrap().into_company();
        let found = company.find_employee_by_id(EmployeeId::new(1).unwrap());
        assert_eq!(found.map(Employee::name), Some("Lea"));
    }
}
