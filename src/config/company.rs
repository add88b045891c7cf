//! Company configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Settings for the company the application manages
#[derive(Debug, Clone, Deserialize)]
pub struct CompanyConfig {
    /// Display name of the company
    #[serde(default = "default_name")]
    pub name: String,
}

impl Default for CompanyConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
        }
    }
}

impl CompanyConfig {
    /// Validate company configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::EmptyCompanyName);
        }
        Ok(())
    }
}

fn default_name() -> String {
    "Company".to_string()
}
