//! Employee storage configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;

/// Where the company's employee repository keeps its records
#[derive(Debug, Clone, Deserialize, Default)]
pub struct StorageConfig {
    /// Repository backend
    #[serde(default)]
    pub backend: StorageBackend,

    /// File path, required for the `json_file` backend
    pub path: Option<PathBuf>,
}

/// Repository backend selection
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum StorageBackend {
    #[default]
    Memory,
    JsonFile,
}

impl StorageConfig {
    /// Validate storage configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.backend == StorageBackend::JsonFile
            && self.path.as_ref().map_or(true, |p| p.as_os_str().is_empty())
        {
            return Err(ValidationError::MissingRequired("storage.path"));
        }
        Ok(())
    }

    /// True if records outlive the process
    pub fn is_durable(&self) -> bool {
        self.backend == StorageBackend::JsonFile
    }
}
