use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::errors::CoreError;

/// Startup configuration for [`crate::InvestmentLab`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LabConfig {
    /// Directory for the file-backed store. `None` keeps data in memory.
    pub data_dir: Option<PathBuf>,

    /// Seed for the challenge fallback pick. `None` seeds from entropy.
    pub fallback_seed: Option<u64>,
}

impl LabConfig {
    /// Parse a JSON config document. Missing fields take their defaults.
    pub fn from_json(text: &str) -> Result<Self, CoreError> {
        let config: LabConfig = serde_json::from_str(text)
            .map_err(|e| CoreError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn with_data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.data_dir = Some(dir.into());
        self
    }

    pub fn with_fallback_seed(mut self, seed: u64) -> Self {
        self.fallback_seed = Some(seed);
        self
    }

    pub fn validate(&self) -> Result<(), CoreError> {
        if let Some(dir) = &self.data_dir {
            if dir.as_os_str().is_empty() {
                return Err(CoreError::InvalidConfig("dataDir must not be empty".into()));
            }
        }
        Ok(())
    }
}
