#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8080;

/// Fully resolved settings the server starts with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub seed_file: Option<PathBuf>,
    pub log_level: Option<String>,
    pub json_logs: bool,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            seed_file: None,
            log_level: None,
            json_logs: false,
        }
    }
}

impl ConfigProvider for ServerSettings {
    fn host(&self) -> &str {
        &self.host
    }

    fn port(&self) -> u16 {
        self.port
    }

    fn seed_file(&self) -> Option<&Path> {
        self.seed_file.as_deref()
    }
}

impl Validate for ServerSettings {
    fn validate(&self) -> Result<()> {
        validation::validate_host("server.host", &self.host)?;
        validation::validate_range("server.port", self.port, 1, u16::MAX)?;
        if let Some(seed_file) = &self.seed_file {
            validation::validate_seed_file("cookbook.seed_file", seed_file)?;
        }
        if let Some(level) = &self.log_level {
            validation::validate_non_empty_string("logging.level", level)?;
        }
        Ok(())
    }
}
