//! Server configuration

use anyhow::{Context, Result};
use formulary_core::{ColumnNames, ReadOptions};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// File picked up from the working directory when no config is given
pub const DEFAULT_CONFIG_FILE: &str = "formulary.toml";

/// Main server configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Spreadsheet holding the compound table
    pub source_path: PathBuf,
    /// Worksheet to read (first sheet when unset)
    pub sheet: Option<String>,
    pub host: String,
    pub port: u16,
    /// Verbose logging, including per-request traces
    pub debug: bool,
    pub columns: ColumnNames,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            source_path: PathBuf::from("file.xlsx"),
            sheet: None,
            host: "127.0.0.1".to_string(),
            port: 5000,
            debug: false,
            columns: ColumnNames::default(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: ServerConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load the explicit config file, or `formulary.toml` if present, or defaults
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        if let Some(path) = config_path {
            return Self::from_file(path)
                .with_context(|| format!("Failed to load config from {}", path.display()));
        }

        Self::load_default(Path::new(DEFAULT_CONFIG_FILE))
    }

    /// Load `default_path` if it exists, otherwise fall back to defaults
    fn load_default(default_path: &Path) -> Result<Self> {
        if default_path.exists() {
            Self::from_file(default_path)
                .with_context(|| format!("Failed to load config from {}", default_path.display()))
        } else {
            Ok(Self::default())
        }
    }

    /// Options passed to the compound table reader
    pub fn read_options(&self) -> ReadOptions {
        ReadOptions {
            sheet: self.sheet.clone(),
            columns: self.columns.clone(),
        }
    }

    /// Address the HTTP listener binds to
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
