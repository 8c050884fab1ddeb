//! Configuration management

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{info, warn};

use crate::core::errors::{Result, TranslationError};

/// Configuration for the CLI and HTTP server
///
/// None of these settings touch the translation rules themselves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TranslatorConfig {
    /// Extensions picked up when translating a directory
    pub file_extensions: Vec<String>,
    /// Appended to the file stem of a translated single file
    pub output_suffix: String,
    pub host: String,
    pub port: u16,
}

const DEFAULT_EXTENSIONS: &[&str] = &["txt"];
const DEFAULT_OUTPUT_SUFFIX: &str = "_piglatin";
const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8000;

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            file_extensions: DEFAULT_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
            output_suffix: DEFAULT_OUTPUT_SUFFIX.to_string(),
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl TranslatorConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let file_extensions = match std::env::var("PIGLATIN_EXTENSIONS") {
            Ok(list) => parse_extensions(&list),
            Err(_) => defaults.file_extensions,
        };

        let output_suffix =
            std::env::var("PIGLATIN_OUTPUT_SUFFIX").unwrap_or(defaults.output_suffix);

        let host = std::env::var("PIGLATIN_HOST").unwrap_or(defaults.host);

        let port = match std::env::var("PIGLATIN_PORT") {
            Ok(port) => port.parse::<u16>().map_err(|e| TranslationError::ConfigError {
                message: format!("PIGLATIN_PORT '{}': {}", port, e),
            })?,
            Err(_) => defaults.port,
        };

        let config = Self {
            file_extensions,
            output_suffix,
            host,
            port,
        };
        config.validate()?;
        Ok(config)
    }

    /// Load from an optional JSON file, falling back to the environment
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => {
                let config = Self::from_file(path)?;
                info!("Loaded configuration from {}", path.display());
                Ok(config)
            }
            None => Self::from_env(),
        }
    }

    /// Load from JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| TranslationError::FileError {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        let config: Self = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.file_extensions.is_empty() {
            return Err(TranslationError::ConfigError {
                message: "at least one file extension is required".to_string(),
            });
        }

        if self.output_suffix.is_empty() {
            return Err(TranslationError::ConfigError {
                message: "output_suffix cannot be empty".to_string(),
            });
        }

        if self.port == 0 {
            warn!("Port 0 configured, the OS will pick a free port");
        }

        Ok(())
    }

    /// Check if a file extension is handled, ignoring case
    pub fn accepts_extension(&self, ext: &str) -> bool {
        self.file_extensions
            .iter()
            .any(|known| known.eq_ignore_ascii_case(ext))
    }
}

fn parse_extensions(list: &str) -> Vec<String> {
    list.split(',')
        .map(|ext| ext.trim().trim_start_matches('.').to_string())
        .filter(|ext| !ext.is_empty())
        .collect()
}
