//!
//! Handles application configuration: where indexes live, which embedding
//! model to fall back on, and how strictly index/metadata alignment is checked
//! at load time. Configuration is read from a `config.toml` file.

use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};
use crate::constants::{APP_NAME, CONFIG_FILE_NAME, CONFIG_PATH_ENV, DEFAULT_TOP_K, INDEXES_DIR_NAME};
use crate::error::SemsearchError;

/// Embedding model identifier used when neither the caller nor the index metadata names one.
pub const DEFAULT_EMBEDDING_MODEL: &str = semsearch_embed::DEFAULT_MODEL_NAME;

/// How the loader treats an index whose vector count differs from its metadata file count.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum IntegrityCheck {
    /// Skip the comparison.
    Off,
    /// Log a warning and load anyway.
    #[default]
    Warn,
    /// Refuse to load the index.
    Strict,
}

/// Main application configuration structure.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Directory holding one sub-directory per index.
    /// If None, a platform-specific data directory is used.
    #[serde(default)]
    pub index_base_path: Option<String>,
    /// Embedding model that overrides the one recorded in index metadata.
    #[serde(default)]
    pub embedding_model: Option<String>,
    /// Number of results returned when the caller does not specify one.
    #[serde(default = "default_top_k")]
    pub default_top_k: usize,
    /// Load-time check of vector count against metadata length.
    #[serde(default)]
    pub integrity_check: IntegrityCheck,
}

fn default_top_k() -> usize {
    DEFAULT_TOP_K
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            index_base_path: None,
            embedding_model: None,
            default_top_k: default_top_k(),
            integrity_check: IntegrityCheck::default(),
        }
    }
}

impl AppConfig {
    /// Validates that the configuration is usable.
    pub fn validate(&self) -> Result<()> {
        if self.default_top_k == 0 {
            return Err(anyhow!("Configuration error: 'default_top_k' must be greater than 0."));
        }
        if let Some(model) = &self.embedding_model {
            if model.trim().is_empty() {
                return Err(anyhow!("Configuration error: 'embedding_model' must not be empty when set."));
            }
        }
        Ok(())
    }
}

/// Returns the default path to the configuration file.
pub fn get_config_path() -> Result<PathBuf> {
    let config_dir = dirs::config_dir()
        .ok_or_else(|| anyhow!("Could not find config directory"))?
        .join(APP_NAME);
    Ok(config_dir.join(CONFIG_FILE_NAME))
}

/// Gets the configuration path by checking ENV, override, or default platform location.
pub fn get_config_path_or_default(override_path: Option<&PathBuf>) -> Result<PathBuf> {
    if let Ok(env_path) = std::env::var(CONFIG_PATH_ENV) {
        log::debug!("Using config path from ENV: {env_path}");
        return Ok(PathBuf::from(env_path));
    }
    if let Some(path) = override_path {
        log::debug!("Using override config path: {}", path.display());
        return Ok(path.clone());
    }
    get_config_path()
}

/// Loads the application configuration from ENV, a specified path, or the default location.
///
/// A missing file yields the default configuration; nothing is written.
/// Returns an error if the file exists but cannot be read, parsed or validated.
pub fn load_config(override_path: Option<&PathBuf>) -> Result<AppConfig> {
    let config_file_path = get_config_path_or_default(override_path)?;
    log::debug!("Attempting to load config from: {}", config_file_path.display());

    if !config_file_path.exists() {
        log::info!(
            "Config file not found at '{}'. Using defaults.",
            config_file_path.display()
        );
        return Ok(AppConfig::default());
    }

    let config_content = fs::read_to_string(&config_file_path)
        .with_context(|| format!("Failed to read config file at '{}'", config_file_path.display()))?;

    let config: AppConfig = toml::from_str(&config_content).map_err(|e| {
        log::error!(
            "Failed to parse config file at '{}': {}. Ensure it is valid TOML.",
            config_file_path.display(),
            e
        );
        anyhow!("Failed to parse configuration file '{}': {}", config_file_path.display(), e)
    })?;

    log::debug!("Parsed config successfully: {config:?}");
    config.validate()?;
    Ok(config)
}

/// Returns the directory holding indexes.
/// Uses `index_base_path` from the config if set, otherwise the platform data directory.
pub fn get_index_base_path(config: &AppConfig) -> Result<PathBuf> {
    if let Some(base_path) = &config.index_base_path {
        return Ok(PathBuf::from(base_path));
    }
    let data_dir = dirs::data_dir().ok_or_else(|| {
        SemsearchError::ConfigurationError("Could not determine user data directory".to_string())
    })?;
    Ok(data_dir.join(APP_NAME).join(INDEXES_DIR_NAME))
}
