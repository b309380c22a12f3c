//! Configuration for statement completion: `cst.toml`
//!
//! Provides the schema, validation, and file discovery. Discovery walks up
//! from the current working directory, then falls back to the XDG config
//! directory. A missing file yields the defaults.

use crate::complete::CompleteOptions;
use crate::indent::DEFAULT_TAB_STOP;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Configuration file name
pub const CONFIG_FILE: &str = "cst.toml";

/// Configuration loading error
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// File I/O error
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error
    #[error("Failed to parse cst.toml: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error
    #[error("Config validation failed:\n{}", .0.iter().map(|e| format!("  - {}", e)).collect::<Vec<_>>().join("\n"))]
    Validation(Vec<String>),
}

/// Editor-wide settings section
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EditorConfig {
    /// Indentation width, "treat an indent as this many spaces"
    #[serde(default = "default_tab_size")]
    pub tab_size: usize,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self { tab_size: default_tab_size() }
    }
}

fn default_tab_size() -> usize {
    DEFAULT_TAB_STOP
}

/// Completion-specific settings section
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CompleteConfig {
    /// Opening brace on its own line (Allman style)
    #[serde(default)]
    pub allman: bool,
}

/// Complete cst.toml configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CstConfig {
    /// Editor-wide settings
    #[serde(default)]
    pub editor: EditorConfig,
    /// Completion settings
    #[serde(default)]
    pub complete: CompleteConfig,
}

/// Configuration validation error
#[derive(Debug, Clone)]
pub struct ConfigValidationError {
    /// Path to the invalid field (e.g., "editor.tab_size")
    pub field: String,
    /// Error message
    pub message: String,
}

impl std::fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "cst.toml: '{}' {}", self.field, self.message)
    }
}

impl CstConfig {
    /// Validate the configuration and return any errors
    pub fn validate(&self) -> Vec<ConfigValidationError> {
        let mut errors = Vec::new();

        if self.editor.tab_size == 0 {
            errors.push(ConfigValidationError {
                field: "editor.tab_size".to_string(),
                message: "must be a positive integer".to_string(),
            });
        }

        errors
    }

    /// Check if validation passed
    pub fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }

    /// The completion options this configuration selects
    pub fn options(&self) -> CompleteOptions {
        CompleteOptions {
            tab_stop: self.editor.tab_size,
            allman: self.complete.allman,
        }
    }
}

/// Find cst.toml by walking up from the current working directory.
///
/// Search order:
/// 1. Walk up from current directory looking for cst.toml
/// 2. Check XDG_CONFIG_HOME/complete-statement/cst.toml
///    (or ~/.config/complete-statement/cst.toml)
pub fn find_config() -> Option<PathBuf> {
    if let Ok(cwd) = env::current_dir() {
        if let Some(path) = find_config_from(cwd) {
            return Some(path);
        }
    }

    find_xdg_config()
}

/// Find cst.toml in the XDG config directory
pub fn find_xdg_config() -> Option<PathBuf> {
    let xdg_config = env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|_| env::var("HOME").map(|h| PathBuf::from(h).join(".config")))
        .ok()?;

    let config_path = xdg_config.join("complete-statement").join(CONFIG_FILE);
    if config_path.exists() {
        Some(config_path)
    } else {
        None
    }
}

/// Find cst.toml by walking up from a specific directory.
///
/// Internal implementation that allows specifying the start directory,
/// useful for testing.
pub fn find_config_from(start: PathBuf) -> Option<PathBuf> {
    let mut current = start;

    loop {
        let config_path = current.join(CONFIG_FILE);
        if config_path.exists() {
            return Some(config_path);
        }

        if !current.pop() {
            return None;
        }
    }
}

/// Load configuration from a cst.toml file.
///
/// If a path is provided, loads from that file. Otherwise uses
/// [`find_config`] to locate one; when none is found, returns the default
/// configuration.
pub fn load_config(path: Option<&Path>) -> Result<CstConfig, ConfigError> {
    let resolved = match path {
        Some(p) => Some(p.to_path_buf()),
        None => find_config(),
    };

    let config = match resolved {
        Some(p) => {
            let contents = fs::read_to_string(&p)?;
            toml::from_str(&contents)?
        }
        None => CstConfig::default(),
    };

    let errors = config.validate();
    if errors.is_empty() {
        Ok(config)
    } else {
        Err(ConfigError::Validation(
            errors.into_iter().map(|e| e.to_string()).collect(),
        ))
    }
}
