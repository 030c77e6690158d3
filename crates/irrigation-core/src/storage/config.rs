//! TOML-based planner settings.
//!
//! Stores:
//! - Default form values used when the CLI is given no overrides
//! - Table page size
//! - Status refresh period
//! - Export file name
//!
//! Settings live at `~/.config/irrigation-planner/config.toml`.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::data_dir;
use crate::board::{DEFAULT_FILE_NAME, DEFAULT_PAGE_SIZE};
use crate::error::ConfigError;
use crate::irrigation::ConfigForm;

/// Default planner input.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultsConfig {
    #[serde(default = "default_plots")]
    pub plots: u32,
    #[serde(default = "default_motors")]
    pub motors: u32,
    #[serde(default = "default_start_time")]
    pub start_time: String,
    #[serde(default = "default_end_time")]
    pub end_time: String,
    /// Minutes.
    #[serde(default = "default_motor_runtime")]
    pub motor_runtime: u32,
    /// Minutes.
    #[serde(default = "default_interval")]
    pub interval: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshConfig {
    #[serde(default = "default_refresh_secs")]
    pub interval_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportConfig {
    #[serde(default = "default_file_name")]
    pub file_name: String,
}

/// Planner settings.
///
/// Serialized to/from TOML at `~/.config/irrigation-planner/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub defaults: DefaultsConfig,
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub refresh: RefreshConfig,
    #[serde(default)]
    pub export: ExportConfig,
}

fn default_plots() -> u32 {
    4
}
fn default_motors() -> u32 {
    2
}
fn default_start_time() -> String {
    "060000".into()
}
fn default_end_time() -> String {
    "190000".into()
}
fn default_motor_runtime() -> u32 {
    5
}
fn default_interval() -> u32 {
    20
}
fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}
fn default_refresh_secs() -> u64 {
    60
}
fn default_file_name() -> String {
    DEFAULT_FILE_NAME.into()
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            plots: default_plots(),
            motors: default_motors(),
            start_time: default_start_time(),
            end_time: default_end_time(),
            motor_runtime: default_motor_runtime(),
            interval: default_interval(),
        }
    }
}

impl DefaultsConfig {
    /// The defaults as an unparsed form.
    pub fn to_form(&self) -> ConfigForm {
        ConfigForm {
            plots: self.plots.to_string(),
            motors: self.motors.to_string(),
            start_time: self.start_time.clone(),
            end_time: self.end_time.clone(),
            motor_runtime: self.motor_runtime.to_string(),
            interval: self.interval.to_string(),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
        }
    }
}

impl Default for RefreshConfig {
    fn default() -> Self {
        Self {
            interval_secs: default_refresh_secs(),
        }
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            file_name: default_file_name(),
        }
    }
}

impl Config {
    fn get_json_value_by_path<'a>(
        root: &'a serde_json::Value,
        key: &str,
    ) -> Option<&'a serde_json::Value> {
        if key.is_empty() {
            return None;
        }

        let mut current = root;
        for part in key.split('.') {
            current = current.get(part)?;
        }
        Some(current)
    }

    fn set_json_value_by_path(
        root: &mut serde_json::Value,
        key: &str,
        value: &str,
    ) -> Result<(), ConfigError> {
        let unknown = || ConfigError::UnknownKey(key.to_string());
        let invalid = |message: String| ConfigError::InvalidValue {
            key: key.to_string(),
            message,
        };

        let mut parts = key.split('.').peekable();
        if key.is_empty() {
            return Err(unknown());
        }

        let mut current = root;
        while let Some(part) = parts.next() {
            if parts.peek().is_none() {
                let obj = current.as_object_mut().ok_or_else(unknown)?;
                let existing = obj.get(part).ok_or_else(unknown)?;

                let new_value = match existing {
                    serde_json::Value::Bool(_) => serde_json::Value::Bool(
                        value.parse::<bool>().map_err(|e| invalid(e.to_string()))?,
                    ),
                    serde_json::Value::Number(_) => {
                        let n = value.trim().parse::<u64>().map_err(|_| {
                            invalid(format!("cannot parse '{value}' as a whole number"))
                        })?;
                        serde_json::Value::Number(n.into())
                    }
                    serde_json::Value::Object(_) | serde_json::Value::Array(_) => {
                        serde_json::from_str(value).map_err(|e| invalid(e.to_string()))?
                    }
                    _ => serde_json::Value::String(value.into()),
                };

                obj.insert(part.to_string(), new_value);
                return Ok(());
            }

            current = current.get_mut(part).ok_or_else(unknown)?;
        }

        Err(unknown())
    }

    /// Default settings file location.
    pub fn path() -> Result<PathBuf, ConfigError> {
        Ok(data_dir()?.join("config.toml"))
    }

    /// Load from the default location, writing defaults on first use.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be parsed,
    /// or if the default settings cannot be written.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::path()?)
    }

    /// Load from `path`, writing defaults there if the file does not exist.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(|e| ConfigError::LoadFailed {
                path: path.to_path_buf(),
                message: e.to_string(),
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "no settings file, writing defaults");
                let cfg = Self::default();
                cfg.save_to(path)?;
                Ok(cfg)
            }
            Err(e) => Err(ConfigError::LoadFailed {
                path: path.to_path_buf(),
                message: e.to_string(),
            }),
        }
    }

    /// Persist to the default location.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::path()?)
    }

    /// Persist to `path`.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let save_failed = |message: String| ConfigError::SaveFailed {
            path: path.to_path_buf(),
            message,
        };
        let content = toml::to_string_pretty(self).map_err(|e| save_failed(e.to_string()))?;
        std::fs::write(path, content).map_err(|e| save_failed(e.to_string()))
    }

    /// Get a value as string by dot-separated key.
    pub fn get(&self, key: &str) -> Option<String> {
        let json = serde_json::to_value(self).ok()?;
        let val = Self::get_json_value_by_path(&json, key)?;
        match val {
            serde_json::Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }

    /// Set a value by dot-separated key. The new value must parse as the
    /// existing value's type. Does not save.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let mut json =
            serde_json::to_value(&*self).map_err(|e| ConfigError::ParseFailed(e.to_string()))?;
        Self::set_json_value_by_path(&mut json, key, value)?;
        *self = serde_json::from_value(json).map_err(|e| ConfigError::InvalidValue {
            key: key.to_string(),
            message: e.to_string(),
        })?;
        Ok(())
    }

    /// Load from disk, returning defaults on error.
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_default()
    }
}
