mod config;

pub use config::{Config, DefaultsConfig, DisplayConfig, ExportConfig, RefreshConfig};

use std::path::PathBuf;

use crate::error::ConfigError;

/// Returns the planner's settings directory, creating it if needed.
///
/// `IRRIGATION_HOME` wins when set. Otherwise `~/.config/irrigation-planner[-dev]/`,
/// with the `-dev` suffix when `IRRIGATION_ENV=dev`.
///
/// # Errors
/// Returns an error if the directory cannot be created.
pub fn data_dir() -> Result<PathBuf, ConfigError> {
    let dir = match std::env::var_os("IRRIGATION_HOME") {
        Some(home) if !home.is_empty() => PathBuf::from(home),
        _ => {
            let base_dir = dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".config");
            let env = std::env::var("IRRIGATION_ENV").unwrap_or_else(|_| "production".to_string());
            if env == "dev" {
                base_dir.join("irrigation-planner-dev")
            } else {
                base_dir.join("irrigation-planner")
            }
        }
    };

    std::fs::create_dir_all(&dir).map_err(|source| ConfigError::DataDir {
        path: dir.clone(),
        source,
    })?;
    Ok(dir)
}
