mod types;

pub use types::Config;

use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use log::debug;

use crate::errors::{AppError, Result};

pub fn default_config_path() -> PathBuf {
    config_dir().join("config.yaml")
}

/// Load and validate the config. A missing file yields defaults.
pub fn load_config(override_path: Option<&Path>) -> Result<Config> {
    let path = match override_path {
        Some(p) => p.to_path_buf(),
        None => default_config_path(),
    };

    if !path.exists() {
        debug!("no config at {}, using defaults", path.display());
        return Ok(Config::default());
    }

    let contents = std::fs::read_to_string(&path)?;
    let config: Config = serde_yaml::from_str(&contents)
        .map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)))?;
    config
        .validate()
        .map_err(|errors| AppError::Config(format!("{}: {}", path.display(), errors.join("; "))))?;
    Ok(config)
}

// Nothing is ever written, so the directory is not created here.
pub fn config_dir() -> PathBuf {
    ProjectDirs::from("", "", "here")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .unwrap_or_else(|| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".config").join("here")
        })
}
