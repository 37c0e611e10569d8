//! ConfigStore - Local Configuration Storage
//!
//! Platform-specific locations:
//! - **Linux**: `~/.config/vital-stats-gui/`
//! - **macOS**: `~/Library/Application Support/br.gov.vital-stats-gui/`
//! - **Windows**: `C:\Users\<User>\AppData\Roaming\vital-stats\vital-stats-gui\config\`

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Serialize, de::DeserializeOwned};

use crate::error::{Error, Result};

/// Name of the configuration file in the config directory
pub const CONFIG_FILE: &str = "config.toml";

fn project_dirs() -> Result<ProjectDirs> {
    ProjectDirs::from("br.gov", "vital-stats", "vital-stats-gui").ok_or_else(|| Error::Invalid {
        message: "Could not determine project directories".to_string(),
    })
}

/// Get or create the application's configuration directory
pub fn config_dir() -> Result<PathBuf> {
    let dirs = project_dirs()?;
    let dir = dirs.config_dir();
    if !dir.exists() {
        fs::create_dir_all(dir)?;
    }
    Ok(dir.to_path_buf())
}

/// Get or create the application data directory (log files)
pub fn app_data_dir() -> Result<PathBuf> {
    let dirs = project_dirs()?;
    let dir = dirs.data_local_dir();
    if !dir.exists() {
        fs::create_dir_all(dir)?;
    }
    Ok(dir.to_path_buf())
}

/// Load a TOML file, falling back to `T::default()` when it does not exist
pub fn load_from<T: DeserializeOwned + Default>(path: &Path) -> Result<T> {
    if !path.exists() {
        tracing::debug!("No config at {}, using defaults", path.display());
        return Ok(T::default());
    }

    let content = fs::read_to_string(path)?;
    let value: T = toml::from_str(&content)?;
    Ok(value)
}

/// Save a value as pretty TOML
pub fn save_to<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let content = toml::to_string_pretty(value)?;
    fs::write(path, content)?;
    Ok(())
}

/// Load a config file from the config directory
pub fn load_config<T: DeserializeOwned + Default>(filename: &str) -> Result<T> {
    load_from(&config_dir()?.join(filename))
}

/// Save a config file into the config directory
pub fn save_config<T: Serialize>(filename: &str, value: &T) -> Result<()> {
    save_to(&config_dir()?.join(filename), value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::config::AppConfig;

    fn scratch_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("vital-stats-{}-{}", std::process::id(), name))
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let path = scratch_path("missing.toml");
        let config: AppConfig = load_from(&path).expect("load");
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_save_then_load() {
        let path = scratch_path("saved.toml");
        let mut config = AppConfig::default();
        config.api.base_url = "http://10.0.0.7:5000".to_string();
        config.dashboard.default_year = 2019;

        save_to(&path, &config).expect("save");
        let loaded: AppConfig = load_from(&path).expect("load");
        let _ = fs::remove_file(&path);

        assert_eq!(loaded, config);
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let path = scratch_path("broken.toml");
        fs::write(&path, "[api\nbase_url = ").expect("write");
        let result: Result<AppConfig> = load_from(&path);
        let _ = fs::remove_file(&path);

        assert!(matches!(result, Err(Error::TomlDe { .. })));
    }
}
