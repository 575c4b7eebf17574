use std::{
    ffi::OsString,
    fs::{self, OpenOptions},
    io::{ErrorKind, Write},
    path::{Path, PathBuf},
};

use crate::{Config, ConfigError};

const CONFIG_DIR: &str = "config";
const CONFIG_FILE: &str = "config.json";

/// Reads and writes the preferences file of one application directory.
#[derive(Debug, Clone)]
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    pub fn new(config_path: PathBuf) -> Self {
        Self { config_path }
    }

    /// Manager for `<base>/config/config.json`, creating the directory if needed.
    pub fn with_base_dir(base: &Path) -> Result<Self, ConfigError> {
        let dir = base.join(CONFIG_DIR);
        fs::create_dir_all(&dir)?;
        Ok(Self::new(dir.join(CONFIG_FILE)))
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Parses the stored preferences. A file that was never written yields the defaults.
    pub fn load(&self) -> Result<Config, ConfigError> {
        let raw = match fs::read_to_string(&self.config_path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Config::default()),
            Err(err) => return Err(err.into()),
        };
        serde_json::from_str(&raw).map_err(|err| {
            ConfigError::Serde(format!("{}: {err}", self.config_path.display()))
        })
    }

    /// Replaces the preferences file through a sibling `.tmp` file.
    pub fn save(&self, config: &Config) -> Result<(), ConfigError> {
        if let Some(dir) = self.config_path.parent() {
            fs::create_dir_all(dir)?;
        }
        let body = serde_json::to_vec_pretty(config)
            .map_err(|err| ConfigError::Serde(err.to_string()))?;

        let staging = staging_path(&self.config_path);
        let mut file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&staging)?;
        file.write_all(&body)?;
        file.sync_all()?;
        drop(file);

        fs::rename(&staging, &self.config_path).map_err(|err| {
            let _ = fs::remove_file(&staging);
            ConfigError::from(err)
        })
    }
}

fn staging_path(path: &Path) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(".tmp");
    PathBuf::from(name)
}
