use serde::{de::Deserializer, Deserialize, Serialize};
use std::{
    fmt,
    path::{Path, PathBuf},
};

use crate::ConfigError;

pub const DEFAULT_DATA_FILE: &str = "data.json";
pub const DEFAULT_APP_DIR: &str = ".nestora";

/// Keys accepted by [`Config::set`], in display order.
pub const CONFIG_KEYS: &[&str] = &[
    "data_file",
    "currency_symbol",
    "theme",
    "ui_color_enabled",
    "accessibility.plain_output",
    "accessibility.high_contrast",
];

/// Stores user-configurable CLI preferences.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Optional custom location of the data file. Defaults to `<app dir>/data.json`.
    pub data_file: Option<PathBuf>,
    #[serde(default = "Config::default_currency_symbol")]
    pub currency_symbol: String,
    #[serde(default)]
    pub theme: Theme,
    #[serde(default)]
    pub accessibility: AccessibilitySettings,
    #[serde(default = "Config::default_ui_color_enabled")]
    pub ui_color_enabled: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: None,
            currency_symbol: Self::default_currency_symbol(),
            theme: Theme::default(),
            accessibility: AccessibilitySettings::default(),
            ui_color_enabled: Self::default_ui_color_enabled(),
        }
    }
}

impl Config {
    pub fn default_currency_symbol() -> String {
        "$".into()
    }

    pub fn default_ui_color_enabled() -> bool {
        true
    }

    /// Default application directory: `~/.nestora`, or `./.nestora` without a home.
    pub fn default_app_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(DEFAULT_APP_DIR)
    }

    /// Location of the data file, relative paths resolved against `app_dir`.
    pub fn resolve_data_file(&self, app_dir: &Path) -> PathBuf {
        match &self.data_file {
            Some(path) if path.is_absolute() => path.clone(),
            Some(path) => app_dir.join(path),
            None => app_dir.join(DEFAULT_DATA_FILE),
        }
    }

    /// Current value of a key as shown by `config show`.
    pub fn get(&self, key: &str) -> Result<String, ConfigError> {
        let value = match key {
            "data_file" => self
                .data_file
                .as_ref()
                .map(|path| path.display().to_string())
                .unwrap_or_else(|| format!("(default) {DEFAULT_DATA_FILE}")),
            "currency_symbol" => self.currency_symbol.clone(),
            "theme" => self.theme.to_string(),
            "ui_color_enabled" => self.ui_color_enabled.to_string(),
            "accessibility.plain_output" => self.accessibility.plain_output.to_string(),
            "accessibility.high_contrast" => self.accessibility.high_contrast.to_string(),
            other => return Err(ConfigError::UnknownKey(other.to_string())),
        };
        Ok(value)
    }

    /// Updates a single key from its textual form.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let trimmed = value.trim();
        match key {
            "data_file" => {
                self.data_file = match trimmed {
                    "" | "default" => None,
                    path => Some(PathBuf::from(path)),
                };
            }
            "currency_symbol" => {
                if trimmed.is_empty() {
                    return Err(invalid(key, value, "symbol cannot be empty"));
                }
                self.currency_symbol = trimmed.to_string();
            }
            "theme" => {
                self.theme = match trimmed.to_ascii_lowercase().as_str() {
                    "plain" => Theme::Plain,
                    "iconic" => Theme::Iconic,
                    _ => return Err(invalid(key, value, "expected `plain` or `iconic`")),
                };
            }
            "ui_color_enabled" => self.ui_color_enabled = parse_bool(key, value)?,
            "accessibility.plain_output" => {
                self.accessibility.plain_output = parse_bool(key, value)?
            }
            "accessibility.high_contrast" => {
                self.accessibility.high_contrast = parse_bool(key, value)?
            }
            other => return Err(ConfigError::UnknownKey(other.to_string())),
        }
        Ok(())
    }
}

fn parse_bool(key: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "on" | "yes" | "1" => Ok(true),
        "false" | "off" | "no" | "0" => Ok(false),
        _ => Err(invalid(key, value, "expected true or false")),
    }
}

fn invalid(key: &str, value: &str, reason: &str) -> ConfigError {
    ConfigError::InvalidValue {
        key: key.to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Plain,
    #[default]
    Iconic,
}

impl Theme {
    fn from_value(value: Option<String>) -> Self {
        value
            .map(|v| Theme::from_label(v.trim()))
            .unwrap_or_default()
    }

    /// Lenient parse used when reading stored files; unknown labels fall back to iconic.
    pub fn from_label(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "plain" => Theme::Plain,
            _ => Theme::Iconic,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Theme::Plain => "plain",
            Theme::Iconic => "iconic",
        };
        f.write_str(label)
    }
}

impl<'de> Deserialize<'de> for Theme {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<String>::deserialize(deserializer)?;
        Ok(Theme::from_value(value))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessibilitySettings {
    #[serde(default)]
    pub plain_output: bool,
    #[serde(default)]
    pub high_contrast: bool,
}
