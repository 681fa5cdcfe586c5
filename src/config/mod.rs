use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Base URL of the day-record API
    #[serde(default = "default_api_url")]
    pub api_url: String,
    /// Fixed viewer offset such as "+02:00"; system timezone when absent
    #[serde(default)]
    pub utc_offset: Option<String>,
    #[serde(default = "default_decimals")]
    pub decimals: usize,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_separator_char")]
    pub separator_char: String,
}

/// Keys written by `init`; `config --check` reports the ones a file lacks.
pub const CONFIG_KEYS: [&str; 5] = [
    "api_url",
    "utc_offset",
    "decimals",
    "timeout_secs",
    "separator_char",
];

fn default_api_url() -> String {
    "http://localhost:8080/".to_string()
}
fn default_decimals() -> usize {
    2
}
fn default_timeout_secs() -> u64 {
    10
}
fn default_separator_char() -> String {
    "-".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            utc_offset: None,
            decimals: default_decimals(),
            timeout_secs: default_timeout_secs(),
            separator_char: default_separator_char(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rmileage")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".rmileage")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rmileage.conf")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();
        if !path.exists() {
            return Ok(Config::default());
        }
        let content = fs::read_to_string(&path)?;
        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> AppResult<Self> {
        let cfg: Config = serde_yaml::from_str(content)?;
        if cfg.api_url.trim().is_empty() {
            return Err(AppError::Config("api_url must not be empty".into()));
        }
        Ok(cfg)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.max(1))
    }

    /// Keys of [`CONFIG_KEYS`] missing from the YAML text.
    pub fn missing_keys(content: &str) -> AppResult<Vec<&'static str>> {
        let value: serde_yaml::Value = serde_yaml::from_str(content)?;
        let map = value
            .as_mapping()
            .ok_or_else(|| AppError::Config("configuration is not a YAML mapping".into()))?;
        Ok(CONFIG_KEYS
            .iter()
            .copied()
            .filter(|k| !map.contains_key(serde_yaml::Value::from(*k)))
            .collect())
    }

    /// Write the default configuration file (unless `is_test`), returning its path.
    pub fn init_all(api_url: Option<String>, is_test: bool) -> AppResult<PathBuf> {
        let dir = Self::config_dir();
        let path = Self::config_file();

        let mut config = Config::default();
        if let Some(url) = api_url {
            config.api_url = url;
        }

        if !is_test {
            fs::create_dir_all(&dir)?;
            let yaml = serde_yaml::to_string(&config)?;
            let mut file = fs::File::create(&path)?;
            file.write_all(yaml.as_bytes())?;
        }

        Ok(path)
    }
}
