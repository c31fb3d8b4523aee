use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    /// Path of the shared workbook.
    pub workbook: String,
    /// How many trailing visits the recommendation fallback excludes.
    #[serde(default = "default_recent_window")]
    pub recent_window: usize,
    /// Read-cache lifetime in seconds. 0 disables caching.
    #[serde(default = "default_cache_ttl")]
    pub cache_ttl_secs: u64,
    /// How many restaurants each stats chart shows.
    #[serde(default = "default_top_n")]
    pub top_n: usize,
    /// Width of the stats bars, in terminal cells.
    #[serde(default = "default_chart_width")]
    pub chart_width: usize,
}

fn default_recent_window() -> usize {
    5
}
fn default_cache_ttl() -> u64 {
    60
}
fn default_top_n() -> usize {
    10
}
fn default_chart_width() -> usize {
    30
}

impl Default for Config {
    fn default() -> Self {
        Self {
            workbook: Self::workbook_file().to_string_lossy().to_string(),
            recent_window: default_recent_window(),
            cache_ttl_secs: default_cache_ttl(),
            top_n: default_top_n(),
            chart_width: default_chart_width(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".lunchpick")
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("lunchpick.conf")
    }

    /// Return the default path of the workbook
    pub fn workbook_file() -> PathBuf {
        Self::config_dir().join("lunchpick.xlsx")
    }

    pub fn ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_secs)
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(&path).map_err(|_| AppError::ConfigLoad)?;
        serde_yaml::from_str(&content).map_err(|_| AppError::ConfigLoad)
    }

    pub fn save(&self) -> AppResult<()> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir).map_err(|_| AppError::ConfigSave)?;
        let yaml = serde_yaml::to_string(self).map_err(|_| AppError::ConfigSave)?;
        fs::write(Self::config_file(), yaml).map_err(|_| AppError::ConfigSave)
    }

    /// Initialize the configuration file and resolve the workbook path.
    /// In test mode the config file is left untouched.
    pub fn init_all(custom_workbook: Option<String>, is_test: bool) -> AppResult<Config> {
        let dir = Self::config_dir();

        let workbook_path = if let Some(name) = custom_workbook {
            let p = PathBuf::from(&name);
            if p.is_absolute() {
                p
            } else {
                dir.join(p)
            }
        } else {
            Self::workbook_file()
        };

        let config = Config {
            workbook: workbook_path.to_string_lossy().to_string(),
            ..Config::default()
        };

        if !is_test {
            config.save()?;
        }

        Ok(config)
    }
}
