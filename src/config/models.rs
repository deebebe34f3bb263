use eyre::Result;
use serde::{Deserialize, Serialize};

#[allow(unused_imports)]
use super::CONFIG;

use super::constants::STORE_FILE_PATH;
use super::defaults::*;

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct Configuration {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub log: LogConfig,

    #[serde(default)]
    pub storage: StorageConfig,
}

#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct GeneralConfig {
    #[serde(default)]
    pub verbose: bool,

    #[serde(default = "welcome_message")]
    pub welcome_message: Option<String>,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct LogConfig {
    #[serde(default = "log_level")]
    pub level: Option<String>,

    #[serde(default)]
    pub filters: Option<Vec<LogFilter>>,

    #[serde(default)]
    pub file: LogFile,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct LogFilter {
    #[serde(default)]
    pub module: Option<String>,

    #[serde(default)]
    pub level: Option<String>,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct LogFile {
    #[serde(default = "log_file_path")]
    pub path: String,

    #[serde(default)]
    pub append: bool,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub enum StorageConfig {
    #[serde(rename = "file")]
    File(FileStorage),
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct FileStorage {
    pub path: Option<String>,
}

impl StorageConfig {
    pub fn path(&self) -> &str {
        match self {
            StorageConfig::File(file) => file.path.as_deref().unwrap_or(STORE_FILE_PATH),
        }
    }
}

impl Configuration {
    #[cfg(not(test))]
    pub fn instance() -> &'static Configuration {
        CONFIG.get().expect("Config not initialized")
    }

    #[cfg(not(test))]
    pub fn init(config: Configuration) -> Result<()> {
        CONFIG
            .set(config)
            .map_err(|_| eyre::eyre!("Config already initialized"))?;
        Ok(())
    }

    #[cfg(test)]
    pub fn instance() -> &'static Configuration {
        use super::TEST_CONFIG;
        TEST_CONFIG.with(|config| *config.borrow())
    }

    #[cfg(test)]
    pub fn init(config: Configuration) -> Result<()> {
        use super::TEST_CONFIG;
        TEST_CONFIG.with(|test_config| {
            *test_config.borrow_mut() = Box::leak(Box::new(config));
        });
        Ok(())
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            general: GeneralConfig::default(),
            log: LogConfig::default(),
            storage: StorageConfig::default(),
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: Some("info".to_string()),
            file: LogFile::default(),
            filters: None,
        }
    }
}

impl Default for LogFile {
    fn default() -> Self {
        Self {
            path: log_file_path(),
            append: false,
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        StorageConfig::File(FileStorage { path: None })
    }
}
