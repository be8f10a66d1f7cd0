use crate::error::{BookError, Result};
use crate::store::fs::DEFAULT_DATA_FILE;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_DIRNAME: &str = ".addrbook";
const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_LOG_LEVEL: &str = "warn";

/// Configuration for addrbook, stored in .addrbook/config.json
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct BookConfig {
    /// Where the address book is persisted, relative to the working directory
    #[serde(default = "default_data_file")]
    pub data_file: PathBuf,

    /// Log level for diagnostics on stderr (trace|debug|info|warn|error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_data_file() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_FILE)
}

fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

impl Default for BookConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            log_level: default_log_level(),
        }
    }
}

impl BookConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(BookError::Io)?;
        let config: BookConfig =
            serde_json::from_str(&content).map_err(BookError::Serialization)?;
        Ok(config)
    }

    /// Command-line values win over the file.
    pub fn with_overrides(mut self, data_file: Option<PathBuf>, verbose: bool) -> Self {
        if let Some(path) = data_file {
            self.data_file = path;
        }
        if verbose {
            self.log_level = "debug".to_string();
        }
        self
    }
}
