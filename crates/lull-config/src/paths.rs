use std::env;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;

use crate::ConfigError;

/// Overrides the config directory.
pub const ENV_CONFIG_DIR: &str = "LULL_CONFIG_DIR";

pub const CONFIG_FILE_NAME: &str = "config.toml";
pub const QUOTES_FILE_NAME: &str = "quotes.txt";

const QUALIFIER: &str = "dev";
const ORGANISATION: &str = "lull";
const APPLICATION: &str = "lull";

/// Where lull keeps its files.
#[derive(Debug, Clone)]
pub struct ProjectPaths {
    config_dir: PathBuf,
    config_file: PathBuf,
    data_dir: PathBuf,
}

impl ProjectPaths {
    /// Platform directories, with `LULL_CONFIG_DIR` taking precedence for the
    /// config directory.
    pub fn discover() -> Result<Self, ConfigError> {
        let dirs =
            ProjectDirs::from(QUALIFIER, ORGANISATION, APPLICATION).ok_or(ConfigError::NoHomeDir)?;
        let config_dir = env::var_os(ENV_CONFIG_DIR)
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| dirs.config_dir().to_path_buf());
        Ok(Self::new(config_dir, dirs.data_local_dir()))
    }

    pub fn new(config_dir: impl Into<PathBuf>, data_dir: impl Into<PathBuf>) -> Self {
        let config_dir = config_dir.into();
        Self {
            config_file: config_dir.join(CONFIG_FILE_NAME),
            config_dir,
            data_dir: data_dir.into(),
        }
    }

    /// Use `file` as the config file; its directory becomes the config dir.
    pub fn with_config_file(mut self, file: &Path) -> Self {
        self.config_dir = file
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));
        self.config_file = file.to_path_buf();
        self
    }

    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn config_file(&self) -> &Path {
        &self.config_file
    }

    pub fn log_file(&self) -> PathBuf {
        self.data_dir.join("lull.log")
    }
}
