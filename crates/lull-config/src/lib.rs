//! Configuration for the lull screensaver.
//!
//! Settings live in a TOML file in the platform config directory. A missing
//! file means defaults; the file is never written by the application.

mod paths;

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use lull_core::{
    AnimationSpeed, DEFAULT_FADE_STEPS, DEFAULT_FRAME_INTERVAL, DEFAULT_HUE_STEP, QuoteTiming,
    SaverOptions,
};
use serde::{Deserialize, Serialize};

pub use paths::{CONFIG_FILE_NAME, ENV_CONFIG_DIR, ProjectPaths, QUOTES_FILE_NAME};

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse configuration: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid configuration: {0}")]
    Invalid(String),
    #[error("could not determine the user's home directory")]
    NoHomeDir,
}

/// How long quotes stay on screen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TimingProfile {
    /// Ten seconds per quote.
    #[default]
    Test,
    /// Thirty minutes per quote.
    Production,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorWheelConfig {
    /// Hue advanced per frame, as a fraction of the full wheel.
    pub hue_step: f64,
}

impl Default for ColorWheelConfig {
    fn default() -> Self {
        Self {
            hue_step: DEFAULT_HUE_STEP,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct QuotesConfig {
    /// Quotes file; relative paths are resolved against the config directory.
    pub file: Option<PathBuf>,
    pub timing: TimingProfile,
    /// Overrides the display time of the timing profile.
    pub display_secs: Option<u64>,
    pub fade_steps: u32,
}

impl Default for QuotesConfig {
    fn default() -> Self {
        Self {
            file: None,
            timing: TimingProfile::default(),
            display_secs: None,
            fade_steps: DEFAULT_FADE_STEPS,
        }
    }
}

impl QuotesConfig {
    pub fn timing(&self) -> QuoteTiming {
        let mut timing = match self.timing {
            TimingProfile::Test => QuoteTiming::test(),
            TimingProfile::Production => QuoteTiming::production(),
        };
        if let Some(secs) = self.display_secs {
            timing.display = Duration::from_secs(secs);
        }
        timing.fade_steps = self.fade_steps;
        timing
    }

    /// Quotes file to use, given the directory the config file lives in.
    pub fn resolve_file(&self, config_dir: &Path) -> Option<PathBuf> {
        match &self.file {
            Some(file) if file.is_absolute() => Some(file.clone()),
            Some(file) => Some(config_dir.join(file)),
            None => Some(config_dir.join(QUOTES_FILE_NAME)).filter(|p| p.exists()),
        }
    }
}

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Screensaver selected at startup.
    pub default_saver: Option<String>,
    pub frame_interval_ms: u64,
    pub speed: AnimationSpeed,
    /// How long the fullscreen exit hint stays visible.
    pub hint_duration_ms: u64,
    pub color_wheel: ColorWheelConfig,
    pub quotes: QuotesConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_saver: None,
            frame_interval_ms: DEFAULT_FRAME_INTERVAL.as_millis() as u64,
            speed: AnimationSpeed::default(),
            hint_duration_ms: 3000,
            color_wheel: ColorWheelConfig::default(),
            quotes: QuotesConfig::default(),
        }
    }
}

impl Config {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(input: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(input)?;
        config.validate()?;
        Ok(config)
    }

    /// Load the config file at `path`; a missing file yields defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        match fs::read_to_string(path) {
            Ok(text) => {
                let config = Self::from_toml_str(&text)?;
                tracing::info!(path = %path.display(), "loaded configuration");
                Ok(config)
            }
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no config file, using defaults");
                Ok(Self::default())
            }
            Err(source) => Err(ConfigError::Io {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.frame_interval_ms == 0 {
            return Err(ConfigError::Invalid(
                "frame_interval_ms must be greater than zero".into(),
            ));
        }
        let step = self.color_wheel.hue_step;
        if !(step > 0.0 && step < 1.0) {
            return Err(ConfigError::Invalid(format!(
                "color_wheel.hue_step must be between 0 and 1, got {step}"
            )));
        }
        if self.quotes.fade_steps == 0 {
            return Err(ConfigError::Invalid(
                "quotes.fade_steps must be greater than zero".into(),
            ));
        }
        if self.default_saver.as_deref().is_some_and(|s| s.trim().is_empty()) {
            return Err(ConfigError::Invalid("default_saver must not be empty".into()));
        }
        Ok(())
    }

    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(self.frame_interval_ms)
    }

    pub fn hint_duration(&self) -> Duration {
        Duration::from_millis(self.hint_duration_ms)
    }

    /// Options handed to screensaver factories.
    pub fn saver_options(&self, config_dir: &Path) -> SaverOptions {
        SaverOptions {
            speed: self.speed,
            hue_step: self.color_wheel.hue_step,
            quotes_file: self.quotes.resolve_file(config_dir),
            quote_timing: self.quotes.timing(),
            seed: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const FULL: &str = r#"
default_saver = "Matrix Rain"
frame_interval_ms = 50
speed = "fast"
hint_duration_ms = 1500

[color_wheel]
hue_step = 0.01

[quotes]
file = "my-quotes.txt"
timing = "production"
fade_steps = 30
"#;

    #[test]
    fn empty_document_is_default() {
        assert_eq!(Config::from_toml_str("").unwrap(), Config::default());
        let config = Config::default();
        assert_eq!(config.frame_interval(), Duration::from_millis(67));
        assert_eq!(config.hint_duration(), Duration::from_secs(3));
    }

    #[test]
    fn parses_every_field() {
        let config = Config::from_toml_str(FULL).unwrap();
        assert_eq!(config.default_saver.as_deref(), Some("Matrix Rain"));
        assert_eq!(config.frame_interval(), Duration::from_millis(50));
        assert_eq!(config.speed, AnimationSpeed::Fast);
        assert_eq!(config.color_wheel.hue_step, 0.01);
        assert_eq!(
            config.quotes.timing(),
            QuoteTiming {
                display: Duration::from_secs(1800),
                fade_steps: 30,
            }
        );
    }

    #[test]
    fn display_secs_overrides_profile() {
        let config = Config::from_toml_str("[quotes]\ndisplay_secs = 5\n").unwrap();
        assert_eq!(config.quotes.timing().display, Duration::from_secs(5));
    }

    #[test]
    fn rejects_unknown_keys_and_bad_values() {
        assert!(matches!(
            Config::from_toml_str("colour = 1"),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(
            Config::from_toml_str("frame_interval_ms = 0"),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            Config::from_toml_str("[color_wheel]\nhue_step = 1.5"),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            Config::from_toml_str("[quotes]\nfade_steps = 0"),
            Err(ConfigError::Invalid(_))
        ));
    }

    #[test]
    fn missing_file_loads_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn loads_file_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, FULL).unwrap();
        let config = Config::load(&path).unwrap();
        assert_eq!(config.hint_duration_ms, 1500);
    }

    #[test]
    fn resolves_quotes_file_against_config_dir() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::from_toml_str(FULL).unwrap();
        let options = config.saver_options(dir.path());
        assert_eq!(options.quotes_file, Some(dir.path().join("my-quotes.txt")));
        assert_eq!(options.speed, AnimationSpeed::Fast);

        let defaults = Config::default();
        assert_eq!(defaults.saver_options(dir.path()).quotes_file, None);
        fs::write(dir.path().join(QUOTES_FILE_NAME), "a|b\n").unwrap();
        assert_eq!(
            defaults.saver_options(dir.path()).quotes_file,
            Some(dir.path().join(QUOTES_FILE_NAME))
        );
    }
}
