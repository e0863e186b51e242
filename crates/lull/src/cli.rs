use std::path::PathBuf;

use clap::Parser;
use lull_config::{Config, TimingProfile};
use lull_core::AnimationSpeed;

#[derive(Parser, Debug, Default)]
#[command(
    name = "lull",
    author,
    version,
    about = "A terminal screensaver with a live preview"
)]
pub struct Args {
    /// Screensaver to select at startup (see `--list`).
    #[arg(short, long, value_name = "NAME")]
    pub saver: Option<String>,

    /// Start directly in fullscreen mode.
    #[arg(short, long)]
    pub fullscreen: bool,

    /// Print the available screensavers and exit.
    #[arg(long)]
    pub list: bool,

    /// Keep each quote on screen for thirty minutes instead of ten seconds.
    #[arg(long)]
    pub production_timing: bool,

    /// Animation speed: `slow`, `medium` or `fast`.
    #[arg(long, value_name = "SPEED", value_parser = parse_speed)]
    pub speed: Option<AnimationSpeed>,

    /// Frames per second to render at.
    #[arg(long, value_name = "FPS", value_parser = parse_fps)]
    pub fps: Option<f32>,

    /// Path to the configuration file.
    #[arg(long, value_name = "PATH", env = "LULL_CONFIG")]
    pub config: Option<PathBuf>,

    /// Write logs to this file instead of the data directory.
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

impl Args {
    /// Apply command line overrides on top of the loaded configuration.
    pub fn apply(&self, config: &mut Config) {
        if let Some(saver) = &self.saver {
            config.default_saver = Some(saver.clone());
        }
        if self.production_timing {
            config.quotes.timing = TimingProfile::Production;
        }
        if let Some(speed) = self.speed {
            config.speed = speed;
        }
        if let Some(fps) = self.fps {
            config.frame_interval_ms = ((1000.0 / fps).round() as u64).max(1);
        }
    }
}

fn parse_speed(value: &str) -> Result<AnimationSpeed, String> {
    match value.trim().to_ascii_lowercase().as_str() {
        "slow" => Ok(AnimationSpeed::Slow),
        "medium" => Ok(AnimationSpeed::Medium),
        "fast" => Ok(AnimationSpeed::Fast),
        other => Err(format!("unknown speed '{other}', expected slow, medium or fast")),
    }
}

fn parse_fps(value: &str) -> Result<f32, String> {
    let fps: f32 = value
        .trim()
        .parse()
        .map_err(|_| format!("'{value}' is not a number"))?;
    if fps.is_finite() && fps > 0.0 && fps <= 1000.0 {
        Ok(fps)
    } else {
        Err(format!("fps must be between 0 and 1000, got {fps}"))
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    #[test]
    fn overrides_config() {
        let args = Args::try_parse_from([
            "lull",
            "--saver",
            "Snowfall",
            "--production-timing",
            "--speed",
            "FAST",
            "--fps",
            "20",
        ])
        .unwrap();
        let mut config = Config::default();
        args.apply(&mut config);
        assert_eq!(config.default_saver.as_deref(), Some("Snowfall"));
        assert_eq!(config.quotes.timing, TimingProfile::Production);
        assert_eq!(config.speed, AnimationSpeed::Fast);
        assert_eq!(config.frame_interval(), Duration::from_millis(50));
    }

    #[test]
    fn no_flags_leave_config_alone() {
        let args = Args::try_parse_from(["lull"]).unwrap();
        let mut config = Config::default();
        args.apply(&mut config);
        assert_eq!(config, Config::default());
    }

    #[test]
    fn rejects_bad_values() {
        assert!(Args::try_parse_from(["lull", "--fps", "0"]).is_err());
        assert!(Args::try_parse_from(["lull", "--fps", "fast"]).is_err());
        assert!(Args::try_parse_from(["lull", "--speed", "ludicrous"]).is_err());
    }
}
