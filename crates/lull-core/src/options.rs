//! Settings handed to screensaver factories.

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Default hue increment per frame for the color wheel.
pub const DEFAULT_HUE_STEP: f64 = 0.001;

/// Default number of frames a quote fade takes.
pub const DEFAULT_FADE_STEPS: u32 = 60;

/// Animation speed for the time-driven screensavers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AnimationSpeed {
    Slow,
    #[default]
    Medium,
    Fast,
}

impl AnimationSpeed {
    /// Cycle to the next speed.
    pub fn next(self) -> Self {
        match self {
            AnimationSpeed::Slow => AnimationSpeed::Medium,
            AnimationSpeed::Medium => AnimationSpeed::Fast,
            AnimationSpeed::Fast => AnimationSpeed::Slow,
        }
    }

    /// Human readable label.
    pub fn label(self) -> &'static str {
        match self {
            AnimationSpeed::Slow => "slow",
            AnimationSpeed::Medium => "medium",
            AnimationSpeed::Fast => "fast",
        }
    }

    /// Fall speed multiplier for matrix rain.
    pub fn matrix_fall_speed(self) -> f32 {
        match self {
            AnimationSpeed::Slow => 0.5,
            AnimationSpeed::Medium => 1.0,
            AnimationSpeed::Fast => 2.0,
        }
    }

    /// Fall speed multiplier for snowfall.
    pub fn snow_fall_speed(self) -> f32 {
        match self {
            AnimationSpeed::Slow => 0.4,
            AnimationSpeed::Medium => 0.8,
            AnimationSpeed::Fast => 1.6,
        }
    }

    /// Milliseconds between starfield reshuffles.
    pub fn star_twinkle_period_ms(self) -> u64 {
        match self {
            AnimationSpeed::Slow => 1600,
            AnimationSpeed::Medium => 800,
            AnimationSpeed::Fast => 300,
        }
    }
}

/// Timing of the quote fade cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuoteTiming {
    /// How long a fully faded-in quote stays on screen.
    pub display: Duration,
    /// Frames spent fading in or out.
    pub fade_steps: u32,
}

impl QuoteTiming {
    /// Short display time, handy while trying screensavers out.
    pub fn test() -> Self {
        Self {
            display: Duration::from_secs(10),
            fade_steps: DEFAULT_FADE_STEPS,
        }
    }

    /// Long display time for unattended use.
    pub fn production() -> Self {
        Self {
            display: Duration::from_secs(30 * 60),
            fade_steps: DEFAULT_FADE_STEPS,
        }
    }
}

impl Default for QuoteTiming {
    fn default() -> Self {
        Self::test()
    }
}

/// Options every screensaver factory receives.
#[derive(Debug, Clone, PartialEq)]
pub struct SaverOptions {
    pub speed: AnimationSpeed,
    /// Hue advanced per rendered frame, in turns of the color wheel.
    pub hue_step: f64,
    pub quotes_file: Option<PathBuf>,
    pub quote_timing: QuoteTiming,
    /// Fixed RNG seed; `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for SaverOptions {
    fn default() -> Self {
        Self {
            speed: AnimationSpeed::default(),
            hue_step: DEFAULT_HUE_STEP,
            quotes_file: None,
            quote_timing: QuoteTiming::default(),
            seed: None,
        }
    }
}

impl SaverOptions {
    /// Same options with a fixed seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
