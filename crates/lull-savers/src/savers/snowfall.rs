//! Snowfall with gently drifting flakes.

use std::f32::consts::TAU;
use std::time::Duration;

use lull_core::{AnimationSpeed, Canvas, SaverEntry, SaverOptions, Screensaver};
use rand::{Rng, rngs::StdRng};
use ratatui::style::{Color, Style};

use super::rng_from;
use crate::chars::SNOW_CHARS;

pub const ENTRY: SaverEntry = SaverEntry {
    name: "Snowfall",
    description: "Snowflakes drifting down in three sizes",
    factory: create,
};

fn create(options: &SaverOptions) -> Box<dyn Screensaver> {
    Box::new(Snowfall::new(options.speed, rng_from(options.seed)))
}

/// Milliseconds for one full sideways drift.
const DRIFT_PERIOD_MS: f32 = 3000.0;

/// Flake colors by size, small to large.
const FLAKE_COLORS: [Color; 3] = [
    Color::Rgb(70, 100, 160),
    Color::Rgb(65, 105, 225),
    Color::Rgb(30, 144, 255),
];

#[derive(Debug, Clone)]
struct Flake {
    y: f32,
    speed: f32,
    /// Drift phase offset in turns.
    phase: f32,
    size: usize,
    glyph: usize,
}

impl Flake {
    fn spawn(rng: &mut StdRng, height: u16) -> Self {
        Self {
            y: -rng.gen_range(0.0..f32::from(height.max(1)) * 3.0),
            speed: rng.gen_range(0.2..0.7),
            phase: rng.gen_range(0.0..1.0),
            size: rng.gen_range(0..SNOW_CHARS.len()),
            glyph: rng.gen_range(0..3),
        }
    }
}

#[derive(Debug)]
pub struct Snowfall {
    flakes: Vec<Flake>,
    size: (u16, u16),
    last_elapsed: Duration,
    speed: AnimationSpeed,
    rng: StdRng,
}

impl Snowfall {
    pub fn new(speed: AnimationSpeed, rng: StdRng) -> Self {
        Self {
            flakes: Vec::new(),
            size: (0, 0),
            last_elapsed: Duration::ZERO,
            speed,
            rng,
        }
    }

    fn reset(&mut self, width: u16, height: u16) {
        self.flakes = (0..width)
            .map(|_| Flake::spawn(&mut self.rng, height))
            .collect();
        self.size = (width, height);
    }

    fn advance(&mut self, delta: Duration, height: u16) {
        let rows = delta.as_millis() as f32 / 80.0 * self.speed.snow_fall_speed();
        for flake in &mut self.flakes {
            flake.y += rows * flake.speed;
            if flake.y > f32::from(height) + 2.0 {
                flake.y = -2.0;
                flake.glyph = (flake.glyph + 1) % 3;
            }
        }
    }
}

impl Screensaver for Snowfall {
    fn name(&self) -> &'static str {
        ENTRY.name
    }

    fn render(&mut self, canvas: &mut Canvas<'_>) {
        let (width, height) = (canvas.width(), canvas.height());
        if self.size != (width, height) || self.flakes.is_empty() {
            self.reset(width, height);
        }

        let elapsed = canvas.elapsed();
        self.advance(elapsed.saturating_sub(self.last_elapsed), height);
        self.last_elapsed = elapsed;

        let turns = elapsed.as_millis() as f32 / DRIFT_PERIOD_MS;
        canvas.clear();
        for (column, flake) in self.flakes.iter().enumerate() {
            let drift = ((turns + flake.phase) * TAU).sin();
            let x = column as i32 + drift.round() as i32;
            let y = flake.y.round() as i32;
            if x < 0 || y < 0 || x >= i32::from(width) || y >= i32::from(height) {
                continue;
            }
            let glyph = SNOW_CHARS[flake.size][flake.glyph];
            let style = Style::new().fg(FLAKE_COLORS[flake.size]).bg(Color::Black);
            canvas.set_char(x as u16, y as u16, glyph, style);
        }
    }
}
