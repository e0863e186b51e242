//! Sparse twinkling starfield.

use lull_core::{AnimationSpeed, Canvas, SaverEntry, SaverOptions, Screensaver};
use rand::Rng;
use ratatui::style::{Color, Style};

use super::rng_from;
use crate::chars::STAR_CHARS;

pub const ENTRY: SaverEntry = SaverEntry {
    name: "Starfield",
    description: "A dark sky of softly twinkling stars",
    factory: create,
};

fn create(options: &SaverOptions) -> Box<dyn Screensaver> {
    Box::new(Starfield::new(options.speed, rng_from(options.seed).r#gen()))
}

/// Percentage of cells holding a star.
const STAR_DENSITY: u64 = 3;

const BRIGHTNESS: [Color; 3] = [
    Color::Rgb(60, 60, 80),
    Color::Rgb(100, 100, 140),
    Color::Rgb(150, 150, 200),
];

/// Stars are recomputed from position and time, so the screensaver keeps no
/// per-cell state.
#[derive(Debug, Clone)]
pub struct Starfield {
    speed: AnimationSpeed,
    seed: u64,
}

impl Starfield {
    pub fn new(speed: AnimationSpeed, seed: u64) -> Self {
        Self { speed, seed }
    }

    /// Star glyph and color at a cell for the given twinkle epoch.
    fn star_at(&self, x: u16, y: u16, epoch: u64) -> Option<(char, Color)> {
        let hash = mix(self.seed ^ (u64::from(x) << 32) ^ (u64::from(y) << 16) ^ epoch);
        if hash % 100 >= STAR_DENSITY {
            return None;
        }
        let glyph = STAR_CHARS[(hash / 100) as usize % STAR_CHARS.len()];
        let color = BRIGHTNESS[(hash / 1000) as usize % BRIGHTNESS.len()];
        Some((glyph, color))
    }
}

/// SplitMix64 finalizer.
fn mix(mut z: u64) -> u64 {
    z = z.wrapping_add(0x9E37_79B9_7F4A_7C15);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

impl Screensaver for Starfield {
    fn name(&self) -> &'static str {
        ENTRY.name
    }

    fn render(&mut self, canvas: &mut Canvas<'_>) {
        let epoch = canvas.elapsed().as_millis() as u64 / self.speed.star_twinkle_period_ms();
        canvas.clear();
        for y in 0..canvas.height() {
            for x in 0..canvas.width() {
                if let Some((glyph, color)) = self.star_at(x, y, epoch) {
                    canvas.set_char(x, y, glyph, Style::new().fg(color).bg(Color::Black));
                }
            }
        }
    }
}
