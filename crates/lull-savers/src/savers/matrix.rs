//! Matrix rain: falling glyph columns with fading green trails.

use std::time::Duration;

use lull_core::{AnimationSpeed, Canvas, SaverEntry, SaverOptions, Screensaver};
use rand::{Rng, rngs::StdRng};
use ratatui::style::{Color, Style};

use super::rng_from;
use crate::chars::MATRIX_CHARS;

pub const ENTRY: SaverEntry = SaverEntry {
    name: "Matrix Rain",
    description: "Columns of green glyphs raining down the screen",
    factory: create,
};

fn create(options: &SaverOptions) -> Box<dyn Screensaver> {
    Box::new(MatrixRain::new(options.speed, rng_from(options.seed)))
}

/// One falling drop per screen column.
#[derive(Debug, Clone)]
struct Raindrop {
    /// Row of the drop head; negative while still above the screen.
    head: f32,
    speed: f32,
    trail: u16,
    glyph_seed: usize,
}

impl Raindrop {
    fn spawn(rng: &mut StdRng, height: u16) -> Self {
        let trail = rng.gen_range(4..12);
        Self {
            head: -rng.gen_range(0.0..f32::from(height.max(1)) * 2.0),
            speed: rng.gen_range(0.3..1.0),
            trail,
            glyph_seed: rng.gen_range(0..MATRIX_CHARS.len()),
        }
    }
}

#[derive(Debug)]
pub struct MatrixRain {
    drops: Vec<Raindrop>,
    size: (u16, u16),
    last_elapsed: Duration,
    speed: AnimationSpeed,
    rng: StdRng,
}

impl MatrixRain {
    pub fn new(speed: AnimationSpeed, rng: StdRng) -> Self {
        Self {
            drops: Vec::new(),
            size: (0, 0),
            last_elapsed: Duration::ZERO,
            speed,
            rng,
        }
    }

    fn reset(&mut self, width: u16, height: u16) {
        self.drops = (0..width)
            .map(|_| Raindrop::spawn(&mut self.rng, height))
            .collect();
        self.size = (width, height);
    }

    fn advance(&mut self, delta: Duration, height: u16) {
        let rows = delta.as_millis() as f32 / 50.0 * self.speed.matrix_fall_speed();
        for drop in &mut self.drops {
            drop.head += rows * drop.speed;
            if drop.head > f32::from(height) + f32::from(drop.trail) {
                drop.head = -f32::from(drop.trail);
                drop.glyph_seed = drop.glyph_seed.wrapping_add(1);
            }
        }
    }
}

impl Screensaver for MatrixRain {
    fn name(&self) -> &'static str {
        ENTRY.name
    }

    fn render(&mut self, canvas: &mut Canvas<'_>) {
        let (width, height) = (canvas.width(), canvas.height());
        if self.size != (width, height) || self.drops.is_empty() {
            self.reset(width, height);
        }

        let elapsed = canvas.elapsed();
        self.advance(elapsed.saturating_sub(self.last_elapsed), height);
        self.last_elapsed = elapsed;

        canvas.clear();
        for (x, drop) in self.drops.iter().enumerate() {
            let head = drop.head.floor() as i32;
            for offset in 0..=i32::from(drop.trail) {
                let y = head - offset;
                if y < 0 || y >= i32::from(height) {
                    continue;
                }
                let color = if offset == 0 {
                    Color::Rgb(200, 255, 200)
                } else {
                    let fade = 1.0 - offset as f32 / f32::from(drop.trail);
                    Color::Rgb(0, (80.0 + 120.0 * fade) as u8, 0)
                };
                let glyph_index = drop.glyph_seed.wrapping_add(y as usize) % MATRIX_CHARS.len();
                let style = Style::new().fg(color).bg(Color::Black);
                canvas.set_char(x as u16, y as u16, MATRIX_CHARS[glyph_index], style);
            }
        }
    }
}
