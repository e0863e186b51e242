//! Solid color cycling through the HSV color wheel.

use lull_core::{Canvas, SaverEntry, SaverOptions, Screensaver};

use crate::color::hsv_to_rgb;

pub const ENTRY: SaverEntry = SaverEntry {
    name: "Color Wheel",
    description: "Fills the screen with a solid color that slowly travels around the color wheel",
    factory: create,
};

fn create(options: &SaverOptions) -> Box<dyn Screensaver> {
    Box::new(ColorWheel::new(options.hue_step))
}

#[derive(Debug, Clone)]
pub struct ColorWheel {
    /// Current hue in turns, `0.0..1.0`; starts at red.
    hue: f64,
    step: f64,
}

impl ColorWheel {
    pub fn new(step: f64) -> Self {
        Self { hue: 0.0, step }
    }

    pub fn hue(&self) -> f64 {
        self.hue
    }
}

impl Screensaver for ColorWheel {
    fn name(&self) -> &'static str {
        ENTRY.name
    }

    fn render(&mut self, canvas: &mut Canvas<'_>) {
        canvas.fill(hsv_to_rgb(self.hue as f32, 1.0, 1.0));

        self.hue += self.step;
        if self.hue >= 1.0 {
            self.hue = 0.0;
        }
    }
}
