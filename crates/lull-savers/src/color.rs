//! Color helpers.

use ratatui::style::Color;

/// Convert HSV (each component in `0.0..=1.0`) to an RGB terminal color.
///
/// Channels are truncated, so full intensity maps to 255 and anything just
/// below it to 254.
pub fn hsv_to_rgb(h: f32, s: f32, v: f32) -> Color {
    let (r, g, b) = if s == 0.0 {
        (v, v, v)
    } else {
        let sector = (h * 6.0).floor();
        let f = h * 6.0 - sector;
        let p = v * (1.0 - s);
        let q = v * (1.0 - s * f);
        let t = v * (1.0 - s * (1.0 - f));
        match (sector as i64).rem_euclid(6) {
            0 => (v, t, p),
            1 => (q, v, p),
            2 => (p, v, t),
            3 => (p, q, v),
            4 => (t, p, v),
            _ => (v, p, q),
        }
    };
    Color::Rgb(channel(r), channel(g), channel(b))
}

/// Grey of the given intensity: 0.0 is black, 1.0 is white.
pub fn grey(alpha: f32) -> Color {
    let v = channel(alpha.clamp(0.0, 1.0));
    Color::Rgb(v, v, v)
}

fn channel(value: f32) -> u8 {
    (value * 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_and_secondary_hues() {
        assert_eq!(hsv_to_rgb(0.0, 1.0, 1.0), Color::Rgb(255, 0, 0));
        assert_eq!(hsv_to_rgb(0.5, 1.0, 1.0), Color::Rgb(0, 255, 255));
        assert_eq!(hsv_to_rgb(0.25, 1.0, 1.0), Color::Rgb(127, 255, 0));
        assert_eq!(hsv_to_rgb(0.75, 1.0, 1.0), Color::Rgb(127, 0, 255));
    }

    #[test]
    fn zero_saturation_is_grey() {
        assert_eq!(hsv_to_rgb(0.3, 0.0, 0.5), Color::Rgb(127, 127, 127));
    }

    #[test]
    fn grey_ramp_is_clamped() {
        assert_eq!(grey(0.0), Color::Rgb(0, 0, 0));
        assert_eq!(grey(1.0), Color::Rgb(255, 255, 255));
        assert_eq!(grey(0.5), Color::Rgb(127, 127, 127));
        assert_eq!(grey(3.0), Color::Rgb(255, 255, 255));
    }
}
