//! Glyph sets used by the screensavers.

/// Twinkling stars, dimmest first.
pub const STAR_CHARS: &[char] = &['.', '·', '+', '*', '✧', '✦'];

/// Matrix rain glyphs. Half-width katakana keep every glyph one cell wide.
pub const MATRIX_CHARS: &[char] = &[
    'ｱ', 'ｲ', 'ｳ', 'ｴ', 'ｵ', 'ｶ', 'ｷ', 'ｸ', 'ｹ', 'ｺ', 'ｻ', 'ｼ', 'ｽ', 'ｾ', 'ｿ', 'ﾀ', 'ﾁ', 'ﾂ', 'ﾃ',
    'ﾄ', '0', '1', '2', '3', '4', '5', '6', '7', '8', '9',
];

/// Snowflakes grouped by size: three small, three medium, three large.
pub const SNOW_CHARS: [[char; 3]; 3] = [['·', '.', '°'], ['*', '•', '✧'], ['❄', '❅', '❆']];
