//! Inspirational quotes that fade in, linger, and fade out.
//!
//! Quotes come from a plain text file with one `quote|author` pair per line.
//! When no file is available a handful of built-in quotes is used instead.

use std::fs;
use std::path::Path;
use std::time::Duration;

use lull_core::{Canvas, QuoteTiming, SaverEntry, SaverOptions, Screensaver};
use rand::{
    rngs::StdRng,
    seq::{IteratorRandom, SliceRandom},
};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::rng_from;
use crate::color::grey;

pub const ENTRY: SaverEntry = SaverEntry {
    name: "Inspirational Quotes",
    description: "Inspirational quotes that fade in and out",
    factory: create,
};

fn create(options: &SaverOptions) -> Box<dyn Screensaver> {
    let quotes = load_quotes(options.quotes_file.as_deref());
    Box::new(InspirationalQuotes::new(
        quotes,
        options.quote_timing,
        rng_from(options.seed),
    ))
}

/// Share of the canvas width quote text is wrapped to.
const WRAP_RATIO: f32 = 0.8;

/// Blank rows between the quote and its author.
const AUTHOR_GAP: u16 = 1;

const FALLBACK_QUOTES: [(&str, &str); 3] = [
    (
        "The only way to do great work is to love what you do.",
        "Steve Jobs",
    ),
    (
        "Believe you can and you're halfway there.",
        "Theodore Roosevelt",
    ),
    (
        "Success is not final, failure is not fatal.",
        "Winston Churchill",
    ),
];

/// A quote and who said it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quote {
    pub text: String,
    pub author: String,
}

impl Quote {
    pub fn new(text: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            author: author.into(),
        }
    }

    /// Author line as displayed under the quote.
    pub fn attribution(&self) -> String {
        format!("— {}", self.author)
    }
}

/// Where the quote currently is in its fade cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FadeState {
    Idle,
    FadingIn,
    Displaying,
    FadingOut,
}

/// Parse `quote|author` lines. Blank lines and lines without a `|` are
/// skipped; only the first `|` separates quote from author.
pub fn parse_quotes(text: &str) -> Vec<Quote> {
    text.lines()
        .map(str::trim)
        .filter_map(|line| line.split_once('|'))
        .map(|(quote, author)| Quote::new(quote.trim(), author.trim()))
        .collect()
}

/// Load quotes from `path`, falling back to built-in quotes when the file is
/// missing or unreadable.
pub fn load_quotes(path: Option<&Path>) -> Vec<Quote> {
    let Some(path) = path.filter(|p| p.exists()) else {
        tracing::debug!("no quotes file, using built-in quotes");
        return fallback(FALLBACK_QUOTES.len());
    };

    match fs::read_to_string(path) {
        Ok(text) => {
            let quotes = parse_quotes(&text);
            tracing::info!(path = %path.display(), count = quotes.len(), "loaded quotes");
            quotes
        }
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "error loading quotes");
            fallback(2)
        }
    }
}

fn fallback(count: usize) -> Vec<Quote> {
    FALLBACK_QUOTES
        .iter()
        .take(count)
        .map(|(text, author)| Quote::new(*text, *author))
        .collect()
}

/// Greedy word wrap to at most `width` terminal columns; words wider than a
/// line are split.
pub fn wrap_words(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut line = String::new();
    let mut line_width = 0;

    for word in text.split_whitespace() {
        for piece in split_to_width(word, width) {
            let piece_width = columns(&piece);
            if line_width > 0 && line_width + 1 + piece_width > width {
                lines.push(std::mem::take(&mut line));
                line_width = 0;
            }
            if line_width > 0 {
                line.push(' ');
                line_width += 1;
            }
            line.push_str(&piece);
            line_width += piece_width;
        }
    }

    if line_width > 0 {
        lines.push(line);
    }
    lines
}

/// Chunks of `word` at most `width` columns wide. A glyph wider than
/// `width` gets a chunk of its own.
fn split_to_width(word: &str, width: usize) -> Vec<String> {
    let mut pieces = Vec::new();
    let mut piece = String::new();
    let mut piece_width = 0;
    for ch in word.chars() {
        let ch_width = columns(ch.encode_utf8(&mut [0; 4]));
        if piece_width > 0 && piece_width + ch_width > width {
            pieces.push(std::mem::take(&mut piece));
            piece_width = 0;
        }
        piece.push(ch);
        piece_width += ch_width;
    }
    if !piece.is_empty() {
        pieces.push(piece);
    }
    pieces
}

fn columns(text: &str) -> usize {
    Span::raw(text).width()
}

#[derive(Debug)]
pub struct InspirationalQuotes {
    quotes: Vec<Quote>,
    current: Option<usize>,
    state: FadeState,
    step: u32,
    alpha: f32,
    timing: QuoteTiming,
    /// Canvas time at which the displayed quote starts fading out.
    fade_out_at: Option<Duration>,
    rng: StdRng,
}

impl InspirationalQuotes {
    /// Shuffle `quotes` and pick the first quote to show.
    pub fn new(mut quotes: Vec<Quote>, timing: QuoteTiming, mut rng: StdRng) -> Self {
        quotes.shuffle(&mut rng);
        let mut saver = Self {
            quotes,
            current: None,
            state: FadeState::Idle,
            step: 0,
            alpha: 0.0,
            timing,
            fade_out_at: None,
            rng,
        };
        saver.select_random_quote();
        saver
    }

    pub fn state(&self) -> FadeState {
        self.state
    }

    /// Text opacity, `0.0` (invisible) to `1.0`.
    pub fn alpha(&self) -> f32 {
        self.alpha
    }

    pub fn quotes(&self) -> &[Quote] {
        &self.quotes
    }

    pub fn current_quote(&self) -> Option<&Quote> {
        self.current.map(|i| &self.quotes[i])
    }

    fn select_random_quote(&mut self) {
        self.current = (0..self.quotes.len()).choose(&mut self.rng);
    }

    fn start_fade_in(&mut self) {
        self.state = FadeState::FadingIn;
        self.step = 0;
        self.alpha = 0.0;
    }

    fn start_fade_out(&mut self) {
        self.state = FadeState::FadingOut;
        self.step = 0;
        self.alpha = 1.0;
        self.fade_out_at = None;
    }

    fn update_fade(&mut self, now: Duration) {
        let steps = self.timing.fade_steps.max(1);
        match self.state {
            FadeState::FadingIn => {
                self.step += 1;
                self.alpha = (self.step as f32 / steps as f32).min(1.0);
                if self.step >= steps {
                    self.state = FadeState::Displaying;
                    self.alpha = 1.0;
                    self.fade_out_at = Some(now + self.timing.display);
                }
            }
            FadeState::FadingOut => {
                self.step += 1;
                self.alpha = (1.0 - self.step as f32 / steps as f32).max(0.0);
                if self.step >= steps {
                    self.alpha = 0.0;
                    self.select_random_quote();
                    self.start_fade_in();
                }
            }
            FadeState::Idle | FadeState::Displaying => {}
        }
    }

    fn draw_text(&self, canvas: &mut Canvas<'_>) {
        let Some(quote) = self.current_quote().filter(|q| !q.text.is_empty()) else {
            return;
        };
        let width = canvas.width();
        let height = canvas.height();
        let color = grey(self.alpha);

        let wrap_width = (width as f32 * WRAP_RATIO) as usize;
        let lines: Vec<Line> = wrap_words(&quote.text, wrap_width)
            .into_iter()
            .map(Line::from)
            .collect();
        let block_height = lines.len() as u16;
        let top = (height / 2).saturating_sub(block_height / 2);

        let quote_style = Style::new().fg(color).add_modifier(Modifier::BOLD);
        canvas.render_widget(
            Paragraph::new(lines)
                .style(quote_style)
                .alignment(Alignment::Center),
            Rect::new(0, top, width, block_height),
        );

        let author_y = top.saturating_add(block_height + AUTHOR_GAP);
        let author_style = Style::new().fg(color).add_modifier(Modifier::ITALIC);
        canvas.render_widget(
            Paragraph::new(quote.attribution())
                .style(author_style)
                .alignment(Alignment::Center),
            Rect::new(0, author_y, width, 1),
        );
    }
}

impl Screensaver for InspirationalQuotes {
    fn name(&self) -> &'static str {
        ENTRY.name
    }

    fn start(&mut self) {
        if !self.quotes.is_empty() {
            self.start_fade_in();
        }
    }

    fn render(&mut self, canvas: &mut Canvas<'_>) {
        let now = canvas.elapsed();
        match self.state {
            FadeState::FadingIn | FadeState::FadingOut => self.update_fade(now),
            FadeState::Displaying if self.fade_out_at.is_some_and(|at| now >= at) => {
                self.start_fade_out();
                self.update_fade(now);
            }
            FadeState::Displaying | FadeState::Idle => {}
        }

        canvas.clear();
        if self.state != FadeState::Idle {
            self.draw_text(canvas);
        }
    }

    fn cleanup(&mut self) {
        self.fade_out_at = None;
        self.state = FadeState::Idle;
        self.step = 0;
        self.alpha = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use pretty_assertions::assert_eq;
    use rand::SeedableRng;
    use ratatui::{buffer::Buffer, style::Color};

    use super::*;

    fn saver(quotes: Vec<Quote>, fade_steps: u32) -> InspirationalQuotes {
        let timing = QuoteTiming {
            display: Duration::from_secs(1),
            fade_steps,
        };
        InspirationalQuotes::new(quotes, timing, StdRng::seed_from_u64(7))
    }

    fn render_at(saver: &mut InspirationalQuotes, buf: &mut Buffer, millis: u64) {
        let mut canvas = Canvas::new(buf, Duration::from_millis(millis), 0);
        saver.render(&mut canvas);
    }

    #[test]
    fn parses_pipe_separated_lines() {
        let text = "  Stay hungry | Steve Jobs \n\nno separator here\nA|B|C\n";
        assert_eq!(
            parse_quotes(text),
            vec![Quote::new("Stay hungry", "Steve Jobs"), Quote::new("A", "B|C")]
        );
    }

    #[test]
    fn missing_file_uses_three_fallback_quotes() {
        assert_eq!(load_quotes(None).len(), 3);
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(load_quotes(Some(&dir.path().join("quotes.txt"))).len(), 3);
    }

    #[test]
    fn unreadable_file_uses_two_fallback_quotes() {
        let dir = tempfile::tempdir().unwrap();
        let quotes = load_quotes(Some(dir.path()));
        assert_eq!(quotes.len(), 2);
        assert_eq!(quotes[1].author, "Theodore Roosevelt");
    }

    #[test]
    fn loads_quotes_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "Keep going.|Anonymous").unwrap();
        writeln!(file, "garbage").unwrap();
        let quotes = load_quotes(Some(file.path()));
        assert_eq!(quotes, vec![Quote::new("Keep going.", "Anonymous")]);
    }

    #[test]
    fn wraps_on_word_boundaries() {
        assert_eq!(
            wrap_words("the quick brown fox", 10),
            vec!["the quick", "brown fox"]
        );
        assert_eq!(wrap_words("abcdefgh ij", 3), vec!["abc", "def", "gh", "ij"]);
        assert!(wrap_words("   ", 5).is_empty());
    }

    #[test]
    fn runs_the_full_fade_cycle() {
        let mut saver = saver(fallback(3), 4);
        let mut buf = Buffer::empty(Rect::new(0, 0, 60, 10));
        assert_eq!(saver.state(), FadeState::Idle);

        saver.start();
        assert_eq!(saver.state(), FadeState::FadingIn);
        assert_eq!(saver.alpha(), 0.0);

        render_at(&mut saver, &mut buf, 0);
        assert_eq!(saver.alpha(), 0.25);
        for _ in 0..3 {
            render_at(&mut saver, &mut buf, 100);
        }
        assert_eq!(saver.state(), FadeState::Displaying);
        assert_eq!(saver.alpha(), 1.0);

        render_at(&mut saver, &mut buf, 1_000);
        assert_eq!(saver.state(), FadeState::Displaying);
        render_at(&mut saver, &mut buf, 1_100);
        assert_eq!(saver.state(), FadeState::FadingOut);
        assert_eq!(saver.alpha(), 0.75);

        for _ in 0..3 {
            render_at(&mut saver, &mut buf, 1_300);
        }
        assert_eq!(saver.state(), FadeState::FadingIn);
        assert_eq!(saver.alpha(), 0.0);
        assert!(saver.current_quote().is_some());
    }

    #[test]
    fn fade_out_lasts_fade_steps_renders_from_the_deadline() {
        let mut saver = saver(fallback(3), 60);
        let mut buf = Buffer::empty(Rect::new(0, 0, 60, 10));
        saver.start();
        for _ in 0..60 {
            render_at(&mut saver, &mut buf, 0);
        }
        assert_eq!(saver.state(), FadeState::Displaying);

        let mut alphas = Vec::new();
        while saver.state() != FadeState::FadingIn {
            render_at(&mut saver, &mut buf, 1_000);
            alphas.push(saver.alpha());
            assert!(alphas.len() <= 60, "fade-out did not finish");
        }
        assert_eq!(alphas.len(), 60);
        assert_eq!(alphas[0], 1.0 - 1.0 / 60.0);
        assert_eq!(alphas[59], 0.0);
    }

    #[test]
    fn wraps_wide_glyphs_by_display_width() {
        assert_eq!(wrap_words("日本 語", 5), vec!["日本", "語"]);
        assert_eq!(wrap_words("名言です", 4), vec!["名言", "です"]);
        for line in wrap_words("千里の道も 一歩から始まる", 6) {
            assert!(columns(&line) <= 6, "{line:?} is too wide");
        }
    }

    #[test]
    fn quote_without_text_draws_nothing() {
        let mut saver = saver(parse_quotes("|Anon"), 1);
        let mut buf = Buffer::empty(Rect::new(0, 0, 20, 5));
        saver.start();
        render_at(&mut saver, &mut buf, 0);
        assert_eq!(saver.state(), FadeState::Displaying);
        assert!(buf.content.iter().all(|c| c.symbol() == " "));
    }

    #[test]
    fn draws_centered_quote_with_author_below() {
        let quote = Quote::new("Hello there", "Someone");
        let mut saver = saver(vec![quote], 1);
        let mut buf = Buffer::empty(Rect::new(0, 0, 30, 9));
        saver.start();
        render_at(&mut saver, &mut buf, 0);
        assert_eq!(saver.alpha(), 1.0);

        // "Hello there" sits on the middle row, the author two rows below.
        let row = |y: u16| -> String { (0..30).map(|x| buf[(x, y)].symbol()).collect() };
        assert_eq!(row(4).trim(), "Hello there");
        assert_eq!(row(5).trim(), "");
        assert_eq!(row(6).trim(), "— Someone");

        let first = row(4).find('H').unwrap() as u16;
        assert_eq!(buf[(first, 4)].fg, Color::Rgb(255, 255, 255));
        assert!(buf[(first, 4)].modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn stays_idle_without_quotes() {
        let mut saver = saver(Vec::new(), 4);
        let mut buf = Buffer::empty(Rect::new(0, 0, 10, 3));
        saver.start();
        render_at(&mut saver, &mut buf, 0);
        assert_eq!(saver.state(), FadeState::Idle);
        assert!(buf.content.iter().all(|c| c.symbol() == " "));
    }

    #[test]
    fn cleanup_resets_the_cycle() {
        let mut saver = saver(fallback(3), 2);
        let mut buf = Buffer::empty(Rect::new(0, 0, 40, 6));
        saver.start();
        render_at(&mut saver, &mut buf, 0);
        saver.cleanup();
        assert_eq!(saver.state(), FadeState::Idle);
        assert_eq!(saver.alpha(), 0.0);
    }
}
