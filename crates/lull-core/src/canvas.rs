//! Drawing surface handed to screensavers.

use std::time::Duration;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::Widget,
};

/// A rectangular cell surface a screensaver draws on.
///
/// Coordinates are local: `(0, 0)` is the top-left cell of the canvas no
/// matter where the canvas ends up on screen. Writes outside the canvas are
/// dropped.
#[derive(Debug)]
pub struct Canvas<'a> {
    buf: &'a mut Buffer,
    elapsed: Duration,
    frame: u64,
}

impl<'a> Canvas<'a> {
    /// Wrap `buf`, which must have its area anchored at the origin.
    pub fn new(buf: &'a mut Buffer, elapsed: Duration, frame: u64) -> Self {
        debug_assert!(buf.area.x == 0 && buf.area.y == 0);
        Self { buf, elapsed, frame }
    }

    pub fn width(&self) -> u16 {
        self.buf.area.width
    }

    pub fn height(&self) -> u16 {
        self.buf.area.height
    }

    pub fn area(&self) -> Rect {
        self.buf.area
    }

    /// Time since the screensaver was started.
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Index of the frame being rendered, starting at 0.
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Paint every cell with a solid background color.
    pub fn fill(&mut self, color: Color) {
        let style = Style::new().bg(color).fg(color);
        for cell in self.buf.content.iter_mut() {
            cell.reset();
            cell.set_style(style);
        }
    }

    /// Blank the canvas to black.
    pub fn clear(&mut self) {
        self.fill(Color::Black);
    }

    /// Put a single character at `(x, y)`.
    pub fn set_char(&mut self, x: u16, y: u16, ch: char, style: Style) {
        if let Some(cell) = self.buf.cell_mut((x, y)) {
            cell.set_char(ch);
            cell.set_style(style);
        }
    }

    /// Write `text` starting at `(x, y)`, clipped at the right edge.
    pub fn set_str(&mut self, x: u16, y: u16, text: &str, style: Style) {
        if x >= self.width() || y >= self.height() {
            return;
        }
        let max_width = usize::from(self.width() - x);
        self.buf.set_stringn(x, y, text, max_width, style);
    }

    /// Render a widget into `rect`, clipped to the canvas.
    pub fn render_widget<W: Widget>(&mut self, widget: W, rect: Rect) {
        let rect = rect.intersection(self.buf.area);
        if rect.is_empty() {
            return;
        }
        widget.render(rect, self.buf);
    }
}
