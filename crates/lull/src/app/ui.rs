//! Drawing the selector, preview pane and fullscreen view.

use std::time::Instant;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::{Color, Style, Stylize},
    text::Line,
    widgets::{Block, Clear, List, ListItem, Paragraph},
};

use super::App;

const EXIT_HINT: &str = "Press ESC or click to exit";

/// Width of the screensaver list.
const SELECTOR_WIDTH: u16 = 26;

impl App {
    /// Renders the user interface.
    pub(super) fn render(&mut self, frame: &mut Frame, now: Instant) {
        if self.fullscreen.is_some() {
            if let Some(preview) = self.preview.as_mut() {
                preview.advance(now);
            }
            self.render_fullscreen(frame, now);
            return;
        }

        let [header, body, help] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(1),
        ])
        .areas(frame.area());
        let [selector, preview] =
            Layout::horizontal([Constraint::Length(SELECTOR_WIDTH), Constraint::Fill(1)])
                .areas(body);

        self.render_header(frame, header);
        self.render_selector(frame, selector);
        self.render_preview(frame, preview, now);
        self.render_help(frame, help);
    }

    fn render_header(&self, frame: &mut Frame, area: Rect) {
        let selected = self
            .selected()
            .and_then(|i| self.registry.entries().get(i))
            .map_or("none", |entry| entry.name);
        let header = Line::from(vec![
            " Select Screensaver: ".dark_gray(),
            selected.bold().cyan(),
            "   ".into(),
            "[enter]".bold().cyan(),
            " Start Fullscreen".dark_gray(),
        ]);
        frame.render_widget(header, area);
    }

    fn render_selector(&mut self, frame: &mut Frame, area: Rect) {
        let items: Vec<ListItem> = self
            .registry
            .entries()
            .iter()
            .map(|entry| ListItem::new(entry.name))
            .collect();
        let list = List::new(items)
            .block(Block::bordered().title(" Screensavers "))
            .highlight_style(Style::new().black().on_cyan().bold())
            .highlight_symbol("› ");
        frame.render_stateful_widget(list, area, &mut self.selector);
    }

    fn render_preview(&mut self, frame: &mut Frame, area: Rect, now: Instant) {
        let description = self
            .selected()
            .and_then(|i| self.registry.entries().get(i))
            .map_or("", |entry| entry.description);
        let block = Block::bordered()
            .title(" Preview ")
            .title_bottom(Line::from(format!(" {description} ")).centered())
            .border_style(Style::new().fg(Color::Gray));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        match self.preview.as_mut() {
            Some(preview) => preview.draw(frame.buffer_mut(), inner, now),
            None => {
                let empty = Paragraph::new("No screensavers registered")
                    .alignment(Alignment::Center)
                    .dark_gray();
                let [middle] = Layout::vertical([Constraint::Length(1)])
                    .flex(Flex::Center)
                    .areas(inner);
                frame.render_widget(empty, middle);
            }
        }
    }

    fn render_help(&self, frame: &mut Frame, area: Rect) {
        let help = Line::from(vec![
            "↑/↓".bold().cyan(),
            " select  ".dark_gray(),
            "enter".bold().cyan(),
            " fullscreen  ".dark_gray(),
            "s".bold().cyan(),
            format!(" speed ({})  ", self.options.speed.label()).dark_gray(),
            "q".bold().cyan(),
            " quit".dark_gray(),
        ])
        .centered();
        frame.render_widget(help, area);
    }

    fn render_fullscreen(&mut self, frame: &mut Frame, now: Instant) {
        let area = frame.area();
        let Some(fullscreen) = self.fullscreen.as_mut() else {
            return;
        };
        fullscreen.animator.draw(frame.buffer_mut(), area, now);

        if now < fullscreen.hint_until {
            let hint = hint_area(area);
            frame.render_widget(Clear, hint);
            frame.render_widget(
                Paragraph::new(EXIT_HINT)
                    .alignment(Alignment::Center)
                    .style(Style::new().fg(Color::White).bg(Color::Black)),
                hint,
            );
        }
    }
}

/// One row near the bottom of `area`, centered horizontally.
fn hint_area(area: Rect) -> Rect {
    let width = (EXIT_HINT.len() as u16 + 2).min(area.width);
    let row = (u32::from(area.height) * 95 / 100) as u16;
    let y = area.y + row.min(area.height.saturating_sub(1));
    let x = area.x + (area.width - width) / 2;
    Rect::new(x, y, width, 1.min(area.height))
}
