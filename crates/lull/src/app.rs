//! Selector, preview and fullscreen controller.

mod ui;

use std::time::{Duration, Instant};

use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use lull_core::{Animator, Registry, SaverOptions};
use ratatui::{DefaultTerminal, widgets::ListState};

/// The fullscreen screensaver and its exit hint.
#[derive(Debug)]
struct Fullscreen {
    animator: Animator,
    /// The exit hint is shown until this instant.
    hint_until: Instant,
}

/// The main application which holds the state and logic of the application.
#[derive(Debug)]
pub struct App {
    /// Is the application running?
    running: bool,
    registry: Registry,
    options: SaverOptions,
    frame_interval: Duration,
    hint_duration: Duration,
    /// Selected row of the screensaver list.
    selector: ListState,
    /// Screensaver shown in the preview pane.
    preview: Option<Animator>,
    fullscreen: Option<Fullscreen>,
}

impl App {
    /// Construct a new instance of [`App`]. Nothing is selected until
    /// [`App::select_initial`] is called.
    pub fn new(
        registry: Registry,
        options: SaverOptions,
        frame_interval: Duration,
        hint_duration: Duration,
    ) -> Self {
        Self {
            running: false,
            registry,
            options,
            frame_interval,
            hint_duration,
            selector: ListState::default(),
            preview: None,
            fullscreen: None,
        }
    }

    /// Run the application's main loop.
    pub fn run(mut self, mut terminal: DefaultTerminal) -> color_eyre::Result<()> {
        self.running = true;
        while self.running {
            let now = Instant::now();
            terminal.draw(|frame| self.render(frame, now))?;
            self.handle_crossterm_events()?;
        }
        if let Some(mut preview) = self.preview.take() {
            preview.cleanup();
        }
        self.exit_fullscreen();
        Ok(())
    }

    /// Select `name` if given and registered, the first screensaver otherwise.
    pub fn select_initial(&mut self, name: Option<&str>, now: Instant) {
        let index = name
            .and_then(|name| self.registry.position(name))
            .unwrap_or(0);
        if index < self.registry.len() {
            self.select(index, now);
        }
    }

    pub fn selected(&self) -> Option<usize> {
        self.selector.selected()
    }

    pub fn is_fullscreen(&self) -> bool {
        self.fullscreen.is_some()
    }

    /// Name of the screensaver running in the preview pane.
    pub fn preview_name(&self) -> Option<&'static str> {
        self.preview.as_ref().map(Animator::name)
    }

    /// Swap the preview to the screensaver at `index`.
    fn select(&mut self, index: usize, now: Instant) {
        let Some(entry) = self.registry.entries().get(index).copied() else {
            return;
        };
        if self.selector.selected() == Some(index) && self.preview.is_some() {
            return;
        }
        if let Some(mut previous) = self.preview.take() {
            previous.cleanup();
        }
        self.selector.select(Some(index));

        let mut animator = Animator::new(entry.create(&self.options), self.frame_interval);
        animator.start(now);
        self.preview = Some(animator);
        tracing::info!(saver = entry.name, "previewing screensaver");
    }

    fn select_next(&mut self, now: Instant) {
        let len = self.registry.len();
        if len == 0 {
            return;
        }
        let next = self.selected().map_or(0, |i| (i + 1) % len);
        self.select(next, now);
    }

    fn select_previous(&mut self, now: Instant) {
        let len = self.registry.len();
        if len == 0 {
            return;
        }
        let previous = self.selected().map_or(0, |i| (i + len - 1) % len);
        self.select(previous, now);
    }

    /// Launch a fresh instance of the selected screensaver fullscreen.
    pub fn start_fullscreen(&mut self, now: Instant) {
        if self.fullscreen.is_some() || self.preview.is_none() {
            return;
        }
        let Some(entry) = self
            .selected()
            .and_then(|i| self.registry.entries().get(i))
        else {
            return;
        };

        let mut animator = Animator::new(entry.create(&self.options), self.frame_interval);
        animator.start(now);
        tracing::info!(saver = entry.name, "entering fullscreen");
        self.fullscreen = Some(Fullscreen {
            animator,
            hint_until: now + self.hint_duration,
        });
    }

    fn exit_fullscreen(&mut self) {
        if let Some(mut fullscreen) = self.fullscreen.take() {
            fullscreen.animator.cleanup();
            tracing::info!(saver = fullscreen.animator.name(), "left fullscreen");
        }
    }

    /// Cycle the animation speed and restart the preview with it.
    fn cycle_speed(&mut self, now: Instant) {
        self.options.speed = self.options.speed.next();
        tracing::info!(speed = self.options.speed.label(), "animation speed changed");
        if let Some(index) = self.selected() {
            if let Some(mut preview) = self.preview.take() {
                preview.cleanup();
            }
            self.select(index, now);
        }
    }

    /// How long to wait for input before the next frame is due.
    fn poll_timeout(&self, now: Instant) -> Duration {
        let active = match &self.fullscreen {
            Some(fullscreen) => Some(&fullscreen.animator),
            None => self.preview.as_ref(),
        };
        let mut timeout = active
            .and_then(|animator| animator.until_next_frame(now))
            .unwrap_or(self.frame_interval)
            .min(self.frame_interval);
        if let Some(fullscreen) = &self.fullscreen {
            if let Some(left) = fullscreen.hint_until.checked_duration_since(now) {
                if !left.is_zero() {
                    timeout = timeout.min(left);
                }
            }
        }
        timeout
    }

    /// Reads the crossterm events and updates the state of [`App`].
    /// Polls with a timeout so frames keep coming without input.
    fn handle_crossterm_events(&mut self) -> color_eyre::Result<()> {
        if event::poll(self.poll_timeout(Instant::now()))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    self.on_key_event(key, Instant::now())
                }
                Event::Mouse(mouse) => self.on_mouse_event(mouse),
                _ => {}
            }
        }
        Ok(())
    }

    /// Handles the key events and updates the state of [`App`].
    fn on_key_event(&mut self, key: KeyEvent, now: Instant) {
        if let (KeyModifiers::CONTROL, KeyCode::Char('c') | KeyCode::Char('C')) =
            (key.modifiers, key.code)
        {
            self.quit();
            return;
        }

        if self.is_fullscreen() {
            if key.code == KeyCode::Esc {
                self.exit_fullscreen();
            }
            return;
        }

        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => self.quit(),
            KeyCode::Down | KeyCode::Char('j') => self.select_next(now),
            KeyCode::Up | KeyCode::Char('k') => self.select_previous(now),
            KeyCode::Home => self.select(0, now),
            KeyCode::End => self.select(self.registry.len().saturating_sub(1), now),
            KeyCode::Enter | KeyCode::Char('f') => self.start_fullscreen(now),
            KeyCode::Char('s') => self.cycle_speed(now),
            _ => {}
        }
    }

    /// A left click leaves fullscreen.
    fn on_mouse_event(&mut self, mouse: MouseEvent) {
        if self.is_fullscreen() && mouse.kind == MouseEventKind::Down(MouseButton::Left) {
            self.exit_fullscreen();
        }
    }

    /// Set running to false to quit the application.
    fn quit(&mut self) {
        self.running = false;
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyEventState;
    use lull_core::AnimationSpeed;
    use pretty_assertions::assert_eq;

    use super::*;

    fn app() -> App {
        let mut registry = Registry::new();
        lull_savers::install(&mut registry).unwrap();
        App::new(
            registry,
            SaverOptions::default().with_seed(3),
            Duration::from_millis(67),
            Duration::from_secs(3),
        )
    }

    fn press(app: &mut App, code: KeyCode, now: Instant) {
        app.on_key_event(KeyEvent::new(code, KeyModifiers::NONE), now);
    }

    fn click(app: &mut App) {
        app.on_mouse_event(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 3,
            row: 4,
            modifiers: KeyModifiers::NONE,
        });
    }

    #[test]
    fn first_screensaver_is_selected_by_default() {
        let mut app = app();
        app.select_initial(None, Instant::now());
        assert_eq!(app.selected(), Some(0));
        assert_eq!(app.preview_name(), Some("Color Wheel"));
    }

    #[test]
    fn initial_selection_by_name() {
        let mut app = app();
        app.select_initial(Some("snowfall"), Instant::now());
        assert_eq!(app.preview_name(), Some("Snowfall"));

        let mut fallback = self::app();
        fallback.select_initial(Some("nope"), Instant::now());
        assert_eq!(fallback.selected(), Some(0));
    }

    #[test]
    fn arrow_keys_swap_the_preview() {
        let mut app = app();
        let now = Instant::now();
        app.select_initial(None, now);

        press(&mut app, KeyCode::Down, now);
        assert_eq!(app.preview_name(), Some("Inspirational Quotes"));
        assert!(app.preview.as_ref().is_some_and(Animator::is_running));

        press(&mut app, KeyCode::Up, now);
        press(&mut app, KeyCode::Up, now);
        assert_eq!(app.preview_name(), Some("Snowfall"));

        press(&mut app, KeyCode::Home, now);
        assert_eq!(app.selected(), Some(0));
        press(&mut app, KeyCode::End, now);
        assert_eq!(app.selected(), Some(4));
    }

    #[test]
    fn fullscreen_runs_its_own_instance() {
        let mut app = app();
        let now = Instant::now();
        app.select_initial(Some("Starfield"), now);
        press(&mut app, KeyCode::Enter, now);
        assert!(app.is_fullscreen());

        // Navigation is ignored while fullscreen.
        press(&mut app, KeyCode::Down, now);
        assert_eq!(app.preview_name(), Some("Starfield"));

        let fullscreen = app.fullscreen.as_ref().unwrap();
        assert_eq!(fullscreen.animator.name(), "Starfield");
        assert!(fullscreen.animator.is_running());

        press(&mut app, KeyCode::Esc, now);
        assert!(!app.is_fullscreen());
        assert!(app.preview.as_ref().is_some_and(Animator::is_running));
    }

    #[test]
    fn click_leaves_fullscreen() {
        let mut app = app();
        let now = Instant::now();
        app.select_initial(None, now);
        click(&mut app);
        assert!(!app.is_fullscreen());

        press(&mut app, KeyCode::Char('f'), now);
        assert!(app.is_fullscreen());
        click(&mut app);
        assert!(!app.is_fullscreen());
    }

    #[test]
    fn quit_keys() {
        let mut app = app();
        let now = Instant::now();
        app.select_initial(None, now);
        app.running = true;

        press(&mut app, KeyCode::Enter, now);
        press(&mut app, KeyCode::Char('q'), now);
        assert!(app.running, "q must not quit from fullscreen");

        press(&mut app, KeyCode::Esc, now);
        press(&mut app, KeyCode::Char('q'), now);
        assert!(!app.running);

        app.running = true;
        app.on_key_event(
            KeyEvent {
                code: KeyCode::Char('c'),
                modifiers: KeyModifiers::CONTROL,
                kind: KeyEventKind::Press,
                state: KeyEventState::NONE,
            },
            now,
        );
        assert!(!app.running);
    }

    #[test]
    fn speed_change_restarts_the_preview() {
        let mut app = app();
        let now = Instant::now();
        app.select_initial(Some("Matrix Rain"), now);
        press(&mut app, KeyCode::Char('s'), now);
        assert_eq!(app.options.speed, AnimationSpeed::Fast);
        assert_eq!(app.preview_name(), Some("Matrix Rain"));
        assert_eq!(app.preview.as_ref().map(Animator::frames_rendered), Some(0));
    }

    #[test]
    fn empty_registry_has_nothing_to_show() {
        let mut app = App::new(
            Registry::new(),
            SaverOptions::default(),
            Duration::from_millis(67),
            Duration::from_secs(3),
        );
        let now = Instant::now();
        app.select_initial(None, now);
        press(&mut app, KeyCode::Down, now);
        press(&mut app, KeyCode::Enter, now);
        assert_eq!(app.selected(), None);
        assert!(!app.is_fullscreen());
        assert_eq!(app.poll_timeout(now), Duration::from_millis(67));
    }

    #[test]
    fn poll_timeout_tracks_the_next_frame() {
        let mut app = app();
        let now = Instant::now();
        app.select_initial(None, now);
        assert_eq!(app.poll_timeout(now), Duration::ZERO);

        let mut buf = ratatui::buffer::Buffer::empty(ratatui::layout::Rect::new(0, 0, 10, 4));
        let area = buf.area;
        app.preview.as_mut().unwrap().draw(&mut buf, area, now);
        assert_eq!(
            app.poll_timeout(now + Duration::from_millis(17)),
            Duration::from_millis(50)
        );
    }
}
