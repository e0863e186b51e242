//! Start/stop lifecycle and frame pacing shared by all screensavers.

use std::time::{Duration, Instant};

use ratatui::{buffer::Buffer, layout::Rect};

use crate::canvas::Canvas;
use crate::screensaver::Screensaver;

/// Default time between frames (roughly 15 FPS).
pub const DEFAULT_FRAME_INTERVAL: Duration = Duration::from_millis(67);

/// Drives a single screensaver instance bound to a region of the screen.
///
/// The animator owns a retained surface the size of its region. Terminal
/// frames start out empty, so between due frames the last rendered surface
/// is copied back onto the screen unchanged.
#[derive(Debug)]
pub struct Animator {
    saver: Box<dyn Screensaver>,
    frame_interval: Duration,
    running: bool,
    started_at: Option<Instant>,
    last_frame_at: Option<Instant>,
    frames: u64,
    surface: Buffer,
}

impl Animator {
    pub fn new(saver: Box<dyn Screensaver>, frame_interval: Duration) -> Self {
        Self {
            saver,
            frame_interval,
            running: false,
            started_at: None,
            last_frame_at: None,
            frames: 0,
            surface: Buffer::empty(Rect::ZERO),
        }
    }

    /// Name of the screensaver being driven.
    pub fn name(&self) -> &'static str {
        self.saver.name()
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn frame_interval(&self) -> Duration {
        self.frame_interval
    }

    /// Number of frames rendered since the last start.
    pub fn frames_rendered(&self) -> u64 {
        self.frames
    }

    /// Start the animation. Does nothing if it is already running.
    pub fn start(&mut self, now: Instant) {
        if self.running {
            return;
        }
        self.running = true;
        self.started_at = Some(now);
        self.last_frame_at = None;
        self.frames = 0;
        self.saver.start();
        tracing::debug!(saver = self.name(), "animation started");
    }

    /// Stop the animation; no further frames are rendered until restarted.
    pub fn stop(&mut self) {
        self.running = false;
        self.last_frame_at = None;
    }

    /// Stop, let the screensaver release its state, and wipe the surface.
    pub fn cleanup(&mut self) {
        self.stop();
        self.saver.cleanup();
        self.surface.reset();
        tracing::debug!(saver = self.name(), frames = self.frames, "animation cleaned up");
    }

    /// Whether a new frame should be rendered at `now`.
    pub fn frame_due(&self, now: Instant) -> bool {
        self.running
            && self
                .last_frame_at
                .is_none_or(|last| now.saturating_duration_since(last) >= self.frame_interval)
    }

    /// Time left until the next frame is due, or `None` while stopped.
    pub fn until_next_frame(&self, now: Instant) -> Option<Duration> {
        if !self.running {
            return None;
        }
        Some(match self.last_frame_at {
            None => Duration::ZERO,
            Some(last) => self
                .frame_interval
                .saturating_sub(now.saturating_duration_since(last)),
        })
    }

    /// Draw into `area` of `buf`, rendering a new frame if one is due.
    ///
    /// While stopped nothing is drawn, which leaves the region blank.
    pub fn draw(&mut self, buf: &mut Buffer, area: Rect, now: Instant) {
        if !self.running {
            return;
        }

        let local = Rect::new(0, 0, area.width, area.height);
        let resized = self.surface.area != local;
        if resized {
            self.surface.resize(local);
            self.surface.reset();
        }

        if resized || self.frame_due(now) {
            self.render_frame(now);
        }
        self.blit(buf, area);
    }

    /// Render a due frame into the retained surface without drawing it, so an
    /// animator that is off-screen keeps pace. Nothing happens before the
    /// first [`Animator::draw`] has sized the surface.
    pub fn advance(&mut self, now: Instant) {
        if !self.surface.area.is_empty() && self.frame_due(now) {
            self.render_frame(now);
        }
    }

    fn render_frame(&mut self, now: Instant) {
        let elapsed = self
            .started_at
            .map(|start| now.saturating_duration_since(start))
            .unwrap_or_default();
        let mut canvas = Canvas::new(&mut self.surface, elapsed, self.frames);
        self.saver.render(&mut canvas);
        self.frames += 1;
        self.last_frame_at = Some(now);
    }

    fn blit(&self, buf: &mut Buffer, area: Rect) {
        for y in 0..area.height {
            for x in 0..area.width {
                let Some(src) = self.surface.cell((x, y)) else {
                    continue;
                };
                if let Some(dst) = buf.cell_mut((area.x + x, area.y + y)) {
                    *dst = src.clone();
                }
            }
        }
    }
}
