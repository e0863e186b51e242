//! The render contract every screensaver implements.

use std::fmt;

use crate::canvas::Canvas;

/// A pluggable rendering behavior drawn on a [`Canvas`].
///
/// Implementations only describe what one frame looks like. Frame pacing and
/// the start/stop lifecycle live in [`Animator`](crate::Animator), so a
/// screensaver never has to schedule itself.
pub trait Screensaver: fmt::Debug {
    /// Display name shown in the selector.
    fn name(&self) -> &'static str;

    /// Called once when the animation starts.
    fn start(&mut self) {}

    /// Draw one frame.
    ///
    /// The canvas keeps whatever the previous frame left on it, so a
    /// screensaver that draws sparse content should clear it first.
    fn render(&mut self, canvas: &mut Canvas<'_>);

    /// Release per-run state before the screensaver is switched away from.
    fn cleanup(&mut self) {}
}
