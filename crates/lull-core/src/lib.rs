//! Core types for the lull screensaver.
//!
//! This crate holds the pieces every screensaver shares: the [`Screensaver`]
//! render contract, the [`Canvas`] it draws on, the [`Animator`] that paces
//! frames, and the [`Registry`] screensaver types are offered from.

mod animator;
mod canvas;
mod options;
pub mod registry;
mod screensaver;

pub use animator::{Animator, DEFAULT_FRAME_INTERVAL};
pub use canvas::Canvas;
pub use options::{AnimationSpeed, DEFAULT_FADE_STEPS, DEFAULT_HUE_STEP, QuoteTiming, SaverOptions};
pub use registry::{Registry, RegistryError, SaverEntry, SaverFactory};
pub use screensaver::Screensaver;
