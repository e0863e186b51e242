//! Built-in screensavers for lull.
//!
//! Every screensaver module exports an `ENTRY` describing how to build it.
//! [`BUILTIN`] lists them in menu order and [`install`] registers them.

mod chars;
mod color;
pub mod savers;

use lull_core::{Registry, RegistryError, SaverEntry, registry};

pub use color::{grey, hsv_to_rgb};
pub use savers::{
    color_wheel::ColorWheel,
    matrix::MatrixRain,
    quotes::{FadeState, InspirationalQuotes, Quote},
    snowfall::Snowfall,
    starfield::Starfield,
};

/// Built-in screensavers in the order they appear in the selector.
pub const BUILTIN: &[SaverEntry] = &[
    savers::color_wheel::ENTRY,
    savers::quotes::ENTRY,
    savers::matrix::ENTRY,
    savers::starfield::ENTRY,
    savers::snowfall::ENTRY,
];

/// Register every built-in screensaver with `registry`.
pub fn install(registry: &mut Registry) -> Result<(), RegistryError> {
    BUILTIN
        .iter()
        .try_for_each(|entry| registry.register(*entry))
}

/// Register the built-in screensavers with the process-wide registry.
///
/// Screensavers that are already registered are left alone, so calling this
/// more than once is harmless.
pub fn install_global() -> Result<(), RegistryError> {
    let mut global = registry::global_mut();
    for entry in BUILTIN {
        if global.find(entry.name).is_none() {
            global.register(*entry)?;
        }
    }
    Ok(())
}
