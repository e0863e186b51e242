mod app;
mod cli;
mod logging;

use std::io::{Write, stdout};
use std::time::Instant;

use clap::Parser;
use color_eyre::eyre::{WrapErr, bail};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
};
use lull_config::{Config, ProjectPaths};
use lull_core::registry;

use crate::app::App;
use crate::cli::Args;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    let mut paths = ProjectPaths::discover()?;
    if let Some(file) = &args.config {
        paths = paths.with_config_file(file);
    }
    let log_file = args.log_file.clone().unwrap_or_else(|| paths.log_file());
    logging::init(&log_file)?;

    lull_savers::install_global().wrap_err("failed to register screensavers")?;
    let registry = registry::global_snapshot();

    if args.list {
        for entry in registry.entries() {
            println!("{:<22} {}", entry.name, entry.description);
        }
        return Ok(());
    }

    let mut config = Config::load(paths.config_file()).wrap_err("failed to load configuration")?;
    args.apply(&mut config);
    config.validate()?;
    tracing::debug!(
        config = %paths.config_file().display(),
        log = %log_file.display(),
        "resolved lull paths"
    );

    if let Some(name) = config.default_saver.as_deref() {
        if registry.find(name).is_none() {
            bail!("unknown screensaver {name:?}, run `lull --list` to see the available ones");
        }
    }

    let options = config.saver_options(paths.config_dir());
    let mut app = App::new(
        registry,
        options,
        config.frame_interval(),
        config.hint_duration(),
    );
    let now = Instant::now();
    app.select_initial(config.default_saver.as_deref(), now);
    if args.fullscreen {
        app.start_fullscreen(now);
    }

    let terminal = ratatui::init();
    let result = execute!(stdout(), EnableMouseCapture)
        .wrap_err("failed to enable mouse capture")
        .and_then(|()| app.run(terminal));
    release_mouse(&mut stdout());
    ratatui::restore();
    result
}

/// Turn mouse reporting back off. The terminal is being restored either way,
/// so a failure is only logged.
fn release_mouse(out: &mut impl Write) {
    if let Err(err) = execute!(out, DisableMouseCapture) {
        tracing::warn!(error = %err, "failed to disable mouse capture");
    }
}
