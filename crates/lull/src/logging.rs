use std::fs::{self, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use color_eyre::eyre::{WrapErr, eyre};
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter.
const ENV_LOG: &str = "LULL_LOG";

/// Send tracing output to `path`. The terminal belongs to the UI, so nothing
/// is written to stdout or stderr.
pub fn init(path: &Path) -> color_eyre::Result<()> {
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir)
            .wrap_err_with(|| format!("failed to create log directory {}", dir.display()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .wrap_err_with(|| format!("failed to open log file {}", path.display()))?;

    let filter = EnvFilter::try_from_env(ENV_LOG).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|err| eyre!("failed to initialise logging: {err}"))
}
