//! File-backed tracing setup.
//!
//! The TUI owns stderr, so log lines can never go to the terminal. When the
//! config names a `log_file`, a `tracing-subscriber` fmt layer appends to it;
//! otherwise no subscriber is installed and every `tracing` macro is a no-op.
//! Verbosity comes from the `CLOCKQUIZ_LOG` directive (default `info`).

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

/// Environment variable holding an `EnvFilter` directive, e.g. `clockquiz=debug`.
pub const LOG_ENV: &str = "CLOCKQUIZ_LOG";

/// Installs the global subscriber writing to `path`, creating parent dirs.
///
/// Returns `Ok(false)` when `path` is `None` (logging disabled).
///
/// # Errors
///
/// Returns `Err` if the file cannot be opened or a global subscriber is
/// already installed.
pub fn init_logging(path: Option<&Path>) -> std::io::Result<bool> {
    let Some(path) = path else {
        return Ok(false);
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(std::io::Error::other)?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_path_means_logging_disabled() {
        assert!(!init_logging(None).unwrap());
    }
}
