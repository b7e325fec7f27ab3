//! Tracing setup. Logs go to a file so they never draw over the TUI.

use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Environment variable holding the log filter, e.g. `RPNTTY_LOG=debug`
pub const LOG_ENV: &str = "RPNTTY_LOG";

const LOG_FILE: &str = "rpntty.log";

/// Install the global subscriber. Returns the log file path when one was opened.
pub fn init_tracing(dir: Option<&Path>) -> Option<PathBuf> {
    let env_filter = EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_new("info"))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let opened = dir.and_then(|dir| {
        fs::create_dir_all(dir).ok()?;
        let path = dir.join(LOG_FILE);
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .ok()?;
        Some((path, file))
    });

    match opened {
        Some((path, file)) => {
            tracing_subscriber::registry()
                .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
                .with(env_filter)
                .init();
            tracing::info!(path = %path.display(), "logging initialized");
            Some(path)
        }
        None => {
            // No file: prefer no logs over corrupting the screen
            tracing_subscriber::registry().with(env_filter).init();
            None
        }
    }
}
