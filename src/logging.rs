// Tracing subscriber setup.
// The TUI owns the terminal, so it logs to a file; CLI commands log to stderr.

use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;

use directories::ProjectDirs;
use tracing_subscriber::EnvFilter;

use crate::error::Result;

/// Filter from RUST_LOG, falling back to `default`.
fn env_filter(default: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

/// Log human-readable lines to stderr.
pub fn init_stderr(verbose: bool) {
    let default = if verbose { "gitgod=debug" } else { "info" };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(default))
        .with_writer(std::io::stderr)
        .try_init();
}

/// Log file location (`~/.cache/gitgod/gitgod.log` on Linux).
pub fn log_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "gitgod").map(|dirs| dirs.cache_dir().join("gitgod.log"))
}

/// Log to the cache directory file. Returns the path written to, if any.
pub fn init_file(verbose: bool) -> Result<Option<PathBuf>> {
    let Some(path) = log_path() else {
        return Ok(None);
    };

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(&path)?;

    let default = if verbose { "gitgod=debug" } else { "info" };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(default))
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init();

    Ok(Some(path))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_path() {
        if let Some(path) = log_path() {
            assert!(path.ends_with("gitgod.log"));
        }
    }
}
