use anyhow::{anyhow, Context, Result};
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Filter directives, e.g. `TSLAUNCH_LOG=debug` or `TSLAUNCH_LOG=tslaunch=trace`.
pub const LOG_ENV: &str = "TSLAUNCH_LOG";

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"))
}

pub fn default_log_path() -> Option<PathBuf> {
    home::home_dir().map(|mut path| {
        path.push(".cache");
        path.push("tslaunch");
        path.push("tslaunch.log");
        path
    })
}

/// Appends to `path`. The panel owns the terminal, so nothing goes to stderr.
pub fn init_file(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow!("Failed to install logger: {e}"))
}

pub fn init_stderr() -> Result<()> {
    // stdout carries the printed rows
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow!("Failed to install logger: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_log_path_lives_in_cache() {
        if let Some(path) = default_log_path() {
            assert!(path.ends_with(".cache/tslaunch/tslaunch.log"));
        }
    }

    #[test]
    fn test_init_file_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("tslaunch.log");

        // The global subscriber may already be taken by another test.
        let _ = init_file(&path);

        assert!(path.exists());
    }
}
