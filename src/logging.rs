//! Tracing subscriber setup.
//!
//! The interactive demo owns the terminal, so it logs to a file through a
//! non-blocking appender. Headless subcommands log to stderr. `RUST_LOG`
//! overrides the configured level in both cases.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Where log records go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    /// Standard error, no ANSI colors.
    Stderr,
    /// Append to a file; parent directories are created.
    File(PathBuf),
}

/// Keeps the background log writer alive. Dropping it flushes pending
/// records, so hold it until the program exits.
#[derive(Debug)]
#[must_use = "dropping the guard stops file logging"]
pub struct LogGuard {
    _worker: Option<WorkerGuard>,
}

/// Default log file: `<cache dir>/raster-lab/raster-lab.log`, or the
/// working directory if no cache dir is known.
#[must_use]
pub fn default_log_file() -> PathBuf {
    dirs::cache_dir()
        .map(|dir| dir.join("raster-lab"))
        .unwrap_or_default()
        .join("raster-lab.log")
}

fn filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Install the global subscriber.
///
/// A second call is a no-op apart from creating the log file.
///
/// # Errors
///
/// Returns an error if the log directory or file cannot be created.
pub fn init(level: &str, target: &LogTarget) -> io::Result<LogGuard> {
    let filter = filter(level);
    match target {
        LogTarget::Stderr => {
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(io::stderr)
                .with_ansi(false)
                .try_init();
            Ok(LogGuard { _worker: None })
        }
        LogTarget::File(path) => {
            let (dir, name) = split_path(path)?;
            fs::create_dir_all(&dir)?;
            let appender = tracing_appender::rolling::never(dir, name);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(writer)
                .with_ansi(false)
                .try_init();
            Ok(LogGuard { _worker: Some(guard) })
        }
    }
}

fn split_path(path: &Path) -> io::Result<(PathBuf, PathBuf)> {
    let name = path.file_name().ok_or_else(|| {
        io::Error::new(io::ErrorKind::InvalidInput, format!("not a file path: {}", path.display()))
    })?;
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    Ok((dir, PathBuf::from(name)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_log_file_name() {
        assert!(default_log_file().ends_with("raster-lab.log"));
    }

    #[test]
    fn test_split_path() {
        let (dir, name) = split_path(Path::new("/tmp/logs/app.log")).unwrap();
        assert_eq!(dir, PathBuf::from("/tmp/logs"));
        assert_eq!(name, PathBuf::from("app.log"));

        let (dir, _) = split_path(Path::new("app.log")).unwrap();
        assert_eq!(dir, PathBuf::from("."));

        assert!(split_path(Path::new("/")).is_err());
    }
}
