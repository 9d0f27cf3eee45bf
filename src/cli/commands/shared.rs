//! Shared components for CLI commands
//!
//! Logging setup, input and output helpers, and the statistics every
//! command reports back to `main`.

use crate::{Error, Result};
use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;
use tracing::debug;

/// Statistics reported by a finished command
#[derive(Debug, Clone, Default)]
pub struct CommandStats {
    /// Number of input lines processed
    pub lines_processed: usize,
    /// Number of photos that received a new name
    pub photos_renamed: usize,
    /// Number of lines rendered as errors
    pub errors: usize,
    /// Total processing time
    pub processing_time: std::time::Duration,
}

/// Set up structured logging on stderr
///
/// `RUST_LOG` takes precedence over `log_level` when set.
pub fn setup_logging(log_level: &str) {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("album_renamer={}", log_level)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_writer(io::stderr)
                .compact(),
        )
        .init();

    debug!("Logging initialized at level: {}", log_level);
}

/// Read the whole listing from `path`, or from stdin when `None`
pub fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => {
            debug!("Reading listing from {}", path.display());
            fs::read_to_string(path).map_err(|e| {
                Error::io(format!("Failed to read input file {}", path.display()), e)
            })
        }
        None => {
            debug!("Reading listing from standard input");
            let mut input = String::new();
            io::stdin()
                .read_to_string(&mut input)
                .map_err(|e| Error::io("Failed to read standard input", e))?;
            Ok(input)
        }
    }
}

/// Write `content` to `path`, or to stdout when `None`
pub fn write_output(path: Option<&Path>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            fs::write(path, content).map_err(|e| {
                Error::io(format!("Failed to write output file {}", path.display()), e)
            })?;
            debug!("Wrote {} bytes to {}", content.len(), path.display());
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout
                .write_all(content.as_bytes())
                .and_then(|()| stdout.flush())
                .map_err(|e| Error::io("Failed to write standard output", e))?;
        }
    }
    Ok(())
}

/// Join lines with a trailing newline, or nothing for no lines
pub fn join_lines(lines: &[String]) -> String {
    let mut joined = lines.join("\n");
    if !joined.is_empty() {
        joined.push('\n');
    }
    joined
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_join_lines() {
        assert_eq!(join_lines(&[]), "");
        assert_eq!(join_lines(&["Rio1.jpg".to_string()]), "Rio1.jpg\n");
        assert_eq!(
            join_lines(&["a".to_string(), "b".to_string()]),
            "a\nb\n"
        );
    }

    #[test]
    fn test_read_write_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("names.txt");

        write_output(Some(&path), "Rio1.jpg\n").unwrap();
        assert_eq!(read_input(Some(&path)).unwrap(), "Rio1.jpg\n");
    }

    #[test]
    fn test_read_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing.txt");

        let error = read_input(Some(&path)).unwrap_err();
        assert!(matches!(error, Error::Io { .. }));
        assert!(error.to_string().contains("Failed to read input file"));
    }
}
