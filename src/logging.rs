//! Tracing setup
//!
//! The TUI owns stdout, so diagnostics go to a log file.

use crate::TerminalError;
use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

/// `<temp dir>/muthur.log`
pub fn default_log_path() -> PathBuf {
    std::env::temp_dir().join("muthur.log")
}

/// Install the global subscriber writing to `path`
pub fn init(path: &Path, level: &str) -> Result<(), TerminalError> {
    let file = File::create(path).map_err(|source| TerminalError::LogFile {
        path: path.to_path_buf(),
        source,
    })?;
    build_subscriber(file, level).try_init()?;
    Ok(())
}

/// File logger filtered by RUST_LOG, falling back to `level`
pub fn build_subscriber(log_file: File, level: &str) -> impl tracing::Subscriber + Send + Sync {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let fmt_layer = fmt::layer()
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .with_target(false);

    tracing_subscriber::registry().with(env_filter).with(fmt_layer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    #[test]
    fn events_reach_the_log_file() {
        let log_file = NamedTempFile::new().unwrap();
        let subscriber = build_subscriber(log_file.reopen().unwrap(), "debug");

        tracing::subscriber::with_default(subscriber, || {
            tracing::info!(user = "RIPLEY", "login accepted");
            tracing::trace!("below the filter");
        });

        let contents = std::fs::read_to_string(log_file.path()).unwrap();
        assert!(contents.contains("login accepted"));
        assert!(contents.contains("RIPLEY"));
        assert!(!contents.contains("below the filter"));
    }
}
