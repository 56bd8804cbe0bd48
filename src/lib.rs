//! MU-TH-UR 6000
//!
//! The shipboard computer of the USCSS NOSTROMO, as a terminal text
//! adventure. Log in with a crew identifier and query the mainframe about a
//! ship that has a hostile organism loose aboard.
//!
//! # Architecture
//!
//! - `data` - Static tables: ship systems, crew manifest, mission, logs, alerts
//! - `mainframe` - Command dispatch, session state, login, boot script
//! - `tui` - Terminal user interface with ratatui
//! - `config` - TOML configuration
//! - `logging` - File-based tracing setup

pub mod config;
pub mod data;
pub mod logging;
pub mod mainframe;
pub mod tui;

pub use config::Config;
pub use mainframe::{CommandResult, Mainframe, StatusColor, TerminalState};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Result type for the terminal
pub type Result<T> = anyhow::Result<T>;

/// Custom error types
#[derive(thiserror::Error, Debug)]
pub enum TerminalError {
    #[error("Failed to read config {}: {source}", path.display())]
    ConfigRead {
        path: std::path::PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid config {}: {source}", path.display())]
    ConfigParse {
        path: std::path::PathBuf,
        source: toml::de::Error,
    },

    #[error("Failed to serialize config: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),

    #[error("Failed to open log file {}: {source}", path.display())]
    LogFile {
        path: std::path::PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to install log subscriber: {0}")]
    Subscriber(#[from] tracing_subscriber::util::TryInitError),
}
