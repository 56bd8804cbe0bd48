//! MU-TH-UR 6000
//!
//! Shipboard computer terminal of the USCSS NOSTROMO.

use anyhow::Context;
use clap::Parser;
use crossterm::{
    cursor, execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use muthur::config::ConfigSource;
use muthur::{logging, tui::App, Config};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io::stdout;
use std::path::PathBuf;

/// MU-TH-UR 6000 mainframe terminal
#[derive(Parser, Debug)]
#[command(name = "muthur")]
#[command(about = "Shipboard computer terminal of the USCSS NOSTROMO", long_about = None)]
#[command(version)]
struct Args {
    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Path to log file (default: system temp dir)
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Print the effective configuration as TOML and exit
    #[arg(long)]
    dump_config: bool,
}

fn main() -> muthur::Result<()> {
    let args = Args::parse();

    let (config, source) = match args.config.clone().or_else(Config::default_path) {
        Some(path) => Config::load_from(&path)?,
        None => (Config::default(), ConfigSource::Defaults),
    };

    if args.dump_config {
        print!("{}", config.to_toml()?);
        return Ok(());
    }

    let log_path = args
        .log_file
        .or_else(|| config.logging.file.clone())
        .unwrap_or_else(logging::default_log_path);
    logging::init(&log_path, &config.logging.level)?;
    tracing::info!(version = muthur::VERSION, "MU-TH-UR 6000 starting");
    match source {
        ConfigSource::File(path) => tracing::info!(path = %path.display(), "config loaded"),
        ConfigSource::Defaults => tracing::info!("no config file, using defaults"),
    }

    enable_raw_mode().context("failed to enable raw mode")?;
    let result = run(App::new(config));

    // Cleanup, even if setup or the loop failed
    let restored = restore_terminal();
    if let Err(ref err) = result {
        tracing::error!(error = %err, "terminal loop failed");
    }
    result?;
    restored?;

    tracing::info!("MU-TH-UR 6000 offline");
    println!("\n╔════════════════════════════════════════════════════════╗");
    println!("║  MU-TH-UR 6000 offline.                                ║");
    println!("║  Weyland-Yutani Corporation                            ║");
    println!("║                                                        ║");
    println!("║  Building Better Worlds.                               ║");
    println!("╚════════════════════════════════════════════════════════╝\n");

    Ok(())
}

fn run(mut app: App) -> std::io::Result<()> {
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    while app.running {
        terminal.draw(|frame| app.render(frame))?;

        if !app.handle_input()? {
            break;
        }
    }
    Ok(())
}

fn restore_terminal() -> std::io::Result<()> {
    disable_raw_mode()?;
    execute!(stdout(), LeaveAlternateScreen, cursor::Show)
}
