//! vcterm
//!
//! Dialog-driven terminal client for browsing a virtualization inventory

use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use color_eyre::Result;
use crossterm::{
    cursor, execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::prelude::*;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use vcterm_client::{ClientSettings, HttpConnector};
use vcterm_core::App;

mod action;
mod config;
mod dialog;
mod event;
mod ui;

use config::Config;
use dialog::TerminalDialog;
use event::TerminalEvents;

/// vcterm terminal client
#[derive(Parser, Debug)]
#[command(name = "vcterm", version, about)]
struct Args {
    /// Configuration file
    #[arg(short, long, env = "VCTERM_CONFIG")]
    config: Option<PathBuf>,

    /// Hostname pre-filled in the login form
    #[arg(long)]
    host: Option<String>,

    /// Username pre-filled in the login form
    #[arg(short, long)]
    user: Option<String>,

    /// Accept invalid TLS certificates
    #[arg(long)]
    insecure: bool,

    /// Delay between task polls in milliseconds
    #[arg(long)]
    poll_interval_ms: Option<u64>,

    /// Request timeout in seconds
    #[arg(long)]
    timeout_secs: Option<u64>,

    /// Write logs to this file
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Log as JSON lines
    #[arg(long)]
    log_json: bool,
}

impl Args {
    /// Command line values take precedence over the file
    fn merge_into(self, mut config: Config) -> (Config, Option<PathBuf>) {
        if self.host.is_some() {
            config.navigator.default_host = self.host;
        }
        if self.user.is_some() {
            config.navigator.default_user = self.user;
        }
        if let Some(ms) = self.poll_interval_ms {
            config.navigator.poll_interval_ms = ms;
        }
        if let Some(secs) = self.timeout_secs {
            config.connection.timeout_secs = secs;
        }
        config.connection.insecure |= self.insecure;
        config.logging.json |= self.log_json;
        (config, self.log_file)
    }
}

fn init_logging(config: &Config, log_file: Option<&PathBuf>) -> Result<()> {
    // The terminal belongs to the dialogs, so logs only go to a file
    let Some(path) = log_file else {
        return Ok(());
    };

    let file = std::fs::File::create(path)?;
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    let fmt = tracing_subscriber::fmt::layer().with_writer(file).with_ansi(false);
    if config.logging.json {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt.json())
            .init();
    } else {
        tracing_subscriber::registry().with(filter).with(fmt).init();
    }
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    let mut args = Args::parse();
    let config = match args.config.take() {
        Some(path) => Config::load(&path)?,
        None => Config::load_default()?,
    };
    let (config, log_file) = args.merge_into(config);

    init_logging(&config, log_file.as_ref())?;
    info!(version = vcterm_core::VERSION, "starting");

    let connector = HttpConnector::new(ClientSettings {
        insecure: config.connection.insecure,
        timeout: Duration::from_secs(config.connection.timeout_secs),
    });

    // Initialize terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    let dialog = TerminalDialog::new(terminal, TerminalEvents);

    let result = App::new(Box::new(dialog), Arc::new(connector), config.navigator)
        .run()
        .await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen, cursor::Show)?;

    result?;
    info!("exiting");
    Ok(())
}
