//! Configuration file and colour scheme

use std::path::{Path, PathBuf};

use ratatui::style::{Color, Modifier, Style};
use serde::{Deserialize, Serialize};
use vcterm_core::Settings;

/// Top-level configuration for the vcterm client
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Endpoint connection settings
    #[serde(default)]
    pub connection: ConnectionConfig,
    /// Login defaults and polling
    #[serde(default)]
    pub navigator: Settings,
    /// Log output
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Endpoint connection settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectionConfig {
    /// Accept invalid TLS certificates
    #[serde(default)]
    pub insecure: bool,
    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        Self {
            insecure: false,
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_timeout_secs() -> u64 {
    30
}

/// Log output settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Filter used when `RUST_LOG` is unset (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Write JSON lines instead of plain text
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration from file
    ///
    /// # Errors
    /// Returns error if file cannot be read or parsed
    pub fn load(path: &Path) -> eyre::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load from default paths or use defaults
    ///
    /// # Errors
    /// Returns error if a config file exists but cannot be parsed
    pub fn load_default() -> eyre::Result<Self> {
        let paths = [
            Some(PathBuf::from("vcterm.toml")),
            dirs::config_dir().map(|p| p.join("vcterm/vcterm.toml")),
        ];

        for path in paths.into_iter().flatten() {
            if path.exists() {
                return Self::load(&path);
            }
        }

        Ok(Self::default())
    }
}

/// Colour for a status description shown in menus
pub fn status_color(status: &str) -> Option<Color> {
    match status {
        "poweredOn" | "green" | "connected" | "Accessible" => Some(Color::Green),
        "poweredOff" | "red" | "notResponding" | "disconnected" | "Not Accessible" => {
            Some(Color::Red)
        }
        "suspended" | "yellow" => Some(Color::Yellow),
        _ => None,
    }
}

/// Screen behind the widgets
pub fn backdrop_style() -> Style {
    Style::default().bg(Color::Blue).fg(Color::White)
}

/// Background title line
pub fn title_style() -> Style {
    Style::default()
        .bg(Color::Blue)
        .fg(Color::White)
        .add_modifier(Modifier::BOLD)
}

/// Widget body
pub fn window_style() -> Style {
    Style::default().bg(Color::Gray).fg(Color::Black)
}

/// Widget title
pub fn header_style() -> Style {
    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
}

/// Highlighted menu row or focused button
pub fn selected_style() -> Style {
    Style::default()
        .bg(Color::Blue)
        .fg(Color::White)
        .add_modifier(Modifier::BOLD)
}

/// Unfocused button
pub fn button_style() -> Style {
    Style::default().fg(Color::Black)
}

/// Input field
pub fn field_style() -> Style {
    Style::default().bg(Color::Cyan).fg(Color::Black)
}

/// Key hints in the status bar
pub fn hint_style() -> Style {
    Style::default().bg(Color::Blue).fg(Color::Gray)
}
