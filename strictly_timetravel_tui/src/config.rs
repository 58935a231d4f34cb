//! TUI configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;
use tracing::{debug, info, instrument};

/// Presentation settings for the terminal UI.
///
/// Every field has a default, so an empty file is a valid config.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct TuiConfig {
    /// List moves newest first at startup.
    #[serde(default)]
    reverse_order: bool,

    /// Draw 1-9 hints in empty squares.
    #[serde(default = "default_show_cell_numbers")]
    show_cell_numbers: bool,

    /// Color for X marks.
    #[serde(default = "default_x_color")]
    x_color: String,

    /// Color for O marks.
    #[serde(default = "default_o_color")]
    o_color: String,

    /// Background for the winning line.
    #[serde(default = "default_highlight_color")]
    highlight_color: String,

    /// Input poll interval in milliseconds.
    #[serde(default = "default_tick_ms")]
    tick_ms: u64,
}

fn default_show_cell_numbers() -> bool {
    true
}

fn default_x_color() -> String {
    "blue".to_string()
}

fn default_o_color() -> String {
    "red".to_string()
}

fn default_highlight_color() -> String {
    "green".to_string()
}

fn default_tick_ms() -> u64 {
    100
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            reverse_order: false,
            show_cell_numbers: default_show_cell_numbers(),
            x_color: default_x_color(),
            o_color: default_o_color(),
            highlight_color: default_highlight_color(),
            tick_ms: default_tick_ms(),
        }
    }
}

impl TuiConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;
        let config = Self::from_toml(&content)?;
        info!(tick_ms = config.tick_ms, "Config loaded successfully");
        Ok(config)
    }

    /// Parses and validates configuration from a TOML string.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Overrides the startup list order.
    pub fn with_reverse_order(mut self, reverse_order: bool) -> Self {
        self.reverse_order = reverse_order;
        self
    }

    /// Checks that colors parse and the poll interval is usable.
    #[instrument(skip(self))]
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("x_color", &self.x_color),
            ("o_color", &self.o_color),
            ("highlight_color", &self.highlight_color),
        ] {
            if parse_color(value).is_none() {
                return Err(ConfigError::new(format!("Unknown color for {}: {}", name, value)));
            }
        }
        if self.tick_ms == 0 {
            return Err(ConfigError::new("tick_ms must be at least 1".to_string()));
        }
        Ok(())
    }

    /// Color for X marks.
    pub fn x(&self) -> Color {
        parse_color(&self.x_color).unwrap_or(Color::Blue)
    }

    /// Color for O marks.
    pub fn o(&self) -> Color {
        parse_color(&self.o_color).unwrap_or(Color::Red)
    }

    /// Background for winning squares.
    pub fn highlight(&self) -> Color {
        parse_color(&self.highlight_color).unwrap_or(Color::Green)
    }
}

fn parse_color(value: &str) -> Option<Color> {
    Color::from_str(value).ok()
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
