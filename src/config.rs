//! Configuration and CLI argument handling

use clap::Parser;

use crate::view::DisplayMetrics;

/// CLI argument parsing structure
#[derive(Parser, Debug)]
#[command(name = "countdown-fab")]
#[command(about = "A single-screen countdown timer with a start/reset toggle")]
#[command(version)]
pub struct Config {
    /// Port to bind the server to
    #[arg(short, long, default_value = "20580")]
    pub port: u16,

    /// Host address to bind to
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,

    /// Draw the countdown screen to the terminal
    #[arg(long)]
    pub render: bool,

    /// Screen width used when the terminal size is unknown
    #[arg(long, default_value = "40")]
    pub width: u32,

    /// Screen height used when the terminal size is unknown
    #[arg(long, default_value = "20")]
    pub height: u32,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    /// Parse configuration from command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Get the server address as a formatted string
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Get the appropriate log level based on verbose flag
    pub fn log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "info" }
    }

    /// Display size to fall back on when the terminal does not report one
    pub fn fallback_metrics(&self) -> DisplayMetrics {
        DisplayMetrics::new(self.width.max(1), self.height.max(1))
    }
}
