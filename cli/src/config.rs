//! Session configuration
//!
//! Gathered from command-line flags in `main` and consumed by the menu
//! session. There are no config files or environment variables.

use clap::ValueEnum;

/// How results are written to stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable lines (`Event at 10: standup`)
    #[default]
    Text,
    /// One JSON value per result
    Json,
}

/// Settings for an interactive session
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// Result rendering
    pub format: OutputFormat,

    /// Print the numbered menu before every prompt
    ///
    /// Turned off for scripted input where the banner is noise.
    pub show_menu: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            show_menu: true,
        }
    }
}
