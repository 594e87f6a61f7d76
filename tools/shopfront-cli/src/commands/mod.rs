//! CLI command implementations.

pub mod browse;
pub mod categories;
pub mod config;
pub mod session;
pub mod show;

use clap::{Args, Subcommand};

/// Arguments for the browse command.
#[derive(Args)]
pub struct BrowseArgs {
    /// Category to show (default: the starting view's, else All).
    #[arg(short = 'C', long)]
    pub category: Option<String>,

    /// Search text; every word must match.
    #[arg(short, long)]
    pub search: Option<String>,

    /// Shareable query string to start from, e.g. "category=Plants&product=p5".
    #[arg(short, long)]
    pub url: Option<String>,
}

/// Arguments for the show command.
#[derive(Args)]
pub struct ShowArgs {
    /// Product ID.
    pub id: String,
}

/// Arguments for the session command.
#[derive(Args)]
pub struct SessionArgs {
    /// Script file to run (default: read commands from stdin).
    #[arg(short, long)]
    pub script: Option<String>,

    /// Shareable query string to start from.
    #[arg(short, long)]
    pub url: Option<String>,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,
    /// Initialize a new config file.
    Init {
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
    /// Validate the config file.
    Validate,
}
