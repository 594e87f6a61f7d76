//! Shop CLI - Browse a product catalog and drive a cart from the terminal.
//!
//! Commands:
//! - `shop categories` - List the category bar
//! - `shop browse` - Show the filtered product grid
//! - `shop show` - Show one product's details
//! - `shop session` - Run a scripted shopping session
//! - `shop config` - Manage configuration

mod commands;
mod config;
mod context;
mod output;
mod render;
mod script;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{BrowseArgs, ConfigArgs, SessionArgs, ShowArgs};

/// Shop CLI - Browse a catalog, search it and fill a cart
#[derive(Parser)]
#[command(name = "shop")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Catalog file path (overrides the config file)
    #[arg(long, global = true)]
    catalog: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the category bar
    Categories,

    /// Show the product grid for a category and search
    Browse(BrowseArgs),

    /// Show product details
    Show(ShowArgs),

    /// Run a shopping session script against one storefront
    Session(SessionArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose);

    // Setup output formatting
    let output = output::Output::new(cli.verbose, cli.json);

    // Load config and catalog
    let ctx = match context::Context::load(cli.config.as_deref(), cli.catalog.as_deref(), output.clone()) {
        Ok(ctx) => ctx,
        Err(e) => {
            output.error(&format!("{:#}", e));
            std::process::exit(1);
        }
    };

    // Execute command
    let result = match cli.command {
        Commands::Categories => commands::categories::run(&ctx),
        Commands::Browse(args) => commands::browse::run(args, &ctx),
        Commands::Show(args) => commands::show::run(args, &ctx),
        Commands::Session(args) => commands::session::run(args, &ctx),
        Commands::Config(args) => commands::config::run(args, &ctx),
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}

/// Set up the stderr log subscriber. `RUST_LOG` wins over `--verbose`.
fn setup_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .init();
}
