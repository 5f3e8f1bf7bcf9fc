//! review-assign CLI - runs the reviewer assignment bot for one event
//!
//! Meant to be invoked by whatever delivers webhooks (for example a GitHub
//! Actions workflow, which provides GITHUB_EVENT_NAME and GITHUB_EVENT_PATH).

mod commands;

use clap::{Parser, Subcommand};
use review_assign_core::Settings;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::{CheckConfigArgs, HandleArgs};

/// review-assign: pull request reviewer assignment bot
#[derive(Parser, Debug)]
#[command(name = "review-assign")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Repository path of the reviewer config (overrides settings and env)
    #[arg(long, global = true, env = "REVIEW_ASSIGN_CONFIG_PATH")]
    config_path: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Show version information
    Version,

    /// Handle one webhook delivery
    #[command(visible_alias = "h")]
    Handle(HandleArgs),

    /// Validate a local reviewer configuration file
    CheckConfig(CheckConfigArgs),

    /// Show current settings
    Config,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    let settings = Settings::load_with_overrides(cli.config_path.clone())?;

    if cli.verbose {
        tracing::info!(
            config_path = %settings.repository.config_path,
            "Settings loaded"
        );
    }

    match cli.command {
        Some(Commands::Version) => {
            println!("review-assign {}", env!("CARGO_PKG_VERSION"));
        }
        Some(Commands::Handle(args)) => {
            args.execute(&settings).await?;
        }
        Some(Commands::CheckConfig(args)) => {
            args.execute()?;
        }
        Some(Commands::Config) => {
            println!("review-assign Settings");
            println!("======================");
            println!();
            println!("Repository:");
            println!("  config_path: {}", settings.repository.config_path);
            println!();
            if let Some(path) = Settings::default_settings_path() {
                println!("Settings file: {}", path.display());
                if path.exists() {
                    println!("  (exists)");
                } else {
                    println!("  (not found - using defaults)");
                }
            }
        }
        None => {
            println!("review-assign - pull request reviewer assignment bot");
            println!();
            println!("Use --help for usage information");
        }
    }

    Ok(())
}
