//! Storefront - command line client for the bookstore storefront API.
//!
//! Lists the categories the backend serves and formats cent amounts the way
//! the storefront displays prices.

mod app;

use std::io;
use std::path::Path;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use storefront_core::config::{Config, API_URL_ENV};
use storefront_core::PriceFormatter;

use app::{format_prices, App};

#[derive(Debug, Parser)]
#[command(name = "storefront", version, about = "Bookstore storefront client")]
struct Cli {
    /// Override the API base URL for this run
    #[arg(long, global = true, value_name = "URL")]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Fetch and list product categories
    Categories {
        /// Print the raw category records as JSON
        #[arg(long)]
        json: bool,
    },
    /// Format amounts given in cents as US dollars
    Price {
        #[arg(required = true, allow_negative_numbers = true, value_name = "CENTS")]
        cents: Vec<i64>,
    },
    /// Inspect or change the saved configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Debug, Subcommand)]
enum ConfigAction {
    /// Show the resolved configuration
    Show,
    /// Save a new API base URL to the config file
    SetUrl { url: String },
}

/// Initialize the tracing subscriber for logging
fn init_tracing() {
    // Use RUST_LOG env var to control log level (e.g., RUST_LOG=debug)
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if not found)
    let _ = dotenvy::dotenv();

    init_tracing();
    let cli = Cli::parse();
    info!("Storefront starting");

    // Config is only resolved for commands that talk to the API, so a broken
    // config file never blocks `price` or the `config set-url` repair path
    match cli.command {
        Command::Categories { json } => {
            let app = App::new(resolve_config(cli.api_url)?)?;
            println!("{}", app.list_categories(json).await?);
        }
        Command::Price { cents } => {
            println!("{}", format_prices(&PriceFormatter::en_us(), &cents));
        }
        Command::Config { action: ConfigAction::Show } => {
            show_config(&resolve_config(cli.api_url)?)?;
        }
        Command::Config { action: ConfigAction::SetUrl { url } } => {
            let config = save_api_url(&Config::config_path()?, &url)?;
            eprintln!("Saved api_base_url = {}", config.api_base_url);
        }
    }

    Ok(())
}

fn resolve_config(api_url: Option<String>) -> Result<Config> {
    let mut config = Config::resolve()?;
    config.override_api_url(api_url);
    Ok(config)
}

fn show_config(resolved: &Config) -> Result<()> {
    println!("config file:  {}", Config::config_path()?.display());
    println!("api_base_url: {}", resolved.api_base_url);
    match resolved.request_timeout_secs {
        Some(secs) => println!("timeout:      {}s", secs),
        None => println!("timeout:      none"),
    }
    if std::env::var(API_URL_ENV).is_ok() {
        eprintln!("note: {} is set and overrides the saved URL", API_URL_ENV);
    }
    Ok(())
}

/// Write a new base URL into the config file at `path`.
///
/// Starts from the file's contents, not the env-resolved values. An
/// unreadable file is replaced by defaults plus the new URL.
fn save_api_url(path: &Path, url: &str) -> Result<Config> {
    let mut config = Config::load_or_default(path);
    config.set_api_url(url)?;
    config.save_to(path)?;
    Ok(config)
}
