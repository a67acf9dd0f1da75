//! brewcart - coffee-shop storefront
//!
//! CLI entry point that dispatches to subcommands.

use brewcart::cli::{App, Cli, Commands};
use brewcart::config::{Config, ConfigManager};
use brewcart::error::BrewResult;
use clap::Parser;
use console::style;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", style("Error:").red().bold(), e);
            if let Some(hint) = e.hint() {
                eprintln!("{} {}", style("Hint:").yellow(), hint);
            }
            ExitCode::FAILURE
        }
    }
}

async fn run() -> BrewResult<()> {
    let cli = Cli::parse();

    let config_manager = match cli.config {
        Some(ref path) => ConfigManager::with_path(path.clone()),
        None => ConfigManager::new(),
    };
    let config = config_manager.load().await?;

    init_logging(cli.verbose, &config);
    brewcart::ui::init_theme();

    // Config command doesn't need the cart
    if let Commands::Config(args) = cli.command {
        return brewcart::cli::commands::config(args, &config_manager, &config).await;
    }

    ConfigManager::ensure_state_dirs().await?;
    let app = App::new(config, cli.catalog);

    match cli.command {
        Commands::Config(_) => unreachable!("Config handled above"),
        Commands::Menu(args) => brewcart::cli::commands::menu(args, &app).await,
        Commands::Categories => brewcart::cli::commands::categories(&app).await,
        Commands::Show(args) => brewcart::cli::commands::show(args, &app).await,
        Commands::Add(args) => brewcart::cli::commands::add(args, &app).await,
        Commands::Remove(args) => brewcart::cli::commands::remove(args, &app).await,
        Commands::Set(args) => brewcart::cli::commands::set(args, &app).await,
        Commands::Cart(args) => brewcart::cli::commands::cart(args, &app).await,
        Commands::Badge => brewcart::cli::commands::badge(&app).await,
        Commands::Clear(args) => brewcart::cli::commands::clear(args, &app).await,
        Commands::Checkout(args) => brewcart::cli::commands::checkout(args, &app).await,
    }
}

/// 0 = warn, 1 = info, 2+ = debug; `general.verbose` counts as one level
fn init_logging(verbose: u8, config: &Config) {
    let level = verbose.max(u8::from(config.general.verbose));
    let filter = match level {
        0 => EnvFilter::new("brewcart=warn"),
        1 => EnvFilter::new("brewcart=info"),
        _ => EnvFilter::new("brewcart=debug"),
    };

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr);

    if config.general.log_format == "json" {
        builder.json().init();
    } else {
        builder.without_time().init();
    }
}
