//! CLI argument definitions using clap derive

use crate::catalog::{ProductId, SortOrder};
use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// brewcart - coffee-shop storefront
///
/// Browse the menu, keep a cart between runs, and check out.
#[derive(Parser, Debug)]
#[command(name = "brewcart")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Configuration file path
    #[arg(short, long, global = true, env = "BREWCART_CONFIG")]
    pub config: Option<PathBuf>,

    /// Catalog JSON file (overrides catalog.path)
    #[arg(long, global = true, env = "BREWCART_CATALOG")]
    pub catalog: Option<PathBuf>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Browse the menu
    Menu(MenuArgs),

    /// List menu categories
    Categories,

    /// Show one product in detail
    Show(ShowArgs),

    /// Add a product to the cart
    Add(AddArgs),

    /// Remove a product from the cart
    Remove(RemoveArgs),

    /// Set the quantity of a product in the cart
    Set(SetArgs),

    /// Show the cart with delivery and totals
    Cart(CartArgs),

    /// Print the number of items in the cart
    Badge,

    /// Empty the cart
    Clear(ClearArgs),

    /// Place an order for everything in the cart
    Checkout(CheckoutArgs),

    /// Show or edit configuration
    Config(ConfigArgs),
}

/// Arguments for the menu command
#[derive(Parser, Debug)]
pub struct MenuArgs {
    /// Only show this category ("all" shows everything)
    #[arg(long)]
    pub category: Option<String>,

    /// Search product names and descriptions
    #[arg(short, long)]
    pub search: Option<String>,

    /// Sort order
    #[arg(long, value_enum, default_value_t = SortOrder::Default)]
    pub sort: SortOrder,

    /// Output format
    #[arg(short, long, default_value = "table")]
    pub format: OutputFormat,
}

/// Arguments for the show command
#[derive(Parser, Debug)]
pub struct ShowArgs {
    /// Product ID
    pub id: ProductId,
}

/// Arguments for the add command
#[derive(Parser, Debug)]
pub struct AddArgs {
    /// Product ID
    pub id: ProductId,

    /// Requested quantity (the cart currently adds one per call)
    #[arg(short, long, default_value = "1")]
    pub quantity: u32,
}

/// Arguments for the remove command
#[derive(Parser, Debug)]
pub struct RemoveArgs {
    /// Product ID
    pub id: ProductId,
}

/// Arguments for the set command
#[derive(Parser, Debug)]
pub struct SetArgs {
    /// Product ID
    pub id: ProductId,

    /// New quantity; values below 1 become 1
    #[arg(allow_hyphen_values = true)]
    pub quantity: i64,
}

/// Arguments for the cart command
#[derive(Parser, Debug)]
pub struct CartArgs {
    /// Output format
    #[arg(short, long, default_value = "table")]
    pub format: OutputFormat,
}

/// Arguments for the clear command
#[derive(Parser, Debug)]
pub struct ClearArgs {
    /// Skip confirmation prompt
    #[arg(short, long)]
    pub yes: bool,
}

/// Arguments for the checkout command
#[derive(Parser, Debug)]
pub struct CheckoutArgs {
    /// Customer name (prompted if omitted in a terminal)
    #[arg(long)]
    pub name: Option<String>,

    /// Contact phone (prompted if omitted in a terminal)
    #[arg(long)]
    pub phone: Option<String>,

    /// Contact email (optional; offered as a prompt in a terminal)
    #[arg(long)]
    pub email: Option<String>,

    /// Delivery address (prompted if omitted in a terminal)
    #[arg(long)]
    pub address: Option<String>,

    /// Comment for the order (optional; offered as a prompt in a terminal)
    #[arg(long)]
    pub comment: Option<String>,

    /// Skip confirmation prompt
    #[arg(short, long)]
    pub yes: bool,
}

/// Arguments for the config command
#[derive(Parser, Debug)]
pub struct ConfigArgs {
    /// Subcommand for config
    #[command(subcommand)]
    pub action: Option<ConfigAction>,
}

/// Config subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Show configuration file path
    Path,

    /// Initialize default configuration
    Init {
        /// Overwrite existing configuration
        #[arg(short, long)]
        force: bool,
    },

    /// Set a configuration value
    Set {
        /// Configuration key (e.g., delivery.fee)
        key: String,
        /// Value to set
        value: String,
    },
}

/// Output format for listings
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table
    Table,
    /// JSON output
    Json,
    /// Simple text (one per line)
    Plain,
}
