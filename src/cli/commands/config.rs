//! Config command - show or edit configuration

use crate::cart::validate_key;
use crate::cli::args::{ConfigAction, ConfigArgs};
use crate::config::{Config, ConfigManager, StorageKind};
use crate::error::{BrewError, BrewResult};
use crate::ui::{self, UiContext};
use std::path::PathBuf;

/// Keys accepted by `config set`
const VALID_KEYS: &[&str] = &[
    "general.verbose",
    "general.log_format",
    "general.order_log",
    "cart.storage_key",
    "cart.storage",
    "catalog.path",
    "delivery.free_threshold",
    "delivery.fee",
    "delivery.currency",
];

/// Execute the config command
pub async fn execute(args: ConfigArgs, manager: &ConfigManager, config: &Config) -> BrewResult<()> {
    match args.action {
        None | Some(ConfigAction::Show) => show_config(config)?,
        Some(ConfigAction::Path) => println!("{}", manager.path().display()),
        Some(ConfigAction::Init { force }) => init_config(manager, force).await?,
        Some(ConfigAction::Set { key, value }) => {
            let mut config = config.clone();
            set_value(&mut config, &key, &value)?;
            manager.save(&config).await?;

            let ctx = UiContext::detect();
            ui::step_ok(&ctx, &format!("Set {} = {}", key, value));
        }
    }

    Ok(())
}

fn show_config(config: &Config) -> BrewResult<()> {
    println!("{}", toml::to_string_pretty(config)?);
    Ok(())
}

async fn init_config(manager: &ConfigManager, force: bool) -> BrewResult<()> {
    let ctx = UiContext::detect();
    let path = manager.path();

    if path.exists() && !force {
        ui::step_warn_hint(
            &ctx,
            &format!("Config already exists at {}", path.display()),
            "Use --force to overwrite",
        );
        return Ok(());
    }

    manager.save(&Config::default()).await?;
    ui::step_ok_detail(&ctx, "Configuration initialized", &path.display().to_string());
    Ok(())
}

/// Apply a dot-separated key to `config`
fn set_value(config: &mut Config, key: &str, value: &str) -> BrewResult<()> {
    let parts: Vec<&str> = key.split('.').collect();

    match parts.as_slice() {
        ["general", "verbose"] => config.general.verbose = parse_bool(value)?,
        ["general", "log_format"] => config.general.log_format = parse_log_format(value)?,
        ["general", "order_log"] => config.general.order_log = parse_bool(value)?,

        ["cart", "storage_key"] => {
            let key = value.trim();
            validate_key(key)?;
            config.cart.storage_key = key.to_string();
        }
        ["cart", "storage"] => config.cart.storage = parse_storage(value)?,

        ["catalog", "path"] => config.catalog.path = Some(PathBuf::from(value)),

        ["delivery", "free_threshold"] => config.delivery.free_threshold = parse_u64(value)?,
        ["delivery", "fee"] => config.delivery.fee = parse_u64(value)?,
        ["delivery", "currency"] => config.delivery.currency = value.to_string(),

        _ => {
            return Err(BrewError::User(format!(
                "Unknown config key: {}. Valid keys: {}",
                key,
                VALID_KEYS.join(", ")
            )))
        }
    }

    Ok(())
}

fn parse_bool(value: &str) -> BrewResult<bool> {
    match value.to_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        _ => Err(BrewError::User(format!(
            "Invalid boolean value: {}. Use true/false",
            value
        ))),
    }
}

fn parse_u64(value: &str) -> BrewResult<u64> {
    value
        .parse()
        .map_err(|_| BrewError::User(format!("Invalid number: {}", value)))
}

fn parse_storage(value: &str) -> BrewResult<StorageKind> {
    match value.to_lowercase().as_str() {
        "file" => Ok(StorageKind::File),
        "memory" => Ok(StorageKind::Memory),
        _ => Err(BrewError::User(format!(
            "Invalid storage: {}. Use file/memory",
            value
        ))),
    }
}

fn parse_log_format(value: &str) -> BrewResult<String> {
    match value {
        "text" | "json" => Ok(value.to_string()),
        _ => Err(BrewError::User(format!(
            "Invalid log format: {}. Use text/json",
            value
        ))),
    }
}
