//! Interactive prompts with CI/non-interactive fallback

use super::context::UiContext;
use crate::error::{BrewError, BrewResult};

/// Prompt for confirmation, returns default if non-interactive or auto-yes
pub async fn confirm(ctx: &UiContext, message: &str, default: bool) -> BrewResult<bool> {
    if ctx.auto_yes() {
        return Ok(true);
    }

    if !ctx.is_interactive() {
        return Ok(default);
    }

    // cliclack blocks on stdin
    let message = message.to_string();
    let result = tokio::task::spawn_blocking(move || {
        cliclack::confirm(&message)
            .initial_value(default)
            .interact()
    })
    .await
    .map_err(|e| BrewError::User(format!("Prompt task failed: {}", e)))?;

    result.map_err(|e| BrewError::User(format!("Prompt failed: {}", e)))
}

/// Fill in a missing text value.
///
/// Returns `current` when it is set or when prompts are unavailable; the
/// caller's validation decides whether an empty value is acceptable.
pub async fn text_or_prompt(
    ctx: &UiContext,
    current: Option<String>,
    message: &str,
) -> BrewResult<String> {
    if let Some(value) = current {
        return Ok(value);
    }

    if !ctx.is_interactive() {
        return Ok(String::new());
    }

    let message = message.to_string();
    let result: Result<std::io::Result<String>, _> =
        tokio::task::spawn_blocking(move || cliclack::input(&message).interact()).await;

    match result {
        Ok(Ok(value)) => Ok(value),
        Ok(Err(e)) => Err(BrewError::User(format!("Input failed: {}", e))),
        Err(e) => Err(BrewError::User(format!("Input task failed: {}", e))),
    }
}

/// Offer an optional text field.
///
/// Returns `current` when it is set. Without a terminal the field is left
/// out; in one, an empty answer skips it.
pub async fn optional_text_or_prompt(
    ctx: &UiContext,
    current: Option<String>,
    message: &str,
) -> BrewResult<Option<String>> {
    if current.is_some() || !ctx.is_interactive() {
        return Ok(current);
    }

    let message = message.to_string();
    let result: Result<std::io::Result<String>, _> = tokio::task::spawn_blocking(move || {
        cliclack::input(&message)
            .placeholder("optional")
            .required(false)
            .interact()
    })
    .await;

    match result {
        Ok(Ok(value)) if value.trim().is_empty() => Ok(None),
        Ok(Ok(value)) => Ok(Some(value)),
        Ok(Err(e)) => Err(BrewError::User(format!("Input failed: {}", e))),
        Err(e) => Err(BrewError::User(format!("Input task failed: {}", e))),
    }
}
