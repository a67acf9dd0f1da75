//! Checkout: order form, delivery quote and the local order log
//!
//! Orders are not sent anywhere. A placed order is appended to a JSON-lines
//! log under the state directory and the cart is cleared.

use crate::cart::{CartStore, LineItem};
use crate::config::schema::{Config, DeliveryConfig};
use crate::config::ConfigManager;
use crate::error::{BrewError, BrewResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;
use tracing::{info, warn};
use uuid::Uuid;

/// Customer details entered at checkout
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderForm {
    pub name: String,
    pub phone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

impl OrderForm {
    /// Trim every field and check the required ones.
    ///
    /// Name, phone and address must be non-blank. Email is optional but
    /// must contain `@` when given. Blank optional fields become `None`.
    pub fn validated(self) -> BrewResult<Self> {
        let name = required("name", &self.name)?;
        let phone = required("phone", &self.phone)?;
        let email = optional(self.email.as_deref());
        if let Some(email) = &email {
            if !email.contains('@') {
                return Err(BrewError::order_invalid("email", "is not an email address"));
            }
        }
        let address = required("address", &self.address)?;
        let comment = optional(self.comment.as_deref());

        Ok(Self {
            name,
            phone,
            email,
            address,
            comment,
        })
    }
}

fn required(field: &'static str, value: &str) -> BrewResult<String> {
    let value = value.trim();
    if value.is_empty() {
        return Err(BrewError::order_invalid(field, "is required"));
    }
    Ok(value.to_string())
}

fn optional(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// Delivery cost for a cart subtotal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryQuote {
    pub subtotal: u64,
    pub fee: u64,
    pub total: u64,
    /// How much more to spend for free delivery, when below the threshold
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remaining_for_free: Option<u64>,
}

impl DeliveryQuote {
    /// Free strictly above the threshold; at the threshold the fee still
    /// applies but no remaining amount is reported.
    pub fn for_subtotal(subtotal: u64, policy: &DeliveryConfig) -> Self {
        let fee = if subtotal > policy.free_threshold {
            0
        } else {
            policy.fee
        };
        let remaining_for_free =
            (subtotal < policy.free_threshold).then(|| policy.free_threshold - subtotal);

        Self {
            subtotal,
            fee,
            total: subtotal.saturating_add(fee),
            remaining_for_free,
        }
    }

    /// Whether delivery is free
    pub fn is_free(&self) -> bool {
        self.fee == 0
    }
}

/// A placed order
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderReceipt {
    pub id: Uuid,
    pub placed_at: DateTime<Utc>,
    pub items: Vec<LineItem>,
    pub total_items: u64,
    pub quote: DeliveryQuote,
    pub customer: OrderForm,
}

/// File-based order log that appends JSON lines
pub struct OrderLog {
    enabled: bool,
    path: PathBuf,
}

impl OrderLog {
    /// Create an order log from config
    pub fn new(config: &Config) -> Self {
        Self {
            enabled: config.general.order_log,
            path: ConfigManager::order_log_path(),
        }
    }

    /// Order log at an explicit path
    pub fn at(path: PathBuf, enabled: bool) -> Self {
        Self { enabled, path }
    }

    /// Append a receipt as one JSON line.
    ///
    /// IO failures are logged and dropped; they never fail the checkout.
    pub async fn record(&self, receipt: &OrderReceipt) {
        if !self.enabled {
            return;
        }

        let mut line = match serde_json::to_string(receipt) {
            Ok(s) => s,
            Err(e) => {
                warn!("Failed to serialize order {}: {}", receipt.id, e);
                return;
            }
        };
        line.push('\n');

        if let Err(e) = self.append(&line).await {
            warn!("Failed to write order log: {}", e);
        }
    }

    async fn append(&self, line: &str) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await?;

        file.write_all(line.as_bytes()).await?;
        file.flush().await?;
        Ok(())
    }
}

/// Place an order for everything in the cart.
///
/// Rejects an empty cart and an invalid form without touching the cart.
/// On success the cart is emptied in the same step that captures the
/// order, and the receipt is logged.
pub async fn checkout(
    cart: &CartStore,
    form: OrderForm,
    policy: &DeliveryConfig,
    log: &OrderLog,
) -> BrewResult<OrderReceipt> {
    if cart.snapshot().is_empty() {
        return Err(BrewError::EmptyCart);
    }

    let customer = form.validated()?;

    // The order is exactly what this transition removes from the cart
    let ordered = cart.take();
    if ordered.is_empty() {
        return Err(BrewError::EmptyCart);
    }

    let receipt = OrderReceipt {
        id: Uuid::new_v4(),
        placed_at: Utc::now(),
        total_items: ordered.total_items(),
        quote: DeliveryQuote::for_subtotal(ordered.total_price(), policy),
        items: ordered.items,
        customer,
    };

    log.record(&receipt).await;
    info!(
        "Order {} placed: {} item(s), total {}",
        receipt.id, receipt.total_items, receipt.quote.total
    );

    Ok(receipt)
}
