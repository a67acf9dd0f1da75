//! Checkout command - place an order locally and clear the cart

use crate::checkout::{self, DeliveryQuote, OrderForm, OrderLog};
use crate::cli::app::App;
use crate::cli::args::CheckoutArgs;
use crate::error::{BrewError, BrewResult};
use crate::ui::{self, UiContext};

/// Execute the checkout command
pub async fn execute(args: CheckoutArgs, app: &App) -> BrewResult<()> {
    let ctx = UiContext::detect().with_auto_yes(args.yes);
    let handle = app.cart();
    let cart = handle.cart();

    if cart.items().is_empty() {
        return Err(BrewError::EmptyCart);
    }

    ui::intro(&ctx, "Checkout");

    let form = OrderForm {
        name: ui::text_or_prompt(&ctx, args.name, "Your name").await?,
        phone: ui::text_or_prompt(&ctx, args.phone, "Phone").await?,
        email: ui::optional_text_or_prompt(&ctx, args.email, "Email").await?,
        address: ui::text_or_prompt(&ctx, args.address, "Delivery address").await?,
        comment: ui::optional_text_or_prompt(&ctx, args.comment, "Comment for the order")
            .await?,
    };

    let quote = DeliveryQuote::for_subtotal(cart.total_price(), &app.config().delivery);
    let prompt = format!("Place order for {}?", app.money(quote.total));
    if !ui::confirm(&ctx, &prompt, true).await? {
        return Err(BrewError::CheckoutCancelled);
    }

    let log = OrderLog::new(app.config());
    let receipt = checkout::checkout(&cart, form, &app.config().delivery, &log).await?;

    ui::key_value(&ctx, "Order", &receipt.id.to_string());
    ui::key_value(&ctx, "Items", &receipt.total_items.to_string());
    ui::key_value(&ctx, "Total", &app.money(receipt.quote.total));
    ui::outro_success(&ctx, "Order placed! We will contact you to confirm.");
    Ok(())
}
