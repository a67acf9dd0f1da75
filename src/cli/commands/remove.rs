//! Remove command - drop a product from the cart

use crate::cli::app::App;
use crate::cli::args::RemoveArgs;
use crate::cli::commands::badge::badge_text;
use crate::error::BrewResult;
use crate::ui::{self, UiContext};

/// Execute the remove command
pub async fn execute(args: RemoveArgs, app: &App) -> BrewResult<()> {
    let ctx = UiContext::detect();
    let cart = app.cart();

    let removed = cart.cart().snapshot().get(args.id).map(|l| l.product.name.clone());
    cart.cart().remove(args.id);

    match removed {
        Some(name) => ui::step_ok(&ctx, &format!("Removed {}", name)),
        None => ui::step_info(&ctx, &format!("Product {} is not in the cart", args.id)),
    }
    println!("{}", badge_text(&cart));
    Ok(())
}
