//! Add command - put a product in the cart

use crate::cli::app::App;
use crate::cli::args::AddArgs;
use crate::cli::commands::badge::badge_text;
use crate::error::BrewResult;
use crate::ui::{self, UiContext};

/// Execute the add command
pub async fn execute(args: AddArgs, app: &App) -> BrewResult<()> {
    let catalog = app.catalog().await?;
    let product = catalog.require(args.id)?.clone();
    let name = product.name.clone();
    let ctx = UiContext::detect();

    let cart = app.cart();
    let state = cart.cart().add(product, args.quantity);

    if args.quantity != 1 {
        ui::remark(
            &ctx,
            &format!("Requested {}; each add counts one", args.quantity),
        );
    }

    let in_cart = state.get(args.id).map(|l| l.quantity.get()).unwrap_or(1);
    ui::step_ok_detail(&ctx, &format!("Added {}", name), &format!("{} in cart", in_cart));
    println!("{}", badge_text(&cart));
    Ok(())
}
