//! Set command - change a line's quantity

use crate::cli::app::App;
use crate::cli::args::SetArgs;
use crate::cli::commands::badge::badge_text;
use crate::error::BrewResult;
use crate::ui::{self, UiContext};

/// Execute the set command
pub async fn execute(args: SetArgs, app: &App) -> BrewResult<()> {
    let ctx = UiContext::detect();
    let cart = app.cart();
    let state = cart.cart().set_quantity(args.id, args.quantity);

    match state.get(args.id) {
        Some(line) => {
            if i64::from(line.quantity.get()) != args.quantity {
                ui::step_warn_hint(
                    &ctx,
                    &format!("Quantity {} adjusted", args.quantity),
                    "quantities start at 1",
                );
            }
            ui::step_ok(&ctx, &format!("{} x {}", line.product.name, line.quantity));
        }
        None => ui::step_info(&ctx, &format!("Product {} is not in the cart", args.id)),
    }
    println!("{}", badge_text(&cart));
    Ok(())
}
