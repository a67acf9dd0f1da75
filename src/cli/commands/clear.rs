//! Clear command - empty the cart

use crate::cli::app::App;
use crate::cli::args::ClearArgs;
use crate::error::BrewResult;
use crate::ui::{self, UiContext};

/// Execute the clear command
pub async fn execute(args: ClearArgs, app: &App) -> BrewResult<()> {
    let ctx = UiContext::detect().with_auto_yes(args.yes);
    let cart = app.cart();

    let lines = cart.cart().items().len();
    if lines == 0 {
        ui::step_info(&ctx, "Cart is already empty");
        return Ok(());
    }

    if !ui::confirm(&ctx, &format!("Remove {} product(s) from the cart?", lines), true).await? {
        ui::step_warn(&ctx, "Cart left unchanged");
        return Ok(());
    }

    cart.cart().clear();
    ui::step_ok(&ctx, "Cart cleared");
    Ok(())
}
