//! Show command - product detail

use crate::cli::app::App;
use crate::cli::args::ShowArgs;
use crate::error::BrewResult;
use crate::ui::{self, UiContext};
use console::style;

/// Execute the show command
pub async fn execute(args: ShowArgs, app: &App) -> BrewResult<()> {
    let catalog = app.catalog().await?;
    let product = catalog.require(args.id)?;
    let ctx = UiContext::detect();

    ui::intro(&ctx, &product.name);
    if !product.description.is_empty() {
        ui::remark(&ctx, &product.description);
    }

    let price = match product.old_price.filter(|_| product.is_discounted()) {
        Some(old) => format!(
            "{} (was {})",
            app.money(product.price),
            style(app.money(old)).dim()
        ),
        None => app.money(product.price),
    };

    ui::key_value(&ctx, "ID", &product.id.to_string());
    ui::key_value(&ctx, "Category", &product.category);
    ui::key_value(&ctx, "Price", &price);
    ui::key_value(&ctx, "Weight", &format!("{} g", product.weight));
    ui::key_value(&ctx, "Calories", &format!("{} kcal", product.calories));
    ui::key_value(&ctx, "Image", &product.image);

    if let Some(line) = app.cart().cart().snapshot().get(product.id) {
        ui::step_info(&ctx, &format!("{} in cart", line.quantity));
    }

    Ok(())
}
