//! Badge command - header cart counter

use crate::cart::CartHandle;
use crate::cli::app::App;
use crate::error::BrewResult;

/// Execute the badge command
pub async fn execute(app: &App) -> BrewResult<()> {
    println!("{}", badge_text(&app.cart()));
    Ok(())
}

/// Header badge text: the total item count
pub fn badge_text(cart: &CartHandle) -> String {
    format!("cart: {}", cart.cart().total_items())
}
