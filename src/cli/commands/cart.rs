//! Cart command - the cart page with delivery and totals

use crate::cart::{CartState, LineItem};
use crate::checkout::DeliveryQuote;
use crate::cli::app::App;
use crate::cli::args::{CartArgs, OutputFormat};
use crate::error::BrewResult;
use crate::ui::{self, UiContext};
use console::style;
use serde::Serialize;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CartView<'a> {
    items: &'a [LineItem],
    total_items: u64,
    total_price: u64,
    delivery: DeliveryQuote,
}

/// Execute the cart command
pub async fn execute(args: CartArgs, app: &App) -> BrewResult<()> {
    let state = app.cart().cart().snapshot();
    let quote = DeliveryQuote::for_subtotal(state.total_price(), &app.config().delivery);

    match args.format {
        OutputFormat::Json => {
            let view = CartView {
                items: &state.items,
                total_items: state.total_items(),
                total_price: state.total_price(),
                delivery: quote,
            };
            println!("{}", serde_json::to_string_pretty(&view)?);
        }
        OutputFormat::Plain => {
            for item in &state.items {
                println!("{}\t{}", item.id(), item.quantity);
            }
        }
        OutputFormat::Table => print_page(app, &state, &quote),
    }

    Ok(())
}

fn print_page(app: &App, state: &CartState, quote: &DeliveryQuote) {
    let ctx = UiContext::detect();

    if state.is_empty() {
        ui::step_info(&ctx, "Cart is empty");
        ui::remark(&ctx, "Browse the menu with: brewcart menu");
        return;
    }

    ui::intro(&ctx, &format!("Cart ({})", state.items.len()));

    println!(
        "{:<6} {:<28} {:>5} {:>10} {:>10}",
        style("ID").bold(),
        style("NAME").bold(),
        style("QTY").bold(),
        style("PRICE").bold(),
        style("TOTAL").bold()
    );
    println!("{}", "-".repeat(63));

    for item in &state.items {
        println!(
            "{:<6} {:<28} {:>5} {:>10} {:>10}",
            item.id(),
            item.product.name,
            item.quantity,
            app.money(item.product.price),
            app.money(item.line_total())
        );
    }
    println!();

    ui::key_value(&ctx, "Items", &state.total_items().to_string());
    ui::key_value(&ctx, "Subtotal", &app.money(quote.subtotal));
    if quote.is_free() {
        ui::key_value_status(&ctx, "Delivery", "free", true);
    } else {
        ui::key_value_status(&ctx, "Delivery", &app.money(quote.fee), false);
    }
    if let Some(remaining) = quote.remaining_for_free {
        ui::remark(
            &ctx,
            &format!("Add {} more for free delivery", app.money(remaining)),
        );
    }
    ui::key_value(&ctx, "Total", &style(app.money(quote.total)).bold().to_string());
}
