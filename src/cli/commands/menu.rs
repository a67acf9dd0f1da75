//! Menu command - browse and filter the catalog

use crate::catalog::{MenuQuery, Product};
use crate::cli::app::App;
use crate::cli::args::{MenuArgs, OutputFormat};
use crate::error::BrewResult;
use crate::ui::{self, UiContext};
use console::style;

/// Execute the menu command
pub async fn execute(args: MenuArgs, app: &App) -> BrewResult<()> {
    let catalog = app.catalog().await?;
    let query = MenuQuery {
        category: args.category,
        search: args.search,
        sort: args.sort,
    };
    let products = query.apply(&catalog);

    if products.is_empty() {
        match args.format {
            OutputFormat::Json => println!("[]"),
            OutputFormat::Plain => {}
            OutputFormat::Table => {
                let ctx = UiContext::detect();
                ui::step_info(&ctx, "No products found");
                ui::remark(&ctx, "Try a different category or search");
            }
        }
        return Ok(());
    }

    match args.format {
        OutputFormat::Table => print_table(app, &products),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&products)?),
        OutputFormat::Plain => {
            for product in &products {
                println!("{}\t{}", product.id, product.name);
            }
        }
    }

    Ok(())
}

/// Execute the categories command
pub async fn categories(app: &App) -> BrewResult<()> {
    let catalog = app.catalog().await?;
    for category in catalog.categories() {
        println!("{}", category);
    }
    Ok(())
}

fn print_table(app: &App, products: &[&Product]) {
    let ctx = UiContext::detect();
    ui::intro(&ctx, "Menu");

    println!(
        "{:<6} {:<28} {:<14} {:>10}  {}",
        style("ID").bold(),
        style("NAME").bold(),
        style("CATEGORY").bold(),
        style("PRICE").bold(),
        style("TAGS").bold()
    );
    println!("{}", "-".repeat(72));

    for product in products {
        println!(
            "{:<6} {:<28} {:<14} {:>10}  {}",
            product.id,
            product.name,
            product.category,
            app.money(product.price),
            badges(product)
        );
    }

    println!();
    println!("{} product(s)", products.len());
}

fn badges(product: &Product) -> String {
    let mut badges = Vec::new();
    if product.is_new {
        badges.push(style("new").green().to_string());
    }
    if product.is_popular {
        badges.push(style("popular").yellow().to_string());
    }
    if product.is_discounted() {
        badges.push(style("sale").red().to_string());
    }
    badges.join(" ")
}
