//! brewcart - coffee-shop storefront
//!
//! A persistent shopping cart over a product catalog, with menu filtering
//! and a local checkout.

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod cli;
pub mod config;
pub mod error;
pub mod ui;

pub use error::{BrewError, BrewResult};
