//! Command-line front end

pub mod app;
pub mod args;
pub mod commands;

pub use app::App;
pub use args::{Cli, Commands};
