//! CLI command implementations

pub mod add;
pub mod badge;
pub mod cart;
pub mod checkout;
pub mod clear;
pub mod config;
pub mod menu;
pub mod remove;
pub mod set;
pub mod show;

pub use add::execute as add;
pub use badge::execute as badge;
pub use cart::execute as cart;
pub use checkout::execute as checkout;
pub use clear::execute as clear;
pub use config::execute as config;
pub use menu::categories;
pub use menu::execute as menu;
pub use remove::execute as remove;
pub use set::execute as set;
pub use show::execute as show;
