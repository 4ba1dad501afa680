//! CLI command handlers
//!
//! Bridges clap argument parsing with the budget store and the display
//! formatters.

pub mod category;
pub mod config;
pub mod summary;

pub use category::handle_categories_command;
pub use config::{handle_config_command, handle_init_command};
pub use summary::{handle_summary_command, session_budget, SummaryArgs};
