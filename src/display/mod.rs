//! Display formatting for terminal output
//!
//! Plain-text and table renderings used by the CLI commands.

pub mod category;
pub mod expense;
pub mod summary;

pub use category::format_category_list;
pub use expense::format_expense_table;
pub use summary::format_summary;
