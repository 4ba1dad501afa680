//! Dialog modules for the TUI
//!
//! Modal dialogs drawn over the tracker

pub mod expense;
pub mod help;
pub mod reset;
