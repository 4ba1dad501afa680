//! Terminal User Interface module
//!
//! An interactive front end for the budget store using ratatui: a tracker
//! panel with the headline amounts, the expense list, and dialogs for adding
//! expenses and resetting the session.

pub mod app;
pub mod dialogs;
pub mod event;
pub mod handler;
pub mod layout;
pub mod terminal;
pub mod views;
pub mod widgets;

pub use app::App;
pub use terminal::run_tui;
