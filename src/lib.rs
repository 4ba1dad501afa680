//! Budget Tracker - a budget and expense planner for the terminal
//!
//! A session starts with a budget. Expenses are recorded against it, and the
//! spent and available amounts are derived from the expense list. All state
//! changes go through a single reducer so every front end sees the same rules.
//!
//! # Architecture
//!
//! - `models`: money, expense ids, categories and expense records
//! - `state`: actions, the pure reducer, and the store that owns the state
//! - `forms`: expense form validation at the presentation boundary
//! - `config`: config directory resolution and user settings
//! - `logging`: tracing subscriber setup
//! - `display`: plain-text and table output for the CLI
//! - `cli`: one-shot command handlers
//! - `tui`: the interactive ratatui front end
//!
//! # Example
//!
//! ```rust,ignore
//! use budget_tracker::models::{DraftExpense, Money};
//! use budget_tracker::state::{BudgetAction, BudgetStore};
//!
//! let mut store = BudgetStore::new(Money::from_units(300))?;
//! let coffee = DraftExpense::new("Coffee", Money::from_units(100), "food", today);
//! store.dispatch(BudgetAction::add_expense(coffee))?;
//! assert_eq!(store.state().available(), Money::from_units(200));
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod forms;
pub mod logging;
pub mod models;
pub mod state;
pub mod tui;

pub use error::{TrackerError, TrackerResult};
