//! Input forms
//!
//! Forms sit on the presentation side of the store: they validate and coerce
//! user input, and only complete drafts are dispatched.

pub mod expense;

pub use expense::{validate_draft, ExpenseField, ExpenseForm, INPUT_DATE_FORMAT};
