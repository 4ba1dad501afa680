//! Budget state management
//!
//! The presentation layer dispatches a [`BudgetAction`] into the
//! [`BudgetStore`], which runs the pure [`transition`] function and keeps the
//! resulting [`BudgetState`].

pub mod action;
pub mod id_gen;
pub mod reducer;
pub mod store;

pub use action::BudgetAction;
pub use id_gen::{IdGenerator, RandomIds, SequentialIds};
pub use reducer::{transition, BudgetState, BudgetSummary};
pub use store::BudgetStore;
