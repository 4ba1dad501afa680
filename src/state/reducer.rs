//! The budget state and its transition function
//!
//! `transition` is pure: it reads the current state, never mutates it, and
//! returns the next state. Totals are derived from the expense list on every
//! read so they cannot drift from it.

use serde::{Deserialize, Serialize};

use super::action::BudgetAction;
use super::id_gen::IdGenerator;
use crate::models::{Expense, Money};

/// Snapshot of everything the tracker knows
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetState {
    /// Funds allocated for the session
    pub budget: Money,

    /// Recorded expenses in insertion order
    pub expenses: Vec<Expense>,
}

/// Headline totals shown by the tracker view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BudgetSummary {
    pub budget: Money,
    pub spent: Money,
    pub available: Money,
}

impl BudgetState {
    /// A state with a budget and no expenses
    pub fn new(budget: Money) -> Self {
        Self {
            budget,
            expenses: Vec::new(),
        }
    }

    /// Sum of every recorded expense
    pub fn total_spent(&self) -> Money {
        self.expenses.iter().map(|e| e.amount).sum()
    }

    /// Budget minus everything spent; negative once overspent
    pub fn available(&self) -> Money {
        self.budget - self.total_spent()
    }

    /// Fraction of the budget already spent
    ///
    /// Returns 0.0 for an empty budget with no spending and 1.0 or more once
    /// the budget is used up.
    pub fn spent_ratio(&self) -> f64 {
        let spent = self.total_spent().cents();
        match self.budget.cents() {
            0 if spent == 0 => 0.0,
            0 => 1.0,
            budget => spent as f64 / budget as f64,
        }
    }

    pub fn summary(&self) -> BudgetSummary {
        let spent = self.total_spent();
        BudgetSummary {
            budget: self.budget,
            spent,
            available: self.budget - spent,
        }
    }

    pub fn is_overspent(&self) -> bool {
        self.available().is_negative()
    }
}

/// Compute the state that follows `state` once `action` is applied
///
/// Total over every [`BudgetAction`]; input validation happens before an
/// action gets here.
pub fn transition(
    state: &BudgetState,
    action: BudgetAction,
    ids: &mut dyn IdGenerator,
) -> BudgetState {
    match action {
        BudgetAction::AddExpense { expense } => {
            let mut expenses = Vec::with_capacity(state.expenses.len() + 1);
            expenses.extend(state.expenses.iter().cloned());
            expenses.push(Expense::from_draft(ids.next_id(), expense));

            BudgetState {
                budget: state.budget,
                expenses,
            }
        }
        BudgetAction::ResetApp => BudgetState::new(state.budget),
    }
}
