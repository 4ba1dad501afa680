//! The budget store
//!
//! Owns the current [`BudgetState`] and is the only place it changes. Readers
//! borrow the state; writers go through [`BudgetStore::dispatch`].

use tracing::{debug, info, warn};

use super::action::BudgetAction;
use super::id_gen::{IdGenerator, RandomIds};
use super::reducer::{transition, BudgetState, BudgetSummary};
use crate::error::{TrackerError, TrackerResult};
use crate::models::Money;

/// Owner of the session's budget state
#[derive(Debug)]
pub struct BudgetStore<G = RandomIds> {
    state: BudgetState,
    ids: G,
}

impl BudgetStore<RandomIds> {
    /// Create a store with random expense ids
    pub fn new(budget: Money) -> TrackerResult<Self> {
        Self::with_ids(budget, RandomIds)
    }
}

impl<G: IdGenerator> BudgetStore<G> {
    /// Create a store that draws expense ids from `ids`
    ///
    /// # Errors
    ///
    /// Returns a validation error if `budget` is negative.
    pub fn with_ids(budget: Money, ids: G) -> TrackerResult<Self> {
        if budget.is_negative() {
            return Err(TrackerError::Validation(format!(
                "Budget cannot be negative: {}",
                budget
            )));
        }

        debug!(budget = budget.cents(), "budget session started");

        Ok(Self {
            state: BudgetState::new(budget),
            ids,
        })
    }

    /// Current state snapshot
    pub fn state(&self) -> &BudgetState {
        &self.state
    }

    pub fn summary(&self) -> BudgetSummary {
        self.state.summary()
    }

    /// Apply an action and replace the state with the result
    ///
    /// Expenses with a negative amount, or an amount that would push the
    /// totals out of range, are refused and leave the state as it was.
    pub fn dispatch(&mut self, action: BudgetAction) -> TrackerResult<&BudgetState> {
        if let BudgetAction::AddExpense { expense } = &action {
            if expense.amount.is_negative() {
                warn!(
                    amount = expense.amount.cents(),
                    name = %expense.expense_name,
                    "refused expense with negative amount"
                );
                return Err(TrackerError::NegativeAmount(expense.amount.cents()));
            }

            let in_range = self
                .state
                .total_spent()
                .checked_add(expense.amount)
                .and_then(|spent| self.state.budget.checked_sub(spent))
                .is_some();
            if !in_range {
                warn!(
                    amount = expense.amount.cents(),
                    name = %expense.expense_name,
                    "refused expense that overflows the totals"
                );
                return Err(TrackerError::Validation(format!(
                    "Amount {} is too large for this session",
                    expense.amount
                )));
            }
        }

        debug!(action = action.tag(), "dispatch");
        if matches!(action, BudgetAction::ResetApp) {
            info!(dropped = self.state.expenses.len(), "budget session reset");
        }

        self.state = transition(&self.state, action, &mut self.ids);

        debug!(
            expenses = self.state.expenses.len(),
            available = self.state.available().cents(),
            "state updated"
        );
        Ok(&self.state)
    }

    /// Parse an action from JSON and dispatch it
    pub fn dispatch_json(&mut self, input: &str) -> TrackerResult<&BudgetState> {
        let action = BudgetAction::from_json(input)?;
        self.dispatch(action)
    }
}
