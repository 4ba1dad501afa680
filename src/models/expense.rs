//! Expense model
//!
//! A [`DraftExpense`] is what the form produces; the store turns it into an
//! [`Expense`] by assigning an id.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::ids::ExpenseId;
use super::money::Money;

/// An expense payload before a unique identifier has been assigned
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftExpense {
    /// Amount spent (never negative once it reaches the store)
    pub amount: Money,

    /// What the money was spent on
    pub expense_name: String,

    /// Category id, see [`crate::models::CATEGORIES`]
    pub category: String,

    /// Day the expense happened
    pub date: NaiveDate,
}

impl DraftExpense {
    pub fn new(
        expense_name: impl Into<String>,
        amount: Money,
        category: impl Into<String>,
        date: NaiveDate,
    ) -> Self {
        Self {
            amount,
            expense_name: expense_name.into(),
            category: category.into(),
            date,
        }
    }
}

/// A recorded expense owned by the store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    pub id: ExpenseId,
    pub amount: Money,
    pub expense_name: String,
    pub category: String,
    pub date: NaiveDate,
}

impl Expense {
    /// Attach an id to a draft
    pub fn from_draft(id: ExpenseId, draft: DraftExpense) -> Self {
        Self {
            id,
            amount: draft.amount,
            expense_name: draft.expense_name,
            category: draft.category,
            date: draft.date,
        }
    }

    /// The draft this expense was created from
    pub fn to_draft(&self) -> DraftExpense {
        DraftExpense {
            amount: self.amount,
            expense_name: self.expense_name.clone(),
            category: self.category.clone(),
            date: self.date,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coffee() -> DraftExpense {
        DraftExpense::new(
            "Coffee",
            Money::from_units(100),
            "food",
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        )
    }

    #[test]
    fn test_from_draft_keeps_fields() {
        let id = ExpenseId::new();
        let expense = Expense::from_draft(id, coffee());
        assert_eq!(expense.id, id);
        assert_eq!(expense.to_draft(), coffee());
    }

    #[test]
    fn test_draft_wire_format() {
        let json = serde_json::to_value(coffee()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "amount": 10000,
                "expenseName": "Coffee",
                "category": "food",
                "date": "2024-01-01"
            })
        );
    }
}
