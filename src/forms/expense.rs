//! New-expense form
//!
//! Holds what the user typed, coerces it into a [`DraftExpense`] and refuses
//! incomplete input before anything reaches the store.

use chrono::NaiveDate;
use std::fmt;
use std::str::FromStr;

use crate::error::{TrackerError, TrackerResult};
use crate::models::{find_category, DraftExpense, Money};

/// Date format accepted by the date field
pub const INPUT_DATE_FORMAT: &str = "%Y-%m-%d";

/// Fields of the expense form, in tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExpenseField {
    #[default]
    ExpenseName,
    Amount,
    Category,
    Date,
}

impl ExpenseField {
    pub const ALL: [ExpenseField; 4] = [
        Self::ExpenseName,
        Self::Amount,
        Self::Category,
        Self::Date,
    ];

    /// Get the next field (for Tab navigation)
    pub fn next(self) -> Self {
        match self {
            Self::ExpenseName => Self::Amount,
            Self::Amount => Self::Category,
            Self::Category => Self::Date,
            Self::Date => Self::ExpenseName,
        }
    }

    /// Get the previous field (for Shift+Tab navigation)
    pub fn prev(self) -> Self {
        match self {
            Self::ExpenseName => Self::Date,
            Self::Amount => Self::ExpenseName,
            Self::Category => Self::Amount,
            Self::Date => Self::Category,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::ExpenseName => "Expense Name",
            Self::Amount => "Amount",
            Self::Category => "Category",
            Self::Date => "Date",
        }
    }
}

impl fmt::Display for ExpenseField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ExpenseField {
    type Err = TrackerError;

    /// Accepts the wire names of the draft fields
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "expenseName" => Ok(Self::ExpenseName),
            "amount" => Ok(Self::Amount),
            "category" => Ok(Self::Category),
            "date" => Ok(Self::Date),
            other => Err(TrackerError::Validation(format!("Unknown form field: {}", other))),
        }
    }
}

/// Raw contents of the new-expense form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpenseForm {
    pub expense_name: String,
    /// Amount as typed; coerced on submit
    pub amount: String,
    /// Category id
    pub category: String,
    pub date: String,
}

impl ExpenseForm {
    /// An empty form dated `today`
    pub fn new(today: NaiveDate) -> Self {
        Self {
            expense_name: String::new(),
            amount: String::new(),
            category: String::new(),
            date: today.format(INPUT_DATE_FORMAT).to_string(),
        }
    }

    /// Store the new value of one field
    pub fn handle_change(&mut self, field: ExpenseField, value: impl Into<String>) {
        let value = value.into();
        match field {
            ExpenseField::ExpenseName => self.expense_name = value,
            ExpenseField::Amount => self.amount = value,
            ExpenseField::Category => self.category = value,
            ExpenseField::Date => self.date = value,
        }
    }

    pub fn value(&self, field: ExpenseField) -> &str {
        match field {
            ExpenseField::ExpenseName => &self.expense_name,
            ExpenseField::Amount => &self.amount,
            ExpenseField::Category => &self.category,
            ExpenseField::Date => &self.date,
        }
    }

    /// The amount coerced to money, `None` while the field is blank
    pub fn amount(&self) -> TrackerResult<Option<Money>> {
        let text = self.amount.trim();
        if text.is_empty() {
            return Ok(None);
        }
        Money::parse(text).map(Some)
    }

    /// Validate the form and build the draft to dispatch
    ///
    /// A blank field or a zero amount fails with
    /// [`TrackerError::MissingFields`].
    pub fn submit(&self) -> TrackerResult<DraftExpense> {
        let name = self.expense_name.trim();
        let category = self.category.trim();
        let date = self.date.trim();

        if name.is_empty() || category.is_empty() || date.is_empty() {
            return Err(TrackerError::MissingFields);
        }
        let amount = match self.amount()? {
            Some(amount) if !amount.is_zero() => amount,
            _ => return Err(TrackerError::MissingFields),
        };

        if amount.is_negative() {
            return Err(TrackerError::NegativeAmount(amount.cents()));
        }

        let category =
            find_category(category).ok_or_else(|| TrackerError::category_not_found(category))?;

        let date = NaiveDate::parse_from_str(date, INPUT_DATE_FORMAT)
            .map_err(|_| TrackerError::InvalidDate(date.to_string()))?;

        Ok(DraftExpense::new(name, amount, category.id, date))
    }

    /// Clear everything but keep the date on `today`
    pub fn reset(&mut self, today: NaiveDate) {
        *self = Self::new(today);
    }
}

/// Apply the form's rules to a draft that did not come through a form
///
/// Used for drafts read from JSON, where the amount and date are already
/// typed.
pub fn validate_draft(draft: &DraftExpense) -> TrackerResult<()> {
    if draft.expense_name.trim().is_empty() || draft.amount.is_zero() {
        return Err(TrackerError::MissingFields);
    }
    if draft.amount.is_negative() {
        return Err(TrackerError::NegativeAmount(draft.amount.cents()));
    }
    find_category(&draft.category)
        .map(|_| ())
        .ok_or_else(|| TrackerError::category_not_found(draft.category.as_str()))
}
