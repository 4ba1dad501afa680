//! Actions accepted by the budget store
//!
//! On the wire an action is adjacently tagged:
//! `{"type": "add-expense", "payload": {"expense": {...}}}`.

use serde::{Deserialize, Serialize};

use crate::error::{TrackerError, TrackerResult};
use crate::models::DraftExpense;

/// Every state change the store can perform
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "kebab-case")]
pub enum BudgetAction {
    /// Record a new expense; the store assigns its id
    AddExpense { expense: DraftExpense },

    /// Drop every recorded expense, keeping the budget
    ResetApp,
}

impl BudgetAction {
    /// Tags understood by [`BudgetAction::from_json`]
    pub const TAGS: &'static [&'static str] = &["add-expense", "reset-app"];

    pub fn add_expense(expense: DraftExpense) -> Self {
        Self::AddExpense { expense }
    }

    /// The wire tag of this action
    pub fn tag(&self) -> &'static str {
        match self {
            Self::AddExpense { .. } => "add-expense",
            Self::ResetApp => "reset-app",
        }
    }

    /// Parse an action from its JSON form
    ///
    /// An unknown `type` tag is an error, never a silent no-op.
    pub fn from_json(input: &str) -> TrackerResult<Self> {
        let value: serde_json::Value = serde_json::from_str(input)?;
        let tag = value
            .get("type")
            .and_then(|t| t.as_str())
            .ok_or_else(|| TrackerError::Json("action has no \"type\" tag".to_string()))?;

        if !Self::TAGS.contains(&tag) {
            return Err(TrackerError::UnknownAction(tag.to_string()));
        }

        Ok(serde_json::from_value(value)?)
    }

    pub fn to_json(&self) -> TrackerResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use chrono::NaiveDate;

    #[test]
    fn test_parse_add_expense() {
        let json = r#"{
            "type": "add-expense",
            "payload": {
                "expense": {
                    "amount": 10000,
                    "expenseName": "Coffee",
                    "category": "food",
                    "date": "2024-01-01"
                }
            }
        }"#;

        let action = BudgetAction::from_json(json).unwrap();
        let expected = DraftExpense::new(
            "Coffee",
            Money::from_units(100),
            "food",
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        );
        assert_eq!(action, BudgetAction::add_expense(expected));
        assert_eq!(action.tag(), "add-expense");
    }

    #[test]
    fn test_parse_reset() {
        let action = BudgetAction::from_json(r#"{"type": "reset-app"}"#).unwrap();
        assert_eq!(action, BudgetAction::ResetApp);
        assert_eq!(action.to_json().unwrap(), r#"{"type":"reset-app"}"#);
    }

    #[test]
    fn test_unknown_tag_is_rejected() {
        let err = BudgetAction::from_json(r#"{"type": "remove-expense", "payload": {}}"#)
            .unwrap_err();
        assert!(matches!(err, TrackerError::UnknownAction(ref t) if t == "remove-expense"));
    }

    #[test]
    fn test_missing_tag_is_rejected() {
        let err = BudgetAction::from_json(r#"{"payload": {}}"#).unwrap_err();
        assert!(matches!(err, TrackerError::Json(_)));
    }

    #[test]
    fn test_malformed_payload_is_rejected() {
        let err = BudgetAction::from_json(r#"{"type": "add-expense", "payload": {"expense": {}}}"#)
            .unwrap_err();
        assert!(matches!(err, TrackerError::Json(_)));
    }
}
