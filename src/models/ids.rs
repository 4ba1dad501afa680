//! Expense identifiers
//!
//! A newtype over uuid so expense ids cannot be mixed up with other uuids.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Identifier of a recorded expense
///
/// Displayed as `exp-` followed by the first eight hex digits of the uuid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExpenseId(Uuid);

impl ExpenseId {
    pub const DISPLAY_PREFIX: &'static str = "exp-";

    /// Create a new random ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for ExpenseId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ExpenseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hex = self.0.simple().to_string();
        write!(f, "{}{}", Self::DISPLAY_PREFIX, &hex[..8])
    }
}

/// Accepts a full uuid, with or without the display prefix
impl FromStr for ExpenseId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.strip_prefix(Self::DISPLAY_PREFIX).unwrap_or(s);
        Uuid::parse_str(s).map(Self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expense_id_creation() {
        let id = ExpenseId::new();
        assert!(!id.as_uuid().is_nil());
        assert_ne!(id, ExpenseId::new());
    }

    #[test]
    fn test_id_display() {
        let id = ExpenseId::from_uuid(Uuid::from_u128(0xabcdef12_0000_0000_0000_000000000000));
        assert_eq!(id.to_string(), "exp-abcdef12");
    }

    #[test]
    fn test_id_parse_with_prefix() {
        let uuid_str = "550e8400-e29b-41d4-a716-446655440000";
        let plain: ExpenseId = uuid_str.parse().unwrap();
        let prefixed: ExpenseId = format!("exp-{uuid_str}").parse().unwrap();
        assert_eq!(plain, prefixed);
        assert_eq!(plain.as_uuid().to_string(), uuid_str);
    }
}
