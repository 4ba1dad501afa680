//! Expense categories
//!
//! The category set is fixed: the form offers these entries and expenses
//! refer to them by `id`.

use serde::Serialize;
use std::fmt;

/// A spending category an expense can be filed under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Category {
    /// Stable identifier stored on expenses
    pub id: &'static str,
    /// Human-readable name shown in selectors
    pub name: &'static str,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Every category the tracker knows, in selector order
pub const CATEGORIES: &[Category] = &[
    Category { id: "savings", name: "Savings" },
    Category { id: "food", name: "Food" },
    Category { id: "home", name: "Home" },
    Category { id: "expenses", name: "Miscellaneous Expenses" },
    Category { id: "leisure", name: "Leisure" },
    Category { id: "health", name: "Health" },
    Category { id: "subscriptions", name: "Subscriptions" },
];

/// Look up a category by id (case-insensitive)
pub fn find_category(id: &str) -> Option<&'static Category> {
    let id = id.trim();
    CATEGORIES.iter().find(|c| c.id.eq_ignore_ascii_case(id))
}

/// Display name for a category id, falling back to the raw id
pub fn category_name(id: &str) -> &str {
    find_category(id).map(|c| c.name).unwrap_or(id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_unique() {
        for (i, a) in CATEGORIES.iter().enumerate() {
            for b in &CATEGORIES[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
    }

    #[test]
    fn test_find_category() {
        assert_eq!(find_category("food").map(|c| c.name), Some("Food"));
        assert_eq!(find_category(" FOOD ").map(|c| c.id), Some("food"));
        assert!(find_category("travel").is_none());
    }

    #[test]
    fn test_category_name_fallback() {
        assert_eq!(category_name("health"), "Health");
        assert_eq!(category_name("travel"), "travel");
    }
}
