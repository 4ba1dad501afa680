//! Budget summary formatting
//!
//! The three headline amounts: Budget, Available and Spent.

use crate::config::Settings;
use crate::state::BudgetSummary;

/// Format the headline totals, one per line
pub fn format_summary(summary: &BudgetSummary, settings: &Settings) -> String {
    let rows = [
        ("Budget", summary.budget),
        ("Available", summary.available),
        ("Spent", summary.spent),
    ];

    let mut output = String::new();
    for (label, amount) in rows {
        output.push_str(&format!(
            "{:<10} {:>12}\n",
            format!("{}:", label),
            settings.format_money(amount)
        ));
    }

    if summary.available.is_negative() {
        output.push_str("Over budget!\n");
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;

    #[test]
    fn test_format_summary() {
        let summary = BudgetSummary {
            budget: Money::from_units(300),
            spent: Money::from_units(100),
            available: Money::from_units(200),
        };
        let output = format_summary(&summary, &Settings::default());

        assert!(output.contains("Budget:"));
        assert!(output.contains("$300.00"));
        assert!(output.contains("Available:"));
        assert!(output.contains("$200.00"));
        assert!(!output.contains("Over budget"));
    }

    #[test]
    fn test_overspent_is_flagged() {
        let summary = BudgetSummary {
            budget: Money::from_units(10),
            spent: Money::from_units(15),
            available: Money::from_units(-5),
        };
        let output = format_summary(&summary, &Settings::default());
        assert!(output.contains("-$5.00"));
        assert!(output.contains("Over budget!"));
    }
}
