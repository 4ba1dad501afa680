//! Category list formatting

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::Category;

#[derive(Tabled)]
struct CategoryRow {
    #[tabled(rename = "ID")]
    id: &'static str,
    #[tabled(rename = "Category")]
    name: &'static str,
}

/// Format the category list as a two-column table
pub fn format_category_list(categories: &[Category]) -> String {
    if categories.is_empty() {
        return "No categories found.\n".to_string();
    }

    let mut table = Table::new(categories.iter().map(|c| CategoryRow {
        id: c.id,
        name: c.name,
    }));
    table.with(Style::rounded());
    format!("{}\n", table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CATEGORIES;

    #[test]
    fn test_lists_every_category() {
        let output = format_category_list(CATEGORIES);
        for category in CATEGORIES {
            assert!(output.contains(category.id));
            assert!(output.contains(category.name));
        }
    }
}
