//! Category CLI command

use crate::display::format_category_list;
use crate::error::TrackerResult;
use crate::models::CATEGORIES;

/// Handle `budget-tracker categories`
pub fn handle_categories_command() -> TrackerResult<()> {
    print!("{}", format_category_list(CATEGORIES));
    Ok(())
}
