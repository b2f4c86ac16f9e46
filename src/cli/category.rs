//! Category CLI command

use crate::display::format_category_choices;
use crate::error::TrackerResult;

/// Handle the `categories` command
pub fn handle_categories_command() -> TrackerResult<()> {
    print!("{}", format_category_choices());
    Ok(())
}
