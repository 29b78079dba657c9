use comfy_table::presets::UTF8_FULL;
use comfy_table::{ContentArrangement, Table};

use crate::store::User;

/// Build the tabular rendering of the user list. The caller prints it via
/// `Display`; an empty slice yields a header-only table, but the command
/// loop reports "No data..." instead of rendering one.
pub fn users_table(users: &[User]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["NAME", "AGE"]);
    for user in users {
        table.add_row(vec![user.name.clone(), user.age.to_string()]);
    }
    table
}
