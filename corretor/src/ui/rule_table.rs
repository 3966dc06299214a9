//! Tabular rendering of stored rules.

use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, ContentArrangement, Table};

use corretor_core::Rule;

pub fn render_rules(rules: &[Rule]) -> String {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["ID", "Wrong", "Right", "Notes", "Created at"]);

    for rule in rules {
        table.add_row(vec![
            Cell::new(rule.id),
            Cell::new(&rule.wrong),
            Cell::new(&rule.right),
            Cell::new(&rule.notes),
            Cell::new(rule.created_at.format("%Y-%m-%d %H:%M:%S")),
        ]);
    }

    table.to_string()
}
