//! Output formatting for CLI commands.

use comfy_table::{Cell, Color, ContentArrangement, Table};
use netgraph_common::{NO_PATH, Weight};

/// Output format selection.
#[derive(Clone, Copy)]
pub enum Format {
    Table,
    Json,
}

impl From<crate::OutputFormat> for Format {
    fn from(f: crate::OutputFormat) -> Self {
        match f {
            crate::OutputFormat::Table => Format::Table,
            crate::OutputFormat::Json => Format::Json,
        }
    }
}

/// Create a styled table with consistent formatting.
pub fn create_table() -> Table {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.load_preset(comfy_table::presets::UTF8_FULL_CONDENSED);
    table
}

/// Add a header row to a table.
pub fn add_header(table: &mut Table, headers: &[&str]) {
    table.set_header(
        headers
            .iter()
            .map(|h| Cell::new(h).fg(Color::Cyan))
            .collect::<Vec<_>>(),
    );
}

/// Print a key-value table (for info displays). JSON output is handled by
/// each command's own serializable report.
pub fn print_key_value_table(items: &[(&str, String)], quiet: bool) {
    if quiet {
        return;
    }

    let mut table = create_table();
    add_header(&mut table, &["Property", "Value"]);
    for (key, value) in items {
        table.add_row(vec![Cell::new(key).fg(Color::Green), Cell::new(value)]);
    }
    println!("{table}");
}

/// Render a node path the way the result tables show it.
pub fn render_path(path: &[String]) -> String {
    if path.is_empty() {
        "no path".to_string()
    } else {
        path.join(" → ")
    }
}

/// Render a total weight; the no-path sentinel prints as infinity.
pub fn render_weight(weight: Weight) -> String {
    if weight == NO_PATH {
        "∞".to_string()
    } else {
        format!("{weight}")
    }
}

/// Print a success message.
pub fn success(msg: &str, quiet: bool) {
    if !quiet {
        println!("✓ {msg}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_path() {
        assert_eq!(render_path(&[]), "no path");
        assert_eq!(
            render_path(&["A".to_string(), "B".to_string()]),
            "A → B"
        );
    }

    #[test]
    fn test_render_weight_sentinel() {
        assert_eq!(render_weight(5.0), "5");
        assert_eq!(render_weight(NO_PATH), "∞");
    }
}
