//! Table output formatting

use tabled::{
    Table, Tabled,
    settings::{Alignment, Modify, Style, Width, object::Rows},
};

/// Widest a single cell may grow before it wraps
const MAX_CELL_WIDTH: usize = 60;

/// Render records as a rounded table, or `empty_message` when there are none.
pub fn format_table<T: Tabled>(data: &[T], empty_message: &str) -> String {
    if data.is_empty() {
        return empty_message.to_string();
    }

    let mut table = Table::new(data);
    table
        .with(Style::rounded())
        .with(Modify::new(Rows::new(1..)).with(Width::wrap(MAX_CELL_WIDTH)))
        .with(Modify::new(Rows::first()).with(Alignment::center()));

    table.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Tabled)]
    struct Row {
        #[tabled(rename = "ID")]
        id: i64,
        #[tabled(rename = "OWNER")]
        owner: String,
    }

    fn row(id: i64, owner: &str) -> Row {
        Row {
            id,
            owner: owner.to_string(),
        }
    }

    #[test]
    fn test_empty_uses_caller_message() {
        let rows: Vec<Row> = vec![];
        assert_eq!(
            format_table(&rows, "No tokens found or an error occurred."),
            "No tokens found or an error occurred."
        );
    }

    #[test]
    fn test_headers_and_rows() {
        let result = format_table(&[row(12, "ivanova"), row(9, "ivanova")], "none");

        assert!(result.contains("ID"));
        assert!(result.contains("OWNER"));
        assert!(result.contains("12"));
        assert!(result.contains("9"));
        assert!(!result.contains("none"));
    }

    #[test]
    fn test_rounded_style() {
        let result = format_table(&[row(1, "petrov")], "none");
        assert!(result.contains("╭"));
        assert!(result.contains("╰"));
    }

    #[test]
    fn test_long_cells_wrap() {
        let long = "x".repeat(150);
        let result = format_table(&[row(1, &long)], "none");
        assert!(result.lines().all(|line| line.chars().count() < 150));
    }
}
