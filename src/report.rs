//! Table rendering for the presentation layer.
//!
//! Turns a summary into the three-column (Index, Statistic, Value) text
//! table, one row per statistic in fixed order, and formats error text.

use std::fmt::Write;

use colored::Colorize;

use crate::types::{ParseError, StatsSummary};

/// Renders the summary as an aligned text table.
#[must_use]
pub fn render_table(summary: &StatsSummary) -> String {
    let header = format!("{:>5}  {:<16}{:>14}", "Index", "Statistic", "Value");
    let width = header.len();

    let mut out = String::new();
    let _ = writeln!(out, "{}", header.bold());
    let _ = writeln!(out, "{}", "-".repeat(width).dimmed());

    for (i, row) in summary.rows().iter().enumerate() {
        let _ = writeln!(out, "{:>5}  {:<16}{:>14}", i + 1, row.label, row.value);
    }

    out
}

/// Formats a parse error as a short one-line message.
#[must_use]
pub fn render_error(err: &ParseError) -> String {
    format!("{} {err}", "error:".red().bold())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::compute;

    #[test]
    fn table_has_header_separator_and_eight_rows() {
        colored::control::set_override(false);
        let summary = compute("1,2,3,4").unwrap();
        let table = render_table(&summary);
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 10);
        assert!(lines[0].contains("Statistic"));
        assert!(lines[2].contains("Sum"));
        assert!(lines[9].contains("Range"));
    }

    #[test]
    fn table_rows_are_indexed_from_one() {
        colored::control::set_override(false);
        let summary = compute("5").unwrap();
        let table = render_table(&summary);

        let first_row = table.lines().nth(2).unwrap();
        assert!(first_row.trim_start().starts_with('1'));
        let last_row = table.lines().nth(9).unwrap();
        assert!(last_row.trim_start().starts_with('8'));
    }

    #[test]
    fn error_message_is_one_line() {
        colored::control::set_override(false);
        let msg = render_error(&ParseError { delimiter: ',' });
        assert_eq!(msg.lines().count(), 1);
        assert!(msg.contains("numbers separated by ','"));
    }
}
