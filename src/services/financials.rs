//! Financial-statement extraction.
//!
//! The statement endpoint returns JSON with the actual statement embedded as
//! an HTML table string. Extraction finds that string and parses it into
//! generic tables; display formatting then treats the first column as a
//! label and suffix-scales any purely numeric cell.

use regex::Regex;
use serde_json::Value;

use crate::models::ParsedTable;
use crate::services::html_table::{locate_embedded_html, parse_html_tables};
use crate::utils::{format_magnitude, parse_display_str};

/// Pull every statement table out of a raw response. A payload with no
/// embedded HTML is a valid, empty result — not an error.
pub fn extract_statement_tables(response: &Value) -> Vec<ParsedTable> {
    match locate_embedded_html(response) {
        Some(html) => parse_html_tables(html),
        None => Vec::new(),
    }
}

/// Format one statement cell for display.
///
/// Column 0 is the account label and passes through verbatim. Other columns
/// follow the parse-or-passthrough rule: a purely numeric cell (optional
/// sign, comma grouping, optional decimals) is suffix-scaled, anything else
/// comes back unchanged.
pub fn format_statement_cell(column: usize, text: &str) -> String {
    if column == 0 {
        return text.to_string();
    }
    let numeric = Regex::new(r"^[+-]?\d[\d,]*(\.\d+)?$").unwrap();
    let trimmed = text.trim();
    if numeric.is_match(trimmed) {
        format_magnitude(parse_display_str(trimmed))
    } else {
        text.to_string()
    }
}

/// Apply [`format_statement_cell`] across a whole table, headers untouched.
pub fn format_statement_table(table: &ParsedTable) -> ParsedTable {
    ParsedTable {
        headers: table.headers.clone(),
        rows: table
            .rows
            .iter()
            .map(|row| {
                row.iter()
                    .enumerate()
                    .map(|(column, cell)| format_statement_cell(column, cell))
                    .collect()
            })
            .collect(),
    }
}
