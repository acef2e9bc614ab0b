//! Generic HTML-table extraction.
//!
//! The financial-statement endpoint buries a full HTML table as a string
//! value inside an otherwise-JSON payload, at an unstable position. The
//! locator walks the document generically instead of special-casing the
//! schema; the parser turns the HTML into schema-less rows of text.

use scraper::{ElementRef, Html, Selector};
use serde_json::Value;

use crate::models::ParsedTable;

const HTML_MARKERS: [&str; 3] = ["<table", "<tr", "<td"];

/// Depth-first search for the first string leaf that looks like it carries
/// HTML table markup.
///
/// Objects are walked in key insertion order, arrays in index order. When a
/// payload contains more than one HTML-bearing string this returns *some*
/// match, not a canonical one — upstream key order carries no meaning.
pub fn locate_embedded_html(node: &Value) -> Option<&str> {
    match node {
        Value::String(text) => {
            if HTML_MARKERS.iter().any(|marker| text.contains(marker)) {
                Some(text.as_str())
            } else {
                None
            }
        }
        Value::Array(items) => items.iter().find_map(locate_embedded_html),
        Value::Object(map) => map.values().find_map(locate_embedded_html),
        _ => None,
    }
}

/// Parse every `<table>` in the text into a [`ParsedTable`].
///
/// Header cells come from a `<thead><tr>` when present, else from the
/// table's first `<tr>`. Body rows come from `<tbody>` rows when any exist;
/// otherwise all rows are used minus the one consumed as the header. Rows
/// with no non-empty cell are dropped, and a table contributing neither
/// headers nor rows is omitted entirely.
pub fn parse_html_tables(html: &str) -> Vec<ParsedTable> {
    let document = Html::parse_document(html);
    let table_sel = Selector::parse("table").unwrap();
    let thead_tr_sel = Selector::parse("thead tr").unwrap();
    let tbody_tr_sel = Selector::parse("tbody tr").unwrap();
    let tr_sel = Selector::parse("tr").unwrap();
    let cell_sel = Selector::parse("td, th").unwrap();

    let mut tables = Vec::new();

    for table in document.select(&table_sel) {
        let mut headers = Vec::new();
        let mut header_row_id = None;

        if let Some(head_row) = table.select(&thead_tr_sel).next() {
            headers = row_cells(head_row, &cell_sel);
            header_row_id = Some(head_row.id());
        } else if let Some(first_row) = table.select(&tr_sel).next() {
            headers = row_cells(first_row, &cell_sel);
            header_row_id = Some(first_row.id());
        }

        // The HTML5 parser wraps bare rows in an implied <tbody>, so rows
        // that were loose in the source still show up here; the row already
        // consumed as the header is excluded either way.
        let in_tbody: Vec<ElementRef> = table.select(&tbody_tr_sel).collect();
        let candidates: Vec<ElementRef> = if in_tbody.is_empty() {
            table.select(&tr_sel).collect()
        } else {
            in_tbody
        };

        let mut rows = Vec::new();
        for row in candidates {
            if Some(row.id()) == header_row_id {
                continue;
            }
            let cells = row_cells(row, &cell_sel);
            if cells.iter().any(|cell| !cell.is_empty()) {
                rows.push(cells);
            }
        }

        if headers.is_empty() && rows.is_empty() {
            continue;
        }
        tables.push(ParsedTable { headers, rows });
    }

    tables
}

fn row_cells(row: ElementRef, cell_sel: &Selector) -> Vec<String> {
    row.select(cell_sel)
        .map(|cell| cell.text().collect::<String>().trim().to_string())
        .collect()
}
