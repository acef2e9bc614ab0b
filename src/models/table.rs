use serde::Serialize;

/// A table extracted from HTML embedded in an upstream payload.
///
/// All cells are opaque text at this layer; numeric interpretation happens
/// later, per cell, in the consuming display logic.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ParsedTable {
    /// Column header texts, possibly empty when the table had no header row.
    pub headers: Vec<String>,
    /// Body rows in document order; each row's cells in document order.
    pub rows: Vec<Vec<String>>,
}
