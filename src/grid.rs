//! The editable table state.
//!
//! [`Grid`] owns the headers and rows and exposes the structural mutations.
//! It maintains two invariants at all times:
//! - every row has exactly `column_count()` cells, and
//! - there is always at least one column and at least one row.
//!
//! All operations are total: removing the last remaining column or row is a
//! guarded no-op, and bulk replacement normalizes ragged input before
//! committing.

/// The editable table: one header per column plus the data rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Grid {
    /// Create the default minimal grid: one header (`"Header 1"`) and one
    /// empty cell.
    pub fn new() -> Self {
        Self {
            headers: vec!["Header 1".to_string()],
            rows: vec![vec![String::new()]],
        }
    }

    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn header(&self, col: usize) -> &str {
        &self.headers[col]
    }

    pub fn cell(&self, row: usize, col: usize) -> &str {
        &self.rows[row][col]
    }

    /// Append a column: a default header label and an empty cell in every row.
    pub fn add_column(&mut self) {
        self.headers.push(format!("Header {}", self.headers.len() + 1));
        for row in &mut self.rows {
            row.push(String::new());
        }
    }

    /// Drop the last column. No-op when only one column remains.
    pub fn remove_column(&mut self) {
        if self.headers.len() > 1 {
            self.headers.pop();
            for row in &mut self.rows {
                row.pop();
            }
        }
    }

    /// Append a row of empty cells.
    pub fn add_row(&mut self) {
        self.rows.push(vec![String::new(); self.headers.len()]);
    }

    /// Drop the last row. No-op when only one row remains.
    pub fn remove_row(&mut self) {
        if self.rows.len() > 1 {
            self.rows.pop();
        }
    }

    /// Reset to the default minimal grid, discarding all content.
    pub fn clear(&mut self) {
        *self = Self::new();
    }

    /// Replace the content of one cell. Indices out of range are a caller
    /// bug and panic.
    pub fn set_cell(&mut self, row: usize, col: usize, value: impl Into<String>) {
        self.rows[row][col] = value.into();
    }

    /// Replace one header label. Index out of range is a caller bug and
    /// panics.
    pub fn set_header(&mut self, col: usize, value: impl Into<String>) {
        self.headers[col] = value.into();
    }

    /// Bulk-replace the grid from imported data.
    ///
    /// Rows are normalized to the header count: short rows are padded with
    /// empty cells, long rows truncated. When the import carries no header
    /// row, headers default to empty labels sized to the widest data row.
    /// Degenerate input (no columns at all) falls back to the minimal grid.
    pub fn replace(&mut self, headers: Vec<String>, rows: Vec<Vec<String>>) {
        let mut headers = headers;
        if headers.is_empty() {
            let width = rows.iter().map(Vec::len).max().unwrap_or(0);
            headers = vec![String::new(); width];
        }
        if headers.is_empty() {
            self.clear();
            return;
        }

        let width = headers.len();
        let mut rows = rows;
        for row in &mut rows {
            row.resize(width, String::new());
        }
        if rows.is_empty() {
            rows.push(vec![String::new(); width]);
        }

        self.headers = headers;
        self.rows = rows;
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}
