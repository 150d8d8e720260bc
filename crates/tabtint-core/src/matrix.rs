//! The paired text/fill grid representing one extracted table.

/// A detected or reconstructed table: cell text plus per-cell fill colors.
///
/// `rows` and `fills` always have the same dimensions after
/// [`pad_rectangular`](TableMatrix::pad_rectangular): one fill entry per
/// text cell, `None` meaning the cell carries no highlight.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TableMatrix {
    /// Identifies the table: page index, detection method, ordinal.
    pub title: String,
    /// Cell text, row-major.
    pub rows: Vec<Vec<String>>,
    /// Per-cell fill color codes (`FFrrggbb`), aligned with `rows`.
    pub fills: Vec<Vec<Option<String>>>,
}

impl TableMatrix {
    pub fn new(title: String, rows: Vec<Vec<String>>, fills: Vec<Vec<Option<String>>>) -> Self {
        let mut matrix = Self { title, rows, fills };
        matrix.pad_rectangular();
        matrix
    }

    /// Number of rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns (maximum row length).
    pub fn col_count(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// Pad jagged rows so both grids are rectangular and aligned.
    ///
    /// Text rows are padded with empty strings, fill rows with `None`, up to
    /// the maximum column count; missing fill rows are appended so that
    /// `fills` always has one row per text row.
    pub fn pad_rectangular(&mut self) {
        while self.fills.len() < self.rows.len() {
            self.fills.push(Vec::new());
        }
        self.fills.truncate(self.rows.len());

        let cols = self.col_count();
        for row in &mut self.rows {
            row.resize(cols, String::new());
        }
        for row in &mut self.fills {
            row.resize(cols, None);
        }
    }
}
