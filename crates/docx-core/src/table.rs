//! Tables, rows and cells

use crate::{DocxError, Result};
use serde::{Deserialize, Serialize};

/// A table: an ordered sequence of rows
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Table {
    /// Rows in table order
    #[serde(default)]
    pub rows: Vec<TableRow>,
}

impl Table {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a prepared row to the table
    pub fn add_row(&mut self, row: TableRow) -> &mut TableRow {
        let index = self.rows.len();
        self.rows.push(row);
        &mut self.rows[index]
    }

    /// Append a fresh row.
    ///
    /// The new row clones the cell shape of the current last row (same
    /// number of cells, all empty). On an empty table the new row has no
    /// cells. This mirrors how Word table rows inherit the grid of the
    /// row above them.
    pub fn create_row(&mut self) -> &mut TableRow {
        let width = self.rows.last().map_or(0, |r| r.cells.len());
        let index = self.rows.len();
        self.rows.push(TableRow {
            cells: vec![TableCell::default(); width],
        });
        &mut self.rows[index]
    }

    /// Remove the row at `index`
    pub fn remove_row(&mut self, index: usize) -> Result<()> {
        if index >= self.rows.len() {
            return Err(DocxError::RowOutOfRange(index, self.rows.len()));
        }
        self.rows.remove(index);
        Ok(())
    }

    /// Rows in table order
    pub fn rows(&self) -> &[TableRow] {
        &self.rows
    }

    /// Mutable view of the rows
    pub fn rows_mut(&mut self) -> &mut [TableRow] {
        &mut self.rows
    }

    /// Row at `index`, if present
    pub fn row(&self, index: usize) -> Option<&TableRow> {
        self.rows.get(index)
    }

    /// Full text of the table: cells joined by tabs, rows by newlines
    pub fn text(&self) -> String {
        self.rows
            .iter()
            .map(|r| r.text())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// A table row: an ordered sequence of cells
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TableRow {
    /// Cells in row order
    #[serde(default)]
    pub cells: Vec<TableCell>,
}

impl TableRow {
    /// Create an empty row
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a row from cell texts
    pub fn with_cells<I, S>(texts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            cells: texts.into_iter().map(TableCell::new).collect(),
        }
    }

    /// Append an empty cell to the row
    pub fn create_cell(&mut self) -> &mut TableCell {
        let index = self.cells.len();
        self.cells.push(TableCell::default());
        &mut self.cells[index]
    }

    /// Cells in row order
    pub fn cells(&self) -> &[TableCell] {
        &self.cells
    }

    /// Cell at `index`, if present
    pub fn cell(&self, index: usize) -> Option<&TableCell> {
        self.cells.get(index)
    }

    /// Mutable cell at `index`, if present
    pub fn cell_mut(&mut self, index: usize) -> Option<&mut TableCell> {
        self.cells.get_mut(index)
    }

    /// Cell texts joined by tabs
    pub fn text(&self) -> String {
        self.cells
            .iter()
            .map(|c| c.text.as_str())
            .collect::<Vec<_>>()
            .join("\t")
    }
}

/// A table cell holding plain text
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TableCell {
    /// Cell text
    #[serde(default)]
    pub text: String,
}

impl TableCell {
    /// Create a cell with the given text
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Cell text
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replace the cell text
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }
}
