//! Docx Core - In-memory Word document body model
//!
//! This crate provides a mutable model of a Word document body:
//! - Paragraphs made of runs, each run an ordered list of text fragments
//! - Tables made of rows, each row an ordered list of cells
//! - Row/cell creation and removal, text get/set on runs and cells
//! - JSON serialization of the whole body (serde)
//!
//! Opening or saving the OOXML container is out of scope; hosts build a
//! `Document` programmatically or load one from JSON.
//!
//! # Example
//!
//! ```
//! use docx_core::{Document, Paragraph, Table, TableRow};
//!
//! let mut doc = Document::new();
//! doc.add_paragraph(Paragraph::with_text("Dear #{name},"));
//!
//! let mut table = Table::new();
//! table.add_row(TableRow::with_cells(["#{title}", "#{qty}"]));
//! doc.add_table(table);
//! ```

mod document;
mod paragraph;
mod table;

pub use document::Document;
pub use paragraph::{Paragraph, Run};
pub use table::{Table, TableCell, TableRow};

use thiserror::Error;

/// Errors that can occur during document model operations
#[derive(Debug, Error)]
pub enum DocxError {
    #[error("Row index {0} out of range (table has {1} rows)")]
    RowOutOfRange(usize, usize),

    #[error("Text fragment {0} out of range (run has {1} fragments)")]
    FragmentOutOfRange(usize, usize),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Result type for document model operations
pub type Result<T> = std::result::Result<T, DocxError>;
