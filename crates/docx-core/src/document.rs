//! Document body: ordered paragraphs and tables

use crate::paragraph::Paragraph;
use crate::table::Table;
use crate::Result;
use serde::{Deserialize, Serialize};

/// A Word document body.
///
/// Holds the ordered paragraphs and tables of the body. The model is
/// mutated in place by template filling and is not synchronized; callers
/// must serialize access to a given instance.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Body paragraphs, in document order
    #[serde(default)]
    pub paragraphs: Vec<Paragraph>,

    /// Body tables, in document order
    #[serde(default)]
    pub tables: Vec<Table>,
}

impl Document {
    /// Create an empty document body
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a document body from its JSON representation
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize the document body to JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Append a paragraph to the body
    pub fn add_paragraph(&mut self, paragraph: Paragraph) -> &mut Paragraph {
        let index = self.paragraphs.len();
        self.paragraphs.push(paragraph);
        &mut self.paragraphs[index]
    }

    /// Append a table to the body
    pub fn add_table(&mut self, table: Table) -> &mut Table {
        let index = self.tables.len();
        self.tables.push(table);
        &mut self.tables[index]
    }

    /// Paragraphs in document order
    pub fn paragraphs(&self) -> &[Paragraph] {
        &self.paragraphs
    }

    /// Mutable view of the paragraphs
    pub fn paragraphs_mut(&mut self) -> &mut [Paragraph] {
        &mut self.paragraphs
    }

    /// Tables in document order
    pub fn tables(&self) -> &[Table] {
        &self.tables
    }

    /// Mutable view of the tables
    pub fn tables_mut(&mut self) -> &mut [Table] {
        &mut self.tables
    }

    /// Full text of the body: paragraph texts followed by table texts,
    /// one line per paragraph
    pub fn text(&self) -> String {
        let mut parts: Vec<String> = self.paragraphs.iter().map(|p| p.text()).collect();
        parts.extend(self.tables.iter().map(|t| t.text()));
        parts.join("\n")
    }
}
