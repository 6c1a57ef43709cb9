//! Template Engine - placeholder substitution for Word document bodies
//!
//! This crate provides:
//! - The `Templatable` marker capability for fillable entities
//! - Flat token substitution (`#{field}`) across paragraph runs
//! - Table expansion (`<iterator(field)>` markers) with one row per
//!   collection element, columns aligned by the header row
//! - Data binding via serde: an entity's serialized JSON object is its
//!   field schema
//!
//! # Example
//!
//! ```ignore
//! use docx_core::Document;
//! use serde::Serialize;
//! use template::{fill_templates, Templatable};
//!
//! #[derive(Serialize)]
//! struct Letter { name: String }
//! impl Templatable for Letter {}
//!
//! let mut doc = Document::from_json(doc_json)?;
//! fill_templates(&Letter { name: "Alice".into() }, &mut doc)?;
//! ```

mod fields;
mod filler;
pub mod tokens;

pub use fields::{classify, value_type_name, FieldKind};
pub use filler::{fill_templates, fill_templates_value, TemplateFiller, HEADER_ROW_INDEX};

use serde::Serialize;
use thiserror::Error;

/// Marker capability for entities eligible as template data.
///
/// Has no methods: implementing it declares, at compile time, that the
/// type's serde serialization is its template field schema. Scalar fields
/// must serialize as JSON strings; table fields as JSON arrays of objects
/// whose own fields are strings.
pub trait Templatable: Serialize {}

/// Errors that can occur during template filling
#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("Template data is null")]
    NullData,

    #[error("Value is not templatable (expected an object, got {0})")]
    NotTemplatable(&'static str),

    #[error("Field '{field}' is not a string (got {actual})")]
    TypeMismatch {
        field: String,
        actual: &'static str,
    },

    #[error("No header column matches field '{field}'")]
    MissingColumn { field: String },

    #[error("Header maps field '{field}' to column {index}, but the row has {len} cells")]
    MissingCell {
        field: String,
        index: usize,
        len: usize,
    },

    #[error("Table matches iterator markers but has no header row at index 1")]
    MissingHeaderRow,

    #[error("Document error: {0}")]
    DocxError(#[from] docx_core::DocxError),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Result type for template operations
pub type Result<T> = std::result::Result<T, TemplateError>;
