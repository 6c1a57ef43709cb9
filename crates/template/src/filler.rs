//! Template filling

use crate::fields::{self, FieldKind};
use crate::tokens;
use crate::{Result, Templatable, TemplateError};
use docx_core::{Document, Table};
use serde_json::{Map, Value};
use std::collections::HashMap;

/// Row index of the header row in a matching table (the second row).
///
/// This is part of the table-format contract: a matching table's first
/// row carries the iterator marker and its second row carries one flat
/// token per column.
pub const HEADER_ROW_INDEX: usize = 1;

/// Fill all templates in `document` from `entity`, in place.
///
/// Runs the flat pass over every paragraph run, then the table pass over
/// every table. The entity is only read; the document is mutated.
pub fn fill_templates<T: Templatable>(entity: &T, document: &mut Document) -> Result<()> {
    let data = serde_json::to_value(entity)?;
    fill_templates_value(&data, document)
}

/// Fill all templates in `document` from an already-serialized data value.
///
/// Fails with `NullData` on JSON null and `NotTemplatable` on any other
/// non-object value, before touching the document.
pub fn fill_templates_value(data: &Value, document: &mut Document) -> Result<()> {
    TemplateFiller::new(data)?.fill(document)
}

/// Template filler bound to one data object
#[derive(Debug)]
pub struct TemplateFiller<'a> {
    /// Field schema: the entity's serialized object entries
    data: &'a Map<String, Value>,
}

impl<'a> TemplateFiller<'a> {
    /// Create a filler for a serialized data value
    pub fn new(data: &'a Value) -> Result<Self> {
        match data {
            Value::Null => Err(TemplateError::NullData),
            Value::Object(map) => Ok(Self { data: map }),
            other => Err(TemplateError::NotTemplatable(fields::value_type_name(
                other,
            ))),
        }
    }

    /// Fill flat tokens, then expand tables, mutating `document` in place
    pub fn fill(&self, document: &mut Document) -> Result<()> {
        self.fill_flat(document)?;
        self.fill_tables(document)
    }

    /// Flat pass: replace `#{field}` tokens in paragraph runs.
    ///
    /// Matching is space-insensitive within a single run: the run text is
    /// copied with all spaces removed, matched, and on a hit the stripped
    /// and substituted copy is written back. Only the primary fragment of
    /// each run is scanned, and tokens split across runs are not found.
    fn fill_flat(&self, document: &mut Document) -> Result<()> {
        for (name, value) in self.data {
            let token = tokens::general_token(name);
            for paragraph in document.paragraphs_mut() {
                for run in paragraph.runs_mut() {
                    let Some(text) = run.text(0) else {
                        continue;
                    };
                    let stripped = tokens::strip_spaces(text);
                    if stripped.contains(&token) {
                        let content = fields::as_text(name, value)?;
                        run.set_text(stripped.replace(&token, content), 0)?;
                    }
                }
            }
        }
        Ok(())
    }

    /// Table pass: expand every table whose space-stripped text contains
    /// both iterator markers for a collection field. All matching tables
    /// expand independently.
    fn fill_tables(&self, document: &mut Document) -> Result<()> {
        for (name, value) in self.data {
            if fields::classify(value) != FieldKind::Collection {
                continue;
            }
            let Some(elements) = value.as_array() else {
                continue;
            };
            let start = tokens::table_start_marker(name);
            let end = tokens::table_end_marker(name);
            for table in document.tables_mut() {
                let text = tokens::strip_spaces(&table.text());
                if text.contains(&start) && text.contains(&end) {
                    expand_table(table, elements)?;
                }
            }
        }
        Ok(())
    }
}

/// Regenerate a matching table: read the header map, drop every existing
/// row, then emit one row per collection element in iteration order.
fn expand_table(table: &mut Table, elements: &[Value]) -> Result<()> {
    let name_to_index = header_index_map(table)?;

    while !table.rows().is_empty() {
        table.remove_row(0)?;
    }

    let mut first_row = true;
    for element in elements {
        let entity = fields::as_entity(element)?;
        let row = table.create_row();
        if first_row {
            // The table was cleared, so the first row starts with no
            // cells; later rows inherit this shape from create_row.
            for _ in 0..entity.len() {
                row.create_cell();
            }
            first_row = false;
        }
        for (field, value) in entity {
            let token = tokens::general_token(field);
            let index = *name_to_index
                .get(&token)
                .ok_or_else(|| TemplateError::MissingColumn {
                    field: field.clone(),
                })?;
            let len = row.cells().len();
            let cell = row
                .cell_mut(index)
                .ok_or_else(|| TemplateError::MissingCell {
                    field: field.clone(),
                    index,
                    len,
                })?;
            cell.set_text(fields::as_text(field, value)?);
        }
    }
    Ok(())
}

/// Map from literal header-cell text (a flat token) to its column index.
/// Built from the header row before the table is cleared.
fn header_index_map(table: &Table) -> Result<HashMap<String, usize>> {
    let header = table
        .row(HEADER_ROW_INDEX)
        .ok_or(TemplateError::MissingHeaderRow)?;
    Ok(header
        .cells()
        .iter()
        .enumerate()
        .map(|(i, cell)| (cell.text().to_string(), i))
        .collect())
}
