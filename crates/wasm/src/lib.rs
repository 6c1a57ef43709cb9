//! WASM bindings for docxfill
//!
//! This crate provides a JavaScript-friendly API for:
//! - Loading a document body from JSON
//! - Filling flat and table templates with a JS data object
//! - Reading the filled body back as JSON or plain text
//!
//! # Example (JavaScript)
//!
//! ```javascript
//! import init, { DocxTemplate } from 'docxfill-wasm';
//!
//! await init();
//!
//! const template = DocxTemplate.fromJson(documentJson);
//! template.fill({ name: "Alice", items: [{ title: "A", qty: "1" }] });
//! const filled = template.toJson();
//! ```

use docx_core::Document;
use wasm_bindgen::prelude::*;

// Initialize panic hook for better error messages in browser console
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// A document body with template tokens, ready for filling
#[wasm_bindgen]
pub struct DocxTemplate {
    document: Document,
}

#[wasm_bindgen]
impl DocxTemplate {
    /// Load a document body from its JSON representation
    ///
    /// @param json - Document body JSON (paragraphs and tables)
    /// @returns DocxTemplate instance
    #[wasm_bindgen(js_name = fromJson)]
    pub fn from_json(json: &str) -> Result<DocxTemplate, JsValue> {
        let document =
            Document::from_json(json).map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(DocxTemplate { document })
    }

    /// Fill all templates in place from a data object
    ///
    /// Scalar fields must be strings; collection fields must be arrays of
    /// objects with string fields.
    ///
    /// @param data - Data object (plain JS object)
    pub fn fill(&mut self, data: JsValue) -> Result<(), JsValue> {
        let data: serde_json::Value =
            serde_wasm_bindgen::from_value(data).map_err(|e| JsValue::from_str(&e.to_string()))?;
        template::fill_templates_value(&data, &mut self.document)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Serialize the (possibly filled) document body to JSON
    ///
    /// @returns Document body JSON
    #[wasm_bindgen(js_name = toJson)]
    pub fn to_json(&self) -> Result<String, JsValue> {
        self.document
            .to_json()
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Plain text of the document body, for previews
    ///
    /// @returns Body text, one line per paragraph or table row
    pub fn text(&self) -> String {
        self.document.text()
    }
}
