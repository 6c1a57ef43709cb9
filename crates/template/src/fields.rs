//! Field introspection over serialized entities
//!
//! An entity's field schema is its serde serialization: a JSON object
//! whose entries are the declared (name, value) pairs. Array values are
//! collection fields driving table expansion; everything else is a
//! scalar candidate for flat substitution.

use crate::{Result, TemplateError};
use serde_json::{Map, Value};

/// Classification of a field for the two substitution passes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Flat substitution candidate
    Scalar,
    /// Table expansion candidate
    Collection,
}

/// Classify a field by its value shape
pub fn classify(value: &Value) -> FieldKind {
    if value.is_array() {
        FieldKind::Collection
    } else {
        FieldKind::Scalar
    }
}

/// JSON type name for error messages
pub fn value_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// The string value of a scalar field, or `TypeMismatch` naming the field
pub fn as_text<'a>(field: &str, value: &'a Value) -> Result<&'a str> {
    value.as_str().ok_or_else(|| TemplateError::TypeMismatch {
        field: field.to_string(),
        actual: value_type_name(value),
    })
}

/// The object entries of a collection element, or `NotTemplatable`
pub fn as_entity(value: &Value) -> Result<&Map<String, Value>> {
    value
        .as_object()
        .ok_or(TemplateError::NotTemplatable(value_type_name(value)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_classify() {
        assert_eq!(classify(&json!("a")), FieldKind::Scalar);
        assert_eq!(classify(&json!(42)), FieldKind::Scalar);
        assert_eq!(classify(&json!({"k": "v"})), FieldKind::Scalar);
        assert_eq!(classify(&json!(["a", "b"])), FieldKind::Collection);
        assert_eq!(classify(&json!([])), FieldKind::Collection);
    }

    #[test]
    fn test_as_text() {
        assert_eq!(as_text("name", &json!("Alice")).unwrap(), "Alice");

        let err = as_text("qty", &json!(2)).unwrap_err();
        match err {
            TemplateError::TypeMismatch { field, actual } => {
                assert_eq!(field, "qty");
                assert_eq!(actual, "number");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_as_entity() {
        assert!(as_entity(&json!({"title": "A"})).is_ok());
        assert!(matches!(
            as_entity(&json!("A")).unwrap_err(),
            TemplateError::NotTemplatable("string")
        ));
    }

    #[test]
    fn test_value_type_name() {
        assert_eq!(value_type_name(&json!(null)), "null");
        assert_eq!(value_type_name(&json!(true)), "boolean");
        assert_eq!(value_type_name(&json!([1])), "array");
    }
}
