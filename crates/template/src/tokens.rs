//! Token grammar
//!
//! The grammar is fixed: a flat token is `#{field}`, a table region is
//! delimited by `<iterator(field)>` / `</iterator(field)>`. Tokens are
//! matched as literal substrings after removing all space characters
//! from the scanned text.

/// Placeholder substituted by the field name in the patterns below
pub const FIELD_NAME: &str = "fieldName";

/// Flat token pattern
pub const GENERAL_TEMPLATE: &str = "#{fieldName}";

/// Table region start marker pattern
pub const TABLE_TEMPLATE_START: &str = "<iterator(fieldName)>";

/// Table region end marker pattern
pub const TABLE_TEMPLATE_END: &str = "</iterator(fieldName)>";

/// Flat token for a field, e.g. `#{name}`
pub fn general_token(field: &str) -> String {
    GENERAL_TEMPLATE.replace(FIELD_NAME, field)
}

/// Table start marker for a field, e.g. `<iterator(items)>`
pub fn table_start_marker(field: &str) -> String {
    TABLE_TEMPLATE_START.replace(FIELD_NAME, field)
}

/// Table end marker for a field, e.g. `</iterator(items)>`
pub fn table_end_marker(field: &str) -> String {
    TABLE_TEMPLATE_END.replace(FIELD_NAME, field)
}

/// Remove all space characters (U+0020 only) before token matching
pub fn strip_spaces(text: &str) -> String {
    text.replace(' ', "")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_general_token() {
        assert_eq!(general_token("name"), "#{name}");
    }

    #[test]
    fn test_table_markers() {
        assert_eq!(table_start_marker("items"), "<iterator(items)>");
        assert_eq!(table_end_marker("items"), "</iterator(items)>");
    }

    #[test]
    fn test_strip_spaces() {
        assert_eq!(strip_spaces("#{ na me }"), "#{name}");
        // Only U+0020 is stripped, not other whitespace
        assert_eq!(strip_spaces("a\tb c"), "a\tbc");
    }
}
