//! Solr document representation.
//!
//! A document is a flat mapping from field name to scalar or array value,
//! the search-engine-facing projection of a record. The insertion API is
//! typed so that a field can never be set to JSON null; absent source data
//! must be coalesced before mapping.

use serde::Serialize;
use serde_json::{Map, Value};

/// A flat Solr document.
///
/// Serializes transparently as a JSON object, which is what the Solr update
/// endpoint expects as an element of its bulk array.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct SolrDocument {
    fields: Map<String, Value>,
}

impl SolrDocument {
    /// Create an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a string field.
    pub fn set_str(&mut self, field: &str, value: impl Into<String>) -> &mut Self {
        self.fields.insert(field.to_string(), Value::from(value.into()));
        self
    }

    /// Set a numeric field.
    pub fn set_f64(&mut self, field: &str, value: f64) -> &mut Self {
        self.fields.insert(field.to_string(), Value::from(value));
        self
    }

    /// Set a boolean field.
    pub fn set_bool(&mut self, field: &str, value: bool) -> &mut Self {
        self.fields.insert(field.to_string(), Value::from(value));
        self
    }

    /// Set a string-array field (used for faceting, e.g. `cat`).
    pub fn set_str_array(&mut self, field: &str, values: &[&str]) -> &mut Self {
        let array: Vec<Value> = values.iter().map(|v| Value::from(*v)).collect();
        self.fields.insert(field.to_string(), Value::Array(array));
        self
    }

    /// Get a field value, if set.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    /// Number of fields in the document.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the document has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterate over all field name/value pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.fields.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_serializes_as_flat_object() {
        let mut doc = SolrDocument::new();
        doc.set_str("id", "book-1")
            .set_f64("price", 9.99)
            .set_bool("inStock", true)
            .set_str_array("cat", &["books"]);

        let value = serde_json::to_value(&doc).unwrap();
        assert_eq!(
            value,
            json!({
                "id": "book-1",
                "price": 9.99,
                "inStock": true,
                "cat": ["books"],
            })
        );
    }

    #[test]
    fn test_no_field_is_null() {
        let mut doc = SolrDocument::new();
        doc.set_str("description", "").set_str("name", "x");

        assert!(doc.iter().all(|(_, v)| !v.is_null()));
        assert_eq!(doc.get("description"), Some(&Value::from("")));
    }
}
