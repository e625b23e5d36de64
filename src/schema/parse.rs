//! Parse boundary: raw editor text to a validated schema

use super::model::FormSchema;
use std::collections::HashSet;
use thiserror::Error;

/// Why editor text failed to become a schema
#[derive(Debug, Error)]
pub enum SchemaError {
    /// The text is not well-formed JSON
    #[error("invalid JSON: {0}")]
    Syntax(#[source] serde_json::Error),
    /// Well-formed JSON that does not have the FormSchema shape
    #[error("not a form schema: {0}")]
    Shape(#[source] serde_json::Error),
    /// Field ids must be unique within a schema
    #[error("duplicate field id `{0}`")]
    DuplicateId(String),
}

/// Parse editor text into a schema.
///
/// Runs in two stages so malformed JSON and wrong-shape documents
/// surface as distinct errors on the editor banner.
pub fn parse_schema(text: &str) -> Result<FormSchema, SchemaError> {
    let value: serde_json::Value = serde_json::from_str(text).map_err(SchemaError::Syntax)?;
    let schema: FormSchema = serde_json::from_value(value).map_err(SchemaError::Shape)?;

    let mut seen: HashSet<&str> = HashSet::new();
    for field in &schema.fields {
        if !seen.insert(field.id.as_str()) {
            let id = field.id.clone();
            return Err(SchemaError::DuplicateId(id));
        }
    }

    Ok(schema)
}
