//! Field validation rules

use crate::schema::ValidationRule;
use regex::Regex;

/// Message shown for an empty required field
pub const REQUIRED_MESSAGE: &str = "This field is required";

/// A compiled pattern rule. Matching is full-string: the pattern is
/// anchored as `^(?:pat)$` at compile time.
#[derive(Debug, Clone)]
pub struct CompiledRule {
    regex: Regex,
    message: String,
}

impl CompiledRule {
    /// Compile a schema validation rule.
    ///
    /// Returns None when the pattern is not a valid regular expression;
    /// the field then carries no pattern constraint.
    pub fn compile(rule: &ValidationRule) -> Option<Self> {
        let anchored = format!("^(?:{})$", rule.pattern);
        match Regex::new(&anchored) {
            Ok(regex) => Some(Self {
                regex,
                message: rule.message.clone(),
            }),
            Err(err) => {
                tracing::debug!(pattern = %rule.pattern, %err, "ignoring unparsable pattern");
                None
            }
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Empty values pass; emptiness is the required rule's concern
    pub fn matches(&self, value: &str) -> bool {
        value.is_empty() || self.regex.is_match(value)
    }
}

/// Validate one field value. The required check takes precedence over
/// the pattern check; the first failure is the field's message.
pub fn validate_value(
    value: &str,
    required: bool,
    rule: Option<&CompiledRule>,
) -> Option<String> {
    if required && value.is_empty() {
        return Some(REQUIRED_MESSAGE.to_string());
    }
    if let Some(rule) = rule {
        if !rule.matches(value) {
            return Some(rule.message().to_string());
        }
    }
    None
}
