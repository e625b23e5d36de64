//! Per-field live input state

use crate::schema::{FieldType, FormField};
use crate::validate::{self, CompiledRule};

/// Live input for one field
#[derive(Debug, Clone, PartialEq)]
pub enum FieldInput {
    Text(String),
    /// Index into the field's options; None means nothing chosen
    Choice(Option<usize>),
}

/// One schema field plus its current value and validation state
#[derive(Debug, Clone)]
pub struct FieldState {
    pub schema: FormField,
    pub input: FieldInput,
    pub error: Option<String>,
    rule: Option<CompiledRule>,
}

impl FieldState {
    pub fn new(schema: FormField) -> Self {
        let input = if schema.kind.has_options() {
            FieldInput::Choice(None)
        } else {
            FieldInput::Text(String::new())
        };
        let rule = schema.validation.as_ref().and_then(CompiledRule::compile);
        Self {
            schema,
            input,
            error: None,
            rule,
        }
    }

    /// Current value as it appears in the submission payload
    pub fn current_value(&self) -> String {
        match &self.input {
            FieldInput::Text(s) => s.clone(),
            FieldInput::Choice(None) => String::new(),
            FieldInput::Choice(Some(i)) => self
                .schema
                .options
                .get(*i)
                .map(|o| o.value.clone())
                .unwrap_or_default(),
        }
    }

    /// Chosen option index for select/radio fields
    pub fn choice(&self) -> Option<usize> {
        match &self.input {
            FieldInput::Choice(sel) => *sel,
            FieldInput::Text(_) => None,
        }
    }

    /// Append a character (text-like fields only)
    pub fn push_char(&mut self, c: char) {
        if let FieldInput::Text(s) = &mut self.input {
            s.push(c);
        }
    }

    /// Remove the last character (text-like fields only)
    pub fn pop_char(&mut self) {
        if let FieldInput::Text(s) = &mut self.input {
            s.pop();
        }
    }

    /// Insert a newline; only textarea fields accept one
    pub fn push_newline(&mut self) {
        if self.schema.kind == FieldType::Textarea {
            if let FieldInput::Text(s) = &mut self.input {
                s.push('\n');
            }
        }
    }

    /// Cycle the choice forward. Select cycles through its empty
    /// placeholder; a radio group never returns to unselected.
    pub fn next_choice(&mut self) {
        let count = self.schema.options.len();
        if count == 0 {
            return;
        }
        if let FieldInput::Choice(sel) = &mut self.input {
            *sel = match (self.schema.kind, *sel) {
                (FieldType::Select, None) => Some(0),
                (FieldType::Select, Some(i)) if i + 1 < count => Some(i + 1),
                (FieldType::Select, Some(_)) => None,
                (_, None) => Some(0),
                (_, Some(i)) => Some((i + 1) % count),
            };
        }
    }

    /// Cycle the choice backward
    pub fn prev_choice(&mut self) {
        let count = self.schema.options.len();
        if count == 0 {
            return;
        }
        if let FieldInput::Choice(sel) = &mut self.input {
            *sel = match (self.schema.kind, *sel) {
                (FieldType::Select, None) => Some(count - 1),
                (FieldType::Select, Some(0)) => None,
                (FieldType::Select, Some(i)) => Some(i - 1),
                (_, None) => Some(count - 1),
                (_, Some(i)) => Some((i + count - 1) % count),
            };
        }
    }

    /// Run this field's validators; stores the first failure.
    /// Returns true when the field is valid.
    pub fn validate(&mut self) -> bool {
        let value = self.current_value();
        self.error = validate::validate_value(&value, self.schema.required, self.rule.as_ref());
        self.error.is_none()
    }
}
