//! The JSON shape the editor pane accepts

use serde::{Deserialize, Deserializer};

/// A parsed form description: title, description, and ordered fields
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FormSchema {
    #[serde(rename = "formTitle", default)]
    pub form_title: String,
    #[serde(rename = "formDescription", default)]
    pub form_description: String,
    pub fields: Vec<FormField>,
}

/// One input definition within a schema
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FormField {
    pub id: String,
    #[serde(rename = "type", default)]
    pub kind: FieldType,
    pub label: String,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub placeholder: Option<String>,
    #[serde(default)]
    pub validation: Option<ValidationRule>,
    #[serde(default)]
    pub options: Vec<FieldOption>,
}

/// The closed set of field kinds. Unrecognized type tags land on
/// `Unknown`, which renders as a plain text input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldType {
    #[default]
    Text,
    Email,
    Select,
    Radio,
    Textarea,
    Unknown,
}

impl FieldType {
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "text" => FieldType::Text,
            "email" => FieldType::Email,
            "select" => FieldType::Select,
            "radio" => FieldType::Radio,
            "textarea" => FieldType::Textarea,
            _ => FieldType::Unknown,
        }
    }

    /// Whether this kind draws its value from an options list
    pub fn has_options(&self) -> bool {
        matches!(self, FieldType::Select | FieldType::Radio)
    }
}

impl<'de> Deserialize<'de> for FieldType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let tag = String::deserialize(deserializer)?;
        Ok(FieldType::from_tag(&tag))
    }
}

/// A pattern constraint plus the message shown when a value fails it
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ValidationRule {
    pub pattern: String,
    pub message: String,
}

/// One choice in a select or radio field
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FieldOption {
    pub value: String,
    pub label: String,
}

/// Document loaded into the editor on startup (unless disabled in config)
pub const SAMPLE_SCHEMA: &str = r#"{
  "formTitle": "Contact Us",
  "formDescription": "Send the team a note and we will get back to you.",
  "fields": [
    {
      "id": "name",
      "type": "text",
      "label": "Full Name",
      "required": true,
      "placeholder": "Jane Doe"
    },
    {
      "id": "email",
      "type": "email",
      "label": "Email",
      "required": true,
      "validation": {
        "pattern": "^[^@\\s]+@[^@\\s]+\\.[^@\\s]+$",
        "message": "Enter a valid email address"
      }
    },
    {
      "id": "topic",
      "type": "select",
      "label": "Topic",
      "required": true,
      "options": [
        { "value": "support", "label": "Support" },
        { "value": "sales", "label": "Sales" },
        { "value": "other", "label": "Other" }
      ]
    },
    {
      "id": "urgency",
      "type": "radio",
      "label": "Urgency",
      "options": [
        { "value": "low", "label": "Low" },
        { "value": "high", "label": "High" }
      ]
    },
    {
      "id": "message",
      "type": "textarea",
      "label": "Message",
      "required": true,
      "placeholder": "How can we help?"
    }
  ]
}
"#;
