//! Form preview pane state and the submission state machine

use super::field::FieldState;
use crate::schema::FormSchema;
use std::time::{Duration, Instant};

/// How long the success banner stays up before returning to Idle
pub const SUCCESS_TIMEOUT: Duration = Duration::from_millis(3000);

/// Resting states of the submission machine. Validating happens
/// synchronously inside [`PreviewState::submit`], so the machine only
/// rests in Idle (editable, possibly with per-field errors) or
/// Accepted (success banner up, timer running).
#[derive(Debug, Clone, Copy)]
pub enum SubmitStatus {
    Idle,
    Accepted { since: Instant },
}

/// Outcome of one submit attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Every validator passed; one (id, value) entry per field, in order
    Accepted(Vec<(String, String)>),
    /// Number of fields that failed validation
    Invalid(usize),
}

/// One rendered form: field states built from a schema, active-field
/// navigation, and submission handling. Rebuilt wholesale whenever a
/// new schema parses, discarding all entered values.
pub struct PreviewState {
    pub title: String,
    pub description: String,
    pub fields: Vec<FieldState>,
    pub active: usize,
    pub status: SubmitStatus,
    success_timeout: Duration,
}

impl PreviewState {
    pub fn new(schema: FormSchema) -> Self {
        Self::with_timeout(schema, SUCCESS_TIMEOUT)
    }

    pub fn with_timeout(schema: FormSchema, success_timeout: Duration) -> Self {
        let fields = schema.fields.into_iter().map(FieldState::new).collect();
        Self {
            title: schema.form_title,
            description: schema.form_description,
            fields,
            active: 0,
            status: SubmitStatus::Idle,
            success_timeout,
        }
    }

    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    pub fn next_field(&mut self) {
        if !self.fields.is_empty() {
            self.active = (self.active + 1) % self.fields.len();
        }
    }

    pub fn prev_field(&mut self) {
        if self.fields.is_empty() {
            return;
        }
        if self.active == 0 {
            self.active = self.fields.len() - 1;
        } else {
            self.active -= 1;
        }
    }

    pub fn active_field_mut(&mut self) -> Option<&mut FieldState> {
        self.fields.get_mut(self.active)
    }

    /// Run every field's validators synchronously.
    ///
    /// Invalid: per-field messages are stored, status stays Idle, no
    /// values are cleared. Accepted: the payload is returned and the
    /// success timer starts; entered values are kept. A resubmission
    /// before the timer fires simply restarts it.
    pub fn submit(&mut self) -> SubmitOutcome {
        let mut failed = 0;
        for field in &mut self.fields {
            if !field.validate() {
                failed += 1;
            }
        }
        if failed > 0 {
            return SubmitOutcome::Invalid(failed);
        }
        let payload = self
            .fields
            .iter()
            .map(|f| (f.schema.id.clone(), f.current_value()))
            .collect();
        self.status = SubmitStatus::Accepted {
            since: Instant::now(),
        };
        SubmitOutcome::Accepted(payload)
    }

    /// Clear the success banner once its timer lapses
    pub fn tick(&mut self, now: Instant) {
        if let SubmitStatus::Accepted { since } = self.status {
            if now.duration_since(since) >= self.success_timeout {
                self.status = SubmitStatus::Idle;
            }
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self.status, SubmitStatus::Accepted { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::parse_schema;
    use crate::validate::REQUIRED_MESSAGE;
    use pretty_assertions::assert_eq;

    fn email_schema() -> FormSchema {
        parse_schema(
            r#"{
                "formTitle": "T",
                "formDescription": "D",
                "fields": [
                    {
                        "id": "email",
                        "type": "email",
                        "label": "Email",
                        "required": true,
                        "validation": { "pattern": "^[^@]+@[^@]+$", "message": "bad email" }
                    }
                ]
            }"#,
        )
        .unwrap()
    }

    fn type_into(preview: &mut PreviewState, index: usize, text: &str) {
        for c in text.chars() {
            preview.fields[index].push_char(c);
        }
    }

    mod navigation {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_next_and_prev_wrap() {
            let schema = parse_schema(
                r#"{ "fields": [
                    { "id": "a", "label": "A" },
                    { "id": "b", "label": "B" }
                ] }"#,
            )
            .unwrap();
            let mut preview = PreviewState::new(schema);
            assert_eq!(preview.active, 0);
            preview.next_field();
            assert_eq!(preview.active, 1);
            preview.next_field();
            assert_eq!(preview.active, 0);
            preview.prev_field();
            assert_eq!(preview.active, 1);
        }

        #[test]
        fn test_empty_form_navigation_is_noop() {
            let schema = parse_schema(r#"{ "fields": [] }"#).unwrap();
            let mut preview = PreviewState::new(schema);
            preview.next_field();
            preview.prev_field();
            assert_eq!(preview.active, 0);
            assert!(preview.active_field_mut().is_none());
        }
    }

    mod submission {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_email_scenario() {
            let mut preview = PreviewState::new(email_schema());

            // Empty and required: blocked with the required message
            assert_eq!(preview.submit(), SubmitOutcome::Invalid(1));
            assert_eq!(preview.fields[0].error.as_deref(), Some(REQUIRED_MESSAGE));
            assert!(!preview.is_success());

            // Pattern mismatch: blocked with the schema's message
            type_into(&mut preview, 0, "not-an-email");
            assert_eq!(preview.submit(), SubmitOutcome::Invalid(1));
            assert_eq!(preview.fields[0].error.as_deref(), Some("bad email"));

            // Valid value: accepted with exactly one payload entry
            for _ in 0.."not-an-email".len() {
                preview.fields[0].pop_char();
            }
            type_into(&mut preview, 0, "a@b.com");
            let outcome = preview.submit();
            assert_eq!(
                outcome,
                SubmitOutcome::Accepted(vec![("email".to_string(), "a@b.com".to_string())])
            );
            assert!(preview.is_success());
            assert!(preview.fields[0].error.is_none());
        }

        #[test]
        fn test_values_kept_after_accept() {
            let mut preview = PreviewState::new(email_schema());
            type_into(&mut preview, 0, "a@b.com");
            preview.submit();
            assert_eq!(preview.fields[0].current_value(), "a@b.com");
        }

        #[test]
        fn test_values_kept_after_invalid() {
            let mut preview = PreviewState::new(email_schema());
            type_into(&mut preview, 0, "draft");
            preview.submit();
            assert_eq!(preview.fields[0].current_value(), "draft");
        }

        #[test]
        fn test_payload_preserves_field_order() {
            let schema = parse_schema(
                r#"{ "fields": [
                    { "id": "z", "label": "Z" },
                    { "id": "a", "label": "A" },
                    { "id": "m", "label": "M" }
                ] }"#,
            )
            .unwrap();
            let mut preview = PreviewState::new(schema);
            let outcome = preview.submit();
            match outcome {
                SubmitOutcome::Accepted(payload) => {
                    let ids: Vec<&str> = payload.iter().map(|(id, _)| id.as_str()).collect();
                    assert_eq!(ids, vec!["z", "a", "m"]);
                }
                other => panic!("expected Accepted, got {other:?}"),
            }
        }

        #[test]
        fn test_invalid_counts_every_failing_field() {
            let schema = parse_schema(
                r#"{ "fields": [
                    { "id": "a", "label": "A", "required": true },
                    { "id": "b", "label": "B", "required": true },
                    { "id": "c", "label": "C" }
                ] }"#,
            )
            .unwrap();
            let mut preview = PreviewState::new(schema);
            assert_eq!(preview.submit(), SubmitOutcome::Invalid(2));
            assert!(preview.fields[0].error.is_some());
            assert!(preview.fields[1].error.is_some());
            assert!(preview.fields[2].error.is_none());
        }
    }

    mod success_timer {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_banner_clears_after_timeout() {
            let mut preview = PreviewState::new(email_schema());
            type_into(&mut preview, 0, "a@b.com");
            preview.submit();
            let since = match preview.status {
                SubmitStatus::Accepted { since } => since,
                SubmitStatus::Idle => panic!("expected Accepted"),
            };

            preview.tick(since + Duration::from_millis(2999));
            assert!(preview.is_success());
            preview.tick(since + Duration::from_millis(3000));
            assert!(!preview.is_success());
        }

        #[test]
        fn test_tick_in_idle_is_noop() {
            let mut preview = PreviewState::new(email_schema());
            preview.tick(Instant::now());
            assert!(!preview.is_success());
        }

        #[test]
        fn test_resubmit_restarts_timer() {
            let schema = parse_schema(r#"{ "fields": [{ "id": "a", "label": "A" }] }"#).unwrap();
            let mut preview = PreviewState::with_timeout(schema, Duration::from_millis(50));

            preview.submit();
            let first = match preview.status {
                SubmitStatus::Accepted { since } => since,
                SubmitStatus::Idle => panic!("expected Accepted"),
            };
            std::thread::sleep(Duration::from_millis(20));
            preview.submit();
            let second = match preview.status {
                SubmitStatus::Accepted { since } => since,
                SubmitStatus::Idle => panic!("expected Accepted"),
            };
            assert!(second > first);

            // The later submission's timer governs the clear
            preview.tick(first + Duration::from_millis(50));
            assert!(preview.is_success());
            preview.tick(second + Duration::from_millis(50));
            assert!(!preview.is_success());
        }
    }
}
