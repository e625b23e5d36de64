//! Application state and key routing

use crate::config::TuiConfig;
use crate::schema::SAMPLE_SCHEMA;
use crate::state::{EditorState, PreviewState, SubmitOutcome, SUCCESS_TIMEOUT};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::time::{Duration, Instant};

/// Which pane receives key input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaneFocus {
    Editor,
    Form,
}

impl PaneFocus {
    pub fn toggle(&mut self) {
        *self = match self {
            PaneFocus::Editor => PaneFocus::Form,
            PaneFocus::Form => PaneFocus::Editor,
        };
    }
}

/// Main application struct
pub struct App {
    /// Schema editor pane state
    pub editor: EditorState,
    /// Rendered form; retains the last good schema across parse failures
    pub preview: Option<PreviewState>,
    /// Which pane has focus
    pub focus: PaneFocus,
    /// How long the success banner stays up
    success_timeout: Duration,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App instance
    pub fn new(config: &TuiConfig) -> Self {
        let text = if config.sample_schema.unwrap_or(true) {
            SAMPLE_SCHEMA.to_string()
        } else {
            String::new()
        };
        let success_timeout = config
            .success_timeout_ms
            .map(Duration::from_millis)
            .unwrap_or(SUCCESS_TIMEOUT);

        let mut editor = EditorState::new(text);
        let preview = editor
            .reparse()
            .map(|schema| PreviewState::with_timeout(schema, success_timeout));

        Self {
            editor,
            preview,
            focus: PaneFocus::Editor,
            success_timeout,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Clear the success banner once its timer lapses
    pub fn tick(&mut self) {
        if let Some(preview) = &mut self.preview {
            preview.tick(Instant::now());
        }
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Global quit: Ctrl+C
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit = true;
            return;
        }

        // Tab: switch focus between editor and form
        if key.code == KeyCode::Tab {
            self.focus.toggle();
            return;
        }

        match self.focus {
            PaneFocus::Editor => self.handle_editor_key(key),
            PaneFocus::Form => self.handle_form_key(key),
        }
    }

    /// Handle keys in the schema editor pane
    fn handle_editor_key(&mut self, key: KeyEvent) {
        let changed = match key.code {
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.editor.insert_char(c);
                true
            }
            KeyCode::Enter => {
                self.editor.insert_char('\n');
                true
            }
            KeyCode::Backspace => self.editor.backspace(),
            KeyCode::Left => {
                self.editor.move_left();
                false
            }
            KeyCode::Right => {
                self.editor.move_right();
                false
            }
            KeyCode::Up => {
                self.editor.move_up();
                false
            }
            KeyCode::Down => {
                self.editor.move_down();
                false
            }
            KeyCode::Home => {
                self.editor.move_line_start();
                false
            }
            KeyCode::End => {
                self.editor.move_line_end();
                false
            }
            _ => false,
        };

        if changed {
            self.refresh_schema();
        }
    }

    /// Re-parse the editor text. A successful parse replaces the
    /// rendered form wholesale; a failure leaves it untouched.
    fn refresh_schema(&mut self) {
        if let Some(schema) = self.editor.reparse() {
            self.preview = Some(PreviewState::with_timeout(schema, self.success_timeout));
        }
    }

    /// Handle keys in the form preview pane
    fn handle_form_key(&mut self, key: KeyEvent) {
        // Submit shortcut
        if key.code == KeyCode::Char('s') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.submit();
            return;
        }

        let Some(preview) = &mut self.preview else {
            return;
        };

        match key.code {
            KeyCode::Up => preview.prev_field(),
            KeyCode::Down => preview.next_field(),
            KeyCode::Left => {
                if let Some(field) = preview.active_field_mut() {
                    field.prev_choice();
                }
            }
            KeyCode::Right => {
                if let Some(field) = preview.active_field_mut() {
                    field.next_choice();
                }
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                if let Some(field) = preview.active_field_mut() {
                    field.push_char(c);
                }
            }
            KeyCode::Backspace => {
                if let Some(field) = preview.active_field_mut() {
                    field.pop_char();
                }
            }
            KeyCode::Enter => {
                if let Some(field) = preview.active_field_mut() {
                    field.push_newline();
                }
            }
            _ => {}
        }
    }

    /// Run validation and, on success, hand the payload to the
    /// diagnostic channel
    fn submit(&mut self) {
        let Some(preview) = &mut self.preview else {
            return;
        };
        if let SubmitOutcome::Accepted(values) = preview.submit() {
            tracing::info!(?values, "form submitted");
        }
    }
}
