//! Application state for the TUI
//!
//! The App struct holds the wizard plus the bits of UI state the wizard does
//! not care about: which field has focus, the edit buffer, help visibility.

use std::time::Duration;

use tracing::debug;

use crate::config::settings::Settings;
use crate::storage::KeyValueStore;
use crate::wizard::{Field, FieldKind, Transition, Wizard};

use super::widgets::{Notification, NotificationQueue, TextInput};

/// Main application state
pub struct App<S> {
    /// The form state machine; its notifier is the toast queue
    pub wizard: Wizard<S, NotificationQueue>,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Whether the help overlay is open
    pub show_help: bool,

    /// Index of the focused field within the current step
    pub focused_index: usize,

    /// Edit buffer for the focused text field
    pub input: TextInput,

    /// Highlight empty required fields (set after a failed advance)
    pub show_missing: bool,

    /// Status message to display
    pub status_message: Option<String>,
}

impl<S: KeyValueStore> App<S> {
    /// Create a new App, restoring the step from `store`
    pub fn new(store: S, settings: &Settings) -> Self {
        let toasts = NotificationQueue::new(Duration::from_secs(settings.notification_secs));
        let mut app = Self {
            wizard: Wizard::mount(store, toasts),
            should_quit: false,
            show_help: false,
            focused_index: 0,
            input: TextInput::new(),
            show_missing: false,
            status_message: None,
        };
        app.load_focused();
        app
    }

    /// Request to quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    /// Set a status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// Fields of the current step
    pub fn fields(&self) -> &'static [Field] {
        self.wizard.current_step().fields()
    }

    pub fn focused_field(&self) -> Field {
        let fields = self.fields();
        fields[self.focused_index.min(fields.len() - 1)]
    }

    /// Copy the focused field's value into the edit buffer
    fn load_focused(&mut self) {
        let value = self.wizard.value(self.focused_field()).to_string();
        self.input.set_content(value);
    }

    /// Push the edit buffer back into the wizard
    fn store_focused(&mut self) {
        let field = self.focused_field();
        self.wizard.set_field(field, self.input.value());
    }

    fn focus(&mut self, index: usize) {
        self.focused_index = index;
        self.load_focused();
    }

    /// Move focus to the next field, wrapping around
    pub fn focus_next(&mut self) {
        let len = self.fields().len();
        self.focus((self.focused_index + 1) % len);
    }

    /// Move focus to the previous field, wrapping around
    pub fn focus_prev(&mut self) {
        let len = self.fields().len();
        self.focus((self.focused_index + len - 1) % len);
    }

    fn focused_kind(&self) -> FieldKind {
        self.focused_field().kind()
    }

    /// Type a character into the focused text field
    pub fn insert_char(&mut self, c: char) {
        if self.focused_kind() == FieldKind::Text {
            self.input.insert(c);
            self.store_focused();
        }
    }

    pub fn backspace(&mut self) {
        match self.focused_kind() {
            FieldKind::Text => {
                self.input.backspace();
                self.store_focused();
            }
            FieldKind::Choice(_) => self.clear_focused(),
            FieldKind::Toggle => {}
        }
    }

    pub fn delete(&mut self) {
        match self.focused_kind() {
            FieldKind::Text => {
                self.input.delete();
                self.store_focused();
            }
            FieldKind::Choice(_) => self.clear_focused(),
            FieldKind::Toggle => {}
        }
    }

    /// Empty the focused field
    pub fn clear_focused(&mut self) {
        self.input.clear();
        self.store_focused();
    }

    /// Left/Right: move the cursor in text fields, cycle choices otherwise
    pub fn horizontal(&mut self, forward: bool) {
        match self.focused_kind() {
            FieldKind::Text if forward => self.input.move_right(),
            FieldKind::Text => self.input.move_left(),
            FieldKind::Choice(options) => self.cycle_choice(options, forward),
            FieldKind::Toggle => self.toggle_focused(),
        }
    }

    fn cycle_choice(&mut self, options: &[&str], forward: bool) {
        let current = options
            .iter()
            .position(|o| *o == self.wizard.value(self.focused_field()));
        let last = options.len() - 1;
        let next = match (current, forward) {
            (None, true) => 0,
            (None, false) => last,
            (Some(i), true) => (i + 1) % options.len(),
            (Some(0), false) => last,
            (Some(i), false) => i - 1,
        };
        self.input.set_content(options[next]);
        self.store_focused();
    }

    /// Flip the focused checkbox
    pub fn toggle_focused(&mut self) {
        if self.focused_kind() != FieldKind::Toggle {
            return;
        }
        let field = self.focused_field();
        let flipped = if self.wizard.value(field) == "true" {
            "false"
        } else {
            "true"
        };
        self.wizard.set_field(field, flipped);
        self.load_focused();
    }

    /// Next: validate and move forward
    pub fn advance(&mut self) {
        match self.wizard.advance() {
            Transition::Moved { .. } => self.on_step_changed(),
            Transition::Invalid => {
                self.show_missing = true;
                if let Some(first) = self.wizard.missing_fields().first() {
                    if let Some(index) = self.fields().iter().position(|f| f == first) {
                        self.focus(index);
                    }
                }
            }
            Transition::Complete => {
                self.wizard
                    .notifier_mut()
                    .push(Notification::success("All steps complete."));
            }
            Transition::AtFirstStep => {}
        }
    }

    /// Back: move to the previous step
    pub fn retreat(&mut self) {
        if let Transition::Moved { .. } = self.wizard.retreat() {
            self.on_step_changed();
        }
    }

    /// Start over from step 1 with an empty form
    pub fn reset(&mut self) {
        self.wizard.reset();
        self.wizard.notifier_mut().clear();
        self.on_step_changed();
        self.set_status("Form reset");
    }

    fn on_step_changed(&mut self) {
        debug!(step = self.wizard.current_step().number(), "showing step");
        self.show_missing = false;
        self.status_message = None;
        self.focus(0);
    }

    /// Periodic housekeeping
    pub fn tick(&mut self) {
        self.wizard.notifier_mut().remove_expired();
    }
}
