//! Event handler for the TUI
//!
//! Routes keyboard events to the help overlay or the form.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::storage::KeyValueStore;
use crate::wizard::FieldKind;

use super::app::App;
use super::event::Event;

/// Handle an incoming event
pub fn handle_event<S: KeyValueStore>(app: &mut App<S>, event: Event) {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Tick => app.tick(),
        Event::Resize(_, _) => {}
    }
}

/// Handle a key event
fn handle_key_event<S: KeyValueStore>(app: &mut App<S>, key: KeyEvent) {
    // Some terminals report releases too
    if key.kind != KeyEventKind::Press {
        return;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        match key.code {
            KeyCode::Char('c') | KeyCode::Char('q') => app.quit(),
            KeyCode::Char('r') => app.reset(),
            _ => {}
        }
        return;
    }

    if app.show_help {
        handle_help_key(app, key);
        return;
    }

    handle_form_key(app, key);
}

/// Keys while the help overlay is open
fn handle_help_key<S: KeyValueStore>(app: &mut App<S>, key: KeyEvent) {
    if matches!(
        key.code,
        KeyCode::Esc | KeyCode::F(1) | KeyCode::Char('?') | KeyCode::Char('q')
    ) {
        app.show_help = false;
    }
}

/// Keys on the form
fn handle_form_key<S: KeyValueStore>(app: &mut App<S>, key: KeyEvent) {
    match key.code {
        KeyCode::F(1) => app.toggle_help(),

        // Step navigation
        KeyCode::Enter => app.advance(),
        KeyCode::Esc => app.retreat(),

        // Field navigation
        KeyCode::Tab | KeyCode::Down => app.focus_next(),
        KeyCode::BackTab | KeyCode::Up => app.focus_prev(),

        // Editing
        KeyCode::Left => app.horizontal(false),
        KeyCode::Right => app.horizontal(true),
        KeyCode::Home => app.input.move_start(),
        KeyCode::End => app.input.move_end(),
        KeyCode::Backspace => app.backspace(),
        KeyCode::Delete => app.delete(),
        KeyCode::Char(' ') if app.focused_field().kind() == FieldKind::Toggle => app.toggle_focused(),
        KeyCode::Char(c) => app.insert_char(c),

        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::storage::MemoryStore;
    use crate::wizard::{Step, STEP_KEY, VALIDATION_MESSAGE};

    fn press(app: &mut App<MemoryStore>, code: KeyCode) {
        handle_event(app, Event::Key(KeyEvent::new(code, KeyModifiers::NONE)));
    }

    fn ctrl(app: &mut App<MemoryStore>, c: char) {
        handle_event(
            app,
            Event::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)),
        );
    }

    fn type_str(app: &mut App<MemoryStore>, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    fn app() -> App<MemoryStore> {
        App::new(MemoryStore::new(), &Settings::default())
    }

    #[test]
    fn test_fill_step_one_with_keys() {
        let mut app = app();
        type_str(&mut app, "A");
        press(&mut app, KeyCode::Tab);
        type_str(&mut app, "B");
        press(&mut app, KeyCode::Tab);
        type_str(&mut app, "a@b.com");
        press(&mut app, KeyCode::Tab);
        type_str(&mut app, "123");
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.wizard.current_step(), Step::Location);
        assert_eq!(app.wizard.store().get(STEP_KEY).as_deref(), Some("2"));
    }

    #[test]
    fn test_enter_with_empty_fields_notifies() {
        let mut app = app();
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.wizard.current_step(), Step::Personal);
        assert_eq!(
            app.wizard.notifier().current().unwrap().message,
            VALIDATION_MESSAGE
        );
    }

    #[test]
    fn test_esc_goes_back() {
        let mut app = App::new(MemoryStore::with_entry(STEP_KEY, "2"), &Settings::default());
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.wizard.current_step(), Step::Personal);

        press(&mut app, KeyCode::Esc);
        assert_eq!(app.wizard.current_step(), Step::Personal);
        assert_eq!(app.wizard.store().get(STEP_KEY).as_deref(), Some("1"));
    }

    #[test]
    fn test_q_is_text_not_quit() {
        let mut app = app();
        press(&mut app, KeyCode::Char('q'));
        assert!(!app.should_quit);
        assert_eq!(app.wizard.personal().first_name, "q");

        ctrl(&mut app, 'q');
        assert!(app.should_quit);
    }

    #[test]
    fn test_help_overlay_swallows_keys() {
        let mut app = app();
        press(&mut app, KeyCode::F(1));
        assert!(app.show_help);

        press(&mut app, KeyCode::Char('x'));
        assert_eq!(app.wizard.personal().first_name, "");

        press(&mut app, KeyCode::Esc);
        assert!(!app.show_help);
    }

    #[test]
    fn test_space_toggles_checkbox_but_types_in_text() {
        let mut app = App::new(MemoryStore::with_entry(STEP_KEY, "3"), &Settings::default());
        type_str(&mut app, "C D");
        assert_eq!(app.wizard.business().company_name, "C D");

        press(&mut app, KeyCode::BackTab);
        press(&mut app, KeyCode::Char(' '));
        assert!(app.wizard.business().share_subscription);
    }

    #[test]
    fn test_ctrl_r_resets() {
        let mut app = App::new(MemoryStore::with_entry(STEP_KEY, "3"), &Settings::default());
        ctrl(&mut app, 'r');
        assert_eq!(app.wizard.current_step(), Step::Personal);
    }

    #[test]
    fn test_key_release_ignored() {
        let mut app = app();
        let mut key = KeyEvent::new(KeyCode::Char('z'), KeyModifiers::NONE);
        key.kind = KeyEventKind::Release;
        handle_event(&mut app, Event::Key(key));
        assert_eq!(app.wizard.personal().first_name, "");
    }
}
