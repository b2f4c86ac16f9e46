//! Event handler for the TUI
//!
//! Routes key events to the focused field. Global keys are checked first.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::app::{App, Focus};
use super::event::Event;
use super::widgets::TextInput;

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Mouse(_) | Event::Resize(_, _) | Event::Tick => {}
    }
}

fn handle_key_event(app: &mut App, key: KeyEvent) {
    // Windows reports releases as well as presses
    if key.kind == KeyEventKind::Release {
        return;
    }

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Esc => return app.quit(),
        KeyCode::Char('c') if ctrl => return app.quit(),
        KeyCode::Char('t') if ctrl => return app.toggle_theme(),
        KeyCode::Tab => return app.focus_next(),
        KeyCode::BackTab => return app.focus_prev(),
        KeyCode::Down => return app.focus_next(),
        KeyCode::Up => return app.focus_prev(),
        _ => {}
    }

    match app.focus {
        Focus::Category => handle_category_key(app, key),
        Focus::Budget => {
            if edit_input(&mut app.budget_input, key) {
                app.apply_budget();
            } else if key.code == KeyCode::Enter {
                app.focus_next();
            }
        }
        Focus::Amount | Focus::Date | Focus::Custom => {
            if key.code == KeyCode::Enter {
                app.submit_expense();
            } else if let Some(input) = app.focused_input_mut() {
                edit_input(input, key);
            }
        }
        Focus::Assistant => {
            if key.code == KeyCode::Enter {
                app.ask_assistant();
            } else {
                edit_input(&mut app.assistant_input, key);
            }
        }
    }
}

fn handle_category_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Left | KeyCode::Char('h') => app.prev_category(),
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char(' ') => app.next_category(),
        KeyCode::Enter => {
            app.submit_expense();
        }
        _ => {}
    }
}

/// Apply an editing key to a text input; returns whether the content changed
fn edit_input(input: &mut TextInput, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            input.insert(c);
            true
        }
        KeyCode::Backspace => {
            input.backspace();
            true
        }
        KeyCode::Delete => {
            input.delete();
            true
        }
        KeyCode::Left => {
            input.move_left();
            false
        }
        KeyCode::Right => {
            input.move_right();
            false
        }
        KeyCode::Home => {
            input.move_start();
            false
        }
        KeyCode::End => {
            input.move_end();
            false
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::models::{CategoryChoice, FixedCategory, Money};

    fn press(app: &mut App, code: KeyCode) {
        handle_event(app, Event::Key(KeyEvent::new(code, KeyModifiers::NONE)));
    }

    fn ctrl(app: &mut App, c: char) {
        handle_event(
            app,
            Event::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)),
        );
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn test_quit_keys() {
        let settings = Settings::default();
        let mut app = App::new(&settings);
        press(&mut app, KeyCode::Esc);
        assert!(app.should_quit);

        let mut app = App::new(&settings);
        ctrl(&mut app, 'c');
        assert!(app.should_quit);
    }

    #[test]
    fn test_theme_toggle() {
        let settings = Settings::default();
        let mut app = App::new(&settings);
        ctrl(&mut app, 't');
        assert!(app.dark_mode);
        ctrl(&mut app, 't');
        assert!(!app.dark_mode);
        assert_eq!(app.budget_input.value(), "");
    }

    #[test]
    fn test_typing_budget_updates_session() {
        let settings = Settings::default();
        let mut app = App::new(&settings);
        type_text(&mut app, "250");
        assert_eq!(app.session.budget(), Money::from_cents(25000));

        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.session.budget(), Money::from_cents(2500));
    }

    #[test]
    fn test_full_entry_flow() {
        let settings = Settings::default();
        let mut app = App::new(&settings);
        type_text(&mut app, "1000");

        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "600");
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "2025-05-01");
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.focus, Focus::Category);
        press(&mut app, KeyCode::Right);
        assert_eq!(
            app.category,
            CategoryChoice::Fixed(FixedCategory::ALL[1])
        );
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.session.expenses().len(), 1);
        assert!(app.session.warning().is_some());
        assert_eq!(app.amount_input.value(), "");
    }

    #[test]
    fn test_others_requires_custom_text() {
        let settings = Settings::default();
        let mut app = App::new(&settings);

        app.focus = Focus::Amount;
        type_text(&mut app, "20");
        app.focus = Focus::Date;
        type_text(&mut app, "2025-05-02");
        app.focus = Focus::Category;
        press(&mut app, KeyCode::Left);
        assert_eq!(app.category, CategoryChoice::Others);

        press(&mut app, KeyCode::Enter);
        assert!(app.session.expenses().is_empty());

        press(&mut app, KeyCode::Tab);
        assert_eq!(app.focus, Focus::Custom);
        type_text(&mut app, "Yoga");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.session.expenses()[0].category_name(), "Yoga");
    }

    #[test]
    fn test_assistant_enter() {
        let settings = Settings::default();
        let mut app = App::new(&settings);
        app.focus = Focus::Assistant;
        type_text(&mut app, "help");
        press(&mut app, KeyCode::Enter);

        assert_eq!(
            app.session.assistant_reply(),
            Some("How can I assist you with your budgeting?")
        );
        assert_eq!(app.assistant_input.value(), "");
    }
}
