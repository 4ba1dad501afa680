//! Event handler for the TUI
//!
//! Routes key events to the open dialog or to the tracker view.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::forms::ExpenseField;
use crate::state::IdGenerator;

use super::app::{ActiveDialog, App};
use super::event::Event;

/// Handle an incoming event
pub fn handle_event<G: IdGenerator>(app: &mut App<'_, G>, event: Event) -> Result<()> {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Tick | Event::Resize(_, _) => Ok(()),
    }
}

fn handle_key_event<G: IdGenerator>(app: &mut App<'_, G>, key: KeyEvent) -> Result<()> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.quit();
        return Ok(());
    }

    match app.active_dialog {
        ActiveDialog::None => handle_normal_key(app, key),
        ActiveDialog::AddExpense => handle_expense_dialog_key(app, key),
        ActiveDialog::ConfirmReset => handle_reset_dialog_key(app, key),
        ActiveDialog::Help => {
            app.close_dialog();
            Ok(())
        }
    }
}

/// Handle keys when no dialog is open
fn handle_normal_key<G: IdGenerator>(app: &mut App<'_, G>, key: KeyEvent) -> Result<()> {
    app.clear_status();

    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => app.quit(),
        KeyCode::Char('?') => app.open_dialog(ActiveDialog::Help),
        KeyCode::Char('a') | KeyCode::Char('n') => app.open_dialog(ActiveDialog::AddExpense),
        KeyCode::Char('R') => app.open_dialog(ActiveDialog::ConfirmReset),
        KeyCode::Char('j') | KeyCode::Down => app.move_down(),
        KeyCode::Char('k') | KeyCode::Up => app.move_up(),
        KeyCode::Char('g') | KeyCode::Home => app.select_first(),
        KeyCode::Char('G') | KeyCode::End => app.select_last(),
        _ => {}
    }

    Ok(())
}

/// Handle keys in the new expense dialog
fn handle_expense_dialog_key<G: IdGenerator>(app: &mut App<'_, G>, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Esc => {
            app.close_dialog();
            return Ok(());
        }
        KeyCode::Enter => {
            app.submit_expense();
            return Ok(());
        }
        _ => {}
    }

    let form = &mut app.expense_form;
    match key.code {
        KeyCode::Tab => form.next_field(),
        KeyCode::BackTab => form.prev_field(),
        _ if form.focused_field == ExpenseField::Category => match key.code {
            KeyCode::Right | KeyCode::Down | KeyCode::Char(' ') => form.next_category(),
            KeyCode::Left | KeyCode::Up => form.prev_category(),
            _ => {}
        },
        KeyCode::Down => form.next_field(),
        KeyCode::Up => form.prev_field(),
        _ => {
            if let Some(input) = form.focused_input() {
                match key.code {
                    KeyCode::Char(c) => input.insert(c),
                    KeyCode::Backspace => input.backspace(),
                    KeyCode::Delete => input.delete(),
                    KeyCode::Left => input.move_left(),
                    KeyCode::Right => input.move_right(),
                    KeyCode::Home => input.move_start(),
                    KeyCode::End => input.move_end(),
                    _ => {}
                }
            }
        }
    }

    form.clear_error();
    Ok(())
}

/// Handle keys in the reset confirmation
fn handle_reset_dialog_key<G: IdGenerator>(app: &mut App<'_, G>, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => app.reset_app(),
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => app.close_dialog(),
        _ => {}
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::models::Money;
    use crate::state::{BudgetStore, SequentialIds};

    fn press(app: &mut App<'_, SequentialIds>, code: KeyCode) {
        handle_event(app, Event::Key(KeyEvent::new(code, KeyModifiers::NONE))).unwrap();
    }

    fn type_str(app: &mut App<'_, SequentialIds>, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    fn new_app(settings: &Settings) -> App<'_, SequentialIds> {
        let store = BudgetStore::with_ids(Money::from_units(300), SequentialIds::new()).unwrap();
        App::new(settings, store)
    }

    #[test]
    fn test_add_expense_with_keyboard() {
        let settings = Settings::default();
        let mut app = new_app(&settings);

        press(&mut app, KeyCode::Char('a'));
        type_str(&mut app, "Coffee");
        press(&mut app, KeyCode::Tab);
        type_str(&mut app, "100");
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Right); // food
        press(&mut app, KeyCode::Enter);

        let state = app.store.state();
        assert_eq!(state.expenses.len(), 1);
        assert_eq!(state.expenses[0].expense_name, "Coffee");
        assert_eq!(state.expenses[0].category, "food");
        assert_eq!(state.available(), Money::from_units(200));
        assert!(!app.has_dialog());
    }

    #[test]
    fn test_letters_typed_into_form_do_not_trigger_shortcuts() {
        let settings = Settings::default();
        let mut app = new_app(&settings);

        press(&mut app, KeyCode::Char('a'));
        type_str(&mut app, "quarterly R?");

        assert!(!app.should_quit);
        assert_eq!(app.active_dialog, ActiveDialog::AddExpense);
        assert_eq!(app.expense_form.name_input.value(), "quarterly R?");
    }

    #[test]
    fn test_incomplete_form_is_not_dispatched() {
        let settings = Settings::default();
        let mut app = new_app(&settings);

        press(&mut app, KeyCode::Char('a'));
        press(&mut app, KeyCode::Enter);

        assert!(app.store.state().expenses.is_empty());
        assert_eq!(app.active_dialog, ActiveDialog::AddExpense);
        assert!(app.expense_form.error_message.is_some());

        press(&mut app, KeyCode::Esc);
        assert!(!app.has_dialog());
    }

    #[test]
    fn test_reset_requires_confirmation() {
        let settings = Settings::default();
        let mut app = new_app(&settings);

        press(&mut app, KeyCode::Char('a'));
        type_str(&mut app, "Gym");
        press(&mut app, KeyCode::Tab);
        type_str(&mut app, "40");
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Left); // subscriptions
        press(&mut app, KeyCode::Enter);

        press(&mut app, KeyCode::Char('R'));
        press(&mut app, KeyCode::Char('n'));
        assert_eq!(app.store.state().expenses.len(), 1);

        press(&mut app, KeyCode::Char('R'));
        press(&mut app, KeyCode::Char('y'));
        assert!(app.store.state().expenses.is_empty());
    }

    #[test]
    fn test_quit_keys() {
        let settings = Settings::default();
        let mut app = new_app(&settings);
        press(&mut app, KeyCode::Char('?'));
        press(&mut app, KeyCode::Char('q')); // closes help only
        assert!(!app.should_quit);
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }
}
