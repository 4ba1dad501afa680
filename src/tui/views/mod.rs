//! TUI Views module
//!
//! The tracker panel, the expense list and the status bar, with any open
//! dialog drawn on top.

pub mod expenses;
pub mod status_bar;
pub mod tracker;

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::app::{ActiveDialog, App};
use super::dialogs;
use super::layout::AppLayout;
use crate::state::IdGenerator;

/// Render the entire application
pub fn render<G: IdGenerator>(frame: &mut Frame, app: &App<'_, G>) {
    let layout = AppLayout::new(frame.area());
    let state = app.store.state();

    render_header(frame, layout.header);
    tracker::render(frame, state, app.settings, layout.tracker);
    expenses::render(
        frame,
        &state.expenses,
        app.selected_expense_index,
        app.settings,
        layout.expenses,
    );
    status_bar::render(
        frame,
        state,
        app.status_message.as_deref(),
        app.settings,
        layout.status_bar,
    );

    match app.active_dialog {
        ActiveDialog::None => {}
        ActiveDialog::AddExpense => dialogs::expense::render(frame, &app.expense_form),
        ActiveDialog::ConfirmReset => dialogs::reset::render(frame, state, app.settings),
        ActiveDialog::Help => dialogs::help::render(frame),
    }
}

fn render_header(frame: &mut Frame, area: Rect) {
    let title = Paragraph::new("Budget and Expense Planner")
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(Block::default().borders(Borders::BOTTOM));

    frame.render_widget(title, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::models::{DraftExpense, Money};
    use crate::state::{BudgetAction, BudgetStore, SequentialIds};
    use chrono::NaiveDate;
    use ratatui::{backend::TestBackend, Terminal};

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        buffer
            .content()
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_renders_totals_and_expenses() {
        let settings = Settings::default();
        let mut store =
            BudgetStore::with_ids(Money::from_units(300), SequentialIds::new()).unwrap();
        store
            .dispatch(BudgetAction::add_expense(DraftExpense::new(
                "Coffee",
                Money::from_units(100),
                "food",
                NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            )))
            .unwrap();
        let app = App::new(&settings, store);

        let mut terminal = Terminal::new(TestBackend::new(110, 30)).unwrap();
        terminal.draw(|frame| render(frame, &app)).unwrap();
        let text = screen_text(&terminal);

        assert!(text.contains("$300.00"));
        assert!(text.contains("$200.00"));
        assert!(text.contains("Coffee"));
        assert!(text.contains("Food"));
    }

    #[test]
    fn test_renders_expense_dialog() {
        let settings = Settings::default();
        let store = BudgetStore::with_ids(Money::from_units(300), SequentialIds::new()).unwrap();
        let mut app = App::new(&settings, store);
        app.open_dialog(ActiveDialog::AddExpense);

        let mut terminal = Terminal::new(TestBackend::new(110, 30)).unwrap();
        terminal.draw(|frame| render(frame, &app)).unwrap();

        assert!(screen_text(&terminal).contains("New Expense"));
    }
}
