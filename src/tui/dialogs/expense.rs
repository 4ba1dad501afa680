//! New expense dialog
//!
//! Modal form with name, amount, category selector and date. Tab moves
//! between fields; the category field cycles through the fixed list.

use chrono::{Local, NaiveDate};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::error::TrackerResult;
use crate::forms::{ExpenseField, ExpenseForm};
use crate::models::{DraftExpense, CATEGORIES};
use crate::tui::layout::centered_rect_fixed;
use crate::tui::widgets::input::TextInput;

/// State for the new expense dialog
#[derive(Debug, Clone)]
pub struct ExpenseFormState {
    /// Currently focused field
    pub focused_field: ExpenseField,

    pub name_input: TextInput,

    pub amount_input: TextInput,

    /// Index into `CATEGORIES`; `None` until the user picks one
    pub category_index: Option<usize>,

    pub date_input: TextInput,

    /// Error message to display
    pub error_message: Option<String>,
}

impl Default for ExpenseFormState {
    fn default() -> Self {
        Self::new(Local::now().date_naive())
    }
}

impl ExpenseFormState {
    /// Create an empty form dated `today`
    pub fn new(today: NaiveDate) -> Self {
        let form = ExpenseForm::new(today);
        let mut state = Self {
            focused_field: ExpenseField::ExpenseName,
            name_input: TextInput::new()
                .label(ExpenseField::ExpenseName.label())
                .placeholder("Add name of expense"),
            amount_input: TextInput::new()
                .label(ExpenseField::Amount.label())
                .placeholder("e.g. 300"),
            category_index: None,
            date_input: TextInput::new()
                .label(ExpenseField::Date.label())
                .placeholder("YYYY-MM-DD")
                .content(form.date),
            error_message: None,
        };
        state.update_focus();
        state
    }

    /// Move to the next field
    pub fn next_field(&mut self) {
        self.focused_field = self.focused_field.next();
        self.update_focus();
    }

    /// Move to the previous field
    pub fn prev_field(&mut self) {
        self.focused_field = self.focused_field.prev();
        self.update_focus();
    }

    fn update_focus(&mut self) {
        self.name_input.focused = self.focused_field == ExpenseField::ExpenseName;
        self.amount_input.focused = self.focused_field == ExpenseField::Amount;
        self.date_input.focused = self.focused_field == ExpenseField::Date;
    }

    /// The text input behind the focused field, if it is a text field
    pub fn focused_input(&mut self) -> Option<&mut TextInput> {
        match self.focused_field {
            ExpenseField::ExpenseName => Some(&mut self.name_input),
            ExpenseField::Amount => Some(&mut self.amount_input),
            ExpenseField::Category => None,
            ExpenseField::Date => Some(&mut self.date_input),
        }
    }

    /// Select the next category, wrapping around
    pub fn next_category(&mut self) {
        self.category_index = Some(match self.category_index {
            Some(i) => (i + 1) % CATEGORIES.len(),
            None => 0,
        });
    }

    /// Select the previous category, wrapping around
    pub fn prev_category(&mut self) {
        self.category_index = Some(match self.category_index {
            Some(0) | None => CATEGORIES.len() - 1,
            Some(i) => i - 1,
        });
    }

    /// Copy the inputs into a plain [`ExpenseForm`]
    pub fn to_form(&self) -> ExpenseForm {
        let mut form = ExpenseForm::new(Local::now().date_naive());
        form.handle_change(ExpenseField::ExpenseName, self.name_input.value());
        form.handle_change(ExpenseField::Amount, self.amount_input.value());
        let category = self
            .category_index
            .and_then(|i| CATEGORIES.get(i))
            .map(|c| c.id)
            .unwrap_or_default();
        form.handle_change(ExpenseField::Category, category);
        form.handle_change(ExpenseField::Date, self.date_input.value());
        form
    }

    /// Validate the inputs; on failure the message is kept for display
    pub fn build_draft(&mut self) -> TrackerResult<DraftExpense> {
        let result = self.to_form().submit();
        match &result {
            Ok(_) => self.clear_error(),
            Err(err) => self.set_error(err.to_string()),
        }
        result
    }

    pub fn clear_error(&mut self) {
        self.error_message = None;
    }

    pub fn set_error(&mut self, msg: impl Into<String>) {
        self.error_message = Some(msg.into());
    }
}

/// Render the new expense dialog
pub fn render(frame: &mut Frame, form: &ExpenseFormState) {
    let area = centered_rect_fixed(64, 12, frame.area());

    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" New Expense ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Name
            Constraint::Length(1), // Amount
            Constraint::Length(1), // Category
            Constraint::Length(1), // Date
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Error
            Constraint::Length(1), // Hints
            Constraint::Min(0),
        ])
        .split(inner);

    frame.render_widget(&form.name_input, chunks[1]);
    frame.render_widget(&form.amount_input, chunks[2]);
    render_category_field(frame, form, chunks[3]);
    frame.render_widget(&form.date_input, chunks[4]);

    if let Some(ref error) = form.error_message {
        let error_line = Line::from(Span::styled(
            error.as_str(),
            Style::default().fg(Color::Red),
        ));
        frame.render_widget(Paragraph::new(error_line), chunks[6]);
    }

    let hints = Line::from(vec![
        Span::styled("[Tab]", Style::default().fg(Color::Yellow)),
        Span::raw(" Next  "),
        Span::styled("[←/→]", Style::default().fg(Color::Yellow)),
        Span::raw(" Category  "),
        Span::styled("[Enter]", Style::default().fg(Color::Green)),
        Span::raw(" Add Expense  "),
        Span::styled("[Esc]", Style::default().fg(Color::Red)),
        Span::raw(" Cancel"),
    ]);
    frame.render_widget(Paragraph::new(hints), chunks[7]);
}

fn render_category_field(frame: &mut Frame, form: &ExpenseFormState, area: Rect) {
    let focused = form.focused_field == ExpenseField::Category;

    let label_style = if focused {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Cyan)
    };

    let selected = form.category_index.and_then(|i| CATEGORIES.get(i));
    let value = match selected {
        Some(category) if focused => Span::styled(
            format!("< {} >", category.name),
            Style::default().fg(Color::Black).bg(Color::Cyan),
        ),
        Some(category) => Span::styled(category.name, Style::default().fg(Color::Yellow)),
        None if focused => Span::styled(
            "< Select a category >",
            Style::default().fg(Color::Black).bg(Color::Cyan),
        ),
        None => Span::styled("Select a category", Style::default().fg(Color::DarkGray)),
    };

    let line = Line::from(vec![
        Span::styled(format!("{:>14}: ", ExpenseField::Category.label()), label_style),
        value,
    ]);
    frame.render_widget(Paragraph::new(line), area);
}
