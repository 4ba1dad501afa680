//! Expense list view

use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use crate::config::Settings;
use crate::models::{category_name, Expense};

/// Render the expense list with the selected row highlighted
pub fn render(
    frame: &mut Frame,
    expenses: &[Expense],
    selected: usize,
    settings: &Settings,
    area: Rect,
) {
    let block = Block::default()
        .title(format!(" Expenses ({}) ", expenses.len()))
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::White));

    if expenses.is_empty() {
        let text = Paragraph::new("No expenses yet. Press 'a' to add one.")
            .block(block)
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(text, area);
        return;
    }

    let header = Row::new(["Date", "Expense", "Category", "Amount"].map(|h| {
        Cell::from(h).style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
    }));

    let rows = expenses.iter().map(|e| {
        Row::new(vec![
            Cell::from(e.date.format(&settings.date_format).to_string()),
            Cell::from(e.expense_name.clone()),
            Cell::from(category_name(&e.category).to_string()),
            Cell::from(settings.format_money(e.amount)),
        ])
    });

    let widths = [
        Constraint::Length(12),
        Constraint::Min(16),
        Constraint::Length(24),
        Constraint::Length(12),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ");

    let mut state = TableState::default().with_selected(Some(selected.min(expenses.len() - 1)));
    frame.render_stateful_widget(table, area, &mut state);
}
