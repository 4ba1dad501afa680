//! Tracker panel
//!
//! Spent-ratio gauge plus the Budget, Available and Spent amounts.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

use crate::config::Settings;
use crate::models::Money;
use crate::state::BudgetState;

/// Render the tracker panel for `state`
pub fn render(frame: &mut Frame, state: &BudgetState, settings: &Settings, area: Rect) {
    let block = Block::default()
        .title(" Tracker ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::White));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Gauge
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Budget
            Constraint::Length(1), // Available
            Constraint::Length(1), // Spent
            Constraint::Min(1),    // Spacer
            Constraint::Length(1), // Reset hint
        ])
        .split(inner);

    render_gauge(frame, state, chunks[0]);

    let summary = state.summary();
    let available_color = if summary.available.is_negative() {
        Color::Red
    } else {
        Color::Green
    };

    amount_line(frame, chunks[2], "Budget", summary.budget, settings, Color::White);
    amount_line(frame, chunks[3], "Available", summary.available, settings, available_color);
    amount_line(frame, chunks[4], "Spent", summary.spent, settings, Color::Yellow);

    let hint = Line::from(vec![
        Span::styled("[R]", Style::default().fg(Color::Magenta)),
        Span::raw(" APP reset"),
    ]);
    frame.render_widget(Paragraph::new(hint), chunks[6]);
}

fn render_gauge(frame: &mut Frame, state: &BudgetState, area: Rect) {
    let ratio = state.spent_ratio();
    let color = match ratio {
        r if r > 1.0 => Color::Red,
        r if r >= 0.8 => Color::Yellow,
        _ => Color::Green,
    };

    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL).title(" Spent "))
        .gauge_style(Style::default().fg(color))
        .ratio(ratio.clamp(0.0, 1.0))
        .label(format!("{:.0}%", ratio * 100.0));

    frame.render_widget(gauge, area);
}

fn amount_line(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    amount: Money,
    settings: &Settings,
    color: Color,
) {
    let line = Line::from(vec![
        Span::styled(format!("{:>10}: ", label), Style::default().fg(Color::Cyan)),
        Span::styled(
            settings.format_money(amount),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}
