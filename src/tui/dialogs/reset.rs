//! Reset confirmation
//!
//! Asks before the reset action throws every expense away.

use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::config::Settings;
use crate::state::BudgetState;
use crate::tui::layout::centered_rect_fixed;

/// Render the reset confirmation for the current state
pub fn render(frame: &mut Frame, state: &BudgetState, settings: &Settings) {
    let area = centered_rect_fixed(52, 8, frame.area());

    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" APP Reset ")
        .title_style(
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Magenta));

    let count = state.expenses.len();
    let noun = if count == 1 { "expense" } else { "expenses" };

    let lines = vec![
        Line::from(""),
        Line::from(format!("Remove {} {} ({})?", count, noun, settings.format_money(state.total_spent()))),
        Line::from(Span::styled(
            format!("The budget stays at {}.", settings.format_money(state.budget)),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("[Y]", Style::default().fg(Color::Green)),
            Span::raw(" Reset  "),
            Span::styled("[N/Esc]", Style::default().fg(Color::Red)),
            Span::raw(" Keep"),
        ]),
    ];

    let paragraph = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}
