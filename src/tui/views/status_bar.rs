//! Status bar view
//!
//! Shows the available amount, the last status message and key hints

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::config::Settings;
use crate::state::BudgetState;

/// Render the status bar
pub fn render(
    frame: &mut Frame,
    state: &BudgetState,
    status_message: Option<&str>,
    settings: &Settings,
    area: Rect,
) {
    let available = state.available();
    let available_color = if state.is_overspent() {
        Color::Red
    } else {
        Color::Green
    };

    let mut spans = vec![
        Span::styled(" Available: ", Style::default().fg(Color::White)),
        Span::styled(
            settings.format_money(available),
            Style::default()
                .fg(available_color)
                .add_modifier(Modifier::BOLD),
        ),
    ];

    if let Some(message) = status_message {
        spans.push(Span::raw(" │ "));
        spans.push(Span::styled(
            message.to_string(),
            Style::default().fg(Color::Yellow),
        ));
    }

    spans.push(Span::raw(" │ "));
    spans.push(Span::styled(
        "a:add  R:reset  ?:help  q:quit",
        Style::default().fg(Color::DarkGray),
    ));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
