//! Status bar view
//!
//! Shows the current step, any status message, and key hints

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::storage::KeyValueStore;
use crate::tui::app::App;

/// Render the status bar
pub fn render<S: KeyValueStore>(frame: &mut Frame, app: &App<S>, area: Rect) {
    let mut spans = vec![Span::styled(
        format!(" {} ", app.wizard.current_step()),
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
    )];

    if let Some(ref message) = app.status_message {
        spans.push(Span::raw(" │ "));
        spans.push(Span::styled(
            message.as_str(),
            Style::default().fg(Color::Yellow),
        ));
    }

    spans.push(Span::raw(" │ "));
    spans.push(Span::styled(
        "Tab:field  Enter:next  Esc:back  F1:help  Ctrl+Q:quit",
        Style::default().fg(Color::DarkGray),
    ));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
