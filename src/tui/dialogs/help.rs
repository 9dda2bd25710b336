//! Help dialog
//!
//! Lists the keyboard shortcuts

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::tui::layout::centered_rect;

/// Render the help dialog
pub fn render(frame: &mut Frame) {
    let area = centered_rect(60, 70, frame.area());

    // Clear the background
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Keyboard Shortcuts ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let paragraph = Paragraph::new(help_lines())
        .block(block)
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}

fn help_lines() -> Vec<Line<'static>> {
    vec![
        section("Steps"),
        Line::from(""),
        key_line("Enter", "Next step (checks required fields)"),
        key_line("Esc", "Previous step"),
        key_line("Ctrl+R", "Reset the form"),
        Line::from(""),
        section("Fields"),
        Line::from(""),
        key_line("Tab / Down", "Next field"),
        key_line("Shift+Tab / Up", "Previous field"),
        key_line("Left / Right", "Move cursor or change selection"),
        key_line("Space", "Toggle checkbox"),
        key_line("Backspace", "Delete character or clear selection"),
        Line::from(""),
        section("General"),
        Line::from(""),
        key_line("F1", "Show/hide help"),
        key_line("Ctrl+Q / Ctrl+C", "Quit"),
        Line::from(""),
        Line::from(vec![Span::styled(
            "Press Esc or F1 to close",
            Style::default().fg(Color::DarkGray),
        )]),
    ]
}

fn section(title: &'static str) -> Line<'static> {
    Line::from(vec![Span::styled(
        title,
        Style::default()
            .add_modifier(Modifier::BOLD)
            .fg(Color::Yellow),
    )])
}

/// Create a key binding line
fn key_line(key: &'static str, description: &'static str) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("{:>16}", key),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::raw(description),
    ])
}
