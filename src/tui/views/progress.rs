//! Step progress indicator
//!
//! Every step up to and including the current one is marked done.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::wizard::Step;

/// Build the indicator line for `current`
pub fn progress_line(current: Step) -> Line<'static> {
    let mut spans = Vec::new();

    for step in Step::ALL {
        if step != Step::Personal {
            let connector_style = if step <= current {
                Style::default().fg(Color::Green)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            spans.push(Span::styled(" ──── ", connector_style));
        }

        if step <= current {
            spans.push(Span::styled(
                format!("(✓) Step {}", step.number()),
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            ));
        } else {
            spans.push(Span::styled(
                format!("({}) Step {}", step.number(), step.number()),
                Style::default().fg(Color::DarkGray),
            ));
        }
    }

    Line::from(spans)
}

/// Render the progress header
pub fn render(frame: &mut Frame, current: Step, area: Rect) {
    let paragraph = Paragraph::new(progress_line(current))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::BOTTOM));

    frame.render_widget(paragraph, area);
}
