//! Form view
//!
//! Renders the fields of the current step, one row per field, and the
//! Back / Next controls underneath.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::storage::KeyValueStore;
use crate::tui::app::App;
use crate::tui::widgets::TextInput;
use crate::wizard::{Field, FieldKind};

/// Column reserved for field labels
const LABEL_WIDTH: u16 = 24;

/// Render the form panel
pub fn render<S: KeyValueStore>(frame: &mut Frame, app: &App<S>, area: Rect) {
    let step = app.wizard.current_step();
    let block = Block::default()
        .title(format!(" {} ", step.title()))
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let missing = if app.show_missing {
        app.wizard.missing_fields()
    } else {
        Vec::new()
    };

    for (index, field) in app.fields().iter().enumerate() {
        let y = inner.y + index as u16;
        if y >= inner.y + inner.height {
            break;
        }
        let row = Rect::new(inner.x + 1, y, inner.width.saturating_sub(2), 1);
        let focused = index == app.focused_index;
        let invalid = missing.contains(field);

        match field.kind() {
            FieldKind::Text if focused => {
                let mut input = app.input.clone();
                input.label = field.label().to_string();
                input.label_width = LABEL_WIDTH;
                input.placeholder = field.placeholder().to_string();
                input.focused = true;
                input.invalid = invalid;
                frame.render_widget(&input, row);
            }
            FieldKind::Text => {
                let input = TextInput::new()
                    .label(field.label())
                    .label_width(LABEL_WIDTH)
                    .placeholder(field.placeholder())
                    .content(app.wizard.value(*field))
                    .invalid(invalid);
                frame.render_widget(&input, row);
            }
            FieldKind::Choice(_) | FieldKind::Toggle => {
                let line = choice_line(*field, app.wizard.value(*field), focused, invalid);
                frame.render_widget(Paragraph::new(line), row);
            }
        }
    }
}

/// Row for a select or checkbox field
fn choice_line(field: Field, value: &str, focused: bool, invalid: bool) -> Line<'static> {
    let label_style = if invalid {
        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
    } else if focused {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Yellow)
    };
    let label = format!("{}: ", field.label());
    let padding = (LABEL_WIDTH as usize).saturating_sub(label.chars().count());

    let value_style = if focused {
        Style::default().fg(Color::Black).bg(Color::Cyan)
    } else {
        Style::default().fg(Color::White)
    };

    let value_span = match field.kind() {
        FieldKind::Toggle => {
            let mark = if value == "true" { "[x]" } else { "[ ]" };
            Span::styled(mark, value_style)
        }
        _ if value.is_empty() => Span::styled(
            format!("◀ {} ▶", field.placeholder()),
            if focused {
                value_style
            } else {
                Style::default().fg(Color::DarkGray)
            },
        ),
        _ => Span::styled(format!("◀ {} ▶", value), value_style),
    };

    Line::from(vec![
        Span::styled(label, label_style),
        Span::raw(" ".repeat(padding)),
        value_span,
    ])
}

/// Render the Back / Next row
pub fn render_nav<S: KeyValueStore>(frame: &mut Frame, app: &App<S>, area: Rect) {
    let back_style = if app.wizard.can_go_back() {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let mut spans = vec![Span::styled(" [Esc] Back ", back_style)];

    if app.wizard.shows_next() {
        spans.push(Span::raw("   "));
        spans.push(Span::styled(
            " [Enter] Next ",
            Style::default()
                .fg(Color::Black)
                .bg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
