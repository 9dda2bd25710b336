//! Layout definitions for the TUI
//!
//! A centered column: progress header, form panel, navigation row, status
//! bar.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Widest the form column grows
const MAX_WIDTH: u16 = 76;

/// Layout regions for the TUI
pub struct AppLayout {
    /// Step progress indicator
    pub progress: Rect,
    /// Fields of the current step
    pub form: Rect,
    /// Back / Next controls
    pub nav: Rect,
    /// Status bar at the bottom
    pub status_bar: Rect,
}

impl AppLayout {
    /// Calculate layout from available area
    pub fn new(area: Rect) -> Self {
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(3),    // Main column
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        let column = centered_column(MAX_WIDTH, vertical[0]);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Progress
                Constraint::Min(6),    // Form
                Constraint::Length(1), // Navigation
            ])
            .split(column);

        Self {
            progress: chunks[0],
            form: chunks[1],
            nav: chunks[2],
            status_bar: vertical[1],
        }
    }
}

/// Horizontally center a column of at most `max_width`
pub fn centered_column(max_width: u16, r: Rect) -> Rect {
    let width = max_width.min(r.width);
    let x = r.x + (r.width - width) / 2;
    Rect::new(x, r.y, width, r.height)
}

/// Create a centered rect for dialogs
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Top-right corner slot for toast notifications
pub fn toast_area(width: u16, height: u16, r: Rect) -> Rect {
    let width = width.min(r.width);
    let height = height.min(r.height);
    Rect::new(r.x + r.width - width, r.y, width, height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_fits_area() {
        let area = Rect::new(0, 0, 120, 40);
        let layout = AppLayout::new(area);

        assert_eq!(layout.status_bar.y, 39);
        assert_eq!(layout.form.width, MAX_WIDTH);
        assert_eq!(layout.progress.height, 3);
        assert_eq!(layout.nav.height, 1);
    }

    #[test]
    fn test_narrow_terminal_uses_full_width() {
        let area = Rect::new(0, 0, 50, 30);
        let layout = AppLayout::new(area);
        assert_eq!(layout.form.width, 50);
        assert_eq!(layout.form.x, 0);
    }

    #[test]
    fn test_toast_area_top_right() {
        let r = toast_area(40, 4, Rect::new(0, 0, 100, 30));
        assert_eq!(r, Rect::new(60, 0, 40, 4));

        let clipped = toast_area(40, 4, Rect::new(0, 0, 20, 2));
        assert_eq!(clipped, Rect::new(0, 0, 20, 2));
    }
}
