//! TUI Views module
//!
//! The wizard screen: progress header, the current step's form, navigation
//! controls and the status bar, with toasts and help drawn on top.

pub mod form;
pub mod progress;
pub mod status_bar;

use ratatui::Frame;

use crate::storage::KeyValueStore;

use super::app::App;
use super::dialogs;
use super::layout::{toast_area, AppLayout};
use super::widgets::NotificationWidget;

/// Render the entire application
pub fn render<S: KeyValueStore>(frame: &mut Frame, app: &App<S>) {
    let layout = AppLayout::new(frame.area());

    progress::render(frame, app.wizard.current_step(), layout.progress);
    form::render(frame, app, layout.form);
    form::render_nav(frame, app, layout.nav);
    status_bar::render(frame, app, layout.status_bar);

    if let Some(notification) = app.wizard.notifier().current() {
        let area = toast_area(40, 4, frame.area());
        frame.render_widget(NotificationWidget::new(notification), area);
    }

    if app.show_help {
        dialogs::help::render(frame);
    }
}
