//! Terminal User Interface module
//!
//! A ratatui front end for the wizard: one screen per step, toasts for
//! validation errors, and a help overlay.

pub mod app;
pub mod event;
pub mod handler;
pub mod terminal;

// Views
pub mod views;

// Widgets
pub mod widgets;

// Dialogs
pub mod dialogs;

// Layout
pub mod layout;

pub use app::App;
pub use terminal::run_tui;
