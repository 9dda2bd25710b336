//! Terminal setup and teardown
//!
//! This module handles initializing and restoring the terminal state,
//! including setting up the panic hook to restore the terminal on crash.

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::panic;
use std::time::Duration;

use tracing::info;

use crate::config::settings::Settings;
use crate::error::StepformError;
use crate::storage::KeyValueStore;

use super::app::App;
use super::event::EventHandler;
use super::handler::handle_event;

/// Type alias for our terminal
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Initialize the terminal for TUI mode
pub fn init_terminal() -> Result<Tui> {
    // Set up panic hook to restore terminal on panic
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = restore_terminal_impl();
        original_hook(panic_info);
    }));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;

    Ok(terminal)
}

/// Restore the terminal to its original state
pub fn restore_terminal() -> Result<()> {
    restore_terminal_impl()?;
    Ok(())
}

fn restore_terminal_impl() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

/// Run the TUI until the user quits
pub fn run_tui<S: KeyValueStore>(app: &mut App<S>, settings: &Settings) -> Result<()> {
    let mut terminal = init_terminal()?;
    info!(step = app.wizard.current_step().number(), "tui started");

    let result = event_loop(&mut terminal, app, settings);

    // Restore even when the loop failed
    restore_terminal()?;
    info!("tui stopped");

    result
}

fn event_loop<S: KeyValueStore>(
    terminal: &mut Tui,
    app: &mut App<S>,
    settings: &Settings,
) -> Result<()> {
    let events = EventHandler::new(Duration::from_millis(settings.tick_rate_ms));

    while !app.should_quit {
        terminal.draw(|frame| super::views::render(frame, app))?;

        let event = events
            .next()
            .map_err(|_| StepformError::Tui("terminal event stream closed".into()))?;
        handle_event(app, event);
    }

    Ok(())
}
