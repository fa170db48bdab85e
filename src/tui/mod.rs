//! Terminal user interface
//!
//! Terminal setup/teardown (with a panic hook that restores the screen) and
//! the async event loop driving the profile setup step.

pub mod app;
pub mod events;
pub mod profile_render;
pub mod profile_step;

use std::io::{self, Stdout};
use std::panic;

use anyhow::{Context, Result};
use crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use app::{App, StepOutcome};
use events::EventHandler;

use crate::profile::ProfileDraft;

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

    enable_raw_mode().context("failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)
        .context("failed to enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;

    Ok(terminal)
}

/// Restore the terminal to its original state
pub fn restore_terminal() -> Result<()> {
    restore_terminal_impl()?;
    Ok(())
}

fn restore_terminal_impl() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), DisableBracketedPaste, LeaveAlternateScreen)?;
    Ok(())
}

/// Run the profile setup step until the user navigates out of it.
///
/// Returns the navigation outcome together with the draft as it stood when
/// the loop ended; the caller decides what to do with both.
pub async fn run() -> Result<(StepOutcome, ProfileDraft)> {
    let mut terminal = init_terminal()?;

    let mut app = App::new();
    let mut events = EventHandler::new();
    EventHandler::start_terminal_listener(events.sender());

    loop {
        terminal.draw(|frame| {
            profile_render::render(frame, &app.step, &app.draft);
        })?;

        let Some(event) = events.next().await else {
            break;
        };
        app.handle_event(event);

        if app.should_quit {
            break;
        }
    }

    restore_terminal()?;

    let outcome = app.outcome.unwrap_or(StepOutcome::Cancelled);
    Ok((outcome, app.draft))
}
