//! Synchronous event loop: draw, poll, update.
//!
//! One turn per iteration: draw the frame, wait up to the poll timeout for
//! input (a timeout becomes a `Tick`), then run the update chain until it
//! produces no follow-up message.

use streambox_app::{update, AppState};
use streambox_core::Result;
use tracing::info;

use crate::{event, render, terminal};

/// Run the TUI until the user quits. Restores the terminal on exit and on
/// panic.
pub fn run(mut state: AppState) -> Result<()> {
    terminal::install_panic_hook();
    let mut term = ratatui::init();
    info!("terminal initialized");

    let result = run_loop(&mut term, &mut state);
    ratatui::restore();
    result
}

fn run_loop(term: &mut ratatui::DefaultTerminal, state: &mut AppState) -> Result<()> {
    loop {
        term.draw(|frame| render::view(frame, state))?;

        if let Some(msg) = event::poll()? {
            let mut result = update(state, msg);
            while let Some(next) = result.message.take() {
                result = update(state, next);
            }
        }

        if state.should_quit {
            info!("event loop finished");
            return Ok(());
        }
    }
}
