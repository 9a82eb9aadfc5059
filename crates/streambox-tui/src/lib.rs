//! streambox-tui - Terminal UI for streambox
//!
//! The view half of the TEA loop: ratatui widgets, event polling and the
//! synchronous runner. State and update logic live in streambox-app.

pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

// Re-export main entry point
pub use runner::run;
