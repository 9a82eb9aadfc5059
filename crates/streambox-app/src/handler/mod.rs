//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `keys`: Key event handlers for UI modes
//! - `settings`: Settings panel row model and activation

pub(crate) mod keys;
pub(crate) mod settings;
pub(crate) mod update;


use crate::message::Message;

// Re-export main entry point
pub use update::update;

pub use keys::handle_key;
pub use settings::{recent_apps, row_count, RECENT_APPS};

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self { message: Some(msg) }
    }
}
