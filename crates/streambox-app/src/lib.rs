//! # streambox-app - Application State & Update Logic
//!
//! The model and update half of the TEA loop: settings store with
//! write-through persistence, the settings overlay navigation stack,
//! messages, key handlers and the `update()` function. Rendering lives in
//! streambox-tui; this crate never touches the terminal.

pub mod confirm_dialog;
pub mod handler;
pub mod input_key;
pub mod menu;
pub mod message;
pub mod navigation;
pub mod notification;
pub mod state;
pub mod store;

pub use confirm_dialog::ConfirmDialogState;
pub use handler::update::update;
pub use handler::{handle_key, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use navigation::{HistoryEntry, PanelId, PanelView, SettingsNav, CLOSE_ANIMATION};
pub use notification::{ToastPhase, ToastState};
pub use state::{AppState, Page, PendingConnect, UiMode};
pub use store::{SettingsStore, SETTINGS_FILE};
