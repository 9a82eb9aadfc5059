//! Confirm dialog state.
//!
//! Data model for the destructive-action confirmation dialogs. The rendering
//! widget lives in streambox-tui. Each option carries the message to send
//! when it is chosen; declining is always index 0.

use crate::message::Message;

#[derive(Debug, Clone)]
pub struct ConfirmDialogState {
    pub title: String,
    pub message: String,
    pub options: Vec<(String, Message)>,
    /// Highlighted option. Starts on Cancel.
    pub selected: usize,
}

impl ConfirmDialogState {
    /// Create a generic confirmation dialog
    pub fn new(
        title: impl Into<String>,
        message: impl Into<String>,
        options: Vec<(&str, Message)>,
    ) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            options: options
                .into_iter()
                .map(|(label, msg)| (label.to_string(), msg))
                .collect(),
            selected: 0,
        }
    }

    pub fn force_stop(app: &str) -> Self {
        Self::new(
            "Force stop",
            format!(
                "Are you sure you want to force stop {app}? \
                 This may cause the app to misbehave."
            ),
            vec![
                ("Cancel", Message::DismissDialog),
                (
                    "Force Stop",
                    Message::ConfirmForceStop {
                        name: app.to_string(),
                    },
                ),
            ],
        )
    }

    pub fn clear_data(app: &str) -> Self {
        Self::new(
            "Clear data",
            format!(
                "Are you sure you want to clear all data for {app}? \
                 This will permanently delete all app data including \
                 accounts, settings, and files."
            ),
            vec![
                ("Cancel", Message::DismissDialog),
                (
                    "Clear Data",
                    Message::ConfirmClearData {
                        name: app.to_string(),
                    },
                ),
            ],
        )
    }

    pub fn clear_cache(app: &str) -> Self {
        Self::new(
            "Clear cache",
            format!("Clear cache for {app}?"),
            vec![
                ("Cancel", Message::DismissDialog),
                (
                    "Clear Cache",
                    Message::ConfirmClearCache {
                        name: app.to_string(),
                    },
                ),
            ],
        )
    }

    pub fn select_prev(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.options.len() {
            self.selected += 1;
        }
    }

    /// Message of the highlighted option
    pub fn selected_message(&self) -> Option<Message> {
        self.options.get(self.selected).map(|(_, msg)| msg.clone())
    }

    /// Message of the confirming (last) option, for the `y` shortcut
    pub fn confirm_message(&self) -> Option<Message> {
        self.options.last().map(|(_, msg)| msg.clone())
    }
}
