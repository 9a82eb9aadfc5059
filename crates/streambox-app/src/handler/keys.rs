//! Key event handlers for UI modes.
//!
//! Translates raw key events into semantic messages. Which handler runs is
//! decided by the current [`UiMode`]: the confirm dialog swallows everything
//! while open, then the settings overlay, then the pages.

use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{AppState, Page, UiMode};

/// Map a key event to a message for the current UI mode
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    match state.ui_mode() {
        UiMode::Normal => handle_page_key(state, key),
        UiMode::Settings => handle_settings_key(key),
        UiMode::ConfirmDialog => handle_dialog_key(key),
    }
}

fn handle_page_key(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('q') | InputKey::CharCtrl('c') | InputKey::Esc => Some(Message::Quit),
        InputKey::Char('s') => Some(Message::OpenSettings),
        InputKey::Left | InputKey::BackTab => Some(Message::PrevPage),
        InputKey::Right | InputKey::Tab => Some(Message::NextPage),
        InputKey::Home => Some(Message::SelectPage(Page::Home)),
        InputKey::Enter if state.page == Page::Home => Some(Message::ShowToast {
            text: "Now playing: News 12".to_string(),
        }),
        _ => None,
    }
}

fn handle_settings_key(key: InputKey) -> Option<Message> {
    match key {
        InputKey::CharCtrl('c') => Some(Message::Quit),
        InputKey::Char('s') => Some(Message::CloseSettings),
        InputKey::Up => Some(Message::SelectionUp),
        InputKey::Down => Some(Message::SelectionDown),
        InputKey::Enter | InputKey::Right => Some(Message::Activate),
        InputKey::Esc | InputKey::Backspace | InputKey::Left => Some(Message::NavigateBack),
        _ => None,
    }
}

fn handle_dialog_key(key: InputKey) -> Option<Message> {
    match key {
        InputKey::CharCtrl('c') => Some(Message::Quit),
        InputKey::Left | InputKey::Up => Some(Message::DialogPrev),
        InputKey::Right | InputKey::Down | InputKey::Tab => Some(Message::DialogNext),
        InputKey::Enter => Some(Message::DialogActivate),
        InputKey::Char('y') | InputKey::Char('Y') => Some(Message::DialogConfirm),
        InputKey::Esc | InputKey::Char('n') | InputKey::Char('N') => Some(Message::DismissDialog),
        _ => None,
    }
}
