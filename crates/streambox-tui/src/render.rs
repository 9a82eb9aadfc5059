//! Top-level view function: projects the whole AppState onto one frame.
//!
//! Pure rendering, no state mutation. The full screen is redrawn every
//! event-loop turn.

use std::time::Instant;

use ratatui::Frame;
use streambox_app::{AppState, Page};

use crate::layout;
use crate::widgets::{AppsPage, ConfirmDialog, HomePage, Placeholder, SettingsOverlay, Toast, TopNav};

pub fn view(frame: &mut Frame, state: &AppState) {
    let now = Instant::now();
    let areas = layout::create(frame.area());

    frame.render_widget(TopNav::new(state.page), areas.nav);

    match state.page {
        Page::Home => frame.render_widget(HomePage::new(state.show_splash(now)), areas.content),
        Page::Apps => frame.render_widget(AppsPage, areas.content),
        page => frame.render_widget(Placeholder::new(page.title()), areas.content),
    }

    if state.nav.is_open() || state.nav.is_closing(now) {
        frame.render_widget(SettingsOverlay::new(state), frame.area());
    }

    if let Some(toast) = &state.toast {
        if toast.is_rendered() {
            frame.render_widget(Toast::new(toast), areas.content);
        }
    }

    if let Some(dialog) = &state.confirm_dialog {
        frame.render_widget(ConfirmDialog::new(dialog), frame.area());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{test_state, TestTerminal};
    use std::time::{Duration, Instant};
    use streambox_app::{ConfirmDialogState, Message, ToastPhase, ToastState};

    #[test]
    fn test_view_renders_nav_and_home() {
        let (mut state, _dir) = test_state();
        // past the splash window
        state.started_at = Instant::now() - Duration::from_secs(10);
        let mut term = TestTerminal::new();
        term.draw_with(|frame| view(frame, &state));

        assert!(term.buffer_contains("Optimum.tv"));
        assert!(term.buffer_contains("News 12"));
    }

    #[test]
    fn test_view_renders_splash_first() {
        let (state, _dir) = test_state();
        let mut term = TestTerminal::new();
        term.draw_with(|frame| view(frame, &state));
        assert!(term.buffer_contains("Welcome to Stream"));
    }

    #[test]
    fn test_view_renders_placeholder_pages() {
        let (mut state, _dir) = test_state();
        state.page = Page::Guide;
        let mut term = TestTerminal::new();
        term.draw_with(|frame| view(frame, &state));
        assert!(term.buffer_contains("Guide content coming soon..."));
    }

    #[test]
    fn test_view_renders_settings_overlay_over_page() {
        let (mut state, _dir) = test_state();
        streambox_app::update(&mut state, Message::OpenSettings);
        let mut term = TestTerminal::new();
        term.draw_with(|frame| view(frame, &state));

        assert!(term.buffer_contains("Optimum.tv"));
        assert!(term.buffer_contains("General Settings"));
    }

    #[test]
    fn test_view_renders_dialog_on_top() {
        let (mut state, _dir) = test_state();
        state.confirm_dialog = Some(ConfirmDialogState::clear_data("Netflix"));
        let mut term = TestTerminal::new();
        term.draw_with(|frame| view(frame, &state));
        assert!(term.buffer_contains("Clear data"));
    }

    #[test]
    fn test_view_skips_entering_toast() {
        let (mut state, _dir) = test_state();
        state.started_at = Instant::now() - Duration::from_secs(10);
        state.toast = Some(ToastState::new("Connecting to Guest_Network...", Instant::now()));
        let mut term = TestTerminal::new();
        term.draw_with(|frame| view(frame, &state));
        assert!(!term.buffer_contains("Connecting to Guest_Network..."));

        if let Some(toast) = &mut state.toast {
            toast.phase = ToastPhase::Visible;
        }
        term.draw_with(|frame| view(frame, &state));
        assert!(term.buffer_contains("Connecting to Guest_Network..."));
    }
}
