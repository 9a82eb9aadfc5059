//! Settings overlay: a right-hand panel over the current page.
//!
//! The overlay renders whichever view the navigation stack is on: the main
//! menu or one of the sub-panels. Row ordering always matches the handler's
//! row model, so the highlight and the activated row agree.

mod main_menu;
mod panels;

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    widgets::{Clear, Paragraph, Widget},
};
use streambox_app::AppState;

use crate::layout;
use crate::theme::styles;

pub struct SettingsOverlay<'a> {
    state: &'a AppState,
}

impl<'a> SettingsOverlay<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }
}

impl Widget for SettingsOverlay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let overlay_area = layout::settings_overlay(area);
        Clear.render(overlay_area, buf);

        let block = styles::overlay_block(self.state.nav.title());
        let inner = block.inner(overlay_area);
        block.render(overlay_area, buf);

        let chunks =
            Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).split(inner);

        match self.state.nav.current() {
            None => main_menu::render(self.state, chunks[0], buf),
            Some(view) => panels::render(self.state, view, chunks[0], buf),
        }

        Paragraph::new(" ↑↓ select · Enter activate · Esc back")
            .style(styles::text_muted())
            .render(chunks[1], buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{test_state, TestTerminal};
    use streambox_app::{Message, PanelId};

    fn render_overlay(state: &AppState) -> TestTerminal {
        let mut term = TestTerminal::new();
        term.render_widget(SettingsOverlay::new(state), term.area());
        term
    }

    #[test]
    fn test_main_menu_sections_and_hint() {
        let (mut state, _dir) = test_state();
        state.nav.open();
        let term = render_overlay(&state);

        assert!(term.buffer_contains("Settings"));
        assert!(term.buffer_contains("Optimum TV Settings"));
        assert!(term.buffer_contains("General Settings"));
        assert!(term.buffer_contains("Esc back"));
    }

    #[test]
    fn test_main_menu_shows_selected_description() {
        let (mut state, _dir) = test_state();
        state.nav.open();
        let term = render_overlay(&state);
        // first item is Favorite Channels
        assert!(term.buffer_contains("Favorite Channels"));
        assert!(term.buffer_contains("Manage your favorite channels"));
    }

    #[test]
    fn test_overlay_titled_by_panel() {
        let (mut state, _dir) = test_state();
        state.nav.open();
        streambox_app::update(&mut state, Message::OpenPanel(PanelId::Network));
        let term = render_overlay(&state);
        assert!(term.buffer_contains("Network & Internet"));
    }

    #[test]
    fn test_network_panel_lists_networks() {
        let (mut state, _dir) = test_state();
        state.nav.open();
        streambox_app::update(&mut state, Message::OpenPanel(PanelId::Network));
        let term = render_overlay(&state);

        assert!(term.buffer_contains("Wi-Fi"));
        assert!(term.buffer_contains("Home_Network_5G"));
        assert!(term.buffer_contains("Guest_Network"));
        assert!(term.buffer_contains("Connected"));
        assert!(term.buffer_contains("Ethernet"));
        assert!(term.buffer_contains("Not connected"));
    }

    #[test]
    fn test_accounts_panel_shows_account() {
        let (mut state, _dir) = test_state();
        state.nav.open();
        streambox_app::update(&mut state, Message::OpenPanel(PanelId::Accounts));
        let term = render_overlay(&state);

        assert!(term.buffer_contains("user@gmail.com"));
        assert!(term.buffer_contains("Stream User"));
        assert!(term.buffer_contains("Sync"));
    }

    #[test]
    fn test_apps_panel_collapsed_shows_recent_and_see_all() {
        let (mut state, _dir) = test_state();
        state.nav.open();
        streambox_app::update(&mut state, Message::OpenPanel(PanelId::Apps));
        let term = render_overlay(&state);

        assert!(term.buffer_contains("Recently opened"));
        assert!(term.buffer_contains("Netflix"));
        assert!(term.buffer_contains("See all apps"));
        // system apps are hidden in the collapsed view
        assert!(!term.buffer_contains("Android System"));
    }

    #[test]
    fn test_apps_panel_expanded_shows_system_toggle() {
        let (mut state, _dir) = test_state();
        state.store.set_show_all_apps(true).unwrap();
        state.nav.open();
        streambox_app::update(&mut state, Message::OpenPanel(PanelId::Apps));
        let term = render_overlay(&state);

        assert!(term.buffer_contains("Show system apps"));
    }

    #[test]
    fn test_app_detail_shows_actions_with_sizes() {
        let (mut state, _dir) = test_state();
        state.nav.open();
        streambox_app::update(
            &mut state,
            Message::OpenAppDetail {
                name: "Netflix".to_string(),
            },
        );
        let term = render_overlay(&state);

        assert!(term.buffer_contains("Netflix"));
        assert!(term.buffer_contains("Version 8.5.0"));
        assert!(term.buffer_contains("Force Stop"));
        assert!(term.buffer_contains("Clear Data (200 MB)"));
        assert!(term.buffer_contains("Clear Cache (150 MB)"));
    }

    #[test]
    fn test_remote_panel_lists_devices() {
        let (mut state, _dir) = test_state();
        state.nav.open();
        streambox_app::update(&mut state, Message::OpenPanel(PanelId::Remote));
        let term = render_overlay(&state);

        assert!(term.buffer_contains("Stream Remote 1"));
        assert!(term.buffer_contains("85%"));
        assert!(term.buffer_contains("Pair remote or accessory"));
    }

    #[test]
    fn test_display_panel_shows_current_values() {
        let (mut state, _dir) = test_state();
        state.nav.open();
        streambox_app::update(&mut state, Message::OpenPanel(PanelId::Display));
        let term = render_overlay(&state);

        assert!(term.buffer_contains("Full HD (1080p)"));
        assert!(term.buffer_contains("HDR"));
        assert!(term.buffer_contains("HDMI"));
    }

    #[test]
    fn test_storage_panel_shows_usage() {
        let (mut state, _dir) = test_state();
        state.nav.open();
        streambox_app::update(&mut state, Message::OpenPanel(PanelId::Storage));
        let term = render_overlay(&state);

        assert!(term.buffer_contains("18.5 GB"));
        assert!(term.buffer_contains("32 GB"));
        assert!(term.buffer_contains("13.5 GB"));
    }

    #[test]
    fn test_about_panel_device_info() {
        let (mut state, _dir) = test_state();
        state.nav.open();
        streambox_app::update(&mut state, Message::OpenPanel(PanelId::About));
        let term = render_overlay(&state);

        assert!(term.buffer_contains("Optimum Stream Box"));
        assert!(term.buffer_contains("OSB123456789"));
        assert!(term.buffer_contains("2.1.0"));
        assert!(term.buffer_contains("Check for Updates"));
    }

    #[test]
    fn test_coming_soon_panels() {
        for panel in [PanelId::Preferences, PanelId::Tv] {
            let (mut state, _dir) = test_state();
            state.nav.open();
            streambox_app::update(&mut state, Message::OpenPanel(panel));
            let term = render_overlay(&state);
            assert!(term.buffer_contains("Content coming soon..."), "{panel:?}");
        }
    }
}
