//! Row model for the settings panels.
//!
//! Every panel is rendered as a list of rows; the key handler and the
//! renderer both use this module's ordering, so the highlighted row and the
//! activated row always agree.
//!
//! Row layout per panel:
//! - Main menu: the flattened [`crate::menu::MAIN_MENU`] items
//! - Network: wifi toggle, then one row per scanned network
//! - Accounts: sync toggle
//! - Apps (collapsed): recently opened apps, then "See all apps"
//! - Apps (expanded): "Show system apps" toggle, then the filtered app list
//! - App detail: Force Stop, Clear Data, Clear Cache
//! - Remote: "Pair remote or accessory" (paired devices are informational)
//! - Display: resolution, HDR, audio output
//! - About: "Check for Updates"
//! - Preferences / TV / Storage: no selectable rows

use streambox_core::{AppRecord, AppsState};

use crate::menu::{self, MenuAction};
use crate::message::Message;
use crate::navigation::{PanelId, PanelView};
use crate::state::AppState;

/// How many "recently opened" apps the collapsed Apps panel shows
pub const RECENT_APPS: usize = 5;

/// Recently opened apps: the first non-system apps in install order
pub fn recent_apps(apps: &AppsState) -> Vec<&AppRecord> {
    apps.installed
        .iter()
        .filter(|a| !a.system)
        .take(RECENT_APPS)
        .collect()
}

/// Number of selectable rows in the current settings view
pub fn row_count(state: &AppState) -> usize {
    match state.nav.current() {
        None => menu::main_menu_len(),
        Some(view) => panel_row_count(state, view),
    }
}

fn panel_row_count(state: &AppState, view: &PanelView) -> usize {
    if view.app_detail.is_some() {
        return 3;
    }
    match view.panel {
        PanelId::Network => 1 + state.store.network().wifi.available_networks.len(),
        PanelId::Accounts => 1,
        PanelId::Apps => {
            let apps = state.store.apps();
            if apps.show_all_apps {
                1 + apps.visible().count()
            } else {
                recent_apps(apps).len() + 1
            }
        }
        PanelId::Remote => 1,
        PanelId::Display => 3,
        PanelId::About => 1,
        PanelId::Preferences | PanelId::Tv | PanelId::Storage => 0,
    }
}

/// Keep the highlight inside the current row range after content changes
pub fn clamp_selection(state: &mut AppState) {
    let count = row_count(state);
    if count == 0 {
        state.nav.selected = 0;
    } else if state.nav.selected >= count {
        state.nav.selected = count - 1;
    }
}

/// Message produced by activating the highlighted row, if the row does
/// anything
pub fn activate(state: &AppState) -> Option<Message> {
    let selected = state.nav.selected;
    match state.nav.current() {
        None => match menu::main_menu_item(selected)?.action {
            MenuAction::Open(panel) => Some(Message::OpenPanel(panel)),
            MenuAction::Notice(text) => Some(Message::ShowToast {
                text: text.to_string(),
            }),
        },
        Some(view) => activate_panel(state, view, selected),
    }
}

fn activate_panel(state: &AppState, view: &PanelView, selected: usize) -> Option<Message> {
    if let Some(name) = &view.app_detail {
        return match selected {
            0 => Some(Message::RequestForceStop { name: name.clone() }),
            1 => Some(Message::RequestClearData { name: name.clone() }),
            2 => Some(Message::RequestClearCache { name: name.clone() }),
            _ => None,
        };
    }

    match view.panel {
        PanelId::Network => {
            if selected == 0 {
                return Some(Message::ToggleWifi);
            }
            let network = state
                .store
                .network()
                .wifi
                .available_networks
                .get(selected - 1)?;
            if network.connected {
                None
            } else {
                Some(Message::ConnectNetwork {
                    name: network.name.clone(),
                })
            }
        }
        PanelId::Accounts => (selected == 0).then_some(Message::ToggleAccountSync),
        PanelId::Apps => {
            let apps = state.store.apps();
            if apps.show_all_apps {
                if selected == 0 {
                    return Some(Message::ToggleShowSystemApps);
                }
                let app = apps.visible().nth(selected - 1)?;
                Some(Message::OpenAppDetail {
                    name: app.name.clone(),
                })
            } else {
                let recent = recent_apps(apps);
                match recent.get(selected) {
                    Some(app) => Some(Message::OpenAppDetail {
                        name: app.name.clone(),
                    }),
                    None => Some(Message::ShowAllApps),
                }
            }
        }
        PanelId::Remote => (selected == 0).then_some(Message::StartPairing),
        PanelId::Display => match selected {
            0 => Some(Message::CycleResolution),
            1 => Some(Message::ToggleHdr),
            2 => Some(Message::CycleAudioOutput),
            _ => None,
        },
        PanelId::About => (selected == 0).then_some(Message::CheckForUpdates),
        PanelId::Preferences | PanelId::Tv | PanelId::Storage => None,
    }
}
