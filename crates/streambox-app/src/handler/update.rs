//! Main update() function and message dispatch (TEA pattern)

use std::time::Instant;

use streambox_core::prelude::*;

use crate::confirm_dialog::ConfirmDialogState;
use crate::message::Message;
use crate::navigation::PanelView;
use crate::notification::ToastState;
use crate::state::{AppState, PendingConnect, CONNECT_DELAY, PAIRING_DELAY, UPDATE_CHECK_DELAY};

use super::{settings, UpdateResult};

/// Process one message against the state. Returned follow-up messages are
/// fed back into `update` by the event loop.
pub fn update(state: &mut AppState, msg: Message) -> UpdateResult {
    let now = Instant::now();
    match msg {
        Message::Key(key) => match super::keys::handle_key(state, key) {
            Some(next) => UpdateResult::message(next),
            None => UpdateResult::none(),
        },

        Message::Tick => handle_tick(state, now),

        Message::Quit => {
            info!("quit requested");
            state.should_quit = true;
            UpdateResult::none()
        }

        Message::SelectPage(page) => {
            state.page = page;
            UpdateResult::none()
        }
        Message::NextPage => {
            state.page = state.page.next();
            UpdateResult::none()
        }
        Message::PrevPage => {
            state.page = state.page.prev();
            UpdateResult::none()
        }

        Message::OpenSettings => {
            state.nav.open();
            UpdateResult::none()
        }
        Message::CloseSettings => {
            state.nav.close(now);
            cancel_pending(state);
            UpdateResult::none()
        }
        Message::NavigateBack => {
            state.nav.back(now);
            if !state.nav.is_open() {
                cancel_pending(state);
            }
            settings::clamp_selection(state);
            UpdateResult::none()
        }
        Message::SelectionUp => {
            if state.nav.selected > 0 {
                state.nav.selected -= 1;
            }
            UpdateResult::none()
        }
        Message::SelectionDown => {
            let count = settings::row_count(state);
            if count > 0 && state.nav.selected + 1 < count {
                state.nav.selected += 1;
            }
            UpdateResult::none()
        }
        Message::Activate => match settings::activate(state) {
            Some(next) => UpdateResult::message(next),
            None => UpdateResult::none(),
        },
        Message::OpenPanel(panel) => {
            state.nav.navigate_to(PanelView::panel(panel), panel.title());
            UpdateResult::none()
        }
        Message::OpenAppDetail { name } => {
            state
                .nav
                .navigate_to(PanelView::app_detail(name.clone()), name);
            UpdateResult::none()
        }

        Message::ToggleWifi => {
            let enabled = state.store.network().wifi.enabled;
            persist(state.store.set_wifi_enabled(!enabled));
            if enabled {
                // turned off; forget any connect in flight
                state.pending_connect = None;
            }
            UpdateResult::none()
        }
        Message::ConnectNetwork { name } => {
            if state.store.network().wifi.connected.as_deref() == Some(&name) {
                return UpdateResult::none();
            }
            state.toast = Some(ToastState::new(format!("Connecting to {name}..."), now));
            state.pending_connect = Some(PendingConnect {
                ssid: name,
                deadline: now + CONNECT_DELAY,
            });
            UpdateResult::none()
        }
        Message::ToggleAccountSync => {
            let sync = state.store.account().google_account.sync;
            persist(state.store.set_account_sync(!sync));
            UpdateResult::none()
        }
        Message::ShowAllApps => {
            persist(state.store.set_show_all_apps(true));
            state.nav.selected = 0;
            UpdateResult::none()
        }
        Message::ToggleShowSystemApps => {
            let show = state.store.apps().show_system_apps;
            persist(state.store.set_show_system_apps(!show));
            settings::clamp_selection(state);
            UpdateResult::none()
        }
        Message::CycleResolution => {
            let next = state.store.display().resolution.next();
            persist(state.store.set_resolution(next));
            UpdateResult::none()
        }
        Message::ToggleHdr => {
            let hdr = state.store.display().hdr;
            persist(state.store.set_hdr(!hdr));
            UpdateResult::none()
        }
        Message::CycleAudioOutput => {
            let next = state.store.display().audio_output.next();
            persist(state.store.set_audio_output(next));
            UpdateResult::none()
        }
        Message::StartPairing => {
            state.toast = Some(ToastState::new("Searching for new remotes...", now));
            state.pending_pairing = Some(now + PAIRING_DELAY);
            UpdateResult::none()
        }
        Message::CheckForUpdates => {
            state.toast = Some(ToastState::new("Checking for updates...", now));
            state.pending_update_check = Some(now + UPDATE_CHECK_DELAY);
            UpdateResult::none()
        }

        Message::RequestForceStop { name } => {
            state.confirm_dialog = Some(ConfirmDialogState::force_stop(&name));
            UpdateResult::none()
        }
        Message::RequestClearData { name } => {
            state.confirm_dialog = Some(ConfirmDialogState::clear_data(&name));
            UpdateResult::none()
        }
        Message::RequestClearCache { name } => {
            state.confirm_dialog = Some(ConfirmDialogState::clear_cache(&name));
            UpdateResult::none()
        }
        Message::ConfirmForceStop { name } => {
            info!(app = %name, "force stop");
            state.toast = Some(ToastState::new(format!("{name} force stopped"), now));
            UpdateResult::none()
        }
        Message::ConfirmClearData { name } => {
            info!(app = %name, "clear data");
            persist(state.store.clear_app_data(&name));
            state.toast = Some(ToastState::new(format!("Data cleared for {name}"), now));
            UpdateResult::none()
        }
        Message::ConfirmClearCache { name } => {
            info!(app = %name, "clear cache");
            persist(state.store.clear_app_cache(&name));
            state.toast = Some(ToastState::new(format!("Cache cleared for {name}"), now));
            UpdateResult::none()
        }

        Message::DialogPrev => {
            if let Some(dialog) = &mut state.confirm_dialog {
                dialog.select_prev();
            }
            UpdateResult::none()
        }
        Message::DialogNext => {
            if let Some(dialog) = &mut state.confirm_dialog {
                dialog.select_next();
            }
            UpdateResult::none()
        }
        Message::DialogActivate => match state.confirm_dialog.take() {
            Some(dialog) => match dialog.selected_message() {
                Some(next) => UpdateResult::message(next),
                None => UpdateResult::none(),
            },
            None => UpdateResult::none(),
        },
        Message::DialogConfirm => match state.confirm_dialog.take() {
            Some(dialog) => match dialog.confirm_message() {
                Some(next) => UpdateResult::message(next),
                None => UpdateResult::none(),
            },
            None => UpdateResult::none(),
        },
        Message::DismissDialog => {
            state.confirm_dialog = None;
            UpdateResult::none()
        }

        Message::ShowToast { text } => {
            state.toast = Some(ToastState::new(text, now));
            UpdateResult::none()
        }
    }
}

fn handle_tick(state: &mut AppState, now: Instant) -> UpdateResult {
    state.nav.finish_close(now);

    if let Some(toast) = &mut state.toast {
        if !toast.advance(now) {
            state.toast = None;
        }
    }

    if let Some(pending) = state.pending_connect.take() {
        if now >= pending.deadline {
            persist(state.store.connect_network(&pending.ssid));
            state.toast = Some(ToastState::new(
                format!("Connected to {}", pending.ssid),
                now,
            ));
        } else {
            state.pending_connect = Some(pending);
        }
    }

    if let Some(deadline) = state.pending_pairing {
        if now >= deadline {
            state.pending_pairing = None;
            state.toast = Some(ToastState::new("No new remotes found", now));
        }
    }

    if let Some(deadline) = state.pending_update_check {
        if now >= deadline {
            state.pending_update_check = None;
            state.toast = Some(ToastState::new("System is up to date", now));
        }
    }

    UpdateResult::none()
}

/// Timers belong to the overlay; closing it abandons them
fn cancel_pending(state: &mut AppState) {
    state.pending_connect = None;
    state.pending_pairing = None;
    state.pending_update_check = None;
}

fn persist(result: Result<()>) {
    if let Err(err) = result {
        warn!(error = %err, "failed to persist settings");
    }
}
