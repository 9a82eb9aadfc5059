//! Application state (TEA model)

use std::time::{Duration, Instant};

use crate::confirm_dialog::ConfirmDialogState;
use crate::navigation::SettingsNav;
use crate::notification::ToastState;
use crate::store::SettingsStore;

/// How long the welcome splash covers the home screen after startup
pub const SPLASH_DURATION: Duration = Duration::from_secs(4);

/// Simulated wifi connection delay
pub const CONNECT_DELAY: Duration = Duration::from_secs(2);

/// Simulated remote/accessory search duration
pub const PAIRING_DELAY: Duration = Duration::from_secs(3);

/// Simulated system update check duration
pub const UPDATE_CHECK_DELAY: Duration = Duration::from_secs(2);

/// Top-navigation pages, in tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    Guide,
    OnDemand,
    Sports,
    Dvr,
    Apps,
}

impl Page {
    pub const ALL: [Page; 6] = [
        Page::Home,
        Page::Guide,
        Page::OnDemand,
        Page::Sports,
        Page::Dvr,
        Page::Apps,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::Guide => "Guide",
            Page::OnDemand => "On Demand",
            Page::Sports => "Sports",
            Page::Dvr => "DVR",
            Page::Apps => "Apps",
        }
    }

    pub fn index(self) -> usize {
        Page::ALL.iter().position(|p| *p == self).unwrap_or(0)
    }

    pub fn next(self) -> Page {
        Page::ALL[(self.index() + 1) % Page::ALL.len()]
    }

    pub fn prev(self) -> Page {
        Page::ALL[(self.index() + Page::ALL.len() - 1) % Page::ALL.len()]
    }
}

/// Which input layer owns the keyboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiMode {
    /// Top-nav pages, no overlay
    Normal,
    /// Settings overlay open
    Settings,
    /// Confirm dialog on top of everything
    ConfirmDialog,
}

/// An in-flight simulated wifi connection
#[derive(Debug, Clone)]
pub struct PendingConnect {
    pub ssid: String,
    pub deadline: Instant,
}

/// Complete application state
#[derive(Debug)]
pub struct AppState {
    /// Settings store, injected by the binary entry point
    pub store: SettingsStore,
    /// Active top-nav page
    pub page: Page,
    /// Settings overlay navigation stack
    pub nav: SettingsNav,
    /// Active confirmation dialog, if any
    pub confirm_dialog: Option<ConfirmDialogState>,
    /// Active toast, if any (a new one replaces it)
    pub toast: Option<ToastState>,
    /// Wifi connection in progress, resolved on tick
    pub pending_connect: Option<PendingConnect>,
    /// Remote search in progress, resolved on tick
    pub pending_pairing: Option<Instant>,
    /// System update check in progress, resolved on tick
    pub pending_update_check: Option<Instant>,
    /// Session start, drives the welcome splash
    pub started_at: Instant,
    pub should_quit: bool,
}

impl AppState {
    pub fn new(store: SettingsStore) -> Self {
        Self {
            store,
            page: Page::Home,
            nav: SettingsNav::default(),
            confirm_dialog: None,
            toast: None,
            pending_connect: None,
            pending_pairing: None,
            pending_update_check: None,
            started_at: Instant::now(),
            should_quit: false,
        }
    }

    pub fn ui_mode(&self) -> UiMode {
        if self.confirm_dialog.is_some() {
            UiMode::ConfirmDialog
        } else if self.nav.is_open() {
            UiMode::Settings
        } else {
            UiMode::Normal
        }
    }

    /// Welcome splash covers the home screen for the first few seconds
    pub fn show_splash(&self, now: Instant) -> bool {
        self.page == Page::Home && now < self.started_at + SPLASH_DURATION
    }
}
