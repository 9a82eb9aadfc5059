//! Settings overlay navigation state machine.
//!
//! The overlay is a stack of panels: the main menu at the bottom, then any
//! number of sub-panels opened from it. History entries are navigation
//! snapshots (which panel, which title, which row was highlighted); panel
//! content is always re-derived from the live settings store when an entry
//! is restored, never replayed from a frozen copy.

use std::time::{Duration, Instant};

/// How long the overlay's visual lingers after closing.
pub const CLOSE_ANIMATION: Duration = Duration::from_millis(300);

/// Identity of each settings sub-panel. Dispatch is always on this enum,
/// never on the display title.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelId {
    Network,
    Accounts,
    Apps,
    Preferences,
    Tv,
    Remote,
    Display,
    Storage,
    About,
}

impl PanelId {
    /// Title shown in the overlay header for this panel
    pub fn title(self) -> &'static str {
        match self {
            PanelId::Network => "Network & Internet",
            PanelId::Accounts => "Accounts & Sign In",
            PanelId::Apps => "Apps",
            PanelId::Preferences => "Device Preferences",
            PanelId::Tv => "TV settings",
            PanelId::Remote => "Remote & Accessories",
            PanelId::Display => "Display & Sound",
            PanelId::Storage => "Storage",
            PanelId::About => "About",
        }
    }

    /// Panels that only render the placeholder body
    pub fn is_coming_soon(self) -> bool {
        matches!(self, PanelId::Preferences | PanelId::Tv)
    }
}

/// The view parameters of an open sub-panel. `app_detail` is set when the
/// Apps panel has drilled into a single application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelView {
    pub panel: PanelId,
    pub app_detail: Option<String>,
}

impl PanelView {
    pub fn panel(panel: PanelId) -> Self {
        Self {
            panel,
            app_detail: None,
        }
    }

    pub fn app_detail(name: impl Into<String>) -> Self {
        Self {
            panel: PanelId::Apps,
            app_detail: Some(name.into()),
        }
    }
}

/// One saved navigation position. `view == None` is the main menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub view: Option<PanelView>,
    pub title: String,
    pub selected: usize,
}

const MAIN_MENU_TITLE: &str = "Settings";

/// Navigation state of the settings overlay.
#[derive(Debug, Clone)]
pub struct SettingsNav {
    open: bool,
    /// Current view when open; `None` means the main menu
    current: Option<PanelView>,
    title: String,
    /// Highlighted row in the current view
    pub selected: usize,
    history: Vec<HistoryEntry>,
    /// Set while the exit animation is running after a close
    closing_until: Option<Instant>,
}

impl Default for SettingsNav {
    fn default() -> Self {
        Self {
            open: false,
            current: None,
            title: MAIN_MENU_TITLE.to_string(),
            selected: 0,
            history: Vec::new(),
            closing_until: None,
        }
    }
}

impl SettingsNav {
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Current view, `None` for the main menu. Meaningless when closed.
    pub fn current(&self) -> Option<&PanelView> {
        self.current.as_ref()
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn history_depth(&self) -> usize {
        self.history.len()
    }

    /// True while the closed overlay should still be drawn (exit animation)
    pub fn is_closing(&self, now: Instant) -> bool {
        self.closing_until.is_some_and(|until| until > now)
    }

    /// Drop the exit-animation marker once its deadline has passed
    pub fn finish_close(&mut self, now: Instant) {
        if self.closing_until.is_some_and(|until| now >= until) {
            self.closing_until = None;
        }
    }

    /// Open the overlay at the main menu with empty history
    pub fn open(&mut self) {
        self.open = true;
        self.current = None;
        self.title = MAIN_MENU_TITLE.to_string();
        self.selected = 0;
        self.history.clear();
        self.closing_until = None;
    }

    /// Push the current position onto history and move to `view`
    pub fn navigate_to(&mut self, view: PanelView, title: impl Into<String>) {
        if !self.open {
            return;
        }
        self.history.push(HistoryEntry {
            view: self.current.take(),
            title: std::mem::take(&mut self.title),
            selected: self.selected,
        });
        self.current = Some(view);
        self.title = title.into();
        self.selected = 0;
    }

    /// Pop one history entry and restore it. With empty history this is
    /// identical to [`close`](Self::close).
    pub fn back(&mut self, now: Instant) {
        match self.history.pop() {
            Some(entry) => {
                self.current = entry.view;
                self.title = entry.title;
                self.selected = entry.selected;
            }
            None => self.close(now),
        }
    }

    /// Close the overlay from any state. State changes immediately; only the
    /// visual removal is delayed by [`CLOSE_ANIMATION`].
    pub fn close(&mut self, now: Instant) {
        self.open = false;
        self.current = None;
        self.title = MAIN_MENU_TITLE.to_string();
        self.selected = 0;
        self.history.clear();
        self.closing_until = Some(now + CLOSE_ANIMATION);
    }
}
