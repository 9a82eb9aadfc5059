//! Message types for the application (TEA pattern)

use crate::input_key::InputKey;
use crate::navigation::PanelId;
use crate::state::Page;

/// All possible messages/actions in the application
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Tick event for periodic updates and deadline checks
    Tick,

    /// Quit the application
    Quit,

    // ─────────────────────────────────────────────────────────
    // Page navigation
    // ─────────────────────────────────────────────────────────
    /// Jump to a specific top-nav page
    SelectPage(Page),
    /// Move one page right in the top nav
    NextPage,
    /// Move one page left in the top nav
    PrevPage,

    // ─────────────────────────────────────────────────────────
    // Settings overlay navigation
    // ─────────────────────────────────────────────────────────
    /// Open the settings overlay at the main menu
    OpenSettings,
    /// Close the settings overlay from any panel
    CloseSettings,
    /// Walk one step back in the panel stack (closes from the main menu)
    NavigateBack,
    /// Move the highlight up in the current panel
    SelectionUp,
    /// Move the highlight down in the current panel
    SelectionDown,
    /// Activate the highlighted row in the current panel
    Activate,
    /// Open a sub-panel from the main menu
    OpenPanel(PanelId),
    /// Drill into a single app from the Apps panel
    OpenAppDetail { name: String },

    // ─────────────────────────────────────────────────────────
    // Settings mutations
    // ─────────────────────────────────────────────────────────
    /// Toggle wifi on/off
    ToggleWifi,
    /// Begin connecting to a listed wifi network (simulated delay)
    ConnectNetwork { name: String },
    /// Toggle Google account sync
    ToggleAccountSync,
    /// Expand the Apps panel to the full app list
    ShowAllApps,
    /// Toggle system apps in the full app list
    ToggleShowSystemApps,
    /// Cycle the display resolution option
    CycleResolution,
    /// Toggle HDR
    ToggleHdr,
    /// Cycle the audio output option
    CycleAudioOutput,
    /// Begin searching for remotes/accessories (simulated delay)
    StartPairing,
    /// Begin checking for system updates (simulated delay)
    CheckForUpdates,

    // ─────────────────────────────────────────────────────────
    // Destructive app actions (confirm-gated)
    // ─────────────────────────────────────────────────────────
    /// Ask for confirmation before force-stopping an app
    RequestForceStop { name: String },
    /// Ask for confirmation before clearing an app's data
    RequestClearData { name: String },
    /// Ask for confirmation before clearing an app's cache
    RequestClearCache { name: String },
    /// Confirmed force stop (no store change, notification only)
    ConfirmForceStop { name: String },
    /// Confirmed clear data
    ConfirmClearData { name: String },
    /// Confirmed clear cache
    ConfirmClearCache { name: String },

    // ─────────────────────────────────────────────────────────
    // Confirm dialog control
    // ─────────────────────────────────────────────────────────
    /// Move dialog highlight to the previous option
    DialogPrev,
    /// Move dialog highlight to the next option
    DialogNext,
    /// Activate the highlighted dialog option
    DialogActivate,
    /// Shortcut: activate the confirming (non-cancel) option
    DialogConfirm,
    /// Dismiss the dialog without acting
    DismissDialog,

    /// Show a transient toast notification
    ShowToast { text: String },
}
