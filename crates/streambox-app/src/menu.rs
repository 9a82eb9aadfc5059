//! Static definition of the settings main menu.
//!
//! The menu is two sections rendered as one selectable list (headings are
//! not selectable). Both the key handler and the renderer index into the
//! same flattened item list, so activation and highlight can never disagree.

use crate::navigation::PanelId;

/// What activating a main-menu item does
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    /// Open the named sub-panel
    Open(PanelId),
    /// Show a transient notice toast
    Notice(&'static str),
}

#[derive(Debug, Clone, Copy)]
pub struct MenuItem {
    pub label: &'static str,
    /// Shown under the menu when the item is highlighted
    pub description: &'static str,
    /// Inline value shown after the label, if any
    pub value: Option<&'static str>,
    pub action: MenuAction,
}

#[derive(Debug, Clone, Copy)]
pub struct MenuSection {
    pub heading: &'static str,
    pub items: &'static [MenuItem],
}

const COMING_SOON: &str = "Content coming soon...";

const fn item(label: &'static str, description: &'static str, action: MenuAction) -> MenuItem {
    MenuItem {
        label,
        description,
        value: None,
        action,
    }
}

const TV_ITEMS: &[MenuItem] = &[
    item(
        "Favorite Channels",
        "Manage your favorite channels",
        MenuAction::Notice(COMING_SOON),
    ),
    item(
        "DVR Preferences",
        "Manage recordings and storage",
        MenuAction::Notice(COMING_SOON),
    ),
    item(
        "SAP",
        "Secondary audio programming",
        MenuAction::Notice(COMING_SOON),
    ),
    item(
        "Parental Controls",
        "Restrict content by rating",
        MenuAction::Notice(COMING_SOON),
    ),
    item(
        "Purchase PIN",
        "Require a PIN for purchases",
        MenuAction::Notice(COMING_SOON),
    ),
    MenuItem {
        label: "Default Channel",
        description: "Channel shown at startup",
        value: Some("News 12"),
        action: MenuAction::Notice(COMING_SOON),
    },
    item(
        "Account",
        "Manage your account and sign-in",
        MenuAction::Open(PanelId::Accounts),
    ),
];

const GENERAL_ITEMS: &[MenuItem] = &[
    item(
        "Network & Internet",
        "Wi-Fi and ethernet settings",
        MenuAction::Open(PanelId::Network),
    ),
    item(
        "Accounts & Sign In",
        "Google account and sync",
        MenuAction::Open(PanelId::Accounts),
    ),
    item(
        "Apps",
        "Manage installed applications",
        MenuAction::Open(PanelId::Apps),
    ),
    item(
        "Device Preferences",
        "Language, keyboard and more",
        MenuAction::Open(PanelId::Preferences),
    ),
    item(
        "TV settings",
        "Channel and input settings",
        MenuAction::Open(PanelId::Tv),
    ),
    item(
        "Remote & Accessories",
        "Paired remotes and accessories",
        MenuAction::Open(PanelId::Remote),
    ),
    item(
        "Display & Sound",
        "Resolution, HDR and audio output",
        MenuAction::Open(PanelId::Display),
    ),
    item(
        "Storage",
        "Internal storage usage",
        MenuAction::Open(PanelId::Storage),
    ),
    item(
        "About",
        "Device information and version",
        MenuAction::Open(PanelId::About),
    ),
    item(
        "Accessibility",
        "Captions, audio description and more",
        MenuAction::Notice(COMING_SOON),
    ),
    item(
        "Help & Feedback",
        "Get help with your device",
        MenuAction::Notice(COMING_SOON),
    ),
];

pub const MAIN_MENU: &[MenuSection] = &[
    MenuSection {
        heading: "Optimum TV Settings",
        items: TV_ITEMS,
    },
    MenuSection {
        heading: "General Settings",
        items: GENERAL_ITEMS,
    },
];

/// Total selectable items across all sections
pub fn main_menu_len() -> usize {
    MAIN_MENU.iter().map(|s| s.items.len()).sum()
}

/// Item at a flat index spanning the sections in order
pub fn main_menu_item(index: usize) -> Option<&'static MenuItem> {
    MAIN_MENU.iter().flat_map(|s| s.items.iter()).nth(index)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flat_index_spans_sections() {
        assert_eq!(main_menu_len(), TV_ITEMS.len() + GENERAL_ITEMS.len());
        assert_eq!(main_menu_item(0).unwrap().label, "Favorite Channels");
        assert_eq!(
            main_menu_item(TV_ITEMS.len()).unwrap().label,
            "Network & Internet"
        );
        assert!(main_menu_item(main_menu_len()).is_none());
    }

    #[test]
    fn test_every_panel_reachable_from_menu() {
        use PanelId::*;
        for panel in [
            Network, Accounts, Apps, Preferences, Tv, Remote, Display, Storage, About,
        ] {
            let reachable = MAIN_MENU
                .iter()
                .flat_map(|s| s.items.iter())
                .any(|i| i.action == MenuAction::Open(panel));
            assert!(reachable, "panel {panel:?} not reachable from main menu");
        }
    }
}
