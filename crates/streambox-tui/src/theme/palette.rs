//! Color palette for the streaming-box look.
//!
//! Dark background, blue-leaning accents, with the named terminal colors so
//! the UI degrades cleanly on 16-color terminals.

use ratatui::style::Color;

// --- Background layers ---
pub const DEEPEST_BG: Color = Color::Black; // Terminal background
pub const CARD_BG: Color = Color::Black; // Media card backgrounds
pub const POPUP_BG: Color = Color::DarkGray; // Modal backgrounds
pub const OVERLAY_BG: Color = Color::Black; // Settings overlay body

// --- Borders ---
pub const BORDER_DIM: Color = Color::DarkGray; // Inactive borders
pub const BORDER_ACTIVE: Color = Color::Cyan; // Focused borders

// --- Accent ---
pub const ACCENT: Color = Color::Cyan; // Primary accent
pub const BRAND: Color = Color::LightBlue; // Brand mark in the top nav

// --- Text ---
pub const TEXT_PRIMARY: Color = Color::White;
pub const TEXT_SECONDARY: Color = Color::Gray;
pub const TEXT_MUTED: Color = Color::DarkGray;
pub const CONTRAST_FG: Color = Color::Black; // Text on accent backgrounds

// --- Status ---
pub const STATUS_GREEN: Color = Color::Green; // Connected / enabled
pub const STATUS_RED: Color = Color::Red; // Destructive actions
pub const STATUS_YELLOW: Color = Color::Yellow; // In-progress / warnings
