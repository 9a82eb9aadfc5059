//! Glyphs used across the widgets.

use streambox_core::SignalStrength;

pub const GEAR: &str = "⚙";
pub const LOCK: &str = "🔒";
pub const CHECK: &str = "✓";
pub const ARROW_RIGHT: &str = "›";
pub const TOGGLE_ON: &str = "[on]";
pub const TOGGLE_OFF: &str = "[off]";
pub const REMOTE: &str = "🎮";

/// Signal bars for a scanned wifi network
pub fn signal_bars(signal: SignalStrength) -> &'static str {
    match signal {
        SignalStrength::Weak => "▂",
        SignalStrength::Medium => "▂▄",
        SignalStrength::Strong => "▂▄▆",
    }
}

/// Toggle glyph for boolean settings rows
pub fn toggle(on: bool) -> &'static str {
    if on {
        TOGGLE_ON
    } else {
        TOGGLE_OFF
    }
}
