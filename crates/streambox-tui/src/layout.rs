//! Screen layout definitions for the TUI

use ratatui::layout::{Constraint, Layout, Rect};

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// Top navigation bar (brand + tabs + clock)
    pub nav: Rect,

    /// Page content below the nav
    pub content: Rect,
}

/// Split the screen into nav bar and page content
pub fn create(area: Rect) -> ScreenAreas {
    let chunks = Layout::vertical([
        Constraint::Length(3), // Nav bar (bordered)
        Constraint::Min(3),    // Page content
    ])
    .split(area);

    ScreenAreas {
        nav: chunks[0],
        content: chunks[1],
    }
}

/// Right-hand settings overlay area: full height, 45% of the width with a
/// sane minimum so narrow terminals still get a usable panel
pub fn settings_overlay(area: Rect) -> Rect {
    let width = ((area.width as u32 * 45 / 100) as u16).max(32).min(area.width);
    Rect::new(area.x + area.width - width, area.y, width, area.height)
}

/// Toast area: bottom-centered strip over the content
pub fn toast(area: Rect, text_width: u16) -> Rect {
    let width = (text_width + 4).min(area.width);
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + area.height.saturating_sub(4);
    Rect::new(x, y, width, 3.min(area.height))
}
