//! Toast notification widget (bottom-centered strip)

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    widgets::{Clear, Paragraph, Widget},
};
use streambox_app::{ToastPhase, ToastState};

use crate::layout;
use crate::theme::styles;

pub struct Toast<'a> {
    state: &'a ToastState,
}

impl<'a> Toast<'a> {
    pub fn new(state: &'a ToastState) -> Self {
        Self { state }
    }
}

impl Widget for Toast<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let toast_area = layout::toast(area, self.state.text.len() as u16);
        Clear.render(toast_area, buf);

        let block = styles::card_block(self.state.phase == ToastPhase::Visible);
        let inner = block.inner(toast_area);
        block.render(toast_area, buf);

        let style = if self.state.phase == ToastPhase::Fading {
            styles::text_muted()
        } else {
            styles::text_primary()
        };
        Paragraph::new(self.state.text.as_str())
            .alignment(Alignment::Center)
            .style(style)
            .render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use std::time::Instant;

    #[test]
    fn test_toast_renders_text() {
        let mut term = TestTerminal::new();
        let mut state = ToastState::new("Cache cleared for Netflix", Instant::now());
        state.phase = ToastPhase::Visible;

        term.render_widget(Toast::new(&state), term.area());
        assert!(term.buffer_contains("Cache cleared for Netflix"));
    }

    #[test]
    fn test_fading_toast_still_renders() {
        let mut term = TestTerminal::new();
        let mut state = ToastState::new("No new remotes found", Instant::now());
        state.phase = ToastPhase::Fading;

        term.render_widget(Toast::new(&state), term.area());
        assert!(term.buffer_contains("No new remotes found"));
    }
}
