//! Confirmation dialog widget for destructive app actions

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    symbols,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};
use streambox_app::ConfirmDialogState;

use crate::theme::{palette, styles};

pub struct ConfirmDialog<'a> {
    state: &'a ConfirmDialogState,
}

impl<'a> ConfirmDialog<'a> {
    pub fn new(state: &'a ConfirmDialogState) -> Self {
        Self { state }
    }

    /// Calculate centered modal rect
    fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
        let x = area.x + (area.width.saturating_sub(width)) / 2;
        let y = area.y + (area.height.saturating_sub(height)) / 2;
        Rect::new(x, y, width.min(area.width), height.min(area.height))
    }
}

impl Widget for ConfirmDialog<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let modal_width = 54;
        let modal_height = 10;
        let modal_area = Self::centered_rect(modal_width, modal_height, area);

        Clear.render(modal_area, buf);

        let block = Block::default()
            .title(format!(" {} ", self.state.title))
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .border_set(symbols::border::ROUNDED)
            .style(ratatui::style::Style::default().bg(palette::POPUP_BG));

        let inner = block.inner(modal_area);
        block.render(modal_area, buf);

        let chunks = Layout::vertical([
            Constraint::Length(1), // spacer
            Constraint::Length(4), // message (wrapped)
            Constraint::Length(1), // buttons
            Constraint::Length(1), // hint
            Constraint::Min(0),
        ])
        .split(inner);

        Paragraph::new(self.state.message.as_str())
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .style(styles::text_primary())
            .render(chunks[1], buf);

        let mut spans: Vec<Span> = Vec::new();
        for (i, (label, _)) in self.state.options.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw("   "));
            }
            let style = if i == self.state.selected {
                styles::focused_selected()
            } else if i == 0 {
                styles::text_secondary()
            } else {
                styles::status_red()
            };
            spans.push(Span::styled(format!(" {label} "), style));
        }
        Paragraph::new(Line::from(spans))
            .alignment(Alignment::Center)
            .render(chunks[2], buf);

        Paragraph::new("←→ select · Enter confirm · Esc cancel")
            .alignment(Alignment::Center)
            .style(styles::text_muted())
            .render(chunks[3], buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;

    #[test]
    fn test_renders_title_and_message() {
        let mut term = TestTerminal::new();
        let state = ConfirmDialogState::clear_data("Netflix");
        term.render_widget(ConfirmDialog::new(&state), term.area());

        assert!(term.buffer_contains("Clear data"));
        assert!(term.buffer_contains("Netflix"));
        assert!(term.buffer_contains("permanently delete"));
    }

    #[test]
    fn test_shows_both_options() {
        let mut term = TestTerminal::new();
        let state = ConfirmDialogState::force_stop("Spotify");
        term.render_widget(ConfirmDialog::new(&state), term.area());

        assert!(term.buffer_contains("Cancel"));
        assert!(term.buffer_contains("Force Stop"));
    }

    #[test]
    fn test_shows_keybinding_hint() {
        let mut term = TestTerminal::new();
        let state = ConfirmDialogState::clear_cache("Hulu");
        term.render_widget(ConfirmDialog::new(&state), term.area());

        assert!(term.buffer_contains("Enter confirm"));
        assert!(term.buffer_contains("Esc cancel"));
    }

    #[test]
    fn test_fits_compact_terminal() {
        let mut term = TestTerminal::compact();
        let state = ConfirmDialogState::clear_cache("Hulu");
        term.render_widget(ConfirmDialog::new(&state), term.area());

        assert!(term.buffer_contains("Clear cache"));
    }

    #[test]
    fn test_centered_rect() {
        let area = Rect::new(0, 0, 100, 50);
        let modal = ConfirmDialog::centered_rect(40, 10, area);
        assert_eq!(modal.x, 30);
        assert_eq!(modal.y, 20);
        assert_eq!(modal.width, 40);
        assert_eq!(modal.height, 10);
    }

    #[test]
    fn test_centered_rect_small_area() {
        let area = Rect::new(0, 0, 30, 8);
        let modal = ConfirmDialog::centered_rect(50, 10, area);
        assert_eq!(modal.width, 30);
        assert_eq!(modal.height, 8);
    }
}
