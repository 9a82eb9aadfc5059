//! Top navigation bar: brand mark, page tabs and a live clock

use chrono::Local;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    text::Line,
    widgets::{Paragraph, Tabs, Widget},
};
use streambox_app::Page;

use crate::theme::{icons, styles};

pub struct TopNav {
    page: Page,
    clock: String,
}

impl TopNav {
    pub fn new(page: Page) -> Self {
        Self {
            page,
            clock: Local::now().format("%H:%M").to_string(),
        }
    }

    /// Fixed clock text, for deterministic rendering in tests
    pub fn with_clock(mut self, clock: impl Into<String>) -> Self {
        self.clock = clock.into();
        self
    }
}

impl Widget for TopNav {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::card_block(false);
        let inner = block.inner(area);
        block.render(area, buf);

        let chunks = Layout::horizontal([
            Constraint::Length(14), // brand
            Constraint::Min(10),    // tabs
            Constraint::Length(12), // clock + settings hint
        ])
        .split(inner);

        Paragraph::new(" Optimum.tv")
            .style(styles::brand())
            .render(chunks[0], buf);

        let titles: Vec<Line> = Page::ALL.iter().map(|p| Line::from(p.title())).collect();
        Tabs::new(titles)
            .select(self.page.index())
            .style(styles::text_secondary())
            .highlight_style(styles::focused_selected())
            .divider(" ")
            .render(chunks[1], buf);

        Paragraph::new(format!("{} {} ", icons::GEAR, self.clock))
            .alignment(Alignment::Right)
            .style(styles::text_secondary())
            .render(chunks[2], buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;

    #[test]
    fn test_renders_brand_and_pages() {
        let mut term = TestTerminal::new();
        let nav = TopNav::new(Page::Home).with_clock("20:15");
        term.render_widget(nav, term.area());

        assert!(term.buffer_contains("Optimum.tv"));
        assert!(term.buffer_contains("Home"));
        assert!(term.buffer_contains("Guide"));
        assert!(term.buffer_contains("On Demand"));
        assert!(term.buffer_contains("Sports"));
        assert!(term.buffer_contains("DVR"));
    }

    #[test]
    fn test_renders_clock() {
        let mut term = TestTerminal::new();
        let nav = TopNav::new(Page::Guide).with_clock("09:41");
        term.render_widget(nav, term.area());
        assert!(term.buffer_contains("09:41"));
    }
}
