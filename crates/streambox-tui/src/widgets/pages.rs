//! Non-home pages: the apps grid and the placeholder pages

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    widgets::{Paragraph, Widget},
};

use crate::theme::styles;

const FEATURED_APPS: &[&str] = &["Optimum TV", "Netflix", "Prime Video", "HBO Max", "Disney+"];
const SYSTEM_APPS: &[&str] = &["Settings", "Play Store"];

/// Placeholder body for pages without real content
pub struct Placeholder {
    title: &'static str,
}

impl Placeholder {
    pub fn new(title: &'static str) -> Self {
        Self { title }
    }
}

impl Widget for Placeholder {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let y = area.y + area.height / 2;
        let line_area = Rect::new(area.x, y, area.width, 1.min(area.height));
        Paragraph::new(format!("{} content coming soon...", self.title))
            .alignment(Alignment::Center)
            .style(styles::text_muted())
            .render(line_area, buf);
    }
}

/// The Apps page: featured and system app card grids
pub struct AppsPage;

impl Widget for AppsPage {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let chunks = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(5),
            Constraint::Length(1),
            Constraint::Length(5),
            Constraint::Min(0),
        ])
        .split(area);

        Paragraph::new("Featured Apps")
            .style(styles::text_primary())
            .render(chunks[0], buf);
        render_grid(FEATURED_APPS, chunks[1], buf);

        Paragraph::new("System Apps")
            .style(styles::text_primary())
            .render(chunks[2], buf);
        render_grid(SYSTEM_APPS, chunks[3], buf);
    }
}

fn render_grid(apps: &[&str], area: Rect, buf: &mut Buffer) {
    let constraints: Vec<Constraint> = apps
        .iter()
        .map(|_| Constraint::Ratio(1, apps.len() as u32))
        .collect();
    let cells = Layout::horizontal(constraints).split(area);
    for (app, cell) in apps.iter().zip(cells.iter()) {
        let block = styles::card_block(false);
        let inner = block.inner(*cell);
        block.render(*cell, buf);
        Paragraph::new(*app)
            .alignment(Alignment::Center)
            .style(styles::text_secondary())
            .render(inner, buf);
    }
}
