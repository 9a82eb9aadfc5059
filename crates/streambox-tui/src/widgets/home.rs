//! Home page: welcome splash, featured banner and placeholder card rows

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::styles;

const RECENT_CHANNELS: &[&str] = &["News 12", "ESPN", "HBO Max", "Discovery"];
const FAVORITE_APPS: &[&str] = &["Netflix", "YouTube", "Prime Video", "Disney+"];

pub struct HomePage {
    splash: bool,
}

impl HomePage {
    pub fn new(splash: bool) -> Self {
        Self { splash }
    }
}

impl Widget for HomePage {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if self.splash {
            render_splash(area, buf);
            return;
        }

        let chunks = Layout::vertical([
            Constraint::Length(7), // featured banner
            Constraint::Length(6), // recent channels
            Constraint::Length(6), // favorite apps
            Constraint::Min(0),
        ])
        .split(area);

        render_featured(chunks[0], buf);
        render_card_row("Recent Channels", RECENT_CHANNELS, chunks[1], buf);
        render_card_row("Favorite Apps", FAVORITE_APPS, chunks[2], buf);
    }
}

fn render_splash(area: Rect, buf: &mut Buffer) {
    let lines = vec![
        Line::default(),
        Line::from(Span::styled("Welcome to Stream", styles::accent_bold())),
        Line::default(),
        Line::from(Span::styled("Loading your experience...", styles::text_muted())),
    ];
    let y = area.y + area.height.saturating_sub(4) / 2;
    let splash_area = Rect::new(area.x, y, area.width, 4.min(area.height));
    Paragraph::new(lines)
        .alignment(Alignment::Center)
        .render(splash_area, buf);
}

fn render_featured(area: Rect, buf: &mut Buffer) {
    let block = styles::card_block(true);
    let inner = block.inner(area);
    block.render(area, buf);

    let lines = vec![
        Line::from(Span::styled("News 12", styles::accent_bold())),
        Line::from(Span::styled(
            "Live: Breaking News Coverage",
            styles::text_secondary(),
        )),
        Line::default(),
        Line::from(vec![
            Span::styled(" ▶ Watch Now ", styles::focused_selected()),
            Span::raw("  "),
            Span::styled(" More Info ", styles::text_secondary()),
        ]),
    ];
    Paragraph::new(lines).render(inner, buf);
}

fn render_card_row(title: &str, cards: &[&str], area: Rect, buf: &mut Buffer) {
    let chunks = Layout::vertical([Constraint::Length(1), Constraint::Min(3)]).split(area);
    Paragraph::new(title)
        .style(styles::text_primary())
        .render(chunks[0], buf);

    let constraints: Vec<Constraint> = cards.iter().map(|_| Constraint::Ratio(1, 4)).collect();
    let card_areas = Layout::horizontal(constraints).split(chunks[1]);
    for (card, card_area) in cards.iter().zip(card_areas.iter()) {
        let block = styles::card_block(false);
        let inner = block.inner(*card_area);
        block.render(*card_area, buf);
        Paragraph::new(*card)
            .alignment(Alignment::Center)
            .style(styles::text_secondary())
            .render(inner, buf);
    }
}
