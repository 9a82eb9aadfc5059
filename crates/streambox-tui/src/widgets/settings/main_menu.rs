//! Main menu body of the settings overlay

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};
use streambox_app::menu::{self, MenuAction};
use streambox_app::AppState;

use crate::theme::{icons, styles};

pub fn render(state: &AppState, area: Rect, buf: &mut Buffer) {
    let mut lines: Vec<Line> = Vec::new();
    let mut selected_line = 0usize;
    let mut flat = 0usize;

    for section in menu::MAIN_MENU {
        lines.push(Line::from(Span::styled(
            section.heading,
            styles::text_muted(),
        )));
        for item in section.items {
            let selected = flat == state.nav.selected;
            if selected {
                selected_line = lines.len();
            }
            let text = match (item.value, item.action) {
                (Some(value), _) => {
                    format!(" {}  {} {}", item.label, icons::ARROW_RIGHT, value)
                }
                (None, MenuAction::Open(_)) => {
                    format!(" {}  {}", item.label, icons::ARROW_RIGHT)
                }
                (None, MenuAction::Notice(_)) => format!(" {}", item.label),
            };
            let style = if selected {
                styles::focused_selected()
            } else {
                styles::text_primary()
            };
            lines.push(Line::from(Span::styled(text, style)));
            flat += 1;
        }
        lines.push(Line::default());
    }

    let chunks = Layout::vertical([Constraint::Min(1), Constraint::Length(2)]).split(area);

    // keep the selected row in view
    let visible = chunks[0].height as usize;
    let scroll = selected_line.saturating_sub(visible.saturating_sub(1));
    Paragraph::new(lines)
        .scroll((scroll as u16, 0))
        .render(chunks[0], buf);

    if let Some(item) = menu::main_menu_item(state.nav.selected) {
        Paragraph::new(item.description)
            .style(styles::text_muted())
            .wrap(Wrap { trim: true })
            .render(chunks[1], buf);
    }
}
