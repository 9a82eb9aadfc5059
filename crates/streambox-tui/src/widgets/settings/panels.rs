//! Sub-panel bodies of the settings overlay.
//!
//! Pure projections of the settings store. Selectable rows appear in the
//! same order the handler's row model counts them.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use streambox_app::handler::recent_apps;
use streambox_app::{AppState, PanelId, PanelView};
use streambox_core::AppRecord;

use crate::theme::{icons, styles};

pub fn render(state: &AppState, view: &PanelView, area: Rect, buf: &mut Buffer) {
    if let Some(name) = &view.app_detail {
        return render_app_detail(state, name, area, buf);
    }
    match view.panel {
        PanelId::Network => render_network(state, area, buf),
        PanelId::Accounts => render_accounts(state, area, buf),
        PanelId::Apps => render_apps(state, area, buf),
        PanelId::Remote => render_remote(state, area, buf),
        PanelId::Display => render_display(state, area, buf),
        PanelId::Storage => render_storage(state, area, buf),
        PanelId::About => render_about(state, area, buf),
        PanelId::Preferences | PanelId::Tv => render_coming_soon(area, buf),
    }
}

struct Body<'a> {
    lines: Vec<Line<'a>>,
    selected: usize,
    selected_line: usize,
    row: usize,
}

impl<'a> Body<'a> {
    fn new(selected: usize) -> Self {
        Self {
            lines: Vec::new(),
            selected,
            selected_line: 0,
            row: 0,
        }
    }

    fn heading(&mut self, text: &'a str) {
        self.lines
            .push(Line::from(Span::styled(text, styles::text_muted())));
    }

    fn info(&mut self, text: impl Into<String>) {
        self.lines.push(Line::from(Span::styled(
            format!(" {}", text.into()),
            styles::text_secondary(),
        )));
    }

    fn blank(&mut self) {
        self.lines.push(Line::default());
    }

    /// Next selectable row, highlighted when its index matches the nav
    fn selectable(&mut self, text: impl Into<String>) {
        let selected = self.row == self.selected;
        if selected {
            self.selected_line = self.lines.len();
        }
        let style = if selected {
            styles::focused_selected()
        } else {
            styles::text_primary()
        };
        self.lines
            .push(Line::from(Span::styled(format!(" {}", text.into()), style)));
        self.row += 1;
    }

    fn render(self, area: Rect, buf: &mut Buffer) {
        let visible = area.height as usize;
        let scroll = self.selected_line.saturating_sub(visible.saturating_sub(1));
        Paragraph::new(self.lines)
            .scroll((scroll as u16, 0))
            .render(area, buf);
    }
}

fn render_network(state: &AppState, area: Rect, buf: &mut Buffer) {
    let network = state.store.network();
    let mut body = Body::new(state.nav.selected);

    body.selectable(format!("Wi-Fi  {}", icons::toggle(network.wifi.enabled)));
    body.blank();
    body.heading("Available networks");
    for entry in &network.wifi.available_networks {
        let lock = if entry.secured { icons::LOCK } else { " " };
        let status = if entry.connected {
            format!("  {} Connected", icons::CHECK)
        } else {
            String::new()
        };
        body.selectable(format!(
            "{:<3} {} {}{}",
            icons::signal_bars(entry.signal),
            entry.name,
            lock,
            status
        ));
    }
    body.blank();
    body.heading("Ethernet");
    body.info(network.ethernet.status.as_str());
    body.render(area, buf);
}

fn render_accounts(state: &AppState, area: Rect, buf: &mut Buffer) {
    let account = &state.store.account().google_account;
    let mut body = Body::new(state.nav.selected);

    body.heading("Google Account");
    body.info(account.name.as_str());
    body.info(account.email.as_str());
    body.blank();
    body.selectable(format!("Sync  {}", icons::toggle(account.sync)));
    body.blank();
    body.heading("Connected services");
    for service in &account.services {
        body.info(service.as_str());
    }
    body.render(area, buf);
}

fn render_apps(state: &AppState, area: Rect, buf: &mut Buffer) {
    let apps = state.store.apps();
    let mut body = Body::new(state.nav.selected);

    if apps.show_all_apps {
        body.selectable(format!(
            "Show system apps  {}",
            icons::toggle(apps.show_system_apps)
        ));
        body.blank();
        for app in apps.visible() {
            body.selectable(app_row(app));
        }
    } else {
        body.heading("Recently opened");
        for app in recent_apps(apps) {
            body.selectable(app_row(app));
        }
        body.blank();
        body.selectable(format!("See all apps  {}", icons::ARROW_RIGHT));
    }
    body.render(area, buf);
}

fn app_row(app: &AppRecord) -> String {
    let marker = if app.system { "  · system" } else { "" };
    format!("{}  {:<20} {}{}", app.icon, app.name, app.size, marker)
}

fn render_app_detail(state: &AppState, name: &str, area: Rect, buf: &mut Buffer) {
    let Some(app) = state.store.apps().find(name) else {
        Paragraph::new("App not found")
            .style(styles::text_muted())
            .render(area, buf);
        return;
    };

    let mut body = Body::new(state.nav.selected);
    body.info(format!("{}  {}", app.icon, app.name));
    body.info(format!("Version {}", app.version));
    body.info(format!("Storage used: {}", app.size));
    body.blank();
    body.selectable("Force Stop");
    body.selectable(format!("Clear Data ({})", app.data_size));
    body.selectable(format!("Clear Cache ({})", app.cache_size));
    body.render(area, buf);
}

fn render_remote(state: &AppState, area: Rect, buf: &mut Buffer) {
    let remote = state.store.remote();
    let mut body = Body::new(state.nav.selected);

    body.selectable(format!("Pair remote or accessory  {}", icons::ARROW_RIGHT));
    body.blank();
    body.heading("Paired devices");
    for device in &remote.devices {
        let status = if device.connected {
            format!("{} Connected", icons::CHECK)
        } else {
            format!("Last seen {}", device.last_connected)
        };
        body.info(format!(
            "{} {}  {}  Battery {}",
            icons::REMOTE,
            device.name,
            status,
            device.battery_level
        ));
    }
    body.render(area, buf);
}

fn render_display(state: &AppState, area: Rect, buf: &mut Buffer) {
    let display = state.store.display();
    let mut body = Body::new(state.nav.selected);

    body.selectable(format!("Resolution  ‹ {} ›", display.resolution.label()));
    body.selectable(format!("HDR  {}", icons::toggle(display.hdr)));
    body.selectable(format!("Audio Output  ‹ {} ›", display.audio_output.label()));
    body.render(area, buf);
}

fn render_storage(state: &AppState, area: Rect, buf: &mut Buffer) {
    let storage = state.store.storage();
    let mut body = Body::new(state.nav.selected);

    body.heading("Internal shared storage");
    body.info(format!("Used: {} of {}", storage.used, storage.total));
    body.info(format!("Free: {}", storage.free));
    body.blank();
    body.info(usage_bar(storage.used_fraction()));
    body.render(area, buf);
}

/// Fixed-width usage bar, avoids pulling in a gauge for one line
fn usage_bar(fraction: f64) -> String {
    const WIDTH: usize = 24;
    let filled = ((fraction * WIDTH as f64).round() as usize).min(WIDTH);
    format!(
        "[{}{}] {:.0}%",
        "█".repeat(filled),
        "░".repeat(WIDTH - filled),
        fraction * 100.0
    )
}

fn render_about(state: &AppState, area: Rect, buf: &mut Buffer) {
    let mut body = Body::new(state.nav.selected);
    body.heading("Device");
    body.info("Model: Optimum Stream Box");
    body.info("Serial Number: OSB123456789");
    body.info("Software Version: 2.1.0");
    body.info("Android TV OS: 11.0");
    body.info("Build Number: OPT.2023.12.15");
    body.blank();
    body.selectable("Check for Updates");
    body.render(area, buf);
}

fn render_coming_soon(area: Rect, buf: &mut Buffer) {
    Paragraph::new("Content coming soon...")
        .style(styles::text_muted())
        .render(area, buf);
}
