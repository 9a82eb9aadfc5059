//! Settings data model
//!
//! The shapes here are exactly what gets persisted: one JSON document whose
//! field names are camelCase. `SettingsState::default()` is the hard-coded
//! mock fixture the store falls back to when no persisted state exists (or
//! when the stored document fails to parse).

use serde::{Deserialize, Serialize};

/// Sentinel written into `dataSize`/`cacheSize` when storage is cleared.
/// Clearing never removes the app record itself.
pub const ZERO_SIZE: &str = "0 B";

// ─────────────────────────────────────────────────────────────────────────────
// Network
// ─────────────────────────────────────────────────────────────────────────────

/// Reported Wi-Fi signal strength for a scanned network
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SignalStrength {
    Weak,
    Medium,
    Strong,
}

impl SignalStrength {
    /// Number of filled bars (out of 3) for rendering
    pub fn bars(self) -> usize {
        match self {
            SignalStrength::Weak => 1,
            SignalStrength::Medium => 2,
            SignalStrength::Strong => 3,
        }
    }
}

/// One entry in the scanned-networks list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WifiNetwork {
    pub name: String,
    pub signal: SignalStrength,
    pub secured: bool,
    pub connected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WifiState {
    pub enabled: bool,
    /// Name of the currently connected network, if any.
    ///
    /// Invariant: when `enabled` and this is `Some(name)`, exactly the
    /// network called `name` in `available_networks` has `connected == true`.
    pub connected: Option<String>,
    pub available_networks: Vec<WifiNetwork>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EthernetState {
    pub connected: bool,
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkState {
    pub wifi: WifiState,
    pub ethernet: EthernetState,
}

// ─────────────────────────────────────────────────────────────────────────────
// Account
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoogleAccount {
    pub email: String,
    pub name: String,
    pub sync: bool,
    pub services: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountState {
    pub google_account: GoogleAccount,
}

// ─────────────────────────────────────────────────────────────────────────────
// Apps
// ─────────────────────────────────────────────────────────────────────────────

/// An installed application. `name` is the unique key within
/// [`AppsState::installed`]. Sizes are display strings as reported by the
/// mock device (e.g. `"400 MB"`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppRecord {
    pub name: String,
    pub version: String,
    pub size: String,
    pub data_size: String,
    pub cache_size: String,
    pub system: bool,
    pub icon: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppsState {
    pub installed: Vec<AppRecord>,
    pub show_system_apps: bool,
    pub show_all_apps: bool,
}

impl AppsState {
    /// Look up an installed app by its unique name
    pub fn find(&self, name: &str) -> Option<&AppRecord> {
        self.installed.iter().find(|a| a.name == name)
    }

    /// Visibility rule for the apps panel: show the app iff
    /// `show_system_apps || !app.system || show_all_apps`.
    pub fn is_visible(&self, app: &AppRecord) -> bool {
        self.show_system_apps || !app.system || self.show_all_apps
    }

    /// Apps currently visible under the panel filter, in install order
    pub fn visible(&self) -> impl Iterator<Item = &AppRecord> {
        self.installed.iter().filter(|a| self.is_visible(a))
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Remote & accessories
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteDevice {
    pub name: String,
    pub connected: bool,
    pub battery_level: String,
    pub last_connected: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteState {
    pub devices: Vec<RemoteDevice>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Display & sound
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Resolution {
    #[serde(rename = "2160p")]
    Uhd2160p,
    #[serde(rename = "1080p")]
    Fhd1080p,
    #[serde(rename = "720p")]
    Hd720p,
}

impl Resolution {
    pub fn label(self) -> &'static str {
        match self {
            Resolution::Uhd2160p => "4K (2160p)",
            Resolution::Fhd1080p => "Full HD (1080p)",
            Resolution::Hd720p => "HD (720p)",
        }
    }

    /// Next option in the selection cycle (wraps around)
    pub fn next(self) -> Self {
        match self {
            Resolution::Uhd2160p => Resolution::Fhd1080p,
            Resolution::Fhd1080p => Resolution::Hd720p,
            Resolution::Hd720p => Resolution::Uhd2160p,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AudioOutput {
    #[serde(rename = "HDMI")]
    Hdmi,
    Optical,
    Analog,
}

impl AudioOutput {
    pub fn label(self) -> &'static str {
        match self {
            AudioOutput::Hdmi => "HDMI",
            AudioOutput::Optical => "Optical",
            AudioOutput::Analog => "Analog",
        }
    }

    pub fn next(self) -> Self {
        match self {
            AudioOutput::Hdmi => AudioOutput::Optical,
            AudioOutput::Optical => AudioOutput::Analog,
            AudioOutput::Analog => AudioOutput::Hdmi,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayState {
    pub resolution: Resolution,
    pub hdr: bool,
    pub audio_output: AudioOutput,
}

// ─────────────────────────────────────────────────────────────────────────────
// Storage
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StorageState {
    pub total: String,
    pub used: String,
    pub free: String,
}

impl StorageState {
    /// Fraction of storage used, for the usage bar. Parses the leading
    /// number out of the display strings; malformed values yield 0.
    pub fn used_fraction(&self) -> f64 {
        let parse = |s: &str| -> f64 {
            s.split_whitespace()
                .next()
                .and_then(|n| n.parse::<f64>().ok())
                .unwrap_or(0.0)
        };
        let total = parse(&self.total);
        if total <= 0.0 {
            0.0
        } else {
            (parse(&self.used) / total).clamp(0.0, 1.0)
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Root aggregate
// ─────────────────────────────────────────────────────────────────────────────

/// Root aggregate for all device-mock settings.
///
/// Uniquely owned by the settings store; mutated only through store methods
/// and persisted whole on every mutation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsState {
    pub network: NetworkState,
    pub account: AccountState,
    pub apps: AppsState,
    pub remote: RemoteState,
    pub display: DisplayState,
    pub storage: StorageState,
}

impl Default for SettingsState {
    fn default() -> Self {
        Self {
            network: default_network(),
            account: default_account(),
            apps: default_apps(),
            remote: default_remote(),
            display: DisplayState {
                resolution: Resolution::Fhd1080p,
                hdr: true,
                audio_output: AudioOutput::Hdmi,
            },
            storage: StorageState {
                total: "32 GB".into(),
                used: "18.5 GB".into(),
                free: "13.5 GB".into(),
            },
        }
    }
}

fn default_network() -> NetworkState {
    let networks = [
        ("Home_Network_5G", SignalStrength::Strong, true, true),
        ("Neighbor_WiFi", SignalStrength::Medium, true, false),
        ("Public_WiFi", SignalStrength::Weak, false, false),
        ("Guest_Network", SignalStrength::Strong, true, false),
    ];
    NetworkState {
        wifi: WifiState {
            enabled: true,
            connected: Some("Home_Network_5G".into()),
            available_networks: networks
                .into_iter()
                .map(|(name, signal, secured, connected)| WifiNetwork {
                    name: name.into(),
                    signal,
                    secured,
                    connected,
                })
                .collect(),
        },
        ethernet: EthernetState {
            connected: false,
            status: "Not connected".into(),
        },
    }
}

fn default_account() -> AccountState {
    AccountState {
        google_account: GoogleAccount {
            email: "user@gmail.com".into(),
            name: "Stream User".into(),
            sync: true,
            services: vec![
                "Play Store".into(),
                "YouTube".into(),
                "Google Play Games".into(),
            ],
        },
    }
}

fn default_remote() -> RemoteState {
    RemoteState {
        devices: vec![RemoteDevice {
            name: "Stream Remote 1".into(),
            connected: true,
            battery_level: "85%".into(),
            last_connected: "Now".into(),
        }],
    }
}

fn default_apps() -> AppsState {
    // (name, version, size, data, cache, system, icon)
    let apps = [
        ("Optimum TV", "2.1.0", "1.2 GB", "800 MB", "400 MB", true, "O"),
        ("Netflix", "8.5.0", "500 MB", "200 MB", "150 MB", false, "N"),
        ("YouTube", "17.49.37", "400 MB", "150 MB", "100 MB", false, "Y"),
        ("Prime Video", "3.0.355", "350 MB", "120 MB", "80 MB", false, "P"),
        ("Disney+", "2.15.0", "450 MB", "180 MB", "90 MB", false, "D"),
        ("Hulu", "4.47.0", "380 MB", "140 MB", "85 MB", false, "H"),
        ("HBO Max", "52.15.0", "420 MB", "160 MB", "95 MB", false, "H"),
        ("Peacock", "3.2.0", "390 MB", "145 MB", "88 MB", false, "P"),
        ("ESPN", "6.75.0", "360 MB", "130 MB", "75 MB", false, "E"),
        ("Spotify", "8.8.0", "320 MB", "110 MB", "70 MB", false, "S"),
        ("Chrome", "120.0", "280 MB", "100 MB", "65 MB", true, "C"),
        ("Play Store", "33.8.17", "250 MB", "90 MB", "60 MB", true, "P"),
        (
            "Google Play Services",
            "23.45.16",
            "300 MB",
            "120 MB",
            "80 MB",
            true,
            "G",
        ),
        ("Android System", "13.0", "1.5 GB", "500 MB", "200 MB", true, "A"),
        ("System UI", "13.0", "800 MB", "300 MB", "150 MB", true, "S"),
    ];
    AppsState {
        installed: apps
            .into_iter()
            .map(
                |(name, version, size, data_size, cache_size, system, icon)| AppRecord {
                    name: name.into(),
                    version: version.into(),
                    size: size.into(),
                    data_size: data_size.into(),
                    cache_size: cache_size.into(),
                    system,
                    icon: icon.into(),
                },
            )
            .collect(),
        show_system_apps: false,
        show_all_apps: false,
    }
}
