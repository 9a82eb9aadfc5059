//! Mock settings store with write-through JSON persistence.
//!
//! The store owns the whole [`SettingsState`] aggregate. Reads hand out
//! borrows per domain; every mutation goes through a named method that
//! applies the change and immediately persists the full document. Loading
//! never fails: absent or unparsable state falls back to the default mock
//! fixture.

use std::fs;
use std::path::{Path, PathBuf};

use streambox_core::prelude::*;
use streambox_core::{
    AccountState, AppsState, AudioOutput, DisplayState, NetworkState, RemoteState, Resolution,
    SettingsState, StorageState, ZERO_SIZE,
};

/// File name of the persisted settings document inside the state directory
pub const SETTINGS_FILE: &str = "settings.json";

#[derive(Debug)]
pub struct SettingsStore {
    state: SettingsState,
    path: PathBuf,
}

impl SettingsStore {
    /// Load persisted settings from `state_dir/settings.json`.
    ///
    /// A missing file yields the default fixture silently; a file that fails
    /// to parse also yields the default (logged at warn, original left on
    /// disk until the next save overwrites it).
    pub fn load(state_dir: &Path) -> Self {
        let path = state_dir.join(SETTINGS_FILE);
        let state = match fs::read_to_string(&path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(state) => {
                    debug!(path = %path.display(), "loaded settings");
                    state
                }
                Err(err) => {
                    warn!(path = %path.display(), error = %err, "failed to parse settings, using defaults");
                    SettingsState::default()
                }
            },
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "no settings file, using defaults");
                SettingsState::default()
            }
            Err(err) => {
                warn!(path = %path.display(), error = %err, "failed to read settings, using defaults");
                SettingsState::default()
            }
        };
        Self { state, path }
    }

    /// In-memory store for tests and the `--reset` path
    pub fn with_state(state: SettingsState, state_dir: &Path) -> Self {
        Self {
            state,
            path: state_dir.join(SETTINGS_FILE),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Discard persisted state and return to the default fixture
    pub fn reset(&mut self) -> Result<()> {
        self.state = SettingsState::default();
        self.save()
    }

    // Reads are borrowed per domain. Callers never mutate through these.

    pub fn network(&self) -> &NetworkState {
        &self.state.network
    }

    pub fn account(&self) -> &AccountState {
        &self.state.account
    }

    pub fn apps(&self) -> &AppsState {
        &self.state.apps
    }

    pub fn remote(&self) -> &RemoteState {
        &self.state.remote
    }

    pub fn display(&self) -> &DisplayState {
        &self.state.display
    }

    pub fn storage(&self) -> &StorageState {
        &self.state.storage
    }

    pub fn state(&self) -> &SettingsState {
        &self.state
    }

    // Mutators. Each applies its change, keeps the aggregate invariants and
    // persists exactly once.

    /// Turning wifi off also forgets the active connection, on every network
    /// entry as well as the summary field.
    pub fn set_wifi_enabled(&mut self, enabled: bool) -> Result<()> {
        let wifi = &mut self.state.network.wifi;
        wifi.enabled = enabled;
        if !enabled {
            wifi.connected = None;
            for network in &mut wifi.available_networks {
                network.connected = false;
            }
        }
        self.save()
    }

    /// Mark `name` as the connected network. Declines silently when wifi is
    /// disabled or the name is not in the scanned list.
    pub fn connect_network(&mut self, name: &str) -> Result<()> {
        let wifi = &mut self.state.network.wifi;
        if !wifi.enabled || !wifi.available_networks.iter().any(|n| n.name == name) {
            debug!(network = name, "ignoring connect request");
            return Ok(());
        }
        for network in &mut wifi.available_networks {
            network.connected = network.name == name;
        }
        wifi.connected = Some(name.to_string());
        self.save()
    }

    pub fn set_account_sync(&mut self, sync: bool) -> Result<()> {
        self.state.account.google_account.sync = sync;
        self.save()
    }

    pub fn set_show_system_apps(&mut self, show: bool) -> Result<()> {
        self.state.apps.show_system_apps = show;
        self.save()
    }

    pub fn set_show_all_apps(&mut self, show: bool) -> Result<()> {
        self.state.apps.show_all_apps = show;
        self.save()
    }

    /// Zero the stored app data size. The record itself always stays.
    pub fn clear_app_data(&mut self, name: &str) -> Result<()> {
        if let Some(app) = self.state.apps.installed.iter_mut().find(|a| a.name == name) {
            app.data_size = ZERO_SIZE.to_string();
            self.save()
        } else {
            debug!(app = name, "ignoring clear-data for unknown app");
            Ok(())
        }
    }

    /// Zero the stored app cache size. The record itself always stays.
    pub fn clear_app_cache(&mut self, name: &str) -> Result<()> {
        if let Some(app) = self.state.apps.installed.iter_mut().find(|a| a.name == name) {
            app.cache_size = ZERO_SIZE.to_string();
            self.save()
        } else {
            debug!(app = name, "ignoring clear-cache for unknown app");
            Ok(())
        }
    }

    pub fn set_resolution(&mut self, resolution: Resolution) -> Result<()> {
        self.state.display.resolution = resolution;
        self.save()
    }

    pub fn set_hdr(&mut self, hdr: bool) -> Result<()> {
        self.state.display.hdr = hdr;
        self.save()
    }

    pub fn set_audio_output(&mut self, output: AudioOutput) -> Result<()> {
        self.state.display.audio_output = output;
        self.save()
    }

    /// Persist the whole document atomically: write to a temp file in the
    /// same directory, then rename over the target.
    fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(&self.state)?;
        let tmp_path = self.path.with_extension("json.tmp");
        fs::write(&tmp_path, json)?;
        fs::rename(&tmp_path, &self.path)
            .with_context(|| format!("failed to persist settings to {}", self.path.display()))?;
        debug!(path = %self.path.display(), "saved settings");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store() -> (SettingsStore, TempDir) {
        let dir = TempDir::new().unwrap();
        (SettingsStore::load(dir.path()), dir)
    }

    fn read_back(store: &SettingsStore) -> SettingsState {
        let contents = fs::read_to_string(store.path()).unwrap();
        serde_json::from_str(&contents).unwrap()
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let (store, _dir) = store();
        assert_eq!(*store.state(), SettingsState::default());
        assert!(!store.path().exists());
    }

    #[test]
    fn test_load_unparsable_file_uses_defaults() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(SETTINGS_FILE), "{not json").unwrap();
        let store = SettingsStore::load(dir.path());
        assert_eq!(*store.state(), SettingsState::default());
    }

    #[test]
    fn test_mutation_round_trips_through_file() {
        let (mut store, _dir) = store();
        store.set_hdr(false).unwrap();
        assert_eq!(read_back(&store), *store.state());

        store.clear_app_cache("Netflix").unwrap();
        assert_eq!(read_back(&store), *store.state());
    }

    #[test]
    fn test_load_after_save_restores_state() {
        let dir = TempDir::new().unwrap();
        let mut store = SettingsStore::load(dir.path());
        store.set_resolution(Resolution::Uhd2160p).unwrap();
        store.set_show_system_apps(true).unwrap();

        let reloaded = SettingsStore::load(dir.path());
        assert_eq!(reloaded.state(), store.state());
        assert_eq!(reloaded.display().resolution, Resolution::Uhd2160p);
    }

    #[test]
    fn test_disable_wifi_clears_connection_everywhere() {
        let (mut store, _dir) = store();
        assert!(store.network().wifi.connected.is_some());

        store.set_wifi_enabled(false).unwrap();
        let wifi = &store.network().wifi;
        assert!(!wifi.enabled);
        assert!(wifi.connected.is_none());
        assert!(wifi.available_networks.iter().all(|n| !n.connected));
    }

    #[test]
    fn test_connect_network_exclusive() {
        let (mut store, _dir) = store();
        store.connect_network("Guest_Network").unwrap();

        let wifi = &store.network().wifi;
        assert_eq!(wifi.connected.as_deref(), Some("Guest_Network"));
        let connected: Vec<&str> = wifi
            .available_networks
            .iter()
            .filter(|n| n.connected)
            .map(|n| n.name.as_str())
            .collect();
        assert_eq!(connected, vec!["Guest_Network"]);
    }

    #[test]
    fn test_connect_network_noop_when_disabled() {
        let (mut store, _dir) = store();
        store.set_wifi_enabled(false).unwrap();
        store.connect_network("Guest_Network").unwrap();
        assert!(store.network().wifi.connected.is_none());
    }

    #[test]
    fn test_connect_network_noop_for_unknown_name() {
        let (mut store, _dir) = store();
        store.connect_network("NoSuchNetwork").unwrap();
        assert_eq!(
            store.network().wifi.connected.as_deref(),
            Some("Home_Network_5G")
        );
    }

    #[test]
    fn test_clear_app_data_zeroes_only_data() {
        let (mut store, _dir) = store();
        store.clear_app_data("Netflix").unwrap();

        let app = store.apps().find("Netflix").unwrap();
        assert_eq!(app.data_size, ZERO_SIZE);
        assert_eq!(app.cache_size, "150 MB");
        assert_eq!(app.size, "500 MB");
        assert_eq!(store.apps().installed.len(), 15);
    }

    #[test]
    fn test_clear_app_cache_zeroes_only_cache() {
        let (mut store, _dir) = store();
        store.clear_app_cache("Netflix").unwrap();

        let app = store.apps().find("Netflix").unwrap();
        assert_eq!(app.cache_size, ZERO_SIZE);
        assert_eq!(app.data_size, "200 MB");
    }

    #[test]
    fn test_clear_unknown_app_declines_silently() {
        let (mut store, _dir) = store();
        store.clear_app_data("NoSuchApp").unwrap();
        assert_eq!(*store.state(), SettingsState::default());
    }

    #[test]
    fn test_clear_is_idempotent() {
        let (mut store, _dir) = store();
        store.clear_app_cache("Spotify").unwrap();
        store.clear_app_cache("Spotify").unwrap();
        assert_eq!(store.apps().find("Spotify").unwrap().cache_size, ZERO_SIZE);
    }

    #[test]
    fn test_reset_restores_default_fixture() {
        let (mut store, _dir) = store();
        store.set_wifi_enabled(false).unwrap();
        store.clear_app_data("Netflix").unwrap();

        store.reset().unwrap();
        assert_eq!(*store.state(), SettingsState::default());
        assert_eq!(read_back(&store), SettingsState::default());
    }

    #[test]
    fn test_save_leaves_no_temp_file() {
        let (mut store, dir) = store();
        store.set_hdr(false).unwrap();
        let names: Vec<String> = fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec![SETTINGS_FILE.to_string()]);
    }
}
