use serde::{Deserialize, Serialize};

use crate::types::*;

/// Application Model - the complete client state
/// Also serves as the ViewModel when serialized
#[derive(Debug, Default, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Model {
    // WiFi section
    /// SSID the device is currently connected with, rendered as the
    /// pre-selected "(current)" entry
    pub current_ssid: Option<String>,
    /// `None` until the first scan; `Some(vec![])` after a scan that found
    /// nothing (rendered as the "no networks found" placeholder)
    pub networks: Option<Vec<NetworkEntry>>,
    pub scan_in_progress: bool,
    /// Blocking alert text after a failed scan
    pub scan_alert: Option<String>,
    pub wifi_save: SaveState,

    // Router section
    pub router_addr: Option<String>,
    pub router_user: Option<String>,
    pub interfaces: Vec<InterfaceEntry>,
    pub selected_interface: Option<InterfaceId>,
    pub router_save: SaveState,

    // Graph section
    pub min_mbps: Option<u32>,
    pub max_mbps: Option<u32>,
    pub graph_save: SaveState,

    // Display settings
    pub backlight: Option<u8>,
    pub backlight_sync: BacklightSync,
    pub theme: Theme,
    pub theme_origin: ThemeOrigin,

    // Telemetry
    pub telemetry: TelemetryView,
    /// IP badge, kept across failed polls
    pub ip_address: Option<String>,

    // In-flight guards (single-flight per operation kind)
    pub config_loading: bool,
    pub interfaces_loading: bool,
    pub stats_in_flight: bool,
}

impl Model {
    pub fn save_state(&self, section: SaveSection) -> SaveState {
        match section {
            SaveSection::Wifi => self.wifi_save,
            SaveSection::Router => self.router_save,
            SaveSection::Graph => self.graph_save,
        }
    }

    pub fn set_save_state(&mut self, section: SaveSection, state: SaveState) {
        match section {
            SaveSection::Wifi => self.wifi_save = state,
            SaveSection::Router => self.router_save = state,
            SaveSection::Graph => self.graph_save = state,
        }
    }

    /// Text for a section's alert area, `None` when nothing is shown
    pub fn save_alert_text(&self, section: SaveSection) -> Option<&'static str> {
        self.save_state(section).alert_text(section)
    }
}
