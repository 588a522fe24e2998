use serde::{Deserialize, Serialize};

use crate::types::*;

/// Events that can happen in the app, grouped by form section / concern
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub enum Event {
    // Initialization: load config, read the cached theme, request the first
    // telemetry sample
    Initialize,

    Config(ConfigEvent),
    Wifi(WifiEvent),
    Router(RouterEvent),
    Telemetry(TelemetryEvent),
    Display(DisplayEvent),
    Ui(UiEvent),
}

/// Configuration snapshot, interface list and graph bounds
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub enum ConfigEvent {
    Load,
    LoadInterfaces {
        selected: Option<InterfaceId>,
    },
    SaveGraph {
        min_mbps: u32,
        max_mbps: u32,
    },

    // HTTP responses (internal events, skipped from serialization)
    #[serde(skip)]
    LoadResponse(Result<DeviceConfig, String>),
    #[serde(skip)]
    InterfacesResponse(Result<InterfaceList, String>),
    #[serde(skip)]
    SaveGraphResponse(Result<(), String>),
}

/// WiFi credentials section: network scan and save
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub enum WifiEvent {
    Scan,
    Save {
        ssid: String,
        password: String,
    },

    #[serde(skip)]
    ScanResponse(Result<ScanResults, String>),
    #[serde(skip)]
    SaveResponse(Result<(), String>),
}

/// Upstream router API credentials section
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub enum RouterEvent {
    Save {
        router_addr: String,
        router_user: String,
        router_pass: String,
        interface_id: InterfaceId,
    },

    #[serde(skip)]
    SaveResponse(Result<(), String>),
}

/// Live telemetry poll (shell-driven ticks)
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub enum TelemetryEvent {
    PollTick,

    #[serde(skip)]
    StatsResponse(Result<TelemetrySample, String>),
}

/// Backlight level and UI theme
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub enum DisplayEvent {
    SetBacklight(u8),
    ToggleTheme,

    #[serde(skip)]
    CachedThemeLoaded(Option<String>),
    #[serde(skip)]
    ThemeCacheWritten,
    #[serde(skip)]
    BacklightResponse(Result<(), String>),
    #[serde(skip)]
    ThemeResponse(Result<(), String>),
}

/// UI actions
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub enum UiEvent {
    DismissSaveAlert(SaveSection),
    DismissScanAlert,
}
