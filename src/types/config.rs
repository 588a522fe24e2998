use serde::{Deserialize, Serialize};

use crate::types::{InterfaceId, Theme};

/// Configuration snapshot from `GET /api/config`.
///
/// Every field is optional: the device omits anything it has no value for,
/// and an absent field leaves the corresponding form control at its default.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DeviceConfig {
    #[serde(default)]
    pub ssid: Option<String>,
    #[serde(default)]
    pub router_addr: Option<String>,
    #[serde(default)]
    pub router_user: Option<String>,
    #[serde(default)]
    pub interface_id: Option<InterfaceId>,
    #[serde(default)]
    pub min_mbps: Option<u32>,
    #[serde(default)]
    pub max_mbps: Option<u32>,
    #[serde(default)]
    pub backlight: Option<u8>,
    #[serde(default)]
    pub theme: Option<Theme>,
    #[serde(default)]
    pub ip: Option<String>,
}

/// Request body for `POST /save-wifi`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SaveWifiRequest {
    pub ssid: String,
    pub password: String,
}

/// Request body for `POST /save-router`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SaveRouterRequest {
    pub router_addr: String,
    pub router_user: String,
    pub router_pass: String,
    pub interface_id: InterfaceId,
}

/// Request body for `POST /save-graph`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SaveGraphRequest {
    pub min_mbps: u32,
    pub max_mbps: u32,
}

/// The three independently saved form sections
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum SaveSection {
    Wifi,
    Router,
    Graph,
}

impl SaveSection {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Wifi => "WiFi",
            Self::Router => "Router",
            Self::Graph => "Graph",
        }
    }

    pub const fn saving_text(self) -> &'static str {
        match self {
            Self::Wifi => "Saving WiFi configuration...",
            Self::Router => "Saving router configuration...",
            Self::Graph => "Saving graph settings...",
        }
    }

    pub const fn saved_text(self) -> &'static str {
        match self {
            Self::Wifi => "✓ WiFi configuration saved! Device restarting...",
            Self::Router => "✓ Router configuration saved! Device restarting...",
            Self::Graph => "✓ Graph settings saved! Device restarting...",
        }
    }
}

/// Alert text for any failed save. Non-2xx response bodies are not consulted,
/// every failure renders the same message.
pub const SAVE_FAILED_TEXT: &str = "✗ Error: Save failed";

/// Per-section save workflow state
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum SaveState {
    #[default]
    Idle,
    Saving,
    Saved,
    Failed,
}

impl SaveState {
    /// Text for the section's alert area, `None` when nothing is shown
    pub fn alert_text(self, section: SaveSection) -> Option<&'static str> {
        match self {
            Self::Idle => None,
            Self::Saving => Some(section.saving_text()),
            Self::Saved => Some(section.saved_text()),
            Self::Failed => Some(SAVE_FAILED_TEXT),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod device_config {
        use super::*;

        #[test]
        fn deserializes_full_snapshot() {
            let json = r#"{
                "ssid": "HomeNet",
                "router_addr": "http://192.168.1.1",
                "router_user": "APIUser",
                "interface_id": 3,
                "min_mbps": 0,
                "max_mbps": 480,
                "backlight": 75,
                "theme": "dark",
                "ip": "192.168.1.50"
            }"#;

            let config: DeviceConfig = serde_json::from_str(json).unwrap();

            assert_eq!(config.ssid.as_deref(), Some("HomeNet"));
            assert_eq!(config.router_addr.as_deref(), Some("http://192.168.1.1"));
            assert_eq!(config.interface_id, Some(InterfaceId::new("3")));
            assert_eq!(config.min_mbps, Some(0));
            assert_eq!(config.max_mbps, Some(480));
            assert_eq!(config.backlight, Some(75));
            assert_eq!(config.theme, Some(Theme::Dark));
            assert_eq!(config.ip.as_deref(), Some("192.168.1.50"));
        }

        #[test]
        fn absent_fields_deserialize_to_none() {
            let config: DeviceConfig = serde_json::from_str(r#"{"ssid": "HomeNet"}"#).unwrap();

            assert_eq!(config.ssid.as_deref(), Some("HomeNet"));
            assert_eq!(config.router_addr, None);
            assert_eq!(config.interface_id, None);
            assert_eq!(config.theme, None);
        }

        #[test]
        fn empty_object_is_valid() {
            let config: DeviceConfig = serde_json::from_str("{}").unwrap();
            assert_eq!(config, DeviceConfig::default());
        }
    }

    mod save_state {
        use super::*;

        #[test]
        fn idle_shows_no_alert() {
            assert_eq!(SaveState::Idle.alert_text(SaveSection::Wifi), None);
        }

        #[test]
        fn alert_texts_are_section_specific() {
            assert_eq!(
                SaveState::Saving.alert_text(SaveSection::Router),
                Some("Saving router configuration...")
            );
            assert_eq!(
                SaveState::Saved.alert_text(SaveSection::Graph),
                Some("✓ Graph settings saved! Device restarting...")
            );
        }

        #[test]
        fn failure_text_is_uniform_across_sections() {
            for section in [SaveSection::Wifi, SaveSection::Router, SaveSection::Graph] {
                assert_eq!(
                    SaveState::Failed.alert_text(section),
                    Some("✗ Error: Save failed")
                );
            }
        }
    }
}
