use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Alert text shown when a WiFi scan fails
pub const SCAN_FAILED_TEXT: &str = "WiFi scan failed. Please try again.";

/// Canonical identifier for a monitored router interface.
///
/// The router API reports interface ids either as JSON strings or as numbers
/// depending on firmware version. Both wire forms normalize to the same
/// string representation at the deserialization boundary, so equality is
/// always a comparison of canonical ids.
#[derive(Debug, Clone, Serialize, PartialEq, Eq, Hash)]
pub struct InterfaceId(String);

impl InterfaceId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for InterfaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for InterfaceId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Number(i64),
            Text(String),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Number(n) => Self(n.to_string()),
            Raw::Text(s) => Self(s),
        })
    }
}

/// One selectable interface from `GET /api/interfaces`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct InterfaceEntry {
    pub id: InterfaceId,
    pub name: String,
}

impl InterfaceEntry {
    /// Selector label, e.g. `"ether1 (ID: 3)"`
    pub fn label(&self) -> String {
        format!("{} (ID: {})", self.name, self.id)
    }
}

/// Response body of `GET /api/interfaces`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct InterfaceList {
    #[serde(default)]
    pub interfaces: Vec<InterfaceEntry>,
}

/// One network from a WiFi scan
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NetworkEntry {
    pub ssid: String,
    pub strength: String,
    pub rssi: i32,
}

impl NetworkEntry {
    /// Selector label, e.g. `"HomeNet (Strong -52dBm)"`
    pub fn label(&self) -> String {
        format!("{} ({} {}dBm)", self.ssid, self.strength, self.rssi)
    }
}

/// Response body of `GET /api/scan`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScanResults {
    #[serde(default)]
    pub networks: Vec<NetworkEntry>,
}
