use std::fmt;

use serde::{Deserialize, Serialize};

/// Marker shown in place of telemetry values when a stats fetch fails
pub const TELEMETRY_UNAVAILABLE: &str = "N/A";

/// RAM usage as reported by the device.
///
/// Older firmware sends a preformatted string ("23.4 MB"), newer firmware a
/// plain number. Either way the value is displayed verbatim.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum RamValue {
    Number(f64),
    Text(String),
}

impl fmt::Display for RamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

/// Response body of `GET /api/stats`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TelemetrySample {
    pub cpu: f64,
    pub ram: RamValue,
    pub rx: f64,
    pub tx: f64,
    #[serde(default)]
    pub ip: Option<String>,
}

/// The four telemetry display values, already formatted with their units.
///
/// Each poll replaces the whole struct, no history is retained.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TelemetryView {
    pub cpu: String,
    pub ram: String,
    pub rx: String,
    pub tx: String,
}

impl Default for TelemetryView {
    fn default() -> Self {
        Self {
            cpu: "--".to_string(),
            ram: "--".to_string(),
            rx: "--".to_string(),
            tx: "--".to_string(),
        }
    }
}

impl TelemetryView {
    pub fn from_sample(sample: &TelemetrySample) -> Self {
        Self {
            cpu: format!("{}%", sample.cpu),
            ram: sample.ram.to_string(),
            rx: format!("{} Mbps", sample.rx),
            tx: format!("{} Mbps", sample.tx),
        }
    }

    /// All four fields set to the "not available" marker
    pub fn unavailable() -> Self {
        Self {
            cpu: TELEMETRY_UNAVAILABLE.to_string(),
            ram: TELEMETRY_UNAVAILABLE.to_string(),
            rx: TELEMETRY_UNAVAILABLE.to_string(),
            tx: TELEMETRY_UNAVAILABLE.to_string(),
        }
    }
}
