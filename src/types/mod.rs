//! Domain-based type organization
//!
//! Types are organized by domain to match the structure in `update/`:
//! - config: configuration snapshot and save-section state
//! - network: WiFi scan results and monitored interface types
//! - telemetry: live stats sample and display values
//! - display: backlight and theme types

pub mod config;
pub mod display;
pub mod network;
pub mod telemetry;

pub use config::*;
pub use display::*;
pub use network::*;
pub use telemetry::*;
