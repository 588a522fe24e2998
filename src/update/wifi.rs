use crux_core::{render::render, Command};

use crate::events::{Event, WifiEvent};
use crate::model::Model;
use crate::types::{SaveSection, SaveState, SaveWifiRequest, ScanResults, SCAN_FAILED_TEXT};
use crate::Effect;
use crate::{http_get, post_json};

use super::finish_save;

/// Handle WiFi section events (network scan, credentials save)
pub fn handle(event: WifiEvent, model: &mut Model) -> Command<Effect, Event> {
    match event {
        WifiEvent::Scan => {
            // Single-flight: a scan triggered while one is outstanding joins it
            if model.scan_in_progress {
                return Command::done();
            }
            model.scan_in_progress = true;
            model.scan_alert = None;
            Command::all([
                render(),
                http_get!(Wifi, WifiEvent, "/api/scan", ScanResponse, "WiFi scan",
                    expect_json: ScanResults
                ),
            ])
        }

        WifiEvent::ScanResponse(result) => {
            model.scan_in_progress = false;
            match result {
                // Wholesale replacement; an empty list renders as the
                // "no networks found" placeholder
                Ok(results) => model.networks = Some(results.networks),
                Err(e) => {
                    log::error!("WiFi scan failed: {e}");
                    model.scan_alert = Some(SCAN_FAILED_TEXT.to_string());
                }
            }
            render()
        }

        WifiEvent::Save { ssid, password } => {
            model.wifi_save = SaveState::Saving;
            let request = SaveWifiRequest { ssid, password };
            Command::all([
                render(),
                post_json!(Wifi, WifiEvent, "/save-wifi", SaveResponse, "Save WiFi configuration",
                    body_json: &request
                ),
            ])
        }

        WifiEvent::SaveResponse(result) => finish_save(SaveSection::Wifi, result, model),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::NetworkEntry;

    fn network(ssid: &str, strength: &str, rssi: i32) -> NetworkEntry {
        NetworkEntry {
            ssid: ssid.to_string(),
            strength: strength.to_string(),
            rssi,
        }
    }

    #[test]
    fn scan_sets_busy_flag_and_clears_stale_alert() {
        let mut model = Model {
            scan_alert: Some(SCAN_FAILED_TEXT.to_string()),
            ..Default::default()
        };

        let _ = handle(WifiEvent::Scan, &mut model);

        assert!(model.scan_in_progress);
        assert_eq!(model.scan_alert, None);
    }

    #[test]
    fn scan_while_scanning_is_ignored() {
        let mut model = Model {
            scan_in_progress: true,
            ..Default::default()
        };
        let before = model.clone();

        let _ = handle(WifiEvent::Scan, &mut model);

        assert_eq!(model, before);
    }

    #[test]
    fn scan_result_replaces_network_list() {
        let mut model = Model {
            scan_in_progress: true,
            networks: Some(vec![network("Stale", "Weak", -90)]),
            ..Default::default()
        };
        let results = ScanResults {
            networks: vec![
                network("HomeNet", "Strong", -52),
                network("Neighbor", "Weak", -85),
            ],
        };

        let _ = handle(WifiEvent::ScanResponse(Ok(results)), &mut model);

        assert!(!model.scan_in_progress);
        let networks = model.networks.as_ref().unwrap();
        assert_eq!(networks.len(), 2);
        assert_eq!(networks[0].label(), "HomeNet (Strong -52dBm)");
    }

    #[test]
    fn empty_scan_result_means_no_networks_found() {
        let mut model = Model {
            scan_in_progress: true,
            ..Default::default()
        };

        let _ = handle(WifiEvent::ScanResponse(Ok(ScanResults::default())), &mut model);

        assert_eq!(model.networks, Some(vec![]));
    }

    #[test]
    fn scan_failure_restores_button_and_raises_alert() {
        let mut model = Model {
            scan_in_progress: true,
            networks: Some(vec![network("HomeNet", "Strong", -52)]),
            ..Default::default()
        };

        let _ = handle(
            WifiEvent::ScanResponse(Err("WiFi scan failed: HTTP 503".to_string())),
            &mut model,
        );

        assert!(!model.scan_in_progress);
        assert_eq!(model.scan_alert.as_deref(), Some(SCAN_FAILED_TEXT));
        // previous scan results are kept
        assert_eq!(model.networks.as_ref().unwrap().len(), 1);
    }

    #[test]
    fn save_enters_saving_state() {
        let mut model = Model::default();

        let _ = handle(
            WifiEvent::Save {
                ssid: "HomeNet".to_string(),
                password: "hunter2".to_string(),
            },
            &mut model,
        );

        assert_eq!(model.wifi_save, SaveState::Saving);
        assert_eq!(
            model.save_alert_text(SaveSection::Wifi),
            Some("Saving WiFi configuration...")
        );
    }
}
