use crux_core::{render::render, Command};

use crate::events::{Event, TelemetryEvent};
use crate::http_get;
use crate::model::Model;
use crate::types::{TelemetrySample, TelemetryView};
use crate::Effect;

/// Handle the telemetry poll.
///
/// The shell ticks every `TELEMETRY_POLL_INTERVAL_MS` for the lifetime of the
/// page; a tick that lands while the previous request is still outstanding is
/// skipped rather than stacking a second request.
pub fn handle(event: TelemetryEvent, model: &mut Model) -> Command<Effect, Event> {
    match event {
        TelemetryEvent::PollTick => {
            if model.stats_in_flight {
                return Command::done();
            }
            model.stats_in_flight = true;
            http_get!(Telemetry, TelemetryEvent, "/api/stats", StatsResponse, "Stats fetch",
                expect_json: TelemetrySample
            )
        }

        TelemetryEvent::StatsResponse(result) => {
            model.stats_in_flight = false;
            match result {
                Ok(sample) => {
                    model.telemetry = TelemetryView::from_sample(&sample);
                    if let Some(ip) = sample.ip {
                        model.ip_address = Some(ip);
                    }
                }
                Err(e) => {
                    // replace stale values with the marker, keep the IP badge
                    log::warn!("Stats fetch failed: {e}");
                    model.telemetry = TelemetryView::unavailable();
                }
            }
            render()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::RamValue;

    fn sample(cpu: f64, rx: f64, tx: f64, ip: Option<&str>) -> TelemetrySample {
        TelemetrySample {
            cpu,
            ram: RamValue::Text("23.4 MB".to_string()),
            rx,
            tx,
            ip: ip.map(str::to_string),
        }
    }

    #[test]
    fn success_overwrites_all_four_values_with_units() {
        let mut model = Model {
            stats_in_flight: true,
            ..Default::default()
        };

        let _ = handle(
            TelemetryEvent::StatsResponse(Ok(sample(12.5, 150.0, 32.7, Some("192.168.1.50")))),
            &mut model,
        );

        assert!(!model.stats_in_flight);
        assert_eq!(model.telemetry.cpu, "12.5%");
        assert_eq!(model.telemetry.ram, "23.4 MB");
        assert_eq!(model.telemetry.rx, "150 Mbps");
        assert_eq!(model.telemetry.tx, "32.7 Mbps");
        assert_eq!(model.ip_address.as_deref(), Some("192.168.1.50"));
    }

    #[test]
    fn missing_ip_leaves_badge_unchanged() {
        let mut model = Model {
            ip_address: Some("192.168.1.50".to_string()),
            stats_in_flight: true,
            ..Default::default()
        };

        let _ = handle(
            TelemetryEvent::StatsResponse(Ok(sample(1.0, 2.0, 3.0, None))),
            &mut model,
        );

        assert_eq!(model.ip_address.as_deref(), Some("192.168.1.50"));
    }

    #[test]
    fn failure_marks_values_unavailable_but_keeps_ip_badge() {
        let mut model = Model {
            ip_address: Some("192.168.1.50".to_string()),
            stats_in_flight: true,
            ..Default::default()
        };
        let _ = handle(
            TelemetryEvent::StatsResponse(Ok(sample(12.5, 150.0, 32.7, None))),
            &mut model,
        );

        let _ = handle(
            TelemetryEvent::StatsResponse(Err("Stats fetch failed: timeout".to_string())),
            &mut model,
        );

        assert_eq!(model.telemetry, TelemetryView::unavailable());
        assert_eq!(model.ip_address.as_deref(), Some("192.168.1.50"));
    }

    #[test]
    fn tick_while_request_outstanding_is_skipped() {
        let mut model = Model {
            stats_in_flight: true,
            ..Default::default()
        };
        let before = model.clone();

        let _ = handle(TelemetryEvent::PollTick, &mut model);

        assert_eq!(model, before);
    }

    #[test]
    fn tick_issues_request_when_idle() {
        let mut model = Model::default();

        let _ = handle(TelemetryEvent::PollTick, &mut model);

        assert!(model.stats_in_flight);
    }
}
