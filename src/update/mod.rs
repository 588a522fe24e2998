mod config;
mod display;
mod router;
mod telemetry;
mod ui;
mod wifi;

use crux_core::{render::render, Command};

use crate::events::{DisplayEvent, Event};
use crate::http_get;
use crate::model::Model;
use crate::types::{
    DeviceConfig, SaveSection, SaveState, TelemetrySample, THEME_STORAGE_KEY,
};
use crate::{Effect, StorageCmd};

/// Main update dispatcher - routes events to section-specific handlers
pub fn update(event: Event, model: &mut Model) -> Command<Effect, Event> {
    match event {
        Event::Initialize => initialize(model),
        Event::Config(event) => config::handle(event, model),
        Event::Wifi(event) => wifi::handle(event, model),
        Event::Router(event) => router::handle(event, model),
        Event::Telemetry(event) => telemetry::handle(event, model),
        Event::Display(event) => display::handle(event, model),
        Event::Ui(event) => ui::handle(event, model),
    }
}

/// Page load: read the cached theme, fetch the config snapshot and the first
/// telemetry sample (t=0, the shell only sends poll ticks after this)
fn initialize(model: &mut Model) -> Command<Effect, Event> {
    model.config_loading = true;
    model.stats_in_flight = true;

    Command::all([
        render(),
        StorageCmd::read(THEME_STORAGE_KEY)
            .build()
            .then_send(|output| Event::Display(DisplayEvent::CachedThemeLoaded(output.into_value()))),
        http_get!(Config, ConfigEvent, "/api/config", LoadResponse, "Config load",
            expect_json: DeviceConfig
        ),
        http_get!(Telemetry, TelemetryEvent, "/api/stats", StatsResponse, "Stats fetch",
            expect_json: TelemetrySample
        ),
    ])
}

/// Shared tail of the three save workflows: any error (non-2xx status or
/// transport failure) renders the uniform failure alert, details go to the log
pub(crate) fn finish_save(
    section: SaveSection,
    result: Result<(), String>,
    model: &mut Model,
) -> Command<Effect, Event> {
    match result {
        Ok(()) => model.set_save_state(section, SaveState::Saved),
        Err(e) => {
            log::error!("{} save failed: {e}", section.label());
            model.set_save_state(section, SaveState::Failed);
        }
    }
    render()
}
