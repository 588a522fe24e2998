use crux_core::{render::render, Command};

use crate::events::{ConfigEvent, Event};
use crate::model::Model;
use crate::types::{
    DeviceConfig, InterfaceId, InterfaceList, SaveGraphRequest, SaveSection, SaveState,
    ThemeOrigin,
};
use crate::Effect;
use crate::{http_get, post_json};

use super::display::cache_theme;
use super::finish_save;

/// Handle config snapshot, interface list and graph-section events
pub fn handle(event: ConfigEvent, model: &mut Model) -> Command<Effect, Event> {
    match event {
        ConfigEvent::Load => {
            // Single-flight: a load issued while one is outstanding joins it
            if model.config_loading {
                return Command::done();
            }
            model.config_loading = true;
            http_get!(Config, ConfigEvent, "/api/config", LoadResponse, "Config load",
                expect_json: DeviceConfig
            )
        }

        ConfigEvent::LoadResponse(result) => handle_load_response(result, model),

        ConfigEvent::LoadInterfaces { selected } => load_interfaces(selected, model),

        ConfigEvent::InterfacesResponse(result) => handle_interfaces_response(result, model),

        ConfigEvent::SaveGraph { min_mbps, max_mbps } => {
            // min < max is deliberately not checked here, the device validates
            model.graph_save = SaveState::Saving;
            let request = SaveGraphRequest { min_mbps, max_mbps };
            Command::all([
                render(),
                post_json!(Config, ConfigEvent, "/save-graph", SaveGraphResponse, "Save graph settings",
                    body_json: &request
                ),
            ])
        }

        ConfigEvent::SaveGraphResponse(result) => finish_save(SaveSection::Graph, result, model),
    }
}

/// Apply the config snapshot: every present field updates its control, absent
/// fields keep their defaults. Always chains the interface list load, with
/// the fetched interface id as the selection.
fn handle_load_response(
    result: Result<DeviceConfig, String>,
    model: &mut Model,
) -> Command<Effect, Event> {
    model.config_loading = false;

    let config = match result {
        Ok(config) => config,
        Err(e) => {
            log::error!("Config load failed: {e}");
            return render();
        }
    };

    if let Some(ssid) = config.ssid {
        model.current_ssid = Some(ssid);
    }
    if let Some(addr) = config.router_addr {
        model.router_addr = Some(addr);
    }
    if let Some(user) = config.router_user {
        model.router_user = Some(user);
    }
    if let Some(min) = config.min_mbps {
        model.min_mbps = Some(min);
    }
    if let Some(max) = config.max_mbps {
        model.max_mbps = Some(max);
    }
    if let Some(backlight) = config.backlight {
        model.backlight = Some(backlight);
    }
    if let Some(ip) = config.ip {
        model.ip_address = Some(ip);
    }

    let mut commands = vec![render(), load_interfaces(config.interface_id, model)];

    // Device-reported theme wins and overwrites the local cache
    if let Some(theme) = config.theme {
        model.theme = theme;
        model.theme_origin = ThemeOrigin::Device;
        commands.push(cache_theme(theme));
    }

    Command::all(commands)
}

fn load_interfaces(selected: Option<InterfaceId>, model: &mut Model) -> Command<Effect, Event> {
    if model.interfaces_loading {
        return Command::done();
    }
    model.interfaces_loading = true;
    model.selected_interface = selected;
    http_get!(Config, ConfigEvent, "/api/interfaces", InterfacesResponse, "Interface load",
        expect_json: InterfaceList
    )
}

/// Wholesale replacement of the interface selector. A selection that matches
/// none of the returned entries falls back to the placeholder.
fn handle_interfaces_response(
    result: Result<InterfaceList, String>,
    model: &mut Model,
) -> Command<Effect, Event> {
    model.interfaces_loading = false;

    match result {
        Ok(list) => {
            model.interfaces = list.interfaces;
            if let Some(selected) = &model.selected_interface {
                if !model.interfaces.iter().any(|entry| &entry.id == selected) {
                    model.selected_interface = None;
                }
            }
        }
        Err(e) => log::error!("Interface load failed: {e}"),
    }

    render()
}
