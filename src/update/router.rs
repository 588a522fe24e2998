use crux_core::{render::render, Command};

use crate::events::{Event, RouterEvent};
use crate::model::Model;
use crate::post_json;
use crate::types::{SaveRouterRequest, SaveSection, SaveState};
use crate::Effect;

use super::finish_save;

/// Handle router section events (upstream API credentials save)
pub fn handle(event: RouterEvent, model: &mut Model) -> Command<Effect, Event> {
    match event {
        RouterEvent::Save {
            router_addr,
            router_user,
            router_pass,
            interface_id,
        } => {
            model.router_save = SaveState::Saving;
            let request = SaveRouterRequest {
                router_addr,
                router_user,
                router_pass,
                interface_id,
            };
            Command::all([
                render(),
                post_json!(Router, RouterEvent, "/save-router", SaveResponse, "Save router configuration",
                    body_json: &request
                ),
            ])
        }

        RouterEvent::SaveResponse(result) => finish_save(SaveSection::Router, result, model),
    }
}
