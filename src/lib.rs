pub mod commands;
pub mod events;
pub mod http_helpers;
pub mod macros;
pub mod model;
pub mod types;
pub mod update;

#[cfg(target_arch = "wasm32")]
pub mod wasm;


use crux_core::Command;

// Re-export core types
pub use crate::{
    commands::storage::{StorageOperation, StorageOutput},
    events::Event,
    http_helpers::{
        build_url, check_response_status, extract_error_message, is_response_success,
        map_http_error, parse_json_response, process_json_response, process_status_response,
        request_error_event, BASE_URL,
    },
    model::Model,
    types::*,
};
pub use crux_http::Result as HttpResult;

/// Telemetry poll period.
///
/// The shell sends `Event::Telemetry(TelemetryEvent::PollTick)` at this fixed
/// rate for the lifetime of the page. The first sample is requested directly
/// by `Event::Initialize`, so polling starts at t=0.
pub const TELEMETRY_POLL_INTERVAL_MS: u64 = 5000;

#[crux_macros::effect(typegen)]
pub enum Effect {
    Render(crux_core::render::RenderOperation),
    Http(crux_http::protocol::HttpRequest),
    Storage(StorageOperation),
}

pub type StorageCmd = crate::commands::storage::Storage<Effect, Event>;
pub type HttpCmd = crux_http::command::Http<Effect, Event>;

/// The Core application
#[derive(Default)]
pub struct App;

impl crux_core::App for App {
    type Event = Event;
    type Model = Model;
    type ViewModel = Model;
    type Effect = Effect;

    fn update(&self, event: Self::Event, model: &mut Self::Model) -> Command<Effect, Event> {
        update::update(event, model)
    }

    fn view(&self, model: &Self::Model) -> Self::ViewModel {
        model.clone()
    }
}
