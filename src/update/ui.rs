use crux_core::{render::render, Command};

use crate::events::{Event, UiEvent};
use crate::model::Model;
use crate::types::SaveState;
use crate::update_field;
use crate::Effect;

/// Handle UI-related events (dismiss alerts)
pub fn handle(event: UiEvent, model: &mut Model) -> Command<Effect, Event> {
    match event {
        UiEvent::DismissSaveAlert(section) => {
            model.set_save_state(section, SaveState::Idle);
            render()
        }
        UiEvent::DismissScanAlert => update_field!(model.scan_alert, None),
    }
}
