use crux_core::{render::render, Command};

use crate::events::{DisplayEvent, Event};
use crate::model::Model;
use crate::post_json;
use crate::types::{
    BacklightRequest, Theme, ThemeOrigin, ThemeRequest, THEME_STORAGE_KEY,
};
use crate::{Effect, StorageCmd};

/// Handle backlight and theme events.
///
/// Both are optimistic: the model updates synchronously, the persistence
/// request is fire-and-forget and failures are only logged, never rolled back
/// (client and device may diverge until the next config load).
pub fn handle(event: DisplayEvent, model: &mut Model) -> Command<Effect, Event> {
    match event {
        DisplayEvent::SetBacklight(value) => set_backlight(value, model),

        DisplayEvent::BacklightResponse(result) => finish_backlight(result, model),

        DisplayEvent::ToggleTheme => {
            let theme = model.theme.toggled();
            model.theme = theme;
            model.theme_origin = ThemeOrigin::User;
            let request = ThemeRequest { theme };
            Command::all([
                render(),
                cache_theme(theme),
                post_json!(Display, DisplayEvent, "/api/theme", ThemeResponse, "Theme save",
                    body_json: &request
                ),
            ])
        }

        DisplayEvent::ThemeResponse(result) => {
            if let Err(e) = result {
                log::error!("Theme save failed: {e}");
            }
            Command::done()
        }

        DisplayEvent::CachedThemeLoaded(value) => {
            // the cache only applies while nothing stronger has set the theme
            if model.theme_origin != ThemeOrigin::Default {
                return Command::done();
            }
            match value.as_deref().and_then(Theme::from_cache) {
                Some(theme) => {
                    model.theme = theme;
                    model.theme_origin = ThemeOrigin::Cached;
                    render()
                }
                None => Command::done(),
            }
        }

        DisplayEvent::ThemeCacheWritten => Command::done(),
    }
}

/// Persist the theme preference in the shell's storage cache
pub(super) fn cache_theme(theme: Theme) -> Command<Effect, Event> {
    StorageCmd::write(THEME_STORAGE_KEY, theme.as_str())
        .build()
        .then_send(|_| Event::Display(DisplayEvent::ThemeCacheWritten))
}

/// Optimistic local update, then at most one request in flight; values that
/// arrive during flight coalesce into `pending` (trailing edge of a drag)
fn set_backlight(value: u8, model: &mut Model) -> Command<Effect, Event> {
    let value = value.min(100);
    model.backlight = Some(value);

    if model.backlight_sync.in_flight.is_some() {
        model.backlight_sync.pending = Some(value);
        return render();
    }

    model.backlight_sync.in_flight = Some(value);
    Command::all([render(), post_backlight(value)])
}

fn finish_backlight(result: Result<(), String>, model: &mut Model) -> Command<Effect, Event> {
    if let Err(e) = result {
        log::error!("Backlight update failed: {e}");
    }

    match model.backlight_sync.pending.take() {
        Some(value) => {
            model.backlight_sync.in_flight = Some(value);
            post_backlight(value)
        }
        None => {
            model.backlight_sync.in_flight = None;
            Command::done()
        }
    }
}

fn post_backlight(value: u8) -> Command<Effect, Event> {
    let request = BacklightRequest { brightness: value };
    post_json!(Display, DisplayEvent, "/api/backlight", BacklightResponse, "Backlight update",
        body_json: &request
    )
}
