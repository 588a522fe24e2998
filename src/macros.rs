/// Macro for model field updates with automatic rendering.
/// Supports both single and multiple field updates.
///
/// # Examples
///
/// Single field update:
/// ```ignore
/// update_field!(model.scan_alert, None)
/// ```
///
/// Multiple field updates:
/// ```ignore
/// update_field!(
///     model.scan_in_progress, false;
///     model.scan_alert, None
/// )
/// ```
#[macro_export]
macro_rules! update_field {
    // Multiple field updates (must come first to match the pattern)
    ($($model_field:expr, $value:expr);+ $(;)?) => {{
        let mut changed = false;
        $(
            let value = $value;
            if $model_field != value {
                $model_field = value;
                changed = true;
            }
        )+
        if changed {
            crux_core::render::render()
        } else {
            crux_core::Command::done()
        }
    }};

    // Single field update
    ($model_field:expr, $value:expr) => {{
        update_field!($model_field, $value;)
    }};
}

/// Macro for GET requests expecting a JSON response, with standard error
/// handling. Requires domain parameters for event wrapping.
///
/// # Example
/// ```ignore
/// http_get!(Config, ConfigEvent, "/api/config", LoadResponse, "Config load",
///     expect_json: DeviceConfig
/// )
/// ```
#[macro_export]
macro_rules! http_get {
    ($domain:ident, $domain_event:ident, $endpoint:expr, $response_event:ident, $action:expr, expect_json: $response_type:ty) => {
        $crate::HttpCmd::get($crate::build_url($endpoint))
            .build()
            .then_send(|result| {
                let event_result: Result<$response_type, String> =
                    $crate::process_json_response($action, result);
                $crate::events::Event::$domain($crate::events::$domain_event::$response_event(
                    event_result,
                ))
            })
    };
}

/// Macro for POST requests with a JSON body expecting a status-only response.
/// Requires domain parameters for event wrapping.
///
/// NOTE: URLs are prefixed with `https://relative`.
/// `crux_http` requires absolute URLs and rejects relative paths.
/// The UI shell strips this prefix before sending requests.
///
/// # Example
/// ```ignore
/// post_json!(Wifi, WifiEvent, "/save-wifi", SaveResponse, "Save WiFi configuration",
///     body_json: &request
/// )
/// ```
#[macro_export]
macro_rules! post_json {
    ($domain:ident, $domain_event:ident, $endpoint:expr, $response_event:ident, $action:expr, body_json: $body:expr) => {{
        match $crate::HttpCmd::post($crate::build_url($endpoint))
            .header("Content-Type", "application/json")
            .body_json($body)
        {
            Ok(builder) => builder.build().then_send(|result| {
                let event_result = $crate::process_status_response($action, result);
                $crate::events::Event::$domain($crate::events::$domain_event::$response_event(
                    event_result,
                ))
            }),
            Err(e) => $crate::request_error_event($action, e, |event_result| {
                $crate::events::Event::$domain($crate::events::$domain_event::$response_event(
                    event_result,
                ))
            }),
        }
    }};
}
