//! HTTP helper functions for Crux Core
//!
//! Shared response handling used by the request macros: status checking,
//! JSON parsing and transport-error mapping into `Result<T, String>` values.

use crux_http::Response;

/// Base URL for device API endpoints.
///
/// NOTE: This is a dummy prefix required because `crux_http` (v0.16.0-rc2)
/// requires absolute URLs and rejects relative paths
/// (`RelativeUrlWithoutBase` error). The UI shell strips this prefix before
/// sending requests via `fetch()`, making them relative to the page origin.
pub const BASE_URL: &str = "https://relative";

/// Constructs the full address from a given endpoint.
///
/// # Example
/// ```
/// use linkview_ui_core::http_helpers::build_url;
/// let url = build_url("/api/config");
/// assert_eq!(url, "https://relative/api/config");
/// ```
pub fn build_url(endpoint: &str) -> String {
    format!("{BASE_URL}{endpoint}")
}

/// Validates HTTP response.
///
/// Returns `true` if the response status is 2xx.
pub fn is_response_success(response: &Response<Vec<u8>>) -> bool {
    response.status().is_success()
}

/// Extracts error message from HTTP response.
pub fn extract_error_message(action: &str, response: &mut Response<Vec<u8>>) -> String {
    let status = response.status().to_string();

    match response.take_body() {
        Some(body) => {
            if body.is_empty() {
                format!("{action} failed: HTTP {status} (Empty body)")
            } else {
                match String::from_utf8(body) {
                    Ok(msg) => format!("{action} failed: HTTP {status}: {msg}"),
                    Err(e) => format!("{action} failed: HTTP {status} (Invalid UTF-8: {e})"),
                }
            }
        }
        None => format!("{action} failed: HTTP {status} (No body)"),
    }
}

/// Parse JSON from response body.
///
/// Returns error if response is not successful or JSON parsing fails.
pub fn parse_json_response<T: serde::de::DeserializeOwned>(
    action: &str,
    response: &mut Response<Vec<u8>>,
) -> Result<T, String> {
    if !is_response_success(response) {
        return Err(extract_error_message(action, response));
    }

    match response.take_body() {
        Some(body) => {
            serde_json::from_slice(&body).map_err(|e| format!("{action}: JSON parse error: {e}"))
        }
        None => Err(format!("{action}: Empty response body")),
    }
}

/// Check response status only (no body parsing).
///
/// For endpoints whose body is not consulted (the save endpoints return `{}`
/// on 2xx, theme/backlight return nothing).
pub fn check_response_status(action: &str, response: &mut Response<Vec<u8>>) -> Result<(), String> {
    if is_response_success(response) {
        Ok(())
    } else {
        Err(extract_error_message(action, response))
    }
}

/// Map a transport-level error into the uniform error string
pub fn map_http_error(action: &str, error: crux_http::HttpError) -> String {
    format!("{action} failed: {error}")
}

/// Process HTTP response result and check status only (no JSON parsing)
pub fn process_status_response(
    action: &str,
    result: crux_http::Result<Response<Vec<u8>>>,
) -> Result<(), String> {
    match result {
        Ok(mut response) => check_response_status(action, &mut response),
        Err(e) => Err(map_http_error(action, e)),
    }
}

/// Process HTTP response result and parse JSON
pub fn process_json_response<T: serde::de::DeserializeOwned>(
    action: &str,
    result: crux_http::Result<Response<Vec<u8>>>,
) -> Result<T, String> {
    match result {
        Ok(mut response) => parse_json_response(action, &mut response),
        Err(e) => Err(map_http_error(action, e)),
    }
}

/// Handle request creation error - logs and feeds the failure back as the
/// operation's response event
///
/// Used when building an HTTP request fails (e.g. JSON serialization error),
/// so the failure takes the same path as any other request failure.
pub fn request_error_event<E>(
    action: &str,
    error: impl std::fmt::Display,
    make_event: impl FnOnce(Result<(), String>) -> E,
) -> crux_core::Command<crate::Effect, E>
where
    E: Send + 'static,
{
    let message = format!("Failed to create {action} request: {error}");
    log::error!("{message}");
    crux_core::Command::event(make_event(Err(message)))
}

// Note: Unit tests for the response helpers are not included because
// crux_http::Response has a private constructor. These functions are
// exercised through the request macros that use them.
