//! CORS middleware
//!
//! Allow-list driven cross-origin handling. Requests without an `Origin`
//! header, or with an origin outside the configured allow-list, pass through
//! with no CORS headers at all — absence of a match is rejection.
//!
//! OPTIONS requests are answered here with 204 No Content before any routing
//! happens, so a preflight can never surface a downstream error.

use axum::{
    extract::{Request, State},
    http::{HeaderValue, Method, StatusCode, header},
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::core::ServerState;

/// Apply CORS headers to every outgoing response.
pub async fn apply_cors(
    State(state): State<ServerState>,
    request: Request,
    next: Next,
) -> Response {
    let origin = request
        .headers()
        .get(header::ORIGIN)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned);

    let allowed = origin
        .as_deref()
        .is_some_and(|origin| state.config.allowed_origins.iter().any(|o| o == origin));

    // Preflight: short-circuit before routing. 204 regardless of origin;
    // CORS headers only for allow-listed origins.
    if request.method() == Method::OPTIONS {
        let mut response = StatusCode::NO_CONTENT.into_response();
        if allowed {
            if let Some(origin) = origin.as_deref() {
                set_origin_headers(&mut response, origin);
            }
            set_preflight_headers(&mut response, &state);
        }
        return response;
    }

    let mut response = next.run(request).await;
    if allowed {
        if let Some(origin) = origin.as_deref() {
            set_origin_headers(&mut response, origin);
        }
    }
    response
}

fn set_origin_headers(response: &mut Response, origin: &str) {
    if let Ok(value) = HeaderValue::from_str(origin) {
        let headers = response.headers_mut();
        headers.insert(header::ACCESS_CONTROL_ALLOW_ORIGIN, value);
        headers.insert(header::VARY, HeaderValue::from_static("Origin"));
    }
}

fn set_preflight_headers(response: &mut Response, state: &ServerState) {
    let headers = response.headers_mut();
    if let Ok(value) = HeaderValue::from_str(&state.config.allowed_methods) {
        headers.insert(header::ACCESS_CONTROL_ALLOW_METHODS, value);
    }
    if let Ok(value) = HeaderValue::from_str(&state.config.allowed_headers) {
        headers.insert(header::ACCESS_CONTROL_ALLOW_HEADERS, value);
    }
    headers.insert(
        header::ACCESS_CONTROL_MAX_AGE,
        HeaderValue::from(state.config.cors_max_age_secs),
    );
}
