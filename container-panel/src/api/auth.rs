//! HTTP basic authentication gate.
//!
//! Applied to every route. The gate is active only when both `AUTH_USER`
//! and `AUTH_PASS` are non-empty; otherwise requests pass straight through.

use axum::{
    extract::{Request, State},
    http::{header, HeaderMap, HeaderValue, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};
use base64::{engine::general_purpose::STANDARD, Engine as _};

use super::AppState;
use crate::tracing::prelude::*;

/// Challenge sent with every 401.
const CHALLENGE: &str = r#"Basic realm="Restricted""#;

/// Middleware rejecting requests without the configured credentials.
pub async fn require_basic_auth(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let config = &state.config;
    if !config.auth_enabled() {
        return next.run(request).await;
    }

    let authorized = basic_credentials(request.headers())
        .is_some_and(|(user, pass)| user == config.auth_user && pass == config.auth_pass);

    if authorized {
        next.run(request).await
    } else {
        debug!(path = %request.uri().path(), "Rejected unauthenticated request");
        unauthorized()
    }
}

fn unauthorized() -> Response {
    (
        StatusCode::UNAUTHORIZED,
        [(header::WWW_AUTHENTICATE, HeaderValue::from_static(CHALLENGE))],
        "Unauthorized",
    )
        .into_response()
}

/// Extract `(user, password)` from an `Authorization: Basic ...` header.
///
/// Returns `None` when the header is absent, uses another scheme, or does
/// not decode to `user:password`.
fn basic_credentials(headers: &HeaderMap) -> Option<(String, String)> {
    let value = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    let (scheme, encoded) = value.split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("basic") {
        return None;
    }

    let decoded = STANDARD.decode(encoded.trim()).ok()?;
    let decoded = String::from_utf8(decoded).ok()?;
    let (user, pass) = decoded.split_once(':')?;
    Some((user.to_string(), pass.to_string()))
}
