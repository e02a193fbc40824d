//! Panel page, status fragment and container command endpoints.

use askama::Template;
use axum::{
    extract::State,
    http::{Method, StatusCode},
    response::{Html, IntoResponse, Response},
    routing::{any, get},
    Router,
};

use super::{
    templates::{IndexPage, StatusFragment, POLL_INTERVAL_SECS},
    AppState,
};
use crate::{control::Command, tracing::prelude::*};

/// Full page with the configured title and container name.
async fn index(State(state): State<AppState>) -> Response {
    let page = IndexPage {
        title: &state.config.title,
        container_name: &state.config.container_name,
        poll_interval_secs: POLL_INTERVAL_SECS,
    };
    render(page)
}

/// Status fragment, polled by the page.
///
/// One inspect round trip per call; nothing is remembered between polls.
async fn status(State(state): State<AppState>) -> Response {
    let running = state.control.is_running().await;
    render(StatusFragment { running })
}

async fn start(State(state): State<AppState>, method: Method) -> Response {
    command(&state, method, Command::Start).await
}

async fn stop(State(state): State<AppState>, method: Method) -> Response {
    command(&state, method, Command::Stop).await
}

async fn restart(State(state): State<AppState>, method: Method) -> Response {
    command(&state, method, Command::Restart).await
}

// Only POST reaches the daemon. Any other method gets an empty 200 so a
// stray GET from a browser or crawler never touches the container.
async fn command(state: &AppState, method: Method, command: Command) -> Response {
    if method != Method::POST {
        trace!(%method, %command, "Ignoring non-POST command request");
        return StatusCode::OK.into_response();
    }

    match state.control.execute(command).await {
        Ok(()) => StatusCode::OK.into_response(),
        Err(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response(),
    }
}

fn render<T: Template>(template: T) -> Response {
    match template.render() {
        Ok(body) => Html(body).into_response(),
        Err(e) => {
            error!(error = %e, "Failed to render template");
            (StatusCode::INTERNAL_SERVER_ERROR, "Template error").into_response()
        }
    }
}

/// Build the panel routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(index))
        .route("/status", get(status))
        .route("/start", any(start))
        .route("/stop", any(stop))
        .route("/restart", any(restart))
}
