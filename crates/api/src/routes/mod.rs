pub mod ai;
pub mod health;
pub mod whiteboards;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /ai/templates                  generate a starter template (POST)
/// /ai/assist                     single-element canvas assistant (POST)
///
/// /whiteboards                   list, create
/// /whiteboards/{id}              get, update
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // AI generation and assistant.
        .nest("/ai", ai::router())
        // Whiteboard records.
        .nest("/whiteboards", whiteboards::router())
}
