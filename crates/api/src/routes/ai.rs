//! Route definitions for AI-assisted whiteboard setup.

use axum::routing::post;
use axum::Router;

use crate::handlers::ai;
use crate::state::AppState;

/// AI routes mounted at `/ai`.
///
/// ```text
/// POST /templates -> generate_template
/// POST /assist    -> assist
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/templates", post(ai::generate_template))
        .route("/assist", post(ai::assist))
}
