//! Route definitions for whiteboard records.

use axum::routing::get;
use axum::Router;

use crate::handlers::whiteboards;
use crate::state::AppState;

/// Whiteboard routes mounted at `/whiteboards`.
///
/// ```text
/// GET    /      -> list_whiteboards
/// POST   /      -> create_whiteboard
/// GET    /{id}  -> get_whiteboard
/// PUT    /{id}  -> update_whiteboard
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(whiteboards::list_whiteboards).post(whiteboards::create_whiteboard),
        )
        .route(
            "/{id}",
            get(whiteboards::get_whiteboard).put(whiteboards::update_whiteboard),
        )
}
