//! Handlers for whiteboard records.
//!
//! Provides listing (optionally per user), retrieval, creation and partial
//! update. Creation can seed the canvas from a prompt via the template
//! generator.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;
use whiteboard_core::error::CoreError;
use whiteboard_core::types::DbId;
use whiteboard_core::{generator, whiteboard};
use whiteboard_db::models::whiteboard::{CreateWhiteboard, UpdateWhiteboard};

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// Query parameters for `GET /whiteboards`.
#[derive(Debug, Deserialize)]
pub struct ListWhiteboardsQuery {
    /// Only whiteboards this user owns or collaborates on.
    pub user_id: Option<String>,
}

/// Body of `POST /whiteboards`.
///
/// When `prompt` is present the generated template becomes the initial
/// content and its type overrides `template`. The title and description
/// the classifier suggested fill in for any that were omitted.
#[derive(Debug, Deserialize)]
pub struct CreateWhiteboardRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub template: Option<String>,
    pub user_id: Option<String>,
    pub content: Option<serde_json::Value>,
    pub is_public: Option<bool>,
    pub prompt: Option<String>,
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Whiteboard",
        id,
    })
}

fn validate_update_input(input: &UpdateWhiteboard) -> AppResult<()> {
    if let Some(ref title) = input.title {
        whiteboard::validate_title(title)?;
    }
    if let Some(ref description) = input.description {
        whiteboard::validate_description(description)?;
    }
    Ok(())
}

/// Resolve a create request into a store DTO, running the generator if the
/// request carries a prompt.
async fn resolve_create_input(
    state: &AppState,
    input: CreateWhiteboardRequest,
) -> AppResult<CreateWhiteboard> {
    let user_id = input.user_id.unwrap_or_default();
    whiteboard::validate_user_id(&user_id)?;
    let mut template = whiteboard::resolve_template_kind(input.template.as_deref())?;
    let mut title = input.title;
    let mut description = input.description;
    let mut content = input.content;

    if let Some(ref prompt) = input.prompt {
        let prompt = whiteboard::validate_prompt(prompt)?;
        let (intent, generated) =
            generator::classify_and_generate(state.completion.as_ref(), prompt).await;

        template = generated.kind;
        title.get_or_insert(intent.title);
        description.get_or_insert(intent.description);
        content = Some(
            serde_json::to_value(&generated)
                .map_err(|e| AppError::InternalError(format!("Template serialization: {e}")))?,
        );
    }

    let title = title.unwrap_or_default();
    let description = description.unwrap_or_default();
    whiteboard::validate_title(&title)?;
    whiteboard::validate_description(&description)?;

    Ok(CreateWhiteboard {
        title,
        description,
        template,
        user_id,
        content,
        is_public: input.is_public,
    })
}

// ---------------------------------------------------------------------------
// Endpoints
// ---------------------------------------------------------------------------

/// GET /api/v1/whiteboards
///
/// List all whiteboards, or those visible to `?user_id=`.
pub async fn list_whiteboards(
    State(state): State<AppState>,
    Query(params): Query<ListWhiteboardsQuery>,
) -> AppResult<impl IntoResponse> {
    let whiteboards = state.store.list(params.user_id.as_deref()).await?;

    Ok(Json(DataResponse { data: whiteboards }))
}

/// GET /api/v1/whiteboards/:id
///
/// Retrieve a single whiteboard by ID.
pub async fn get_whiteboard(
    State(state): State<AppState>,
    Path(whiteboard_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let whiteboard = state
        .store
        .find_by_id(whiteboard_id)
        .await?
        .ok_or_else(|| not_found(whiteboard_id))?;

    Ok(Json(DataResponse { data: whiteboard }))
}

/// POST /api/v1/whiteboards
///
/// Create a whiteboard, optionally generating its content from a prompt.
pub async fn create_whiteboard(
    State(state): State<AppState>,
    payload: Result<Json<CreateWhiteboardRequest>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(input) = payload?;
    let generated = input.prompt.is_some();
    let dto = resolve_create_input(&state, input).await?;

    let whiteboard = state.store.create(&dto).await?;

    tracing::info!(
        whiteboard_id = whiteboard.id,
        user_id = %whiteboard.user_id,
        template = %whiteboard.template,
        generated,
        "Whiteboard created",
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: whiteboard })))
}

/// PUT /api/v1/whiteboards/:id
///
/// Partially update a whiteboard.
pub async fn update_whiteboard(
    State(state): State<AppState>,
    Path(whiteboard_id): Path<DbId>,
    payload: Result<Json<UpdateWhiteboard>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(input) = payload?;
    validate_update_input(&input)?;

    let whiteboard = state
        .store
        .update(whiteboard_id, &input)
        .await?
        .ok_or_else(|| not_found(whiteboard_id))?;

    tracing::info!(whiteboard_id, "Whiteboard updated");

    Ok(Json(DataResponse { data: whiteboard }))
}
