//! Routes for the category collection.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use eventsapp_core::model::{Category, CategoryDraft, Event};
use tracing::instrument;

use crate::error::ApiError;
use crate::state::AppState;

/// GET /
#[instrument(skip(state))]
async fn list_categories(State(state): State<AppState>) -> Result<Json<Vec<Category>>, ApiError> {
    Ok(Json(state.categories.list_all().await?))
}

/// GET /{id}
#[instrument(skip(state))]
async fn get_category(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Category>, ApiError> {
    Ok(Json(state.categories.get(id).await?))
}

/// GET /name/{name}
#[instrument(skip(state))]
async fn get_category_by_name(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<Category>, ApiError> {
    Ok(Json(state.categories.get_by_name(&name).await?))
}

/// GET /{id}/events
#[instrument(skip(state))]
async fn list_category_events(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Vec<Event>>, ApiError> {
    Ok(Json(state.events.list_by_category(id).await?))
}

/// POST /
#[instrument(skip(state, draft))]
async fn create_category(
    State(state): State<AppState>,
    Json(draft): Json<CategoryDraft>,
) -> Result<Json<Category>, ApiError> {
    Ok(Json(state.categories.create(draft).await?))
}

/// PUT /{id}
#[instrument(skip(state, draft))]
async fn update_category(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(draft): Json<CategoryDraft>,
) -> Result<Json<Category>, ApiError> {
    Ok(Json(state.categories.update(id, draft).await?))
}

/// DELETE /{id}
#[instrument(skip(state))]
async fn delete_category(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    state.categories.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Returns the router for the category collection.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_categories).post(create_category))
        .route(
            "/{id}",
            get(get_category)
                .put(update_category)
                .delete(delete_category),
        )
        .route("/{id}/events", get(list_category_events))
        .route("/name/{name}", get(get_category_by_name))
}
