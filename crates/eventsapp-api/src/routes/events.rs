//! Routes for the event collection.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use eventsapp_core::model::{Event, EventDraft};
use tracing::instrument;

use crate::error::ApiError;
use crate::state::AppState;

/// GET /
#[instrument(skip(state))]
async fn list_events(State(state): State<AppState>) -> Result<Json<Vec<Event>>, ApiError> {
    Ok(Json(state.events.list_all().await?))
}

/// GET /{id}
#[instrument(skip(state))]
async fn get_event(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Event>, ApiError> {
    Ok(Json(state.events.get(id).await?))
}

/// POST /
#[instrument(skip(state, draft), fields(title = ?draft.title))]
async fn create_event(
    State(state): State<AppState>,
    Json(draft): Json<EventDraft>,
) -> Result<Json<Event>, ApiError> {
    Ok(Json(state.events.create(draft).await?))
}

/// PUT /{id}
#[instrument(skip(state, draft))]
async fn update_event(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(draft): Json<EventDraft>,
) -> Result<Json<Event>, ApiError> {
    Ok(Json(state.events.update(id, draft).await?))
}

/// DELETE /{id}
#[instrument(skip(state))]
async fn delete_event(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    state.events.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Returns the router for the event collection.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_events).post(create_event))
        .route(
            "/{id}",
            get(get_event).put(update_event).delete(delete_event),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use eventsapp_test_support::{
        FailingCategoryRepository, FailingEventRepository, InMemoryStore,
    };
    use serde_json::Value;
    use tower::ServiceExt;

    fn test_app_state() -> AppState {
        let store = Arc::new(InMemoryStore::new());
        AppState::new(store.clone(), store)
    }

    fn post_event(body: &Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/")
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_vec(body).unwrap()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_create_event_with_new_category_returns_200() {
        // Arrange
        let app = router().with_state(test_app_state());
        let body = serde_json::json!({
            "title": "New Integration Event",
            "type": "movie",
            "description": "Created through the router",
            "date": "2024-12-26",
            "category": { "name": "New Category for Event" }
        });

        // Act
        let response = app.oneshot(post_event(&body)).await.unwrap();

        // Assert
        assert_eq!(response.status(), StatusCode::OK);
        let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: Value = serde_json::from_slice(&body_bytes).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["type"], "movie");
        assert_eq!(json["category"]["id"], 1);
        assert_eq!(json["category"]["name"], "New Category for Event");
    }

    #[tokio::test]
    async fn test_create_event_with_unknown_category_returns_404() {
        // Arrange
        let app = router().with_state(test_app_state());
        let body = serde_json::json!({ "title": "Orphan", "category": { "id": 12 } });

        // Act
        let response = app.oneshot(post_event(&body)).await.unwrap();

        // Assert
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: Value = serde_json::from_slice(&body_bytes).unwrap();
        assert_eq!(json["message"], "category not found with id: 12");
    }

    #[tokio::test]
    async fn test_update_missing_event_returns_404() {
        // Arrange
        let app = router().with_state(test_app_state());
        let request = Request::builder()
            .method("PUT")
            .uri("/41")
            .header("content-type", "application/json")
            .body(Body::from(r#"{"title":"Nope"}"#))
            .unwrap();

        // Act
        let response = app.oneshot(request).await.unwrap();

        // Assert
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_create_returns_500_when_repository_fails() {
        // Arrange
        let state = AppState::new(
            Arc::new(FailingCategoryRepository),
            Arc::new(FailingEventRepository),
        );
        let app = router().with_state(state);
        let body = serde_json::json!({ "title": "Doomed" });

        // Act
        let response = app.oneshot(post_event(&body)).await.unwrap();

        // Assert
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn test_create_without_content_type_returns_415() {
        // Arrange
        let app = router().with_state(test_app_state());
        let request = Request::builder()
            .method("POST")
            .uri("/")
            .body(Body::from(r#"{"title":"x"}"#))
            .unwrap();

        // Act
        let response = app.oneshot(request).await.unwrap();

        // Assert
        assert_eq!(response.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
    }
}
