//! Chat endpoint: a raw text message that may add a placeholder event.

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::get;
use axum::Router;
use eventsapp_events::CHAT_STATUS;
use tracing::{info, instrument};

use crate::error::ApiError;
use crate::state::AppState;

/// POST /
#[instrument(skip(state, message))]
async fn handle_chat(
    State(state): State<AppState>,
    message: String,
) -> Result<StatusCode, ApiError> {
    if let Some(event) = state.events.handle_chat(&message).await? {
        info!(event_id = event.id, "chat message created event");
    }
    Ok(StatusCode::OK)
}

/// GET /
async fn chat_status() -> &'static str {
    CHAT_STATUS
}

/// Returns the router for the chat endpoint.
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(chat_status).post(handle_chat))
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::Request;
    use eventsapp_test_support::InMemoryStore;
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_chat_status_returns_text() {
        // Arrange
        let store = Arc::new(InMemoryStore::new());
        let app = router().with_state(AppState::new(store.clone(), store));
        let request = Request::builder()
            .method("GET")
            .uri("/")
            .body(Body::empty())
            .unwrap();

        // Act
        let response = app.oneshot(request).await.unwrap();

        // Assert
        assert_eq!(response.status(), StatusCode::OK);
        let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&body_bytes[..], CHAT_STATUS.as_bytes());
    }

    #[tokio::test]
    async fn test_chat_add_message_creates_event() {
        // Arrange
        let store = Arc::new(InMemoryStore::new());
        let app = router().with_state(AppState::new(store.clone(), store.clone()));
        let request = Request::builder()
            .method("POST")
            .uri("/")
            .header("content-type", "text/plain")
            .body(Body::from("Please ADD a board game night"))
            .unwrap();

        // Act
        let response = app.oneshot(request).await.unwrap();

        // Assert
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(store.event_count(), 1);
    }
}
