//! Route modules, one per resource.

use axum::Router;

use crate::state::AppState;

pub mod categories;
pub mod chat;
pub mod events;
pub mod health;

/// The complete route tree: `/health` plus the resource collections under
/// `/api`.
pub fn router() -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .nest("/api/categories", categories::router())
        .nest("/api/events", events::router())
        .nest("/api/chat", chat::router())
}
