//! Chat heuristic: a free-text message containing "add" creates a
//! placeholder event.

use eventsapp_core::error::DomainError;
use eventsapp_core::model::{Event, EventDraft};
use tracing::{debug, instrument};

use super::service::EventService;

/// Status line returned by the chat status endpoint.
pub const CHAT_STATUS: &str = "Chat service is running";

const PLACEHOLDER_KIND: &str = "custom";
const PLACEHOLDER_TITLE: &str = "User Requested Event";
const PLACEHOLDER_DATE: &str = "TBD";

fn asks_to_add(message: &str) -> bool {
    message.to_lowercase().contains("add")
}

impl EventService {
    /// Creates a placeholder event described by `message` when the message
    /// contains "add" in any letter case. Other messages are ignored.
    ///
    /// # Errors
    ///
    /// Propagates store failures from creating the placeholder.
    #[instrument(name = "events.handle_chat", skip(self, message), fields(len = message.len()))]
    pub async fn handle_chat(&self, message: &str) -> Result<Option<Event>, DomainError> {
        if !asks_to_add(message) {
            debug!("chat message ignored");
            return Ok(None);
        }
        let draft = EventDraft {
            kind: Some(PLACEHOLDER_KIND.to_owned()),
            title: Some(PLACEHOLDER_TITLE.to_owned()),
            description: Some(message.to_owned()),
            date: Some(PLACEHOLDER_DATE.to_owned()),
            ..EventDraft::default()
        };
        self.create(draft).await.map(Some)
    }
}
