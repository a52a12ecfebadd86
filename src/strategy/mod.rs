pub mod catalog;
pub mod fallback;
pub mod registry;

use crate::models::notification::{Action, Notification, RelatedEntity};

/// The event payload handed to a strategy at send time. Triggers flatten
/// whatever the strategy needs into a JSON map; it is not persisted as-is.
pub type Payload = serde_json::Value;

/// Per-kind notification formatter.
///
/// Implementations must be total: every method returns a best-effort value
/// for any payload or notification the system can produce. Missing payload
/// fields degrade to empty strings, a missing related object degrades to an
/// empty action list.
pub trait NotificationStrategy: Send + Sync {
    /// Short symbol representing the kind. Stateless.
    fn get_icon(&self) -> &'static str;

    /// Headline, possibly empty. Frozen into the record at creation time.
    fn get_title(&self, payload: &Payload) -> String;

    /// Human-readable body. Frozen into the record at creation time.
    fn get_message(&self, payload: &Payload) -> String;

    /// Follow-up actions computed from the persisted notification and its
    /// resolved related object, so they reflect current state rather than
    /// the state at send time.
    fn get_actions(
        &self,
        notification: &Notification,
        related: Option<&RelatedEntity>,
    ) -> Vec<Action>;
}

/// Reads a string field off the payload, empty when absent.
pub(crate) fn text<'a>(payload: &'a Payload, key: &str) -> &'a str {
    payload.get(key).and_then(|v| v.as_str()).unwrap_or("")
}

pub(crate) fn number(payload: &Payload, key: &str) -> u64 {
    payload.get(key).and_then(|v| v.as_u64()).unwrap_or(0)
}

pub(crate) fn flag(payload: &Payload, key: &str) -> bool {
    payload.get(key).and_then(|v| v.as_bool()).unwrap_or(false)
}

/// First 80 characters of a comment body, with an ellipsis when truncated.
pub(crate) fn preview(body: &str) -> String {
    const PREVIEW_CHARS: usize = 80;
    if body.chars().count() > PREVIEW_CHARS {
        let truncated: String = body.chars().take(PREVIEW_CHARS).collect();
        format!("{}...", truncated)
    } else {
        body.to_string()
    }
}

/// Application route templates used in notification actions.
pub(crate) mod urls {
    use uuid::Uuid;

    pub fn offer(id: Uuid) -> String {
        format!("/offers/{}", id)
    }

    pub fn offers_browse() -> String {
        "/offers".to_string()
    }

    pub fn class_request(id: Uuid) -> String {
        format!("/requests/{}", id)
    }

    pub fn profile(id: Uuid) -> String {
        format!("/profiles/{}", id)
    }

    pub fn enrollment_accept(id: Uuid) -> String {
        format!("/enrollments/{}/accept", id)
    }

    pub fn enrollment_reject(id: Uuid) -> String {
        format!("/enrollments/{}/reject", id)
    }
}
