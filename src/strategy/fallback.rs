use crate::models::notification::{Action, Notification, RelatedEntity};
use crate::strategy::{NotificationStrategy, Payload};

/// Strategy used for any kind the registry cannot resolve.
///
/// Kinds are persisted strings and can outlive their strategy (renamed or
/// removed kinds), so the fallback guarantees the feature degrades to a
/// generic bell instead of erroring.
pub struct FallbackStrategy;

impl NotificationStrategy for FallbackStrategy {
    fn get_icon(&self) -> &'static str {
        "🔔"
    }

    fn get_title(&self, _payload: &Payload) -> String {
        "Notification".to_string()
    }

    fn get_message(&self, _payload: &Payload) -> String {
        "You have a new notification.".to_string()
    }

    fn get_actions(
        &self,
        _notification: &Notification,
        _related: Option<&RelatedEntity>,
    ) -> Vec<Action> {
        Vec::new()
    }
}
