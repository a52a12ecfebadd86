use crate::models::notification::{Action, Notification, RelatedEntity};
use crate::strategy::{preview, text, NotificationStrategy, Payload};

/// Notifies the owner of a class request when someone offers to teach it.
pub struct OfferOnRequestStrategy;

impl NotificationStrategy for OfferOnRequestStrategy {
    fn get_icon(&self) -> &'static str {
        "🎯"
    }

    fn get_title(&self, _payload: &Payload) -> String {
        String::new()
    }

    fn get_message(&self, payload: &Payload) -> String {
        format!(
            "{} is interested in teaching {}! They commented on your request '{}': '{}'",
            text(payload, "commenter_name"),
            text(payload, "course_name"),
            text(payload, "request_title"),
            preview(text(payload, "body")),
        )
    }

    fn get_actions(
        &self,
        _notification: &Notification,
        _related: Option<&RelatedEntity>,
    ) -> Vec<Action> {
        Vec::new()
    }
}
