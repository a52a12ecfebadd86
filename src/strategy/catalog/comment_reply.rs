use crate::models::notification::{Action, Notification, RelatedEntity};
use crate::strategy::{preview, text, NotificationStrategy, Payload};

/// Notifies a commenter when someone replies to their comment.
pub struct CommentReplyStrategy;

impl NotificationStrategy for CommentReplyStrategy {
    fn get_icon(&self) -> &'static str {
        "↩️"
    }

    fn get_title(&self, _payload: &Payload) -> String {
        String::new()
    }

    fn get_message(&self, payload: &Payload) -> String {
        format!(
            "{} replied to your comment on the {} '{}': '{}'",
            text(payload, "replier_name"),
            text(payload, "publication_kind"),
            text(payload, "publication_title"),
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
