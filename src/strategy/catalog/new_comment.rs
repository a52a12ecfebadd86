use crate::models::notification::{Action, ActionStyle, Notification, RelatedEntity};
use crate::strategy::{preview, text, urls, NotificationStrategy, Payload};

/// Notifies the owner of a publication (offer or request) about a comment.
pub struct NewCommentStrategy;

impl NotificationStrategy for NewCommentStrategy {
    fn get_icon(&self) -> &'static str {
        "💬"
    }

    fn get_title(&self, payload: &Payload) -> String {
        format!(
            "New comment from {} on '{}'",
            text(payload, "commenter_name"),
            text(payload, "publication_title"),
        )
    }

    fn get_message(&self, payload: &Payload) -> String {
        format!(
            "{} commented on your {} '{}': '{}'",
            text(payload, "commenter_name"),
            text(payload, "publication_kind"),
            text(payload, "publication_title"),
            preview(text(payload, "body")),
        )
    }

    fn get_actions(
        &self,
        _notification: &Notification,
        related: Option<&RelatedEntity>,
    ) -> Vec<Action> {
        let Some(RelatedEntity::Comment(comment)) = related else {
            return Vec::new();
        };

        if let Some(offer_id) = comment.offer_id {
            return vec![Action::get("Open offer", urls::offer(offer_id), ActionStyle::Primary)];
        }
        if let Some(request_id) = comment.request_id {
            return vec![Action::get(
                "Open request",
                urls::class_request(request_id),
                ActionStyle::Primary,
            )];
        }
        Vec::new()
    }
}
