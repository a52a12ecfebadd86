use crate::models::notification::{Action, ActionStyle, Notification, RelatedEntity};
use crate::strategy::{text, urls, NotificationStrategy, Payload};

/// Notifies a student when a teacher proposes a class offer to them.
pub struct OfferProposedStrategy;

impl NotificationStrategy for OfferProposedStrategy {
    fn get_icon(&self) -> &'static str {
        "📬"
    }

    fn get_title(&self, _payload: &Payload) -> String {
        "New class offer proposal".to_string()
    }

    fn get_message(&self, payload: &Payload) -> String {
        format!(
            "The teacher {} has proposed a new class offer for {} to you: '{}'.",
            text(payload, "teacher_name"),
            text(payload, "course_name"),
            text(payload, "offer_title"),
        )
    }

    fn get_actions(
        &self,
        _notification: &Notification,
        related: Option<&RelatedEntity>,
    ) -> Vec<Action> {
        match related {
            Some(RelatedEntity::Offer(offer)) => vec![
                Action::get("View offer", urls::offer(offer.id), ActionStyle::Primary),
                Action::get("View teacher", urls::profile(offer.teacher_id), ActionStyle::Info),
            ],
            _ => Vec::new(),
        }
    }
}
