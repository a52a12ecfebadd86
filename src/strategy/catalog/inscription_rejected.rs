use crate::models::notification::{Action, ActionStyle, Notification, RelatedEntity};
use crate::strategy::{text, urls, NotificationStrategy, Payload};

/// Notifies the student that their enrollment was rejected.
pub struct InscriptionRejectedStrategy;

impl NotificationStrategy for InscriptionRejectedStrategy {
    fn get_icon(&self) -> &'static str {
        "❌"
    }

    fn get_title(&self, _payload: &Payload) -> String {
        "Enrollment rejected".to_string()
    }

    fn get_message(&self, payload: &Payload) -> String {
        format!(
            "Your enrollment in the offer '{}' for {} with the teacher {} has been rejected.",
            text(payload, "offer_title"),
            text(payload, "course_name"),
            text(payload, "teacher_name"),
        )
    }

    fn get_actions(
        &self,
        _notification: &Notification,
        related: Option<&RelatedEntity>,
    ) -> Vec<Action> {
        if related.is_none() {
            return Vec::new();
        }
        vec![Action::get(
            "Browse other offers",
            urls::offers_browse(),
            ActionStyle::Primary,
        )]
    }
}
