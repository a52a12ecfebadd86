use crate::models::notification::{Action, ActionStyle, Notification, RelatedEntity};
use crate::strategy::{text, urls, NotificationStrategy, Payload};

/// Notifies the student that their enrollment was accepted.
pub struct InscriptionAcceptedStrategy;

impl NotificationStrategy for InscriptionAcceptedStrategy {
    fn get_icon(&self) -> &'static str {
        "✅"
    }

    fn get_title(&self, _payload: &Payload) -> String {
        "Enrollment accepted".to_string()
    }

    fn get_message(&self, payload: &Payload) -> String {
        format!(
            "Your enrollment in '{}' has been accepted. Welcome!",
            text(payload, "course_name")
        )
    }

    fn get_actions(
        &self,
        _notification: &Notification,
        related: Option<&RelatedEntity>,
    ) -> Vec<Action> {
        match related {
            Some(RelatedEntity::Enrollment { offer, .. }) => vec![Action::get(
                "View offer",
                urls::offer(offer.id),
                ActionStyle::Primary,
            )],
            _ => Vec::new(),
        }
    }
}
