use crate::models::notification::{Action, ActionStyle, Notification, RelatedEntity};
use crate::strategy::{text, urls, NotificationStrategy, Payload};

/// Notifies the teacher when a student cancels their enrollment.
pub struct InscriptionCanceledStrategy;

impl NotificationStrategy for InscriptionCanceledStrategy {
    fn get_icon(&self) -> &'static str {
        "🚫"
    }

    fn get_title(&self, _payload: &Payload) -> String {
        "Enrollment canceled".to_string()
    }

    fn get_message(&self, payload: &Payload) -> String {
        format!(
            "The student {} has canceled their enrollment in your offer '{}' for {}. \
             Freed slot: {} {}.",
            text(payload, "student_name"),
            text(payload, "offer_title"),
            text(payload, "course_name"),
            text(payload, "weekday"),
            text(payload, "time_range"),
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
