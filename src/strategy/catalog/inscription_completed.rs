use crate::models::notification::{Action, ActionStyle, Notification, RelatedEntity};
use crate::strategy::{text, urls, NotificationStrategy, Payload};

/// Invites the student to rate the teacher once a class is completed.
pub struct InscriptionCompletedStrategy;

impl NotificationStrategy for InscriptionCompletedStrategy {
    fn get_icon(&self) -> &'static str {
        "🎓"
    }

    fn get_title(&self, _payload: &Payload) -> String {
        String::new()
    }

    fn get_message(&self, payload: &Payload) -> String {
        format!(
            "You have completed your {} class with {}! Help us improve by rating your experience.",
            text(payload, "course_name"),
            text(payload, "teacher_name"),
        )
    }

    fn get_actions(
        &self,
        _notification: &Notification,
        related: Option<&RelatedEntity>,
    ) -> Vec<Action> {
        match related {
            Some(RelatedEntity::Enrollment { offer, .. }) => vec![Action::get(
                "Rate teacher",
                urls::profile(offer.teacher_id),
                ActionStyle::Primary,
            )],
            _ => Vec::new(),
        }
    }
}
