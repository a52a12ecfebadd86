use crate::models::notification::{Action, ActionStyle, Notification, RelatedEntity};
use crate::strategy::{text, urls, NotificationStrategy, Payload};

/// Notifies the teacher when a student enrolls in one of their offers.
pub struct InscriptionCreatedStrategy;

impl NotificationStrategy for InscriptionCreatedStrategy {
    fn get_icon(&self) -> &'static str {
        "📝"
    }

    fn get_title(&self, _payload: &Payload) -> String {
        "New enrollment".to_string()
    }

    fn get_message(&self, payload: &Payload) -> String {
        format!(
            "The student {} has enrolled in your offer '{}' for {}. Schedule: {} {}.",
            text(payload, "student_name"),
            text(payload, "offer_title"),
            text(payload, "course_name"),
            text(payload, "weekday"),
            text(payload, "time_range"),
        )
    }

    fn get_actions(
        &self,
        notification: &Notification,
        related: Option<&RelatedEntity>,
    ) -> Vec<Action> {
        let Some(RelatedEntity::Enrollment { enrollment, offer, .. }) = related else {
            return Vec::new();
        };

        let navigation = [
            Action::get("View offer", urls::offer(offer.id), ActionStyle::Primary),
            Action::get("View student", urls::profile(enrollment.student_id), ActionStyle::Info),
        ];

        // Once the enrollment was processed, only navigation remains.
        if notification.action_taken.is_some() {
            return navigation.to_vec();
        }

        let mut actions = vec![
            Action::post("Accept", urls::enrollment_accept(enrollment.id), ActionStyle::Success),
            Action::post("Reject", urls::enrollment_reject(enrollment.id), ActionStyle::Danger),
        ];
        actions.extend(navigation);
        actions
    }
}
