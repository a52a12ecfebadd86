use crate::models::notification::{Action, Notification, RelatedEntity};
use crate::strategy::{flag, text, NotificationStrategy, Payload};

/// Reminds both parties about a class happening the next day. The payload
/// flag `is_teacher` selects which side of the message to render.
pub struct ReminderClassSoonStrategy;

impl NotificationStrategy for ReminderClassSoonStrategy {
    fn get_icon(&self) -> &'static str {
        "⏰"
    }

    fn get_title(&self, _payload: &Payload) -> String {
        String::new()
    }

    fn get_message(&self, payload: &Payload) -> String {
        let course = text(payload, "course_name");
        let start_time = text(payload, "start_time");

        if flag(payload, "is_teacher") {
            format!(
                "Reminder: tomorrow you teach a {} class with {} at {}.",
                course,
                text(payload, "student_name"),
                start_time,
            )
        } else {
            format!(
                "Reminder: tomorrow you have a {} class with the teacher {} at {}.",
                course,
                text(payload, "teacher_name"),
                start_time,
            )
        }
    }

    fn get_actions(
        &self,
        _notification: &Notification,
        _related: Option<&RelatedEntity>,
    ) -> Vec<Action> {
        Vec::new()
    }
}
