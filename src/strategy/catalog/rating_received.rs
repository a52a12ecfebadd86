use crate::models::notification::{Action, Notification, RelatedEntity};
use crate::strategy::{number, preview, text, NotificationStrategy, Payload};

/// Notifies a teacher when a student rates one of their classes.
pub struct RatingReceivedStrategy;

impl NotificationStrategy for RatingReceivedStrategy {
    fn get_icon(&self) -> &'static str {
        "⭐"
    }

    fn get_title(&self, _payload: &Payload) -> String {
        String::new()
    }

    fn get_message(&self, payload: &Payload) -> String {
        let stars = number(payload, "stars").min(5) as usize;
        let mut message = format!(
            "{} rated you {} ({}/5) for your {} class",
            text(payload, "student_name"),
            "⭐".repeat(stars),
            stars,
            text(payload, "course_name"),
        );

        let comment = text(payload, "comment");
        if comment.is_empty() {
            message.push('.');
        } else {
            message.push_str(&format!(": '{}'", preview(comment)));
        }
        message
    }

    fn get_actions(
        &self,
        _notification: &Notification,
        _related: Option<&RelatedEntity>,
    ) -> Vec<Action> {
        Vec::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_message_repeats_stars() {
        let strategy = RatingReceivedStrategy;
        let message = strategy.get_message(&json!({
            "student_name": "Ana",
            "course_name": "Algebra",
            "stars": 4,
        }));
        assert!(message.contains("⭐⭐⭐⭐ (4/5)"));
        assert!(message.ends_with('.'));
    }

    #[test]
    fn test_message_appends_comment_preview() {
        let strategy = RatingReceivedStrategy;
        let message = strategy.get_message(&json!({
            "student_name": "Ana",
            "course_name": "Algebra",
            "stars": 5,
            "comment": "Great teacher!",
        }));
        assert!(message.ends_with(": 'Great teacher!'"));
    }

    #[test]
    fn test_stars_are_clamped() {
        let strategy = RatingReceivedStrategy;
        let message = strategy.get_message(&json!({ "stars": 99 }));
        assert!(message.contains("(5/5)"));
    }
}
