use serde_json::json;

use crate::models::notification::{kinds, RelatedRef};
use crate::models::rating::Rating;
use crate::triggers::NotificationTriggers;

impl NotificationTriggers {
    /// Fired after a rating was persisted. Notifies the rated party; rating
    /// yourself stays silent.
    pub fn rating_created(&self, rating: &Rating) {
        if rating.rated_id == rating.rater_id {
            return;
        }

        let course_name = self
            .db
            .get_enrollment(&rating.enrollment_id)
            .ok()
            .flatten()
            .and_then(|e| self.db.get_schedule(&e.schedule_id).ok().flatten())
            .and_then(|s| self.db.get_offer(&s.offer_id).ok().flatten())
            .map(|o| self.course_name(&o.course_id))
            .unwrap_or_default();

        let payload = json!({
            "student_name": self.profile_name(&rating.rater_id),
            "course_name": course_name,
            "stars": rating.stars,
            "comment": rating.comment.clone().unwrap_or_default(),
        });
        self.dispatch(
            rating.rated_id,
            kinds::RATING_RECEIVED,
            payload,
            Some(RelatedRef::rating(rating.id)),
        );
    }
}
