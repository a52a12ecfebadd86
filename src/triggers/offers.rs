use serde_json::json;
use uuid::Uuid;

use crate::models::course::Offer;
use crate::models::notification::{kinds, RelatedRef};
use crate::triggers::NotificationTriggers;

impl NotificationTriggers {
    /// Fired before an offer and its enrollments are removed. The affected
    /// students must be enumerated now; once the delete goes through, the
    /// join is gone. No related ref is stored for the same reason.
    pub fn offer_deleting(&self, offer: &Offer) {
        let enrollments = match self.db.active_enrollments_for_offer(&offer.id) {
            Ok(enrollments) => enrollments,
            Err(err) => {
                log::warn!("could not enumerate enrollments for offer {}: {:#}", offer.id, err);
                return;
            }
        };

        let payload = json!({
            "offer_title": offer.title,
            "course_name": self.course_name(&offer.course_id),
            "teacher_name": self.profile_name(&offer.teacher_id),
        });

        let mut notified: Vec<Uuid> = Vec::new();
        for enrollment in enrollments {
            if notified.contains(&enrollment.student_id) {
                continue;
            }
            notified.push(enrollment.student_id);
            self.dispatch(
                enrollment.student_id,
                kinds::OFFER_DELETED,
                payload.clone(),
                None,
            );
        }
    }

    /// Fired when a teacher proposes their offer directly to a student.
    pub fn offer_proposed(&self, offer: &Offer, student_id: Uuid) {
        if student_id == offer.teacher_id {
            return;
        }

        let payload = json!({
            "teacher_name": self.profile_name(&offer.teacher_id),
            "course_name": self.course_name(&offer.course_id),
            "offer_title": offer.title,
        });
        self.dispatch(
            student_id,
            kinds::OFFER_PROPOSED,
            payload,
            Some(RelatedRef::offer(offer.id)),
        );
    }
}
