use serde_json::json;

use crate::models::enrollment::{Enrollment, EnrollmentStatus};
use crate::models::notification::{kinds, RelatedRef};
use crate::triggers::NotificationTriggers;

impl NotificationTriggers {
    /// Fired by the reminder task for an enrollment whose class runs the
    /// next day. Both sides get a reminder, each worded for their role.
    pub fn class_reminder(&self, enrollment: &Enrollment) {
        if enrollment.status != EnrollmentStatus::Accepted {
            return;
        }
        let Some(schedule) = self.db.get_schedule(&enrollment.schedule_id).ok().flatten() else {
            return;
        };
        let Some(offer) = self.db.get_offer(&schedule.offer_id).ok().flatten() else {
            return;
        };

        let course_name = self.course_name(&offer.course_id);
        let start_time = schedule.start_time.format("%H:%M").to_string();
        let related = Some(RelatedRef::enrollment(enrollment.id));

        let student_payload = json!({
            "is_teacher": false,
            "course_name": course_name,
            "teacher_name": self.profile_name(&offer.teacher_id),
            "start_time": start_time,
        });
        self.dispatch(
            enrollment.student_id,
            kinds::REMINDER_CLASS_SOON,
            student_payload,
            related,
        );

        let teacher_payload = json!({
            "is_teacher": true,
            "course_name": course_name,
            "student_name": self.profile_name(&enrollment.student_id),
            "start_time": start_time,
        });
        self.dispatch(
            offer.teacher_id,
            kinds::REMINDER_CLASS_SOON,
            teacher_payload,
            related,
        );
    }
}
