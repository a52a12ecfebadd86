use serde_json::json;

use crate::models::course::{Course, Offer, Schedule};
use crate::models::enrollment::{Enrollment, EnrollmentStatus};
use crate::models::notification::{kinds, RelatedRef};
use crate::triggers::NotificationTriggers;

/// Everything the enrollment payloads need, resolved in one pass.
struct EnrollmentContext {
    schedule: Schedule,
    offer: Offer,
    course: Option<Course>,
    student_name: String,
    teacher_name: String,
}

impl EnrollmentContext {
    fn course_name(&self) -> &str {
        self.course.as_ref().map(|c| c.name.as_str()).unwrap_or("")
    }
}

impl NotificationTriggers {
    /// Fired after a new enrollment row was persisted. Notifies the teacher
    /// who owns the offer.
    pub fn enrollment_created(&self, enrollment: &Enrollment) {
        if enrollment.status != EnrollmentStatus::Pending {
            return;
        }
        let Some(ctx) = self.enrollment_context(enrollment) else {
            return;
        };

        let payload = json!({
            "student_name": ctx.student_name,
            "offer_title": ctx.offer.title,
            "course_name": ctx.course_name(),
            "weekday": ctx.schedule.weekday.to_string(),
            "time_range": ctx.schedule.time_range(),
        });
        self.dispatch(
            ctx.offer.teacher_id,
            kinds::INSCRIPTION_CREATED,
            payload,
            Some(RelatedRef::enrollment(enrollment.id)),
        );
    }

    /// Fired after a status transition was persisted. `old` is the status
    /// before the transition; an unchanged status never notifies.
    pub fn enrollment_status_changed(&self, old: EnrollmentStatus, enrollment: &Enrollment) {
        if old == enrollment.status {
            return;
        }
        let Some(ctx) = self.enrollment_context(enrollment) else {
            return;
        };
        let related = Some(RelatedRef::enrollment(enrollment.id));

        match enrollment.status {
            EnrollmentStatus::Accepted => {
                let payload = json!({ "course_name": ctx.course_name() });
                self.dispatch(
                    enrollment.student_id,
                    kinds::INSCRIPTION_ACCEPTED,
                    payload,
                    related,
                );
            }
            EnrollmentStatus::Rejected => {
                let payload = json!({
                    "offer_title": ctx.offer.title,
                    "course_name": ctx.course_name(),
                    "teacher_name": ctx.teacher_name,
                });
                self.dispatch(
                    enrollment.student_id,
                    kinds::INSCRIPTION_REJECTED,
                    payload,
                    related,
                );
            }
            EnrollmentStatus::Canceled => {
                let payload = json!({
                    "student_name": ctx.student_name,
                    "offer_title": ctx.offer.title,
                    "course_name": ctx.course_name(),
                    "weekday": ctx.schedule.weekday.to_string(),
                    "time_range": ctx.schedule.time_range(),
                });
                self.dispatch(
                    ctx.offer.teacher_id,
                    kinds::INSCRIPTION_CANCELED,
                    payload,
                    related,
                );
            }
            EnrollmentStatus::Completed => {
                let payload = json!({
                    "course_name": ctx.course_name(),
                    "teacher_name": ctx.teacher_name,
                });
                self.dispatch(
                    enrollment.student_id,
                    kinds::INSCRIPTION_COMPLETED,
                    payload,
                    related,
                );
            }
            EnrollmentStatus::Pending => {}
        }
    }

    fn enrollment_context(&self, enrollment: &Enrollment) -> Option<EnrollmentContext> {
        let schedule = self.db.get_schedule(&enrollment.schedule_id).ok().flatten()?;
        let offer = self.db.get_offer(&schedule.offer_id).ok().flatten()?;
        let course = self.db.get_course(&offer.course_id).ok().flatten();
        let student_name = self.profile_name(&enrollment.student_id);
        let teacher_name = self.profile_name(&offer.teacher_id);
        Some(EnrollmentContext {
            schedule,
            offer,
            course,
            student_name,
            teacher_name,
        })
    }
}
