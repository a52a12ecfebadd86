use uuid::Uuid;

use crate::models::course::{Offer, Schedule};
use crate::models::enrollment::{CreateEnrollmentRequest, Enrollment, EnrollmentStatus};
use crate::models::notification::{kinds, RelatedRef};
use crate::services::database::DatabaseService;
use crate::services::ServiceError;
use crate::triggers::NotificationTriggers;

/// Enrollment lifecycle: create, accept, reject, cancel, complete.
///
/// Every transition is persisted first, then the matching trigger fires.
/// Accepting and rejecting also stamp the originating `inscription_created`
/// notification so its mutating actions disappear from the teacher's inbox.
#[derive(Clone)]
pub struct EnrollmentService {
    db: DatabaseService,
    triggers: NotificationTriggers,
}

impl EnrollmentService {
    pub fn new(db: DatabaseService, triggers: NotificationTriggers) -> Self {
        Self { db, triggers }
    }

    pub fn create(&self, request: CreateEnrollmentRequest) -> Result<Enrollment, ServiceError> {
        let schedule = self
            .db
            .get_schedule(&request.schedule_id)?
            .ok_or(ServiceError::NotFound("Schedule"))?;
        self.db
            .get_profile(&request.student_id)?
            .ok_or(ServiceError::NotFound("Profile"))?;
        let offer = self
            .db
            .get_offer(&schedule.offer_id)?
            .ok_or(ServiceError::NotFound("Offer"))?;

        if offer.teacher_id == request.student_id {
            return Err(ServiceError::Forbidden(
                "Teachers cannot enroll in their own offers",
            ));
        }
        if schedule.open_slots == 0 {
            return Err(ServiceError::Invalid(
                "This schedule has no open slots left".to_string(),
            ));
        }
        if self
            .db
            .find_enrollment(&request.student_id, &request.schedule_id)?
            .is_some()
        {
            return Err(ServiceError::Invalid(
                "Student is already enrolled in this schedule".to_string(),
            ));
        }

        let enrollment = self
            .db
            .insert_enrollment(Enrollment::new(request.student_id, request.schedule_id))?;
        self.triggers.enrollment_created(&enrollment);
        Ok(enrollment)
    }

    pub fn get(&self, enrollment_id: &Uuid) -> Result<Enrollment, ServiceError> {
        self.db
            .get_enrollment(enrollment_id)?
            .ok_or(ServiceError::NotFound("Enrollment"))
    }

    /// Teacher-only. Consumes one open slot of the schedule.
    pub fn accept(
        &self,
        enrollment_id: &Uuid,
        acting_profile_id: &Uuid,
    ) -> Result<Enrollment, ServiceError> {
        let (mut enrollment, mut schedule, offer) = self.load_chain(enrollment_id)?;
        if offer.teacher_id != *acting_profile_id {
            return Err(ServiceError::Forbidden(
                "Only the offer's teacher can accept an enrollment",
            ));
        }
        if schedule.open_slots == 0 {
            return Err(ServiceError::Invalid(
                "This schedule has no open slots left".to_string(),
            ));
        }

        let old = enrollment.status;
        enrollment.accept().map_err(ServiceError::Invalid)?;
        self.db.update_enrollment(&enrollment)?;

        schedule.open_slots -= 1;
        self.db.update_schedule(&schedule)?;

        self.stamp_origin_notification(&enrollment, "Accepted ✅");
        self.triggers.schedule_slots_changed(&schedule);
        self.triggers.enrollment_status_changed(old, &enrollment);
        Ok(enrollment)
    }

    /// Teacher-only. Leaves the schedule's capacity untouched.
    pub fn reject(
        &self,
        enrollment_id: &Uuid,
        acting_profile_id: &Uuid,
    ) -> Result<Enrollment, ServiceError> {
        let (mut enrollment, _, offer) = self.load_chain(enrollment_id)?;
        if offer.teacher_id != *acting_profile_id {
            return Err(ServiceError::Forbidden(
                "Only the offer's teacher can reject an enrollment",
            ));
        }

        let old = enrollment.status;
        enrollment.reject().map_err(ServiceError::Invalid)?;
        self.db.update_enrollment(&enrollment)?;

        self.stamp_origin_notification(&enrollment, "Rejected ❌");
        self.triggers.enrollment_status_changed(old, &enrollment);
        Ok(enrollment)
    }

    /// Student-only. Returns the slot when the enrollment was accepted.
    pub fn cancel(
        &self,
        enrollment_id: &Uuid,
        acting_profile_id: &Uuid,
    ) -> Result<Enrollment, ServiceError> {
        let (mut enrollment, mut schedule, _) = self.load_chain(enrollment_id)?;
        if enrollment.student_id != *acting_profile_id {
            return Err(ServiceError::Forbidden(
                "Only the enrolled student can cancel an enrollment",
            ));
        }

        let old = enrollment.status;
        enrollment.cancel().map_err(ServiceError::Invalid)?;
        self.db.update_enrollment(&enrollment)?;

        if old == EnrollmentStatus::Accepted {
            schedule.open_slots += 1;
            self.db.update_schedule(&schedule)?;
        }

        self.stamp_origin_notification(&enrollment, "Canceled 🚫");
        self.triggers.enrollment_status_changed(old, &enrollment);
        Ok(enrollment)
    }

    /// Teacher-only. Marks an accepted enrollment as completed and invites
    /// the student to rate the class.
    pub fn complete(
        &self,
        enrollment_id: &Uuid,
        acting_profile_id: &Uuid,
    ) -> Result<Enrollment, ServiceError> {
        let (mut enrollment, _, offer) = self.load_chain(enrollment_id)?;
        if offer.teacher_id != *acting_profile_id {
            return Err(ServiceError::Forbidden(
                "Only the offer's teacher can complete an enrollment",
            ));
        }

        let old = enrollment.status;
        enrollment.complete().map_err(ServiceError::Invalid)?;
        self.db.update_enrollment(&enrollment)?;

        self.triggers.enrollment_status_changed(old, &enrollment);
        Ok(enrollment)
    }

    fn load_chain(
        &self,
        enrollment_id: &Uuid,
    ) -> Result<(Enrollment, Schedule, Offer), ServiceError> {
        let enrollment = self
            .db
            .get_enrollment(enrollment_id)?
            .ok_or(ServiceError::NotFound("Enrollment"))?;
        let schedule = self
            .db
            .get_schedule(&enrollment.schedule_id)?
            .ok_or(ServiceError::NotFound("Schedule"))?;
        let offer = self
            .db
            .get_offer(&schedule.offer_id)?
            .ok_or(ServiceError::NotFound("Offer"))?;
        Ok((enrollment, schedule, offer))
    }

    /// Best-effort: stamps the `inscription_created` notification that
    /// announced this enrollment, so the inbox stops offering Accept/Reject.
    fn stamp_origin_notification(&self, enrollment: &Enrollment, action: &str) {
        let found = self
            .db
            .find_notification_by_related(RelatedRef::enrollment(enrollment.id), kinds::INSCRIPTION_CREATED);
        match found {
            Ok(Some(mut notification)) => {
                notification.record_action(action);
                if let Err(err) = self.db.update_notification(&notification) {
                    log::warn!(
                        "could not stamp notification for enrollment {}: {:#}",
                        enrollment.id,
                        err
                    );
                }
            }
            Ok(None) => {}
            Err(err) => log::warn!(
                "could not look up notification for enrollment {}: {:#}",
                enrollment.id,
                err
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support;

    #[test]
    fn test_create_notifies_the_teacher_once() {
        let ctx = test_support::setup();
        let enrollment = ctx.enroll();

        assert_eq!(enrollment.status, EnrollmentStatus::Pending);

        let teacher_inbox = ctx.notifications_for(&ctx.teacher.id);
        assert_eq!(teacher_inbox.len(), 1);
        assert_eq!(teacher_inbox[0].kind, kinds::INSCRIPTION_CREATED);
        assert!(teacher_inbox[0].message.contains("Ana Pérez"));
        assert!(ctx.notifications_for(&ctx.student.id).is_empty());
    }

    #[test]
    fn test_create_rejects_duplicates_and_self_enrollment() {
        let ctx = test_support::setup();
        ctx.enroll();

        let duplicate = ctx.enrollments.create(CreateEnrollmentRequest {
            student_id: ctx.student.id,
            schedule_id: ctx.schedule.id,
        });
        assert!(matches!(duplicate, Err(ServiceError::Invalid(_))));

        let own_offer = ctx.enrollments.create(CreateEnrollmentRequest {
            student_id: ctx.teacher.id,
            schedule_id: ctx.schedule.id,
        });
        assert!(matches!(own_offer, Err(ServiceError::Forbidden(_))));

        // No extra notifications beyond the first enrollment's.
        assert_eq!(ctx.notifications_for(&ctx.teacher.id).len(), 1);
    }

    #[test]
    fn test_accept_consumes_slot_and_stamps_origin() {
        let ctx = test_support::setup();
        let enrollment = ctx.enroll();

        let accepted = ctx.enrollments.accept(&enrollment.id, &ctx.teacher.id).unwrap();
        assert_eq!(accepted.status, EnrollmentStatus::Accepted);

        let schedule = ctx.db.get_schedule(&ctx.schedule.id).unwrap().unwrap();
        assert_eq!(schedule.open_slots, 2);

        let origin = &ctx.notifications_for(&ctx.teacher.id)[0];
        assert_eq!(origin.action_taken.as_deref(), Some("Accepted ✅"));
        assert!(origin.read);
        assert!(origin.action_date.is_some());

        let student_inbox = ctx.notifications_for(&ctx.student.id);
        assert_eq!(student_inbox.len(), 1);
        assert_eq!(student_inbox[0].kind, kinds::INSCRIPTION_ACCEPTED);
        assert_eq!(ctx.notifications.unread_count(&ctx.student.id).unwrap(), 1);
    }

    #[test]
    fn test_accept_requires_the_offer_owner() {
        let ctx = test_support::setup();
        let enrollment = ctx.enroll();

        let outsider = ctx.new_student("intruso");
        let result = ctx.enrollments.accept(&enrollment.id, &outsider.id);
        assert!(matches!(result, Err(ServiceError::Forbidden(_))));

        let result = ctx.enrollments.accept(&enrollment.id, &ctx.student.id);
        assert!(matches!(result, Err(ServiceError::Forbidden(_))));
    }

    #[test]
    fn test_accept_twice_is_invalid() {
        let ctx = test_support::setup();
        let enrollment = ctx.enroll();

        ctx.enrollments.accept(&enrollment.id, &ctx.teacher.id).unwrap();
        let again = ctx.enrollments.accept(&enrollment.id, &ctx.teacher.id);
        assert!(matches!(again, Err(ServiceError::Invalid(_))));

        // Only one acceptance notification reached the student.
        assert_eq!(ctx.notifications_for(&ctx.student.id).len(), 1);
    }

    #[test]
    fn test_reject_notifies_student_without_touching_capacity() {
        let ctx = test_support::setup();
        let enrollment = ctx.enroll();

        ctx.enrollments.reject(&enrollment.id, &ctx.teacher.id).unwrap();

        let schedule = ctx.db.get_schedule(&ctx.schedule.id).unwrap().unwrap();
        assert_eq!(schedule.open_slots, 3);

        let origin = &ctx.notifications_for(&ctx.teacher.id)[0];
        assert_eq!(origin.action_taken.as_deref(), Some("Rejected ❌"));

        let student_inbox = ctx.notifications_for(&ctx.student.id);
        assert_eq!(student_inbox[0].kind, kinds::INSCRIPTION_REJECTED);
    }

    #[test]
    fn test_cancel_returns_the_consumed_slot() {
        let ctx = test_support::setup();
        let enrollment = ctx.enroll();
        ctx.enrollments.accept(&enrollment.id, &ctx.teacher.id).unwrap();

        ctx.enrollments.cancel(&enrollment.id, &ctx.student.id).unwrap();

        let schedule = ctx.db.get_schedule(&ctx.schedule.id).unwrap().unwrap();
        assert_eq!(schedule.open_slots, 3);

        let teacher_inbox = ctx.notifications_for(&ctx.teacher.id);
        assert!(teacher_inbox.iter().any(|n| n.kind == kinds::INSCRIPTION_CANCELED));
    }

    #[test]
    fn test_cancel_of_pending_enrollment_keeps_capacity() {
        let ctx = test_support::setup();
        let enrollment = ctx.enroll();

        ctx.enrollments.cancel(&enrollment.id, &ctx.student.id).unwrap();

        let schedule = ctx.db.get_schedule(&ctx.schedule.id).unwrap().unwrap();
        assert_eq!(schedule.open_slots, 3);
    }

    #[test]
    fn test_complete_invites_the_student_to_rate() {
        let ctx = test_support::setup();
        let enrollment = ctx.enroll();
        ctx.enrollments.accept(&enrollment.id, &ctx.teacher.id).unwrap();

        let completed = ctx.enrollments.complete(&enrollment.id, &ctx.teacher.id).unwrap();
        assert_eq!(completed.status, EnrollmentStatus::Completed);

        let student_inbox = ctx.notifications_for(&ctx.student.id);
        assert!(student_inbox.iter().any(|n| n.kind == kinds::INSCRIPTION_COMPLETED));
    }

    #[test]
    fn test_complete_requires_an_accepted_enrollment() {
        let ctx = test_support::setup();
        let enrollment = ctx.enroll();

        let result = ctx.enrollments.complete(&enrollment.id, &ctx.teacher.id);
        assert!(matches!(result, Err(ServiceError::Invalid(_))));
    }

    #[test]
    fn test_filling_the_last_slot_congratulates_the_teacher() {
        let ctx = test_support::setup();
        let small = ctx
            .db
            .insert_schedule(crate::models::course::Schedule::new(
                ctx.offer.id,
                crate::models::course::Weekday::Friday,
                chrono::NaiveTime::from_hms_opt(16, 0, 0).unwrap(),
                chrono::NaiveTime::from_hms_opt(17, 0, 0).unwrap(),
                1,
            ))
            .unwrap();

        let enrollment = ctx
            .enrollments
            .create(CreateEnrollmentRequest {
                student_id: ctx.student.id,
                schedule_id: small.id,
            })
            .unwrap();
        ctx.enrollments.accept(&enrollment.id, &ctx.teacher.id).unwrap();

        let teacher_inbox = ctx.notifications_for(&ctx.teacher.id);
        assert!(teacher_inbox.iter().any(|n| n.kind == kinds::SLOTS_FULL));
    }
}
