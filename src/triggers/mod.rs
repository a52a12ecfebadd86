//! Event triggers binding domain lifecycle transitions to the dispatch
//! engine.
//!
//! Each business service calls the matching trigger explicitly at the end of
//! its operation, after its own state change is persisted. Triggers decide
//! whether the transition warrants a notification, pick the recipient,
//! flatten the payload and hand off to the dispatch service. Delivery is
//! best-effort: a failing dispatch is logged and swallowed so it can never
//! abort the primary business operation.

mod comments;
mod enrollments;
mod offers;
mod ratings;
mod reminders;
mod slots;

use uuid::Uuid;

use crate::models::notification::RelatedRef;
use crate::services::database::DatabaseService;
use crate::services::notification_service::NotificationService;
use crate::strategy::Payload;

#[derive(Clone)]
pub struct NotificationTriggers {
    db: DatabaseService,
    notifications: NotificationService,
}

impl NotificationTriggers {
    pub fn new(db: DatabaseService, notifications: NotificationService) -> Self {
        Self { db, notifications }
    }

    /// Best-effort send: failures are logged, never propagated.
    fn dispatch(
        &self,
        receiver_id: Uuid,
        kind: &str,
        payload: Payload,
        related: Option<RelatedRef>,
    ) {
        if let Err(err) = self.notifications.send(receiver_id, kind, &payload, related) {
            log::warn!("notification dispatch failed for kind {}: {:#}", kind, err);
        }
    }

    /// Profile display name for payloads; empty when the profile is gone.
    fn profile_name(&self, profile_id: &Uuid) -> String {
        self.db
            .get_profile(profile_id)
            .ok()
            .flatten()
            .map(|p| p.display_name().to_string())
            .unwrap_or_default()
    }

    fn course_name(&self, course_id: &Uuid) -> String {
        self.db
            .get_course(course_id)
            .ok()
            .flatten()
            .map(|c| c.name)
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use crate::models::enrollment::EnrollmentStatus;
    use crate::models::rating::Rating;
    use crate::test_support;

    #[test]
    fn test_unchanged_status_never_notifies() {
        let ctx = test_support::setup();
        let enrollment = ctx.enroll();

        ctx.triggers
            .enrollment_status_changed(EnrollmentStatus::Pending, &enrollment);

        // Only the creation notification exists, nothing for the student.
        assert_eq!(ctx.notifications_for(&ctx.teacher.id).len(), 1);
        assert!(ctx.notifications_for(&ctx.student.id).is_empty());
    }

    #[test]
    fn test_non_pending_creation_never_notifies() {
        let ctx = test_support::setup();
        let mut enrollment = ctx.enroll();
        let before = ctx.notifications_for(&ctx.teacher.id).len();

        enrollment.accept().unwrap();
        ctx.triggers.enrollment_created(&enrollment);

        assert_eq!(ctx.notifications_for(&ctx.teacher.id).len(), before);
    }

    #[test]
    fn test_failed_dispatch_never_blocks_the_operation() {
        let ctx = test_support::setup();
        let enrollment = ctx.enroll();
        let before = ctx.notifications_for(&ctx.teacher.id).len();

        ctx.db.break_notifications_store();

        // Dispatch and the action stamp both fail against the broken store;
        // the transition itself must still go through.
        let accepted = ctx.enrollments.accept(&enrollment.id, &ctx.teacher.id).unwrap();
        assert_eq!(accepted.status, EnrollmentStatus::Accepted);
        assert_eq!(
            ctx.db.get_enrollment(&enrollment.id).unwrap().unwrap().status,
            EnrollmentStatus::Accepted
        );
        assert_eq!(before, 1);
    }

    #[test]
    fn test_rating_yourself_stays_silent() {
        let ctx = test_support::setup();
        let enrollment = ctx.enroll();

        let rating = Rating::new(ctx.teacher.id, ctx.teacher.id, enrollment.id, 5, None);
        ctx.triggers.rating_created(&rating);

        assert!(ctx
            .notifications_for(&ctx.teacher.id)
            .iter()
            .all(|n| n.kind != crate::models::notification::kinds::RATING_RECEIVED));
    }

    #[test]
    fn test_deleted_schedule_silences_the_trigger() {
        let ctx = test_support::setup();
        let enrollment = ctx.enroll();
        let before = ctx.db.count_notifications().unwrap();

        ctx.db.delete_schedules_for_offer(&ctx.offer.id).unwrap();
        ctx.triggers
            .enrollment_status_changed(EnrollmentStatus::Pending, &{
                let mut e = enrollment;
                e.accept().unwrap();
                e
            });

        assert_eq!(ctx.db.count_notifications().unwrap(), before);
    }
}
