use std::sync::{Arc, Mutex, MutexGuard};

use anyhow::{anyhow, Result};
use uuid::Uuid;

use crate::models::{
    comment::{Comment, CreateCommentRequest},
    common::{PaginatedResponse, PaginationQuery},
    course::{ClassRequest, Course, Offer, Schedule},
    enrollment::{Enrollment, EnrollmentStatus},
    notification::{Notification, RelatedEntity, RelatedKind, RelatedRef},
    profile::{CreateProfileRequest, Profile},
    rating::Rating,
};

/// In-memory data store behind a service facade.
///
/// Every table is an `Arc<Mutex<Vec<T>>>`, cloned cheaply into each actix
/// worker. Notification rows are only ever appended by the dispatch service
/// and mutated by the read-path operations below.
#[derive(Clone, Default)]
pub struct DatabaseService {
    profiles: Arc<Mutex<Vec<Profile>>>,
    courses: Arc<Mutex<Vec<Course>>>,
    offers: Arc<Mutex<Vec<Offer>>>,
    class_requests: Arc<Mutex<Vec<ClassRequest>>>,
    schedules: Arc<Mutex<Vec<Schedule>>>,
    enrollments: Arc<Mutex<Vec<Enrollment>>>,
    comments: Arc<Mutex<Vec<Comment>>>,
    ratings: Arc<Mutex<Vec<Rating>>>,
    notifications: Arc<Mutex<Vec<Notification>>>,
}

fn guard<T>(store: &Mutex<Vec<T>>) -> Result<MutexGuard<'_, Vec<T>>> {
    store.lock().map_err(|_| anyhow!("data store lock poisoned"))
}

/// Upper bound on a requested page size; queries are user input.
const MAX_PAGE_LIMIT: u32 = 100;

impl DatabaseService {
    pub fn new() -> Self {
        Self::default()
    }

    // Profile operations

    pub fn create_profile(&self, request: CreateProfileRequest) -> Result<Profile> {
        let mut profiles = guard(&self.profiles)?;

        let email = request.email.to_lowercase();
        if profiles.iter().any(|p| p.email == email) {
            return Err(anyhow!("Profile with email {} already exists", email));
        }

        let profile = Profile::new(request.username, request.full_name, request.email);
        profiles.push(profile.clone());
        Ok(profile)
    }

    pub fn get_profile(&self, profile_id: &Uuid) -> Result<Option<Profile>> {
        let profiles = guard(&self.profiles)?;
        Ok(profiles.iter().find(|p| p.id == *profile_id).cloned())
    }

    // Course operations

    pub fn create_course(&self, name: &str) -> Result<Course> {
        let mut courses = guard(&self.courses)?;
        let course = Course::new(name.to_string());
        courses.push(course.clone());
        Ok(course)
    }

    pub fn get_course(&self, course_id: &Uuid) -> Result<Option<Course>> {
        let courses = guard(&self.courses)?;
        Ok(courses.iter().find(|c| c.id == *course_id).cloned())
    }

    // Offer and class-request operations

    pub fn create_offer(
        &self,
        title: &str,
        description: &str,
        teacher_id: Uuid,
        course_id: Uuid,
    ) -> Result<Offer> {
        let mut offers = guard(&self.offers)?;
        let offer = Offer::new(title.to_string(), description.to_string(), teacher_id, course_id);
        offers.push(offer.clone());
        Ok(offer)
    }

    pub fn get_offer(&self, offer_id: &Uuid) -> Result<Option<Offer>> {
        let offers = guard(&self.offers)?;
        Ok(offers.iter().find(|o| o.id == *offer_id).cloned())
    }

    pub fn has_offer_for_course(&self, teacher_id: &Uuid, course_id: &Uuid) -> Result<bool> {
        let offers = guard(&self.offers)?;
        Ok(offers
            .iter()
            .any(|o| o.teacher_id == *teacher_id && o.course_id == *course_id))
    }

    pub fn delete_offer(&self, offer_id: &Uuid) -> Result<bool> {
        let mut offers = guard(&self.offers)?;
        let before = offers.len();
        offers.retain(|o| o.id != *offer_id);
        Ok(offers.len() < before)
    }

    pub fn create_class_request(
        &self,
        title: &str,
        description: &str,
        requester_id: Uuid,
        course_id: Uuid,
    ) -> Result<ClassRequest> {
        let mut class_requests = guard(&self.class_requests)?;
        let request = ClassRequest::new(
            title.to_string(),
            description.to_string(),
            requester_id,
            course_id,
        );
        class_requests.push(request.clone());
        Ok(request)
    }

    pub fn get_class_request(&self, request_id: &Uuid) -> Result<Option<ClassRequest>> {
        let class_requests = guard(&self.class_requests)?;
        Ok(class_requests.iter().find(|r| r.id == *request_id).cloned())
    }

    // Schedule operations

    pub fn insert_schedule(&self, schedule: Schedule) -> Result<Schedule> {
        let mut schedules = guard(&self.schedules)?;
        schedules.push(schedule.clone());
        Ok(schedule)
    }

    pub fn get_schedule(&self, schedule_id: &Uuid) -> Result<Option<Schedule>> {
        let schedules = guard(&self.schedules)?;
        Ok(schedules.iter().find(|s| s.id == *schedule_id).cloned())
    }

    pub fn update_schedule(&self, schedule: &Schedule) -> Result<()> {
        let mut schedules = guard(&self.schedules)?;
        match schedules.iter_mut().find(|s| s.id == schedule.id) {
            Some(row) => {
                *row = schedule.clone();
                Ok(())
            }
            None => Err(anyhow!("Schedule {} does not exist", schedule.id)),
        }
    }

    pub fn schedules_for_offer(&self, offer_id: &Uuid) -> Result<Vec<Schedule>> {
        let schedules = guard(&self.schedules)?;
        Ok(schedules
            .iter()
            .filter(|s| s.offer_id == *offer_id)
            .cloned()
            .collect())
    }

    pub fn delete_schedules_for_offer(&self, offer_id: &Uuid) -> Result<usize> {
        let mut schedules = guard(&self.schedules)?;
        let before = schedules.len();
        schedules.retain(|s| s.offer_id != *offer_id);
        Ok(before - schedules.len())
    }

    // Enrollment operations

    pub fn insert_enrollment(&self, enrollment: Enrollment) -> Result<Enrollment> {
        let mut enrollments = guard(&self.enrollments)?;
        enrollments.push(enrollment.clone());
        Ok(enrollment)
    }

    pub fn get_enrollment(&self, enrollment_id: &Uuid) -> Result<Option<Enrollment>> {
        let enrollments = guard(&self.enrollments)?;
        Ok(enrollments.iter().find(|e| e.id == *enrollment_id).cloned())
    }

    pub fn update_enrollment(&self, enrollment: &Enrollment) -> Result<()> {
        let mut enrollments = guard(&self.enrollments)?;
        match enrollments.iter_mut().find(|e| e.id == enrollment.id) {
            Some(row) => {
                *row = enrollment.clone();
                Ok(())
            }
            None => Err(anyhow!("Enrollment {} does not exist", enrollment.id)),
        }
    }

    pub fn accepted_enrollments(&self) -> Result<Vec<Enrollment>> {
        let enrollments = guard(&self.enrollments)?;
        Ok(enrollments
            .iter()
            .filter(|e| e.status == EnrollmentStatus::Accepted)
            .cloned()
            .collect())
    }

    pub fn find_enrollment(&self, student_id: &Uuid, schedule_id: &Uuid) -> Result<Option<Enrollment>> {
        let enrollments = guard(&self.enrollments)?;
        Ok(enrollments
            .iter()
            .find(|e| e.student_id == *student_id && e.schedule_id == *schedule_id)
            .cloned())
    }

    pub fn has_accepted_enrollment(&self, schedule_id: &Uuid) -> Result<bool> {
        let enrollments = guard(&self.enrollments)?;
        Ok(enrollments
            .iter()
            .any(|e| e.schedule_id == *schedule_id && e.status == EnrollmentStatus::Accepted))
    }

    /// Pending and accepted enrollments across every schedule of an offer.
    pub fn active_enrollments_for_offer(&self, offer_id: &Uuid) -> Result<Vec<Enrollment>> {
        let schedule_ids: Vec<Uuid> = self
            .schedules_for_offer(offer_id)?
            .into_iter()
            .map(|s| s.id)
            .collect();

        let enrollments = guard(&self.enrollments)?;
        Ok(enrollments
            .iter()
            .filter(|e| schedule_ids.contains(&e.schedule_id) && e.is_active())
            .cloned()
            .collect())
    }

    pub fn delete_enrollments_for_offer(&self, offer_id: &Uuid) -> Result<usize> {
        let schedule_ids: Vec<Uuid> = self
            .schedules_for_offer(offer_id)?
            .into_iter()
            .map(|s| s.id)
            .collect();

        let mut enrollments = guard(&self.enrollments)?;
        let before = enrollments.len();
        enrollments.retain(|e| !schedule_ids.contains(&e.schedule_id));
        Ok(before - enrollments.len())
    }

    // Comment and rating operations

    pub fn create_comment(&self, request: CreateCommentRequest) -> Result<Comment> {
        let mut comments = guard(&self.comments)?;
        let comment = Comment::new(request);
        comments.push(comment.clone());
        Ok(comment)
    }

    pub fn get_comment(&self, comment_id: &Uuid) -> Result<Option<Comment>> {
        let comments = guard(&self.comments)?;
        Ok(comments.iter().find(|c| c.id == *comment_id).cloned())
    }

    pub fn insert_rating(&self, rating: Rating) -> Result<Rating> {
        let mut ratings = guard(&self.ratings)?;
        ratings.push(rating.clone());
        Ok(rating)
    }

    pub fn get_rating(&self, rating_id: &Uuid) -> Result<Option<Rating>> {
        let ratings = guard(&self.ratings)?;
        Ok(ratings.iter().find(|r| r.id == *rating_id).cloned())
    }

    pub fn rating_for_enrollment(&self, enrollment_id: &Uuid) -> Result<Option<Rating>> {
        let ratings = guard(&self.ratings)?;
        Ok(ratings.iter().find(|r| r.enrollment_id == *enrollment_id).cloned())
    }

    // Notification operations

    pub fn insert_notification(&self, notification: Notification) -> Result<Notification> {
        let mut notifications = guard(&self.notifications)?;
        notifications.push(notification.clone());
        Ok(notification)
    }

    pub fn get_notification(&self, notification_id: &Uuid) -> Result<Option<Notification>> {
        let notifications = guard(&self.notifications)?;
        Ok(notifications.iter().find(|n| n.id == *notification_id).cloned())
    }

    pub fn update_notification(&self, notification: &Notification) -> Result<()> {
        let mut notifications = guard(&self.notifications)?;
        match notifications.iter_mut().find(|n| n.id == notification.id) {
            Some(row) => {
                *row = notification.clone();
                Ok(())
            }
            None => Err(anyhow!("Notification {} does not exist", notification.id)),
        }
    }

    /// Notifications for one receiver, newest first. The page and limit come
    /// straight from the query string, so the limit is capped and the offset
    /// is computed in `u64` to keep hostile values from overflowing.
    pub fn notifications_for_receiver(
        &self,
        receiver_id: &Uuid,
        pagination: &PaginationQuery,
    ) -> Result<PaginatedResponse<Notification>> {
        let page = pagination.page.unwrap_or(1).max(1);
        let limit = pagination.limit.unwrap_or(20).clamp(1, MAX_PAGE_LIMIT);
        let offset = (page as u64 - 1).saturating_mul(limit as u64) as usize;

        let notifications = guard(&self.notifications)?;
        let mut rows: Vec<Notification> = notifications
            .iter()
            .filter(|n| n.receiver_id == *receiver_id)
            .cloned()
            .collect();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        let total = rows.len() as u32;
        let data: Vec<Notification> = rows.into_iter().skip(offset).take(limit as usize).collect();

        Ok(PaginatedResponse {
            data,
            total,
            page,
            limit,
            total_pages: total.div_ceil(limit),
        })
    }

    pub fn unread_count(&self, receiver_id: &Uuid) -> Result<u64> {
        let notifications = guard(&self.notifications)?;
        Ok(notifications
            .iter()
            .filter(|n| n.receiver_id == *receiver_id && !n.read)
            .count() as u64)
    }

    /// Flips `read` on one notification, scoped to its receiver. A row that
    /// belongs to someone else is reported as absent.
    pub fn set_notification_read(
        &self,
        notification_id: &Uuid,
        receiver_id: &Uuid,
        read: bool,
    ) -> Result<Option<Notification>> {
        let mut notifications = guard(&self.notifications)?;
        match notifications
            .iter_mut()
            .find(|n| n.id == *notification_id && n.receiver_id == *receiver_id)
        {
            Some(row) => {
                row.read = read;
                Ok(Some(row.clone()))
            }
            None => Ok(None),
        }
    }

    /// Marks every unread notification of a receiver read; returns how many
    /// rows flipped.
    pub fn mark_all_read(&self, receiver_id: &Uuid) -> Result<usize> {
        let mut notifications = guard(&self.notifications)?;
        let mut flipped = 0;
        for row in notifications
            .iter_mut()
            .filter(|n| n.receiver_id == *receiver_id && !n.read)
        {
            row.read = true;
            flipped += 1;
        }
        Ok(flipped)
    }

    /// Finds the notification of a given kind that points at a specific
    /// related entity, e.g. the `inscription_created` row for an enrollment.
    pub fn find_notification_by_related(
        &self,
        related: RelatedRef,
        kind: &str,
    ) -> Result<Option<Notification>> {
        let notifications = guard(&self.notifications)?;
        Ok(notifications
            .iter()
            .find(|n| n.kind == kind && n.related == Some(related))
            .cloned())
    }

    pub fn count_notifications(&self) -> Result<usize> {
        let notifications = guard(&self.notifications)?;
        Ok(notifications.len())
    }

    /// Resolves a stored related ref into the joined view strategies build
    /// actions from. Any missing row along the way yields `None`; a deleted
    /// target is "no related object", never an error.
    pub fn resolve_related(&self, related: &RelatedRef) -> Result<Option<RelatedEntity>> {
        let resolved = match related.kind {
            RelatedKind::Enrollment => {
                let Some(enrollment) = self.get_enrollment(&related.id)? else {
                    return Ok(None);
                };
                let Some(schedule) = self.get_schedule(&enrollment.schedule_id)? else {
                    return Ok(None);
                };
                let Some(offer) = self.get_offer(&schedule.offer_id)? else {
                    return Ok(None);
                };
                RelatedEntity::Enrollment { enrollment, schedule, offer }
            }
            RelatedKind::Comment => match self.get_comment(&related.id)? {
                Some(comment) => RelatedEntity::Comment(comment),
                None => return Ok(None),
            },
            RelatedKind::Rating => match self.get_rating(&related.id)? {
                Some(rating) => RelatedEntity::Rating(rating),
                None => return Ok(None),
            },
            RelatedKind::Offer => match self.get_offer(&related.id)? {
                Some(offer) => RelatedEntity::Offer(offer),
                None => return Ok(None),
            },
            RelatedKind::Schedule => {
                let Some(schedule) = self.get_schedule(&related.id)? else {
                    return Ok(None);
                };
                let Some(offer) = self.get_offer(&schedule.offer_id)? else {
                    return Ok(None);
                };
                RelatedEntity::Schedule { schedule, offer }
            }
        };
        Ok(Some(resolved))
    }
}

#[cfg(test)]
impl DatabaseService {
    /// Poisons the notifications table lock so every insert and lookup on
    /// it fails, simulating a broken store behind the dispatch service.
    pub fn break_notifications_store(&self) {
        let _ = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let _held = self.notifications.lock().unwrap();
            panic!("poisoning notifications store");
        }));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_email_must_be_unique() {
        let db = DatabaseService::new();

        db.create_profile(CreateProfileRequest {
            username: "ana".to_string(),
            full_name: None,
            email: "ana@example.com".to_string(),
        })
        .unwrap();

        let duplicate = db.create_profile(CreateProfileRequest {
            username: "ana2".to_string(),
            full_name: None,
            email: "ANA@example.com".to_string(),
        });
        assert!(duplicate.is_err());
    }

    #[test]
    fn test_notifications_are_listed_newest_first() {
        let db = DatabaseService::new();
        let receiver = Uuid::new_v4();

        for i in 0..3 {
            let mut n = Notification::new(receiver, "k", format!("n{}", i), String::new(), None);
            n.created_at = chrono::Utc::now() + chrono::Duration::seconds(i);
            db.insert_notification(n).unwrap();
        }

        let page = db
            .notifications_for_receiver(&receiver, &PaginationQuery::default())
            .unwrap();
        assert_eq!(page.total, 3);
        assert_eq!(page.data[0].title, "n2");
        assert_eq!(page.data[2].title, "n0");
    }

    #[test]
    fn test_pagination_slices_and_counts() {
        let db = DatabaseService::new();
        let receiver = Uuid::new_v4();

        for i in 0..5 {
            let mut n = Notification::new(receiver, "k", format!("n{}", i), String::new(), None);
            n.created_at = chrono::Utc::now() + chrono::Duration::seconds(i);
            db.insert_notification(n).unwrap();
        }

        let page = db
            .notifications_for_receiver(
                &receiver,
                &PaginationQuery { page: Some(2), limit: Some(2) },
            )
            .unwrap();
        assert_eq!(page.total, 5);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.data.len(), 2);
        assert_eq!(page.data[0].title, "n2");
    }

    #[test]
    fn test_pagination_survives_hostile_page_numbers() {
        let db = DatabaseService::new();
        let receiver = Uuid::new_v4();

        for _ in 0..3 {
            db.insert_notification(Notification::new(receiver, "k", String::new(), String::new(), None))
                .unwrap();
        }

        let page = db
            .notifications_for_receiver(
                &receiver,
                &PaginationQuery { page: Some(u32::MAX), limit: Some(20) },
            )
            .unwrap();
        assert!(page.data.is_empty());
        assert_eq!(page.total, 3);
    }

    #[test]
    fn test_pagination_caps_hostile_limits() {
        let db = DatabaseService::new();
        let receiver = Uuid::new_v4();

        for _ in 0..3 {
            db.insert_notification(Notification::new(receiver, "k", String::new(), String::new(), None))
                .unwrap();
        }

        let page = db
            .notifications_for_receiver(
                &receiver,
                &PaginationQuery { page: Some(1), limit: Some(u32::MAX) },
            )
            .unwrap();
        assert_eq!(page.limit, MAX_PAGE_LIMIT);
        assert_eq!(page.data.len(), 3);
        assert_eq!(page.total_pages, 1);
    }

    #[test]
    fn test_set_read_is_receiver_scoped() {
        let db = DatabaseService::new();
        let owner = Uuid::new_v4();
        let stranger = Uuid::new_v4();

        let n = db
            .insert_notification(Notification::new(owner, "k", String::new(), String::new(), None))
            .unwrap();

        assert!(db.set_notification_read(&n.id, &stranger, true).unwrap().is_none());
        let updated = db.set_notification_read(&n.id, &owner, true).unwrap().unwrap();
        assert!(updated.read);
    }

    #[test]
    fn test_resolve_related_tolerates_missing_target() {
        let db = DatabaseService::new();
        let dangling = RelatedRef::enrollment(Uuid::new_v4());
        assert!(db.resolve_related(&dangling).unwrap().is_none());
    }
}
