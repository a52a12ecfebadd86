use validator::Validate;

use crate::models::comment::{Comment, CreateCommentRequest};
use crate::models::enrollment::EnrollmentStatus;
use crate::models::rating::{CreateRatingRequest, Rating};
use crate::services::database::DatabaseService;
use crate::services::ServiceError;
use crate::triggers::NotificationTriggers;

/// Comments and ratings, the two community-side notification sources.
#[derive(Clone)]
pub struct CommunityService {
    db: DatabaseService,
    triggers: NotificationTriggers,
}

impl CommunityService {
    pub fn new(db: DatabaseService, triggers: NotificationTriggers) -> Self {
        Self { db, triggers }
    }

    /// A comment targets exactly one publication: an offer or a request.
    pub fn create_comment(&self, request: CreateCommentRequest) -> Result<Comment, ServiceError> {
        request
            .validate()
            .map_err(|e| ServiceError::Invalid(e.to_string()))?;

        match (request.offer_id, request.request_id) {
            (Some(offer_id), None) => {
                self.db
                    .get_offer(&offer_id)?
                    .ok_or(ServiceError::NotFound("Offer"))?;
            }
            (None, Some(request_id)) => {
                self.db
                    .get_class_request(&request_id)?
                    .ok_or(ServiceError::NotFound("Class request"))?;
            }
            _ => {
                return Err(ServiceError::Invalid(
                    "A comment must target exactly one offer or class request".to_string(),
                ));
            }
        }
        self.db
            .get_profile(&request.author_id)?
            .ok_or(ServiceError::NotFound("Profile"))?;
        if let Some(parent_id) = request.parent_id {
            self.db
                .get_comment(&parent_id)?
                .ok_or(ServiceError::NotFound("Comment"))?;
        }

        let comment = self.db.create_comment(request)?;
        self.triggers.comment_created(&comment);
        Ok(comment)
    }

    /// Students rate the teacher of a completed enrollment, once.
    pub fn create_rating(&self, request: CreateRatingRequest) -> Result<Rating, ServiceError> {
        request
            .validate()
            .map_err(|e| ServiceError::Invalid(e.to_string()))?;

        let enrollment = self
            .db
            .get_enrollment(&request.enrollment_id)?
            .ok_or(ServiceError::NotFound("Enrollment"))?;
        if enrollment.student_id != request.rater_id {
            return Err(ServiceError::Forbidden(
                "Only the enrolled student can rate this class",
            ));
        }
        if enrollment.status != EnrollmentStatus::Completed {
            return Err(ServiceError::Invalid(
                "Only completed classes can be rated".to_string(),
            ));
        }
        if self.db.rating_for_enrollment(&enrollment.id)?.is_some() {
            return Err(ServiceError::Invalid(
                "This enrollment has already been rated".to_string(),
            ));
        }

        let schedule = self
            .db
            .get_schedule(&enrollment.schedule_id)?
            .ok_or(ServiceError::NotFound("Schedule"))?;
        let offer = self
            .db
            .get_offer(&schedule.offer_id)?
            .ok_or(ServiceError::NotFound("Offer"))?;

        let rating = self.db.insert_rating(Rating::new(
            request.rater_id,
            offer.teacher_id,
            enrollment.id,
            request.stars,
            request.comment,
        ))?;
        self.triggers.rating_created(&rating);
        Ok(rating)
    }
}
