use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use uuid::Uuid;
use validator::Validate;

/// A 1-5 star rating given by a student to a teacher after a completed
/// class. At most one rating exists per enrollment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Rating {
    pub id: Uuid,
    pub rater_id: Uuid,
    pub rated_id: Uuid,
    pub enrollment_id: Uuid,
    pub stars: u8,
    pub comment: Option<String>,
    pub rated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateRatingRequest {
    pub rater_id: Uuid,
    pub enrollment_id: Uuid,

    #[validate(range(min = 1, max = 5, message = "Stars must be between 1 and 5"))]
    pub stars: u8,

    #[validate(length(max = 2000, message = "Comment must be at most 2000 characters"))]
    pub comment: Option<String>,
}

impl Rating {
    pub fn new(rater_id: Uuid, rated_id: Uuid, enrollment_id: Uuid, stars: u8, comment: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            rater_id,
            rated_id,
            enrollment_id,
            stars,
            comment,
            rated_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[test]
    fn test_stars_out_of_range_fail_validation() {
        let request = CreateRatingRequest {
            rater_id: Uuid::new_v4(),
            enrollment_id: Uuid::new_v4(),
            stars: 6,
            comment: None,
        };
        assert!(request.validate().is_err());

        let zero = CreateRatingRequest {
            rater_id: Uuid::new_v4(),
            enrollment_id: Uuid::new_v4(),
            stars: 0,
            comment: None,
        };
        assert!(zero.validate().is_err());
    }
}
