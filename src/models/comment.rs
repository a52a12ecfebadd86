use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use uuid::Uuid;
use validator::Validate;

/// A comment posted on a class offer or on a class request (exactly one of
/// the two). `parent_id` points at the comment being replied to, if any.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comment {
    pub id: Uuid,
    pub author_id: Uuid,
    pub offer_id: Option<Uuid>,
    pub request_id: Option<Uuid>,
    pub parent_id: Option<Uuid>,
    pub body: String,
    pub posted_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateCommentRequest {
    pub author_id: Uuid,
    pub offer_id: Option<Uuid>,
    pub request_id: Option<Uuid>,
    pub parent_id: Option<Uuid>,

    #[validate(length(min = 1, max = 2000, message = "Comment body must be between 1 and 2000 characters"))]
    pub body: String,
}

impl Comment {
    pub fn new(request: CreateCommentRequest) -> Self {
        Self {
            id: Uuid::new_v4(),
            author_id: request.author_id,
            offer_id: request.offer_id,
            request_id: request.request_id,
            parent_id: request.parent_id,
            body: request.body,
            posted_at: Utc::now(),
        }
    }
}
