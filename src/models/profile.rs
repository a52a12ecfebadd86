use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub id: Uuid,
    pub username: String,
    pub full_name: Option<String>,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateProfileRequest {
    #[validate(length(min = 2, max = 100, message = "Username must be between 2 and 100 characters"))]
    pub username: String,

    pub full_name: Option<String>,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,
}

impl Profile {
    pub fn new(username: String, full_name: Option<String>, email: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            username,
            full_name,
            email: email.to_lowercase(),
            created_at: Utc::now(),
        }
    }

    /// Full name when present, otherwise the username.
    pub fn display_name(&self) -> &str {
        match self.full_name.as_deref() {
            Some(name) if !name.trim().is_empty() => name,
            _ => &self.username,
        }
    }
}
