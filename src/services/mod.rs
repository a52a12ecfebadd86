pub mod community_service;
pub mod database;
pub mod enrollment_service;
pub mod notification_service;
pub mod offer_service;

use thiserror::Error;

/// Business-level failures surfaced by the services. Handlers map these to
/// HTTP statuses; anything unexpected travels as `Internal`.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("{0} not found")]
    NotFound(&'static str),

    #[error("{0}")]
    Forbidden(&'static str),

    #[error("{0}")]
    Invalid(String),

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}
