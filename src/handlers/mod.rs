pub mod community;
pub mod enrollments;
pub mod health;
pub mod notifications;
pub mod offers;

use actix_web::HttpResponse;

use crate::models::common::ApiResponse;
use crate::services::ServiceError;

/// Maps business failures to HTTP statuses.
pub fn error_response(err: &ServiceError) -> HttpResponse {
    let body = ApiResponse::<()>::error(err.to_string());
    match err {
        ServiceError::NotFound(_) => HttpResponse::NotFound().json(body),
        ServiceError::Forbidden(_) => HttpResponse::Forbidden().json(body),
        ServiceError::Invalid(_) => HttpResponse::BadRequest().json(body),
        ServiceError::Internal(_) => HttpResponse::InternalServerError().json(body),
    }
}

pub fn internal_error(err: &anyhow::Error) -> HttpResponse {
    log::error!("request failed: {:#}", err);
    HttpResponse::InternalServerError().json(ApiResponse::<()>::error("Internal error".to_string()))
}
