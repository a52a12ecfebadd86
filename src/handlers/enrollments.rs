use actix_web::web::{Data, Json, Path};
use actix_web::{get, post, HttpResponse, Result};
use serde::Deserialize;
use uuid::Uuid;

use crate::handlers::error_response;
use crate::models::common::ApiResponse;
use crate::models::enrollment::CreateEnrollmentRequest;
use crate::services::enrollment_service::EnrollmentService;

/// Who is performing the transition. Authentication is out of scope; the
/// services enforce that the actor is the right party.
#[derive(Deserialize)]
pub struct ActorBody {
    pub profile_id: Uuid,
}

#[post("")]
pub async fn create_enrollment(
    enrollments: Data<EnrollmentService>,
    payload: Json<CreateEnrollmentRequest>,
) -> Result<HttpResponse> {
    match enrollments.create(payload.into_inner()) {
        Ok(enrollment) => Ok(HttpResponse::Created().json(ApiResponse::success(enrollment))),
        Err(e) => Ok(error_response(&e)),
    }
}

#[get("/{enrollment_id}")]
pub async fn get_enrollment(
    enrollments: Data<EnrollmentService>,
    path: Path<Uuid>,
) -> Result<HttpResponse> {
    match enrollments.get(&path.into_inner()) {
        Ok(enrollment) => Ok(HttpResponse::Ok().json(ApiResponse::success(enrollment))),
        Err(e) => Ok(error_response(&e)),
    }
}

#[post("/{enrollment_id}/accept")]
pub async fn accept_enrollment(
    enrollments: Data<EnrollmentService>,
    path: Path<Uuid>,
    payload: Json<ActorBody>,
) -> Result<HttpResponse> {
    match enrollments.accept(&path.into_inner(), &payload.profile_id) {
        Ok(enrollment) => Ok(HttpResponse::Ok().json(ApiResponse::success(enrollment))),
        Err(e) => Ok(error_response(&e)),
    }
}

#[post("/{enrollment_id}/reject")]
pub async fn reject_enrollment(
    enrollments: Data<EnrollmentService>,
    path: Path<Uuid>,
    payload: Json<ActorBody>,
) -> Result<HttpResponse> {
    match enrollments.reject(&path.into_inner(), &payload.profile_id) {
        Ok(enrollment) => Ok(HttpResponse::Ok().json(ApiResponse::success(enrollment))),
        Err(e) => Ok(error_response(&e)),
    }
}

#[post("/{enrollment_id}/cancel")]
pub async fn cancel_enrollment(
    enrollments: Data<EnrollmentService>,
    path: Path<Uuid>,
    payload: Json<ActorBody>,
) -> Result<HttpResponse> {
    match enrollments.cancel(&path.into_inner(), &payload.profile_id) {
        Ok(enrollment) => Ok(HttpResponse::Ok().json(ApiResponse::success(enrollment))),
        Err(e) => Ok(error_response(&e)),
    }
}

#[post("/{enrollment_id}/complete")]
pub async fn complete_enrollment(
    enrollments: Data<EnrollmentService>,
    path: Path<Uuid>,
    payload: Json<ActorBody>,
) -> Result<HttpResponse> {
    match enrollments.complete(&path.into_inner(), &payload.profile_id) {
        Ok(enrollment) => Ok(HttpResponse::Ok().json(ApiResponse::success(enrollment))),
        Err(e) => Ok(error_response(&e)),
    }
}
