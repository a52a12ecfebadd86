use actix_web::web::{Data, Json};
use actix_web::{post, HttpResponse, Result};

use crate::handlers::error_response;
use crate::models::comment::CreateCommentRequest;
use crate::models::common::ApiResponse;
use crate::models::rating::CreateRatingRequest;
use crate::services::community_service::CommunityService;

#[post("")]
pub async fn create_comment(
    community: Data<CommunityService>,
    payload: Json<CreateCommentRequest>,
) -> Result<HttpResponse> {
    match community.create_comment(payload.into_inner()) {
        Ok(comment) => Ok(HttpResponse::Created().json(ApiResponse::success(comment))),
        Err(e) => Ok(error_response(&e)),
    }
}

#[post("")]
pub async fn create_rating(
    community: Data<CommunityService>,
    payload: Json<CreateRatingRequest>,
) -> Result<HttpResponse> {
    match community.create_rating(payload.into_inner()) {
        Ok(rating) => Ok(HttpResponse::Created().json(ApiResponse::success(rating))),
        Err(e) => Ok(error_response(&e)),
    }
}
