use actix_web::web::{Data, Json, Path};
use actix_web::{delete, post, HttpResponse, Result};
use serde::Deserialize;
use uuid::Uuid;

use crate::handlers::enrollments::ActorBody;
use crate::handlers::error_response;
use crate::models::common::ApiResponse;
use crate::services::offer_service::OfferService;

#[derive(Deserialize)]
pub struct ProposeBody {
    pub profile_id: Uuid,
    pub student_id: Uuid,
}

#[delete("/{offer_id}")]
pub async fn delete_offer(
    offers: Data<OfferService>,
    path: Path<Uuid>,
    payload: Json<ActorBody>,
) -> Result<HttpResponse> {
    match offers.delete_offer(&path.into_inner(), &payload.profile_id) {
        Ok(()) => Ok(HttpResponse::Ok().json(ApiResponse::success_with_message(
            (),
            "Offer deleted".to_string(),
        ))),
        Err(e) => Ok(error_response(&e)),
    }
}

#[post("/{offer_id}/propose")]
pub async fn propose_offer(
    offers: Data<OfferService>,
    path: Path<Uuid>,
    payload: Json<ProposeBody>,
) -> Result<HttpResponse> {
    match offers.propose_to_student(&path.into_inner(), &payload.student_id, &payload.profile_id) {
        Ok(offer) => Ok(HttpResponse::Ok().json(ApiResponse::success(offer))),
        Err(e) => Ok(error_response(&e)),
    }
}
