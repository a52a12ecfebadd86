use actix_web::web::{Data, Json, Path, Query};
use actix_web::{get, post, HttpResponse, Result};
use serde::Deserialize;
use uuid::Uuid;

use crate::handlers::internal_error;
use crate::models::common::{ApiResponse, PaginationQuery};
use crate::services::notification_service::NotificationService;

#[derive(Deserialize)]
pub struct ReceiverBody {
    pub receiver_id: Uuid,
}

#[get("/receiver/{receiver_id}")]
pub async fn list_notifications(
    notifications: Data<NotificationService>,
    path: Path<Uuid>,
    pagination: Query<PaginationQuery>,
) -> Result<HttpResponse> {
    let receiver_id = path.into_inner();
    match notifications.list_for_receiver(&receiver_id, &pagination) {
        Ok(page) => Ok(HttpResponse::Ok().json(ApiResponse::success(page))),
        Err(e) => Ok(internal_error(&e)),
    }
}

#[get("/receiver/{receiver_id}/unread-count")]
pub async fn unread_count(
    notifications: Data<NotificationService>,
    path: Path<Uuid>,
) -> Result<HttpResponse> {
    let receiver_id = path.into_inner();
    match notifications.unread_count(&receiver_id) {
        Ok(count) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            serde_json::json!({ "unread": count }),
        ))),
        Err(e) => Ok(internal_error(&e)),
    }
}

#[post("/{notification_id}/read")]
pub async fn mark_read(
    notifications: Data<NotificationService>,
    path: Path<Uuid>,
    payload: Json<ReceiverBody>,
) -> Result<HttpResponse> {
    let notification_id = path.into_inner();
    match notifications.mark_read(&notification_id, &payload.receiver_id) {
        Ok(Some(notification)) => Ok(HttpResponse::Ok().json(ApiResponse::success(notification))),
        Ok(None) => Ok(HttpResponse::NotFound()
            .json(ApiResponse::<()>::error("Notification not found".to_string()))),
        Err(e) => Ok(internal_error(&e)),
    }
}

#[post("/{notification_id}/unread")]
pub async fn mark_unread(
    notifications: Data<NotificationService>,
    path: Path<Uuid>,
    payload: Json<ReceiverBody>,
) -> Result<HttpResponse> {
    let notification_id = path.into_inner();
    match notifications.mark_unread(&notification_id, &payload.receiver_id) {
        Ok(Some(notification)) => Ok(HttpResponse::Ok().json(ApiResponse::success(notification))),
        Ok(None) => Ok(HttpResponse::NotFound()
            .json(ApiResponse::<()>::error("Notification not found".to_string()))),
        Err(e) => Ok(internal_error(&e)),
    }
}

#[post("/receiver/{receiver_id}/read-all")]
pub async fn mark_all_read(
    notifications: Data<NotificationService>,
    path: Path<Uuid>,
) -> Result<HttpResponse> {
    let receiver_id = path.into_inner();
    match notifications.mark_all_read(&receiver_id) {
        Ok(flipped) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            serde_json::json!({ "marked_read": flipped }),
        ))),
        Err(e) => Ok(internal_error(&e)),
    }
}
