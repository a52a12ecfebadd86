mod config;
mod handlers;
mod models;
mod services;
mod strategy;
mod tasks;
#[cfg(test)]
mod test_support;
mod triggers;

use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use dotenv::dotenv;

use services::community_service::CommunityService;
use services::database::DatabaseService;
use services::enrollment_service::EnrollmentService;
use services::notification_service::NotificationService;
use services::offer_service::OfferService;
use strategy::registry::StrategyRegistry;
use triggers::NotificationTriggers;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init();

    let app_config = config::AppConfig::from_env();

    let database_service = DatabaseService::new();
    // Built once before the server starts; shared read-only afterwards.
    let registry = Arc::new(StrategyRegistry::with_defaults());
    let notification_service = NotificationService::new(database_service.clone(), registry);
    let triggers = NotificationTriggers::new(database_service.clone(), notification_service.clone());
    let enrollment_service = EnrollmentService::new(database_service.clone(), triggers.clone());
    let offer_service = OfferService::new(database_service.clone(), triggers.clone());
    let community_service = CommunityService::new(database_service.clone(), triggers.clone());

    if app_config.run_reminder_scan_on_start {
        tasks::reminder_task::run_reminder_scan(database_service.clone(), triggers.clone()).await;
    }

    let bind_address = format!("0.0.0.0:{}", app_config.port);
    log::info!("starting notification server on {}", bind_address);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(
                Cors::default()
                    .allowed_origin(&app_config.cors_allowed_origin)
                    .allow_any_method()
                    .allow_any_header(),
            )
            .app_data(web::Data::new(database_service.clone()))
            .app_data(web::Data::new(notification_service.clone()))
            .app_data(web::Data::new(enrollment_service.clone()))
            .app_data(web::Data::new(offer_service.clone()))
            .app_data(web::Data::new(community_service.clone()))
            .service(
                web::scope("/api/v1")
                    .service(
                        web::scope("/notifications")
                            .service(handlers::notifications::list_notifications)
                            .service(handlers::notifications::unread_count)
                            .service(handlers::notifications::mark_read)
                            .service(handlers::notifications::mark_unread)
                            .service(handlers::notifications::mark_all_read),
                    )
                    .service(
                        web::scope("/enrollments")
                            .service(handlers::enrollments::create_enrollment)
                            .service(handlers::enrollments::get_enrollment)
                            .service(handlers::enrollments::accept_enrollment)
                            .service(handlers::enrollments::reject_enrollment)
                            .service(handlers::enrollments::cancel_enrollment)
                            .service(handlers::enrollments::complete_enrollment),
                    )
                    .service(
                        web::scope("/offers")
                            .service(handlers::offers::delete_offer)
                            .service(handlers::offers::propose_offer),
                    )
                    .service(web::scope("/comments").service(handlers::community::create_comment))
                    .service(web::scope("/ratings").service(handlers::community::create_rating))
                    .service(handlers::health::health_check),
            )
    })
    .bind(&bind_address)?
    .run()
    .await
}
