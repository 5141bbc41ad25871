//! HTTP handlers and route configuration.

mod calendar;
mod export;
mod health;
mod overview;
mod platforms;
mod posts;
mod preferences;

use actix_web::web;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            // Public routes
            .route("/health", web::get().to(health::health_check))
            .route("/overview", web::get().to(overview::overview))
            .route("/export", web::get().to(export::export))
            .route("/calendar/{year}/{month}", web::get().to(calendar::month_grid))
            // Post management
            .service(
                web::scope("/posts")
                    .route("", web::get().to(posts::list))
                    .route("", web::post().to(posts::create))
                    .route("/daily-limit", web::get().to(posts::daily_limit))
                    .route("/{id}", web::put().to(posts::update))
                    .route("/{id}", web::delete().to(posts::delete))
                    .route("/{id}/reschedule", web::put().to(posts::reschedule)),
            )
            // Platform connections
            .service(
                web::scope("/platforms")
                    .route("/status", web::get().to(platforms::status))
                    .route("/{platform}/connect", web::post().to(platforms::connect))
                    .route("/{platform}/disconnect", web::post().to(platforms::disconnect)),
            )
            // Preferences
            .service(
                web::scope("/preferences")
                    .route("", web::get().to(preferences::load))
                    .route("", web::put().to(preferences::save)),
            ),
    );
}
