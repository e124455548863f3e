pub mod assistant;
pub mod auth;
pub mod recommendation;
pub mod score;

use actix_web::web;
use actix_web_httpauth::middleware::HttpAuthentication;

/// Registers every API route. Shared state (`dyn ProfileStore`, `AppConfig`,
/// `GeminiClient`) must already be attached to the app.
pub fn configure(cfg: &mut web::ServiceConfig) {
    // Bearer token required on the AI proxy routes
    let auth = HttpAuthentication::bearer(crate::utils::jwt::validator);

    cfg.service(web::resource("/health").route(web::get().to(assistant::health_check)))
        .service(
            web::resource("/api/auth/register")
                .route(web::post().to(auth::register)),
        )
        .service(
            web::resource("/api/auth/login")
                .route(web::post().to(auth::login)),
        )
        .service(
            web::resource("/api/auth/user/{email}")
                .route(web::get().to(auth::get_user)),
        )
        .service(
            web::resource("/api/health-score/calculate")
                .route(web::post().to(score::calculate)),
        )
        .service(
            web::resource("/api/health-score/user/{email}")
                .route(web::get().to(score::get_user_health_data)),
        )
        .service(
            web::resource("/api/recommendations/user/{email}")
                .route(web::get().to(recommendation::get_recommendations)),
        )
        .service(
            web::resource("/api/recommendations/status/{email}")
                .route(web::get().to(recommendation::get_status)),
        )
        .service(
            web::resource("/api/chatbot/chat")
                .wrap(auth.clone())
                .route(web::post().to(assistant::chat)),
        )
        .service(
            web::resource("/api/symptom-checker/analyze")
                .wrap(auth)
                .route(web::post().to(assistant::analyze_symptoms)),
        )
        .service(
            web::resource("/api/symptom-checker/symptoms-list")
                .route(web::get().to(assistant::symptoms_list)),
        );
}
