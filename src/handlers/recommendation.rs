use actix_web::{web, HttpResponse};
use serde::Serialize;
use crate::db::{run_blocking, ProfileStore};
use crate::errors::AppError;
use crate::models::recommendation::RecommendationResult;
use crate::services::health;

#[derive(Serialize)]
struct RecommendationResponse {
    success: bool,
    #[serde(flatten)]
    recommendations: RecommendationResult,
}

// GET /api/recommendations/user/{email}
pub async fn get_recommendations(
    email: web::Path<String>,
    store: web::Data<dyn ProfileStore>,
) -> Result<HttpResponse, AppError> {
    let email = email.into_inner();
    let store = store.into_inner();
    let recommendations = run_blocking(move || health::get_recommendations(&*store, &email)).await?;
    Ok(HttpResponse::Ok().json(RecommendationResponse { success: true, recommendations }))
}

// GET /api/recommendations/status/{email}
pub async fn get_status(
    email: web::Path<String>,
    store: web::Data<dyn ProfileStore>,
) -> Result<HttpResponse, AppError> {
    let email = email.into_inner();
    let store = store.into_inner();
    let status = run_blocking(move || health::tier_status(&*store, &email)).await?;
    Ok(HttpResponse::Ok().json(status))
}
