use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use crate::db::{run_blocking, ProfileStore};
use crate::errors::AppError;
use crate::models::score::{Category, DetailedScores, HealthInputs};
use crate::services::health;

#[derive(Deserialize)]
pub struct HealthScoreRequest {
    email: String,
    #[serde(flatten)]
    inputs: HealthInputs,
}

#[derive(Serialize)]
pub struct HealthScoreResponse {
    success: bool,
    overall_score: i64,
    category: Category,
    detailed_scores: DetailedScores,
    message: String,
}

// POST /api/health-score/calculate
pub async fn calculate(
    req: web::Json<HealthScoreRequest>,
    store: web::Data<dyn ProfileStore>,
) -> Result<HttpResponse, AppError> {
    let HealthScoreRequest { email, inputs } = req.into_inner();
    let store = store.into_inner();

    let scores = run_blocking(move || health::compute_score(&*store, &email, &inputs)).await?;

    Ok(HttpResponse::Ok().json(HealthScoreResponse {
        success: true,
        overall_score: scores.overall_score,
        category: scores.category,
        detailed_scores: scores.detailed(),
        message: "Health score calculated and saved successfully!".to_string(),
    }))
}

// GET /api/health-score/user/{email}
pub async fn get_user_health_data(
    email: web::Path<String>,
    store: web::Data<dyn ProfileStore>,
) -> Result<HttpResponse, AppError> {
    let email = email.into_inner();
    let store = store.into_inner();
    let status = run_blocking(move || health::health_status(&*store, &email)).await?;
    Ok(HttpResponse::Ok().json(status))
}
