use actix_web::{web, HttpMessage, HttpRequest, HttpResponse};
use serde::{Deserialize, Serialize};
use serde_json::json;
use log::info;
use crate::errors::AppError;
use crate::services::prompts;
use crate::utils::gemini::GeminiClient;
use crate::utils::jwt::Claims;

#[derive(Deserialize)]
pub struct ChatRequest {
    message: String,
}

#[derive(Serialize)]
struct ChatResponse {
    success: bool,
    response: String,
}

#[derive(Deserialize)]
pub struct SymptomCheckRequest {
    #[serde(default)]
    symptoms: Vec<String>,
}

#[derive(Serialize)]
struct SymptomCheckResponse {
    success: bool,
    analysis: String,
}

fn caller(req: &HttpRequest) -> String {
    req.extensions()
        .get::<Claims>()
        .map(|claims| claims.sub.clone())
        .unwrap_or_else(|| "anonymous".to_string())
}

// POST /api/chatbot/chat
pub async fn chat(
    req: HttpRequest,
    gemini: web::Data<GeminiClient>,
    payload: web::Json<ChatRequest>,
) -> Result<HttpResponse, AppError> {
    let prompt = prompts::chat_prompt(&payload.message)?;
    info!("Chat request from {} ({:?})", caller(&req), prompts::classify(&payload.message));

    let response = gemini.ask(&prompt).await?;
    Ok(HttpResponse::Ok().json(ChatResponse { success: true, response }))
}

// POST /api/symptom-checker/analyze
pub async fn analyze_symptoms(
    req: HttpRequest,
    gemini: web::Data<GeminiClient>,
    payload: web::Json<SymptomCheckRequest>,
) -> Result<HttpResponse, AppError> {
    let prompt = prompts::symptom_prompt(&payload.symptoms)?;
    info!("Symptom analysis for {} ({} symptoms)", caller(&req), payload.symptoms.len());

    let analysis = gemini.ask(&prompt).await?;
    Ok(HttpResponse::Ok().json(SymptomCheckResponse { success: true, analysis }))
}

// GET /api/symptom-checker/symptoms-list
pub async fn symptoms_list() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "symptoms": prompts::SYMPTOMS,
        "count": prompts::SYMPTOMS.len(),
    }))
}

// GET /health
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(json!({ "status": "healthy", "service": "Health Assistant API" }))
}
