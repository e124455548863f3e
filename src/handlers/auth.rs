use actix_web::{web, HttpResponse};
use actix_web::rt::task::spawn_blocking;
use serde::{Deserialize, Serialize};
use chrono::Utc;
use bcrypt::{hash, verify};
use validator::Validate;
use log::{info, warn};
use uuid::Uuid;
use crate::config::AppConfig;
use crate::db::{run_blocking, require_profile, ProfileStore};
use crate::errors::AppError;
use crate::models::user::{HealthSnapshot, RecommendationLevel, UserRecord, UserView};
use crate::utils::jwt::generate_token;
use crate::utils::validation::{validate_email, validate_payload};

#[derive(Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 1, message = "Username is required"))]
    username: String,

    email: String,

    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    password: String,

    #[validate(range(min = 1, max = 120, message = "Please enter a valid age"))]
    age: i32,

    #[validate(range(min = 1.0, max = 300.0, message = "Please enter a valid weight"))]
    weight: f64,

    #[validate(range(min = 50.0, max = 250.0, message = "Please enter a valid height"))]
    height: f64,

    #[validate(length(min = 1, message = "Gender is required"))]
    gender: String,
}

#[derive(Deserialize)]
pub struct LoginRequest {
    email: String,
    password: String,
}

#[derive(Serialize)]
pub struct AuthResponse {
    success: bool,
    message: String,
    user_data: UserView,
    token: String,
}

fn bmi_of(weight: f64, height: f64) -> f64 {
    let height_m = height / 100.0;
    (weight / (height_m * height_m) * 100.0).round() / 100.0
}

fn issue_token(email: &str, config: &AppConfig) -> Result<String, AppError> {
    generate_token(email, &config.jwt_secret, config.token_ttl_hours)
        .map_err(|_| AppError::InternalServerError("Token generation failed".to_string()))
}

// POST /api/auth/register
pub async fn register(
    req: web::Json<RegisterRequest>,
    store: web::Data<dyn ProfileStore>,
    config: web::Data<AppConfig>,
) -> Result<HttpResponse, AppError> {
    // Validate request
    validate_email(&req.email)?;
    validate_payload(&*req)?;

    let req = req.into_inner();
    let password = req.password.clone();
    let cost = config.bcrypt_cost;

    let password_hash = spawn_blocking(move || hash(&password, cost))
        .await
        .map_err(|_| AppError::InternalServerError("Hashing failed".to_string()))?
        .map_err(|e| AppError::InternalServerError(e.to_string()))?;

    let user = UserRecord {
        user_id: Uuid::now_v7(),
        bmi: bmi_of(req.weight, req.height),
        username: req.username,
        email: req.email,
        password_hash,
        age: req.age,
        weight: req.weight,
        height: req.height,
        gender: req.gender,
        created_at: Utc::now(),
        last_login: None,
        health_data: HealthSnapshot::default(),
        recommendation_level: RecommendationLevel::Basic,
    };

    let store = store.into_inner();
    let stored = user.clone();
    let created = run_blocking(move || store.insert_new(&stored.email, &stored)).await?;
    if !created {
        return Err(AppError::Conflict("Email already registered".to_string()));
    }

    info!("Registered user {}", user.email);
    let token = issue_token(&user.email, &config)?;

    Ok(HttpResponse::Created().json(AuthResponse {
        success: true,
        message: "Registration successful".to_string(),
        user_data: UserView::from(&user),
        token,
    }))
}

// POST /api/auth/login
pub async fn login(
    req: web::Json<LoginRequest>,
    store: web::Data<dyn ProfileStore>,
    config: web::Data<AppConfig>,
) -> Result<HttpResponse, AppError> {
    let req = req.into_inner();
    let store = store.into_inner();

    let lookup_store = store.clone();
    let email = req.email.clone();
    let mut user = run_blocking(move || lookup_store.get(&email))
        .await?
        .ok_or_else(|| {
            warn!("Login attempt for unknown email");
            AppError::Unauthorized("Email not found".to_string())
        })?;

    // Verify password using bcrypt
    let password_hash = user.password_hash.clone();
    let is_valid = spawn_blocking(move || verify(req.password.as_str(), &password_hash))
        .await
        .map_err(|_| AppError::InternalServerError("Password verification error".to_string()))?
        .map_err(|e| AppError::InternalServerError(e.to_string()))?;

    if !is_valid {
        warn!("Invalid password for {}", user.email);
        return Err(AppError::Unauthorized("Invalid password".to_string()));
    }

    user.last_login = Some(Utc::now());
    let stored = user.clone();
    run_blocking(move || store.put(&stored.email, &stored)).await?;

    let token = issue_token(&user.email, &config)?;

    Ok(HttpResponse::Ok().json(AuthResponse {
        success: true,
        message: "Login successful".to_string(),
        user_data: UserView::from(&user),
        token,
    }))
}

// GET /api/auth/user/{email}
pub async fn get_user(
    email: web::Path<String>,
    store: web::Data<dyn ProfileStore>,
) -> Result<HttpResponse, AppError> {
    let store = store.into_inner();
    let email = email.into_inner();
    let user = run_blocking(move || require_profile(&*store, &email)).await?;
    Ok(HttpResponse::Ok().json(UserView::from(&user)))
}
