use jsonwebtoken::{encode, decode, Header, Validation, EncodingKey, DecodingKey};
use serde::{Deserialize, Serialize};

use actix_web_httpauth::extractors::bearer::BearerAuth;
use actix_web::dev::ServiceRequest;
use actix_web::{web, Error, HttpMessage};

use crate::config::AppConfig;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    pub sub: String,
    pub exp: usize,
}

/// Generates a JWT token for the given email.
pub fn generate_token(email: &str, secret: &str, ttl_hours: i64) -> Result<String, jsonwebtoken::errors::Error> {
    let expiration = (chrono::Utc::now() + chrono::Duration::hours(ttl_hours)).timestamp() as usize;

    let claims = Claims {
        sub: email.to_string(),
        exp: expiration,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
}

/// Validates a JWT token and returns the claims if valid.
pub fn validate_token(token: &str, secret: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::new(jsonwebtoken::Algorithm::HS256),
    )
    .map(|data| data.claims)
}

/// Validator function for the `HttpAuthentication::bearer` middleware.
/// Valid tokens leave their `Claims` in the request extensions.
pub async fn validator(
    req: ServiceRequest,
    credentials: BearerAuth,
) -> Result<ServiceRequest, (Error, ServiceRequest)> {
    let secret = req
        .app_data::<web::Data<AppConfig>>()
        .map(|config| config.jwt_secret.clone());
    let Some(secret) = secret else {
        return Err((actix_web::error::ErrorInternalServerError("Missing configuration"), req));
    };
    match validate_token(credentials.token(), &secret) {
        Ok(claims) => {
            req.extensions_mut().insert(claims);
            Ok(req)
        }
        Err(_) => Err((actix_web::error::ErrorUnauthorized("Invalid token"), req)),
    }
}
