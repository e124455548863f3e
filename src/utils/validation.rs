use lazy_static::lazy_static;
use regex::Regex;
use validator::Validate;
use crate::errors::AppError;

lazy_static! {
    pub static ref EMAIL_RE: Regex =
        Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").unwrap();
}

pub fn validate_payload<T: Validate>(payload: &T) -> Result<(), AppError> {
    payload.validate()
        .map_err(|err| AppError::BadRequest(err.to_string()))
}

pub fn validate_email(email: &str) -> Result<(), AppError> {
    if !EMAIL_RE.is_match(email) {
        return Err(AppError::validation("email", "Invalid email format"));
    }
    Ok(())
}
