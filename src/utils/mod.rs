pub mod gemini;
pub mod jwt;
pub mod validation;
