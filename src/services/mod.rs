pub mod health;
pub mod prompts;
pub mod recommendation;
pub mod score;
pub mod templates;
