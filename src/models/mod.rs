pub mod recommendation;
pub mod score;
pub mod user;
