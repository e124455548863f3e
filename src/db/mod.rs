mod json_store;
mod memory;

pub use json_store::JsonFileStore;
pub use memory::MemoryStore;

use actix_web::web;

use crate::errors::AppError;
use crate::models::user::UserRecord;

/// Keyed storage for user records. Keys are email addresses.
///
/// Implementations are blocking; handlers call them through
/// [`run_blocking`] so the async workers are never stalled on disk I/O.
pub trait ProfileStore: Send + Sync {
    fn get(&self, email: &str) -> Result<Option<UserRecord>, AppError>;

    /// Replaces the whole record stored under `email`. Last write wins.
    fn put(&self, email: &str, record: &UserRecord) -> Result<(), AppError>;

    /// Stores `record` only if `email` is unused. Returns `false` when the key
    /// already exists.
    fn insert_new(&self, email: &str, record: &UserRecord) -> Result<bool, AppError>;
}

/// Runs `f` on the blocking thread pool and flattens the pool error into `AppError`.
pub async fn run_blocking<F, R>(f: F) -> Result<R, AppError>
where
    F: FnOnce() -> Result<R, AppError> + Send + 'static,
    R: Send + 'static,
{
    web::block(f)
        .await
        .map_err(|_| AppError::InternalServerError("Blocking task failed".to_string()))?
}

pub fn require_profile(store: &dyn ProfileStore, email: &str) -> Result<UserRecord, AppError> {
    store
        .get(email)?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))
}
