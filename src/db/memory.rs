use std::collections::HashMap;
use std::sync::RwLock;

use crate::db::ProfileStore;
use crate::errors::AppError;
use crate::models::user::UserRecord;

/// Process-local store. Contents are lost on restart.
#[derive(Default)]
pub struct MemoryStore {
    users: RwLock<HashMap<String, UserRecord>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned<T>(_: T) -> AppError {
    AppError::Storage("Profile store lock poisoned".to_string())
}

impl ProfileStore for MemoryStore {
    fn get(&self, email: &str) -> Result<Option<UserRecord>, AppError> {
        let users = self.users.read().map_err(poisoned)?;
        Ok(users.get(email).cloned())
    }

    fn put(&self, email: &str, record: &UserRecord) -> Result<(), AppError> {
        let mut users = self.users.write().map_err(poisoned)?;
        users.insert(email.to_string(), record.clone());
        Ok(())
    }

    fn insert_new(&self, email: &str, record: &UserRecord) -> Result<bool, AppError> {
        let mut users = self.users.write().map_err(poisoned)?;
        if users.contains_key(email) {
            return Ok(false);
        }
        users.insert(email.to_string(), record.clone());
        Ok(true)
    }
}
