use std::collections::BTreeMap;
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use log::error;
use tempfile::NamedTempFile;

use crate::db::ProfileStore;
use crate::errors::AppError;
use crate::models::user::UserRecord;

type UserMap = BTreeMap<String, UserRecord>;

/// All users in a single JSON object keyed by email.
///
/// Every call loads the whole file, and writes replace it atomically through a
/// temp file in the same directory. The mutex only orders writers inside this
/// process.
pub struct JsonFileStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        JsonFileStore { path: path.into(), write_lock: Mutex::new(()) }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<UserMap, AppError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(UserMap::new()),
            Err(e) => {
                error!("Failed to read {}: {}", self.path.display(), e);
                return Err(AppError::Storage("Failed to read user data".to_string()));
            }
        };
        if raw.trim().is_empty() {
            return Ok(UserMap::new());
        }
        serde_json::from_str(&raw).map_err(|e| {
            error!("Corrupt user data in {}: {}", self.path.display(), e);
            AppError::Storage("User data is unreadable".to_string())
        })
    }

    fn save(&self, users: &UserMap) -> Result<(), AppError> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        let body = serde_json::to_vec_pretty(users)
            .map_err(|e| AppError::Storage(format!("Failed to encode user data: {}", e)))?;

        let mut tmp = NamedTempFile::new_in(&dir).map_err(|e| {
            error!("Failed to create temp file in {}: {}", dir.display(), e);
            AppError::Storage("Failed to save user data".to_string())
        })?;
        tmp.write_all(&body)
            .and_then(|_| tmp.as_file().sync_all())
            .map_err(|e| {
                error!("Failed to write user data: {}", e);
                AppError::Storage("Failed to save user data".to_string())
            })?;
        tmp.persist(&self.path).map_err(|e| {
            error!("Failed to replace {}: {}", self.path.display(), e);
            AppError::Storage("Failed to save user data".to_string())
        })?;
        Ok(())
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, ()>, AppError> {
        self.write_lock
            .lock()
            .map_err(|_| AppError::Storage("Profile store lock poisoned".to_string()))
    }
}

impl ProfileStore for JsonFileStore {
    fn get(&self, email: &str) -> Result<Option<UserRecord>, AppError> {
        Ok(self.load()?.remove(email))
    }

    fn put(&self, email: &str, record: &UserRecord) -> Result<(), AppError> {
        let _guard = self.lock()?;
        let mut users = self.load()?;
        users.insert(email.to_string(), record.clone());
        self.save(&users)
    }

    fn insert_new(&self, email: &str, record: &UserRecord) -> Result<bool, AppError> {
        let _guard = self.lock()?;
        let mut users = self.load()?;
        if users.contains_key(email) {
            return Ok(false);
        }
        users.insert(email.to_string(), record.clone());
        self.save(&users)?;
        Ok(true)
    }
}
