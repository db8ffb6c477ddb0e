use std::collections::HashMap;
use std::sync::Mutex;

use crate::interfaces::client_storage::ClientStorageInterface;
use crate::middleware::error::{AppError, AppResult};

#[derive(Debug)]
pub struct MemoryClientStorage {
    values: Mutex<HashMap<String, String>>,
    available: bool,
}

impl MemoryClientStorage {
    pub fn new() -> Self {
        Self {
            values: Mutex::new(HashMap::new()),
            available: true,
        }
    }

    /// Behaves like a browser in privacy mode: every access is refused.
    pub fn unavailable() -> Self {
        Self {
            values: Mutex::new(HashMap::new()),
            available: false,
        }
    }

    fn guard(&self) -> AppResult<std::sync::MutexGuard<'_, HashMap<String, String>>> {
        if !self.available {
            return Err(AppError::LocalStorageUnavailable {
                source: "storage disabled".to_string(),
            });
        }
        self.values
            .lock()
            .map_err(|e| AppError::LocalStorageUnavailable {
                source: e.to_string(),
            })
    }
}

impl Default for MemoryClientStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl ClientStorageInterface for MemoryClientStorage {
    fn read(&self, key: &str) -> AppResult<Option<String>> {
        Ok(self.guard()?.get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> AppResult<()> {
        self.guard()?.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
