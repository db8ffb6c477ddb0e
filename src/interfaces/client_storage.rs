use crate::middleware::error::AppResult;

/// Device-local key/value storage of one anonymous visitor.
///
/// Backends return `AppError::LocalStorageUnavailable` when the device refuses
/// access; callers degrade instead of failing.
pub trait ClientStorageInterface {
    fn read(&self, key: &str) -> AppResult<Option<String>>;
    fn write(&self, key: &str, value: &str) -> AppResult<()>;
}
