use tracing::warn;

use crate::entities::client_like_record::{ClientLikeRecord, LIKED_PROJECTS_KEY};
use crate::interfaces::client_storage::ClientStorageInterface;
use crate::middleware::error::AppResult;

/// The anonymous identity of one device: whatever its storage remembers.
/// Not an account. Clearing the storage forgets every like.
pub struct ClientLikeState<'a, S>
where
    S: ClientStorageInterface,
{
    storage: &'a S,
}

impl<'a, S> ClientLikeState<'a, S>
where
    S: ClientStorageInterface,
{
    pub fn new(storage: &'a S) -> Self {
        Self { storage }
    }

    pub fn has_liked(&self, project_id: &str) -> bool {
        match self.load() {
            Ok(record) => record.contains(project_id),
            Err(err) => {
                warn!("->> has_liked project={project_id} storage unavailable: {err:?}");
                false
            }
        }
    }

    pub fn set_liked(&self, project_id: &str, liked: bool) {
        if let Err(err) = self.store(project_id, liked) {
            warn!("->> set_liked project={project_id} liked={liked} not persisted: {err:?}");
        }
    }

    pub fn liked_projects(&self) -> ClientLikeRecord {
        self.load().unwrap_or_default()
    }

    fn load(&self) -> AppResult<ClientLikeRecord> {
        let Some(raw) = self.storage.read(LIKED_PROJECTS_KEY)? else {
            return Ok(ClientLikeRecord::default());
        };
        match serde_json::from_str::<ClientLikeRecord>(&raw) {
            Ok(record) => Ok(record),
            Err(err) => {
                warn!("->> discarding unreadable {LIKED_PROJECTS_KEY}: {err}");
                Ok(ClientLikeRecord::default())
            }
        }
    }

    fn store(&self, project_id: &str, liked: bool) -> AppResult<()> {
        let mut record = self.load()?;
        if !record.set(project_id, liked) {
            return Ok(());
        }
        let raw = serde_json::to_string(&record)?;
        self.storage.write(LIKED_PROJECTS_KEY, &raw)
    }
}
