use async_trait::async_trait;
use tracing::warn;

use crate::middleware::error::AppResult;

#[async_trait]
pub trait LikeLedgerInterface: Send + Sync {
    /// Reads the counter, creating it at zero when the project was never touched.
    async fn read_likes(&self, project_id: &str) -> AppResult<u32>;
    async fn increment(&self, project_id: &str) -> AppResult<u32>;
    async fn decrement(&self, project_id: &str) -> AppResult<u32>;

    /// Best effort read. The store being unreachable yields zero.
    async fn get_likes(&self, project_id: &str) -> u32 {
        match self.read_likes(project_id).await {
            Ok(likes) => likes,
            Err(err) => {
                warn!("->> get_likes project={project_id} degraded to 0: {err:?}");
                0
            }
        }
    }
}
