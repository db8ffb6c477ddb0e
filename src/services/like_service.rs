use futures::future::join_all;
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};

use crate::{
    interfaces::{
        client_storage::ClientStorageInterface, repositories::like_counter::LikeLedgerInterface,
    },
    middleware::error::{AppError, AppResult},
    models::view::likes::ProjectLikesView,
    services::client_like_state::ClientLikeState,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LikeToggle {
    pub new_count: u32,
    pub new_liked_state: bool,
}

/// Entry point of the like button.
///
/// Two toggles for the same project from the same device must not overlap:
/// both would read the same local state and count twice. Callers disable the
/// control while a toggle is in flight (see `LikeButtonState`).
pub struct LikeService<'a, L, S>
where
    L: LikeLedgerInterface,
    S: ClientStorageInterface,
{
    ledger: &'a L,
    client_state: ClientLikeState<'a, S>,
}

impl<'a, L, S> LikeService<'a, L, S>
where
    L: LikeLedgerInterface,
    S: ClientStorageInterface,
{
    pub fn new(ledger: &'a L, storage: &'a S) -> Self {
        Self {
            ledger,
            client_state: ClientLikeState::new(storage),
        }
    }

    pub async fn get_likes(&self, project_id: &str) -> ProjectLikesView {
        let liked = self.client_state.has_liked(project_id);
        let likes_count = self.ledger.get_likes(project_id).await;
        ProjectLikesView {
            project_id: project_id.to_string(),
            likes_count,
            liked,
        }
    }

    pub async fn get_likes_many(&self, project_ids: &[String]) -> Vec<ProjectLikesView> {
        let liked = self.client_state.liked_projects();
        let counts = join_all(project_ids.iter().map(|id| self.ledger.get_likes(id))).await;
        project_ids
            .iter()
            .zip(counts)
            .map(|(id, likes_count)| ProjectLikesView {
                project_id: id.clone(),
                likes_count,
                liked: liked.contains(id),
            })
            .collect()
    }

    pub async fn toggle_like(&self, project_id: &str) -> AppResult<LikeToggle> {
        let was_liked = self.client_state.has_liked(project_id);

        let res = if was_liked {
            self.ledger.decrement(project_id).await
        } else {
            self.ledger.increment(project_id).await
        };

        let new_count = res.map_err(|err| {
            if err.is_store_failure() {
                warn!("->> toggle_like project={project_id} failed, local state kept: {err:?}");
            } else {
                error!("->> toggle_like project={project_id} unexpected ledger error: {err:?}");
            }
            AppError::LikeUpdateFail {
                project_id: project_id.to_string(),
                reason: err.to_string(),
            }
        })?;

        let new_liked_state = !was_liked;
        self.client_state.set_liked(project_id, new_liked_state);
        info!("->> toggle_like project={project_id} liked={new_liked_state} count={new_count}");

        Ok(LikeToggle {
            new_count,
            new_liked_state,
        })
    }
}
