use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

pub const LIKED_PROJECTS_KEY: &str = "liked_projects";

/// Projects this device has liked. Persisted as a plain JSON array.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClientLikeRecord {
    pub liked_project_ids: BTreeSet<String>,
}

impl ClientLikeRecord {
    pub fn contains(&self, project_id: &str) -> bool {
        self.liked_project_ids.contains(project_id)
    }

    /// Returns true when the record changed.
    pub fn set(&mut self, project_id: &str, liked: bool) -> bool {
        if liked {
            self.liked_project_ids.insert(project_id.to_string())
        } else {
            self.liked_project_ids.remove(project_id)
        }
    }
}
