use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectLikesView {
    pub project_id: String,
    pub likes_count: u32,
    pub liked: bool,
}
