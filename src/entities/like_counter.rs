use serde::{Deserialize, Serialize};

/// Remote counter for one project, as stored. `likes` never drops below zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LikeCounter {
    pub project_id: String,
    pub likes: i64,
}

impl LikeCounter {
    pub fn count(&self) -> u32 {
        likes_to_count(self.likes)
    }
}

/// Stored ints are 64 bit, counts shown to visitors saturate at `u32::MAX`.
pub fn likes_to_count(likes: i64) -> u32 {
    u32::try_from(likes.max(0)).unwrap_or(u32::MAX)
}
