use crate::middleware::error::AppResult;
use crate::models::view::likes::ProjectLikesView;
use crate::services::like_service::LikeToggle;

/// What a like button shows while talking to the ledger.
///
/// Starts from the server rendered hint, refuses a second toggle while one is
/// in flight and drops results that land after the button went away.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LikeButtonState {
    project_id: String,
    count: u32,
    liked: bool,
    pending: bool,
    mounted: bool,
    error: Option<String>,
}

impl LikeButtonState {
    pub fn new(project_id: &str, initial_hint: Option<u32>, liked: bool) -> Self {
        Self {
            project_id: project_id.to_string(),
            count: initial_hint.unwrap_or(0),
            liked,
            pending: false,
            mounted: true,
            error: None,
        }
    }

    pub fn project_id(&self) -> &str {
        &self.project_id
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    pub fn liked(&self) -> bool {
        self.liked
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_disabled(&self) -> bool {
        self.pending || !self.mounted
    }

    /// A fetch that lands mid-toggle is stale, the toggle result wins.
    pub fn apply_fetch(&mut self, view: &ProjectLikesView) {
        if !self.mounted || self.pending || view.project_id != self.project_id {
            return;
        }
        self.count = view.likes_count;
        self.liked = view.liked;
    }

    /// Returns false when the toggle must not be issued.
    pub fn begin_toggle(&mut self) -> bool {
        if self.is_disabled() {
            return false;
        }
        self.pending = true;
        self.error = None;
        true
    }

    pub fn finish_toggle(&mut self, result: AppResult<LikeToggle>) {
        if !self.mounted {
            return;
        }
        self.pending = false;
        match result {
            Ok(toggle) => {
                self.count = toggle.new_count;
                self.liked = toggle.new_liked_state;
            }
            Err(err) => self.error = Some(err.to_string()),
        }
    }

    pub fn unmount(&mut self) {
        self.mounted = false;
    }
}
