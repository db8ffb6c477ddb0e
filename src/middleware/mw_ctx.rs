use std::fmt::{Debug, Formatter};
use std::sync::Arc;

use crate::config::AppConfig;
use crate::database::client::Database;

pub struct CtxState {
    pub db: Database,
    pub liked_cookie_max_age_days: i64,
}

impl Debug for CtxState {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CtxState")
            .field("liked_cookie_max_age_days", &self.liked_cookie_max_age_days)
            .finish_non_exhaustive()
    }
}

pub fn create_ctx_state(db: Database, config: &AppConfig) -> Arc<CtxState> {
    Arc::new(CtxState {
        db,
        liked_cookie_max_age_days: config.liked_cookie_max_age_days,
    })
}
