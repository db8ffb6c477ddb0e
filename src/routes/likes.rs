use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::routing::get;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tower_cookies::Cookies;
use validator::Validate;

use crate::middleware::error::{AppError, CtxResult};
use crate::middleware::mw_ctx::CtxState;
use crate::models::view::likes::ProjectLikesView;
use crate::services::like_service::LikeService;
use crate::utils::client_storage::cookie_client_storage::CookieClientStorage;
use crate::utils::validate_utils::validate_project_id;

const MAX_BATCH_IDS: usize = 100;

pub fn routes() -> Router<Arc<CtxState>> {
    Router::new()
        .route("/api/projects/likes", get(get_many_likes))
        .route(
            "/api/projects/:project_id/likes",
            get(get_likes).post(toggle_like),
        )
}

#[derive(Debug, Deserialize, Validate)]
pub struct ProjectIdInput {
    #[validate(custom(function = validate_project_id))]
    pub project_id: String,
}

#[derive(Debug, Deserialize)]
pub struct GetManyLikesQuery {
    pub ids: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ProjectLikesResponse {
    pub likes_count: u32,
    pub liked: bool,
}

fn checked_project_id(project_id: String) -> Result<String, AppError> {
    let input = ProjectIdInput { project_id };
    input.validate()?;
    Ok(input.project_id)
}

async fn get_likes(
    Path(project_id): Path<String>,
    State(ctx_state): State<Arc<CtxState>>,
    cookies: Cookies,
) -> CtxResult<Json<ProjectLikesResponse>> {
    let project_id = checked_project_id(project_id)?;
    let storage = CookieClientStorage::new(cookies, ctx_state.liked_cookie_max_age_days);
    let view = LikeService::new(&ctx_state.db.like_counters, &storage)
        .get_likes(&project_id)
        .await;

    Ok(Json(ProjectLikesResponse {
        likes_count: view.likes_count,
        liked: view.liked,
    }))
}

async fn toggle_like(
    Path(project_id): Path<String>,
    State(ctx_state): State<Arc<CtxState>>,
    cookies: Cookies,
) -> CtxResult<Json<ProjectLikesResponse>> {
    let project_id = checked_project_id(project_id)?;
    let storage = CookieClientStorage::new(cookies, ctx_state.liked_cookie_max_age_days);
    let toggle = LikeService::new(&ctx_state.db.like_counters, &storage)
        .toggle_like(&project_id)
        .await?;

    Ok(Json(ProjectLikesResponse {
        likes_count: toggle.new_count,
        liked: toggle.new_liked_state,
    }))
}

async fn get_many_likes(
    Query(query): Query<GetManyLikesQuery>,
    State(ctx_state): State<Arc<CtxState>>,
    cookies: Cookies,
) -> CtxResult<Json<Vec<ProjectLikesView>>> {
    let mut project_ids: Vec<String> = Vec::new();
    for id in query.ids.split(',').map(str::trim).filter(|id| !id.is_empty()) {
        let id = checked_project_id(id.to_string())?;
        if !project_ids.contains(&id) {
            project_ids.push(id);
        }
    }

    if project_ids.len() > MAX_BATCH_IDS {
        return Err(AppError::ValidationFail {
            description: format!("At most {MAX_BATCH_IDS} project ids per request"),
        }
        .into());
    }

    let storage = CookieClientStorage::new(cookies, ctx_state.liked_cookie_max_age_days);
    let views = LikeService::new(&ctx_state.db.like_counters, &storage)
        .get_likes_many(&project_ids)
        .await;

    Ok(Json(views))
}
