use std::sync::Arc;

use axum::{
    http::{header::CONTENT_TYPE, HeaderValue, Method, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use tower_cookies::CookieManagerLayer;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::warn;

use crate::config::AppConfig;
use crate::middleware::mw_ctx::CtxState;
use crate::routes::likes;

pub fn main_router(ctx_state: &Arc<CtxState>, config: &AppConfig) -> Router {
    let router = Router::new()
        .route("/hc", get(get_hc))
        .merge(likes::routes())
        .with_state(ctx_state.clone())
        .layer(CookieManagerLayer::new())
        .layer(TraceLayer::new_for_http());

    match config
        .allowed_origin
        .as_deref()
        .map(|origin| origin.parse::<HeaderValue>())
    {
        Some(Ok(origin)) => router.layer(
            CorsLayer::new()
                .allow_origin(origin)
                .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
                .allow_headers([CONTENT_TYPE])
                .allow_credentials(true),
        ),
        Some(Err(err)) => {
            warn!("->> ALLOWED_ORIGIN ignored: {err}");
            router
        }
        None => router,
    }
}

async fn get_hc() -> Response {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    (StatusCode::OK, format!("v{}", VERSION)).into_response()
}
