use std::net::{Ipv4Addr, SocketAddr};

use folio_likes::config::AppConfig;
use folio_likes::database::client::{Database, DbConfig};
use folio_likes::init;
use folio_likes::middleware::error::{AppError, AppResult};
use folio_likes::middleware::mw_ctx;
use tokio::signal;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> AppResult<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let config = AppConfig::from_env();

    let _sentry = config.sentry_project_link.as_deref().map(|dsn| {
        sentry::init((
            dsn,
            sentry::ClientOptions {
                release: sentry::release_name!(),
                ..Default::default()
            },
        ))
    });

    let db = Database::connect(DbConfig {
        url: &config.db_url,
        database: &config.db_database,
        namespace: &config.db_namespace,
        password: config.db_password.as_deref(),
        username: config.db_username.as_deref(),
        tx_retries: config.like_tx_retries,
    })
    .await?;

    db.run_migrations().await?;

    let ctx_state = mw_ctx::create_ctx_state(db, &config);
    let routes_all = init::main_router(&ctx_state, &config);

    let addr = SocketAddr::from((Ipv4Addr::UNSPECIFIED, config.port));
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::Generic {
            description: e.to_string(),
        })?;
    info!("->> LISTENING on {addr}");

    axum::serve(listener, routes_all.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::Generic {
            description: e.to_string(),
        })?;

    info!("->> server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if signal::ctrl_c().await.is_ok() {
            info!("->> received Ctrl+C, shutting down");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut term) => {
                term.recv().await;
                info!("->> received terminate signal, shutting down");
            }
            Err(_) => std::future::pending::<()>().await,
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
