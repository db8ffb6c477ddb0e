use std::sync::Arc;

use surrealdb::engine::any::{connect, Any};
use surrealdb::opt::auth::Root;
use surrealdb::Surreal;
use tracing::info;

use crate::database::repositories::like_counter::LikeCounterRepository;
use crate::middleware::error::AppResult;

pub type Db = Surreal<Any>;

#[derive(Debug)]
pub struct DbConfig<'a> {
    pub url: &'a str,
    pub database: &'a str,
    pub namespace: &'a str,
    pub username: Option<&'a str>,
    pub password: Option<&'a str>,
    pub tx_retries: u8,
}

#[derive(Debug)]
pub struct Database {
    pub client: Arc<Db>,
    pub like_counters: LikeCounterRepository,
}

impl Database {
    pub async fn connect(config: DbConfig<'_>) -> AppResult<Self> {
        info!("->> connecting DB config = {:?}", config);
        let conn = connect(config.url).await?;

        match (config.password, config.username) {
            (Some(password), Some(username)) => {
                conn.signin(Root { username, password }).await?;
            }
            _ => {}
        }

        conn.use_ns(config.namespace)
            .use_db(config.database)
            .await?;

        let version = conn.version().await?;
        info!("->> connected DB version: {version}");

        let client = Arc::new(conn);
        Ok(Self {
            like_counters: LikeCounterRepository::new(client.clone(), config.tx_retries),
            client,
        })
    }

    pub async fn run_migrations(&self) -> AppResult<()> {
        self.like_counters.mutate_db().await?;
        Ok(())
    }
}
