pub mod test_with_server;

use async_trait::async_trait;
use fake::{faker::lorem::en::Word, Fake};
use folio_likes::config::AppConfig;
use folio_likes::database::client::{Database, DbConfig};
use folio_likes::database::table_names::LIKE_COUNTER_TABLE_NAME;
use folio_likes::interfaces::repositories::like_counter::LikeLedgerInterface;
use folio_likes::middleware::error::{AppError, AppResult};

pub async fn connect_test_db(config: &AppConfig) -> Database {
    let db = Database::connect(DbConfig {
        url: &config.db_url,
        database: &config.db_database,
        namespace: &config.db_namespace,
        password: config.db_password.as_deref(),
        username: config.db_username.as_deref(),
        tx_retries: config.like_tx_retries,
    })
    .await
    .expect("Failed to connect to SurrealDB");

    db.run_migrations().await.expect("migrations");
    db
}

#[allow(dead_code)]
pub fn fake_project_id() -> String {
    let word: String = Word().fake();
    let suffix: u32 = (1000..9999).fake();
    format!("{}-{suffix}", word.to_lowercase())
}

#[allow(dead_code)]
pub async fn seed_likes(db: &Database, project_id: &str, likes: i64) {
    db.client
        .query(format!(
            "UPSERT type::thing('{LIKE_COUNTER_TABLE_NAME}', $project_id) SET likes = $likes;"
        ))
        .bind(("project_id", project_id.to_string()))
        .bind(("likes", likes))
        .await
        .expect("seed likes")
        .check()
        .expect("seed likes statement");
}

#[allow(dead_code)]
pub async fn stored_likes(db: &Database, project_id: &str) -> Option<i64> {
    let mut res = db
        .client
        .query(format!(
            "SELECT VALUE likes FROM type::thing('{LIKE_COUNTER_TABLE_NAME}', $project_id);"
        ))
        .bind(("project_id", project_id.to_string()))
        .await
        .expect("read likes");
    res.take::<Option<i64>>(0).expect("likes value")
}

/// Ledger whose store is never reachable.
#[allow(dead_code)]
pub struct UnreachableLedger;

#[async_trait]
impl LikeLedgerInterface for UnreachableLedger {
    async fn read_likes(&self, _project_id: &str) -> AppResult<u32> {
        Err(AppError::StoreUnavailable {
            source: "connection refused".to_string(),
        })
    }

    async fn increment(&self, _project_id: &str) -> AppResult<u32> {
        Err(AppError::StoreUnavailable {
            source: "connection refused".to_string(),
        })
    }

    async fn decrement(&self, _project_id: &str) -> AppResult<u32> {
        Err(AppError::TransactionConflict {
            source: "retry budget exhausted".to_string(),
        })
    }
}
