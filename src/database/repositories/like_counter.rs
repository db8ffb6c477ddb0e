use crate::database::client::Db;
use crate::database::table_names::LIKE_COUNTER_TABLE_NAME;
use crate::entities::like_counter::{likes_to_count, LikeCounter};
use crate::interfaces::repositories::like_counter::LikeLedgerInterface;
use crate::middleware::error::{AppError, AppResult};
use async_trait::async_trait;
use std::sync::Arc;
use strum::Display;
use tracing::{info, warn};

#[derive(Debug, Clone, Copy, Display)]
#[strum(serialize_all = "snake_case")]
enum CounterStep {
    Increment,
    Decrement,
}

impl CounterStep {
    fn set_expr(&self) -> &'static str {
        match self {
            CounterStep::Increment => "likes = (likes ?? 0) + 1",
            CounterStep::Decrement => "likes = math::max([(likes ?? 0) - 1, 0])",
        }
    }
}

#[derive(Debug)]
pub struct LikeCounterRepository {
    client: Arc<Db>,
    tx_retries: u8,
}

impl LikeCounterRepository {
    pub fn new(client: Arc<Db>, tx_retries: u8) -> Self {
        Self { client, tx_retries }
    }

    pub(in crate::database) async fn mutate_db(&self) -> Result<(), AppError> {
        let sql = format!("
    DEFINE TABLE IF NOT EXISTS {LIKE_COUNTER_TABLE_NAME} SCHEMAFULL PERMISSIONS NONE;
    DEFINE FIELD IF NOT EXISTS likes ON TABLE {LIKE_COUNTER_TABLE_NAME} TYPE int DEFAULT 0 ASSERT $value >= 0;
    DEFINE FIELD IF NOT EXISTS updated_at ON TABLE {LIKE_COUNTER_TABLE_NAME} TYPE datetime VALUE time::now();
    ");
        let mutation = self.client.query(sql).await?;
        mutation.check()?;

        Ok(())
    }

    async fn step_once(&self, project_id: &str, step: CounterStep) -> AppResult<u32> {
        let res = self
            .client
            .query(format!(
                "BEGIN TRANSACTION; \
                LET $likes = (UPSERT type::thing('{LIKE_COUNTER_TABLE_NAME}', $project_id) SET {} RETURN VALUE likes); \
                COMMIT TRANSACTION; \
                RETURN $likes;",
                step.set_expr()
            ))
            .bind(("project_id", project_id.to_string()))
            .await?;

        let mut res = res.check()?;
        let last = res.num_statements() - 1;
        let likes = res.take::<Option<i64>>(last)?.unwrap_or(0);
        Ok(likes_to_count(likes))
    }

    /// Runs the step in its own transaction, retrying the losing side of a
    /// write race against the fresh value until the budget is spent.
    async fn step(&self, project_id: &str, step: CounterStep) -> AppResult<u32> {
        let mut attempt: u8 = 0;
        loop {
            match self.step_once(project_id, step).await {
                Err(AppError::TransactionConflict { source }) if attempt < self.tx_retries => {
                    attempt += 1;
                    warn!("->> {step} project={project_id} conflict, retry {attempt}: {source}");
                }
                Ok(likes) => {
                    info!("->> {step} project={project_id} likes={likes}");
                    return Ok(likes);
                }
                Err(err) => return Err(err),
            }
        }
    }
}

#[async_trait]
impl LikeLedgerInterface for LikeCounterRepository {
    async fn read_likes(&self, project_id: &str) -> AppResult<u32> {
        let mut res = self
            .client
            .query(format!(
                "SELECT meta::id(id) AS project_id, likes FROM type::thing('{LIKE_COUNTER_TABLE_NAME}', $project_id);"
            ))
            .bind(("project_id", project_id.to_string()))
            .await?;

        if let Some(counter) = res.take::<Option<LikeCounter>>(0)? {
            return Ok(counter.count());
        }

        // first touch, keeps whatever a concurrent increment already wrote
        let mut res = self
            .client
            .query(format!(
                "UPSERT type::thing('{LIKE_COUNTER_TABLE_NAME}', $project_id) SET likes = likes ?? 0 RETURN VALUE likes;"
            ))
            .bind(("project_id", project_id.to_string()))
            .await?;

        let likes = res.take::<Option<i64>>(0)?.unwrap_or(0);
        Ok(likes_to_count(likes))
    }

    async fn increment(&self, project_id: &str) -> AppResult<u32> {
        self.step(project_id, CounterStep::Increment).await
    }

    async fn decrement(&self, project_id: &str) -> AppResult<u32> {
        self.step(project_id, CounterStep::Decrement).await
    }
}
