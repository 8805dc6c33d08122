//! PostgreSQL Input Log

use sqlx::PgPool;

use crate::domain::input_log::{InputLog, InputRecord};
use crate::error::TutorResult;

/// PostgreSQL-backed submission log
#[derive(Clone)]
pub struct PgInputLog {
    pool: PgPool,
}

impl PgInputLog {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl InputLog for PgInputLog {
    async fn record(&self, entry: &InputRecord) -> TutorResult<()> {
        sqlx::query("INSERT INTO inputs (text, type) VALUES ($1, $2)")
            .bind(&entry.text)
            .bind(&entry.submission_type)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
