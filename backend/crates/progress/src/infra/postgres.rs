//! PostgreSQL Repository Implementation
//!
//! The upsert relies on the primary key over (user_id, module_id):
//! `ON CONFLICT .. DO UPDATE` keeps the pair unique under concurrent
//! reports while preserving last-write-wins values.

use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::domain::entities::ProgressRecord;
use crate::domain::repository::ProgressRepository;
use crate::error::ProgressResult;

/// PostgreSQL-backed progress repository
#[derive(Clone)]
pub struct PgProgressRepository {
    pool: PgPool,
}

impl PgProgressRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl ProgressRepository for PgProgressRepository {
    async fn find(&self, user_id: &str, module_id: &str) -> ProgressResult<Option<ProgressRecord>> {
        let row = sqlx::query_as::<_, ProgressRow>(
            r#"
            SELECT user_id, module_id, progress, completion_status, updated_at
            FROM progress
            WHERE user_id = $1 AND module_id = $2
            "#,
        )
        .bind(user_id)
        .bind(module_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|r| r.into_record()))
    }

    async fn upsert(&self, record: &ProgressRecord) -> ProgressResult<()> {
        sqlx::query(
            r#"
            INSERT INTO progress (user_id, module_id, progress, completion_status, updated_at)
            VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT (user_id, module_id)
            DO UPDATE SET
                progress = EXCLUDED.progress,
                completion_status = EXCLUDED.completion_status,
                updated_at = EXCLUDED.updated_at
            "#,
        )
        .bind(&record.user_id)
        .bind(&record.module_id)
        .bind(record.progress)
        .bind(record.completion_status)
        .bind(record.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}

#[derive(sqlx::FromRow)]
struct ProgressRow {
    user_id: String,
    module_id: String,
    progress: f64,
    completion_status: bool,
    updated_at: DateTime<Utc>,
}

impl ProgressRow {
    fn into_record(self) -> ProgressRecord {
        ProgressRecord {
            user_id: self.user_id,
            module_id: self.module_id,
            progress: self.progress,
            completion_status: self.completion_status,
            updated_at: self.updated_at,
        }
    }
}
