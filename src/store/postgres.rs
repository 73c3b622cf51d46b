use async_trait::async_trait;
use sqlx::PgPool;

use crate::models::Submission;

use super::{StoreError, SubmissionStore};

/// Postgres caps identifiers at 63 bytes.
const MAX_TABLE_NAME_LEN: usize = 63;

pub struct PgStore {
    pool: PgPool,
    table_name: String,
    upsert_sql: String,
}

impl PgStore {
    pub fn new(pool: PgPool, table_name: &str) -> Result<Self, StoreError> {
        validate_table_name(table_name)?;

        let upsert_sql = format!(
            "INSERT INTO \"{table_name}\" (id, name, email, message, submitted_at)
             VALUES ($1, $2, $3, $4, $5)
             ON CONFLICT (id) DO UPDATE SET
                name = EXCLUDED.name,
                email = EXCLUDED.email,
                message = EXCLUDED.message,
                submitted_at = EXCLUDED.submitted_at"
        );

        Ok(Self {
            pool,
            table_name: table_name.to_string(),
            upsert_sql,
        })
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    pub fn table_name(&self) -> &str {
        &self.table_name
    }

    /// Create the submissions table if it does not exist yet.
    pub async fn ensure_table(&self) -> Result<(), StoreError> {
        sqlx::query(&format!(
            "CREATE TABLE IF NOT EXISTS \"{}\" (
                id TEXT PRIMARY KEY,
                name JSONB,
                email JSONB,
                message JSONB,
                submitted_at TEXT NOT NULL
            )",
            self.table_name
        ))
        .execute(&self.pool)
        .await?;
        Ok(())
    }
}

#[async_trait]
impl SubmissionStore for PgStore {
    async fn put(&self, submission: &Submission) -> Result<(), StoreError> {
        sqlx::query(&self.upsert_sql)
            .bind(&submission.id)
            .bind(&submission.name)
            .bind(&submission.email)
            .bind(&submission.message)
            .bind(&submission.submitted_at)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}

/// Table names are interpolated into SQL, so only a conservative charset is accepted.
pub fn validate_table_name(name: &str) -> Result<(), StoreError> {
    let valid = !name.is_empty()
        && name.len() <= MAX_TABLE_NAME_LEN
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');

    if valid {
        Ok(())
    } else {
        Err(StoreError::InvalidTableName(name.to_string()))
    }
}
