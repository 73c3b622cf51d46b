pub mod memory;
pub mod postgres;

use async_trait::async_trait;

use crate::models::Submission;

pub use memory::MemoryStore;
pub use postgres::PgStore;

#[derive(Debug)]
pub enum StoreError {
    InvalidTableName(String),
    Database(sqlx::Error),
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreError::InvalidTableName(name) => write!(f, "Invalid table name: {name:?}"),
            StoreError::Database(err) => write!(f, "Database Error: {err}"),
        }
    }
}

impl std::error::Error for StoreError {}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        StoreError::Database(err)
    }
}

/// Key-value persistence for submissions, keyed by `Submission::id`.
#[async_trait]
pub trait SubmissionStore: Send + Sync {
    /// Insert the record, replacing any existing record with the same id.
    async fn put(&self, submission: &Submission) -> Result<(), StoreError>;
}
