use async_trait::async_trait;
use dashmap::DashMap;

use crate::models::Submission;

use super::{StoreError, SubmissionStore};

/// Process-local store. Contents are lost on restart.
#[derive(Default)]
pub struct MemoryStore {
    items: DashMap<String, Submission>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            items: DashMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<Submission> {
        self.items.get(id).map(|entry| entry.value().clone())
    }

    pub fn all(&self) -> Vec<Submission> {
        self.items.iter().map(|entry| entry.value().clone()).collect()
    }
}

#[async_trait]
impl SubmissionStore for MemoryStore {
    async fn put(&self, submission: &Submission) -> Result<(), StoreError> {
        self.items.insert(submission.id.clone(), submission.clone());
        Ok(())
    }
}
