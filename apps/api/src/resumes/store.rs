//! Resume store: keyed collection of resume documents.
//!
//! `AppState` holds an `Arc<dyn ResumeStore>`. The only backend today is
//! `MemoryStore` (process-lifetime, no durability); a durable backend only has to
//! implement the trait.

use std::collections::BTreeMap;

use async_trait::async_trait;
use thiserror::Error;
use tokio::sync::Mutex;
use tracing::debug;

use crate::models::resume::{Resume, ResumeDocument};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("resume {0} not found")]
    NotFound(u64),

    #[error("storage backend failure: {0}")]
    Backend(String),
}

#[async_trait]
pub trait ResumeStore: Send + Sync {
    /// Stores `document` under the next sequential id.
    async fn create(&self, document: ResumeDocument) -> Result<Resume, StoreError>;

    async fn get(&self, id: u64) -> Result<Option<Resume>, StoreError>;

    /// All live resumes in insertion order.
    async fn list_all(&self) -> Result<Vec<Resume>, StoreError>;

    /// Replaces the stored document, keeping its id.
    /// Fails with `StoreError::NotFound` when no resume has that id.
    async fn update(&self, id: u64, document: ResumeDocument) -> Result<Resume, StoreError>;

    /// Removes the resume. Deleting an absent id is a no-op.
    async fn delete(&self, id: u64) -> Result<(), StoreError>;
}

struct Table {
    next_id: u64,
    // Ids only ever grow, so key order is insertion order.
    rows: BTreeMap<u64, Resume>,
}

/// In-memory `ResumeStore`. The whole table sits behind one mutex.
pub struct MemoryStore {
    table: Mutex<Table>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            table: Mutex::new(Table {
                next_id: 1,
                rows: BTreeMap::new(),
            }),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ResumeStore for MemoryStore {
    async fn create(&self, document: ResumeDocument) -> Result<Resume, StoreError> {
        let mut table = self.table.lock().await;
        let id = table.next_id;
        table.next_id += 1;

        let resume = Resume { id, document };
        table.rows.insert(id, resume.clone());
        debug!("Stored resume {id}");
        Ok(resume)
    }

    async fn get(&self, id: u64) -> Result<Option<Resume>, StoreError> {
        Ok(self.table.lock().await.rows.get(&id).cloned())
    }

    async fn list_all(&self) -> Result<Vec<Resume>, StoreError> {
        Ok(self.table.lock().await.rows.values().cloned().collect())
    }

    async fn update(&self, id: u64, document: ResumeDocument) -> Result<Resume, StoreError> {
        let mut table = self.table.lock().await;
        let slot = table.rows.get_mut(&id).ok_or(StoreError::NotFound(id))?;
        slot.document = document;
        debug!("Replaced resume {id}");
        Ok(slot.clone())
    }

    async fn delete(&self, id: u64) -> Result<(), StoreError> {
        if self.table.lock().await.rows.remove(&id).is_some() {
            debug!("Deleted resume {id}");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::fixtures::resume_document;

    #[tokio::test]
    async fn test_ids_start_at_one_and_increase() {
        let store = MemoryStore::new();
        let a = store.create(resume_document()).await.unwrap();
        let b = store.create(resume_document()).await.unwrap();
        let c = store.create(resume_document()).await.unwrap();
        assert_eq!((a.id, b.id, c.id), (1, 2, 3));
    }

    #[tokio::test]
    async fn test_ids_are_not_reused_after_delete() {
        let store = MemoryStore::new();
        for _ in 0..3 {
            store.create(resume_document()).await.unwrap();
        }
        store.delete(2).await.unwrap();
        store.delete(3).await.unwrap();

        let next = store.create(resume_document()).await.unwrap();
        assert_eq!(next.id, 4);
    }

    #[tokio::test]
    async fn test_get_returns_created_resume() {
        let store = MemoryStore::new();
        let created = store.create(resume_document()).await.unwrap();
        let fetched = store.get(created.id).await.unwrap();
        assert_eq!(fetched, Some(created));
    }

    #[tokio::test]
    async fn test_get_absent_id() {
        let store = MemoryStore::new();
        assert_eq!(store.get(42).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_list_all_in_insertion_order_without_deleted() {
        let store = MemoryStore::new();
        for _ in 0..3 {
            store.create(resume_document()).await.unwrap();
        }
        store.delete(2).await.unwrap();

        let ids: Vec<u64> = store
            .list_all()
            .await
            .unwrap()
            .iter()
            .map(|r| r.id)
            .collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[tokio::test]
    async fn test_update_replaces_document_and_keeps_id() {
        let store = MemoryStore::new();
        let created = store.create(resume_document()).await.unwrap();

        let mut changed = resume_document();
        changed.skills = vec!["Go".to_string()];
        changed.template = "classic".to_string();

        let updated = store.update(created.id, changed.clone()).await.unwrap();
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.document, changed);
        assert_eq!(store.get(created.id).await.unwrap(), Some(updated));
    }

    #[tokio::test]
    async fn test_update_absent_id_is_not_found_and_creates_nothing() {
        let store = MemoryStore::new();
        let err = store.update(5, resume_document()).await.unwrap_err();
        assert!(matches!(err, StoreError::NotFound(5)));
        assert!(store.list_all().await.unwrap().is_empty());

        let created = store.create(resume_document()).await.unwrap();
        assert_eq!(created.id, 1);
    }

    #[tokio::test]
    async fn test_delete_twice_is_idempotent() {
        let store = MemoryStore::new();
        let created = store.create(resume_document()).await.unwrap();

        assert!(store.delete(created.id).await.is_ok());
        assert_eq!(store.get(created.id).await.unwrap(), None);
        assert!(store.delete(created.id).await.is_ok());
        assert_eq!(store.get(created.id).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_concurrent_creates_get_distinct_ids() {
        let store = std::sync::Arc::new(MemoryStore::new());
        let mut handles = Vec::new();
        for _ in 0..16 {
            let store = store.clone();
            handles.push(tokio::spawn(async move {
                store.create(resume_document()).await.unwrap().id
            }));
        }

        let mut ids = Vec::new();
        for handle in handles {
            ids.push(handle.await.unwrap());
        }
        ids.sort_unstable();
        assert_eq!(ids, (1..=16).collect::<Vec<u64>>());
    }
}
