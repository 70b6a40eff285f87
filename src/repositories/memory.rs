use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::AppResult;
use crate::repositories::{Record, Repository};

/// In-memory repository for unit testing
///
/// Records are kept ordered by id so `find_all` is deterministic.
#[derive(Clone)]
pub struct InMemoryRepository<T> {
    records: Arc<RwLock<BTreeMap<String, T>>>,
}

impl<T> InMemoryRepository<T> {
    pub fn new() -> Self {
        Self {
            records: Arc::new(RwLock::new(BTreeMap::new())),
        }
    }
}

impl<T> Default for InMemoryRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<T> Repository<T> for InMemoryRepository<T>
where
    T: Record,
{
    async fn find_all(&self) -> AppResult<Vec<T>> {
        let records = self.records.read().await;
        Ok(records.values().cloned().collect())
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<T>> {
        let records = self.records.read().await;
        Ok(records.get(id).cloned())
    }

    async fn save(&self, record: T) -> AppResult<T> {
        let mut records = self.records.write().await;
        records.insert(record.id().to_string(), record.clone());
        Ok(record)
    }

    async fn delete(&self, id: &str) -> AppResult<()> {
        let mut records = self.records.write().await;
        records.remove(id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Cinema;

    fn cinema(id: &str, name: &str) -> Cinema {
        Cinema {
            id: id.to_string(),
            name: name.to_string(),
        }
    }

    #[tokio::test]
    async fn test_find_all_empty() {
        let repo = InMemoryRepository::<Cinema>::new();
        assert!(repo.find_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_save_overwrites_same_id() {
        let repo = InMemoryRepository::new();

        repo.save(cinema("1", "gaumont")).await.unwrap();
        repo.save(cinema("1", "kinepolis")).await.unwrap();

        let all = repo.find_all().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].name, "kinepolis");
    }

    #[tokio::test]
    async fn test_find_by_id_miss() {
        let repo = InMemoryRepository::new();
        repo.save(cinema("1", "gaumont")).await.unwrap();

        assert!(repo.find_by_id("2").await.unwrap().is_none());
        assert_eq!(
            repo.find_by_id("1").await.unwrap(),
            Some(cinema("1", "gaumont"))
        );
    }

    #[tokio::test]
    async fn test_delete_unknown_id_is_ok() {
        let repo = InMemoryRepository::<Cinema>::new();
        assert!(repo.delete("missing").await.is_ok());
    }

    #[tokio::test]
    async fn test_clones_share_storage() {
        let repo = InMemoryRepository::new();
        let other = repo.clone();

        repo.save(cinema("1", "gaumont")).await.unwrap();

        assert_eq!(other.find_all().await.unwrap().len(), 1);
    }
}
