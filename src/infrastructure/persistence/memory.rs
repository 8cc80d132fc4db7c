//! In-memory implementation of the URL repository.
//!
//! Backs handler and service tests that should run without a database. The
//! behavior mirrors [`PgUrlRepository`](super::PgUrlRepository): `short_id`
//! is unique, ids are assigned sequentially, and listing follows insertion
//! order.

use async_trait::async_trait;
use serde_json::json;
use tokio::sync::RwLock;

use crate::domain::repository::UrlRepository;
use crate::domain::url_record::{NewUrl, UrlRecord, UrlUpdate};
use crate::error::AppError;

#[derive(Default)]
struct Inner {
    next_id: i32,
    rows: Vec<UrlRecord>,
}

/// URL repository backed by an in-process table.
#[derive(Default)]
pub struct MemoryUrlRepository {
    inner: RwLock<Inner>,
}

impl MemoryUrlRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

fn conflict(short_id: &str) -> AppError {
    AppError::conflict(
        "Unique constraint violation",
        json!({ "short_id": short_id }),
    )
}

#[async_trait]
impl UrlRepository for MemoryUrlRepository {
    async fn create(&self, new_url: NewUrl) -> Result<UrlRecord, AppError> {
        let mut inner = self.inner.write().await;

        if inner.rows.iter().any(|r| r.short_id == new_url.short_id) {
            return Err(conflict(&new_url.short_id));
        }

        inner.next_id += 1;
        let record = UrlRecord {
            id: inner.next_id,
            short_id: new_url.short_id,
            original_url: new_url.original_url,
        };
        inner.rows.push(record.clone());

        Ok(record)
    }

    async fn find_by_short_id(&self, short_id: &str) -> Result<Option<UrlRecord>, AppError> {
        let inner = self.inner.read().await;
        Ok(inner.rows.iter().find(|r| r.short_id == short_id).cloned())
    }

    async fn list_all(&self) -> Result<Vec<UrlRecord>, AppError> {
        let inner = self.inner.read().await;
        Ok(inner.rows.clone())
    }

    async fn update(
        &self,
        short_id: &str,
        update: UrlUpdate,
    ) -> Result<Option<UrlRecord>, AppError> {
        let mut inner = self.inner.write().await;

        let Some(pos) = inner.rows.iter().position(|r| r.short_id == short_id) else {
            return Ok(None);
        };

        let taken = inner
            .rows
            .iter()
            .enumerate()
            .any(|(i, r)| i != pos && r.short_id == update.short_id);
        if taken {
            return Err(conflict(&update.short_id));
        }

        let row = &mut inner.rows[pos];
        row.original_url = update.original_url;
        row.short_id = update.short_id;

        Ok(Some(row.clone()))
    }

    async fn delete(&self, short_id: &str) -> Result<Option<UrlRecord>, AppError> {
        let mut inner = self.inner.write().await;

        let Some(pos) = inner.rows.iter().position(|r| r.short_id == short_id) else {
            return Ok(None);
        };

        Ok(Some(inner.rows.remove(pos)))
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn new_url(short_id: &str, original_url: &str) -> NewUrl {
        NewUrl {
            short_id: short_id.to_string(),
            original_url: original_url.to_string(),
        }
    }

    #[tokio::test]
    async fn create_assigns_sequential_ids() {
        let repo = MemoryUrlRepository::new();

        let first = repo.create(new_url("aaaaaa", "https://a.example")).await.unwrap();
        let second = repo.create(new_url("bbbbbb", "https://b.example")).await.unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
    }

    #[tokio::test]
    async fn create_rejects_duplicate_short_id() {
        let repo = MemoryUrlRepository::new();
        repo.create(new_url("abc123", "https://a.example")).await.unwrap();

        let err = repo
            .create(new_url("abc123", "https://b.example"))
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Conflict { .. }));
    }

    #[tokio::test]
    async fn concurrent_creates_with_same_short_id_yield_one_conflict() {
        let repo = Arc::new(MemoryUrlRepository::new());

        let (a, b) = tokio::join!(
            repo.create(new_url("race00", "https://a.example")),
            repo.create(new_url("race00", "https://b.example")),
        );

        assert_eq!(a.is_ok() as u8 + b.is_ok() as u8, 1);
        let err = if a.is_err() { a.unwrap_err() } else { b.unwrap_err() };
        assert!(matches!(err, AppError::Conflict { .. }));
    }

    #[tokio::test]
    async fn find_returns_none_for_unknown_short_id() {
        let repo = MemoryUrlRepository::new();

        assert!(repo.find_by_short_id("zzzzzz").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn list_preserves_insertion_order() {
        let repo = MemoryUrlRepository::new();
        repo.create(new_url("ccc111", "https://c.example")).await.unwrap();
        repo.create(new_url("ddd222", "https://d.example")).await.unwrap();
        repo.create(new_url("eee333", "https://e.example")).await.unwrap();

        let all = repo.list_all().await.unwrap();
        let ids: Vec<i32> = all.iter().map(|r| r.id).collect();

        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn update_replaces_both_fields() {
        let repo = MemoryUrlRepository::new();
        repo.create(new_url("old000", "https://old.example")).await.unwrap();

        let updated = repo
            .update(
                "old000",
                UrlUpdate {
                    original_url: "https://new.example".to_string(),
                    short_id: "new000".to_string(),
                },
            )
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated.short_id, "new000");
        assert_eq!(updated.original_url, "https://new.example");
        assert!(repo.find_by_short_id("old000").await.unwrap().is_none());
        assert!(repo.find_by_short_id("new000").await.unwrap().is_some());
    }

    #[tokio::test]
    async fn update_keeping_same_short_id_is_not_a_conflict() {
        let repo = MemoryUrlRepository::new();
        repo.create(new_url("keep00", "https://old.example")).await.unwrap();

        let updated = repo
            .update(
                "keep00",
                UrlUpdate {
                    original_url: "https://new.example".to_string(),
                    short_id: "keep00".to_string(),
                },
            )
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated.original_url, "https://new.example");
    }

    #[tokio::test]
    async fn update_onto_taken_short_id_is_a_conflict() {
        let repo = MemoryUrlRepository::new();
        repo.create(new_url("first0", "https://a.example")).await.unwrap();
        repo.create(new_url("second", "https://b.example")).await.unwrap();

        let err = repo
            .update(
                "first0",
                UrlUpdate {
                    original_url: "https://a.example".to_string(),
                    short_id: "second".to_string(),
                },
            )
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Conflict { .. }));
    }

    #[tokio::test]
    async fn update_unknown_short_id_returns_none() {
        let repo = MemoryUrlRepository::new();

        let result = repo
            .update(
                "zzzzzz",
                UrlUpdate {
                    original_url: "https://a.example".to_string(),
                    short_id: "yyyyyy".to_string(),
                },
            )
            .await
            .unwrap();

        assert!(result.is_none());
    }

    #[tokio::test]
    async fn delete_returns_the_removed_record() {
        let repo = MemoryUrlRepository::new();
        repo.create(new_url("gone00", "https://gone.example")).await.unwrap();

        let removed = repo.delete("gone00").await.unwrap().unwrap();

        assert_eq!(removed.short_id, "gone00");
        assert_eq!(removed.original_url, "https://gone.example");
        assert!(repo.find_by_short_id("gone00").await.unwrap().is_none());
        assert!(repo.delete("gone00").await.unwrap().is_none());
    }
}
