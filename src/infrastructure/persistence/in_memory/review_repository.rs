//! # In-Memory Review Repository
//!
//! In-memory implementation of [`ReviewRepository`].
//!
//! Same shape as the movie info store: a thread-safe `HashMap` keyed by
//! review id, with a secondary scan for the by-movie filter.

use crate::domain::entities::Review;
use crate::domain::value_objects::{MovieInfoId, ReviewId};
use crate::infrastructure::persistence::traits::{RepositoryResult, ReviewRepository};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// In-memory implementation of [`ReviewRepository`].
#[derive(Debug, Clone)]
pub struct InMemoryReviewRepository {
    storage: Arc<RwLock<HashMap<ReviewId, Review>>>,
}

impl InMemoryReviewRepository {
    /// Creates a new empty in-memory review repository.
    #[must_use]
    pub fn new() -> Self {
        Self {
            storage: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Returns the number of reviews in the repository.
    #[must_use]
    pub fn len(&self) -> usize {
        self.storage
            .try_read()
            .map(|guard| guard.len())
            .unwrap_or(0)
    }

    /// Returns true if the repository is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Clears all reviews from the repository.
    pub async fn clear(&self) {
        let mut storage = self.storage.write().await;
        storage.clear();
    }
}

impl Default for InMemoryReviewRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ReviewRepository for InMemoryReviewRepository {
    async fn save(&self, review: &Review) -> RepositoryResult<Review> {
        let mut stored = review.clone();
        let id = match stored.review_id.clone() {
            Some(id) => id,
            None => {
                let id = ReviewId::generate();
                stored.review_id = Some(id.clone());
                id
            }
        };

        let mut storage = self.storage.write().await;
        storage.insert(id, stored.clone());
        Ok(stored)
    }

    async fn get(&self, id: &ReviewId) -> RepositoryResult<Option<Review>> {
        let storage = self.storage.read().await;
        Ok(storage.get(id).cloned())
    }

    async fn get_all(&self) -> RepositoryResult<Vec<Review>> {
        let storage = self.storage.read().await;
        Ok(storage.values().cloned().collect())
    }

    async fn find_by_movie_info(&self, id: &MovieInfoId) -> RepositoryResult<Vec<Review>> {
        let storage = self.storage.read().await;
        let matches: Vec<Review> = storage
            .values()
            .filter(|r| r.movie_info_id.as_ref() == Some(id))
            .cloned()
            .collect();
        Ok(matches)
    }

    async fn delete(&self, id: &ReviewId) -> RepositoryResult<bool> {
        let mut storage = self.storage.write().await;
        Ok(storage.remove(id).is_some())
    }

    async fn count(&self) -> RepositoryResult<u64> {
        let storage = self.storage.read().await;
        Ok(storage.len() as u64)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn create_test_review(movie_info_id: &str, rating: f64) -> Review {
        Review::new(MovieInfoId::new(movie_info_id), "solid movie", rating)
    }

    #[tokio::test]
    async fn new_repository_is_empty() {
        let repo = InMemoryReviewRepository::new();
        assert!(repo.is_empty());
        assert_eq!(repo.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn save_assigns_identifier_when_absent() {
        let repo = InMemoryReviewRepository::new();

        let stored = repo.save(&create_test_review("abc", 9.0)).await.unwrap();

        let id = stored.id().cloned().unwrap();
        let retrieved = repo.get(&id).await.unwrap();
        assert_eq!(retrieved, Some(stored));
    }

    #[tokio::test]
    async fn save_keeps_given_identifier() {
        let repo = InMemoryReviewRepository::new();
        let review = create_test_review("abc", 9.0).with_id(ReviewId::new("r1"));

        let stored = repo.save(&review).await.unwrap();

        assert_eq!(stored.id().map(ReviewId::as_str), Some("r1"));
        assert_eq!(repo.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn get_nonexistent_returns_none() {
        let repo = InMemoryReviewRepository::new();
        let id = ReviewId::new("nonexistent");

        let result = repo.get(&id).await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn find_by_movie_info() {
        let repo = InMemoryReviewRepository::new();

        repo.save(&create_test_review("abc", 9.0)).await.unwrap();
        repo.save(&create_test_review("abc", 8.0)).await.unwrap();
        repo.save(&create_test_review("def", 7.0)).await.unwrap();

        let for_abc = repo
            .find_by_movie_info(&MovieInfoId::new("abc"))
            .await
            .unwrap();
        assert_eq!(for_abc.len(), 2);

        let for_other = repo
            .find_by_movie_info(&MovieInfoId::new("ghost"))
            .await
            .unwrap();
        assert!(for_other.is_empty());
    }

    #[tokio::test]
    async fn delete() {
        let repo = InMemoryReviewRepository::new();
        let stored = repo.save(&create_test_review("abc", 9.0)).await.unwrap();
        let id = stored.id().cloned().unwrap();

        let deleted = repo.delete(&id).await.unwrap();
        assert!(deleted);
        assert_eq!(repo.count().await.unwrap(), 0);

        let deleted_again = repo.delete(&id).await.unwrap();
        assert!(!deleted_again);
    }

    #[tokio::test]
    async fn clear() {
        let repo = InMemoryReviewRepository::new();

        repo.save(&create_test_review("abc", 9.0)).await.unwrap();
        repo.save(&create_test_review("def", 8.0)).await.unwrap();
        assert_eq!(repo.count().await.unwrap(), 2);

        repo.clear().await;
        assert_eq!(repo.count().await.unwrap(), 0);
    }
}
