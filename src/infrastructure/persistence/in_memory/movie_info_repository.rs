//! # In-Memory Movie Info Repository
//!
//! In-memory implementation of [`MovieInfoRepository`].
//!
//! This implementation uses a thread-safe `HashMap` for storage. The
//! movie info service runs on it directly; it is also what the API tests
//! exercise, since no database is involved.

use crate::domain::entities::MovieInfo;
use crate::domain::value_objects::MovieInfoId;
use crate::infrastructure::persistence::traits::{MovieInfoRepository, RepositoryResult};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// In-memory implementation of [`MovieInfoRepository`].
///
/// Uses a thread-safe `HashMap` keyed by movie info id. Cloning is cheap;
/// clones share the same storage.
#[derive(Debug, Clone)]
pub struct InMemoryMovieInfoRepository {
    storage: Arc<RwLock<HashMap<MovieInfoId, MovieInfo>>>,
}

impl InMemoryMovieInfoRepository {
    /// Creates a new empty in-memory movie info repository.
    #[must_use]
    pub fn new() -> Self {
        Self {
            storage: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Returns the number of movie infos in the repository.
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

    /// Clears all movie infos from the repository.
    pub async fn clear(&self) {
        let mut storage = self.storage.write().await;
        storage.clear();
    }
}

impl Default for InMemoryMovieInfoRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MovieInfoRepository for InMemoryMovieInfoRepository {
    async fn save(&self, movie_info: &MovieInfo) -> RepositoryResult<MovieInfo> {
        let mut stored = movie_info.clone();
        let id = match stored.movie_info_id.clone() {
            Some(id) => id,
            None => {
                let id = MovieInfoId::generate();
                stored.movie_info_id = Some(id.clone());
                id
            }
        };

        let mut storage = self.storage.write().await;
        storage.insert(id, stored.clone());
        Ok(stored)
    }

    async fn get(&self, id: &MovieInfoId) -> RepositoryResult<Option<MovieInfo>> {
        let storage = self.storage.read().await;
        Ok(storage.get(id).cloned())
    }

    async fn get_all(&self) -> RepositoryResult<Vec<MovieInfo>> {
        let storage = self.storage.read().await;
        Ok(storage.values().cloned().collect())
    }

    async fn find_by_year(&self, year: i32) -> RepositoryResult<Vec<MovieInfo>> {
        let storage = self.storage.read().await;
        let matches: Vec<MovieInfo> = storage
            .values()
            .filter(|m| m.year == year)
            .cloned()
            .collect();
        Ok(matches)
    }

    async fn delete(&self, id: &MovieInfoId) -> RepositoryResult<bool> {
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
    use chrono::NaiveDate;

    fn create_test_movie_info(title: &str, year: i32) -> MovieInfo {
        MovieInfo::new(
            title,
            year,
            vec!["Christian Bale".to_string()],
            NaiveDate::from_ymd_opt(year, 6, 15).unwrap(),
        )
    }

    #[tokio::test]
    async fn new_repository_is_empty() {
        let repo = InMemoryMovieInfoRepository::new();
        assert!(repo.is_empty());
        assert_eq!(repo.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn save_assigns_identifier_when_absent() {
        let repo = InMemoryMovieInfoRepository::new();

        let stored = repo
            .save(&create_test_movie_info("Batman Begins", 2005))
            .await
            .unwrap();

        let id = stored.id().cloned().unwrap();
        let retrieved = repo.get(&id).await.unwrap();
        assert_eq!(retrieved, Some(stored));
    }

    #[tokio::test]
    async fn save_keeps_given_identifier() {
        let repo = InMemoryMovieInfoRepository::new();
        let movie_info =
            create_test_movie_info("Batman Begins", 2005).with_id(MovieInfoId::new("abc"));

        let stored = repo.save(&movie_info).await.unwrap();

        assert_eq!(stored.id().map(MovieInfoId::as_str), Some("abc"));
        assert_eq!(repo.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn save_replaces_entity_under_same_identifier() {
        let repo = InMemoryMovieInfoRepository::new();
        let id = MovieInfoId::new("abc");

        repo.save(&create_test_movie_info("Batman Begins", 2005).with_id(id.clone()))
            .await
            .unwrap();
        repo.save(&create_test_movie_info("Batman Begins 1", 2005).with_id(id.clone()))
            .await
            .unwrap();

        assert_eq!(repo.count().await.unwrap(), 1);
        let retrieved = repo.get(&id).await.unwrap().unwrap();
        assert_eq!(retrieved.title, "Batman Begins 1");
    }

    #[tokio::test]
    async fn get_nonexistent_returns_none() {
        let repo = InMemoryMovieInfoRepository::new();
        let id = MovieInfoId::new("nonexistent");

        let result = repo.get(&id).await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn get_all() {
        let repo = InMemoryMovieInfoRepository::new();

        repo.save(&create_test_movie_info("Batman Begins", 2005))
            .await
            .unwrap();
        repo.save(&create_test_movie_info("Dark Knight", 2008))
            .await
            .unwrap();

        let all = repo.get_all().await.unwrap();
        assert_eq!(all.len(), 2);
    }

    #[tokio::test]
    async fn find_by_year() {
        let repo = InMemoryMovieInfoRepository::new();

        repo.save(&create_test_movie_info("Batman Begins", 2005))
            .await
            .unwrap();
        repo.save(&create_test_movie_info("Dark Knight", 2008))
            .await
            .unwrap();
        repo.save(&create_test_movie_info("Kingdom of Heaven", 2005))
            .await
            .unwrap();

        let from_2005 = repo.find_by_year(2005).await.unwrap();
        assert_eq!(from_2005.len(), 2);
    }

    #[tokio::test]
    async fn delete() {
        let repo = InMemoryMovieInfoRepository::new();
        let stored = repo
            .save(&create_test_movie_info("Batman Begins", 2005))
            .await
            .unwrap();
        let id = stored.id().cloned().unwrap();

        let deleted = repo.delete(&id).await.unwrap();
        assert!(deleted);
        assert_eq!(repo.count().await.unwrap(), 0);

        let deleted_again = repo.delete(&id).await.unwrap();
        assert!(!deleted_again);
    }

    #[tokio::test]
    async fn clear() {
        let repo = InMemoryMovieInfoRepository::new();

        repo.save(&create_test_movie_info("Batman Begins", 2005))
            .await
            .unwrap();
        repo.save(&create_test_movie_info("Dark Knight", 2008))
            .await
            .unwrap();
        assert_eq!(repo.count().await.unwrap(), 2);

        repo.clear().await;
        assert_eq!(repo.count().await.unwrap(), 0);
    }
}
