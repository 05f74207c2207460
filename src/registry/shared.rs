//! Thread-safe handle for using a registry across tasks.
//!
//! [`MatchRegistry`] itself is synchronous and single-threaded. When the
//! embedding application is concurrent (e.g. the registry sits behind an API
//! layer with one handler task per request), every operation must run under a
//! single lock: `update_score` and `complete` are check-then-set sequences
//! that are not safe under interleaved mutation. `SharedRegistry` serializes
//! the whole registry behind one `RwLock`, which is the simplest correct
//! choice given how cheap each operation is.

use std::sync::Arc;
use tokio::sync::RwLock;

use crate::clock::Clock;
use crate::error::Result;
use crate::registry::models::Match;
use crate::registry::MatchRegistry;

/// Cloneable, thread-safe wrapper around a [`MatchRegistry`].
#[derive(Clone)]
pub struct SharedRegistry {
    inner: Arc<RwLock<MatchRegistry>>,
}

impl SharedRegistry {
    pub fn new() -> Self {
        SharedRegistry {
            inner: Arc::new(RwLock::new(MatchRegistry::new())),
        }
    }

    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        SharedRegistry {
            inner: Arc::new(RwLock::new(MatchRegistry::with_clock(clock))),
        }
    }

    pub async fn start_match(&self, home_team: &str, away_team: &str) -> Result<Match> {
        self.inner.write().await.start_match(home_team, away_team)
    }

    pub async fn get(&self, id: u64) -> Result<Match> {
        self.inner.read().await.get(id)
    }

    pub async fn update_score(&self, id: u64, team: &str, score: i32) -> Result<Match> {
        self.inner.write().await.update_score(id, team, score)
    }

    pub async fn complete(&self, id: u64) -> Result<Match> {
        self.inner.write().await.complete(id)
    }

    pub async fn delete(&self, id: u64) {
        self.inner.write().await.delete(id)
    }

    pub async fn scoreboard(&self) -> Vec<Match> {
        self.inner.read().await.scoreboard()
    }

    pub async fn scoreboard_with_limit(&self, limit: i32) -> Result<Vec<Match>> {
        self.inner.read().await.scoreboard_with_limit(limit)
    }

    /// Number of matches currently stored.
    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.is_empty()
    }
}

impl Default for SharedRegistry {
    fn default() -> Self {
        SharedRegistry::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ScoreboardError;
    use crate::registry::models::MatchStatus;

    #[tokio::test]
    async fn test_shared_registry_full_lifecycle() {
        let registry = SharedRegistry::new();

        let m = registry.start_match("Uruguay", "Italy").await.unwrap();
        registry.update_score(m.id, "Uruguay", 2).await.unwrap();
        let updated = registry.update_score(m.id, "Italy", 1).await.unwrap();
        assert_eq!((updated.home_score, updated.away_score), (2, 1));

        let completed = registry.complete(m.id).await.unwrap();
        assert_eq!(completed.status, MatchStatus::Completed);
        assert!(registry.scoreboard().await.is_empty());

        registry.delete(m.id).await;
        assert_eq!(
            registry.get(m.id).await.unwrap_err(),
            ScoreboardError::MatchNotFound(m.id)
        );
    }

    #[tokio::test]
    async fn test_cloned_handles_see_the_same_matches() {
        let registry = SharedRegistry::new();
        let handle = registry.clone();

        let m = registry.start_match("Brazil", "Argentina").await.unwrap();
        assert_eq!(handle.get(m.id).await.unwrap(), m);
        assert_eq!(handle.len().await, 1);
    }

    #[tokio::test]
    async fn test_concurrent_starts_get_distinct_ids() {
        let registry = SharedRegistry::new();

        let tasks: Vec<_> = (0..16)
            .map(|i| {
                let registry = registry.clone();
                tokio::spawn(async move {
                    registry
                        .start_match(&format!("Home{}", i), &format!("Away{}", i))
                        .await
                        .unwrap()
                        .id
                })
            })
            .collect();

        let mut ids = Vec::new();
        for task in tasks {
            ids.push(task.await.unwrap());
        }
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 16);
        assert_eq!(registry.len().await, 16);
    }

    #[tokio::test]
    async fn test_errors_pass_through_the_lock() {
        let registry = SharedRegistry::new();

        let err = registry.start_match("", "Italy").await.unwrap_err();
        assert_eq!(err, ScoreboardError::EmptyTeamName { side: "home" });

        let err = registry.scoreboard_with_limit(0).await.unwrap_err();
        assert_eq!(err, ScoreboardError::InvalidLimit(0));
    }
}
