//! Standings cache keyed by the content of the aggregation inputs.
//!
//! A hit only happens when the team list and the result list are exactly the
//! ones the cached table was computed from, so a cached table can never
//! drift from the match history.

use lru::LruCache;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::num::NonZeroUsize;
use tokio::sync::RwLock;
use tracing::debug;

use crate::models::{MatchResult, TeamId, TeamSeasonStats};

#[derive(Debug, Clone)]
struct CachedStandings {
    team_ids: Vec<TeamId>,
    results: Vec<MatchResult>,
    table: Vec<TeamSeasonStats>,
}

#[derive(Debug)]
pub struct StandingsCache {
    entries: RwLock<LruCache<u64, CachedStandings>>,
}

impl StandingsCache {
    /// Creates a cache holding at most `capacity` tables (at least one)
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            entries: RwLock::new(LruCache::new(capacity)),
        }
    }

    fn content_key(team_ids: &[TeamId], results: &[MatchResult]) -> u64 {
        let mut hasher = DefaultHasher::new();
        team_ids.hash(&mut hasher);
        results.hash(&mut hasher);
        hasher.finish()
    }

    /// Returns the table previously computed from exactly these inputs
    pub async fn get(
        &self,
        team_ids: &[TeamId],
        results: &[MatchResult],
    ) -> Option<Vec<TeamSeasonStats>> {
        let key = Self::content_key(team_ids, results);
        let mut entries = self.entries.write().await;
        match entries.get(&key) {
            Some(entry) if entry.team_ids == team_ids && entry.results == results => {
                debug!("Standings cache hit: key={:x}", key);
                Some(entry.table.clone())
            }
            Some(_) => {
                debug!("Standings cache key collision: key={:x}", key);
                None
            }
            None => {
                debug!("Standings cache miss: key={:x}", key);
                None
            }
        }
    }

    pub async fn put(
        &self,
        team_ids: &[TeamId],
        results: &[MatchResult],
        table: Vec<TeamSeasonStats>,
    ) {
        let key = Self::content_key(team_ids, results);
        let entry = CachedStandings {
            team_ids: team_ids.to_vec(),
            results: results.to_vec(),
            table,
        };
        self.entries.write().await.put(key, entry);
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }

    pub async fn clear(&self) {
        self.entries.write().await.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn teams() -> Vec<TeamId> {
        vec![TeamId::from("A"), TeamId::from("B")]
    }

    #[tokio::test]
    async fn test_hit_requires_identical_inputs() {
        let cache = StandingsCache::new(4);
        let results = vec![MatchResult::new("A", "B", 1, 0)];
        let table = vec![TeamSeasonStats::empty(TeamId::from("A"))];

        cache.put(&teams(), &results, table.clone()).await;

        assert_eq!(cache.get(&teams(), &results).await, Some(table));
        let changed = vec![MatchResult::new("A", "B", 2, 0)];
        assert_eq!(cache.get(&teams(), &changed).await, None);
    }

    #[tokio::test]
    async fn test_capacity_evicts_least_recent() {
        let cache = StandingsCache::new(1);
        let first = vec![MatchResult::new("A", "B", 1, 0)];
        let second = vec![MatchResult::new("A", "B", 0, 1)];

        cache.put(&teams(), &first, vec![]).await;
        cache.put(&teams(), &second, vec![]).await;

        assert_eq!(cache.len().await, 1);
        assert!(cache.get(&teams(), &first).await.is_none());
        assert!(cache.get(&teams(), &second).await.is_some());
    }

    #[tokio::test]
    async fn test_zero_capacity_still_holds_one() {
        let cache = StandingsCache::new(0);
        cache.put(&teams(), &[], vec![]).await;
        assert_eq!(cache.len().await, 1);
        cache.clear().await;
        assert!(cache.is_empty().await);
    }
}
