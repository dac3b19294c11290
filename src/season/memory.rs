//! In-memory implementation of all three storage collaborators.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

use super::traits::{MatchPersistence, ResultFeed, TeamDirectory};
use crate::error::AppError;
use crate::models::{MatchRecord, Team};
use crate::scheduler::SeasonPlan;

/// Shared map-backed store. Clones share the same data, so one store can be
/// handed to the coordinator in all three roles.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    teams: Arc<RwLock<HashMap<String, Vec<Team>>>>,
    plans: Arc<RwLock<HashMap<String, SeasonPlan>>>,
    records: Arc<RwLock<HashMap<String, Vec<MatchRecord>>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a league with its teams, replacing any earlier team list
    pub async fn set_teams(&self, league_id: &str, teams: Vec<Team>) {
        debug!("Storing {} teams for league {}", teams.len(), league_id);
        self.teams.write().await.insert(league_id.to_string(), teams);
    }

    pub async fn add_record(&self, league_id: &str, record: MatchRecord) {
        self.records
            .write()
            .await
            .entry(league_id.to_string())
            .or_default()
            .push(record);
    }

    pub async fn set_records(&self, league_id: &str, records: Vec<MatchRecord>) {
        self.records
            .write()
            .await
            .insert(league_id.to_string(), records);
    }

    /// The last plan saved for the league
    pub async fn plan(&self, league_id: &str) -> Option<SeasonPlan> {
        self.plans.read().await.get(league_id).cloned()
    }

    async fn ensure_league(&self, league_id: &str) -> Result<(), AppError> {
        if self.teams.read().await.contains_key(league_id) {
            Ok(())
        } else {
            Err(AppError::league_not_found(league_id))
        }
    }
}

#[async_trait]
impl TeamDirectory for MemoryStore {
    async fn season_teams(&self, league_id: &str) -> Result<Vec<Team>, AppError> {
        self.teams
            .read()
            .await
            .get(league_id)
            .cloned()
            .ok_or_else(|| AppError::league_not_found(league_id))
    }
}

#[async_trait]
impl MatchPersistence for MemoryStore {
    async fn save_plan(&self, league_id: &str, plan: &SeasonPlan) -> Result<(), AppError> {
        self.ensure_league(league_id).await?;
        self.plans
            .write()
            .await
            .insert(league_id.to_string(), plan.clone());
        debug!(
            "Stored plan for league {}: {} fixtures",
            league_id,
            plan.fixtures.len()
        );
        Ok(())
    }
}

#[async_trait]
impl ResultFeed for MemoryStore {
    async fn match_records(&self, league_id: &str) -> Result<Vec<MatchRecord>, AppError> {
        self.ensure_league(league_id).await?;
        Ok(self
            .records
            .read()
            .await
            .get(league_id)
            .cloned()
            .unwrap_or_default())
    }
}
