//! Capability traits for the storage collaborators around the scheduling core.
//!
//! The coordinator only ever sees these traits, so the core can be planned
//! and tested without any database. All methods are keyed by league id.

use async_trait::async_trait;

use crate::error::AppError;
use crate::models::{MatchRecord, Team};
use crate::scheduler::SeasonPlan;

/// Supplies the teams taking part in a league's season.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TeamDirectory: Send + Sync {
    /// Ordered, de-duplicated teams of the league. The order is the order
    /// used for scheduling.
    async fn season_teams(&self, league_id: &str) -> Result<Vec<Team>, AppError>;
}

/// Stores a planned season. Assigning storage identifiers is up to the
/// implementation.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MatchPersistence: Send + Sync {
    /// Replaces any previously stored plan for the league
    async fn save_plan(&self, league_id: &str, plan: &SeasonPlan) -> Result<(), AppError>;
}

/// Supplies stored matches for result aggregation. One call is treated as a
/// complete and consistent snapshot.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ResultFeed: Send + Sync {
    async fn match_records(&self, league_id: &str) -> Result<Vec<MatchRecord>, AppError>;
}
