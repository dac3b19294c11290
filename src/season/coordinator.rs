//! Season coordination: the only place where the scheduling core meets the
//! storage collaborators.

use tracing::{debug, info, instrument};

use super::cache::StandingsCache;
use super::traits::{MatchPersistence, ResultFeed, TeamDirectory};
use crate::error::AppError;
use crate::models::{Group, League, MatchResult, ScorerLine, TeamId, TeamSeasonStats};
use crate::scheduler::{
    GroupTable, Knockout, SeasonPlan, compute_group_tables, compute_table, plan_season,
    top_scorers,
};

pub struct SeasonCoordinator<D, P, F>
where
    D: TeamDirectory,
    P: MatchPersistence,
    F: ResultFeed,
{
    directory: D,
    persistence: P,
    feed: F,
    standings_cache: StandingsCache,
}

impl<D, P, F> SeasonCoordinator<D, P, F>
where
    D: TeamDirectory,
    P: MatchPersistence,
    F: ResultFeed,
{
    pub fn new(directory: D, persistence: P, feed: F, cache_size: usize) -> Self {
        Self {
            directory,
            persistence,
            feed,
            standings_cache: StandingsCache::new(cache_size),
        }
    }

    /// Plans the league's season and hands the plan to match persistence.
    ///
    /// Called whenever a league is created or its dates change. Nothing is
    /// persisted when planning fails.
    #[instrument(skip(self, league), fields(league_id = %league.id))]
    pub async fn schedule_league(
        &self,
        league: &League,
        knockout: Knockout,
    ) -> Result<SeasonPlan, AppError> {
        let team_ids = self.team_ids(&league.id).await?;
        let plan = plan_season(&team_ids, league.start_date, league.end_date, knockout)?;

        self.persistence.save_plan(&league.id, &plan).await?;
        info!(
            "Scheduled league '{}': {} fixtures, {} knockout rounds",
            league.name,
            plan.fixtures.len(),
            plan.elimination_dates.len()
        );
        Ok(plan)
    }

    /// Current league table, recomputed from the full result snapshot unless
    /// an identical snapshot was aggregated before.
    #[instrument(skip(self, league), fields(league_id = %league.id))]
    pub async fn standings(&self, league: &League) -> Result<Vec<TeamSeasonStats>, AppError> {
        let team_ids = self.team_ids(&league.id).await?;
        let results = self.results(&league.id).await?;

        if let Some(table) = self.standings_cache.get(&team_ids, &results).await {
            return Ok(table);
        }

        let table = compute_table(&results, &team_ids)?;
        self.standings_cache
            .put(&team_ids, &results, table.clone())
            .await;
        Ok(table)
    }

    /// Per-group tables for leagues whose teams are split into groups
    #[instrument(skip(self, league), fields(league_id = %league.id))]
    pub async fn group_standings(&self, league: &League) -> Result<Vec<GroupTable>, AppError> {
        let teams = self.directory.season_teams(&league.id).await?;
        let groups = Group::from_teams(&teams);
        let results = self.results(&league.id).await?;
        compute_group_tables(&results, &groups)
    }

    #[instrument(skip(self, league), fields(league_id = %league.id))]
    pub async fn top_scorers(&self, league: &League) -> Result<Vec<ScorerLine>, AppError> {
        let records = self.feed.match_records(&league.id).await?;
        Ok(top_scorers(&records))
    }

    async fn team_ids(&self, league_id: &str) -> Result<Vec<TeamId>, AppError> {
        let teams = self.directory.season_teams(league_id).await?;
        debug!("Team directory returned {} teams", teams.len());
        Ok(teams.into_iter().map(|team| team.id).collect())
    }

    async fn results(&self, league_id: &str) -> Result<Vec<MatchResult>, AppError> {
        let records = self.feed.match_records(league_id).await?;
        let results: Vec<MatchResult> = records.iter().filter_map(|r| r.result()).collect();
        debug!(
            "Result feed returned {} records, {} countable results",
            records.len(),
            results.len()
        );
        Ok(results)
    }
}
