//! League table aggregation.
//!
//! Tables are rebuilt from the complete result list on every call. Nothing
//! here keeps running counters between calls.

use serde::{Deserialize, Serialize};
use std::cmp::Reverse;
use std::collections::HashMap;
use tracing::{debug, warn};

use crate::error::AppError;
use crate::models::{Group, MatchRecord, MatchResult, ScorerLine, TeamId, TeamSeasonStats};

/// Ranked table for one group of a league.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupTable {
    pub name: String,
    pub table: Vec<TeamSeasonStats>,
}

/// Folds `results` into per-team statistics and ranks the teams.
///
/// Every team in `team_ids` appears in the output, including teams without
/// any results. Ordering is points descending, then goal difference
/// descending. Teams level on both keep their relative order from
/// `team_ids`; no further tie-break is applied. Repeated ids in `team_ids`
/// are listed once, at their first position.
///
/// # Errors
/// * `AppError::UnknownTeam` - a result references a team outside `team_ids`
/// * `AppError::InvalidInput` - a result pairs a team against itself, or a
///   team's cumulative goal count does not fit the counters
pub fn compute_table(
    results: &[MatchResult],
    team_ids: &[TeamId],
) -> Result<Vec<TeamSeasonStats>, AppError> {
    let mut positions: HashMap<&TeamId, usize> = HashMap::with_capacity(team_ids.len());
    let mut rows: Vec<TeamSeasonStats> = Vec::with_capacity(team_ids.len());
    for id in team_ids {
        if !positions.contains_key(id) {
            positions.insert(id, rows.len());
            rows.push(TeamSeasonStats::empty(id.clone()));
        }
    }

    for result in results {
        if result.team_a_id == result.team_b_id {
            warn!("Rejecting result of {} against itself", result.team_a_id);
            return Err(AppError::invalid_input(format!(
                "team {} cannot play against itself",
                result.team_a_id
            )));
        }
        let a = lookup(&positions, &result.team_a_id)?;
        let b = lookup(&positions, &result.team_b_id)?;
        rows[a].record(result.goals_a, result.goals_b)?;
        rows[b].record(result.goals_b, result.goals_a)?;
    }

    // Input position is the explicit last key, so equal teams never reorder
    let mut ranked: Vec<(usize, TeamSeasonStats)> = rows.into_iter().enumerate().collect();
    ranked.sort_by_key(|(position, stats)| {
        (Reverse(stats.points), Reverse(stats.goal_difference), *position)
    });

    debug!(
        "Computed table for {} teams from {} results",
        ranked.len(),
        results.len()
    );

    Ok(ranked.into_iter().map(|(_, stats)| stats).collect())
}

fn lookup(positions: &HashMap<&TeamId, usize>, id: &TeamId) -> Result<usize, AppError> {
    positions.get(id).copied().ok_or_else(|| {
        warn!("Result references unknown team {}", id);
        AppError::unknown_team(id.as_str())
    })
}

/// Ranks each group separately with the same rules as [`compute_table`].
///
/// # Errors
/// * `AppError::UnknownTeam` - a result references a team that is in no group
/// * `AppError::InvalidInput` - a team is listed in two groups, or a result
///   pairs teams from different groups
pub fn compute_group_tables(
    results: &[MatchResult],
    groups: &[Group],
) -> Result<Vec<GroupTable>, AppError> {
    let mut group_of: HashMap<&TeamId, usize> = HashMap::new();
    for (index, group) in groups.iter().enumerate() {
        for id in &group.team_ids {
            if let Some(&other) = group_of.get(id)
                && other != index
            {
                return Err(AppError::invalid_input(format!(
                    "team {id} is in both group {} and group {}",
                    groups[other].name, group.name
                )));
            }
            group_of.insert(id, index);
        }
    }

    let mut per_group: Vec<Vec<MatchResult>> = vec![Vec::new(); groups.len()];
    for result in results {
        let a = lookup(&group_of, &result.team_a_id)?;
        let b = lookup(&group_of, &result.team_b_id)?;
        if a != b {
            return Err(AppError::invalid_input(format!(
                "result between {} ({}) and {} ({}) crosses groups",
                result.team_a_id, groups[a].name, result.team_b_id, groups[b].name
            )));
        }
        per_group[a].push(result.clone());
    }

    groups
        .iter()
        .zip(per_group)
        .map(|(group, group_results)| {
            Ok(GroupTable {
                name: group.name.clone(),
                table: compute_table(&group_results, &group.team_ids)?,
            })
        })
        .collect()
}

/// Goals per scorer over all completed matches, knockout matches included.
/// Ordered by goals descending, then player name.
pub fn top_scorers(records: &[MatchRecord]) -> Vec<ScorerLine> {
    let mut tally: HashMap<(&str, &TeamId), u32> = HashMap::new();
    for record in records.iter().filter(|r| r.completed) {
        let sides = [(&record.home, &record.home_goals), (&record.away, &record.away_goals)];
        for (team_id, goals) in sides {
            for goal in goals {
                *tally.entry((goal.player.as_str(), team_id)).or_default() += 1;
            }
        }
    }

    let mut lines: Vec<ScorerLine> = tally
        .into_iter()
        .map(|((player, team_id), goals)| ScorerLine {
            player: player.to_string(),
            team_id: team_id.clone(),
            goals,
        })
        .collect();
    lines.sort_by(|a, b| {
        b.goals
            .cmp(&a.goals)
            .then_with(|| a.player.cmp(&b.player))
            .then_with(|| a.team_id.cmp(&b.team_id))
    });
    lines
}
