use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::team::TeamId;
use crate::constants::{POINTS_FOR_DRAW, POINTS_FOR_WIN};
use crate::error::AppError;

/// Final score of one played match, as fed to the standings aggregator.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MatchResult {
    pub team_a_id: TeamId,
    pub team_b_id: TeamId,
    pub goals_a: u32,
    pub goals_b: u32,
}

impl MatchResult {
    pub fn new(
        team_a_id: impl Into<TeamId>,
        team_b_id: impl Into<TeamId>,
        goals_a: u32,
        goals_b: u32,
    ) -> Self {
        Self {
            team_a_id: team_a_id.into(),
            team_b_id: team_b_id.into(),
            goals_a,
            goals_b,
        }
    }
}

/// Cumulative record for one team, always rebuilt from the full result list.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TeamSeasonStats {
    pub team_id: TeamId,
    pub played: u32,
    pub won: u32,
    pub drawn: u32,
    pub lost: u32,
    pub goals_for: u32,
    pub goals_against: u32,
    pub goal_difference: i64,
    pub points: u32,
}

impl TeamSeasonStats {
    pub fn empty(team_id: TeamId) -> Self {
        Self {
            team_id,
            played: 0,
            won: 0,
            drawn: 0,
            lost: 0,
            goals_for: 0,
            goals_against: 0,
            goal_difference: 0,
            points: 0,
        }
    }

    /// Folds one match into the record. `scored`/`conceded` are from this team's side.
    ///
    /// Fails with `InvalidInput` when a counter would overflow; the record is
    /// left unchanged in that case.
    pub(crate) fn record(&mut self, scored: u32, conceded: u32) -> Result<(), AppError> {
        let overflow = || {
            AppError::invalid_input(format!(
                "cumulative statistics for team {} overflow",
                self.team_id
            ))
        };
        let played = self.played.checked_add(1).ok_or_else(overflow)?;
        let goals_for = self.goals_for.checked_add(scored).ok_or_else(overflow)?;
        let goals_against = self
            .goals_against
            .checked_add(conceded)
            .ok_or_else(overflow)?;
        let (won, drawn, lost) = match scored.cmp(&conceded) {
            std::cmp::Ordering::Greater => (self.won + 1, self.drawn, self.lost),
            std::cmp::Ordering::Equal => (self.won, self.drawn + 1, self.lost),
            std::cmp::Ordering::Less => (self.won, self.drawn, self.lost + 1),
        };
        let points = POINTS_FOR_WIN
            .checked_mul(won)
            .and_then(|p| POINTS_FOR_DRAW.checked_mul(drawn)?.checked_add(p))
            .ok_or_else(overflow)?;

        self.played = played;
        self.won = won;
        self.drawn = drawn;
        self.lost = lost;
        self.goals_for = goals_for;
        self.goals_against = goals_against;
        self.goal_difference = i64::from(goals_for) - i64::from(goals_against);
        self.points = points;
        Ok(())
    }
}

/// Kind of a stored match. Only regular matches count toward the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchKind {
    #[default]
    Regular,
    Semifinal,
    Final,
    Knockout,
}

/// One goal in a stored match, credited to the side it is listed under.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GoalEntry {
    pub player: String,
}

/// A stored match with its goal events, as handed over by the result feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRecord {
    pub home: TeamId,
    pub away: TeamId,
    #[serde(default)]
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub kind: MatchKind,
    /// Unplayed matches have no goals yet and must not count as 0-0
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub home_goals: Vec<GoalEntry>,
    #[serde(default)]
    pub away_goals: Vec<GoalEntry>,
}

impl MatchRecord {
    /// The result of a completed regular-season match, if any.
    pub fn result(&self) -> Option<MatchResult> {
        if !self.completed || self.kind != MatchKind::Regular {
            return None;
        }
        Some(MatchResult {
            team_a_id: self.home.clone(),
            team_b_id: self.away.clone(),
            goals_a: goal_count(&self.home_goals),
            goals_b: goal_count(&self.away_goals),
        })
    }
}

fn goal_count(goals: &[GoalEntry]) -> u32 {
    u32::try_from(goals.len()).unwrap_or(u32::MAX)
}

/// One line of the scoring chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScorerLine {
    pub player: String,
    pub team_id: TeamId,
    pub goals: u32,
}
