use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::team::TeamId;
use crate::constants::MIN_SEASON_TEAMS;
use crate::error::AppError;

/// Validated input for one scheduling run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Season {
    team_ids: Vec<TeamId>,
    start_date: NaiveDate,
    end_date: NaiveDate,
}

impl Season {
    /// Checks the season invariants: at least two teams, no duplicate ids,
    /// and a start date that does not come after the end date.
    pub fn new(
        team_ids: Vec<TeamId>,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<Self, AppError> {
        let mut seen = HashSet::with_capacity(team_ids.len());
        for id in &team_ids {
            if !seen.insert(id) {
                return Err(AppError::invalid_input(format!(
                    "team {id} appears more than once"
                )));
            }
        }

        if seen.len() < MIN_SEASON_TEAMS {
            return Err(AppError::invalid_input(format!(
                "a season needs at least {MIN_SEASON_TEAMS} distinct teams, got {}",
                seen.len()
            )));
        }

        if end_date < start_date {
            return Err(AppError::invalid_input(format!(
                "end date {end_date} is before start date {start_date}"
            )));
        }

        Ok(Self {
            team_ids,
            start_date,
            end_date,
        })
    }

    pub fn team_ids(&self) -> &[TeamId] {
        &self.team_ids
    }

    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    pub fn end_date(&self) -> NaiveDate {
        self.end_date
    }

    pub fn team_count(&self) -> usize {
        self.team_ids.len()
    }

    /// Whole days between start and end date
    pub fn span_days(&self) -> i64 {
        (self.end_date - self.start_date).num_days()
    }
}

/// League record as kept by the surrounding storage layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct League {
    pub id: String,
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}
