use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::team::TeamId;

/// A single scheduled round-robin match.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Fixture {
    pub home_team_id: TeamId,
    pub away_team_id: TeamId,
    /// Zero-based round number across both legs
    pub round: usize,
    pub date: NaiveDate,
}

impl Fixture {
    /// The same pairing with home and away swapped, used for the return leg
    pub fn reversed(&self, round: usize, date: NaiveDate) -> Self {
        Self {
            home_team_id: self.away_team_id.clone(),
            away_team_id: self.home_team_id.clone(),
            round,
            date,
        }
    }
}
