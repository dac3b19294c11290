use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::AppError;

/// Name of a knockout round, derived from how many teams are still alive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KnockoutStage {
    Final,
    Semifinal,
    Quarterfinal,
    RoundOf(usize),
}

impl KnockoutStage {
    pub fn for_teams_remaining(teams: usize) -> Self {
        match teams {
            2 => Self::Final,
            4 => Self::Semifinal,
            8 => Self::Quarterfinal,
            n => Self::RoundOf(n),
        }
    }
}

impl fmt::Display for KnockoutStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Final => write!(f, "Final"),
            Self::Semifinal => write!(f, "Semifinal"),
            Self::Quarterfinal => write!(f, "Quarterfinal"),
            Self::RoundOf(n) => write!(f, "Round of {n}"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnockoutRound {
    pub stage: KnockoutStage,
    pub teams_remaining: usize,
    pub date: NaiveDate,
}

/// Most rounds a bracket can have while its team count still fits in `usize`
pub const MAX_KNOCKOUT_ROUNDS: usize = usize::BITS as usize - 1;

/// Knockout round dates, earliest round first and the final last.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "Vec<NaiveDate>", into = "Vec<NaiveDate>")]
pub struct EliminationSchedule {
    dates: Vec<NaiveDate>,
}

impl TryFrom<Vec<NaiveDate>> for EliminationSchedule {
    type Error = AppError;

    fn try_from(dates: Vec<NaiveDate>) -> Result<Self, Self::Error> {
        if dates.len() > MAX_KNOCKOUT_ROUNDS {
            return Err(AppError::invalid_input(format!(
                "knockout schedule has {} rounds, at most {MAX_KNOCKOUT_ROUNDS} are supported",
                dates.len()
            )));
        }
        Ok(Self { dates })
    }
}

impl From<EliminationSchedule> for Vec<NaiveDate> {
    fn from(schedule: EliminationSchedule) -> Self {
        schedule.dates
    }
}

impl EliminationSchedule {
    pub(crate) fn from_dates(dates: Vec<NaiveDate>) -> Self {
        Self { dates }
    }

    pub fn dates(&self) -> &[NaiveDate] {
        &self.dates
    }

    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// Date of the final, if there is a bracket at all
    pub fn final_date(&self) -> Option<NaiveDate> {
        self.dates.last().copied()
    }

    /// Pairs each date with its stage. The first round holds the whole
    /// bracket and every later round halves it.
    pub fn rounds(&self) -> Vec<KnockoutRound> {
        let round_count = self.dates.len();
        self.dates
            .iter()
            .enumerate()
            .map(|(i, &date)| {
                let teams_remaining = 1usize << (round_count - i);
                KnockoutRound {
                    stage: KnockoutStage::for_teams_remaining(teams_remaining),
                    teams_remaining,
                    date,
                }
            })
            .collect()
    }
}
