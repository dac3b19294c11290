use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::AppError;
use crate::models::{EliminationSchedule, Fixture, Season, TeamId};
use crate::scheduler::elimination::generate_elimination_dates;
use crate::scheduler::round_robin::schedule_season;

/// Whether, and for how many teams, knockout dates are wanted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Knockout {
    /// Round-robin only
    #[default]
    Skip,
    /// Bracket sized for every team in the season
    AllTeams,
    /// Bracket sized for the best `n` teams of the table
    Qualifiers(usize),
}

/// Everything the storage layer needs to persist for a newly planned season.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeasonPlan {
    pub fixtures: Vec<Fixture>,
    pub elimination_dates: EliminationSchedule,
}

/// Plans a season: the double round-robin calendar and, when requested, the
/// knockout round dates ending on `end_date`.
///
/// All validation runs before anything is generated, so an error never
/// leaves a half-built plan behind.
///
/// # Errors
/// * `AppError::InvalidInput` - the season is invalid (see [`Season::new`]),
///   or the requested bracket size is not a power of two greater than one,
///   or asks for more qualifiers than there are teams
pub fn plan_season(
    team_ids: &[TeamId],
    start_date: NaiveDate,
    end_date: NaiveDate,
    knockout: Knockout,
) -> Result<SeasonPlan, AppError> {
    let season = Season::new(team_ids.to_vec(), start_date, end_date)?;
    let bracket_size = bracket_size(&season, knockout)?;

    let elimination_dates = match bracket_size {
        Some(size) => generate_elimination_dates(season.end_date(), size)?,
        None => EliminationSchedule::default(),
    };
    let fixtures = schedule_season(&season);

    info!(
        "Planned season for {} teams: {} fixtures, {} knockout rounds",
        season.team_count(),
        fixtures.len(),
        elimination_dates.len()
    );

    Ok(SeasonPlan {
        fixtures,
        elimination_dates,
    })
}

fn bracket_size(season: &Season, knockout: Knockout) -> Result<Option<usize>, AppError> {
    let size = match knockout {
        Knockout::Skip => return Ok(None),
        Knockout::AllTeams => season.team_count(),
        Knockout::Qualifiers(n) if n > season.team_count() => {
            return Err(AppError::invalid_input(format!(
                "{n} qualifiers requested but the season has only {} teams",
                season.team_count()
            )));
        }
        Knockout::Qualifiers(n) => n,
    };
    debug!("Knockout bracket size {}", size);
    Ok(Some(size))
}
