//! Knockout round dates, counted back from the end of the season.

use chrono::{Duration, NaiveDate};
use tracing::debug;

use crate::constants::DAYS_BETWEEN_KNOCKOUT_ROUNDS;
use crate::error::AppError;
use crate::models::EliminationSchedule;

/// Produces one date per knockout round for a bracket of `team_count` teams.
///
/// The final is played on `season_end_date` and each earlier round one week
/// before the next. Dates are returned earliest first.
///
/// # Errors
/// * `AppError::InvalidInput` - `team_count` is not a power of two greater than one,
///   or the first round would fall before the earliest representable date
pub fn generate_elimination_dates(
    season_end_date: NaiveDate,
    team_count: usize,
) -> Result<EliminationSchedule, AppError> {
    if team_count < 2 || !team_count.is_power_of_two() {
        return Err(AppError::invalid_input(format!(
            "knockout bracket needs a power of two greater than 1 teams, got {team_count}"
        )));
    }

    let rounds = team_count.trailing_zeros() as i64;
    let dates = (0..rounds)
        .rev()
        .map(|weeks_before_final| {
            season_end_date
                .checked_sub_signed(Duration::days(
                    weeks_before_final * DAYS_BETWEEN_KNOCKOUT_ROUNDS,
                ))
                .ok_or_else(|| {
                    AppError::invalid_input(format!(
                        "first knockout round for {team_count} teams would fall before the earliest supported date"
                    ))
                })
        })
        .collect::<Result<Vec<NaiveDate>, AppError>>()?;

    debug!(
        "Knockout bracket for {} teams: {} rounds ending {}",
        team_count, rounds, season_end_date
    );

    Ok(EliminationSchedule::from_dates(dates))
}
