//! Double round-robin calendar generation using the circle method.
//!
//! Slot 0 holds the first team and never moves; every other slot sits on a
//! ring that rotates by one position per round. With an odd number of teams
//! an extra bye slot joins the ring, and whoever is paired with it rests
//! that round (no fixture is emitted for the pairing).

use chrono::{Duration, NaiveDate};
use tracing::{debug, instrument};

use crate::error::AppError;
use crate::models::{Fixture, Season, TeamId};

/// Builds the full double round-robin calendar for `team_ids` between
/// `start_date` and `end_date`.
///
/// # Errors
/// * `AppError::InvalidInput` - fewer than two distinct teams, a duplicated
///   team id, or `end_date` before `start_date`
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use league_planner::models::TeamId;
/// use league_planner::scheduler::schedule_round_robin;
///
/// let teams: Vec<TeamId> = ["HIFK", "TPS", "Tappara", "Ilves"].into_iter().map(TeamId::from).collect();
/// let start = NaiveDate::from_ymd_opt(2025, 9, 1).unwrap();
/// let end = NaiveDate::from_ymd_opt(2025, 12, 1).unwrap();
///
/// let fixtures = schedule_round_robin(&teams, start, end).unwrap();
/// assert_eq!(fixtures.len(), 12);
/// ```
pub fn schedule_round_robin(
    team_ids: &[TeamId],
    start_date: NaiveDate,
    end_date: NaiveDate,
) -> Result<Vec<Fixture>, AppError> {
    let season = Season::new(team_ids.to_vec(), start_date, end_date)?;
    Ok(schedule_season(&season))
}

/// Same as [`schedule_round_robin`] for an already validated season.
#[instrument(skip(season), fields(teams = season.team_count()))]
pub fn schedule_season(season: &Season) -> Vec<Fixture> {
    let teams = season.team_ids();
    let slot_count = padded_slot_count(teams.len());
    let rounds_per_leg = slot_count - 1;
    let total_rounds = rounds_per_leg * 2;
    let interval_days = round_interval_days(season.span_days(), total_rounds);

    debug!(
        "Scheduling {} teams: {} rounds per leg, {} day(s) between rounds",
        teams.len(),
        rounds_per_leg,
        interval_days
    );

    let round_date =
        |round: usize| season.start_date() + Duration::days(round as i64 * interval_days);

    let mut first_leg = Vec::with_capacity(teams.len() * (teams.len() - 1) / 2);
    for round in 0..rounds_per_leg {
        let date = round_date(round);
        for (home_slot, away_slot) in circle_round(round, slot_count) {
            // Slots past the last team are the bye
            let (Some(home), Some(away)) = (teams.get(home_slot), teams.get(away_slot)) else {
                continue;
            };
            first_leg.push(Fixture {
                home_team_id: home.clone(),
                away_team_id: away.clone(),
                round,
                date,
            });
        }
    }

    let return_leg: Vec<Fixture> = first_leg
        .iter()
        .map(|fixture| {
            let round = fixture.round + rounds_per_leg;
            fixture.reversed(round, round_date(round))
        })
        .collect();

    let mut fixtures = first_leg;
    fixtures.extend(return_leg);

    debug!("Generated {} fixtures", fixtures.len());
    fixtures
}

/// Number of rounds in the double round-robin for `team_count` teams
pub fn total_rounds(team_count: usize) -> usize {
    if team_count < 2 {
        return 0;
    }
    (padded_slot_count(team_count) - 1) * 2
}

fn padded_slot_count(team_count: usize) -> usize {
    team_count + team_count % 2
}

/// Even spacing of rounds over the season. Zero when the span is shorter
/// than the number of rounds, in which case rounds share dates.
fn round_interval_days(span_days: i64, total_rounds: usize) -> i64 {
    if total_rounds == 0 {
        return 0;
    }
    span_days / total_rounds as i64
}

/// Slot pairings for one round of the first leg.
fn circle_round(round: usize, slot_count: usize) -> Vec<(usize, usize)> {
    let ring = slot_count - 1;
    (0..slot_count / 2)
        .map(|m| {
            let home = (round + m) % ring + 1;
            if m == 0 {
                // Alternate the fixed slot between home and away
                if round % 2 == 0 { (0, home) } else { (home, 0) }
            } else {
                let away = (ring - m + round) % ring + 1;
                (home, away)
            }
        })
        .collect()
}
