use league_planner::models::{Fixture, TeamId};
use league_planner::scheduler::{generate_elimination_dates, schedule_round_robin, total_rounds};
use league_planner::testing_utils::TestDataBuilder;
use league_planner::AppError;
use std::collections::{BTreeSet, HashMap, HashSet};

fn ordered_pairs(fixtures: &[Fixture]) -> HashMap<(TeamId, TeamId), usize> {
    let mut counts = HashMap::new();
    for fixture in fixtures {
        *counts
            .entry((fixture.home_team_id.clone(), fixture.away_team_id.clone()))
            .or_insert(0) += 1;
    }
    counts
}

fn unordered_pairs(fixtures: &[Fixture]) -> BTreeSet<(TeamId, TeamId, usize)> {
    // Each unordered pair with its multiplicity
    let mut counts: HashMap<(TeamId, TeamId), usize> = HashMap::new();
    for fixture in fixtures {
        let (a, b) = if fixture.home_team_id < fixture.away_team_id {
            (fixture.home_team_id.clone(), fixture.away_team_id.clone())
        } else {
            (fixture.away_team_id.clone(), fixture.home_team_id.clone())
        };
        *counts.entry((a, b)).or_insert(0) += 1;
    }
    counts.into_iter().map(|((a, b), n)| (a, b, n)).collect()
}

/// Every ordered pair of distinct teams plays exactly once, for even and odd counts
#[test]
fn test_every_ordered_pair_exactly_once() {
    let start = TestDataBuilder::date(2025, 1, 1);
    let end = TestDataBuilder::date(2025, 12, 31);

    for n in 2..=16 {
        let teams = TestDataBuilder::team_ids(n);
        let fixtures = schedule_round_robin(&teams, start, end).unwrap();

        assert_eq!(fixtures.len(), n * (n - 1), "n={n}");

        let counts = ordered_pairs(&fixtures);
        assert_eq!(counts.len(), n * (n - 1), "n={n}");
        for home in &teams {
            for away in &teams {
                if home == away {
                    continue;
                }
                assert_eq!(
                    counts.get(&(home.clone(), away.clone())),
                    Some(&1),
                    "n={n} {home} vs {away}"
                );
            }
        }
        assert!(fixtures.iter().all(|f| f.home_team_id != f.away_team_id));
    }
}

#[test]
fn test_return_leg_mirrors_first_leg() {
    let teams = TestDataBuilder::team_ids(6);
    let fixtures = schedule_round_robin(
        &teams,
        TestDataBuilder::date(2025, 1, 1),
        TestDataBuilder::date(2025, 6, 1),
    )
    .unwrap();

    let half = fixtures.len() / 2;
    let rounds_per_leg = total_rounds(6) / 2;
    for (first, second) in fixtures[..half].iter().zip(&fixtures[half..]) {
        assert_eq!(first.home_team_id, second.away_team_id);
        assert_eq!(first.away_team_id, second.home_team_id);
        assert_eq!(second.round, first.round + rounds_per_leg);
        assert!(second.date >= first.date);
    }
}

#[test]
fn test_permutation_changes_rounds_not_coverage() {
    let start = TestDataBuilder::date(2025, 1, 1);
    let end = TestDataBuilder::date(2025, 8, 1);
    let teams = TestDataBuilder::team_ids(8);
    let mut permuted = teams.clone();
    permuted.reverse();
    permuted.swap(0, 3);

    let original = schedule_round_robin(&teams, start, end).unwrap();
    let shuffled = schedule_round_robin(&permuted, start, end).unwrap();

    assert_eq!(unordered_pairs(&original), unordered_pairs(&shuffled));
    assert_ne!(original, shuffled);
}

#[test]
fn test_rounds_are_conflict_free() {
    let teams = TestDataBuilder::team_ids(9);
    let fixtures = schedule_round_robin(
        &teams,
        TestDataBuilder::date(2025, 1, 1),
        TestDataBuilder::date(2025, 12, 1),
    )
    .unwrap();

    for round in 0..total_rounds(9) {
        let mut playing = HashSet::new();
        let in_round: Vec<_> = fixtures.iter().filter(|f| f.round == round).collect();
        // One team rests each round with an odd count
        assert_eq!(in_round.len(), 4);
        for fixture in in_round {
            assert!(playing.insert(&fixture.home_team_id));
            assert!(playing.insert(&fixture.away_team_id));
        }
    }
}

#[test]
fn test_round_dates_never_pass_season_end() {
    for (n, days) in [(2, 1), (4, 5), (10, 200), (7, 13)] {
        let start = TestDataBuilder::date(2025, 3, 1);
        let end = start + chrono::Duration::days(days);
        let fixtures = schedule_round_robin(&TestDataBuilder::team_ids(n), start, end).unwrap();
        assert!(fixtures.iter().all(|f| f.date >= start && f.date <= end), "n={n}");
        // Dates follow round order
        for pair in fixtures.windows(2) {
            if pair[0].round <= pair[1].round {
                assert!(pair[0].date <= pair[1].date);
            }
        }
    }
}

#[test]
fn test_fewer_than_two_teams_fails() {
    let start = TestDataBuilder::date(2025, 1, 1);
    let end = TestDataBuilder::date(2025, 2, 1);

    for n in 0..2 {
        let err = schedule_round_robin(&TestDataBuilder::team_ids(n), start, end).unwrap_err();
        assert!(matches!(err, AppError::InvalidInput { .. }));
    }
}

#[test]
fn test_eight_team_bracket_dates() {
    let end = TestDataBuilder::date(2025, 6, 28);

    let schedule = generate_elimination_dates(end, 8).unwrap();

    assert_eq!(
        schedule.dates(),
        &[
            end - chrono::Duration::days(14),
            end - chrono::Duration::days(7),
            end
        ]
    );
}

#[test]
fn test_six_team_bracket_fails() {
    let err = generate_elimination_dates(TestDataBuilder::date(2025, 6, 28), 6).unwrap_err();
    assert!(matches!(err, AppError::InvalidInput { .. }));
}
