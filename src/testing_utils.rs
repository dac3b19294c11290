use chrono::NaiveDate;

use crate::models::{GoalEntry, League, MatchKind, MatchRecord, MatchResult, Team, TeamId};

/// Test utilities for creating leagues, teams and results
pub struct TestDataBuilder;

impl TestDataBuilder {
    /// Team ids `T0..T{count-1}`
    pub fn team_ids(count: usize) -> Vec<TeamId> {
        (0..count).map(|i| TeamId::new(format!("T{i}"))).collect()
    }

    /// Teams `T0..T{count-1}` named "Team 0", "Team 1", ...
    pub fn teams(count: usize) -> Vec<Team> {
        (0..count)
            .map(|i| Team::new(format!("T{i}"), format!("Team {i}")))
            .collect()
    }

    pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).expect("valid test date")
    }

    /// A league running from March 1st to June 28th 2025
    pub fn league(id: &str) -> League {
        League {
            id: id.to_string(),
            name: format!("League {id}"),
            start_date: Self::date(2025, 3, 1),
            end_date: Self::date(2025, 6, 28),
        }
    }

    pub fn result(team_a: &str, team_b: &str, goals_a: u32, goals_b: u32) -> MatchResult {
        MatchResult::new(team_a, team_b, goals_a, goals_b)
    }

    /// A completed regular match where every goal is credited to `"{team} scorer"`
    pub fn played_match(home: &str, away: &str, home_goals: usize, away_goals: usize) -> MatchRecord {
        let goals = |team: &str, count: usize| {
            (0..count)
                .map(|_| GoalEntry {
                    player: format!("{team} scorer"),
                })
                .collect()
        };
        MatchRecord {
            home: TeamId::from(home),
            away: TeamId::from(away),
            date: None,
            kind: MatchKind::Regular,
            completed: true,
            home_goals: goals(home, home_goals),
            away_goals: goals(away, away_goals),
        }
    }

    /// A scheduled match that has not been played yet
    pub fn upcoming_match(home: &str, away: &str) -> MatchRecord {
        MatchRecord {
            home: TeamId::from(home),
            away: TeamId::from(away),
            date: None,
            kind: MatchKind::Regular,
            completed: false,
            home_goals: vec![],
            away_goals: vec![],
        }
    }
}
