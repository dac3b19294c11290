//! Plain text rendering of plans and tables for terminal output.

use std::collections::HashMap;
use std::fmt::Write;

use crate::constants::DATE_FORMAT;
use crate::models::{ScorerLine, Team, TeamId, TeamSeasonStats};
use crate::scheduler::{GroupTable, SeasonPlan};

const NAME_WIDTH: usize = 20;

/// Resolves team ids to display names, falling back to the id itself
pub struct TeamNames<'a> {
    names: HashMap<&'a TeamId, &'a str>,
}

impl<'a> TeamNames<'a> {
    pub fn new(teams: &'a [Team]) -> Self {
        Self {
            names: teams.iter().map(|t| (&t.id, t.name.as_str())).collect(),
        }
    }

    pub fn get<'b>(&'b self, id: &'b TeamId) -> &'b str {
        self.names.get(id).copied().unwrap_or(id.as_str())
    }
}

fn truncate(name: &str) -> String {
    name.chars().take(NAME_WIDTH).collect()
}

/// Fixtures grouped by round, followed by the knockout dates if any
pub fn render_plan(plan: &SeasonPlan, names: &TeamNames<'_>) -> String {
    let mut out = String::new();
    let mut current_round = None;

    for fixture in &plan.fixtures {
        if current_round != Some(fixture.round) {
            current_round = Some(fixture.round);
            let _ = writeln!(
                out,
                "\nRound {} ({})",
                fixture.round + 1,
                fixture.date.format(DATE_FORMAT)
            );
        }
        let _ = writeln!(
            out,
            "  {:<width$} - {}",
            truncate(names.get(&fixture.home_team_id)),
            truncate(names.get(&fixture.away_team_id)),
            width = NAME_WIDTH
        );
    }

    if !plan.elimination_dates.is_empty() {
        let _ = writeln!(out, "\nKnockout stage");
        for round in plan.elimination_dates.rounds() {
            let _ = writeln!(
                out,
                "  {:<14} {} ({} teams)",
                round.stage.to_string(),
                round.date.format(DATE_FORMAT),
                round.teams_remaining
            );
        }
    }

    out
}

/// League table with one row per team
pub fn render_table(table: &[TeamSeasonStats], names: &TeamNames<'_>) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:>3}  {:<width$} {:>3} {:>3} {:>3} {:>3} {:>4} {:>4} {:>4} {:>4}",
        "#",
        "Team",
        "P",
        "W",
        "D",
        "L",
        "GF",
        "GA",
        "GD",
        "Pts",
        width = NAME_WIDTH
    );
    for (position, row) in table.iter().enumerate() {
        let _ = writeln!(
            out,
            "{:>3}  {:<width$} {:>3} {:>3} {:>3} {:>3} {:>4} {:>4} {:>+4} {:>4}",
            position + 1,
            truncate(names.get(&row.team_id)),
            row.played,
            row.won,
            row.drawn,
            row.lost,
            row.goals_for,
            row.goals_against,
            row.goal_difference,
            row.points,
            width = NAME_WIDTH
        );
    }
    out
}

pub fn render_group_tables(tables: &[GroupTable], names: &TeamNames<'_>) -> String {
    let mut out = String::new();
    for group in tables {
        let _ = writeln!(out, "\nGroup {}", group.name);
        out.push_str(&render_table(&group.table, names));
    }
    out
}

pub fn render_scorers(scorers: &[ScorerLine], names: &TeamNames<'_>) -> String {
    let mut out = String::new();
    for line in scorers {
        let _ = writeln!(
            out,
            "  {:<width$} {:<width$} {:>3}",
            truncate(&line.player),
            truncate(names.get(&line.team_id)),
            line.goals,
            width = NAME_WIDTH
        );
    }
    out
}
