use serde::Serialize;
use tracing::info;

use crate::cli::Args;
use crate::config::{Config, OutputFormat};
use crate::error::AppError;
use crate::models::{League, ScorerLine, Team, TeamSeasonStats};
use crate::render::{TeamNames, render_group_tables, render_plan, render_scorers, render_table};
use crate::scheduler::{GroupTable, Knockout, SeasonPlan};
use crate::season::{SeasonCoordinator, TeamDirectory};
use crate::season_file::SeasonFile;

/// Validates command line argument combinations.
///
/// Returns an error if incompatible arguments are used together.
pub fn validate_args(args: &Args) -> Result<(), AppError> {
    if args.qualifiers.is_some() && !args.knockout {
        return Err(AppError::config_error(
            "--qualifiers requires --knockout",
        ));
    }
    if args.knockout && !args.fixtures && args.table {
        return Err(AppError::config_error(
            "--knockout only affects the fixture list; add --fixtures to print it",
        ));
    }
    Ok(())
}

/// Knockout request derived from the command line
pub fn knockout_from_args(args: &Args) -> Knockout {
    match (args.knockout, args.qualifiers) {
        (false, _) => Knockout::Skip,
        (true, None) => Knockout::AllTeams,
        (true, Some(n)) => Knockout::Qualifiers(n),
    }
}

/// Handles the --version command.
pub fn handle_version_command() {
    println!("{} {}", crate::NAME, crate::VERSION);
}

/// Handles the --list-config command.
pub async fn handle_list_config_command() -> Result<(), AppError> {
    Config::display().await
}

/// Handles configuration update commands (--set-log-file, --clear-log-file, --set-cache-size).
pub async fn handle_config_update_command(args: &Args) -> Result<(), AppError> {
    let mut config = Config::load_stored().await?;

    if let Some(new_log_path) = &args.new_log_file_path {
        config.log_file_path = Some(new_log_path.clone());
    } else if args.clear_log_file_path {
        config.log_file_path = None;
        println!("Custom log file path cleared. Using default location.");
    }

    if let Some(size) = args.new_cache_size {
        config.standings_cache_size = size;
    }

    config.validate()?;
    config.save().await?;
    println!("Config updated successfully!");

    Ok(())
}

#[derive(Debug, Serialize)]
struct SeasonReport {
    league: League,
    #[serde(skip_serializing_if = "Option::is_none")]
    plan: Option<SeasonPlan>,
    #[serde(skip_serializing_if = "Option::is_none")]
    table: Option<Vec<TeamSeasonStats>>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    group_tables: Vec<GroupTable>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    top_scorers: Vec<ScorerLine>,
}

/// Handles the --season command: plans the season and prints the requested views.
pub async fn handle_season_command(
    path: &str,
    args: &Args,
    config: &Config,
) -> Result<(), AppError> {
    let file = SeasonFile::load(path).await?;
    let (league, store) = file.into_store().await?;
    let teams: Vec<Team> = store.season_teams(&league.id).await?;

    let coordinator = SeasonCoordinator::new(
        store.clone(),
        store.clone(),
        store,
        config.standings_cache_size,
    );

    let show_fixtures = args.fixtures || !args.table;
    let mut report = SeasonReport {
        league: league.clone(),
        plan: None,
        table: None,
        group_tables: Vec::new(),
        top_scorers: Vec::new(),
    };

    if show_fixtures {
        let plan = coordinator
            .schedule_league(&league, knockout_from_args(args))
            .await?;
        report.plan = Some(plan);
    }

    if args.table {
        report.table = Some(coordinator.standings(&league).await?);
        if teams.iter().any(|t| t.group.is_some()) {
            report.group_tables = coordinator.group_standings(&league).await?;
        }
        report.top_scorers = coordinator.top_scorers(&league).await?;
    }

    info!("Season '{}' processed from {}", league.name, path);

    let format = if args.json {
        OutputFormat::Json
    } else {
        config.output_format
    };
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputFormat::Text => print_text_report(&report, &teams),
    }

    Ok(())
}

fn print_text_report(report: &SeasonReport, teams: &[Team]) {
    let names = TeamNames::new(teams);
    println!(
        "{} ({} - {})",
        report.league.name, report.league.start_date, report.league.end_date
    );

    if let Some(plan) = &report.plan {
        print!("{}", render_plan(plan, &names));
    }
    if let Some(table) = &report.table {
        println!();
        print!("{}", render_table(table, &names));
    }
    if !report.group_tables.is_empty() {
        print!("{}", render_group_tables(&report.group_tables, &names));
    }
    if !report.top_scorers.is_empty() {
        println!("\nTop scorers");
        print!("{}", render_scorers(&report.top_scorers, &names));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_qualifiers_need_knockout() {
        let args = Args {
            qualifiers: Some(4),
            ..Args::default()
        };
        assert!(matches!(validate_args(&args), Err(AppError::Config(_))));
    }

    #[test]
    fn test_knockout_with_table_only_is_rejected() {
        let args = Args {
            knockout: true,
            table: true,
            ..Args::default()
        };
        assert!(validate_args(&args).is_err());

        let args = Args {
            knockout: true,
            table: true,
            fixtures: true,
            ..Args::default()
        };
        assert!(validate_args(&args).is_ok());
    }

    #[test]
    fn test_knockout_from_args() {
        assert_eq!(knockout_from_args(&Args::default()), Knockout::Skip);

        let args = Args {
            knockout: true,
            ..Args::default()
        };
        assert_eq!(knockout_from_args(&args), Knockout::AllTeams);

        let args = Args {
            knockout: true,
            qualifiers: Some(8),
            ..Args::default()
        };
        assert_eq!(knockout_from_args(&args), Knockout::Qualifiers(8));
    }
}
