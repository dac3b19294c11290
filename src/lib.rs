//! League season planning library
//!
//! Generates a conflict-free double round-robin calendar for a set of teams,
//! derives knockout round dates from the season end, and aggregates recorded
//! results into a ranked league table.
//!
//! The [`scheduler`] core is pure: plain values in, plain values out, no
//! storage. [`season::SeasonCoordinator`] connects it to storage through the
//! [`season::TeamDirectory`], [`season::MatchPersistence`] and
//! [`season::ResultFeed`] traits.
//!
//! # Examples
//!
//! ```rust
//! use chrono::NaiveDate;
//! use league_planner::models::{MatchResult, TeamId};
//! use league_planner::scheduler::{Knockout, compute_table, plan_season};
//!
//! let teams: Vec<TeamId> = ["A", "B", "C", "D"].into_iter().map(TeamId::from).collect();
//! let start = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
//! let end = NaiveDate::from_ymd_opt(2025, 6, 28).unwrap();
//!
//! let plan = plan_season(&teams, start, end, Knockout::AllTeams).unwrap();
//! assert_eq!(plan.fixtures.len(), 12);
//! assert_eq!(plan.elimination_dates.final_date(), Some(end));
//!
//! let results = vec![MatchResult::new("A", "B", 2, 1)];
//! let table = compute_table(&results, &teams).unwrap();
//! assert_eq!(table[0].team_id, TeamId::from("A"));
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod constants;
pub mod error;
pub mod logging;
pub mod models;
pub mod render;
pub mod scheduler;
pub mod season;
pub mod season_file;
pub mod testing_utils;

// Re-export commonly used types for convenience
pub use config::Config;
pub use error::AppError;
pub use models::{EliminationSchedule, Fixture, MatchResult, Season, TeamId, TeamSeasonStats};
pub use scheduler::{
    Knockout, SeasonPlan, compute_table, generate_elimination_dates, plan_season,
    schedule_round_robin,
};
pub use season::{MemoryStore, SeasonCoordinator};

/// Current version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
