pub mod fixture;
pub mod knockout;
pub mod results;
pub mod season;
pub mod team;

pub use fixture::Fixture;
pub use knockout::{EliminationSchedule, KnockoutRound, KnockoutStage};
pub use results::{GoalEntry, MatchKind, MatchRecord, MatchResult, ScorerLine, TeamSeasonStats};
pub use season::{League, Season};
pub use team::{Group, Team, TeamId};
