//! Application-wide constants
//!
//! Scoring rules, knockout spacing and file locations live here so the
//! scheduling core and the binary agree on them.

/// Points awarded for a win
pub const POINTS_FOR_WIN: u32 = 3;

/// Points awarded for a draw
pub const POINTS_FOR_DRAW: u32 = 1;

/// Days between consecutive knockout rounds
pub const DAYS_BETWEEN_KNOCKOUT_ROUNDS: i64 = 7;

/// Minimum number of distinct teams a round-robin season needs
pub const MIN_SEASON_TEAMS: usize = 2;

/// Default number of standings tables kept in the coordinator cache
pub const DEFAULT_STANDINGS_CACHE_SIZE: usize = 32;

/// File and directory names used by the binary
pub mod paths {
    /// Directory name under the platform config dir
    pub const APP_DIR: &str = "league_planner";

    /// Config file name
    pub const CONFIG_FILE: &str = "config.toml";

    /// Log directory name under the app dir
    pub const LOG_DIR: &str = "logs";

    /// Default log file name
    pub const LOG_FILE: &str = "league_planner.log";
}

/// Environment variables that override config file values
pub mod env_vars {
    pub const LOG_FILE: &str = "LEAGUE_PLANNER_LOG_FILE";
    pub const CACHE_SIZE: &str = "LEAGUE_PLANNER_CACHE_SIZE";
    pub const OUTPUT: &str = "LEAGUE_PLANNER_OUTPUT";
}

/// Date format used in season files and text output
pub const DATE_FORMAT: &str = "%Y-%m-%d";
