use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    // Scheduling and aggregation validation errors
    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    #[error("Unknown team: {team_id}")]
    UnknownTeam { team_id: String },

    // Collaborator errors (team directory, match persistence, result feed)
    #[error("Storage error: {0}")]
    Storage(String),

    #[error("League not found: {league_id}")]
    LeagueNotFound { league_id: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Date/time parsing error: {0}")]
    DateTimeParse(String),

    #[error("Log setup error: {0}")]
    LogSetup(String),
}

impl AppError {
    /// Create an invalid input error with context
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    /// Create an unknown team error for a team id missing from the known set
    pub fn unknown_team(team_id: impl Into<String>) -> Self {
        Self::UnknownTeam {
            team_id: team_id.into(),
        }
    }

    /// Create a storage error raised by a collaborator implementation
    pub fn storage_error(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }

    /// Create a league not found error
    pub fn league_not_found(league_id: impl Into<String>) -> Self {
        Self::LeagueNotFound {
            league_id: league_id.into(),
        }
    }

    /// Create a configuration error with context
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a date/time parsing error with context
    pub fn datetime_parse_error(msg: impl Into<String>) -> Self {
        Self::DateTimeParse(msg.into())
    }

    /// Create a log setup error with context
    pub fn log_setup_error(msg: impl Into<String>) -> Self {
        Self::LogSetup(msg.into())
    }

    /// Check if error was produced by input validation in the scheduling core.
    /// Retrying these with the same input always reproduces the same error.
    pub fn is_validation_error(&self) -> bool {
        matches!(
            self,
            AppError::InvalidInput { .. } | AppError::UnknownTeam { .. }
        )
    }

    /// Check if error came from one of the storage collaborators
    pub fn is_storage_error(&self) -> bool {
        matches!(
            self,
            AppError::Storage(_) | AppError::LeagueNotFound { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_helper() {
        let error = AppError::invalid_input("at least two teams are required");
        assert!(matches!(error, AppError::InvalidInput { .. }));
        assert_eq!(
            error.to_string(),
            "Invalid input: at least two teams are required"
        );
    }

    #[test]
    fn test_unknown_team_helper() {
        let error = AppError::unknown_team("HIFK");
        assert!(matches!(error, AppError::UnknownTeam { .. }));
        assert_eq!(error.to_string(), "Unknown team: HIFK");
    }

    #[test]
    fn test_config_error_helper() {
        let error = AppError::config_error("Invalid configuration");
        assert!(matches!(error, AppError::Config(_)));
        assert_eq!(
            error.to_string(),
            "Configuration error: Invalid configuration"
        );
    }

    #[test]
    fn test_datetime_parse_error_helper() {
        let error = AppError::datetime_parse_error("Invalid date format");
        assert!(matches!(error, AppError::DateTimeParse(_)));
        assert_eq!(
            error.to_string(),
            "Date/time parsing error: Invalid date format"
        );
    }

    #[test]
    fn test_log_setup_error_helper() {
        let error = AppError::log_setup_error("Failed to initialize logger");
        assert!(matches!(error, AppError::LogSetup(_)));
        assert_eq!(
            error.to_string(),
            "Log setup error: Failed to initialize logger"
        );
    }

    #[test]
    fn test_league_not_found_helper() {
        let error = AppError::league_not_found("spring-2025");
        assert_eq!(error.to_string(), "League not found: spring-2025");
        assert!(error.is_storage_error());
    }

    #[test]
    fn test_validation_classification() {
        assert!(AppError::invalid_input("x").is_validation_error());
        assert!(AppError::unknown_team("x").is_validation_error());
        assert!(!AppError::storage_error("disk full").is_validation_error());
        assert!(!AppError::config_error("x").is_validation_error());
    }

    #[test]
    fn test_storage_classification() {
        assert!(AppError::storage_error("connection reset").is_storage_error());
        assert!(!AppError::invalid_input("x").is_storage_error());
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let error: AppError = io_error.into();
        assert!(matches!(error, AppError::Io(_)));
        assert_eq!(error.to_string(), "I/O error: missing");
    }
}
