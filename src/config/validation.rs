use crate::error::AppError;
use std::path::Path;

/// Validates the configuration settings
///
/// # Validation Rules
/// - Standings cache must hold at least one table
/// - If log file path is provided, it cannot be empty
/// - Log file path parent directory must exist or be creatable
pub fn validate_config(
    standings_cache_size: usize,
    log_file_path: &Option<String>,
) -> Result<(), AppError> {
    if standings_cache_size == 0 {
        return Err(AppError::config_error(
            "Standings cache size must be at least 1",
        ));
    }

    if let Some(log_path) = log_file_path {
        if log_path.is_empty() {
            return Err(AppError::config_error("Log file path cannot be empty"));
        }

        // Check if parent directory exists or can be created
        if let Some(parent) = Path::new(log_path).parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent).map_err(|e| {
                AppError::config_error(format!(
                    "Cannot create log directory '{}': {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_zero_cache_size_rejected() {
        let result = validate_config(0, &None);
        assert!(matches!(result, Err(AppError::Config(_))));
    }

    #[test]
    fn test_empty_log_path_rejected() {
        let result = validate_config(8, &Some(String::new()));
        assert!(matches!(result, Err(AppError::Config(_))));
    }

    #[test]
    fn test_log_parent_is_created() {
        let temp_dir = tempdir().unwrap();
        let log_path = temp_dir.path().join("nested").join("planner.log");

        validate_config(8, &Some(log_path.to_string_lossy().to_string())).unwrap();

        assert!(temp_dir.path().join("nested").exists());
    }

    #[test]
    fn test_bare_file_name_is_valid() {
        assert!(validate_config(8, &Some("planner.log".to_string())).is_ok());
    }
}
