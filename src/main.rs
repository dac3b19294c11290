use clap::Parser;
use league_planner::cli::{Args, is_config_update};
use league_planner::commands::{
    handle_config_update_command, handle_list_config_command, handle_season_command,
    handle_version_command, validate_args,
};
use league_planner::config::Config;
use league_planner::error::AppError;
use league_planner::logging::setup_logging;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let args = Args::parse();

    validate_args(&args)?;

    if args.version {
        handle_version_command();
        return Ok(());
    }

    if args.list_config {
        return handle_list_config_command().await;
    }

    if is_config_update(&args) {
        return handle_config_update_command(&args).await;
    }

    // Load config first to fail early if there's an issue
    let config = Config::load().await?;

    let (log_file_path, _guard) = setup_logging(&args, &config).await?;
    tracing::info!("Logs are being written to: {log_file_path}");

    let Some(season_path) = args.season.as_deref() else {
        return Err(AppError::config_error(
            "No season file given. Use --season <FILE> or see --help",
        ));
    };

    handle_season_command(season_path, &args, &config).await
}
