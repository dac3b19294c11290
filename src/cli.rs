use clap::Parser;
use clap::builder::styling::{AnsiColor, Effects, Styles};

fn get_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .usage(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Yellow.on_default())
        .error(AnsiColor::Red.on_default().effects(Effects::BOLD))
        .valid(AnsiColor::Green.on_default())
        .invalid(AnsiColor::Red.on_default())
}

/// Whether any configuration update flag was given
pub fn is_config_update(args: &Args) -> bool {
    args.new_log_file_path.is_some() || args.clear_log_file_path || args.new_cache_size.is_some()
}

/// League calendar planner
///
/// Reads a season description (teams, dates, recorded matches) and prints a
/// conflict-free double round-robin calendar, knockout round dates and the
/// current league table.
///
/// Without --table, the fixture list is printed. --fixtures and --table can
/// be combined.
#[derive(Parser, Debug, Default)]
#[command(author = "Niko Salonen", about, long_about = None)]
#[command(disable_version_flag = true)]
#[command(styles = get_styles())]
pub struct Args {
    /// Season description file (TOML, or JSON when the name ends in .json).
    #[arg(short = 's', long = "season", value_name = "FILE")]
    pub season: Option<String>,

    /// Print the round-robin fixture list.
    #[arg(short = 'f', long = "fixtures", help_heading = "Output")]
    pub fixtures: bool,

    /// Print the league table (and group tables and scorers when available).
    #[arg(short = 't', long = "table", help_heading = "Output")]
    pub table: bool,

    /// Add knockout round dates for a bracket of all season teams.
    #[arg(short = 'k', long = "knockout", help_heading = "Output")]
    pub knockout: bool,

    /// Size the knockout bracket for the top N teams instead. Requires --knockout.
    #[arg(long = "qualifiers", value_name = "N", help_heading = "Output")]
    pub qualifiers: Option<usize>,

    /// Print JSON instead of text, regardless of the configured output format.
    #[arg(long = "json", help_heading = "Output")]
    pub json: bool,

    /// Update log file path in config. This sets a persistent custom log file location.
    #[arg(long = "set-log-file", help_heading = "Configuration")]
    pub new_log_file_path: Option<String>,

    /// Clear the custom log file path from config. This reverts to using the default log location.
    #[arg(long = "clear-log-file", help_heading = "Configuration")]
    pub clear_log_file_path: bool,

    /// Update the number of standings tables kept in memory.
    #[arg(long = "set-cache-size", help_heading = "Configuration")]
    pub new_cache_size: Option<usize>,

    /// List current configuration settings
    #[arg(long = "list-config", short = 'l', help_heading = "Configuration")]
    pub list_config: bool,

    /// Show version information
    #[arg(short = 'V', long = "version", help_heading = "Info")]
    pub version: bool,

    /// Also write logs to stdout.
    #[arg(long = "debug", help_heading = "Debug")]
    pub debug: bool,

    /// Specify a custom log file path. If not provided, logs will be written to the default location.
    #[arg(long = "log-file", help_heading = "Debug")]
    pub log_file: Option<String>,
}
