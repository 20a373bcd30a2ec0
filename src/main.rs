//! Command line entry point for the gymnastics scoreboard
//!
//! Loads a competition document, ranks its competitors and prints the
//! standings as a table or JSON report.

use anyhow::Result;
use clap::{Parser, ValueEnum};
use gym_scoreboard::config::AppConfig;
use gym_scoreboard::document::load_competition;
use gym_scoreboard::format::{
    render_level_groups, render_table, ReportMetadata, ReportResults, StandingsReport,
};
use gym_scoreboard::{
    available_levels, filter_by_level, group_by_level_and_rank, rank, top_per_level,
    CompetitionStats, Level,
};
use std::path::PathBuf;
use tracing::{info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
}

/// Gym Scoreboard - competition standings by total score and level
#[derive(Parser)]
#[command(
    name = "scoreboard",
    version,
    about = "Rank gymnastics competitors by total score, overall or per level"
)]
struct Args {
    /// Competition document (JSON)
    #[arg(value_name = "COMPETITION")]
    competition: PathBuf,

    /// Configuration file path
    #[arg(
        short,
        long,
        value_name = "FILE",
        help = "Path to configuration file (TOML format)"
    )]
    config: Option<PathBuf>,

    /// Only rank competitors at this level (e.g. "Level 5", "Elite")
    #[arg(long, value_name = "LEVEL")]
    level: Option<String>,

    /// Rank each level separately
    #[arg(long, conflicts_with = "level")]
    by_level: bool,

    /// Show only the podium of each level (configured podium size)
    #[arg(long, conflicts_with = "level")]
    podium: bool,

    /// Show only the top N of each level
    #[arg(long, value_name = "N", conflicts_with = "level")]
    top: Option<usize>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,

    /// Log level override
    #[arg(
        short,
        long,
        value_name = "LEVEL",
        help = "Override log level (trace, debug, info, warn, error)"
    )]
    log_level: Option<String>,

    /// Enable debug mode
    #[arg(short, long, help = "Enable debug mode with verbose logging")]
    debug: bool,

    /// Dry run mode (validate config and document, then exit)
    #[arg(long, help = "Validate configuration and competition document, then exit")]
    dry_run: bool,
}

/// Initialize structured logging with the configured level
fn init_logging(log_level: &str) -> Result<()> {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| log_level.into()),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}

/// Load and merge configuration from environment, file and CLI arguments
fn load_config(args: &Args) -> Result<AppConfig> {
    let mut config = match &args.config {
        Some(config_path) => AppConfig::from_file(config_path)?,
        None => AppConfig::from_env()?,
    };

    if let Some(log_level) = &args.log_level {
        config.service.log_level = log_level.clone();
    }

    if args.debug {
        config.service.log_level = "debug".to_string();
    }

    gym_scoreboard::config::validate_config(&config)?;
    Ok(config)
}

fn run(args: Args, config: AppConfig) -> Result<()> {
    let competition = load_competition(&args.competition, config.ranking.default_section)?;
    let events = competition.events();

    let levels = available_levels(&competition.competitors);
    info!(
        "Levels present: {}",
        levels
            .iter()
            .map(|l| l.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    );
    for level in levels.iter().filter(|l| !l.is_standard()) {
        warn!("Competitors with non-standard level '{}' are ranked last", level);
    }

    if args.dry_run {
        info!("Dry run completed - competition document is valid");
        return Ok(());
    }

    let level_filter = args.level.as_deref().map(Level::parse);
    let roster = filter_by_level(&competition.competitors, level_filter.as_ref());
    if roster.is_empty() {
        warn!("No competitors to rank");
    }

    let top = args
        .top
        .or_else(|| args.podium.then_some(config.ranking.podium_size));

    let results = match top {
        Some(n) => ReportResults::ByLevel(top_per_level(&roster, n)),
        None if args.by_level => ReportResults::ByLevel(group_by_level_and_rank(&roster)),
        None => ReportResults::Ranked(rank(&roster)),
    };

    match args.format {
        OutputFormat::Table => {
            println!(
                "{} - {} ({})",
                competition.name,
                competition.section.display_name(),
                competition.date
            );
            match &results {
                ReportResults::Ranked(ranked) => print!("{}", render_table(ranked, &events)),
                ReportResults::ByLevel(groups) => {
                    print!("{}", render_level_groups(groups, &events))
                }
            }
        }
        OutputFormat::Json => {
            let report = StandingsReport {
                metadata: ReportMetadata::new(
                    &competition.name,
                    competition.section,
                    level_filter.as_ref(),
                    CompetitionStats::compute(&roster, events.len()),
                ),
                events,
                results,
            };
            println!("{}", report.to_json()?);
        }
    }

    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Load configuration (CLI args can override environment/config file)
    let config = load_config(&args).unwrap_or_else(|e| {
        eprintln!("Configuration error: {:#}", e);
        std::process::exit(1);
    });

    if let Err(e) = init_logging(&config.service.log_level) {
        eprintln!("Failed to initialize logging: {}", e);
        std::process::exit(1);
    }

    info!("{} v{}", config.service.name, gym_scoreboard::VERSION);
    run(args, config)
}
