//! ATS screener: filter, sort, and project applicant-tracking records

use ats_screener::cli::{self, Cli, Commands, ConfigAction, MatchKind};
use ats_screener::config::{Config, OutputFormat};
use ats_screener::error::{Result, ScreenerError};
use ats_screener::filter::{
    derived, filter_candidates, filter_jobs, sort_by_created, CandidateCriteria, JobCriteria,
    RangeFilter, SetFilter, SortOrder,
};
use ats_screener::input::manager::InputManager;
use ats_screener::matching;
use ats_screener::model::{CandidateRecord, JobRecord, JobStatus, MatchResult};
use ats_screener::output::formatter::{ConsoleFormatter, JsonFormatter};
use clap::Parser;
use log::{error, info};
use std::path::Path;
use std::process;

#[tokio::main]
async fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    // Load configuration
    let config = match Config::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    // Execute command
    if let Err(e) = run_command(cli.command, config).await {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

async fn run_command(command: Commands, config: Config) -> Result<()> {
    match command {
        Commands::Candidates {
            input,
            name,
            email,
            phone,
            linkedin,
            x,
            company,
            position,
            skills,
            exp_min,
            exp_max,
            ctc_low,
            ctc_high,
            education,
            pools,
            search,
            sort,
            output,
            save,
            detailed,
        } => {
            info!("Filtering candidate export: {}", input.display());

            let output_format =
                cli::parse_output_format(&output).map_err(ScreenerError::InvalidInput)?;
            let order: SortOrder = sort.parse().map_err(ScreenerError::InvalidInput)?;

            let span = config.filter.experience_span();
            let criteria = CandidateCriteria {
                name: name.into(),
                email: email.into(),
                phone: phone.into(),
                linkedin: linkedin.into(),
                x: x.into(),
                company: company.into(),
                position: position.into(),
                skills: SetFilter::new(skills),
                experience_years: RangeFilter::active(
                    exp_min.unwrap_or(span.0),
                    exp_max.unwrap_or(span.1),
                    span,
                ),
                ctc_low: ctc_low.as_deref().and_then(derived::parse_amount),
                ctc_high: ctc_high.as_deref().and_then(derived::parse_amount),
                education: education.into(),
                talent_pools: SetFilter::new(pools),
            };

            let mut manager = InputManager::new();
            let records: Vec<CandidateRecord> = manager.load_records(&input).await?;
            info!("Loaded {} candidate records", records.len());

            let mut matched = filter_candidates(&records, &criteria, &search);
            sort_by_created(&mut matched, order);
            info!("{} of {} candidates passed", matched.len(), records.len());

            let rendered = match output_format {
                OutputFormat::Console => {
                    ConsoleFormatter::new(config.output.color_output, detailed || config.output.detailed)
                        .format_candidates(&matched)
                }
                OutputFormat::Json => JsonFormatter::new(true).format(&matched)?,
            };
            emit(&rendered, save.as_deref())?;
        }

        Commands::Jobs {
            input,
            title,
            organization,
            location,
            industry,
            exp_min,
            exp_max,
            ctc_low,
            ctc_high,
            remote,
            status,
            search,
            sort,
            output,
            save,
            detailed,
        } => {
            info!("Filtering job export: {}", input.display());

            let output_format =
                cli::parse_output_format(&output).map_err(ScreenerError::InvalidInput)?;
            let order: SortOrder = sort.parse().map_err(ScreenerError::InvalidInput)?;

            // Canonicalize the status label so exact-equality matching
            // works regardless of how the flag was capitalized.
            let status_label = match status {
                Some(raw) => raw
                    .parse::<JobStatus>()
                    .map_err(ScreenerError::InvalidInput)?
                    .as_str()
                    .to_string(),
                None => String::new(),
            };

            let span = config.filter.experience_span();
            let criteria = JobCriteria {
                title: title.into(),
                organization: organization.into(),
                location: location.into(),
                industry: industry.into(),
                experience_years: RangeFilter::active(
                    exp_min.unwrap_or(span.0),
                    exp_max.unwrap_or(span.1),
                    span,
                ),
                ctc_low: ctc_low.as_deref().and_then(derived::parse_amount),
                ctc_high: ctc_high.as_deref().and_then(derived::parse_amount),
                remote,
                status: status_label,
            };

            let mut manager = InputManager::new();
            let records: Vec<JobRecord> = manager.load_records(&input).await?;
            info!("Loaded {} job records", records.len());

            let mut matched = filter_jobs(&records, &criteria, &search);
            sort_by_created(&mut matched, order);
            info!("{} of {} jobs passed", matched.len(), records.len());

            let rendered = match output_format {
                OutputFormat::Console => {
                    ConsoleFormatter::new(config.output.color_output, detailed || config.output.detailed)
                        .format_jobs(&matched)
                }
                OutputFormat::Json => JsonFormatter::new(true).format(&matched)?,
            };
            emit(&rendered, save.as_deref())?;
        }

        Commands::Matches {
            input,
            kind,
            limit,
            output,
            save,
        } => {
            info!("Projecting match list: {}", input.display());

            let output_format =
                cli::parse_output_format(&output).map_err(ScreenerError::InvalidInput)?;
            let kind = cli::parse_match_kind(&kind).map_err(ScreenerError::InvalidInput)?;

            let requested = limit.unwrap_or(config.matching.default_limit);
            let limit = matching::clamp_limit(requested, config.matching.max_limit);
            info!("Showing up to {} matches", limit);

            let mut manager = InputManager::new();
            let formatter = ConsoleFormatter::new(config.output.color_output, false);
            let rendered = match kind {
                MatchKind::Candidates => {
                    let matches: Vec<MatchResult<CandidateRecord>> =
                        manager.load_records(&input).await?;
                    let shown = matching::project(&matches, limit);
                    match output_format {
                        OutputFormat::Console => formatter.format_candidate_matches(&shown),
                        OutputFormat::Json => JsonFormatter::new(true).format(&shown)?,
                    }
                }
                MatchKind::Jobs => {
                    let matches: Vec<MatchResult<JobRecord>> = manager.load_records(&input).await?;
                    let shown = matching::project(&matches, limit);
                    match output_format {
                        OutputFormat::Console => formatter.format_job_matches(&shown),
                        OutputFormat::Json => JsonFormatter::new(true).format(&shown)?,
                    }
                }
            };
            emit(&rendered, save.as_deref())?;
        }

        Commands::Config { action } => match action {
            Some(ConfigAction::Show) | None => {
                println!("⚙️  Current Configuration\n");
                println!(
                    "Experience span: {} - {} years",
                    config.filter.experience_min, config.filter.experience_max
                );
                println!("Default match limit: {}", config.matching.default_limit);
                println!("Maximum match limit: {}", config.matching.max_limit);
                println!("Output format: {:?}", config.output.format);
                println!("Color output: {}", config.output.color_output);
            }

            Some(ConfigAction::Reset) => {
                println!("🔄 Resetting configuration to defaults...");
                let default_config = Config::default();
                default_config.save()?;
                println!("✅ Configuration reset successfully!");
            }
        },
    }

    Ok(())
}

/// Print to stdout, or write to the requested file.
fn emit(rendered: &str, save: Option<&Path>) -> Result<()> {
    match save {
        Some(path) => {
            std::fs::write(path, rendered)?;
            println!("💾 Saved output to {}", path.display());
        }
        None => println!("{}", rendered),
    }
    Ok(())
}
