//! CLI interface for the ATS screener

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "ats-screener")]
#[command(about = "Client-side screening for applicant-tracking records")]
#[command(
    long_about = "Filter candidate and job exports with per-field criteria and free-text search, sort by creation date, and project server-ranked match lists for display"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Filter a candidate export
    Candidates {
        /// Path to a JSON export of candidate records
        #[arg(short, long)]
        input: PathBuf,

        /// Name contains (case-insensitive)
        #[arg(long)]
        name: Option<String>,

        /// Email contains
        #[arg(long)]
        email: Option<String>,

        /// Phone contains
        #[arg(long)]
        phone: Option<String>,

        /// LinkedIn handle contains
        #[arg(long)]
        linkedin: Option<String>,

        /// X (Twitter) handle contains
        #[arg(long)]
        x: Option<String>,

        /// Current company contains
        #[arg(long)]
        company: Option<String>,

        /// Current position contains
        #[arg(long)]
        position: Option<String>,

        /// Skills, comma-separated; any overlap passes
        #[arg(long, value_delimiter = ',')]
        skills: Vec<String>,

        /// Minimum total years of experience
        #[arg(long)]
        exp_min: Option<f64>,

        /// Maximum total years of experience
        #[arg(long)]
        exp_max: Option<f64>,

        /// Minimum current compensation
        #[arg(long)]
        ctc_low: Option<String>,

        /// Maximum current compensation
        #[arg(long)]
        ctc_high: Option<String>,

        /// Education course contains
        #[arg(long)]
        education: Option<String>,

        /// Talent pool ids, comma-separated
        #[arg(long, value_delimiter = ',')]
        pools: Vec<String>,

        /// Free-text search over name and skills
        #[arg(short, long, default_value = "")]
        search: String,

        /// Sort by creation date: asc, desc
        #[arg(long, default_value = "desc")]
        sort: String,

        /// Output format: console, json
        #[arg(short, long, default_value = "console")]
        output: String,

        /// Save output to file
        #[arg(long)]
        save: Option<PathBuf>,

        /// Include phone, education, and talent pools in console output
        #[arg(short, long)]
        detailed: bool,
    },

    /// Filter a job export
    Jobs {
        /// Path to a JSON export of job records
        #[arg(short, long)]
        input: PathBuf,

        /// Title contains (case-insensitive)
        #[arg(long)]
        title: Option<String>,

        /// Organization contains
        #[arg(long)]
        organization: Option<String>,

        /// Location contains (legacy string or any structured part)
        #[arg(long)]
        location: Option<String>,

        /// Industry contains
        #[arg(long)]
        industry: Option<String>,

        /// Minimum required years of experience
        #[arg(long)]
        exp_min: Option<f64>,

        /// Maximum required years of experience
        #[arg(long)]
        exp_max: Option<f64>,

        /// Compensation floor; passes jobs whose range reaches it
        #[arg(long)]
        ctc_low: Option<String>,

        /// Compensation ceiling; passes jobs whose range starts below it
        #[arg(long)]
        ctc_high: Option<String>,

        /// Only remote (true) or only on-site (false) roles
        #[arg(long)]
        remote: Option<bool>,

        /// Exact status label, e.g. "In Progress"
        #[arg(long)]
        status: Option<String>,

        /// Free-text search over title and organization
        #[arg(short, long, default_value = "")]
        search: String,

        /// Sort by creation date: asc, desc
        #[arg(long, default_value = "desc")]
        sort: String,

        /// Output format: console, json
        #[arg(short, long, default_value = "console")]
        output: String,

        /// Save output to file
        #[arg(long)]
        save: Option<PathBuf>,

        /// Include industry, CTC range, and remote flag in console output
        #[arg(short, long)]
        detailed: bool,
    },

    /// Project a ranked match list for display
    Matches {
        /// Path to a JSON match list from the matching service
        #[arg(short, long)]
        input: PathBuf,

        /// Kind of records in the match list: candidates, jobs
        #[arg(short, long, default_value = "jobs")]
        kind: String,

        /// How many matches to show (clamped to the configured max)
        #[arg(short, long)]
        limit: Option<i64>,

        /// Output format: console, json
        #[arg(short, long, default_value = "console")]
        output: String,

        /// Save output to file
        #[arg(long)]
        save: Option<PathBuf>,
    },

    /// Show configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Reset configuration to defaults
    Reset,
}

/// Which side of the matching a results file holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchKind {
    Candidates,
    Jobs,
}

/// Parse and validate output format
pub fn parse_output_format(format: &str) -> Result<crate::config::OutputFormat, String> {
    match format.to_lowercase().as_str() {
        "console" => Ok(crate::config::OutputFormat::Console),
        "json" => Ok(crate::config::OutputFormat::Json),
        _ => Err(format!(
            "Invalid output format: {}. Supported: console, json",
            format
        )),
    }
}

/// Parse the record kind of a match list
pub fn parse_match_kind(kind: &str) -> Result<MatchKind, String> {
    match kind.to_lowercase().as_str() {
        "candidates" | "candidate" => Ok(MatchKind::Candidates),
        "jobs" | "job" => Ok(MatchKind::Jobs),
        _ => Err(format!(
            "Invalid match kind: {}. Supported: candidates, jobs",
            kind
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;

    #[test]
    fn output_format_parsing() {
        assert_eq!(parse_output_format("console"), Ok(OutputFormat::Console));
        assert_eq!(parse_output_format("JSON"), Ok(OutputFormat::Json));
        assert!(parse_output_format("pdf").is_err());
    }

    #[test]
    fn match_kind_parsing() {
        assert_eq!(parse_match_kind("jobs"), Ok(MatchKind::Jobs));
        assert_eq!(parse_match_kind("candidate"), Ok(MatchKind::Candidates));
        assert!(parse_match_kind("pools").is_err());
    }
}
