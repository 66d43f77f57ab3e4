//! Output formatters: colored console listings and JSON

use crate::error::Result;
use crate::filter::derived;
use crate::model::{CandidateRecord, JobRecord, LocationField, MatchResult};
use colored::Colorize;
use serde::Serialize;

/// The UI's placeholder for data a record simply does not carry.
const NOT_MENTIONED: &str = "Not Mentioned";

/// Console formatter with colors and an optional detailed mode.
pub struct ConsoleFormatter {
    use_colors: bool,
    detailed: bool,
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool, detailed: bool) -> Self {
        Self {
            use_colors,
            detailed,
        }
    }

    pub fn format_candidates(&self, records: &[CandidateRecord]) -> String {
        if records.is_empty() {
            return "No candidates matched the current filters.".to_string();
        }

        let mut out = String::new();
        out.push_str(&format!(
            "{}\n\n",
            self.bold(&format!("👤 {} candidate(s)", records.len()))
        ));
        for candidate in records {
            out.push_str(&self.candidate_block(candidate));
            out.push('\n');
        }
        out.trim_end().to_string()
    }

    pub fn format_jobs(&self, records: &[JobRecord]) -> String {
        if records.is_empty() {
            return "No jobs matched the current filters.".to_string();
        }

        let mut out = String::new();
        out.push_str(&format!(
            "{}\n\n",
            self.bold(&format!("💼 {} job(s)", records.len()))
        ));
        for job in records {
            out.push_str(&self.job_block(job));
            out.push('\n');
        }
        out.trim_end().to_string()
    }

    pub fn format_candidate_matches(&self, matches: &[MatchResult<CandidateRecord>]) -> String {
        if matches.is_empty() {
            return "No suitable candidates found.".to_string();
        }

        let mut out = String::new();
        out.push_str(&format!(
            "{}\n\n",
            self.bold(&format!("✨ Found {} suitable candidate(s)", matches.len()))
        ));
        for (rank, result) in matches.iter().enumerate() {
            out.push_str(&format!(
                "{}. {} — {}\n",
                rank + 1,
                self.bold(&result.record.name),
                self.score_label(result.score)
            ));
            for detail in &result.match_details {
                out.push_str(&format!("   • {}\n", detail));
            }
        }
        out.trim_end().to_string()
    }

    pub fn format_job_matches(&self, matches: &[MatchResult<JobRecord>]) -> String {
        if matches.is_empty() {
            return "No suitable jobs found.".to_string();
        }

        let mut out = String::new();
        out.push_str(&format!(
            "{}\n\n",
            self.bold(&format!("✨ Found {} suitable job(s)", matches.len()))
        ));
        for (rank, result) in matches.iter().enumerate() {
            out.push_str(&format!(
                "{}. {} at {} — {}\n",
                rank + 1,
                self.bold(&result.record.title),
                result.record.organization,
                self.score_label(result.score)
            ));
            for detail in &result.match_details {
                out.push_str(&format!("   • {}\n", detail));
            }
        }
        out.trim_end().to_string()
    }

    fn candidate_block(&self, candidate: &CandidateRecord) -> String {
        let mut block = String::new();
        block.push_str(&format!("{}\n", self.bold(&candidate.name)));
        block.push_str(&format!(
            "  Email: {}\n",
            or_not_mentioned(candidate.email.as_deref())
        ));
        block.push_str(&format!(
            "  Current: {} at {}\n",
            or_not_mentioned(derived::current_position(candidate)),
            or_not_mentioned(derived::current_company(candidate))
        ));
        block.push_str(&format!(
            "  Experience: {}\n",
            years_label(derived::total_experience_years(candidate))
        ));
        block.push_str(&format!(
            "  Skills: {}\n",
            if candidate.skills.is_empty() {
                NOT_MENTIONED.to_string()
            } else {
                candidate.skills.join(", ")
            }
        ));
        if self.detailed {
            block.push_str(&format!(
                "  Phone: {}\n",
                or_not_mentioned(candidate.phone.as_deref())
            ));
            for education in &candidate.education {
                block.push_str(&format!(
                    "  Education: {} — {}\n",
                    education.course, education.institution
                ));
            }
            if !candidate.talent_pools.is_empty() {
                block.push_str(&format!(
                    "  Talent pools: {}\n",
                    candidate.talent_pools.join(", ")
                ));
            }
        }
        block
    }

    fn job_block(&self, job: &JobRecord) -> String {
        let mut block = String::new();
        block.push_str(&format!(
            "{} at {}\n",
            self.bold(&job.title),
            job.organization
        ));
        block.push_str(&format!("  Status: {}\n", job.status));
        block.push_str(&format!("  Location: {}\n", location_label(job)));
        if self.detailed {
            block.push_str(&format!(
                "  Industry: {}\n",
                or_not_mentioned(job.industry.as_deref())
            ));
            block.push_str(&format!("  CTC: {}\n", ctc_label(job)));
            block.push_str(&format!(
                "  Remote: {}\n",
                match job.remote {
                    Some(true) => "Yes",
                    Some(false) => "No",
                    None => NOT_MENTIONED,
                }
            ));
        }
        block
    }

    fn bold(&self, text: &str) -> String {
        if self.use_colors {
            text.bold().to_string()
        } else {
            text.to_string()
        }
    }

    fn score_label(&self, score: f64) -> String {
        let label = format!("{:.0}% match", score * 100.0);
        if !self.use_colors {
            return label;
        }
        if score >= 0.75 {
            label.green().to_string()
        } else if score >= 0.5 {
            label.yellow().to_string()
        } else {
            label.red().to_string()
        }
    }
}

/// JSON formatter for piping results into other tools.
pub struct JsonFormatter {
    pretty: bool,
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }

    pub fn format<T: Serialize>(&self, value: &T) -> Result<String> {
        let text = if self.pretty {
            serde_json::to_string_pretty(value)?
        } else {
            serde_json::to_string(value)?
        };
        Ok(text)
    }
}

fn or_not_mentioned(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => NOT_MENTIONED.to_string(),
    }
}

fn years_label(years: Option<i64>) -> String {
    match years {
        Some(y) => format!("{} year(s)", y),
        None => NOT_MENTIONED.to_string(),
    }
}

fn location_label(job: &JobRecord) -> String {
    match &job.location {
        Some(LocationField::Legacy(s)) => s.clone(),
        Some(LocationField::Structured(entries)) => {
            let parts: Vec<String> = entries
                .iter()
                .map(|loc| {
                    [loc.city.as_str(), loc.state.as_str(), loc.country.as_str()]
                        .iter()
                        .filter(|p| !p.is_empty())
                        .copied()
                        .collect::<Vec<_>>()
                        .join(", ")
                })
                .collect();
            parts.join(" | ")
        }
        None => NOT_MENTIONED.to_string(),
    }
}

fn ctc_label(job: &JobRecord) -> String {
    match (job.ctc_min, job.ctc_max) {
        (Some(min), Some(max)) => format!("{} - {}", min, max),
        (Some(min), None) => format!("{}+", min),
        (None, Some(max)) => format!("up to {}", max),
        (None, None) => NOT_MENTIONED.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::JobStatus;

    #[test]
    fn unknown_derived_fields_render_as_not_mentioned() {
        let formatter = ConsoleFormatter::new(false, false);
        let candidate = CandidateRecord {
            name: "Ken Obi".to_string(),
            ..Default::default()
        };
        let text = formatter.format_candidates(&[candidate]);
        assert!(text.contains("Ken Obi"));
        assert!(text.contains("Not Mentioned"));
    }

    #[test]
    fn empty_lists_say_so() {
        let formatter = ConsoleFormatter::new(false, false);
        assert!(formatter
            .format_candidates(&[])
            .contains("No candidates matched"));
        assert!(formatter
            .format_job_matches(&[])
            .contains("No suitable jobs"));
    }

    #[test]
    fn match_listing_reports_count_and_details() {
        let formatter = ConsoleFormatter::new(false, false);
        let matches = vec![MatchResult {
            record: JobRecord {
                title: "Platform Engineer".to_string(),
                organization: "Initech".to_string(),
                status: JobStatus::InProgress,
                ..Default::default()
            },
            score: 0.87,
            match_details: vec!["Skills cover 8 of 9 requirements".to_string()],
        }];
        let text = formatter.format_job_matches(&matches);
        assert!(text.contains("Found 1 suitable job(s)"));
        assert!(text.contains("Platform Engineer"));
        assert!(text.contains("87% match"));
        assert!(text.contains("Skills cover 8 of 9 requirements"));
    }

    #[test]
    fn json_formatter_round_trips_records() {
        let formatter = JsonFormatter::new(false);
        let records = vec![CandidateRecord {
            id: "c1".to_string(),
            name: "Priya Sharma".to_string(),
            ..Default::default()
        }];
        let text = formatter.format(&records).unwrap();
        let back: Vec<CandidateRecord> = serde_json::from_str(&text).unwrap();
        assert_eq!(back, records);
    }
}
