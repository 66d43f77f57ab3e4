//! Filtering entry points: predicate conjunction plus free-text search

use crate::filter::criteria::{CandidateCriteria, JobCriteria};
use crate::model::{CandidateRecord, JobRecord};

/// Applies `criteria` and the free-text search to `records`. Output
/// preserves input relative order; the input is never mutated.
pub fn filter_candidates(
    records: &[CandidateRecord],
    criteria: &CandidateCriteria,
    free_text: &str,
) -> Vec<CandidateRecord> {
    records
        .iter()
        .filter(|c| criteria.matches(c) && candidate_matches_text(c, free_text))
        .cloned()
        .collect()
}

pub fn filter_jobs(records: &[JobRecord], criteria: &JobCriteria, free_text: &str) -> Vec<JobRecord> {
    records
        .iter()
        .filter(|j| criteria.matches(j) && job_matches_text(j, free_text))
        .cloned()
        .collect()
}

/// Basic search: name or the joined skill list, case-insensitive.
/// Empty text matches everything.
fn candidate_matches_text(candidate: &CandidateRecord, free_text: &str) -> bool {
    let needle = free_text.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }
    candidate.name.to_lowercase().contains(&needle)
        || candidate.skills.join(" ").to_lowercase().contains(&needle)
}

/// Job-side basic search runs over title and organization.
fn job_matches_text(job: &JobRecord, free_text: &str) -> bool {
    let needle = free_text.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }
    job.title.to_lowercase().contains(&needle)
        || job.organization.to_lowercase().contains(&needle)
}
