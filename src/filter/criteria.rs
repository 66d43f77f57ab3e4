//! Filter criteria: per-field constraints with explicit unset sentinels
//!
//! Every field carries an "unset" value (empty string, empty list,
//! `None`) meaning no constraint; a record passes a criteria object
//! only if every active constraint accepts it.

use serde::{Deserialize, Serialize};

use crate::filter::derived;
use crate::model::{CandidateRecord, JobRecord};

/// Case-insensitive substring constraint on one string field.
/// Empty string is the unset sentinel.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TextFilter(String);

impl TextFilter {
    pub fn new(raw: impl Into<String>) -> Self {
        TextFilter(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_unset(&self) -> bool {
        self.0.is_empty()
    }

    /// Strict-field rule: when the criterion is set, a record whose
    /// field is missing fails rather than passing as unknown.
    pub fn accepts(&self, value: Option<&str>) -> bool {
        if self.is_unset() {
            return true;
        }
        match value {
            Some(v) => v.to_lowercase().contains(&self.0.to_lowercase()),
            None => false,
        }
    }

    /// Passes when any of the given values contains the needle.
    pub fn accepts_any<'a, I>(&self, values: I) -> bool
    where
        I: IntoIterator<Item = &'a str>,
    {
        if self.is_unset() {
            return true;
        }
        let needle = self.0.to_lowercase();
        values
            .into_iter()
            .any(|v| v.to_lowercase().contains(&needle))
    }
}

impl From<Option<String>> for TextFilter {
    fn from(raw: Option<String>) -> Self {
        TextFilter(raw.unwrap_or_default())
    }
}

/// Multi-value constraint. Empty list is the unset sentinel.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SetFilter(Vec<String>);

impl SetFilter {
    pub fn new(values: Vec<String>) -> Self {
        SetFilter(values)
    }

    pub fn is_unset(&self) -> bool {
        self.0.is_empty()
    }

    /// Many-to-many substring overlap: passes when any record value
    /// case-insensitively contains any criterion value. A record with
    /// no values fails an active filter.
    pub fn overlaps_substring(&self, values: &[String]) -> bool {
        if self.is_unset() {
            return true;
        }
        values.iter().any(|v| {
            let v = v.to_lowercase();
            self.0.iter().any(|c| v.contains(&c.to_lowercase()))
        })
    }

    /// Exact intersection, used for identifier sets (talent pools).
    pub fn intersects(&self, values: &[String]) -> bool {
        if self.is_unset() {
            return true;
        }
        values.iter().any(|v| self.0.contains(v))
    }
}

/// Inclusive numeric range. The surrounding UI's full default span
/// (e.g. 0..20 years) means "no constraint", so criteria hold an
/// `Option<RangeFilter>` built via [`RangeFilter::active`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RangeFilter {
    pub min: f64,
    pub max: f64,
}

impl RangeFilter {
    /// Builds the active filter, treating the full span as the unset
    /// sentinel.
    pub fn active(min: f64, max: f64, full: (f64, f64)) -> Option<Self> {
        if (min, max) == full {
            None
        } else {
            Some(RangeFilter { min, max })
        }
    }

    /// Inclusive containment; unknown values are never excluded.
    pub fn contains(&self, value: Option<f64>) -> bool {
        match value {
            Some(v) => v >= self.min && v <= self.max,
            None => true,
        }
    }
}

/// Constraints applicable to candidate records. All fields default to
/// their unset sentinel, so `CandidateCriteria::default()` passes
/// every record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CandidateCriteria {
    pub name: TextFilter,
    pub email: TextFilter,
    pub phone: TextFilter,
    pub linkedin: TextFilter,
    pub x: TextFilter,
    /// Matched against the current (first) experience entry's company.
    pub company: TextFilter,
    /// Matched against the current experience entry's position.
    pub position: TextFilter,
    pub skills: SetFilter,
    pub experience_years: Option<RangeFilter>,
    /// Current compensation must be >= this when set.
    pub ctc_low: Option<f64>,
    /// Current compensation must be <= this when set.
    pub ctc_high: Option<f64>,
    /// Matched against any education entry's course.
    pub education: TextFilter,
    pub talent_pools: SetFilter,
}

impl CandidateCriteria {
    /// Conjunction of all active constraints.
    pub fn matches(&self, candidate: &CandidateRecord) -> bool {
        if !self.name.accepts(Some(candidate.name.as_str())) {
            return false;
        }
        if !self.email.accepts(candidate.email.as_deref()) {
            return false;
        }
        if !self.phone.accepts(candidate.phone.as_deref()) {
            return false;
        }
        if !self.linkedin.accepts(candidate.linkedin.as_deref()) {
            return false;
        }
        if !self.x.accepts(candidate.x.as_deref()) {
            return false;
        }
        if !self.company.accepts(derived::current_company(candidate)) {
            return false;
        }
        if !self.position.accepts(derived::current_position(candidate)) {
            return false;
        }
        if !self.skills.overlaps_substring(&candidate.skills) {
            return false;
        }
        if let Some(range) = self.experience_years {
            let years = derived::total_experience_years(candidate).map(|y| y as f64);
            if !range.contains(years) {
                return false;
            }
        }
        let ctc = derived::current_ctc(candidate).and_then(derived::parse_amount);
        if let Some(low) = self.ctc_low {
            if matches!(ctc, Some(v) if v < low) {
                return false;
            }
        }
        if let Some(high) = self.ctc_high {
            if matches!(ctc, Some(v) if v > high) {
                return false;
            }
        }
        if !self.education.is_unset()
            && !self
                .education
                .accepts_any(candidate.education.iter().map(|e| e.course.as_str()))
        {
            return false;
        }
        if !self.talent_pools.intersects(&candidate.talent_pools) {
            return false;
        }
        true
    }
}

/// Constraints applicable to job records.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct JobCriteria {
    pub title: TextFilter,
    pub organization: TextFilter,
    /// Matches the legacy location string or any structured entry.
    pub location: TextFilter,
    pub industry: TextFilter,
    pub experience_years: Option<RangeFilter>,
    /// Range-overlap semantics: compared against the job's ctcMax, so
    /// any job whose range reaches the requested floor passes.
    pub ctc_low: Option<f64>,
    /// Compared against the job's ctcMin, the other half of the
    /// overlap check.
    pub ctc_high: Option<f64>,
    pub remote: Option<bool>,
    /// Exact status label equality; empty string is unset.
    pub status: String,
}

impl JobCriteria {
    pub fn matches(&self, job: &JobRecord) -> bool {
        if !self.title.accepts(Some(job.title.as_str())) {
            return false;
        }
        if !self.organization.accepts(Some(job.organization.as_str())) {
            return false;
        }
        if !self.location.is_unset() {
            match &job.location {
                Some(location) => {
                    if !location.contains_ci(self.location.as_str()) {
                        return false;
                    }
                }
                None => return false,
            }
        }
        if !self.industry.accepts(job.industry.as_deref()) {
            return false;
        }
        if let Some(range) = self.experience_years {
            if !range.contains(job.experience_years) {
                return false;
            }
        }
        // Deliberate opposite-bound comparison: the filter's range
        // overlaps the job's range, not same-named bounds.
        if let Some(low) = self.ctc_low {
            if matches!(job.ctc_max, Some(max) if max < low) {
                return false;
            }
        }
        if let Some(high) = self.ctc_high {
            if matches!(job.ctc_min, Some(min) if min > high) {
                return false;
            }
        }
        if let Some(remote) = self.remote {
            if job.remote != Some(remote) {
                return false;
            }
        }
        if !self.status.is_empty() && job.status.as_str() != self.status {
            return false;
        }
        true
    }
}
