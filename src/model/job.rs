//! Job records, locations, and the job status workflow

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct JobRecord {
    pub id: String,
    pub title: String,
    pub organization: String,
    pub location: Option<LocationField>,
    pub industry: Option<String>,
    /// Required years of experience for the role.
    pub experience_years: Option<f64>,
    pub ctc_min: Option<f64>,
    pub ctc_max: Option<f64>,
    pub remote: Option<bool>,
    pub status: JobStatus,
    pub created_at: Option<DateTime<Utc>>,
}

/// Older job records carry a single free-form location string; newer
/// ones carry structured entries. Both shapes appear in live exports.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LocationField {
    Legacy(String),
    Structured(Vec<JobLocation>),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct JobLocation {
    pub country: String,
    pub state: String,
    pub city: String,
}

impl LocationField {
    /// Case-insensitive substring search across whichever shape is
    /// present. Structured entries match on any of country/state/city.
    pub fn contains_ci(&self, needle: &str) -> bool {
        let needle = needle.to_lowercase();
        match self {
            LocationField::Legacy(s) => s.to_lowercase().contains(&needle),
            LocationField::Structured(entries) => entries.iter().any(|loc| {
                loc.country.to_lowercase().contains(&needle)
                    || loc.state.to_lowercase().contains(&needle)
                    || loc.city.to_lowercase().contains(&needle)
            }),
        }
    }
}

/// Closed status set; serialized labels are the exact backend strings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum JobStatus {
    #[default]
    New,
    #[serde(rename = "In Progress")]
    InProgress,
    Halted,
    Withdrawn,
    #[serde(rename = "Ongoing client process")]
    OngoingClientProcess,
    Completed,
}

impl JobStatus {
    pub const ALL: [JobStatus; 6] = [
        JobStatus::New,
        JobStatus::InProgress,
        JobStatus::Halted,
        JobStatus::Withdrawn,
        JobStatus::OngoingClientProcess,
        JobStatus::Completed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            JobStatus::New => "New",
            JobStatus::InProgress => "In Progress",
            JobStatus::Halted => "Halted",
            JobStatus::Withdrawn => "Withdrawn",
            JobStatus::OngoingClientProcess => "Ongoing client process",
            JobStatus::Completed => "Completed",
        }
    }

    /// Guard evaluated before submitting a status update: once an
    /// active workflow exists for the job, only `Ongoing client
    /// process` and `Completed` remain reachable.
    pub fn change_allowed(self, has_active_workflow: bool) -> bool {
        !has_active_workflow
            || matches!(
                self,
                JobStatus::OngoingClientProcess | JobStatus::Completed
            )
    }
}

impl fmt::Display for JobStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for JobStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        JobStatus::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                format!(
                    "Unknown job status: {}. Known: {}",
                    s,
                    JobStatus::ALL.map(|st| st.as_str()).join(", ")
                )
            })
    }
}
