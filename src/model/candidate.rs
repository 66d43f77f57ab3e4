//! Candidate records and their nested experience/education entries

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A candidate as exported by the backend. `skills`, `experience`,
/// `education` and `talentPools` may be absent in the payload; they
/// deserialize to empty collections, which the filters treat as
/// "no data", never as a mismatch by itself.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CandidateRecord {
    pub id: String,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub linkedin: Option<String>,
    pub x: Option<String>,
    pub skills: Vec<String>,
    pub experience: Vec<ExperienceEntry>,
    pub education: Vec<EducationEntry>,
    pub talent_pools: Vec<String>,
    pub created_at: Option<DateTime<Utc>>,
}

/// One employment entry. `start`/`end` are year strings as typed into
/// the backend forms; they are not guaranteed to parse as integers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExperienceEntry {
    pub company: String,
    pub position: String,
    pub role: String,
    /// Compensation for this entry, free-form (e.g. "12", "12.5 LPA").
    pub ctc: String,
    pub start: String,
    pub end: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EducationEntry {
    pub course: String,
    pub institution: String,
    pub start: String,
    pub end: String,
}
