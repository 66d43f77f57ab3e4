//! Creation-date sort stage, separate from filtering

use chrono::{DateTime, Utc};
use std::str::FromStr;

use crate::model::{CandidateRecord, JobRecord, MatchResult};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    /// Newest first; the listing default.
    #[default]
    Desc,
}

impl FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "asc" => Ok(SortOrder::Asc),
            "desc" => Ok(SortOrder::Desc),
            _ => Err(format!("Invalid sort order: {}. Supported: asc, desc", s)),
        }
    }
}

/// Anything carrying the backend's `createdAt` stamp.
pub trait Dated {
    fn created_at(&self) -> Option<DateTime<Utc>>;
}

impl Dated for CandidateRecord {
    fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created_at
    }
}

impl Dated for JobRecord {
    fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created_at
    }
}

impl<R: Dated> Dated for MatchResult<R> {
    fn created_at(&self) -> Option<DateTime<Utc>> {
        self.record.created_at()
    }
}

/// Stable sort on creation date; records without a timestamp sort as
/// epoch zero (oldest).
pub fn sort_by_created<T: Dated>(records: &mut [T], order: SortOrder) {
    records.sort_by(|a, b| {
        let ka = a.created_at().unwrap_or(DateTime::<Utc>::UNIX_EPOCH);
        let kb = b.created_at().unwrap_or(DateTime::<Utc>::UNIX_EPOCH);
        match order {
            SortOrder::Asc => ka.cmp(&kb),
            SortOrder::Desc => kb.cmp(&ka),
        }
    });
}
