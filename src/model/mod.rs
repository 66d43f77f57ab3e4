//! Record types as returned by the ATS backend
//! Plain serde structs; the filter layer treats them as opaque except
//! for the fields its predicates read.

pub mod candidate;
pub mod job;
pub mod match_result;

pub use candidate::{CandidateRecord, EducationEntry, ExperienceEntry};
pub use job::{JobLocation, JobRecord, JobStatus, LocationField};
pub use match_result::MatchResult;
