//! Record filtering engine
//!
//! Pure, total functions: a conjunction of per-field predicates plus a
//! free-text search over lists of records already fetched from the
//! backend, and a separate date-sort stage. Malformed or missing data
//! degrades to "does not exclude"; nothing here errors.

pub mod criteria;
pub mod derived;
pub mod engine;
pub mod sort;

pub use criteria::{CandidateCriteria, JobCriteria, RangeFilter, SetFilter, TextFilter};
pub use engine::{filter_candidates, filter_jobs};
pub use sort::{sort_by_created, SortOrder};
