//! Match results produced by the external matching service

use serde::{Deserialize, Serialize};

/// A record annotated with a relevance score and the matcher's
/// human-readable explanations. The service returns these already
/// sorted by descending score; they live only as long as the results
/// view that requested them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult<R> {
    #[serde(flatten)]
    pub record: R,
    pub score: f64,
    #[serde(default)]
    pub match_details: Vec<String>,
}
