//! Integration tests for the ATS screener

use ats_screener::filter::{
    filter_candidates, filter_jobs, sort_by_created, CandidateCriteria, JobCriteria, RangeFilter,
    SetFilter, SortOrder, TextFilter,
};
use ats_screener::input::manager::InputManager;
use ats_screener::matching::{clamp_limit, project};
use ats_screener::model::{CandidateRecord, JobRecord, MatchResult};
use ats_screener::output::formatter::{ConsoleFormatter, JsonFormatter};
use std::path::Path;

#[tokio::test]
async fn test_candidate_export_loads() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/candidates.json");

    let records: Vec<CandidateRecord> = manager.load_records(path).await.unwrap();
    assert_eq!(records.len(), 4);
    assert_eq!(records[0].name, "Priya Sharma");
    assert_eq!(records[0].skills, vec!["React", "TypeScript", "Node.js"]);
    assert_eq!(records[0].talent_pools, vec!["pool-frontend"]);
    // c-003 carries no experience or education at all.
    assert!(records[2].experience.is_empty());
    assert!(records[2].education.is_empty());
}

#[tokio::test]
async fn test_caching_functionality() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/candidates.json");

    let first: Vec<CandidateRecord> = manager.load_records(path).await.unwrap();
    assert_eq!(manager.cache_size(), 1);

    let second: Vec<CandidateRecord> = manager.load_records(path).await.unwrap();
    assert_eq!(first, second);
    assert_eq!(manager.cache_size(), 1);

    manager.clear_cache();
    assert_eq!(manager.cache_size(), 0);
}

#[tokio::test]
async fn test_unsupported_file_type() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/unsupported.csv");

    let result: ats_screener::Result<Vec<CandidateRecord>> = manager.load_records(path).await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_nonexistent_file() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/nonexistent.json");

    let result: ats_screener::Result<Vec<CandidateRecord>> = manager.load_records(path).await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_candidate_filter_pipeline() {
    let mut manager = InputManager::new();
    let records: Vec<CandidateRecord> = manager
        .load_records(Path::new("tests/fixtures/candidates.json"))
        .await
        .unwrap();

    // Skill overlap is case-insensitive substring: "react" matches
    // both "React" and "React Native".
    let mut criteria = CandidateCriteria::default();
    criteria.skills = SetFilter::new(vec!["react".to_string()]);
    let matched = filter_candidates(&records, &criteria, "");
    let ids: Vec<&str> = matched.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, vec!["c-001", "c-003"]);

    // Tightening the experience range keeps Priya (6 known years) and
    // Mara (unknown, never excluded) but still needs the skill match.
    criteria.experience_years = RangeFilter::active(5.0, 10.0, (0.0, 20.0));
    let narrowed = filter_candidates(&records, &criteria, "");
    let ids: Vec<&str> = narrowed.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, vec!["c-001", "c-003"]);

    // Tomas has experience entries that do not parse as years: his
    // computed total is 0, which falls outside 5..10.
    criteria.skills = SetFilter::new(vec![]);
    let by_range = filter_candidates(&records, &criteria, "");
    assert!(!by_range.iter().any(|c| c.id == "c-004"));

    // Sort stage: newest export entries first.
    let mut all = records.clone();
    sort_by_created(&mut all, SortOrder::Desc);
    let ids: Vec<&str> = all.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, vec!["c-003", "c-001", "c-002", "c-004"]);
}

#[tokio::test]
async fn test_job_filter_pipeline() {
    let mut manager = InputManager::new();
    let records: Vec<JobRecord> = manager
        .load_records(Path::new("tests/fixtures/jobs.json"))
        .await
        .unwrap();

    // Exact status equality.
    let mut criteria = JobCriteria::default();
    criteria.status = "Completed".to_string();
    let completed = filter_jobs(&records, &criteria, "");
    assert_eq!(completed.len(), 1);
    assert_eq!(completed[0].id, "j-003");

    // Range overlap: a floor of 10 still passes the 8..15 job, and the
    // unpublished-range job never gets excluded.
    let mut by_ctc = JobCriteria::default();
    by_ctc.ctc_low = Some(10.0);
    let affordable = filter_jobs(&records, &by_ctc, "");
    let ids: Vec<&str> = affordable.iter().map(|j| j.id.as_str()).collect();
    assert_eq!(ids, vec!["j-001", "j-002", "j-003"]);

    by_ctc.ctc_low = Some(16.0);
    let pricier = filter_jobs(&records, &by_ctc, "");
    let ids: Vec<&str> = pricier.iter().map(|j| j.id.as_str()).collect();
    assert_eq!(ids, vec!["j-002", "j-003"]);

    // Location matches the structured shape too.
    let mut by_location = JobCriteria::default();
    by_location.location = TextFilter::new("berlin");
    let berlin = filter_jobs(&records, &by_location, "");
    assert_eq!(berlin.len(), 1);
    assert_eq!(berlin[0].id, "j-002");

    let mut all = records.clone();
    sort_by_created(&mut all, SortOrder::Desc);
    let ids: Vec<&str> = all.iter().map(|j| j.id.as_str()).collect();
    assert_eq!(ids, vec!["j-002", "j-001", "j-003"]);
}

#[tokio::test]
async fn test_match_projection_pipeline() {
    let mut manager = InputManager::new();
    let matches: Vec<MatchResult<JobRecord>> = manager
        .load_records(Path::new("tests/fixtures/job_matches.json"))
        .await
        .unwrap();
    assert_eq!(matches.len(), 3);

    let limit = clamp_limit(2, 100);
    let shown = project(&matches, limit);
    assert_eq!(shown.len(), 2);
    assert_eq!(shown[0].record.id, "j-002");
    assert_eq!(shown[1].record.id, "j-001");

    let text = ConsoleFormatter::new(false, false).format_job_matches(&shown);
    assert!(text.contains("Found 2 suitable job(s)"));
    assert!(text.contains("Platform Engineer"));
    assert!(text.contains("91% match"));

    // A limit above the configured maximum collapses to the maximum;
    // above the list length it just returns everything.
    assert_eq!(project(&matches, clamp_limit(500, 100)).len(), 3);
    assert!(project(&matches, clamp_limit(-1, 100)).is_empty());
}

#[tokio::test]
async fn test_json_output_round_trip() {
    let mut manager = InputManager::new();
    let records: Vec<CandidateRecord> = manager
        .load_records(Path::new("tests/fixtures/candidates.json"))
        .await
        .unwrap();

    let mut criteria = CandidateCriteria::default();
    criteria.name = TextFilter::new("priya");
    let matched = filter_candidates(&records, &criteria, "");

    let text = JsonFormatter::new(true).format(&matched).unwrap();
    let back: Vec<CandidateRecord> = serde_json::from_str(&text).unwrap();
    assert_eq!(back, matched);

    // The rendered JSON keeps the backend's camelCase field names.
    assert!(text.contains("talentPools"));
    assert!(text.contains("createdAt"));
}

#[tokio::test]
async fn test_filtered_export_saves_to_scratch_file() {
    let mut manager = InputManager::new();
    let records: Vec<JobRecord> = manager
        .load_records(Path::new("tests/fixtures/jobs.json"))
        .await
        .unwrap();

    let rendered = JsonFormatter::new(false).format(&records).unwrap();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("jobs-filtered.json");
    tokio::fs::write(&path, &rendered).await.unwrap();

    let reloaded: Vec<JobRecord> = manager.load_records(&path).await.unwrap();
    assert_eq!(reloaded, records);
}
