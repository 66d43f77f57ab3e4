//! Fields derived from a candidate's experience entries
//!
//! These are computed on the fly by predicates and formatters; the
//! "unknown" case is an explicit `None`, rendered as "Not Mentioned"
//! only at the output layer.

use crate::model::CandidateRecord;

/// Total years of experience: per entry, `end - start` when both year
/// strings parse as integers; entries that do not parse contribute 0.
/// `None` when the candidate has no experience entries at all. A
/// candidate whose entries all fail to parse still yields `Some(0)`.
pub fn total_experience_years(candidate: &CandidateRecord) -> Option<i64> {
    if candidate.experience.is_empty() {
        return None;
    }
    let years = candidate
        .experience
        .iter()
        .map(|entry| {
            match (
                entry.start.trim().parse::<i64>(),
                entry.end.trim().parse::<i64>(),
            ) {
                (Ok(start), Ok(end)) => end - start,
                _ => 0,
            }
        })
        .sum();
    Some(years)
}

/// The first experience entry is the current one.
pub fn current_company(candidate: &CandidateRecord) -> Option<&str> {
    candidate.experience.first().map(|e| e.company.as_str())
}

pub fn current_position(candidate: &CandidateRecord) -> Option<&str> {
    candidate.experience.first().map(|e| e.position.as_str())
}

/// Current compensation as entered on the first experience entry,
/// free-form string; see [`parse_amount`] for the numeric reading.
pub fn current_ctc(candidate: &CandidateRecord) -> Option<&str> {
    candidate.experience.first().map(|e| e.ctc.as_str())
}

/// Lenient numeric parse for compensation values: reads the leading
/// numeric prefix so form inputs like "12.5 LPA" still compare. `None`
/// when there is no leading number, which the threshold filters treat
/// as unknown (never excluded).
pub fn parse_amount(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    let prefix_len = trimmed
        .char_indices()
        .take_while(|(_, c)| c.is_ascii_digit() || *c == '.')
        .map(|(i, c)| i + c.len_utf8())
        .last()?;
    trimmed[..prefix_len].parse::<f64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ExperienceEntry;

    fn with_experience(entries: &[(&str, &str)]) -> CandidateRecord {
        CandidateRecord {
            experience: entries
                .iter()
                .map(|(start, end)| ExperienceEntry {
                    start: start.to_string(),
                    end: end.to_string(),
                    ..Default::default()
                })
                .collect(),
            ..Default::default()
        }
    }

    #[test]
    fn years_sum_over_entries() {
        let candidate = with_experience(&[("2018", "2021"), ("2021", "2023")]);
        assert_eq!(total_experience_years(&candidate), Some(5));
    }

    #[test]
    fn years_unknown_without_entries() {
        assert_eq!(total_experience_years(&CandidateRecord::default()), None);
    }

    #[test]
    fn unparsable_entries_contribute_zero() {
        let candidate = with_experience(&[("2019", "2022"), ("Mar 2022", "Present")]);
        assert_eq!(total_experience_years(&candidate), Some(3));

        let all_unparsable = with_experience(&[("", "Present")]);
        assert_eq!(total_experience_years(&all_unparsable), Some(0));
    }

    #[test]
    fn current_fields_come_from_first_entry() {
        let mut candidate = with_experience(&[("2020", "2024"), ("2016", "2020")]);
        candidate.experience[0].company = "Acme".to_string();
        candidate.experience[0].position = "Engineer".to_string();
        candidate.experience[0].ctc = "14".to_string();

        assert_eq!(current_company(&candidate), Some("Acme"));
        assert_eq!(current_position(&candidate), Some("Engineer"));
        assert_eq!(current_ctc(&candidate), Some("14"));
        assert_eq!(current_company(&CandidateRecord::default()), None);
    }

    #[test]
    fn amount_parsing_is_lenient() {
        assert_eq!(parse_amount("12"), Some(12.0));
        assert_eq!(parse_amount(" 12.5 LPA "), Some(12.5));
        assert_eq!(parse_amount("LPA 12"), None);
        assert_eq!(parse_amount(""), None);
        assert_eq!(parse_amount("Not Mentioned"), None);
    }
}
