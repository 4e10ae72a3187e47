use std::collections::HashSet;

use crate::extract::CandidateLink;

/// Keeps the first candidate seen for each link, preserving order.
pub fn dedupe_by_link(candidates: Vec<CandidateLink>) -> Vec<CandidateLink> {
    let mut seen_links: HashSet<String> = HashSet::new();
    candidates
        .into_iter()
        .filter(|candidate| seen_links.insert(candidate.url.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn candidate(org: &str, text: &str, url: &str) -> CandidateLink {
        CandidateLink {
            organization: org.to_string(),
            text: text.to_string(),
            url: url.to_string(),
            date_scraped: NaiveDate::from_ymd_opt(2026, 10, 17).unwrap(),
        }
    }

    #[test]
    fn first_occurrence_wins() {
        let deduped = dedupe_by_link(vec![
            candidate("NHM Kerala", "Public Health Officer", "https://a.gov/1"),
            candidate("NHM Kerala", "Research Officer", "https://a.gov/2"),
            candidate("NHM Odisha", "Public Health Officer (corrigendum)", "https://a.gov/1"),
        ]);

        assert_eq!(deduped.len(), 2);
        assert_eq!(deduped[0].text, "Public Health Officer");
        assert_eq!(deduped[0].organization, "NHM Kerala");
        assert_eq!(deduped[1].url, "https://a.gov/2");
    }

    #[test]
    fn links_differing_only_in_case_are_distinct() {
        let deduped = dedupe_by_link(vec![
            candidate("Org", "Health Consultant", "https://a.gov/Jobs"),
            candidate("Org", "Health Consultant", "https://a.gov/jobs"),
        ]);
        assert_eq!(deduped.len(), 2);
    }

    #[test]
    fn empty_input_stays_empty() {
        assert!(dedupe_by_link(Vec::new()).is_empty());
    }
}
