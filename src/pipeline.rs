use chrono::NaiveDate;
use std::thread;

use crate::aggregate::dedupe_by_link;
use crate::config::{ScanConfig, Target};
use crate::extract::{extract_candidates, CandidateLink};
use crate::scraper::PageSource;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TargetOutcome {
    Fetched { candidates: usize },
    Failed { error: String },
}

#[derive(Debug, Clone)]
pub struct ScanSummary {
    pub outcomes: Vec<(String, TargetOutcome)>,
    /// Deduplicated, in first-seen order across targets.
    pub candidates: Vec<CandidateLink>,
}

/// Fetches and filters one portal. A failed fetch is logged and counts as no matches.
pub fn scan_target<S: PageSource + ?Sized>(
    source: &S,
    target: &Target,
    keywords: &[String],
    run_date: NaiveDate,
) -> (Vec<CandidateLink>, TargetOutcome) {
    match source.fetch(&target.url) {
        Ok(html) => {
            let found = extract_candidates(&html, &target.url, &target.name, keywords, run_date);
            let outcome = TargetOutcome::Fetched {
                candidates: found.len(),
            };
            (found, outcome)
        }
        Err(e) => {
            log::error!("Error on {}: {}", target.name, e);
            (
                Vec::new(),
                TargetOutcome::Failed {
                    error: e.to_string(),
                },
            )
        }
    }
}

/// Scans every configured target in order, pausing `config.delay` after each.
pub fn run_scan<S: PageSource + ?Sized>(
    config: &ScanConfig,
    source: &S,
    run_date: NaiveDate,
) -> ScanSummary {
    println!(
        "Starting scan of {} government portals...\n",
        config.targets.len()
    );

    let mut master_list = Vec::new();
    let mut outcomes = Vec::with_capacity(config.targets.len());

    for target in &config.targets {
        println!("Scanning {}...", target.name);
        let (found, outcome) = scan_target(source, target, &config.keywords, run_date);

        if found.is_empty() {
            log::info!("No text matches found on {}", target.name);
            println!("   No text matches found.");
        } else {
            log::info!("{}: {} candidate links", target.name, found.len());
            println!("   Found {} potential leads.", found.len());
            master_list.extend(found);
        }
        outcomes.push((target.name.clone(), outcome));

        if !config.delay.is_zero() {
            thread::sleep(config.delay);
        }
    }

    let candidates = dedupe_by_link(master_list);
    log::debug!("{} unique links after deduplication", candidates.len());

    ScanSummary {
        outcomes,
        candidates,
    }
}
