pub mod aggregate;
pub mod config;
pub mod extract;
pub mod pipeline;
pub mod report;
pub mod scraper;
mod utils;

pub use config::{ScanConfig, Target};
pub use extract::CandidateLink;
pub use pipeline::{run_scan, ScanSummary, TargetOutcome};
pub use scraper::{FetchError, PageFetcher, PageSource};
