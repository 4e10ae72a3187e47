use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) Chrome/120.0.0.0 Safari/537.36";
pub const DEFAULT_ACCEPT: &str = "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8";

/// Case-insensitive markers for a vacancy worth flagging.
pub const DEFAULT_KEYWORDS: [&str; 9] = [
    "MPH",
    "Public Health",
    "Epidemiologist",
    "Consultant",
    "Program Manager",
    "Community",
    "Research",
    "Health",
    "Officer",
];

const PORTALS: [(&str, &str); 10] = [
    ("ICMR (Central)", "https://www.icmr.gov.in/employment-opportunities"),
    ("NHSRC (Central)", "https://nhsrcindia.org/career"),
    ("NCDC (Central)", "https://ncdc.mohfw.gov.in/vacancies/"),
    ("NHM Maharashtra", "https://nhm.maharashtra.gov.in/en/notice-category/recruitments/"),
    ("NHM Kerala", "https://arogyakeralam.gov.in/category/careers/"),
    ("NHM Odisha", "https://nhmodisha.gov.in/vacancies/"),
    ("NHM Haryana", "https://haryanahealth.gov.in/notice-category/recruitments/"),
    ("NHM Assam", "https://nhm.assam.gov.in/portlets/recruitment"),
    ("TISS Projects", "https://tiss.edu/project-positions/"),
    ("BECIL (Outsourcing)", "https://www.becil.com/vacancies"),
];

/// One government portal to scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    pub name: String,
    pub url: String,
}

impl Target {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }
}

/// Everything a scan needs, built once and passed down by reference.
#[derive(Debug, Clone)]
pub struct ScanConfig {
    pub targets: Vec<Target>,
    pub keywords: Vec<String>,
    pub user_agent: String,
    pub accept: String,
    pub timeout: Duration,
    /// Pause after each target, successful or not.
    pub delay: Duration,
    pub output_dir: PathBuf,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            targets: default_targets(),
            keywords: DEFAULT_KEYWORDS.iter().map(|k| k.to_string()).collect(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            accept: DEFAULT_ACCEPT.to_string(),
            timeout: Duration::from_secs(15),
            delay: Duration::from_secs(1),
            output_dir: PathBuf::from("."),
        }
    }
}

impl ScanConfig {
    /// Same headers and keywords as the default, scanning only `targets`.
    pub fn with_targets(targets: Vec<Target>) -> Self {
        Self {
            targets,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if self.targets.is_empty() {
            return Err(anyhow::anyhow!("No targets configured"));
        }
        if self.keywords.iter().all(|k| k.trim().is_empty()) {
            return Err(anyhow::anyhow!("Keyword list is empty"));
        }
        for target in &self.targets {
            if !target.url.contains("://") {
                return Err(anyhow::anyhow!(
                    "Target '{}' has a URL without a scheme: {}",
                    target.name,
                    target.url
                ));
            }
        }
        Ok(())
    }
}

pub fn default_targets() -> Vec<Target> {
    PORTALS
        .iter()
        .map(|(name, url)| Target::new(*name, *url))
        .collect()
}
