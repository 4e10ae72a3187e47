use chrono::Local;
use env_logger::Env;

use govt_job_scanner::report::{print_summary, write_report};
use govt_job_scanner::{run_scan, PageFetcher, ScanConfig};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let config = ScanConfig::default();
    config.validate()?;

    let fetcher = PageFetcher::new(&config)?;
    let run_date = Local::now().date_naive();

    let summary = run_scan(&config, &fetcher, run_date);

    match write_report(&summary.candidates, &config.output_dir, run_date) {
        Ok(written) => print_summary(&summary.candidates, written.as_deref()),
        Err(e) => log::error!("Error writing report: {}", e),
    }

    Ok(())
}
