use chrono::NaiveDate;
use csv::WriterBuilder;
use std::fs;
use std::path::{Path, PathBuf};

use crate::extract::CandidateLink;

const PREVIEW_ROWS: usize = 5;

pub fn report_file_name(run_date: NaiveDate) -> String {
    format!("Govt_MPH_Jobs_{}.csv", run_date.format("%Y%m%d"))
}

/// Writes the deduplicated candidates to a dated CSV under `output_dir`.
///
/// Returns `None` without touching the filesystem when there is nothing to write.
pub fn write_report(
    candidates: &[CandidateLink],
    output_dir: &Path,
    run_date: NaiveDate,
) -> anyhow::Result<Option<PathBuf>> {
    if candidates.is_empty() {
        return Ok(None);
    }

    fs::create_dir_all(output_dir)?;
    let csv_path = output_dir.join(report_file_name(run_date));

    let mut wtr = WriterBuilder::new().has_headers(true).from_path(&csv_path)?;
    for candidate in candidates {
        wtr.serialize(candidate)?;
    }
    wtr.flush()?;

    Ok(Some(csv_path))
}

pub fn print_summary(candidates: &[CandidateLink], written: Option<&Path>) {
    let Some(path) = written else {
        println!("\nNo jobs found today.");
        return;
    };

    println!(
        "\nDone! Saved {} jobs to '{}'",
        candidates.len(),
        path.display()
    );
    print!("{}", preview(candidates));
}

/// Fixed-width table of the first few rows.
pub fn preview(candidates: &[CandidateLink]) -> String {
    let rows = &candidates[..candidates.len().min(PREVIEW_ROWS)];
    let org_width = rows
        .iter()
        .map(|c| c.organization.chars().count())
        .max()
        .unwrap_or(0)
        .max("Organization".len());

    let mut out = format!(
        "{:<width$}  {}\n",
        "Organization",
        "Notification Text",
        width = org_width
    );
    for candidate in rows {
        out.push_str(&format!(
            "{:<width$}  {}\n    {}\n",
            candidate.organization,
            candidate.text,
            candidate.url,
            width = org_width
        ));
    }
    out
}
