use crate::cli::Cli;
use crate::error::{ReportError, Result};
use crate::git::GitRepo;
use crate::model::Report;
use crate::render;
use anyhow::Context;
use chrono::{NaiveDate, Utc};
use console::style;
use std::path::PathBuf;

pub fn exec(cli: Cli) -> anyhow::Result<()> {
    let start = parse_date(&cli.start).context("Failed to parse start date")?;
    let end = parse_date(&cli.end).context("Failed to parse end date")?;
    if start > end {
        return Err(ReportError::InvalidDate(format!(
            "Invalid range: start ({start}) is after end ({end})"
        ))
        .into());
    }

    let repo = GitRepo::open(Some(&cli.repo)).context("Failed to open git repository")?;

    // git treats --until as exclusive; push it one day past the requested end
    let until = end
        .succ_opt()
        .ok_or_else(|| ReportError::InvalidDate(format!("End date out of range: {end}")))?;
    let commits = repo
        .collect_commits(start, until)
        .context("Failed to retrieve commits")?;

    let report = Report {
        company_name: cli.company.clone(),
        logo_path: cli
            .logo
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_default(),
        start_date: start,
        end_date: end,
        repo_path: repo.path().display().to_string(),
        commits,
        generated_at: Utc::now(),
    };

    let output = cli
        .output
        .unwrap_or_else(|| PathBuf::from(default_output_name(end, &cli.company)));
    render::render_to_file(&report, &output).context("Failed to render report")?;

    println!(
        "{} {}",
        style("Report generated:").green().bold(),
        output.display()
    );
    Ok(())
}

fn parse_date(input: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .map_err(|_| ReportError::InvalidDate(format!("expected YYYY-MM-DD, got '{input}'")))
}

/// `<end-date>-<company>-report.html`, with separators the filesystem would
/// object to replaced.
pub fn default_output_name(end: NaiveDate, company: &str) -> String {
    let company = company.replace([' ', '/'], "-");
    format!("{}-{company}-report.html", end.format("%Y-%m-%d"))
}
