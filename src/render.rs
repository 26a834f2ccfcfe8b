//! Report rendering through a user-supplied tera template.
//!
//! The template is loaded at runtime from `templates/report.html` relative to
//! the working directory. No default template is invented: a missing file is
//! fatal, but the containing directory is created so the user only has to drop
//! the file in.

use crate::error::{ReportError, Result};
use crate::model::{Commit, Report};
use crate::util;
use serde::Serialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use tera::{Context, Tera, Value};

pub const TEMPLATE_DIR: &str = "templates";
pub const TEMPLATE_NAME: &str = "report.html";

/// Flattened, display-ready view of one commit. All dates are pre-formatted
/// so the template never deals with chrono types.
#[derive(Debug, Serialize)]
pub struct CommitView {
    pub hash: String,
    pub author: String,
    pub date: String,
    pub subject: String,
    pub body: String,
    pub files: Vec<String>,
    pub additions: u32,
    pub deletions: u32,
}

/// View-model handed to the template as the render context.
#[derive(Debug, Serialize)]
pub struct ReportView {
    pub company_name: String,
    pub logo_path: String,
    pub start_date: String,
    pub end_date: String,
    pub repo_path: String,
    pub commits: Vec<CommitView>,
    pub total_additions: u64,
    pub total_deletions: u64,
    pub total_files_changed: usize,
    pub generated_at: String,
}

pub fn build_view(report: &Report) -> ReportView {
    ReportView {
        company_name: report.company_name.clone(),
        logo_path: report.logo_path.clone(),
        start_date: report.start_date.format("%Y-%m-%d").to_string(),
        end_date: report.end_date.format("%Y-%m-%d").to_string(),
        repo_path: report.repo_path.clone(),
        commits: report.commits.iter().map(commit_view).collect(),
        total_additions: report.total_additions(),
        total_deletions: report.total_deletions(),
        total_files_changed: report.total_files_changed(),
        generated_at: report.generated_at.format("%Y-%m-%d %H:%M UTC").to_string(),
    }
}

fn commit_view(commit: &Commit) -> CommitView {
    CommitView {
        hash: commit.hash.clone(),
        author: commit.author.clone(),
        date: commit.date.format("%Y-%m-%d %H:%M").to_string(),
        subject: commit.subject.clone(),
        body: commit.body.clone(),
        files: commit.files.clone(),
        additions: commit.additions,
        deletions: commit.deletions,
    }
}

/// Render `report` and write the HTML to `output`, truncating as needed.
pub fn render_to_file(report: &Report, output: &Path) -> Result<()> {
    let html = render(report)?;
    fs::write(output, html)?;
    Ok(())
}

/// Render `report` against `templates/report.html`.
pub fn render(report: &Report) -> Result<String> {
    let template_path = Path::new(TEMPLATE_DIR).join(TEMPLATE_NAME);
    if !template_path.exists() {
        fs::create_dir_all(TEMPLATE_DIR)?;
        return Err(ReportError::TemplateMissing(
            template_path.display().to_string(),
        ));
    }

    let mut tera = Tera::default();
    register_helpers(&mut tera);
    tera.add_template_file(&template_path, Some(TEMPLATE_NAME))?;

    let context = Context::from_serialize(build_view(report))?;
    Ok(tera.render(TEMPLATE_NAME, &context)?)
}

fn register_helpers(tera: &mut Tera) {
    tera.register_function("slice", slice_fn);
}

/// `{{ slice(s=..., start=..., end=...) }}` — bounded substring, clamped to
/// the string length.
fn slice_fn(args: &HashMap<String, Value>) -> tera::Result<Value> {
    let s = args
        .get("s")
        .and_then(Value::as_str)
        .ok_or_else(|| tera::Error::msg("slice: missing string argument `s`"))?;
    let start = args.get("start").and_then(Value::as_u64).unwrap_or(0) as usize;
    let end = args
        .get("end")
        .and_then(Value::as_u64)
        .ok_or_else(|| tera::Error::msg("slice: missing integer argument `end`"))?
        as usize;

    Ok(Value::String(util::slice_bounded(s, start, end).to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone, Utc};
    use pretty_assertions::assert_eq;

    fn sample_report() -> Report {
        Report {
            company_name: "Acme Co".to_string(),
            logo_path: String::new(),
            start_date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2024, 3, 7).unwrap(),
            repo_path: "/work/acme".to_string(),
            commits: vec![Commit {
                hash: "a1b2c3d4e5f6a7b8".to_string(),
                author: "Jane Doe".to_string(),
                date: Utc.with_ymd_and_hms(2024, 3, 4, 12, 30, 0).unwrap(),
                subject: "Add widget".to_string(),
                body: String::new(),
                files: vec!["src/widget.rs".to_string()],
                additions: 12,
                deletions: 3,
            }],
            generated_at: Utc.with_ymd_and_hms(2024, 3, 8, 9, 0, 0).unwrap(),
        }
    }

    #[test]
    fn view_formats_dates_and_totals() {
        let view = build_view(&sample_report());
        assert_eq!(view.start_date, "2024-03-01");
        assert_eq!(view.end_date, "2024-03-07");
        assert_eq!(view.commits[0].date, "2024-03-04 12:30");
        assert_eq!(view.total_additions, 12);
        assert_eq!(view.total_deletions, 3);
        assert_eq!(view.total_files_changed, 1);
    }

    #[test]
    fn slice_function_is_usable_from_templates() {
        let mut tera = Tera::default();
        register_helpers(&mut tera);
        tera.add_raw_template("t", "{{ slice(s=hash, start=0, end=7) }}")
            .unwrap();

        let mut context = Context::new();
        context.insert("hash", "a1b2c3d4e5f6");
        assert_eq!(tera.render("t", &context).unwrap(), "a1b2c3d");
    }

    #[test]
    fn slice_function_clamps_out_of_range() {
        let mut tera = Tera::default();
        register_helpers(&mut tera);
        tera.add_raw_template("t", "[{{ slice(s=v, start=5, end=9) }}]")
            .unwrap();

        let mut context = Context::new();
        context.insert("v", "hi");
        assert_eq!(tera.render("t", &context).unwrap(), "[]");
    }
}
