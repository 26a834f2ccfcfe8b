use crate::error::{ReportError, Result};
use crate::git::log::{self, LOG_FORMAT};
use crate::model::Commit;
use chrono::NaiveDate;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::{Path, PathBuf};
use std::process::Command;

/// A local repository addressed through the `git` binary on PATH.
pub struct GitRepo {
    path: PathBuf,
}

impl GitRepo {
    /// Open a repository at `path`, or current dir if `None`
    pub fn open<P: AsRef<Path>>(path: Option<P>) -> Result<Self> {
        let repo_path = path
            .map(|p| p.as_ref().to_path_buf())
            .unwrap_or(std::env::current_dir()?);

        let path = repo_path.canonicalize().map_err(|_| {
            ReportError::NotARepository(repo_path.display().to_string())
        })?;

        if !path.join(".git").exists() {
            return Err(ReportError::NotARepository(path.display().to_string()));
        }

        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn run(&self, args: &[&str]) -> Result<String> {
        let output = Command::new("git")
            .args(args)
            .current_dir(&self.path)
            .output()?;

        if !output.status.success() {
            return Err(ReportError::GitCommand {
                command: format!("git {}", args.join(" ")),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    /// Commits between `since` (inclusive) and `until` (exclusive), newest
    /// first, each enriched with its change stats.
    ///
    /// Per-record failures degrade: a record with an unparseable date is
    /// skipped with a warning, and a failed stats lookup leaves the commit in
    /// place with an empty file list and zero counts.
    pub fn collect_commits(&self, since: NaiveDate, until: NaiveDate) -> Result<Vec<Commit>> {
        let since_arg = format!("--since={}", since.format("%Y-%m-%d"));
        let until_arg = format!("--until={}", until.format("%Y-%m-%d"));
        let format_arg = format!("--format={LOG_FORMAT}");
        let raw = self.run(&["log", &since_arg, &until_arg, &format_arg])?;

        let records = log::parse_log(&raw);

        let pb = ProgressBar::new(records.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} {msg} {pos}/{len}")
                .unwrap_or_else(|_| ProgressStyle::default_bar()),
        );
        pb.set_message("Collecting commit stats...");

        let mut commits = Vec::new();
        for record in records {
            let mut commit = match record {
                Ok(commit) => commit,
                Err(skipped) => {
                    pb.suspend(|| {
                        eprintln!(
                            "{} could not parse date '{}' for commit {}",
                            style("warning:").yellow().bold(),
                            skipped.raw_date,
                            skipped.hash
                        );
                    });
                    continue;
                }
            };

            match self.commit_changes(&commit.hash) {
                Ok((files, additions, deletions)) => {
                    commit.files = files;
                    commit.additions = additions;
                    commit.deletions = deletions;
                }
                Err(e) => {
                    pb.suspend(|| {
                        eprintln!(
                            "{} could not get changes for commit {}: {e}",
                            style("warning:").yellow().bold(),
                            commit.hash
                        );
                    });
                }
            }

            commits.push(commit);
            pb.inc(1);
        }

        pb.finish_and_clear();
        Ok(commits)
    }

    /// Changed file paths and aggregate (insertions, deletions) for one commit.
    pub fn commit_changes(&self, hash: &str) -> Result<(Vec<String>, u32, u32)> {
        let names = self.run(&["show", "--name-only", "--format=", hash])?;
        let files = log::parse_name_only(&names);

        let stat = self.run(&["show", "--stat", "--format=", hash])?;
        let (additions, deletions) = log::parse_diffstat(&stat);

        Ok((files, additions, deletions))
    }
}
