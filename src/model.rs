use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// One logical change-set recovered from the commit log, in the order git
/// returned it (reverse chronological).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Commit {
    pub hash: String,
    pub author: String,
    pub date: DateTime<Utc>,
    pub subject: String,
    pub body: String,
    pub files: Vec<String>,
    pub additions: u32,
    pub deletions: u32,
}

/// Everything the renderer needs for one report run.
///
/// `end_date` holds the inclusive display value as given on the command line;
/// the exclusive adjustment for git happens in the retrieval layer.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub company_name: String,
    pub logo_path: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub repo_path: String,
    pub commits: Vec<Commit>,
    pub generated_at: DateTime<Utc>,
}

impl Report {
    pub fn total_additions(&self) -> u64 {
        self.commits.iter().map(|c| c.additions as u64).sum()
    }

    pub fn total_deletions(&self) -> u64 {
        self.commits.iter().map(|c| c.deletions as u64).sum()
    }

    pub fn total_files_changed(&self) -> usize {
        self.commits.iter().map(|c| c.files.len()).sum()
    }
}
