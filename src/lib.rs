//! Generate client-facing HTML activity reports from git history.
//!
//! The binary shells out to the `git` CLI, parses commit log output for a
//! date range, enriches each commit with change stats, and renders the result
//! through a user-supplied `templates/report.html` template.

pub mod cli;
pub mod error;
pub mod git;
pub mod model;
pub mod render;
pub mod report;
pub mod util;
