use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "greport")]
#[command(about = "Generate a client-facing HTML activity report from git history")]
#[command(version)]
pub struct Cli {
    #[arg(long, help = "Start date (YYYY-MM-DD)")]
    pub start: String,

    #[arg(long, help = "End date (YYYY-MM-DD, inclusive)")]
    pub end: String,

    #[arg(long, help = "Path to git repository", default_value = ".")]
    pub repo: PathBuf,

    #[arg(long, help = "Path to company logo")]
    pub logo: Option<PathBuf>,

    #[arg(long, help = "Company name shown in the report", default_value = "Company")]
    pub company: String,

    #[arg(
        long,
        help = "Output HTML file path (default: <end-date>-<company>-report.html)"
    )]
    pub output: Option<PathBuf>,
}

impl Cli {
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    pub fn execute(self) -> Result<()> {
        crate::report::exec(self)
    }
}
