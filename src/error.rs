use thiserror::Error;

pub type Result<T> = std::result::Result<T, ReportError>;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Not a git repository: {0}")]
    NotARepository(String),
    #[error("{command} failed: {stderr}")]
    GitCommand { command: String, stderr: String },
    #[error("Invalid date: {0}")]
    InvalidDate(String),
    #[error("Template not found: {0} (create it before running)")]
    TemplateMissing(String),
    #[error("Template error: {0}")]
    Template(#[from] Box<tera::Error>),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

// Manual From implementation for unboxed to boxed conversion
impl From<tera::Error> for ReportError {
    fn from(err: tera::Error) -> Self {
        ReportError::Template(Box::new(err))
    }
}
