pub mod log;
pub mod repo;

pub use log::{parse_diffstat, parse_log, parse_name_only};
pub use repo::GitRepo;
