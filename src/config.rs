use std::path::{Path, PathBuf};

use crate::data::filter::PREVIEW_LIMIT;

pub const DEFAULT_DATA_DIR: &str = "json";
pub const COMPANIES_FILE: &str = "business.json";
pub const JOBS_FILE: &str = "jobs.json";

/// Where the datasets live and how much the preview gallery shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardConfig {
    pub companies_path: PathBuf,
    pub jobs_path: PathBuf,
    pub preview_limit: usize,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self::from_data_dir(DEFAULT_DATA_DIR)
    }
}

impl BoardConfig {
    /// Resolve the default file names inside `dir`.
    pub fn from_data_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            companies_path: dir.join(COMPANIES_FILE),
            jobs_path: dir.join(JOBS_FILE),
            preview_limit: PREVIEW_LIMIT,
        }
    }

    pub fn with_companies_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.companies_path = path.into();
        self
    }

    pub fn with_jobs_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.jobs_path = path.into();
        self
    }
}
