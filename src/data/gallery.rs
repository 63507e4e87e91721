use std::str::FromStr;

use super::filter::{apply_bounded, FilterSelection};
use super::model::{Company, Job};
use super::store::RecordStore;
use crate::error::BoardError;

/// Which record kinds the landing-page preview shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GalleryMode {
    #[default]
    All,
    Companies,
    Jobs,
}

impl FromStr for GalleryMode {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(GalleryMode::All),
            "companies" | "businesses" => Ok(GalleryMode::Companies),
            "jobs" => Ok(GalleryMode::Jobs),
            _ => Err(BoardError::InvalidGalleryMode(s.to_string())),
        }
    }
}

/// Records picked for the preview gallery.
#[derive(Debug, Clone, Default)]
pub struct Gallery<'a> {
    pub companies: Vec<&'a Company>,
    pub jobs: Vec<&'a Job>,
}

impl Gallery<'_> {
    pub fn is_empty(&self) -> bool {
        self.companies.is_empty() && self.jobs.is_empty()
    }
}

/// Search both collections and keep the first `limit` hits of each kind
/// enabled by `mode`.
pub fn preview<'a>(
    store: &'a RecordStore,
    mode: GalleryMode,
    search: &str,
    limit: usize,
) -> Gallery<'a> {
    let selection = FilterSelection::default().with_search(search);
    let companies = match mode {
        GalleryMode::All | GalleryMode::Companies => {
            apply_bounded(store.companies(), &selection, limit)
        }
        GalleryMode::Jobs => Vec::new(),
    };
    let jobs = match mode {
        GalleryMode::All | GalleryMode::Jobs => apply_bounded(store.jobs(), &selection, limit),
        GalleryMode::Companies => Vec::new(),
    };
    Gallery { companies, jobs }
}
