use std::str::FromStr;

use super::model::{Company, Job};
use crate::error::BoardError;

/// Number of records per kind shown by the landing-page preview.
pub const PREVIEW_LIMIT: usize = 10;

// ---------------------------------------------------------------------------
// Filter selection: the currently active constraints
// ---------------------------------------------------------------------------

/// Employment-type constraint. Absent means both kinds are shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Employment {
    Full,
    Part,
}

impl FromStr for Employment {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "full" | "full-time" => Ok(Employment::Full),
            "part" | "part-time" => Ok(Employment::Part),
            _ => Err(BoardError::InvalidEmployment(s.to_string())),
        }
    }
}

/// Immutable description of every active constraint.
///
/// Every field is optional; an absent or blank value never restricts the
/// result. `job_type`, `max_price` and `employment` only apply to jobs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterSelection {
    pub search_text: Option<String>,
    pub location: Option<String>,
    pub job_type: Option<String>,
    /// Salary ceiling. `None`, infinite or NaN means unbounded.
    pub max_price: Option<f64>,
    pub employment: Option<Employment>,
}

impl FilterSelection {
    /// True when no field restricts anything.
    pub fn is_empty(&self) -> bool {
        search_needle(self).is_none()
            && facet_key(self.location.as_deref()).is_none()
            && facet_key(self.job_type.as_deref()).is_none()
            && price_ceiling(self.max_price).is_none()
            && self.employment.is_none()
    }

    pub fn with_search(mut self, text: impl Into<String>) -> Self {
        self.search_text = Some(text.into());
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn with_job_type(mut self, job_type: impl Into<String>) -> Self {
        self.job_type = Some(job_type.into());
        self
    }

    pub fn with_max_price(mut self, max_price: f64) -> Self {
        self.max_price = Some(max_price);
        self
    }

    pub fn with_employment(mut self, employment: Employment) -> Self {
        self.employment = Some(employment);
        self
    }
}

// ---------------------------------------------------------------------------
// Filterable: one engine for both record kinds
// ---------------------------------------------------------------------------

/// A record kind the engine can filter.
pub trait Filterable {
    /// Whether the record satisfies every active constraint of `selection`.
    fn matches(&self, selection: &FilterSelection) -> bool;
}

impl Filterable for Company {
    /// Search covers `name` and `industry`; job-only fields are ignored.
    fn matches(&self, selection: &FilterSelection) -> bool {
        matches_search(selection, &self.name, self.industry.as_deref())
            && matches_facet(&self.location, selection.location.as_deref())
    }
}

impl Filterable for Job {
    fn matches(&self, selection: &FilterSelection) -> bool {
        matches_search(selection, &self.name, Some(self.business.as_str()))
            && matches_facet(&self.location, selection.location.as_deref())
            && matches_facet(
                self.job_type.as_deref().unwrap_or(""),
                selection.job_type.as_deref(),
            )
            && matches_price(self.salary.as_deref(), selection.max_price)
            && matches_employment(self, selection.employment)
    }
}

/// Return indices of records that pass all active filters, in source order.
pub fn filtered_indices<T: Filterable>(records: &[T], selection: &FilterSelection) -> Vec<usize> {
    let indices: Vec<usize> = records
        .iter()
        .enumerate()
        .filter(|(_, r)| r.matches(selection))
        .map(|(i, _)| i)
        .collect();
    log::debug!(
        "filter kept {}/{} records for {selection:?}",
        indices.len(),
        records.len()
    );
    indices
}

/// Return the records that pass all active filters, in source order.
pub fn apply<'a, T: Filterable>(records: &'a [T], selection: &FilterSelection) -> Vec<&'a T> {
    records.iter().filter(|r| r.matches(selection)).collect()
}

/// Like [`apply`], truncated to the first `limit` matches.
///
/// The cap is applied after filtering, so it never changes which records
/// qualify, only how many are returned.
pub fn apply_bounded<'a, T: Filterable>(
    records: &'a [T],
    selection: &FilterSelection,
    limit: usize,
) -> Vec<&'a T> {
    records
        .iter()
        .filter(|r| r.matches(selection))
        .take(limit)
        .collect()
}

// ---------------------------------------------------------------------------
// Individual predicates
// ---------------------------------------------------------------------------

fn search_needle(selection: &FilterSelection) -> Option<String> {
    selection
        .search_text
        .as_deref()
        .filter(|s| !s.is_empty())
        .map(str::to_lowercase)
}

/// Trimmed, lowercased comparison key; `None` when blank.
pub(crate) fn facet_key(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_lowercase)
}

fn price_ceiling(max_price: Option<f64>) -> Option<f64> {
    max_price.filter(|p| p.is_finite())
}

fn matches_search(selection: &FilterSelection, primary: &str, secondary: Option<&str>) -> bool {
    let Some(needle) = search_needle(selection) else {
        return true;
    };
    primary.to_lowercase().contains(&needle)
        || secondary.is_some_and(|s| s.to_lowercase().contains(&needle))
}

fn matches_facet(value: &str, wanted: Option<&str>) -> bool {
    match facet_key(wanted) {
        Some(key) => value.trim().to_lowercase() == key,
        None => true,
    }
}

fn matches_price(salary: Option<&str>, max_price: Option<f64>) -> bool {
    let Some(ceiling) = price_ceiling(max_price) else {
        return true;
    };
    match salary.and_then(parse_salary) {
        Some(amount) => amount <= ceiling,
        None => true,
    }
}

fn matches_employment(job: &Job, employment: Option<Employment>) -> bool {
    match employment {
        Some(Employment::Full) => job.is_full_time(),
        Some(Employment::Part) => !job.is_full_time(),
        None => true,
    }
}

// ---------------------------------------------------------------------------
// Salary parsing
// ---------------------------------------------------------------------------

/// Extract a number from free-form salary text.
///
/// Every character other than digits, `,` and `.` is dropped, then the
/// commas. The longest leading `digits[.digits]` prefix of what remains is
/// parsed, so `"1.2.3"` reads as `1.2` and `"50k"` as `50`. Returns `None`
/// (unparsable) when no digit survives or the value is not finite.
pub fn parse_salary(text: &str) -> Option<f64> {
    let cleaned: String = text
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();

    let mut end = 0;
    let mut seen_dot = false;
    let mut seen_digit = false;
    for (i, c) in cleaned.char_indices() {
        match c {
            '0'..='9' => seen_digit = true,
            '.' if !seen_dot => seen_dot = true,
            _ => break,
        }
        end = i + 1;
    }
    if !seen_digit {
        return None;
    }

    let prefix = cleaned[..end].trim_end_matches('.');
    let literal = if prefix.starts_with('.') {
        format!("0{prefix}")
    } else {
        prefix.to_string()
    };
    literal.parse::<f64>().ok().filter(|v| v.is_finite())
}
