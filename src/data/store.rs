use std::collections::{HashMap, HashSet};

use super::filter::{facet_key, parse_salary};
use super::model::{Company, Job};

// ---------------------------------------------------------------------------
// Derived views
// ---------------------------------------------------------------------------

/// Headline counters shown on the landing page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardStats {
    pub jobs: usize,
    pub companies: usize,
    pub placements: usize,
}

/// Bounds of the parsable salaries, used to size the price slider.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SalaryRange {
    pub min: f64,
    pub max: f64,
}

impl SalaryRange {
    /// Range used when no salary can be parsed.
    pub const FALLBACK: SalaryRange = SalaryRange { min: 0.0, max: 10_000.0 };

    /// Whether a price ceiling actually excludes part of the range.
    pub fn is_limiting(&self, max_price: f64) -> bool {
        max_price < self.max
    }
}

/// A company together with its postings.
#[derive(Debug, Clone)]
pub struct CompanyDetail<'a> {
    pub company: &'a Company,
    pub job_count: usize,
    pub jobs: Vec<&'a Job>,
}

/// A job, its employer when the name resolves, and postings of the same type.
#[derive(Debug, Clone)]
pub struct JobDetail<'a> {
    pub job: &'a Job,
    pub company: Option<&'a Company>,
    pub similar: Vec<&'a Job>,
}

// ---------------------------------------------------------------------------
// RecordStore – both loaded collections plus pre-computed indices
// ---------------------------------------------------------------------------

/// Immutable snapshot of the two datasets.
///
/// Identity lookups (`find_*`, `jobs_for_company`, `job_count`) compare
/// names exactly, case included, so links built from a record's name always
/// resolve back to that record. Filtering elsewhere is case-insensitive.
#[derive(Debug, Clone)]
pub struct RecordStore {
    companies: Vec<Company>,
    jobs: Vec<Job>,
    /// business name → number of jobs naming it.
    job_counts: HashMap<String, usize>,
    /// name → index of the first company with that name.
    company_index: HashMap<String, usize>,
    /// name → index of the first job with that name.
    job_index: HashMap<String, usize>,
    company_locations: Vec<String>,
    job_locations: Vec<String>,
    job_types: Vec<String>,
}

impl RecordStore {
    /// Build indices and derived lists from the loaded collections.
    pub fn build(companies: Vec<Company>, jobs: Vec<Job>) -> Self {
        let mut job_counts: HashMap<String, usize> = HashMap::new();
        for job in &jobs {
            *job_counts.entry(job.business.clone()).or_default() += 1;
        }

        let company_index = first_index(companies.iter().map(|c| c.name.as_str()));
        let job_index = first_index(jobs.iter().map(|j| j.name.as_str()));

        let dangling = jobs
            .iter()
            .filter(|j| !company_index.contains_key(&j.business))
            .count();
        if dangling > 0 {
            log::debug!("{dangling} job(s) reference a business with no company record");
        }

        let company_locations = distinct_values(companies.iter().map(|c| c.location.as_str()));
        let job_locations = distinct_values(jobs.iter().map(|j| j.location.as_str()));
        let job_types = distinct_values(jobs.iter().filter_map(|j| j.job_type.as_deref()));

        RecordStore {
            companies,
            jobs,
            job_counts,
            company_index,
            job_index,
            company_locations,
            job_locations,
            job_types,
        }
    }

    pub fn companies(&self) -> &[Company] {
        &self.companies
    }

    pub fn jobs(&self) -> &[Job] {
        &self.jobs
    }

    /// Number of jobs whose `business` equals the company's name exactly.
    pub fn job_count(&self, company: &Company) -> usize {
        self.job_counts.get(&company.name).copied().unwrap_or(0)
    }

    pub fn find_company_by_name(&self, name: &str) -> Option<&Company> {
        self.company_index.get(name).map(|&i| &self.companies[i])
    }

    pub fn find_job_by_name(&self, name: &str) -> Option<&Job> {
        self.job_index.get(name).map(|&i| &self.jobs[i])
    }

    /// Company named by `job.business`, if any.
    pub fn company_for_job(&self, job: &Job) -> Option<&Company> {
        self.find_company_by_name(&job.business)
    }

    /// All jobs posted under `company_name`, in source order.
    pub fn jobs_for_company(&self, company_name: &str) -> Vec<&Job> {
        self.jobs
            .iter()
            .filter(|j| j.business == company_name)
            .collect()
    }

    /// Distinct job locations, first-seen casing, first-seen order.
    pub fn distinct_locations(&self) -> &[String] {
        &self.job_locations
    }

    /// Distinct job types, first-seen casing, first-seen order.
    pub fn distinct_types(&self) -> &[String] {
        &self.job_types
    }

    /// Distinct company locations, first-seen casing, first-seen order.
    pub fn distinct_company_locations(&self) -> &[String] {
        &self.company_locations
    }

    pub fn stats(&self) -> BoardStats {
        BoardStats {
            jobs: self.jobs.len(),
            companies: self.companies.len(),
            placements: self.jobs.iter().filter(|j| j.is_placement()).count(),
        }
    }

    /// Floor of the lowest and ceiling of the highest parsable salary.
    pub fn salary_range(&self) -> SalaryRange {
        let salaries: Vec<f64> = self
            .jobs
            .iter()
            .filter_map(|j| j.salary.as_deref().and_then(parse_salary))
            .collect();
        if salaries.is_empty() {
            return SalaryRange::FALLBACK;
        }
        let min = salaries.iter().copied().fold(f64::INFINITY, f64::min);
        let max = salaries.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let max = if max == 0.0 { SalaryRange::FALLBACK.max } else { max.ceil() };
        SalaryRange { min: min.floor(), max }
    }

    /// Other jobs with exactly the same type (a missing type matches a
    /// missing type), excluding postings with the same name.
    pub fn similar_jobs(&self, job: &Job) -> Vec<&Job> {
        self.jobs
            .iter()
            .filter(|j| j.job_type == job.job_type && j.name != job.name)
            .collect()
    }

    pub fn company_detail(&self, name: &str) -> Option<CompanyDetail<'_>> {
        let company = self.find_company_by_name(name)?;
        Some(CompanyDetail {
            company,
            job_count: self.job_count(company),
            jobs: self.jobs_for_company(&company.name),
        })
    }

    pub fn job_detail(&self, name: &str) -> Option<JobDetail<'_>> {
        let job = self.find_job_by_name(name)?;
        Some(JobDetail {
            job,
            company: self.company_for_job(job),
            similar: self.similar_jobs(job),
        })
    }
}

/// Map each key to the index of its first occurrence.
fn first_index<'a>(keys: impl Iterator<Item = &'a str>) -> HashMap<String, usize> {
    let mut index = HashMap::new();
    for (i, key) in keys.enumerate() {
        index.entry(key.to_string()).or_insert(i);
    }
    index
}

/// Trim, drop blanks, dedupe case-insensitively keeping the first casing.
pub fn distinct_values<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut out = Vec::new();
    for raw in values {
        let Some(key) = facet_key(Some(raw)) else {
            continue;
        };
        if seen.insert(key) {
            out.push(raw.trim().to_string());
        }
    }
    out
}
