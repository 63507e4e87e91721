use std::path::Path;

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value as JsonValue;

use super::model::{Company, FullTimeFlag, Headcount, Job};
use super::store::RecordStore;
use crate::config::BoardConfig;
use crate::error::BoardError;

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load both datasets and build the store. Fails if either file fails.
pub fn load_board(config: &BoardConfig) -> Result<RecordStore> {
    let companies = load_companies(&config.companies_path)
        .with_context(|| format!("loading companies from {}", config.companies_path.display()))?;
    let jobs = load_jobs(&config.jobs_path)
        .with_context(|| format!("loading jobs from {}", config.jobs_path.display()))?;
    log::info!("Loaded {} companies and {} jobs", companies.len(), jobs.len());
    Ok(RecordStore::build(companies, jobs))
}

/// Load company records. Dispatch by extension.
///
/// Supported formats:
/// * `.json` – `[{ "name": ..., "industry": ..., ... }, ...]`
/// * `.csv`  – header row naming the fields
pub fn load_companies(path: &Path) -> Result<Vec<Company>> {
    match DatasetFormat::from_path(path)? {
        DatasetFormat::Json => load_json(path),
        DatasetFormat::Csv => load_csv::<CsvCompanyRow>(path)
            .map(|rows| rows.into_iter().map(Company::from).collect()),
    }
}

/// Load job records. Dispatch by extension, same formats as companies.
pub fn load_jobs(path: &Path) -> Result<Vec<Job>> {
    match DatasetFormat::from_path(path)? {
        DatasetFormat::Json => load_json(path),
        DatasetFormat::Csv => {
            load_csv::<CsvJobRow>(path).map(|rows| rows.into_iter().map(Job::from).collect())
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DatasetFormat {
    Json,
    Csv,
}

impl DatasetFormat {
    fn from_path(path: &Path) -> Result<Self, BoardError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_ascii_lowercase();
        match ext.as_str() {
            "json" => Ok(DatasetFormat::Json),
            "csv" => Ok(DatasetFormat::Csv),
            _ => Err(BoardError::UnsupportedFormat { ext }),
        }
    }
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Expected JSON schema: a top-level array of record objects.
fn load_json<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let text = std::fs::read_to_string(path).context("reading JSON file")?;
    parse_json(&text)
}

pub(crate) fn parse_json<T: DeserializeOwned>(text: &str) -> Result<Vec<T>> {
    let root: JsonValue = serde_json::from_str(text).context("parsing JSON")?;
    let records = match root {
        JsonValue::Array(records) => records,
        _ => anyhow::bail!("Expected top-level JSON array"),
    };

    records
        .into_iter()
        .enumerate()
        .map(|(i, rec)| {
            serde_json::from_value(rec).with_context(|| format!("Row {i} is not a valid record"))
        })
        .collect()
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// CSV layout: header row with field names, one record per row.
/// Every cell is text, so `fulltime` always lands in the string variant.
fn load_csv<R: DeserializeOwned>(path: &Path) -> Result<Vec<R>> {
    let reader = csv::Reader::from_path(path).context("opening CSV")?;
    read_csv(reader)
}

pub(crate) fn read_csv<R, S>(mut reader: csv::Reader<S>) -> Result<Vec<R>>
where
    R: DeserializeOwned,
    S: std::io::Read,
{
    reader
        .deserialize()
        .enumerate()
        .map(|(row_no, result)| result.with_context(|| format!("CSV row {row_no}")))
        .collect()
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct CsvCompanyRow {
    name: String,
    industry: Option<String>,
    employees: Option<String>,
    location: Option<String>,
    description: Option<String>,
}

impl From<CsvCompanyRow> for Company {
    fn from(row: CsvCompanyRow) -> Self {
        Company {
            name: row.name,
            industry: row.industry,
            employees: row.employees.as_deref().and_then(Headcount::from_cell),
            location: row.location.unwrap_or_default(),
            description: row.description,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct CsvJobRow {
    name: String,
    business: Option<String>,
    location: Option<String>,
    #[serde(rename = "type")]
    job_type: Option<String>,
    salary: Option<String>,
    fulltime: Option<String>,
    description: Option<String>,
    placement: Option<String>,
}

impl From<CsvJobRow> for Job {
    fn from(row: CsvJobRow) -> Self {
        Job {
            name: row.name,
            business: row.business.unwrap_or_default(),
            location: row.location.unwrap_or_default(),
            job_type: row.job_type,
            salary: row.salary,
            fulltime: row.fulltime.map(FullTimeFlag::Str).unwrap_or_default(),
            description: row.description,
            placement: row.placement.map(JsonValue::String),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_requires_top_level_array() {
        let err = parse_json::<Company>(r#"{"name": "Acme"}"#).unwrap_err();
        assert!(format!("{err:#}").contains("top-level JSON array"));
    }

    #[test]
    fn json_reports_bad_row() {
        let err = parse_json::<Job>(r#"[{"name": "ok"}, {"business": "no name"}]"#).unwrap_err();
        assert!(format!("{err:#}").contains("Row 1"));
    }

    #[test]
    fn csv_fulltime_is_text() {
        let data = "name,business,location,type,salary,fulltime\n\
                    Welder,Acme,Austin,Full-time,\"$40,000\",1\n\
                    Painter,Acme,Austin,Contract,,TRUE\n";
        let rows: Vec<CsvJobRow> = read_csv(csv::Reader::from_reader(data.as_bytes())).unwrap();
        let jobs: Vec<Job> = rows.into_iter().map(Job::from).collect();
        assert_eq!(jobs[0].fulltime, FullTimeFlag::Str("1".into()));
        assert!(!jobs[0].is_full_time());
        assert_eq!(jobs[0].salary.as_deref(), Some("$40,000"));
        assert!(jobs[1].is_full_time());
        assert_eq!(jobs[1].salary, None);
    }

    #[test]
    fn csv_missing_columns_default() {
        let data = "name,location\nAcme,Austin\n";
        let rows: Vec<CsvCompanyRow> = read_csv(csv::Reader::from_reader(data.as_bytes())).unwrap();
        let company = Company::from(rows.into_iter().next().unwrap());
        assert_eq!(company.name, "Acme");
        assert_eq!(company.industry, None);
        assert_eq!(company.employees, None);
    }

    #[test]
    fn csv_employees_keeps_free_text() {
        let data = "name,employees\nAcme,200+\nBrushworks,14\nCorner Shop,\n";
        let rows: Vec<CsvCompanyRow> = read_csv(csv::Reader::from_reader(data.as_bytes())).unwrap();
        let companies: Vec<Company> = rows.into_iter().map(Company::from).collect();
        assert_eq!(companies[0].employees, Some(Headcount::Text("200+".into())));
        assert_eq!(companies[1].employees, Some(Headcount::Count(14)));
        assert_eq!(companies[2].employees, None);
    }

    #[test]
    fn unsupported_extension() {
        let err = load_jobs(Path::new("jobs.parquet")).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<BoardError>(),
            Some(BoardError::UnsupportedFormat { ext }) if ext == "parquet"
        ));
    }
}
