use std::path::PathBuf;

use jobboard::data::gallery::{preview, GalleryMode};
use jobboard::data::loader::{load_board, load_companies, load_jobs};
use jobboard::data::store::{BoardStats, SalaryRange};
use jobboard::{
    apply, BoardConfig, BoardError, Company, Employment, FilterSelection, FullTimeFlag, Headcount,
    Job, RecordStore,
};

fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

fn json_store() -> RecordStore {
    load_board(&BoardConfig::from_data_dir(fixtures_dir())).unwrap()
}

fn csv_store() -> RecordStore {
    let dir = fixtures_dir();
    let config = BoardConfig::default()
        .with_companies_path(dir.join("business.csv"))
        .with_jobs_path(dir.join("jobs.csv"));
    load_board(&config).unwrap()
}

fn names(jobs: &[&Job]) -> Vec<String> {
    jobs.iter().map(|j| j.name.clone()).collect()
}

// -------------------------------------------------------------------------
// Minimal board: one company, one job
// -------------------------------------------------------------------------

fn acme_board() -> RecordStore {
    let companies = vec![Company {
        name: "Acme".into(),
        industry: None,
        employees: None,
        location: "Austin".into(),
        description: None,
    }];
    let jobs = vec![Job {
        name: "Welder".into(),
        business: "Acme".into(),
        location: "Austin".into(),
        job_type: Some("Full-time".into()),
        salary: Some("$40,000".into()),
        fulltime: FullTimeFlag::Str("true".into()),
        description: None,
        placement: None,
    }];
    RecordStore::build(companies, jobs)
}

#[test]
fn acme_full_time_under_ceiling() {
    let store = acme_board();
    let selection = FilterSelection::default()
        .with_employment(Employment::Full)
        .with_max_price(50000.0);
    assert_eq!(names(&apply(store.jobs(), &selection)), vec!["Welder"]);
}

#[test]
fn acme_part_time_is_empty() {
    let store = acme_board();
    let selection = FilterSelection::default().with_employment(Employment::Part);
    assert!(apply(store.jobs(), &selection).is_empty());
}

#[test]
fn acme_location_is_case_insensitive() {
    let store = acme_board();
    let selection = FilterSelection::default().with_location("austin");
    assert_eq!(names(&apply(store.jobs(), &selection)), vec!["Welder"]);
}

#[test]
fn acme_identity_lookup_is_case_sensitive() {
    let store = acme_board();
    assert_eq!(store.find_company_by_name("Acme").unwrap().location, "Austin");
    assert!(store.find_company_by_name("acme").is_none());
    assert_eq!(store.job_count(&store.companies()[0]), 1);
}

// -------------------------------------------------------------------------
// JSON fixtures
// -------------------------------------------------------------------------

#[test]
fn json_stats_and_counts() {
    let store = json_store();
    assert_eq!(store.stats(), BoardStats { jobs: 7, companies: 4, placements: 1 });

    let counts: Vec<(String, usize)> = store
        .companies()
        .iter()
        .map(|c| (c.name.clone(), store.job_count(c)))
        .collect();
    assert_eq!(
        counts,
        vec![
            ("Acme".to_string(), 2),
            ("Brushworks".to_string(), 1),
            ("Corner Shop".to_string(), 1),
            ("Granite Software".to_string(), 1),
        ]
    );
}

#[test]
fn json_tolerates_nulls_and_free_text_headcount() {
    let store = json_store();
    let shop = store.find_company_by_name("Corner Shop").unwrap();
    assert_eq!(shop.employees, Some(Headcount::Text("200+".into())));
    assert_eq!(store.find_job_by_name("Courier").unwrap().business, "");
}

#[test]
fn json_job_count_matches_exact_business() {
    let store = json_store();
    for company in store.companies() {
        let expected = store.jobs().iter().filter(|j| j.business == company.name).count();
        assert_eq!(store.job_count(company), expected, "{}", company.name);
        assert_eq!(store.jobs_for_company(&company.name).len(), expected);
    }
}

#[test]
fn json_distinct_facets() {
    let store = json_store();
    assert_eq!(store.distinct_company_locations(), ["Austin", "Houston"]);
    assert_eq!(store.distinct_locations(), ["Austin", "Dallas", "Houston", "El Paso"]);
    assert_eq!(store.distinct_types(), ["Full-time", "Contract", "Part-time"]);
    assert_eq!(store.salary_range(), SalaryRange { min: 18.0, max: 65000.0 });
}

#[test]
fn json_empty_selection_is_identity() {
    let store = json_store();
    let all = apply(store.jobs(), &FilterSelection::default());
    assert_eq!(all.len(), store.jobs().len());
    for (hit, job) in all.iter().zip(store.jobs()) {
        assert_eq!(hit.name, job.name);
    }
    assert_eq!(apply(store.companies(), &FilterSelection::default()).len(), 4);
}

#[test]
fn json_job_filters() {
    let store = json_store();

    let full_cheap = FilterSelection::default()
        .with_employment(Employment::Full)
        .with_max_price(50000.0);
    assert_eq!(names(&apply(store.jobs(), &full_cheap)), vec!["Welder", "Developer"]);

    let part = FilterSelection::default().with_employment(Employment::Part);
    assert_eq!(
        names(&apply(store.jobs(), &part)),
        vec!["Painter", "Cashier", "Night Cashier", "Courier"]
    );

    let austin = FilterSelection::default().with_location("austin");
    assert_eq!(names(&apply(store.jobs(), &austin)), vec!["Welder", "Painter", "Developer"]);

    let corner = FilterSelection::default().with_search("Corner");
    assert_eq!(names(&apply(store.jobs(), &corner)), vec!["Cashier", "Night Cashier"]);

    let part_time_type = FilterSelection::default().with_job_type("part-time").with_max_price(10.0);
    assert_eq!(names(&apply(store.jobs(), &part_time_type)), vec!["Night Cashier"]);
}

#[test]
fn json_company_filters() {
    let store = json_store();
    let austin = FilterSelection::default().with_location("AUSTIN");
    let hits: Vec<String> = apply(store.companies(), &austin)
        .iter()
        .map(|c| c.name.clone())
        .collect();
    assert_eq!(hits, vec!["Acme", "Brushworks", "Granite Software"]);

    let houston = FilterSelection::default().with_location("houston");
    assert_eq!(apply(store.companies(), &houston).len(), 1);

    let industry = FilterSelection::default().with_search("RETAIL");
    assert_eq!(apply(store.companies(), &industry)[0].name, "Corner Shop");
}

#[test]
fn json_details() {
    let store = json_store();

    let welder = store.job_detail("Welder").unwrap();
    assert_eq!(welder.company.unwrap().name, "Acme");
    assert_eq!(names(&welder.similar), vec!["Developer"]);

    let courier = store.job_detail("Courier").unwrap();
    assert_eq!(courier.job.business, "");
    assert!(courier.company.is_none());
    assert!(courier.similar.is_empty());

    let shop = store.company_detail("Corner Shop").unwrap();
    assert_eq!(shop.job_count, 1);
    assert_eq!(names(&shop.jobs), vec!["Cashier"]);
    assert!(store.company_detail("corner shop").is_none());
}

#[test]
fn json_gallery_preview() {
    let store = json_store();
    let gallery = preview(&store, GalleryMode::All, "acme", 10);
    assert_eq!(gallery.companies.len(), 1);
    assert_eq!(names(&gallery.jobs), vec!["Welder", "Lead Welder"]);

    let gallery = preview(&store, GalleryMode::Jobs, "", 3);
    assert!(gallery.companies.is_empty());
    assert_eq!(names(&gallery.jobs), vec!["Welder", "Painter", "Lead Welder"]);
}

// -------------------------------------------------------------------------
// CSV fixtures
// -------------------------------------------------------------------------

#[test]
fn csv_board_loads() {
    let store = csv_store();
    assert_eq!(store.stats(), BoardStats { jobs: 3, companies: 2, placements: 1 });
    assert_eq!(store.companies()[1].employees, None);

    let full = FilterSelection::default().with_employment(Employment::Full);
    // CSV cells are text: "1" is not full-time, "TRUE" is.
    assert_eq!(names(&apply(store.jobs(), &full)), vec!["Welder", "Lead Welder"]);
}

#[test]
fn csv_and_json_agree_on_salaries() {
    let store = csv_store();
    let capped = FilterSelection::default().with_max_price(50000.0);
    assert_eq!(names(&apply(store.jobs(), &capped)), vec!["Welder", "Painter"]);
}

// -------------------------------------------------------------------------
// Load failures
// -------------------------------------------------------------------------

#[test]
fn unsupported_extension_is_rejected() {
    let err = load_jobs(&fixtures_dir().join("notes.txt")).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<BoardError>(),
        Some(BoardError::UnsupportedFormat { .. })
    ));
}

#[test]
fn missing_file_fails() {
    assert!(load_companies(&fixtures_dir().join("missing.json")).is_err());
}

#[test]
fn board_fails_when_either_dataset_fails() {
    let config = BoardConfig::from_data_dir(fixtures_dir())
        .with_jobs_path(fixtures_dir().join("missing.json"));
    let err = load_board(&config).unwrap_err();
    assert!(format!("{err:#}").contains("loading jobs"));
}
