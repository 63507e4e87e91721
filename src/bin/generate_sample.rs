use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::Value as JsonValue;

use jobboard::config::{COMPANIES_FILE, DEFAULT_DATA_DIR, JOBS_FILE};
use jobboard::{Company, FullTimeFlag, Headcount, Job};

/// Deterministic linear congruential generator, enough to vary the sample.
struct Lcg(u64);

impl Lcg {
    fn next(&mut self) -> u64 {
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        self.0 >> 33
    }

    fn pick<'a>(&mut self, items: &'a [&'a str]) -> &'a str {
        items[(self.next() as usize) % items.len()]
    }

    fn range(&mut self, lo: u64, hi: u64) -> u64 {
        lo + self.next() % (hi - lo)
    }
}

const COMPANIES: [(&str, &str); 8] = [
    ("Acme Fabrication", "Manufacturing"),
    ("Bluebonnet Health", "Healthcare"),
    ("Corner Shop", "Retail"),
    ("Delta Logistics", "Transportation"),
    ("Evergreen Energy", "Energy"),
    ("Fieldstone Builders", "Construction"),
    ("Granite Software", "Technology"),
    ("Harbor Foods", "Hospitality"),
];

const LOCATIONS: [&str; 6] =
    ["Austin", "austin", "Dallas", "Houston", " San Antonio ", "El Paso"];
const TITLES: [&str; 8] = [
    "Welder", "Nurse", "Cashier", "Driver", "Technician", "Carpenter", "Developer", "Line Cook",
];
const TYPES: [&str; 4] = ["Full-time", "Part-time", "Contract", "full-time"];
const SALARY_FORMATS: [&str; 4] = ["dollars", "k", "hourly", "text"];

fn main() -> Result<()> {
    let mut rng = Lcg(42);

    let companies: Vec<Company> = COMPANIES
        .iter()
        .map(|&(name, industry)| Company {
            name: name.to_string(),
            industry: Some(industry.to_string()),
            employees: Some(Headcount::Count(rng.range(5, 2000))),
            location: rng.pick(&LOCATIONS).to_string(),
            description: Some(format!("{name} is a local {} employer.", industry.to_lowercase())),
        })
        .collect();

    let mut jobs = Vec::new();
    for (i, title) in TITLES.iter().enumerate() {
        for round in 0..3u64 {
            // Every fifth job points at a business with no company record.
            let business = if (i as u64 * 3 + round) % 5 == 4 {
                "Unlisted Partner".to_string()
            } else {
                companies[(i + round as usize) % companies.len()].name.clone()
            };
            let amount = rng.range(18, 120) * 1000;
            let salary = match rng.pick(&SALARY_FORMATS) {
                "dollars" => format!("${}", group_thousands(amount)),
                "k" => format!("{}k", amount / 1000),
                "hourly" => format!("${}.50/hr", amount / 2080),
                _ => "Competitive".to_string(),
            };
            // Rotate through every encoding the datasets use for `fulltime`.
            let fulltime = match (i + round as usize) % 6 {
                0 => FullTimeFlag::Bool(true),
                1 => FullTimeFlag::Bool(false),
                2 => FullTimeFlag::Str("TRUE".into()),
                3 => FullTimeFlag::Str("1".into()),
                4 => FullTimeFlag::Num(1.0),
                _ => FullTimeFlag::Num(0.0),
            };
            jobs.push(Job {
                name: if round == 0 { title.to_string() } else { format!("{title} {}", round + 1) },
                business,
                location: rng.pick(&LOCATIONS).to_string(),
                job_type: Some(rng.pick(&TYPES).to_string()),
                salary: Some(salary),
                fulltime,
                description: None,
                placement: (rng.next() % 4 == 0).then(|| JsonValue::Bool(true)),
            });
        }
    }

    // Hand-edited records often omit the flag entirely.
    jobs.push(Job {
        name: "Volunteer Coordinator".to_string(),
        business: "Harbor Foods".to_string(),
        location: "Dallas".to_string(),
        job_type: None,
        salary: None,
        fulltime: FullTimeFlag::default(),
        description: None,
        placement: None,
    });

    let dir = Path::new(DEFAULT_DATA_DIR);
    std::fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
    write_json(&dir.join(COMPANIES_FILE), &companies)?;
    write_json(&dir.join(JOBS_FILE), &jobs)?;

    println!(
        "Wrote {} companies and {} jobs to {}",
        companies.len(),
        jobs.len(),
        dir.display()
    );
    Ok(())
}

fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::new();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

fn write_json<T: Serialize>(path: &Path, records: &[T]) -> Result<()> {
    let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    serde_json::to_writer_pretty(BufWriter::new(file), records)
        .with_context(|| format!("writing {}", path.display()))
}
