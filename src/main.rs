use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{ArgAction, Args, Parser, Subcommand};
use colored::Colorize;

use jobboard::data::gallery::{preview, GalleryMode};
use jobboard::data::loader::load_board;
use jobboard::{BoardConfig, BoardError, BoardState, Company, Employment, Job, RecordStore};

#[derive(Parser, Debug)]
#[command(
    name = "jobboard",
    version,
    about = "Browse companies and jobs from the board datasets",
    long_about = "Browse companies and jobs from the board datasets.\n\n\
Examples:\n  \
jobboard stats\n  \
jobboard jobs --location austin --employment full --max-price 50000\n  \
jobboard company \"Acme\"\n\n\
Set RUST_LOG=debug to see filter diagnostics."
)]
struct Cli {
    #[arg(
        short = 'd',
        long = "data-dir",
        value_name = "DIR",
        help_heading = "Input",
        help = "Directory holding business.json and jobs.json."
    )]
    data_dir: Option<PathBuf>,

    #[arg(
        long,
        value_name = "FILE",
        help_heading = "Input",
        help = "Companies dataset (.json or .csv)."
    )]
    companies: Option<PathBuf>,

    #[arg(
        long,
        value_name = "FILE",
        help_heading = "Input",
        help = "Jobs dataset (.json or .csv)."
    )]
    jobs: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Job, company and placement counters.
    Stats,
    /// Preview of the first matches of each kind.
    Gallery {
        #[arg(short, long, default_value = "all", help = "all, companies or jobs.")]
        mode: GalleryMode,
        #[arg(short, long, default_value = "")]
        search: String,
    },
    /// Company gallery filtered by search and location.
    Companies {
        #[arg(short, long)]
        search: Option<String>,
        #[arg(short, long)]
        location: Option<String>,
        #[arg(long, action = ArgAction::SetTrue, help = "List the available locations instead.")]
        locations: bool,
    },
    /// Job gallery with every filter.
    Jobs(JobsArgs),
    /// Details of one company and its jobs.
    Company { name: String },
    /// Details of one job, its company and similar jobs.
    Job { name: String },
}

#[derive(Args, Debug)]
struct JobsArgs {
    #[arg(short, long)]
    search: Option<String>,
    #[arg(short, long)]
    location: Option<String>,
    #[arg(short = 't', long = "type", value_name = "TYPE")]
    job_type: Option<String>,
    #[arg(short = 'p', long, value_name = "AMOUNT")]
    max_price: Option<f64>,
    #[arg(
        short = 'e',
        long,
        value_name = "KIND",
        help = "full or part (also full-time, part-time)."
    )]
    employment: Option<Employment>,
    #[arg(
        long,
        action = ArgAction::SetTrue,
        help = "List locations, types and salary range instead."
    )]
    facets: bool,
}

impl Cli {
    fn config(&self) -> BoardConfig {
        let mut config = match &self.data_dir {
            Some(dir) => BoardConfig::from_data_dir(dir),
            None => BoardConfig::default(),
        };
        if let Some(path) = &self.companies {
            config = config.with_companies_path(path);
        }
        if let Some(path) = &self.jobs {
            config = config.with_jobs_path(path);
        }
        config
    }
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e:#}");
            eprintln!("{} {e:#}", "error:".red().bold());
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = cli.config();
    let store = load_board(&config)?;

    match cli.command {
        Command::Stats => {
            let stats = store.stats();
            println!("{} jobs", stats.jobs.to_string().bold());
            println!("{} companies", stats.companies.to_string().bold());
            println!("{} placements", stats.placements.to_string().bold());
        }
        Command::Gallery { mode, search } => {
            let gallery = preview(&store, mode, &search.to_lowercase(), config.preview_limit);
            if gallery.is_empty() {
                println!("{}", "Nothing matches your search.".dimmed());
            }
            for company in gallery.companies {
                print_company_thumb(&store, company);
            }
            for job in gallery.jobs {
                print_job_thumb(job);
            }
        }
        Command::Companies { search, location, locations } => {
            if locations {
                for loc in store.distinct_company_locations() {
                    println!("{loc}");
                }
                return Ok(());
            }
            let mut state = BoardState::new(store);
            state.set_company_search(search.as_deref().unwrap_or(""));
            state.set_company_location(location.as_deref().unwrap_or(""));
            for company in state.visible_companies() {
                print_company_thumb(state.store(), company);
            }
        }
        Command::Jobs(args) => run_jobs(store, args),
        Command::Company { name } => {
            let detail = store
                .company_detail(&name)
                .ok_or(BoardError::CompanyNotFound(name))?;
            print_company(detail.company);
            println!();
            println!("{}", format!("Jobs at {}", detail.company.name).bold());
            if detail.jobs.is_empty() {
                println!("  No jobs listed for this company.");
            }
            for job in detail.jobs {
                println!("  {}  {}", job.name, job.location.dimmed());
            }
        }
        Command::Job { name } => {
            let detail = store.job_detail(&name).ok_or(BoardError::JobNotFound(name))?;
            let job = detail.job;
            println!("{}", job.name.bold());
            println!("Company:     {}", job.business);
            println!("Location:    {}", job.location);
            println!("Type:        {}", job.job_type.as_deref().unwrap_or("N/A"));
            println!("Salary:      {}", job.salary.as_deref().unwrap_or("N/A"));
            println!(
                "Full-time:   {}",
                if job.is_full_time() { "Yes" } else { "No (Part-time)" }
            );
            println!(
                "Description: {}",
                job.description.as_deref().unwrap_or("No description provided.")
            );
            if let Some(company) = detail.company {
                println!();
                println!("{}", format!("About {}", company.name).bold());
                print_company(company);
            }
            if !detail.similar.is_empty() {
                println!();
                let job_type = job.job_type.as_deref().unwrap_or("");
                println!("{}", format!("Similar {job_type} Jobs").bold());
                for similar in detail.similar {
                    print_job_thumb(similar);
                }
            }
        }
    }
    Ok(())
}

fn run_jobs(store: RecordStore, args: JobsArgs) {
    if args.facets {
        println!("{}", "Locations".bold());
        for loc in store.distinct_locations() {
            println!("  {loc}");
        }
        println!("{}", "Types".bold());
        for t in store.distinct_types() {
            println!("  {t}");
        }
        let range = store.salary_range();
        println!("{} {} – {}", "Salary".bold(), range.min, range.max);
        return;
    }

    let mut state = BoardState::new(store);
    state.set_job_search(args.search.as_deref().unwrap_or(""));
    state.set_job_location(args.location.as_deref().unwrap_or(""));
    state.set_job_type(args.job_type.as_deref().unwrap_or(""));
    state.set_max_price(args.max_price);
    state.set_employment(args.employment);

    let jobs = state.visible_jobs();
    if jobs.is_empty() {
        println!("No jobs match your search or filters.");
        println!("{}", "Try clearing filters or broadening your search.".dimmed());
        return;
    }
    for job in jobs {
        print_job_thumb(job);
    }
}

fn print_company(company: &Company) {
    println!("{}", company.name.bold());
    println!("Industry:    {}", company.industry.as_deref().unwrap_or("N/A"));
    match &company.employees {
        Some(n) => println!("Employees:   {n}"),
        None => println!("Employees:   N/A"),
    }
    println!("Location:    {}", company.location);
    println!(
        "Description: {}",
        company.description.as_deref().unwrap_or("No description provided.")
    );
}

fn print_company_thumb(store: &RecordStore, company: &Company) {
    println!(
        "{}  {}  {}  {} jobs",
        company.name.bold(),
        company.industry.as_deref().unwrap_or("").dimmed(),
        company.location,
        store.job_count(company).to_string().cyan()
    );
}

fn print_job_thumb(job: &Job) {
    println!(
        "{}  {}  {}  {}  {}",
        job.name.bold(),
        job.business.dimmed(),
        job.location,
        job.salary.as_deref().unwrap_or(""),
        job.employment_label().green()
    );
}
