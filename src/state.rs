use crate::data::filter::{facet_key, filtered_indices, Employment, FilterSelection};
use crate::data::model::{Company, Job};
use crate::data::store::{RecordStore, SalaryRange};

// ---------------------------------------------------------------------------
// Board state
// ---------------------------------------------------------------------------

/// Front-end state, independent of rendering.
///
/// Owns the current selections and re-runs the pure filter engine after
/// every change; the engine itself holds no state.
pub struct BoardState {
    store: RecordStore,

    /// Selection of the companies page (search + location).
    pub company_selection: FilterSelection,

    /// Selection of the jobs page.
    pub job_selection: FilterSelection,

    /// Bounds for the price control, computed once.
    pub salary_range: SalaryRange,

    /// Indices of companies passing `company_selection` (cached).
    visible_companies: Vec<usize>,

    /// Indices of jobs passing `job_selection` (cached).
    visible_jobs: Vec<usize>,
}

impl BoardState {
    pub fn new(store: RecordStore) -> Self {
        let salary_range = store.salary_range();
        let visible_companies = (0..store.companies().len()).collect();
        let visible_jobs = (0..store.jobs().len()).collect();
        Self {
            store,
            company_selection: FilterSelection::default(),
            job_selection: FilterSelection::default(),
            salary_range,
            visible_companies,
            visible_jobs,
        }
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    pub fn visible_companies(&self) -> Vec<&Company> {
        self.visible_companies
            .iter()
            .map(|&i| &self.store.companies()[i])
            .collect()
    }

    pub fn visible_jobs(&self) -> Vec<&Job> {
        self.visible_jobs
            .iter()
            .map(|&i| &self.store.jobs()[i])
            .collect()
    }

    /// Recompute the visible companies after a selection change.
    pub fn refilter_companies(&mut self) {
        self.visible_companies = filtered_indices(self.store.companies(), &self.company_selection);
    }

    /// Recompute the visible jobs after a selection change.
    pub fn refilter_jobs(&mut self) {
        self.visible_jobs = filtered_indices(self.store.jobs(), &self.job_selection);
    }

    // -- companies page --

    pub fn set_company_search(&mut self, text: &str) {
        self.company_selection.search_text = non_empty(text);
        self.refilter_companies();
    }

    /// An empty location selects "All".
    pub fn set_company_location(&mut self, location: &str) {
        self.company_selection.location = non_empty(location);
        self.refilter_companies();
    }

    // -- jobs page --

    pub fn set_job_search(&mut self, text: &str) {
        self.job_selection.search_text = non_empty(text);
        self.refilter_jobs();
    }

    pub fn set_job_location(&mut self, location: &str) {
        self.job_selection.location = non_empty(location);
        self.refilter_jobs();
    }

    pub fn set_job_type(&mut self, job_type: &str) {
        self.job_selection.job_type = non_empty(job_type);
        self.refilter_jobs();
    }

    /// Select `job_type`, or clear the type filter when it is already active.
    pub fn toggle_job_type(&mut self, job_type: &str) {
        let active = facet_key(self.job_selection.job_type.as_deref()) == facet_key(Some(job_type));
        if active {
            self.set_job_type("");
        } else {
            self.set_job_type(job_type);
        }
    }

    pub fn set_max_price(&mut self, max_price: Option<f64>) {
        self.job_selection.max_price = max_price;
        self.refilter_jobs();
    }

    /// Whether the price ceiling excludes part of the salary range.
    pub fn price_filter_active(&self) -> bool {
        self.job_selection
            .max_price
            .is_some_and(|p| self.salary_range.is_limiting(p))
    }

    /// Set the employment constraint directly; `None` shows both kinds.
    pub fn set_employment(&mut self, employment: Option<Employment>) {
        self.job_selection.employment = employment;
        self.refilter_jobs();
    }

    pub fn toggle_full_time(&mut self) {
        self.toggle_employment(Employment::Full);
    }

    pub fn toggle_part_time(&mut self) {
        self.toggle_employment(Employment::Part);
    }

    /// Tri-state toggle: activating one kind replaces the other, activating
    /// the active kind clears the constraint.
    fn toggle_employment(&mut self, kind: Employment) {
        self.job_selection.employment = match self.job_selection.employment {
            Some(current) if current == kind => None,
            _ => Some(kind),
        };
        self.refilter_jobs();
    }
}

fn non_empty(value: &str) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}
