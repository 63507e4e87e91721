//! Search and filter engine for a small static job board.
//!
//! Two datasets (companies and jobs) are loaded once into a
//! [`RecordStore`](data::store::RecordStore); the pure functions in
//! [`data::filter`] compute what a gallery shows for a given
//! [`FilterSelection`](data::filter::FilterSelection).

pub mod config;
pub mod data;
pub mod error;
pub mod state;

pub use config::BoardConfig;
pub use data::filter::{
    apply, apply_bounded, parse_salary, Employment, FilterSelection, Filterable,
};
pub use data::model::{Company, FullTimeFlag, Headcount, Job};
pub use data::store::RecordStore;
pub use error::BoardError;
pub use state::BoardState;
