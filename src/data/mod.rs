/// Data layer: record types, loading, indexing and filtering.
///
/// Architecture:
/// ```text
///  business.json / jobs.json (.csv)
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse files → Vec<Company>, Vec<Job>
///   └──────────┘
///        │
///        ▼
///   ┌─────────────┐
///   │ RecordStore  │  name indices, job counts, distinct facets
///   └─────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  FilterSelection → matching records, source order
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ gallery   │  capped preview of both kinds
///   └──────────┘
/// ```

pub mod filter;
pub mod gallery;
pub mod loader;
pub mod model;
pub mod store;
