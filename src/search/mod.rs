//! Keyword search over payroll records
//!
//! This module flattens the five record collections (employees, salary
//! structures, salary components, payroll periods and payslips) into one list
//! of searchable documents and answers three kinds of request against it:
//!
//! - **Search**: tokenized, additively scored keyword matching over title,
//!   subtitle and description, filtered by type/department/status facets
//! - **Suggestions**: literal field values for autocomplete
//! - **Quick stats**: per-collection record counts
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │  RecordSource (demo / file / rest)           │
//! └──────────────────────────────────────────────┘
//!                      │ RecordSnapshot
//!                      ▼
//! ┌──────────────────────────────────────────────┐
//! │  SearchIndex::build                          │
//! │  - one document per record                   │
//! │  - payslips joined to employee + period      │
//! └──────────────────────────────────────────────┘
//!                      │ Vec<Arc<SearchDocument>>
//!                      ▼
//! ┌──────────────────────────────────────────────┐
//! │  SearchService                               │
//! │  - search()  - suggestions()  - quick_stats()│
//! └──────────────────────────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```no_run
//! use payroll_search::providers::demo_snapshot;
//! use payroll_search::search::{DocumentKind, SearchFilters, SearchService};
//!
//! let service = SearchService::from_snapshot(demo_snapshot());
//!
//! let filters = SearchFilters::new().with_types(vec![DocumentKind::Employee]);
//! for hit in service.search("engineer", Some(&filters)) {
//!     println!("{} ({})", hit.document.title, hit.relevance);
//! }
//! ```

mod config;
mod document;
mod error;
mod index;
mod query;
mod service;
mod stats;
mod suggest;

pub use config::{
    ScoringWeights, SearchConfig, SearchConfigBuilder, RESULT_LIMIT, SUGGESTION_LIMIT,
};
pub use document::{
    format_amount, DocumentKind, IndexedRecord, Navigation, PayslipRecord, SearchDocument,
};
pub use error::{SearchError, SearchResult};
pub use index::{IndexStats, SearchIndex};
pub use query::{score, tokenize, SearchFilters, SearchHit};
pub use service::SearchService;
pub use stats::QuickStats;
pub use suggest::suggest;
