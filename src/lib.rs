//! Global search over payroll records.
//!
//! Employees, salary structures, salary components, payroll periods and
//! payslips are flattened into one in-memory index that answers ranked
//! keyword queries with facet filters, autocomplete suggestions and
//! dashboard record counts.

pub mod config;
pub mod error;
pub mod metrics;
pub mod models;
pub mod providers;
pub mod search;

pub use config::Config;
pub use error::{AppError, Result};
pub use search::{SearchFilters, SearchHit, SearchService};
