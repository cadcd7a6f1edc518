//! Main search service implementation

use crate::metrics::{
    INDEX_DOCUMENTS, INDEX_SKIPPED_PAYSLIPS, SEARCH_DURATION_SECONDS, SEARCH_HITS,
    SEARCH_QUERIES_TOTAL, SUGGESTION_REQUESTS_TOTAL,
};
use crate::models::RecordSnapshot;
use crate::providers::RecordSource;
use crate::search::config::SearchConfig;
use crate::search::document::{DocumentKind, SearchDocument};
use crate::search::error::SearchResult;
use crate::search::index::{IndexStats, SearchIndex};
use crate::search::query::{self, SearchFilters, SearchHit};
use crate::search::stats::QuickStats;
use crate::search::suggest;
use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Instant;

/// Search over one snapshot of payroll records.
///
/// The index is built eagerly in the constructor and never changes afterwards;
/// every query method takes `&self` and returns freshly allocated results, so a
/// service can be shared across threads behind an `Arc`. When the underlying
/// records change, build a new service with [`SearchService::rebuild`].
#[derive(Debug, Clone)]
pub struct SearchService {
    /// Prebuilt documents
    index: Arc<SearchIndex>,

    /// Records the index was built from; suggestions and stats read these
    records: Arc<RecordSnapshot>,

    /// Configuration
    config: SearchConfig,
}

impl SearchService {
    /// Create a service and build its index from `records`
    pub fn new(records: RecordSnapshot, config: SearchConfig) -> SearchResult<Self> {
        config.validate()?;
        Ok(Self::build(Arc::new(records), config))
    }

    /// Create a service with the default configuration
    pub fn from_snapshot(records: RecordSnapshot) -> Self {
        Self::build(Arc::new(records), SearchConfig::default())
    }

    /// Fetch a snapshot from `source` and build the service from it
    pub async fn load(source: &dyn RecordSource, config: SearchConfig) -> SearchResult<Self> {
        config.validate()?;
        let records = source.snapshot().await?;
        tracing::info!(
            source = source.name(),
            records = records.len(),
            "Loaded records for search index"
        );
        Ok(Self::build(Arc::new(records), config))
    }

    /// Build a new service over `records`, keeping this service's configuration
    pub fn rebuild(&self, records: RecordSnapshot) -> Self {
        Self::build(Arc::new(records), self.config.clone())
    }

    fn build(records: Arc<RecordSnapshot>, config: SearchConfig) -> Self {
        let index = SearchIndex::build(&records);

        let stats = index.stats();
        for (kind, count) in &stats.documents_by_kind {
            INDEX_DOCUMENTS
                .with_label_values(&[kind.as_str()])
                .set(*count as f64);
        }
        INDEX_SKIPPED_PAYSLIPS.set(stats.skipped_payslips as f64);

        Self {
            index: Arc::new(index),
            records,
            config,
        }
    }

    /// Search for documents matching `query`.
    ///
    /// Blank queries return nothing. Results are ordered by descending
    /// relevance (ties keep index order) and capped at `max_results`.
    pub fn search(&self, query: &str, filters: Option<&SearchFilters>) -> Vec<SearchHit> {
        let start_time = Instant::now();

        let hits = query::execute(
            query,
            filters,
            self.index.documents(),
            &self.config.weights,
            self.config.max_results,
        );

        let outcome = if query.trim().is_empty() {
            "blank"
        } else if hits.is_empty() {
            "no_hits"
        } else {
            "hits"
        };
        SEARCH_QUERIES_TOTAL.with_label_values(&[outcome]).inc();
        SEARCH_HITS.observe(hits.len() as f64);
        SEARCH_DURATION_SECONDS.observe(start_time.elapsed().as_secs_f64());

        tracing::debug!(
            query = %query,
            filtered = filters.map_or(false, |f| !f.is_unrestricted()),
            hits = hits.len(),
            "Search executed"
        );

        hits
    }

    /// Autocomplete values containing `query`, capped at `max_suggestions`
    pub fn suggestions(&self, query: &str) -> Vec<String> {
        SUGGESTION_REQUESTS_TOTAL.inc();
        suggest::suggest(&self.records, query, self.config.max_suggestions)
    }

    /// Record counts for the dashboard summary
    pub fn quick_stats(&self) -> QuickStats {
        QuickStats::from_snapshot(&self.records)
    }

    /// Get index statistics
    pub fn index_stats(&self) -> IndexStats {
        self.index.stats()
    }

    /// Look up an indexed document by kind and id
    pub fn document(&self, kind: DocumentKind, id: &str) -> Option<Arc<SearchDocument>> {
        self.index.get(kind, id).cloned()
    }

    /// Number of indexed documents
    pub fn document_count(&self) -> usize {
        self.index.len()
    }

    /// Indexed documents per kind
    pub fn documents_by_kind(&self) -> BTreeMap<DocumentKind, usize> {
        self.index.stats().documents_by_kind
    }

    /// Payslips left out because their employee or period is missing
    pub fn skipped_payslips(&self) -> usize {
        self.index.skipped_payslips()
    }

    /// Records the index was built from
    pub fn records(&self) -> &RecordSnapshot {
        &self.records
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }
}
