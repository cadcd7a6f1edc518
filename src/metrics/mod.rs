//! Prometheus metrics for the search service.
//!
//! Metrics are process-wide statics; registration with the exported registry
//! happens once through [`init_metrics`]. Recording works whether or not the
//! registry has been initialized.
//!
//! # Example
//! ```no_run
//! use payroll_search::metrics::{gather_metrics, init_metrics};
//!
//! init_metrics().expect("metrics registered once");
//! println!("{}", gather_metrics());
//! ```

use lazy_static::lazy_static;
use prometheus::{Counter, CounterVec, Gauge, GaugeVec, Histogram, HistogramOpts, Opts, Registry};

const NAMESPACE: &str = "payroll_search";

lazy_static! {
    /// Global Prometheus registry for all metrics
    pub static ref PROMETHEUS_REGISTRY: Registry = Registry::new();

    /// Total number of search queries
    ///
    /// Labels: outcome (`hits`, `no_hits`, `blank`)
    pub static ref SEARCH_QUERIES_TOTAL: CounterVec = CounterVec::new(
        Opts::new("search_queries_total", "Total number of search queries")
            .namespace(NAMESPACE),
        &["outcome"]
    ).expect("Failed to create SEARCH_QUERIES_TOTAL metric");

    /// Hits returned per query, after filtering and capping
    pub static ref SEARCH_HITS: Histogram = Histogram::with_opts(
        HistogramOpts::new("search_hits", "Hits returned per search query")
            .namespace(NAMESPACE)
            .buckets(vec![0.0, 1.0, 2.0, 5.0, 10.0, 15.0, 20.0, 50.0])
    ).expect("Failed to create SEARCH_HITS metric");

    /// Search execution time in seconds
    pub static ref SEARCH_DURATION_SECONDS: Histogram = Histogram::with_opts(
        HistogramOpts::new("search_duration_seconds", "Search execution time in seconds")
            .namespace(NAMESPACE)
            .buckets(vec![0.00001, 0.0001, 0.0005, 0.001, 0.005, 0.01, 0.05, 0.1])
    ).expect("Failed to create SEARCH_DURATION_SECONDS metric");

    /// Total number of suggestion requests
    pub static ref SUGGESTION_REQUESTS_TOTAL: Counter = Counter::with_opts(
        Opts::new("suggestion_requests_total", "Total number of suggestion requests")
            .namespace(NAMESPACE)
    ).expect("Failed to create SUGGESTION_REQUESTS_TOTAL metric");

    /// Documents in the most recently built index
    ///
    /// Labels: kind
    pub static ref INDEX_DOCUMENTS: GaugeVec = GaugeVec::new(
        Opts::new("index_documents", "Documents in the search index")
            .namespace(NAMESPACE),
        &["kind"]
    ).expect("Failed to create INDEX_DOCUMENTS metric");

    /// Payslips left out of the most recent index build
    pub static ref INDEX_SKIPPED_PAYSLIPS: Gauge = Gauge::with_opts(
        Opts::new("index_skipped_payslips", "Payslips without a resolvable employee or period")
            .namespace(NAMESPACE)
    ).expect("Failed to create INDEX_SKIPPED_PAYSLIPS metric");
}

/// Register all metrics with the global registry
pub fn init_metrics() -> Result<(), prometheus::Error> {
    PROMETHEUS_REGISTRY.register(Box::new(SEARCH_QUERIES_TOTAL.clone()))?;
    PROMETHEUS_REGISTRY.register(Box::new(SEARCH_HITS.clone()))?;
    PROMETHEUS_REGISTRY.register(Box::new(SEARCH_DURATION_SECONDS.clone()))?;
    PROMETHEUS_REGISTRY.register(Box::new(SUGGESTION_REQUESTS_TOTAL.clone()))?;
    PROMETHEUS_REGISTRY.register(Box::new(INDEX_DOCUMENTS.clone()))?;
    PROMETHEUS_REGISTRY.register(Box::new(INDEX_SKIPPED_PAYSLIPS.clone()))?;

    tracing::debug!("Search metrics registered");
    Ok(())
}

/// Export metrics in Prometheus text format
pub fn gather_metrics() -> String {
    use prometheus::Encoder;
    let encoder = prometheus::TextEncoder::new();
    let metric_families = PROMETHEUS_REGISTRY.gather();
    let mut buffer = Vec::new();

    if let Err(e) = encoder.encode(&metric_families, &mut buffer) {
        tracing::error!("Failed to encode metrics: {}", e);
        return String::from("# Error encoding metrics\n");
    }

    String::from_utf8(buffer).unwrap_or_else(|e| {
        tracing::error!("Failed to convert metrics to string: {}", e);
        String::from("# Error converting metrics\n")
    })
}
