//! Query tokenization, relevance scoring and facet filtering

use crate::search::config::ScoringWeights;
use crate::search::document::{DocumentKind, IndexedRecord, SearchDocument};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Facet filters applied after scoring.
///
/// A facet that is `None` or an empty list does not restrict anything.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SearchFilters {
    /// Allowed record kinds
    #[serde(default)]
    pub types: Option<Vec<DocumentKind>>,

    /// Allowed departments; only employee documents are checked
    #[serde(default)]
    pub departments: Option<Vec<String>>,

    /// Allowed status literals; checked on employees, payroll periods and payslips
    #[serde(default)]
    pub status: Option<Vec<String>>,
}

impl SearchFilters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter by record kind
    pub fn with_types(mut self, types: Vec<DocumentKind>) -> Self {
        self.types = Some(types);
        self
    }

    /// Filter employees by department
    pub fn with_departments(mut self, departments: Vec<impl Into<String>>) -> Self {
        self.departments = Some(departments.into_iter().map(|d| d.into()).collect());
        self
    }

    /// Filter by status literal, e.g. `active`, `paid`, `on_leave`
    pub fn with_status(mut self, status: Vec<impl Into<String>>) -> Self {
        self.status = Some(status.into_iter().map(|s| s.into()).collect());
        self
    }

    /// Whether no facet restricts anything
    pub fn is_unrestricted(&self) -> bool {
        active(&self.types).is_none()
            && active(&self.departments).is_none()
            && active(&self.status).is_none()
    }

    /// Whether a document passes every facet
    pub fn admits(&self, document: &SearchDocument) -> bool {
        if let Some(types) = active(&self.types) {
            if !types.contains(&document.kind) {
                return false;
            }
        }

        if let Some(departments) = active(&self.departments) {
            let department = match &document.data {
                IndexedRecord::Employee(employee) => Some(employee.department.as_str()),
                IndexedRecord::SalaryStructure(_)
                | IndexedRecord::SalaryComponent(_)
                | IndexedRecord::PayrollPeriod(_)
                | IndexedRecord::Payslip(_) => None,
            };
            if let Some(department) = department {
                if !departments.iter().any(|d| d == department) {
                    return false;
                }
            }
        }

        if let Some(statuses) = active(&self.status) {
            let status = match &document.data {
                IndexedRecord::Employee(employee) => Some(employee.status.as_ref()),
                IndexedRecord::PayrollPeriod(period) => Some(period.status.as_ref()),
                IndexedRecord::Payslip(record) => Some(record.payslip.payment_status.as_ref()),
                IndexedRecord::SalaryStructure(_) | IndexedRecord::SalaryComponent(_) => None,
            };
            if let Some(status) = status {
                if !statuses.iter().any(|s| s == status) {
                    return false;
                }
            }
        }

        true
    }
}

fn active<T>(facet: &Option<Vec<T>>) -> Option<&[T]> {
    facet.as_deref().filter(|values| !values.is_empty())
}

/// A scored document, created fresh for each query
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SearchHit {
    #[serde(flatten)]
    pub document: Arc<SearchDocument>,

    /// Sum of per-term match points
    pub relevance: u32,
}

/// Lower-case the query and split it into non-empty terms
pub fn tokenize(query: &str) -> Vec<String> {
    query
        .to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// Relevance of a document for already-tokenized terms.
///
/// Each term earns points for a substring match in the title, subtitle and
/// description, plus the exact-match bonuses when it equals the whole title
/// or subtitle. Bonuses stack with the substring points.
pub fn score(terms: &[String], document: &SearchDocument, weights: &ScoringWeights) -> u32 {
    let text = &document.normalized;

    // Weights are user-configurable, so sums saturate at u32::MAX.
    terms
        .iter()
        .map(|term| {
            let term = term.as_str();
            [
                (text.title.contains(term), weights.title),
                (text.subtitle.contains(term), weights.subtitle),
                (text.description.contains(term), weights.description),
                (text.title == term, weights.exact_title),
                (text.subtitle == term, weights.exact_subtitle),
            ]
            .into_iter()
            .filter(|(matched, _)| *matched)
            .fold(0, |points: u32, (_, weight)| points.saturating_add(weight))
        })
        .fold(0, u32::saturating_add)
}

/// Score, filter, rank and cap `documents` for `query`
pub fn execute<'a, I>(
    query: &str,
    filters: Option<&SearchFilters>,
    documents: I,
    weights: &ScoringWeights,
    limit: usize,
) -> Vec<SearchHit>
where
    I: IntoIterator<Item = &'a Arc<SearchDocument>>,
{
    let terms = tokenize(query);
    if terms.is_empty() {
        return Vec::new();
    }

    let mut hits: Vec<SearchHit> = documents
        .into_iter()
        .filter_map(|document| {
            let relevance = score(&terms, document, weights);
            (relevance > 0).then(|| SearchHit {
                document: Arc::clone(document),
                relevance,
            })
        })
        .filter(|hit| filters.map_or(true, |f| f.admits(&hit.document)))
        .collect();

    // Stable: equal scores keep index order.
    hits.sort_by(|a, b| b.relevance.cmp(&a.relevance));
    hits.truncate(limit);
    hits
}
