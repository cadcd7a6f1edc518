//! Search index construction

use crate::models::RecordSnapshot;
use crate::search::document::{DocumentKind, SearchDocument};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

/// Index statistics
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct IndexStats {
    /// Total number of documents in the index
    pub total_documents: usize,

    /// Documents per kind
    pub documents_by_kind: BTreeMap<DocumentKind, usize>,

    /// Payslips left out because their employee or period did not resolve
    pub skipped_payslips: usize,

    /// When the index was built
    pub built_at: chrono::DateTime<chrono::Utc>,
}

/// Flat, immutable list of search documents built from one record snapshot
#[derive(Debug, Clone)]
pub struct SearchIndex {
    documents: Vec<Arc<SearchDocument>>,
    skipped_payslips: usize,
    built_at: chrono::DateTime<chrono::Utc>,
}

impl SearchIndex {
    /// Flatten every collection into documents, in provider order:
    /// employees, salary structures, salary components, payroll periods, payslips.
    ///
    /// A payslip whose employee or payroll period is missing from the snapshot
    /// is left out of the index.
    pub fn build(snapshot: &RecordSnapshot) -> Self {
        let mut documents = Vec::with_capacity(snapshot.len());

        documents.extend(snapshot.employees.iter().map(SearchDocument::from));
        documents.extend(snapshot.salary_structures.iter().map(SearchDocument::from));
        documents.extend(snapshot.salary_components.iter().map(SearchDocument::from));
        documents.extend(snapshot.payroll_periods.iter().map(SearchDocument::from));

        // First record wins when ids repeat, matching a linear find.
        let mut employees = HashMap::with_capacity(snapshot.employees.len());
        for employee in &snapshot.employees {
            employees.entry(employee.id.as_str()).or_insert(employee);
        }
        let mut periods = HashMap::with_capacity(snapshot.payroll_periods.len());
        for period in &snapshot.payroll_periods {
            periods.entry(period.id.as_str()).or_insert(period);
        }

        let mut skipped_payslips = 0;
        for payslip in &snapshot.payslips {
            let employee = employees.get(payslip.employee_id.as_str());
            let period = periods.get(payslip.payroll_period_id.as_str());

            match (employee, period) {
                (Some(employee), Some(period)) => {
                    documents.push(SearchDocument::payslip(payslip, employee, period));
                }
                _ => {
                    skipped_payslips += 1;
                    tracing::debug!(
                        payslip_id = %payslip.id,
                        employee_found = employee.is_some(),
                        period_found = period.is_some(),
                        "Payslip left out of search index"
                    );
                }
            }
        }

        let index = Self {
            documents: documents.into_iter().map(Arc::new).collect(),
            skipped_payslips,
            built_at: chrono::Utc::now(),
        };

        tracing::info!(
            documents = index.documents.len(),
            skipped_payslips = index.skipped_payslips,
            "Search index built"
        );

        index
    }

    /// Documents in build order
    pub fn documents(&self) -> &[Arc<SearchDocument>] {
        &self.documents
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    pub fn skipped_payslips(&self) -> usize {
        self.skipped_payslips
    }

    /// Look up a document by kind and id
    pub fn get(&self, kind: DocumentKind, id: &str) -> Option<&Arc<SearchDocument>> {
        self.documents
            .iter()
            .find(|doc| doc.kind == kind && doc.id == id)
    }

    /// Get index statistics
    pub fn stats(&self) -> IndexStats {
        let mut documents_by_kind: BTreeMap<DocumentKind, usize> =
            DocumentKind::ALL.into_iter().map(|kind| (kind, 0)).collect();
        for doc in &self.documents {
            *documents_by_kind.entry(doc.kind).or_insert(0) += 1;
        }

        IndexStats {
            total_documents: self.documents.len(),
            documents_by_kind,
            skipped_payslips: self.skipped_payslips,
            built_at: self.built_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Employee, EmployeeStatus, PaymentStatus, Payslip, SalaryStructure};

    fn payslip(id: &str, employee_id: &str, period_id: &str) -> Payslip {
        Payslip {
            id: id.to_string(),
            employee_id: employee_id.to_string(),
            payroll_period_id: period_id.to_string(),
            base_salary: 50000.0,
            gross_earnings: 80000.0,
            total_deductions: 14200.0,
            net_salary: 65800.0,
            payment_method: "Bank Transfer".to_string(),
            payment_status: PaymentStatus::Pending,
            payment_date: None,
            payment_reference: None,
        }
    }

    #[test]
    fn test_build_order_and_counts() {
        let snapshot = RecordSnapshot {
            employees: vec![Employee::new(
                "Raj",
                "Kumar",
                "Finance",
                "Finance Manager",
                EmployeeStatus::Active,
            )],
            salary_structures: vec![SalaryStructure::new("Standard Structure", None)],
            ..Default::default()
        };

        let index = SearchIndex::build(&snapshot);
        assert_eq!(index.len(), 2);
        assert_eq!(index.documents()[0].kind, DocumentKind::Employee);
        assert_eq!(index.documents()[1].kind, DocumentKind::SalaryStructure);

        let stats = index.stats();
        assert_eq!(stats.documents_by_kind[&DocumentKind::Employee], 1);
        assert_eq!(stats.documents_by_kind[&DocumentKind::Payslip], 0);
    }

    #[test]
    fn test_unresolved_payslips_are_skipped() {
        let employee = Employee::new("Neha", "Gupta", "Sales", "Sales Executive", EmployeeStatus::OnLeave);
        let snapshot = RecordSnapshot {
            employees: vec![employee.clone()],
            payslips: vec![
                payslip("ps-1", &employee.id, "missing-period"),
                payslip("ps-2", "missing-employee", "missing-period"),
            ],
            ..Default::default()
        };

        let index = SearchIndex::build(&snapshot);
        assert_eq!(index.len(), 1);
        assert_eq!(index.skipped_payslips(), 2);
        assert!(index.get(DocumentKind::Payslip, "ps-1").is_none());
        assert!(index.get(DocumentKind::Employee, &employee.id).is_some());
    }
}
