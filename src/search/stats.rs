//! Dashboard record counts

use crate::models::RecordSnapshot;
use serde::{Deserialize, Serialize};

/// Record counts shown on the search page summary
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct QuickStats {
    pub employees: usize,
    pub active_employees: usize,
    pub salary_structures: usize,
    pub salary_components: usize,
    pub payroll_periods: usize,
    /// All payslip records, including ones left out of the index
    pub payslips: usize,
}

impl QuickStats {
    pub fn from_snapshot(snapshot: &RecordSnapshot) -> Self {
        Self {
            employees: snapshot.employees.len(),
            active_employees: snapshot.employees.iter().filter(|e| e.is_active()).count(),
            salary_structures: snapshot.salary_structures.len(),
            salary_components: snapshot.salary_components.len(),
            payroll_periods: snapshot.payroll_periods.len(),
            payslips: snapshot.payslips.len(),
        }
    }
}
