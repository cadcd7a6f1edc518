use crate::error::Result;
use crate::models::{
    Employee, PayrollPeriod, Payslip, RecordSnapshot, SalaryComponent, SalaryStructure,
};
use crate::providers::RecordSource;
use async_trait::async_trait;
use std::sync::Arc;

/// In-memory record source (for the demo dataset and testing)
#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    records: Arc<RecordSnapshot>,
}

impl InMemorySource {
    pub fn new(records: RecordSnapshot) -> Self {
        Self {
            records: Arc::new(records),
        }
    }
}

#[async_trait]
impl RecordSource for InMemorySource {
    fn name(&self) -> &str {
        "memory"
    }

    async fn employees(&self) -> Result<Vec<Employee>> {
        Ok(self.records.employees.clone())
    }

    async fn salary_structures(&self) -> Result<Vec<SalaryStructure>> {
        Ok(self.records.salary_structures.clone())
    }

    async fn salary_components(&self) -> Result<Vec<SalaryComponent>> {
        Ok(self.records.salary_components.clone())
    }

    async fn payroll_periods(&self) -> Result<Vec<PayrollPeriod>> {
        Ok(self.records.payroll_periods.clone())
    }

    async fn payslips(&self) -> Result<Vec<Payslip>> {
        Ok(self.records.payslips.clone())
    }

    async fn snapshot(&self) -> Result<RecordSnapshot> {
        Ok(RecordSnapshot::clone(&self.records))
    }
}
