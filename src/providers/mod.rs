//! Record providers feeding the search index
//!
//! A [`RecordSource`] yields the five payroll collections. Sources are async
//! because real backends do I/O; the search index itself is built
//! synchronously from the resulting [`RecordSnapshot`].

mod demo;
mod factory;
mod file;
mod memory;
mod rest;

pub use demo::{demo_snapshot, generate_payslips};
pub use factory::create_source;
pub use file::FileSource;
pub use memory::InMemorySource;
pub use rest::RestSource;

use crate::error::Result;
use crate::models::{
    Employee, PayrollPeriod, Payslip, RecordSnapshot, SalaryComponent, SalaryStructure,
};
use async_trait::async_trait;

/// Trait for payroll record providers
#[async_trait]
pub trait RecordSource: Send + Sync {
    /// Short name used in logs and errors
    fn name(&self) -> &str;

    /// Fetch all employees
    async fn employees(&self) -> Result<Vec<Employee>>;

    /// Fetch all salary structures
    async fn salary_structures(&self) -> Result<Vec<SalaryStructure>>;

    /// Fetch all salary components
    async fn salary_components(&self) -> Result<Vec<SalaryComponent>>;

    /// Fetch all payroll periods
    async fn payroll_periods(&self) -> Result<Vec<PayrollPeriod>>;

    /// Fetch all payslips
    async fn payslips(&self) -> Result<Vec<Payslip>>;

    /// Fetch every collection concurrently
    async fn snapshot(&self) -> Result<RecordSnapshot> {
        let (employees, salary_structures, salary_components, payroll_periods, payslips) = tokio::try_join!(
            self.employees(),
            self.salary_structures(),
            self.salary_components(),
            self.payroll_periods(),
            self.payslips(),
        )?;

        Ok(RecordSnapshot {
            employees,
            salary_structures,
            salary_components,
            payroll_periods,
            payslips,
        })
    }
}
