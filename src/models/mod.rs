pub mod employee;
pub mod payroll;
pub mod salary;

pub use employee::*;
pub use payroll::*;
pub use salary::*;

use crate::error::{AppError, Result};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// The five record collections, read together at one point in time
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct RecordSnapshot {
    #[serde(default)]
    pub employees: Vec<Employee>,

    #[serde(default)]
    pub salary_structures: Vec<SalaryStructure>,

    #[serde(default)]
    pub salary_components: Vec<SalaryComponent>,

    #[serde(default)]
    pub payroll_periods: Vec<PayrollPeriod>,

    #[serde(default)]
    pub payslips: Vec<Payslip>,
}

impl RecordSnapshot {
    /// Total number of records across all collections
    pub fn len(&self) -> usize {
        self.employees.len()
            + self.salary_structures.len()
            + self.salary_components.len()
            + self.payroll_periods.len()
            + self.payslips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Validate every record, reporting the first failure with its collection and id
    pub fn validate_records(&self) -> Result<()> {
        fn check<T: Validate>(collection: &str, id: &str, record: &T) -> Result<()> {
            record.validate().map_err(|e| {
                AppError::Validation(format!("{} record '{}' is invalid: {}", collection, id, e))
            })
        }

        for employee in &self.employees {
            check("employees", &employee.id, employee)?;
        }
        for structure in &self.salary_structures {
            check("salary_structures", &structure.id, structure)?;
        }
        for component in &self.salary_components {
            check("salary_components", &component.id, component)?;
        }
        for period in &self.payroll_periods {
            check("payroll_periods", &period.id, period)?;
        }
        for payslip in &self.payslips {
            check("payslips", &payslip.id, payslip)?;
        }

        Ok(())
    }
}
