use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};
use validator::Validate;

/// Processing state of a payroll period
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Display, EnumString, AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum PeriodStatus {
    Draft,
    Processing,
    Approved,
    Paid,
}

/// Payment state of a single payslip
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Display, EnumString, AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum PaymentStatus {
    Pending,
    Paid,
}

impl From<PeriodStatus> for PaymentStatus {
    fn from(status: PeriodStatus) -> Self {
        match status {
            PeriodStatus::Paid => PaymentStatus::Paid,
            _ => PaymentStatus::Pending,
        }
    }
}

/// A payroll run covering a date range
#[derive(Debug, Clone, Serialize, Deserialize, Validate, PartialEq)]
pub struct PayrollPeriod {
    #[validate(length(min = 1))]
    pub id: String,

    #[validate(length(min = 1, max = 100))]
    pub period_name: String,

    pub period_start: NaiveDate,

    pub period_end: NaiveDate,

    pub payment_date: NaiveDate,

    pub status: PeriodStatus,
}

impl PayrollPeriod {
    pub fn new(
        period_name: impl Into<String>,
        period_start: NaiveDate,
        period_end: NaiveDate,
        payment_date: NaiveDate,
        status: PeriodStatus,
    ) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            period_name: period_name.into(),
            period_start,
            period_end,
            payment_date,
            status,
        }
    }
}

/// One employee's pay for one payroll period
#[derive(Debug, Clone, Serialize, Deserialize, Validate, PartialEq)]
pub struct Payslip {
    #[validate(length(min = 1))]
    pub id: String,

    /// References `Employee::id`
    #[validate(length(min = 1))]
    pub employee_id: String,

    /// References `PayrollPeriod::id`
    #[validate(length(min = 1))]
    pub payroll_period_id: String,

    #[validate(range(min = 0.0))]
    pub base_salary: f64,

    #[validate(range(min = 0.0))]
    pub gross_earnings: f64,

    #[validate(range(min = 0.0))]
    pub total_deductions: f64,

    pub net_salary: f64,

    #[serde(default = "default_payment_method")]
    pub payment_method: String,

    pub payment_status: PaymentStatus,

    #[serde(default)]
    pub payment_date: Option<NaiveDate>,

    #[serde(default)]
    pub payment_reference: Option<String>,
}

fn default_payment_method() -> String {
    "Bank Transfer".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payment_status_follows_period() {
        assert_eq!(PaymentStatus::from(PeriodStatus::Paid), PaymentStatus::Paid);
        assert_eq!(
            PaymentStatus::from(PeriodStatus::Approved),
            PaymentStatus::Pending
        );
        assert_eq!(
            PaymentStatus::from(PeriodStatus::Draft),
            PaymentStatus::Pending
        );
    }

    #[test]
    fn test_payslip_deserialize_defaults() {
        let payslip: Payslip = serde_json::from_str(
            r#"{
                "id": "ps-1",
                "employee_id": "e-1",
                "payroll_period_id": "p-1",
                "base_salary": 50000,
                "gross_earnings": 80000,
                "total_deductions": 14200,
                "net_salary": 65800,
                "payment_status": "pending"
            }"#,
        )
        .unwrap();

        assert_eq!(payslip.payment_method, "Bank Transfer");
        assert_eq!(payslip.payment_status, PaymentStatus::Pending);
        assert!(payslip.payment_date.is_none());
        assert!(payslip.validate().is_ok());
    }

    #[test]
    fn test_period_status_literal() {
        assert_eq!(PeriodStatus::Processing.to_string(), "processing");
        assert_eq!(PaymentStatus::Paid.as_ref(), "paid");
    }
}
