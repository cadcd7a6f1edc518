use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};
use validator::Validate;

/// Employment status of an employee
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Display, EnumString, AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum EmployeeStatus {
    Active,
    Inactive,
    OnLeave,
    Terminated,
}

impl EmployeeStatus {
    /// Whether payroll is still run for this employee
    pub fn is_payable(&self) -> bool {
        matches!(self, EmployeeStatus::Active | EmployeeStatus::OnLeave)
    }
}

/// An employee record as held by the record provider
#[derive(Debug, Clone, Serialize, Deserialize, Validate, PartialEq)]
pub struct Employee {
    /// Unique identifier
    #[validate(length(min = 1))]
    pub id: String,

    #[validate(length(min = 1, max = 100))]
    pub first_name: String,

    #[validate(length(min = 1, max = 100))]
    pub last_name: String,

    #[validate(email)]
    pub email: String,

    #[serde(default)]
    pub phone: Option<String>,

    #[serde(default)]
    pub address: Option<String>,

    #[serde(default)]
    pub city: Option<String>,

    #[serde(default)]
    pub state: Option<String>,

    #[serde(default)]
    pub zip_code: Option<String>,

    #[serde(default)]
    pub country: Option<String>,

    #[serde(default)]
    pub date_of_birth: Option<NaiveDate>,

    pub date_of_joining: NaiveDate,

    #[validate(length(min = 1))]
    pub department: String,

    #[validate(length(min = 1))]
    pub designation: String,

    /// Human-facing employee code, e.g. `EMP001`
    #[validate(length(min = 1))]
    pub employee_id: String,

    #[serde(default)]
    pub manager_id: Option<String>,

    pub status: EmployeeStatus,

    // Banking and statutory identifiers; carried through, never searched.
    #[serde(default)]
    pub bank_account_number: Option<String>,
    #[serde(default)]
    pub bank_name: Option<String>,
    #[serde(default)]
    pub bank_ifsc: Option<String>,
    #[serde(default)]
    pub pan_number: Option<String>,
    #[serde(default)]
    pub aadhar_number: Option<String>,
    #[serde(default)]
    pub uan_number: Option<String>,
    #[serde(default)]
    pub pf_number: Option<String>,
    #[serde(default)]
    pub esi_number: Option<String>,
}

impl Employee {
    /// Create an employee with the fields search cares about; the rest stay empty
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        department: impl Into<String>,
        designation: impl Into<String>,
        status: EmployeeStatus,
    ) -> Self {
        let first_name = first_name.into();
        let last_name = last_name.into();
        let email = format!(
            "{}.{}@example.com",
            first_name.to_lowercase(),
            last_name.to_lowercase()
        );

        Self {
            id: uuid::Uuid::new_v4().to_string(),
            first_name,
            last_name,
            email,
            phone: None,
            address: None,
            city: None,
            state: None,
            zip_code: None,
            country: None,
            date_of_birth: None,
            date_of_joining: NaiveDate::default(),
            department: department.into(),
            designation: designation.into(),
            employee_id: String::new(),
            manager_id: None,
            status,
            bank_account_number: None,
            bank_name: None,
            bank_ifsc: None,
            pan_number: None,
            aadhar_number: None,
            uan_number: None,
            pf_number: None,
            esi_number: None,
        }
    }

    /// "First Last"
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Whether the employee is currently active
    pub fn is_active(&self) -> bool {
        self.status == EmployeeStatus::Active
    }
}
