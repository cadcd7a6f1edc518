//! Search document structures and text assembly

use crate::models::{
    CalculationType, Employee, PayrollPeriod, Payslip, SalaryComponent, SalaryStructure,
};
use crate::search::error::SearchError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The closed set of record kinds that appear in the index
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    Employee,
    SalaryStructure,
    SalaryComponent,
    PayrollPeriod,
    Payslip,
}

impl DocumentKind {
    pub const ALL: [DocumentKind; 5] = [
        DocumentKind::Employee,
        DocumentKind::SalaryStructure,
        DocumentKind::SalaryComponent,
        DocumentKind::PayrollPeriod,
        DocumentKind::Payslip,
    ];

    /// Wire name, e.g. `salary_structure`
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentKind::Employee => "employee",
            DocumentKind::SalaryStructure => "salary_structure",
            DocumentKind::SalaryComponent => "salary_component",
            DocumentKind::PayrollPeriod => "payroll_period",
            DocumentKind::Payslip => "payslip",
        }
    }

    /// Human label shown next to a hit
    pub fn label(&self) -> &'static str {
        match self {
            DocumentKind::Employee => "Employee",
            DocumentKind::SalaryStructure => "Salary Structure",
            DocumentKind::SalaryComponent => "Salary Component",
            DocumentKind::PayrollPeriod => "Payroll Period",
            DocumentKind::Payslip => "Payslip",
        }
    }
}

impl std::fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DocumentKind {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DocumentKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| SearchError::UnknownDocumentKind(s.to_string()))
    }
}

/// A payslip together with the employee and period it was joined against
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PayslipRecord {
    #[serde(flatten)]
    pub payslip: Payslip,
    pub employee: Employee,
    pub period: PayrollPeriod,
}

/// The backing record of a document, one variant per kind
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(untagged)]
pub enum IndexedRecord {
    Employee(Employee),
    SalaryStructure(SalaryStructure),
    SalaryComponent(SalaryComponent),
    PayrollPeriod(PayrollPeriod),
    Payslip(Box<PayslipRecord>),
}

impl IndexedRecord {
    pub fn kind(&self) -> DocumentKind {
        match self {
            IndexedRecord::Employee(_) => DocumentKind::Employee,
            IndexedRecord::SalaryStructure(_) => DocumentKind::SalaryStructure,
            IndexedRecord::SalaryComponent(_) => DocumentKind::SalaryComponent,
            IndexedRecord::PayrollPeriod(_) => DocumentKind::PayrollPeriod,
            IndexedRecord::Payslip(_) => DocumentKind::Payslip,
        }
    }
}

/// Where the dashboard navigates when a hit is opened
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Navigation {
    /// Page route, e.g. `/payroll`
    pub path: String,

    /// Query parameter the page reads
    pub param: String,

    /// Unencoded parameter value
    pub value: String,
}

impl Navigation {
    fn new(path: &str, param: &str, value: &str) -> Self {
        Self {
            path: path.to_string(),
            param: param.to_string(),
            value: value.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct NormalizedText {
    pub(crate) title: String,
    pub(crate) subtitle: String,
    pub(crate) description: String,
}

/// One flattened, searchable record
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SearchDocument {
    /// Record kind
    #[serde(rename = "type")]
    pub kind: DocumentKind,

    /// Identifier copied from the backing record
    pub id: String,

    /// Primary label
    pub title: String,

    /// Secondary descriptor
    pub subtitle: String,

    /// Free-text detail, matched but never parsed back
    pub description: String,

    /// Backing record
    pub data: IndexedRecord,

    #[serde(skip)]
    pub(crate) normalized: NormalizedText,
}

impl SearchDocument {
    fn new(
        id: &str,
        title: String,
        subtitle: String,
        description: String,
        data: IndexedRecord,
    ) -> Self {
        let normalized = NormalizedText {
            title: title.to_lowercase(),
            subtitle: subtitle.to_lowercase(),
            description: description.to_lowercase(),
        };

        Self {
            kind: data.kind(),
            id: id.to_string(),
            title,
            subtitle,
            description,
            data,
            normalized,
        }
    }

    /// Build the document for a payslip joined with its employee and period
    pub fn payslip(payslip: &Payslip, employee: &Employee, period: &PayrollPeriod) -> Self {
        let title = format!("{} - {}", employee.full_name(), period.period_name);
        let subtitle = format!("Payslip - {}", payslip.payment_status);
        let description = format!(
            "Net Salary: ₹{} | Gross: ₹{} | Deductions: ₹{}",
            format_amount(payslip.net_salary),
            format_amount(payslip.gross_earnings),
            format_amount(payslip.total_deductions)
        );

        Self::new(
            &payslip.id,
            title,
            subtitle,
            description,
            IndexedRecord::Payslip(Box::new(PayslipRecord {
                payslip: payslip.clone(),
                employee: employee.clone(),
                period: period.clone(),
            })),
        )
    }

    /// Dashboard route for this document
    pub fn navigation(&self) -> Navigation {
        match &self.data {
            IndexedRecord::Employee(employee) => {
                Navigation::new("/employees", "search", &employee.employee_id)
            }
            IndexedRecord::SalaryStructure(structure) => {
                Navigation::new("/salary-structure", "search", &structure.name)
            }
            IndexedRecord::SalaryComponent(component) => {
                Navigation::new("/salary-structure", "component", &component.name)
            }
            IndexedRecord::PayrollPeriod(period) => {
                Navigation::new("/payroll", "period", &period.id)
            }
            IndexedRecord::Payslip(record) => {
                Navigation::new("/payroll", "payslip", &record.payslip.id)
            }
        }
    }
}

impl From<&Employee> for SearchDocument {
    fn from(employee: &Employee) -> Self {
        let title = employee.full_name();
        let subtitle = format!("{} - {}", employee.designation, employee.department);
        let description = format!(
            "{} | {} | {}, {}",
            employee.email,
            employee.employee_id,
            employee.city.as_deref().unwrap_or_default(),
            employee.state.as_deref().unwrap_or_default()
        );

        Self::new(
            &employee.id,
            title,
            subtitle,
            description,
            IndexedRecord::Employee(employee.clone()),
        )
    }
}

impl From<&SalaryStructure> for SearchDocument {
    fn from(structure: &SalaryStructure) -> Self {
        let description = structure
            .description
            .as_deref()
            .filter(|d| !d.is_empty())
            .unwrap_or("No description available")
            .to_string();

        Self::new(
            &structure.id,
            structure.name.clone(),
            "Salary Structure".to_string(),
            description,
            IndexedRecord::SalaryStructure(structure.clone()),
        )
    }
}

impl From<&SalaryComponent> for SearchDocument {
    fn from(component: &SalaryComponent) -> Self {
        let subtitle = format!(
            "{} - {}",
            component.component_type, component.calculation_type
        );
        let suffix = match component.calculation_type {
            CalculationType::Percentage => "%",
            CalculationType::Fixed => "",
        };
        let description = format!(
            "{} | Value: {}{}",
            component.description.as_deref().unwrap_or_default(),
            component.calculation_value,
            suffix
        );

        Self::new(
            &component.id,
            component.name.clone(),
            subtitle,
            description,
            IndexedRecord::SalaryComponent(component.clone()),
        )
    }
}

impl From<&PayrollPeriod> for SearchDocument {
    fn from(period: &PayrollPeriod) -> Self {
        let subtitle = format!("Payroll Period - {}", period.status);
        let description = format!(
            "{} to {} | Payment: {}",
            period.period_start, period.period_end, period.payment_date
        );

        Self::new(
            &period.id,
            period.period_name.clone(),
            subtitle,
            description,
            IndexedRecord::PayrollPeriod(period.clone()),
        )
    }
}

/// Render an amount with thousands separators and at most three decimals,
/// e.g. `65800.0` -> `65,800`, `1234.5` -> `1,234.5`
pub fn format_amount(amount: f64) -> String {
    let fixed = format!("{:.3}", amount.abs());
    let (integer, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let fraction = fraction.trim_end_matches('0');

    let mut grouped = String::with_capacity(integer.len() + integer.len() / 3);
    for (i, digit) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let negative = amount < 0.0 && (grouped != "0" || !fraction.is_empty());
    let sign = if negative { "-" } else { "" };
    if fraction.is_empty() {
        format!("{}{}", sign, grouped)
    } else {
        format!("{}{}.{}", sign, grouped, fraction)
    }
}
