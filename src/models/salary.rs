use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};
use validator::Validate;

/// A named bundle of salary components
#[derive(Debug, Clone, Serialize, Deserialize, Validate, PartialEq)]
pub struct SalaryStructure {
    #[validate(length(min = 1))]
    pub id: String,

    #[validate(length(min = 1, max = 255))]
    pub name: String,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default = "default_true")]
    pub is_active: bool,
}

impl SalaryStructure {
    pub fn new(name: impl Into<String>, description: Option<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            name: name.into(),
            description,
            is_active: true,
        }
    }
}

#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Display, EnumString, AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ComponentType {
    Earning,
    Deduction,
}

#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Display, EnumString, AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum CalculationType {
    Fixed,
    Percentage,
}

/// A single earning or deduction line
#[derive(Debug, Clone, Serialize, Deserialize, Validate, PartialEq)]
pub struct SalaryComponent {
    #[validate(length(min = 1))]
    pub id: String,

    #[validate(length(min = 1, max = 255))]
    pub name: String,

    #[serde(default)]
    pub description: Option<String>,

    pub component_type: ComponentType,

    pub calculation_type: CalculationType,

    /// Fixed amount, or a percentage when `calculation_type` is percentage
    #[validate(range(min = 0.0))]
    pub calculation_value: f64,

    /// What a percentage applies to, e.g. "Basic Salary"
    #[serde(default)]
    pub calculation_basis: Option<String>,

    #[serde(default)]
    pub taxable: bool,

    #[serde(default = "default_true")]
    pub is_active: bool,
}

impl SalaryComponent {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        component_type: ComponentType,
        calculation_type: CalculationType,
        calculation_value: f64,
    ) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            name: name.into(),
            description: Some(description.into()),
            component_type,
            calculation_type,
            calculation_value,
            calculation_basis: None,
            taxable: false,
            is_active: true,
        }
    }

    pub fn with_basis(mut self, basis: impl Into<String>) -> Self {
        self.calculation_basis = Some(basis.into());
        self
    }

    pub fn taxable(mut self, taxable: bool) -> Self {
        self.taxable = taxable;
        self
    }

    /// Amount this component contributes for the given basis amount
    pub fn amount_for(&self, basis: f64) -> f64 {
        match self.calculation_type {
            CalculationType::Fixed => self.calculation_value,
            CalculationType::Percentage => basis * self.calculation_value / 100.0,
        }
    }
}

fn default_true() -> bool {
    true
}
