//! Built-in demo dataset
//!
//! Six employees, three salary structures, eight salary components and four
//! payroll periods, with payslips generated for every payable employee in
//! every period. Record ids are fresh v4 UUIDs on each call.

use crate::models::{
    CalculationType, ComponentType, Employee, EmployeeStatus, PaymentStatus, PayrollPeriod,
    Payslip, PeriodStatus, RecordSnapshot, SalaryComponent, SalaryStructure,
};
use chrono::NaiveDate;
use uuid::Uuid;

const HRA_RATE: f64 = 0.40;
const CONVEYANCE_ALLOWANCE: f64 = 3000.0;
const MEDICAL_ALLOWANCE: f64 = 2000.0;
const SPECIAL_ALLOWANCE: f64 = 5000.0;
const PF_RATE: f64 = 0.12;
const PROFESSIONAL_TAX: f64 = 200.0;
const INCOME_TAX_RATE: f64 = 0.10;

/// The complete demo snapshot
pub fn demo_snapshot() -> RecordSnapshot {
    let employees = demo_employees();
    let payroll_periods = demo_periods();
    let payslips = generate_payslips(&employees, &payroll_periods);

    RecordSnapshot {
        employees,
        salary_structures: demo_structures(),
        salary_components: demo_components(),
        payroll_periods,
        payslips,
    }
}

/// Base monthly salary by designation keyword
fn base_salary_for(designation: &str) -> f64 {
    if designation.contains("Manager") {
        80000.0
    } else if designation.contains("Senior") {
        65000.0
    } else if designation.contains("Executive") {
        45000.0
    } else {
        50000.0
    }
}

/// One payslip per (period, employee) pair, skipping inactive and
/// terminated employees. A payslip is paid when its period is paid.
pub fn generate_payslips(employees: &[Employee], periods: &[PayrollPeriod]) -> Vec<Payslip> {
    let mut payslips = Vec::new();

    for period in periods {
        for employee in employees.iter().filter(|e| e.status.is_payable()) {
            let base_salary = base_salary_for(&employee.designation);

            let gross_earnings = base_salary
                + base_salary * HRA_RATE
                + CONVEYANCE_ALLOWANCE
                + MEDICAL_ALLOWANCE
                + SPECIAL_ALLOWANCE;
            let total_deductions =
                base_salary * PF_RATE + PROFESSIONAL_TAX + gross_earnings * INCOME_TAX_RATE;

            let payment_status = PaymentStatus::from(period.status);
            let paid = payment_status == PaymentStatus::Paid;

            payslips.push(Payslip {
                id: Uuid::new_v4().to_string(),
                employee_id: employee.id.clone(),
                payroll_period_id: period.id.clone(),
                base_salary,
                gross_earnings,
                total_deductions,
                net_salary: gross_earnings - total_deductions,
                payment_method: "Bank Transfer".to_string(),
                payment_status,
                payment_date: paid.then_some(period.payment_date),
                payment_reference: paid.then(|| {
                    format!("REF-{}", Uuid::new_v4().as_u128() % 1_000_000)
                }),
            });
        }
    }

    payslips
}

struct EmployeeSeed {
    first_name: &'static str,
    last_name: &'static str,
    city: &'static str,
    state: &'static str,
    zip_code: &'static str,
    date_of_birth: (i32, u32, u32),
    date_of_joining: (i32, u32, u32),
    department: &'static str,
    designation: &'static str,
    status: EmployeeStatus,
    bank_name: &'static str,
}

const EMPLOYEE_SEEDS: [EmployeeSeed; 6] = [
    EmployeeSeed {
        first_name: "John",
        last_name: "Doe",
        city: "Mumbai",
        state: "Maharashtra",
        zip_code: "400001",
        date_of_birth: (1985, 5, 15),
        date_of_joining: (2020, 1, 15),
        department: "Engineering",
        designation: "Senior Software Engineer",
        status: EmployeeStatus::Active,
        bank_name: "HDFC Bank",
    },
    EmployeeSeed {
        first_name: "Jane",
        last_name: "Smith",
        city: "Bangalore",
        state: "Karnataka",
        zip_code: "560001",
        date_of_birth: (1990, 8, 20),
        date_of_joining: (2020, 2, 10),
        department: "HR",
        designation: "HR Manager",
        status: EmployeeStatus::Active,
        bank_name: "ICICI Bank",
    },
    EmployeeSeed {
        first_name: "Raj",
        last_name: "Kumar",
        city: "Delhi",
        state: "Delhi",
        zip_code: "110001",
        date_of_birth: (1988, 11, 12),
        date_of_joining: (2020, 3, 5),
        department: "Finance",
        designation: "Finance Manager",
        status: EmployeeStatus::Active,
        bank_name: "SBI Bank",
    },
    EmployeeSeed {
        first_name: "Priya",
        last_name: "Sharma",
        city: "Chennai",
        state: "Tamil Nadu",
        zip_code: "600001",
        date_of_birth: (1992, 4, 25),
        date_of_joining: (2020, 4, 15),
        department: "Marketing",
        designation: "Marketing Specialist",
        status: EmployeeStatus::Active,
        bank_name: "Axis Bank",
    },
    EmployeeSeed {
        first_name: "Amit",
        last_name: "Patel",
        city: "Ahmedabad",
        state: "Gujarat",
        zip_code: "380001",
        date_of_birth: (1991, 7, 8),
        date_of_joining: (2021, 1, 10),
        department: "Engineering",
        designation: "Software Engineer",
        status: EmployeeStatus::Active,
        bank_name: "Kotak Bank",
    },
    EmployeeSeed {
        first_name: "Neha",
        last_name: "Gupta",
        city: "Kolkata",
        state: "West Bengal",
        zip_code: "700001",
        date_of_birth: (1993, 12, 3),
        date_of_joining: (2021, 6, 1),
        department: "Sales",
        designation: "Sales Executive",
        status: EmployeeStatus::OnLeave,
        bank_name: "Yes Bank",
    },
];

fn ymd((year, month, day): (i32, u32, u32)) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

fn demo_employees() -> Vec<Employee> {
    EMPLOYEE_SEEDS
        .iter()
        .enumerate()
        .map(|(i, seed)| {
            let n = i + 1;
            let mut employee = Employee::new(
                seed.first_name,
                seed.last_name,
                seed.department,
                seed.designation,
                seed.status,
            );
            employee.phone = Some(format!("+91 98765432{:02}", 9 + n));
            employee.city = Some(seed.city.to_string());
            employee.state = Some(seed.state.to_string());
            employee.zip_code = Some(seed.zip_code.to_string());
            employee.country = Some("India".to_string());
            employee.date_of_birth = Some(ymd(seed.date_of_birth));
            employee.date_of_joining = ymd(seed.date_of_joining);
            employee.employee_id = format!("EMP{:03}", n);
            employee.bank_name = Some(seed.bank_name.to_string());
            employee.pf_number = Some(format!("PF{:08}", n * 11_111_111));
            employee
        })
        .collect()
}

fn demo_structures() -> Vec<SalaryStructure> {
    vec![
        SalaryStructure::new(
            "Standard Structure",
            Some("Standard salary structure for all employees".to_string()),
        ),
        SalaryStructure::new(
            "Executive Structure",
            Some("Salary structure for executive level employees".to_string()),
        ),
        SalaryStructure::new(
            "Intern Structure",
            Some("Salary structure for interns".to_string()),
        ),
    ]
}

fn demo_components() -> Vec<SalaryComponent> {
    use CalculationType::{Fixed, Percentage};
    use ComponentType::{Deduction, Earning};

    vec![
        SalaryComponent::new("Basic Salary", "Base salary component", Earning, Fixed, 0.0)
            .taxable(true),
        SalaryComponent::new("House Rent Allowance", "HRA component", Earning, Percentage, 40.0)
            .with_basis("Basic Salary"),
        SalaryComponent::new("Conveyance Allowance", "Transport allowance", Earning, Fixed, 3000.0),
        SalaryComponent::new("Medical Allowance", "Medical benefits", Earning, Fixed, 2000.0),
        SalaryComponent::new("Special Allowance", "Additional benefits", Earning, Fixed, 5000.0)
            .taxable(true),
        SalaryComponent::new("Provident Fund", "Employee PF contribution", Deduction, Percentage, 12.0)
            .with_basis("Basic Salary"),
        SalaryComponent::new("Professional Tax", "State professional tax", Deduction, Fixed, 200.0),
        SalaryComponent::new("Income Tax", "TDS deduction", Deduction, Percentage, 10.0)
            .with_basis("Gross Salary"),
    ]
}

fn demo_periods() -> Vec<PayrollPeriod> {
    [
        ("April 2023", (2023, 4, 1), (2023, 4, 30), (2023, 5, 1), PeriodStatus::Paid),
        ("May 2023", (2023, 5, 1), (2023, 5, 31), (2023, 6, 1), PeriodStatus::Paid),
        ("June 2023", (2023, 6, 1), (2023, 6, 30), (2023, 7, 1), PeriodStatus::Approved),
        ("July 2023", (2023, 7, 1), (2023, 7, 31), (2023, 8, 1), PeriodStatus::Processing),
    ]
    .into_iter()
    .map(|(name, start, end, payment, status)| {
        PayrollPeriod::new(name, ymd(start), ymd(end), ymd(payment), status)
    })
    .collect()
}
