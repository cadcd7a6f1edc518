//! Common test fixtures for search and provider tests

#![allow(dead_code)]

use chrono::NaiveDate;
use payroll_search::models::{
    Employee, EmployeeStatus, PaymentStatus, PayrollPeriod, Payslip, PeriodStatus,
    RecordSnapshot,
};

/// Helper to create an employee with a code and city filled in
pub fn employee(
    first: &str,
    last: &str,
    department: &str,
    designation: &str,
    status: EmployeeStatus,
) -> Employee {
    let mut employee = Employee::new(first, last, department, designation, status);
    employee.employee_id = format!("EMP-{}", first.to_uppercase());
    employee.city = Some("Pune".to_string());
    employee.state = Some("Maharashtra".to_string());
    employee
}

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// Helper to create a monthly payroll period
pub fn period(name: &str, month: u32, status: PeriodStatus) -> PayrollPeriod {
    PayrollPeriod::new(
        name,
        date(2023, month, 1),
        date(2023, month, 28),
        date(2023, month + 1, 1),
        status,
    )
}

/// Helper to create a payslip linking `employee_id` and `period_id`
pub fn payslip(id: &str, employee_id: &str, period_id: &str, net: f64) -> Payslip {
    Payslip {
        id: id.to_string(),
        employee_id: employee_id.to_string(),
        payroll_period_id: period_id.to_string(),
        base_salary: net,
        gross_earnings: net,
        total_deductions: 0.0,
        net_salary: net,
        payment_method: "Bank Transfer".to_string(),
        payment_status: PaymentStatus::Pending,
        payment_date: None,
        payment_reference: None,
    }
}

/// A single-employee snapshot: John Doe, Senior Software Engineer in Engineering
pub fn john_doe_snapshot() -> RecordSnapshot {
    RecordSnapshot {
        employees: vec![employee(
            "John",
            "Doe",
            "Engineering",
            "Senior Software Engineer",
            EmployeeStatus::Active,
        )],
        ..Default::default()
    }
}
