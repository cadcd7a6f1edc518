//! Autocomplete suggestions drawn from literal record fields

use crate::models::RecordSnapshot;
use std::collections::HashSet;

/// Ordered, de-duplicated suggestion collector with a hard cap
struct SuggestionSet<'a> {
    needle: String,
    seen: HashSet<&'a str>,
    values: Vec<&'a str>,
}

impl<'a> SuggestionSet<'a> {
    fn new(query: &str) -> Self {
        Self {
            needle: query.to_lowercase(),
            seen: HashSet::new(),
            values: Vec::new(),
        }
    }

    fn offer(&mut self, candidate: &'a str) {
        if candidate.to_lowercase().contains(&self.needle) && self.seen.insert(candidate) {
            self.values.push(candidate);
        }
    }
}

/// Distinct values in first-seen order
fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<&'a str> {
    let mut seen = HashSet::new();
    values.filter(|v| seen.insert(*v)).collect()
}

/// Suggest field values containing `query`, case-insensitively.
///
/// Scan order is employee full names, departments, designations, salary
/// component names, then payroll period names. Duplicates are dropped by
/// exact string equality before the list is capped at `limit`.
pub fn suggest(snapshot: &RecordSnapshot, query: &str, limit: usize) -> Vec<String> {
    if query.trim().is_empty() {
        return Vec::new();
    }

    let full_names: Vec<String> = snapshot.employees.iter().map(|e| e.full_name()).collect();
    let departments = distinct(snapshot.employees.iter().map(|e| e.department.as_str()));
    let designations = distinct(snapshot.employees.iter().map(|e| e.designation.as_str()));

    let mut set = SuggestionSet::new(query);
    for name in &full_names {
        set.offer(name);
    }
    for department in departments {
        set.offer(department);
    }
    for designation in designations {
        set.offer(designation);
    }
    for component in &snapshot.salary_components {
        set.offer(&component.name);
    }
    for period in &snapshot.payroll_periods {
        set.offer(&period.period_name);
    }

    set.values
        .into_iter()
        .take(limit)
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        CalculationType, ComponentType, Employee, EmployeeStatus, PayrollPeriod, PeriodStatus,
        SalaryComponent,
    };
    use chrono::NaiveDate;

    fn snapshot() -> RecordSnapshot {
        RecordSnapshot {
            employees: vec![
                Employee::new("John", "Doe", "Engineering", "Senior Software Engineer", EmployeeStatus::Active),
                Employee::new("Amit", "Patel", "Engineering", "Software Engineer", EmployeeStatus::Active),
                Employee::new("Jane", "Smith", "HR", "HR Manager", EmployeeStatus::Active),
            ],
            ..Default::default()
        }
    }

    #[test]
    fn test_scan_order_and_dedup() {
        let suggestions = suggest(&snapshot(), "eng", 10);
        assert_eq!(
            suggestions,
            vec!["Engineering", "Senior Software Engineer", "Software Engineer"]
        );
    }

    #[test]
    fn test_dedup_across_categories() {
        let mut records = snapshot();
        // designation equal to a department
        records.employees.push(Employee::new(
            "Sara",
            "Khan",
            "Sales",
            "Engineering",
            EmployeeStatus::Active,
        ));
        // component name equal to a period name
        records.salary_components.push(SalaryComponent::new(
            "Engineering Bonus",
            "Team bonus",
            ComponentType::Earning,
            CalculationType::Fixed,
            1000.0,
        ));
        records.payroll_periods.push(PayrollPeriod::new(
            "Engineering Bonus",
            NaiveDate::from_ymd_opt(2023, 8, 1).unwrap(),
            NaiveDate::from_ymd_opt(2023, 8, 31).unwrap(),
            NaiveDate::from_ymd_opt(2023, 9, 1).unwrap(),
            PeriodStatus::Draft,
        ));

        let suggestions = suggest(&records, "eng", 10);
        assert_eq!(
            suggestions,
            vec![
                "Engineering",
                "Senior Software Engineer",
                "Software Engineer",
                "Engineering Bonus",
            ]
        );
    }

    #[test]
    fn test_cap_and_blank_query() {
        assert_eq!(suggest(&snapshot(), "e", 2).len(), 2);
        assert!(suggest(&snapshot(), "  ", 10).is_empty());
    }

    #[test]
    fn test_names_come_first() {
        let suggestions = suggest(&snapshot(), "j", 10);
        assert_eq!(suggestions, vec!["John Doe", "Jane Smith"]);
    }
}
