//! Integration tests for ranked search, suggestions and record counts

mod common;

use common::*;
use payroll_search::models::{
    EmployeeStatus, PaymentStatus, PeriodStatus, RecordSnapshot, SalaryStructure,
};
use payroll_search::providers::{demo_snapshot, InMemorySource};
use payroll_search::search::*;
use std::collections::HashSet;
use std::sync::Arc;

fn demo_service() -> SearchService {
    SearchService::from_snapshot(demo_snapshot())
}

fn assert_sorted(hits: &[SearchHit]) {
    for pair in hits.windows(2) {
        assert!(
            pair[0].relevance >= pair[1].relevance,
            "{} ({}) ranked above {} ({})",
            pair[0].document.title,
            pair[0].relevance,
            pair[1].document.title,
            pair[1].relevance
        );
    }
}

#[test]
fn test_blank_queries_return_nothing() {
    let service = demo_service();
    for query in ["", " ", "   ", "\t\n"] {
        assert!(service.search(query, None).is_empty(), "query {:?}", query);
    }
}

#[test]
fn test_every_hit_is_relevant() {
    let service = demo_service();
    for query in ["john", "engineer", "2023", "allowance", "paid", "xyz-not-there"] {
        for hit in service.search(query, None) {
            assert!(hit.relevance > 0);
        }
    }
}

#[test]
fn test_results_capped_and_sorted() {
    let service = demo_service();

    // 24 payslip titles and 4 period titles mention the year
    let hits = service.search("2023", None);
    assert_eq!(hits.len(), 20);
    assert_sorted(&hits);

    // Periods also match in their description, so they rank first
    for hit in &hits[..4] {
        assert_eq!(hit.document.kind, DocumentKind::PayrollPeriod);
        assert_eq!(hit.relevance, 13);
    }
}

#[test]
fn test_custom_result_cap() {
    let config = SearchConfigBuilder::new().max_results(5).build().unwrap();
    let service = SearchService::new(demo_snapshot(), config).unwrap();
    assert_eq!(service.search("2023", None).len(), 5);
}

#[test]
fn test_invalid_config_rejected() {
    let config = SearchConfig {
        max_results: 0,
        ..Default::default()
    };
    assert!(SearchService::new(RecordSnapshot::default(), config).is_err());

    // Caps cannot be raised past the 20 result / 10 suggestion limits
    let config = SearchConfig {
        max_results: RESULT_LIMIT + 1,
        ..Default::default()
    };
    assert!(SearchService::new(demo_snapshot(), config).is_err());
}

#[test]
fn test_type_filter() {
    let service = demo_service();
    let filters = SearchFilters::new().with_types(vec![DocumentKind::Employee]);

    let hits = service.search("engineering", Some(&filters));
    assert_eq!(hits.len(), 2);
    assert!(hits.iter().all(|h| h.document.kind == DocumentKind::Employee));
}

#[test]
fn test_empty_facets_do_not_restrict() {
    let service = demo_service();
    let unfiltered = service.search("2023", None);

    let filters = SearchFilters::new()
        .with_types(vec![])
        .with_departments(Vec::<String>::new())
        .with_status(Vec::<String>::new());
    assert!(filters.is_unrestricted());
    assert_eq!(service.search("2023", Some(&filters)), unfiltered);
}

#[test]
fn test_department_filter_only_touches_employees() {
    let service = demo_service();
    let filters = SearchFilters::new().with_departments(vec!["Engineering"]);

    let hits = service.search("software", Some(&filters));
    assert_eq!(hits.len(), 2);
    for hit in &hits {
        match &hit.document.data {
            IndexedRecord::Employee(e) => assert_eq!(e.department, "Engineering"),
            other => panic!("unexpected record {:?}", other.kind()),
        }
    }

    // Payslips and periods pass the department facet untouched
    let hits = service.search("2023", Some(&filters));
    assert_eq!(hits.len(), 20);
    assert!(hits.iter().all(|h| h.document.kind != DocumentKind::Employee));
}

#[test]
fn test_status_filter() {
    let service = demo_service();
    let filters = SearchFilters::new().with_status(vec!["paid"]);

    // April and May are paid: 2 periods plus 6 payslips each
    let hits = service.search("2023", Some(&filters));
    assert_eq!(hits.len(), 14);
    for hit in &hits {
        match &hit.document.data {
            IndexedRecord::PayrollPeriod(p) => assert_eq!(p.status, PeriodStatus::Paid),
            IndexedRecord::Payslip(r) => {
                assert_eq!(r.payslip.payment_status, PaymentStatus::Paid)
            }
            other => panic!("unexpected record {:?}", other.kind()),
        }
    }

    let filters = SearchFilters::new().with_status(vec!["on_leave"]);
    let hits = service.search("gupta", Some(&filters));
    // Neha's employee document plus her pending payslips
    assert_eq!(hits[0].document.title, "Neha Gupta");
    assert!(hits
        .iter()
        .all(|h| h.document.kind == DocumentKind::Employee));
}

#[test]
fn test_status_filter_ignores_structures_and_components() {
    let service = demo_service();
    let filters = SearchFilters::new().with_status(vec!["terminated"]);

    let hits = service.search("allowance", Some(&filters));
    assert_eq!(hits.len(), 4);
    assert!(hits
        .iter()
        .all(|h| h.document.kind == DocumentKind::SalaryComponent));
}

#[test]
fn test_payslips_require_employee_and_period() {
    let mut snapshot = john_doe_snapshot();
    let april = period("April 2023", 4, PeriodStatus::Paid);
    let john_id = snapshot.employees[0].id.clone();

    snapshot.payslips = vec![
        payslip("ps-ok", &john_id, &april.id, 82900.0),
        payslip("ps-no-employee", "missing", &april.id, 50000.0),
        payslip("ps-no-period", &john_id, "missing", 50000.0),
    ];
    snapshot.payroll_periods = vec![april];

    let service = SearchService::from_snapshot(snapshot);
    let stats = service.index_stats();
    assert_eq!(stats.skipped_payslips, 2);
    assert_eq!(stats.documents_by_kind.get(&DocumentKind::Payslip), Some(&1));

    assert!(service.document(DocumentKind::Payslip, "ps-ok").is_some());
    assert!(service.document(DocumentKind::Payslip, "ps-no-employee").is_none());
    assert!(service.document(DocumentKind::Payslip, "ps-no-period").is_none());

    let payslip_ids: Vec<String> = service
        .search("john 2023 payslip pending", None)
        .into_iter()
        .filter(|h| h.document.kind == DocumentKind::Payslip)
        .map(|h| h.document.id.clone())
        .collect();
    assert_eq!(payslip_ids, vec!["ps-ok".to_string()]);

    // Stats still count every payslip record
    assert_eq!(service.quick_stats().payslips, 3);
}

#[test]
fn test_single_employee_scenario() {
    let service = SearchService::from_snapshot(john_doe_snapshot());

    let hits = service.search("john", None);
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].document.kind, DocumentKind::Employee);
    assert!(hits[0].relevance >= 10);

    let both = service.search("john doe", None);
    assert!(both[0].relevance > hits[0].relevance);
}

#[test]
fn test_description_only_match_scores_three() {
    let service = SearchService::from_snapshot(john_doe_snapshot());
    let hits = service.search("pune", None);
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].relevance, 3);
}

#[test]
fn test_exact_title_bonus_stacks() {
    let snapshot = RecordSnapshot {
        salary_structures: vec![SalaryStructure::new("Bonus", None)],
        ..Default::default()
    };
    let service = SearchService::from_snapshot(snapshot);

    // +10 substring, +20 exact title
    let hits = service.search("BONUS", None);
    assert_eq!(hits[0].relevance, 30);
}

#[test]
fn test_ties_keep_index_order() {
    let snapshot = RecordSnapshot {
        employees: vec![
            employee("Asha", "Rao", "Sales", "Analyst", EmployeeStatus::Active),
            employee("Ravi", "Rao", "Sales", "Analyst", EmployeeStatus::Active),
            employee("Meera", "Rao", "Sales", "Analyst", EmployeeStatus::Active),
        ],
        ..Default::default()
    };
    let service = SearchService::from_snapshot(snapshot);

    let titles: Vec<String> = service
        .search("rao", None)
        .into_iter()
        .map(|h| h.document.title.clone())
        .collect();
    assert_eq!(titles, vec!["Asha Rao", "Ravi Rao", "Meera Rao"]);
}

#[test]
fn test_repeated_queries_are_independent() {
    let service = Arc::new(demo_service());
    let expected = service.search("engineer", None);

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let service = Arc::clone(&service);
            std::thread::spawn(move || service.search("engineer", None))
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
    assert_eq!(service.search("engineer", None), expected);
}

#[test]
fn test_hit_serializes_with_type_and_relevance() {
    let service = SearchService::from_snapshot(john_doe_snapshot());
    let hits = service.search("john", None);

    let value = serde_json::to_value(&hits[0]).unwrap();
    assert_eq!(value["type"], "employee");
    assert_eq!(value["title"], "John Doe");
    assert_eq!(value["relevance"], 13);
    assert_eq!(value["data"]["department"], "Engineering");
}

#[test]
fn test_navigation_routes() {
    let service = demo_service();

    let hit = &service.search("john", None)[0];
    let nav = hit.document.navigation();
    assert_eq!(nav.path, "/employees");
    assert_eq!(nav.param, "search");
    assert_eq!(nav.value, "EMP001");

    let hit = &service.search("april", Some(&SearchFilters::new().with_types(vec![DocumentKind::PayrollPeriod])))[0];
    let nav = hit.document.navigation();
    assert_eq!(nav.path, "/payroll");
    assert_eq!(nav.param, "period");
    assert_eq!(nav.value, hit.document.id);
}

#[test]
fn test_suggestions() {
    let service = demo_service();

    let suggestions = service.suggestions("eng");
    assert_eq!(
        suggestions,
        vec!["Engineering", "Senior Software Engineer", "Software Engineer"]
    );

    let suggestions = service.suggestions("a");
    assert!(suggestions.len() <= 10);
    let distinct: HashSet<&String> = suggestions.iter().collect();
    assert_eq!(distinct.len(), suggestions.len());

    assert!(service.suggestions("").is_empty());
    assert!(service.suggestions("   ").is_empty());
    assert!(service.suggestions("zzz").is_empty());
}

#[test]
fn test_quick_stats() {
    let stats = demo_service().quick_stats();
    assert_eq!(stats.employees, 6);
    assert_eq!(stats.active_employees, 5);
    assert_eq!(stats.salary_structures, 3);
    assert_eq!(stats.salary_components, 8);
    assert_eq!(stats.payroll_periods, 4);
    assert_eq!(stats.payslips, 24);

    let value = serde_json::to_value(stats).unwrap();
    assert_eq!(value["activeEmployees"], 5);
    assert_eq!(value["payrollPeriods"], 4);
}

#[test]
fn test_rebuild_replaces_index() {
    let service = SearchService::from_snapshot(john_doe_snapshot());
    assert_eq!(service.document_count(), 1);

    let rebuilt = service.rebuild(demo_snapshot());
    assert_eq!(rebuilt.document_count(), 6 + 3 + 8 + 4 + 24);
    assert_eq!(service.document_count(), 1);
    assert!(service.search("priya", None).is_empty());
    assert_eq!(rebuilt.search("priya", None).len(), 5);
}

#[tokio::test]
async fn test_load_from_source() {
    let source = InMemorySource::new(demo_snapshot());
    let service = SearchService::load(&source, SearchConfig::default())
        .await
        .unwrap();
    assert_eq!(service.quick_stats().employees, 6);
    assert_eq!(service.search("neha", None)[0].document.title, "Neha Gupta");
}
