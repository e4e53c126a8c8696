// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{TimeZone, Utc};
use financeflow::models::{
    CategoryFilter, KindFilter, ReportFilters, Transaction, TransactionKind,
};
use financeflow::stats::report_data;

fn tx(id: i64, kind: TransactionKind, amount: f64, category: &str, date: &str) -> Transaction {
    Transaction {
        id,
        description: format!("tx {}", id),
        amount,
        kind,
        category: category.to_string(),
        date: date.parse().unwrap(),
        created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
    }
}

fn sample() -> Vec<Transaction> {
    vec![
        tx(1, TransactionKind::Income, 1000.0, "Trabalho", "2024-05-01"),
        tx(2, TransactionKind::Expense, 200.0, "Alimentação", "2024-05-10"),
    ]
}

#[test]
fn no_filters_returns_everything_in_order() {
    let transactions = sample();
    let report = report_data(&transactions, &ReportFilters::default());

    assert_eq!(report.transactions, transactions);
    assert_eq!(report.summary.total_income, 1000.0);
    assert_eq!(report.summary.total_expense, 200.0);
    assert_eq!(report.summary.balance, 800.0);
}

#[test]
fn type_filter_restricts_rows_and_summary() {
    let filters = ReportFilters {
        kind: KindFilter::Only(TransactionKind::Expense),
        ..Default::default()
    };
    let report = report_data(&sample(), &filters);

    assert_eq!(report.summary.total_income, 0.0);
    assert_eq!(report.summary.total_expense, 200.0);
    assert_eq!(report.summary.balance, -200.0);
    let ids: Vec<i64> = report.transactions.iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![2]);
}

#[test]
fn date_bounds_are_inclusive() {
    let filters = ReportFilters {
        date_start: Some("2024-05-01".to_string()),
        date_end: Some("2024-05-10".to_string()),
        ..Default::default()
    };
    let report = report_data(&sample(), &filters);
    // both records sit exactly on a bound
    assert_eq!(report.transactions.len(), 2);

    let narrowed = ReportFilters {
        date_end: Some("2024-05-09".to_string()),
        ..Default::default()
    };
    let report = report_data(&sample(), &narrowed);
    let ids: Vec<i64> = report.transactions.iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![1]);
}

#[test]
fn unparseable_date_clause_is_dropped_not_fatal() {
    let filters = ReportFilters {
        date_start: Some("05/01/2024".to_string()),
        kind: KindFilter::Only(TransactionKind::Income),
        ..Default::default()
    };
    let report = report_data(&sample(), &filters);
    // the bad start date is ignored; the type clause still applies
    let ids: Vec<i64> = report.transactions.iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![1]);
}

#[test]
fn filters_apply_as_a_conjunction() {
    let transactions = vec![
        tx(1, TransactionKind::Expense, 10.0, "Food", "2024-04-01"),
        tx(2, TransactionKind::Expense, 20.0, "Food", "2024-05-05"),
        tx(3, TransactionKind::Expense, 30.0, "Leisure", "2024-05-06"),
        tx(4, TransactionKind::Income, 40.0, "Food", "2024-05-07"),
    ];
    let filters = ReportFilters {
        date_start: Some("2024-05-01".to_string()),
        date_end: Some("2024-05-31".to_string()),
        kind: KindFilter::Only(TransactionKind::Expense),
        category: CategoryFilter::Only("Food".to_string()),
    };
    let report = report_data(&transactions, &filters);
    let ids: Vec<i64> = report.transactions.iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![2]);
    assert_eq!(report.summary.balance, -20.0);
}

#[test]
fn category_filter_matches_exactly() {
    let transactions = vec![
        tx(1, TransactionKind::Expense, 10.0, "Food", "2024-05-01"),
        tx(2, TransactionKind::Expense, 20.0, "Foodstuff", "2024-05-02"),
    ];
    let filters = ReportFilters {
        category: CategoryFilter::Only("Food".to_string()),
        ..Default::default()
    };
    let report = report_data(&transactions, &filters);
    let ids: Vec<i64> = report.transactions.iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![1]);
}

#[test]
fn repeated_calls_are_bit_identical() {
    let transactions = sample();
    let filters = ReportFilters {
        date_start: Some("2024-05-01".to_string()),
        ..Default::default()
    };
    assert_eq!(
        report_data(&transactions, &filters),
        report_data(&transactions, &filters)
    );
}
