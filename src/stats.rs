// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{
    CategoryFilter, CategorySlice, ChartData, DashboardStats, KindFilter, ReportData,
    ReportFilters, ReportSummary, Transaction, TransactionKind, TrendPoint,
};
use crate::utils::{month_label, parse_date, shift_month};
use chrono::{Datelike, NaiveDate};
use std::cmp::Ordering;
use std::collections::HashMap;
use tracing::warn;

/// Number of calendar months in the trend series, reference month included.
const TREND_MONTHS: usize = 6;

fn amount_of(t: &Transaction) -> f64 {
    if t.amount.is_finite() { t.amount } else { 0.0 }
}

fn sum_kind<'a>(transactions: impl IntoIterator<Item = &'a Transaction>, kind: TransactionKind) -> f64 {
    transactions
        .into_iter()
        .filter(|t| t.kind == kind)
        .map(amount_of)
        .sum()
}

/// Current-month totals plus chart series, computed from the full snapshot.
/// Pure: identical inputs produce identical outputs.
pub fn dashboard_stats(transactions: &[Transaction], reference: NaiveDate) -> DashboardStats {
    let monthly: Vec<&Transaction> = transactions
        .iter()
        .filter(|t| t.date.year() == reference.year() && t.date.month() == reference.month())
        .collect();

    let total_income = sum_kind(monthly.iter().copied(), TransactionKind::Income);
    let total_expense = sum_kind(monthly.iter().copied(), TransactionKind::Expense);
    let balance = total_income - total_expense;

    let mut by_category: HashMap<&str, f64> = HashMap::new();
    for t in monthly.iter().copied().filter(|t| t.kind == TransactionKind::Expense) {
        *by_category.entry(t.category.as_str()).or_insert(0.0) += amount_of(t);
    }
    let mut pie_chart_data: Vec<CategorySlice> = by_category
        .into_iter()
        .map(|(category, amount)| CategorySlice {
            category: category.to_string(),
            amount,
            percentage: if total_expense > 0.0 {
                amount / total_expense * 100.0
            } else {
                0.0
            },
        })
        .collect();
    pie_chart_data.sort_by(|a, b| b.amount.partial_cmp(&a.amount).unwrap_or(Ordering::Equal));

    // Six empty buckets ending at the reference month, oldest first, then
    // one pass over the whole transaction set.
    let mut line_chart_data: Vec<TrendPoint> = Vec::with_capacity(TREND_MONTHS);
    for back in (0..TREND_MONTHS as i32).rev() {
        let (year, month) = shift_month(reference.year(), reference.month(), -back);
        line_chart_data.push(TrendPoint {
            label: month_label(month),
            month,
            year,
            income: 0.0,
            expense: 0.0,
        });
    }
    for t in transactions {
        let Some(bucket) = line_chart_data
            .iter_mut()
            .find(|p| p.month == t.date.month() && p.year == t.date.year())
        else {
            continue;
        };
        match t.kind {
            TransactionKind::Income => bucket.income += amount_of(t),
            TransactionKind::Expense => bucket.expense += amount_of(t),
        }
    }

    DashboardStats {
        total_income,
        total_expense,
        balance,
        chart_data: ChartData {
            pie_chart_data,
            line_chart_data,
        },
    }
}

/// Applies the filters as a conjunction over the full snapshot, preserving
/// its order, and sums the filtered set. An unparseable date bound drops
/// only that clause.
pub fn report_data(transactions: &[Transaction], filters: &ReportFilters) -> ReportData {
    let date_start = parse_filter_date(filters.date_start.as_deref(), "start");
    let date_end = parse_filter_date(filters.date_end.as_deref(), "end");

    let filtered: Vec<Transaction> = transactions
        .iter()
        .filter(|t| {
            if let Some(start) = date_start {
                if t.date < start {
                    return false;
                }
            }
            if let Some(end) = date_end {
                if t.date > end {
                    return false;
                }
            }
            match filters.kind {
                KindFilter::All => {}
                KindFilter::Only(kind) => {
                    if t.kind != kind {
                        return false;
                    }
                }
            }
            match &filters.category {
                CategoryFilter::All => {}
                CategoryFilter::Only(category) => {
                    if &t.category != category {
                        return false;
                    }
                }
            }
            true
        })
        .cloned()
        .collect();

    let total_income = sum_kind(&filtered, TransactionKind::Income);
    let total_expense = sum_kind(&filtered, TransactionKind::Expense);
    ReportData {
        summary: ReportSummary {
            total_income,
            total_expense,
            balance: total_income - total_expense,
        },
        transactions: filtered,
    }
}

fn parse_filter_date(raw: Option<&str>, which: &str) -> Option<NaiveDate> {
    let raw = raw?;
    match parse_date(raw) {
        Ok(date) => Some(date),
        Err(e) => {
            warn!("Ignoring {} date filter: {:#}", which, e);
            None
        }
    }
}
