// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::commands::transactions::table_rows;
use crate::ledger::LedgerStore;
use crate::models::{CategoryFilter, KindFilter, ReportFilters};
use crate::stats;
use crate::store::KeyValueStore;
use crate::utils::{fmt_money, maybe_print_json, pretty_table};
use anyhow::Result;

pub fn handle<S: KeyValueStore>(ledger: &LedgerStore<S>, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");

    let kind = match sub.get_one::<String>("type").map(String::as_str) {
        None | Some("all") => KindFilter::All,
        Some(s) => KindFilter::Only(s.parse()?),
    };
    let category = match sub.get_one::<String>("category").map(String::as_str) {
        None | Some("all") => CategoryFilter::All,
        Some(s) => CategoryFilter::Only(s.to_string()),
    };
    let filters = ReportFilters {
        date_start: sub.get_one::<String>("from").cloned(),
        date_end: sub.get_one::<String>("to").cloned(),
        kind,
        category,
    };

    let report = stats::report_data(&ledger.get_all()?, &filters);
    if maybe_print_json(json_flag, jsonl_flag, &report)? {
        return Ok(());
    }

    println!(
        "{}",
        pretty_table(
            &["Income", "Expense", "Balance"],
            vec![vec![
                fmt_money(report.summary.total_income),
                fmt_money(report.summary.total_expense),
                fmt_money(report.summary.balance),
            ]],
        )
    );
    println!(
        "{}",
        pretty_table(
            &["Id", "Date", "Description", "Category", "Type", "Amount"],
            table_rows(&report.transactions),
        )
    );
    Ok(())
}
