// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::ledger::LedgerStore;
use crate::stats;
use crate::store::KeyValueStore;
use crate::utils::{fmt_money, maybe_print_json, parse_date, pretty_table};
use anyhow::Result;
use chrono::Local;

pub fn handle<S: KeyValueStore>(ledger: &LedgerStore<S>, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let reference = match sub.get_one::<String>("date") {
        Some(s) => parse_date(s)?,
        None => Local::now().date_naive(),
    };

    let stats = stats::dashboard_stats(&ledger.get_all()?, reference);
    if maybe_print_json(json_flag, jsonl_flag, &stats)? {
        return Ok(());
    }

    println!("Month of {}", reference.format("%Y-%m"));
    println!(
        "{}",
        pretty_table(
            &["Income", "Expense", "Balance"],
            vec![vec![
                fmt_money(stats.total_income),
                fmt_money(stats.total_expense),
                fmt_money(stats.balance),
            ]],
        )
    );

    if stats.chart_data.pie_chart_data.is_empty() {
        println!("No expenses this month.");
    } else {
        let rows = stats
            .chart_data
            .pie_chart_data
            .iter()
            .map(|s| {
                vec![
                    s.category.clone(),
                    fmt_money(s.amount),
                    format!("{:.1}%", s.percentage),
                ]
            })
            .collect();
        println!("{}", pretty_table(&["Category", "Spent", "Share"], rows));
    }

    let rows = stats
        .chart_data
        .line_chart_data
        .iter()
        .map(|p| {
            vec![
                format!("{} {}", p.label, p.year),
                fmt_money(p.income),
                fmt_money(p.expense),
            ]
        })
        .collect();
    println!("{}", pretty_table(&["Month", "Income", "Expense"], rows));
    Ok(())
}
