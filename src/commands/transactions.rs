// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::ledger::LedgerStore;
use crate::models::{Transaction, TransactionInput, TransactionKind};
use crate::store::KeyValueStore;
use crate::utils::{
    ensure_description, ensure_past_or_today, fmt_money, maybe_print_json, parse_date,
    parse_positive_amount, pretty_table,
};
use anyhow::Result;
use chrono::{Local, Utc};

pub fn handle<S: KeyValueStore>(ledger: &mut LedgerStore<S>, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(ledger, sub)?,
        Some(("edit", sub)) => edit(ledger, sub)?,
        Some(("rm", sub)) => rm(ledger, sub)?,
        Some(("list", sub)) => list(ledger, sub)?,
        _ => {}
    }
    Ok(())
}

fn add<S: KeyValueStore>(ledger: &mut LedgerStore<S>, sub: &clap::ArgMatches) -> Result<()> {
    let description = sub.get_one::<String>("description").unwrap();
    ensure_description(description)?;
    let raw_amount = sub.get_one::<String>("amount").unwrap();
    let amount = parse_positive_amount(raw_amount)?;
    let kind: TransactionKind = sub.get_one::<String>("type").unwrap().parse()?;
    let category = sub.get_one::<String>("category").unwrap();
    let date = parse_date(sub.get_one::<String>("date").unwrap())?;

    let now = Utc::now();
    ensure_past_or_today(date, Local::now().date_naive())?;

    let id = ledger.save(
        TransactionInput {
            id: None,
            description: Some(description.trim().to_string()),
            amount: Some(raw_amount.clone()),
            kind: Some(kind),
            category: Some(category.clone()),
            date: Some(date),
        },
        now,
    )?;
    if let Some(id) = id {
        println!(
            "Recorded #{} {} {} '{}' on {}",
            id,
            kind,
            fmt_money(amount),
            description.trim(),
            date
        );
    }
    Ok(())
}

fn edit<S: KeyValueStore>(ledger: &mut LedgerStore<S>, sub: &clap::ArgMatches) -> Result<()> {
    let id = *sub.get_one::<i64>("id").unwrap();
    let now = Utc::now();

    let description = sub.get_one::<String>("description").cloned();
    if let Some(ref d) = description {
        ensure_description(d)?;
    }
    let amount = sub.get_one::<String>("amount").cloned();
    if let Some(ref a) = amount {
        parse_positive_amount(a)?;
    }
    let kind = match sub.get_one::<String>("type") {
        Some(s) => Some(s.parse::<TransactionKind>()?),
        None => None,
    };
    let date = match sub.get_one::<String>("date") {
        Some(s) => {
            let date = parse_date(s)?;
            ensure_past_or_today(date, Local::now().date_naive())?;
            Some(date)
        }
        None => None,
    };

    let input = TransactionInput {
        id: Some(id),
        description: description.map(|d| d.trim().to_string()),
        amount,
        kind,
        category: sub.get_one::<String>("category").cloned(),
        date,
    };
    match ledger.save(input, now)? {
        Some(id) => println!("Updated transaction #{}", id),
        None => println!("No transaction with id {}", id),
    }
    Ok(())
}

fn rm<S: KeyValueStore>(ledger: &mut LedgerStore<S>, sub: &clap::ArgMatches) -> Result<()> {
    let id = *sub.get_one::<i64>("id").unwrap();
    ledger.delete(id)?;
    println!("Removed transaction #{}", id);
    Ok(())
}

fn list<S: KeyValueStore>(ledger: &LedgerStore<S>, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let mut transactions = ledger.get_all()?;
    if let Some(limit) = sub.get_one::<usize>("limit") {
        transactions.truncate(*limit);
    }
    if !maybe_print_json(json_flag, jsonl_flag, &transactions)? {
        println!(
            "{}",
            pretty_table(
                &["Id", "Date", "Description", "Category", "Type", "Amount"],
                table_rows(&transactions),
            )
        );
    }
    Ok(())
}

/// Display rows shared by `tx list` and the report command.
pub fn table_rows(transactions: &[Transaction]) -> Vec<Vec<String>> {
    transactions
        .iter()
        .map(|t| {
            let sign = match t.kind {
                TransactionKind::Income => '+',
                TransactionKind::Expense => '-',
            };
            vec![
                t.id.to_string(),
                t.date.to_string(),
                t.description.clone(),
                t.category.clone(),
                t.kind.to_string(),
                format!("{}{}", sign, fmt_money(t.amount)),
            ]
        })
        .collect()
}
