// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result, bail};
use chrono::NaiveDate;
use comfy_table::{Cell, Table, presets::UTF8_FULL};

pub fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .with_context(|| format!("Invalid date '{}', expected YYYY-MM-DD", s))
}

/// Lenient amount parse used by the ledger: unparseable input becomes 0.
pub fn parse_amount_lossy(s: &str) -> f64 {
    s.trim().parse().unwrap_or(0.0)
}

/// Strict amount parse used at the CLI boundary.
pub fn parse_positive_amount(s: &str) -> Result<f64> {
    let amount: f64 = s
        .trim()
        .parse()
        .with_context(|| format!("Invalid amount '{}'", s))?;
    if amount <= 0.0 {
        bail!("Amount must be greater than zero");
    }
    Ok(amount)
}

pub fn ensure_description(s: &str) -> Result<()> {
    if s.trim().chars().count() < 3 {
        bail!("Description must be at least 3 characters");
    }
    Ok(())
}

pub fn ensure_past_or_today(date: NaiveDate, today: NaiveDate) -> Result<()> {
    if date > today {
        bail!("Date {} is in the future", date);
    }
    Ok(())
}

/// Shifts a (year, month) pair by `delta` calendar months.
pub fn shift_month(year: i32, month: u32, delta: i32) -> (i32, u32) {
    let total = year * 12 + month as i32 - 1 + delta;
    (total.div_euclid(12), (total.rem_euclid(12) + 1) as u32)
}

/// Short capitalized month label ("Jan" .. "Dec").
pub fn month_label(month: u32) -> String {
    NaiveDate::from_ymd_opt(2000, month, 1)
        .map(|d| d.format("%b").to_string())
        .unwrap_or_default()
}

pub fn fmt_money(amount: f64) -> String {
    format!("{:.2}", amount)
}

pub fn pretty_table(headers: &[&str], rows: Vec<Vec<String>>) -> Table {
    let mut t = Table::new();
    t.load_preset(UTF8_FULL);
    t.set_header(headers.iter().map(|h| Cell::new(*h)));
    for r in rows {
        t.add_row(r.into_iter().map(Cell::new));
    }
    t
}

pub fn maybe_print_json<T: serde::Serialize>(
    json_flag: bool,
    jsonl_flag: bool,
    v: &T,
) -> Result<bool> {
    if json_flag {
        println!("{}", serde_json::to_string_pretty(v)?);
        return Ok(true);
    }
    if jsonl_flag {
        // If v is an array, stream each element; else stream single line
        let val = serde_json::to_value(v)?;
        if let Some(arr) = val.as_array() {
            for item in arr {
                println!("{}", serde_json::to_string(item)?);
            }
        } else {
            println!("{}", serde_json::to_string(&val)?);
        }
        return Ok(true);
    }
    Ok(false)
}
