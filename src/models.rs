// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::bail;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Income or expense. The sign of a transaction is carried here, never in
/// the amount field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Expense,
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransactionKind::Income => write!(f, "income"),
            TransactionKind::Expense => write!(f, "expense"),
        }
    }
}

impl FromStr for TransactionKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "income" => Ok(TransactionKind::Income),
            "expense" => Ok(TransactionKind::Expense),
            bad => bail!("Invalid type '{}', expected income|expense", bad),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: i64,
    pub description: String,
    /// Non-negative magnitude; anything unreadable in the stored value
    /// decodes to 0 instead of poisoning the whole collection.
    #[serde(deserialize_with = "lossy_amount")]
    pub amount: f64,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub category: String,
    /// Calendar day the transaction happened on. No time of day, no timezone.
    pub date: NaiveDate,
    pub created_at: DateTime<Utc>,
}

fn lossy_amount<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::Number(n) => n.as_f64().unwrap_or(0.0),
        serde_json::Value::String(s) => s.trim().parse().unwrap_or(0.0),
        _ => 0.0,
    })
}

/// Payload for `LedgerStore::save`. A present `id` selects the update path;
/// every other field overrides the stored record only when present.
#[derive(Debug, Clone, Default)]
pub struct TransactionInput {
    pub id: Option<i64>,
    pub description: Option<String>,
    /// Raw amount text; parsed leniently, unparseable values become 0.
    pub amount: Option<String>,
    pub kind: Option<TransactionKind>,
    pub category: Option<String>,
    pub date: Option<NaiveDate>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    pub monthly_goal: f64,
    pub categories: Vec<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            monthly_goal: 500.0,
            categories: [
                "Food",
                "Transport",
                "Housing",
                "Leisure",
                "Health",
                "Education",
                "Work",
                "Other",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
        }
    }
}

/// Type clause of a report filter. Replaces the original's "all" sentinel
/// string.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum KindFilter {
    #[default]
    All,
    Only(TransactionKind),
}

/// Category clause of a report filter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(String),
}

/// Report filters. Date bounds stay raw calendar-date strings so the engine
/// can drop an unparseable clause instead of failing the report.
#[derive(Debug, Clone, Default)]
pub struct ReportFilters {
    pub date_start: Option<String>,
    pub date_end: Option<String>,
    pub kind: KindFilter,
    pub category: CategoryFilter,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategorySlice {
    pub category: String,
    pub amount: f64,
    pub percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendPoint {
    pub label: String,
    pub month: u32,
    pub year: i32,
    pub income: f64,
    pub expense: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartData {
    pub pie_chart_data: Vec<CategorySlice>,
    pub line_chart_data: Vec<TrendPoint>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_income: f64,
    pub total_expense: f64,
    pub balance: f64,
    pub chart_data: ChartData,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportSummary {
    pub total_income: f64,
    pub total_expense: f64,
    pub balance: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportData {
    pub summary: ReportSummary,
    pub transactions: Vec<Transaction>,
}
