// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{Settings, Transaction, TransactionInput, TransactionKind};
use crate::store::{KeyValueStore, SETTINGS_KEY, TRANSACTIONS_KEY};
use crate::utils::parse_amount_lossy;
use anyhow::Result;
use chrono::{DateTime, Utc};
use tracing::warn;

/// Owns the two persisted aggregates: the transaction collection and the
/// settings object. Every mutation rewrites the whole aggregate; there is a
/// single writer by assumption.
pub struct LedgerStore<S> {
    store: S,
}

impl<S: KeyValueStore> LedgerStore<S> {
    /// Opens the ledger over an injected store, bootstrapping either
    /// aggregate with defaults when it is missing or undecodable.
    pub fn open(store: S) -> Result<Self> {
        let mut ledger = Self { store };
        match ledger.store.get(TRANSACTIONS_KEY)? {
            Some(value) => {
                if serde_json::from_value::<Vec<Transaction>>(value).is_err() {
                    warn!("Stored transactions are undecodable, resetting to an empty ledger");
                    ledger.write_transactions(&[])?;
                }
            }
            None => ledger.write_transactions(&[])?,
        }
        match ledger.store.get(SETTINGS_KEY)? {
            Some(value) => {
                if serde_json::from_value::<Settings>(value).is_err() {
                    warn!("Stored settings are undecodable, resetting to defaults");
                    ledger.save_settings(&Settings::default())?;
                }
            }
            None => ledger.save_settings(&Settings::default())?,
        }
        Ok(ledger)
    }

    /// All transactions, most recent date first. Ordering among equal dates
    /// is stable but otherwise unspecified.
    pub fn get_all(&self) -> Result<Vec<Transaction>> {
        let mut transactions = self.read_transactions()?;
        transactions.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(transactions)
    }

    pub fn get_by_id(&self, id: i64) -> Result<Option<Transaction>> {
        Ok(self.read_transactions()?.into_iter().find(|t| t.id == id))
    }

    /// Creates or updates a transaction. With `input.id` set, the matching
    /// record is updated field by field; an id with no matching record
    /// leaves the collection untouched and returns `None`. Without an id, a
    /// new record is appended under the next id (`max + 1`) and stamped
    /// with `created_at`.
    pub fn save(
        &mut self,
        input: TransactionInput,
        created_at: DateTime<Utc>,
    ) -> Result<Option<i64>> {
        let mut transactions = self.read_transactions()?;
        match input.id {
            Some(id) => {
                let Some(existing) = transactions.iter_mut().find(|t| t.id == id) else {
                    return Ok(None);
                };
                apply_update(existing, input);
                self.write_transactions(&transactions)?;
                Ok(Some(id))
            }
            None => {
                let id = transactions.iter().map(|t| t.id).max().unwrap_or(0) + 1;
                transactions.push(Transaction {
                    id,
                    description: input.description.unwrap_or_default(),
                    amount: parse_amount_lossy(input.amount.as_deref().unwrap_or_default()),
                    kind: input.kind.unwrap_or(TransactionKind::Expense),
                    category: input.category.unwrap_or_default(),
                    date: input.date.unwrap_or_else(|| created_at.date_naive()),
                    created_at,
                });
                self.write_transactions(&transactions)?;
                Ok(Some(id))
            }
        }
    }

    /// Removes the matching record. A nonexistent id is a no-op.
    pub fn delete(&mut self, id: i64) -> Result<()> {
        let mut transactions = self.read_transactions()?;
        let before = transactions.len();
        transactions.retain(|t| t.id != id);
        if transactions.len() != before {
            self.write_transactions(&transactions)?;
        }
        Ok(())
    }

    /// Current settings; missing or undecodable settings read as defaults.
    pub fn get_settings(&self) -> Result<Settings> {
        let Some(value) = self.store.get(SETTINGS_KEY)? else {
            return Ok(Settings::default());
        };
        match serde_json::from_value(value) {
            Ok(settings) => Ok(settings),
            Err(e) => {
                warn!("Stored settings are undecodable, serving defaults: {}", e);
                Ok(Settings::default())
            }
        }
    }

    /// Overwrites the persisted settings object wholesale.
    pub fn save_settings(&mut self, settings: &Settings) -> Result<()> {
        self.store.set(SETTINGS_KEY, serde_json::to_value(settings)?)
    }

    fn read_transactions(&self) -> Result<Vec<Transaction>> {
        let Some(value) = self.store.get(TRANSACTIONS_KEY)? else {
            return Ok(Vec::new());
        };
        match serde_json::from_value(value) {
            Ok(transactions) => Ok(transactions),
            Err(e) => {
                warn!("Stored transactions are undecodable, reading as empty: {}", e);
                Ok(Vec::new())
            }
        }
    }

    fn write_transactions(&mut self, transactions: &[Transaction]) -> Result<()> {
        self.store
            .set(TRANSACTIONS_KEY, serde_json::to_value(transactions)?)
    }
}

// `id` and `created_at` are never taken from the input.
fn apply_update(existing: &mut Transaction, input: TransactionInput) {
    if let Some(description) = input.description {
        existing.description = description;
    }
    if let Some(amount) = input.amount {
        existing.amount = parse_amount_lossy(&amount);
    }
    if let Some(kind) = input.kind {
        existing.kind = kind;
    }
    if let Some(category) = input.category {
        existing.category = category;
    }
    if let Some(date) = input.date {
        existing.date = date;
    }
}
