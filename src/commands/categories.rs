// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::ledger::LedgerStore;
use crate::store::KeyValueStore;
use crate::utils::pretty_table;
use anyhow::{Result, bail};
use tracing::warn;

pub fn handle<S: KeyValueStore>(ledger: &mut LedgerStore<S>, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => {
            let name = sub.get_one::<String>("name").unwrap().trim().to_string();
            if name.is_empty() {
                bail!("Category name must not be empty");
            }
            let mut settings = ledger.get_settings()?;
            if settings.categories.iter().any(|c| *c == name) {
                bail!("Category '{}' already exists", name);
            }
            settings.categories.push(name.clone());
            ledger.save_settings(&settings)?;
            println!("Added category '{}'", name);
        }
        Some(("rm", sub)) => {
            let name = sub.get_one::<String>("name").unwrap();
            let mut settings = ledger.get_settings()?;
            let before = settings.categories.len();
            settings.categories.retain(|c| c != name);
            if settings.categories.len() == before {
                println!("No category named '{}'", name);
                return Ok(());
            }
            // Transactions keep whatever category they were recorded with.
            let in_use = ledger
                .get_all()?
                .iter()
                .filter(|t| t.category == *name)
                .count();
            if in_use > 0 {
                warn!(
                    "{} transaction(s) still reference removed category '{}'",
                    in_use, name
                );
            }
            ledger.save_settings(&settings)?;
            println!("Removed category '{}'", name);
        }
        Some(("list", _)) => {
            let settings = ledger.get_settings()?;
            let rows = settings.categories.iter().map(|c| vec![c.clone()]).collect();
            println!("{}", pretty_table(&["Category"], rows));
        }
        _ => {}
    }
    Ok(())
}
