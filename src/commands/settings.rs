// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::ledger::LedgerStore;
use crate::store::KeyValueStore;
use crate::utils::{fmt_money, maybe_print_json, parse_amount_lossy, pretty_table};
use anyhow::Result;

pub fn handle<S: KeyValueStore>(ledger: &mut LedgerStore<S>, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("show", sub)) => {
            let json_flag = sub.get_flag("json");
            let jsonl_flag = sub.get_flag("jsonl");
            let settings = ledger.get_settings()?;
            if !maybe_print_json(json_flag, jsonl_flag, &settings)? {
                println!("Monthly goal: {}", fmt_money(settings.monthly_goal));
                let rows = settings.categories.iter().map(|c| vec![c.clone()]).collect();
                println!("{}", pretty_table(&["Category"], rows));
            }
        }
        Some(("goal", sub)) => {
            let raw = sub.get_one::<String>("amount").unwrap();
            let mut settings = ledger.get_settings()?;
            settings.monthly_goal = parse_amount_lossy(raw);
            ledger.save_settings(&settings)?;
            println!("Monthly goal set to {}", fmt_money(settings.monthly_goal));
        }
        _ => {}
    }
    Ok(())
}
