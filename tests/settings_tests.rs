// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{TimeZone, Utc};
use financeflow::ledger::LedgerStore;
use financeflow::models::{Settings, TransactionInput, TransactionKind};
use financeflow::store::{KeyValueStore, MemoryStore};
use financeflow::{cli, commands};

fn setup() -> LedgerStore<MemoryStore> {
    LedgerStore::open(MemoryStore::default()).unwrap()
}

fn run_category(ledger: &mut LedgerStore<MemoryStore>, args: &[&str]) -> anyhow::Result<()> {
    let mut argv = vec!["financeflow", "category"];
    argv.extend_from_slice(args);
    let matches = cli::build_cli().get_matches_from(argv);
    if let Some(("category", m)) = matches.subcommand() {
        commands::categories::handle(ledger, m)
    } else {
        panic!("no category subcommand");
    }
}

fn run_settings(ledger: &mut LedgerStore<MemoryStore>, args: &[&str]) -> anyhow::Result<()> {
    let mut argv = vec!["financeflow", "settings"];
    argv.extend_from_slice(args);
    let matches = cli::build_cli().get_matches_from(argv);
    if let Some(("settings", m)) = matches.subcommand() {
        commands::settings::handle(ledger, m)
    } else {
        panic!("no settings subcommand");
    }
}

#[test]
fn first_access_serves_the_default_settings() {
    let ledger = setup();
    let settings = ledger.get_settings().unwrap();
    assert_eq!(settings.monthly_goal, 500.0);
    assert_eq!(settings.categories.len(), 8);
    assert_eq!(settings.categories.first().unwrap(), "Food");
    assert_eq!(settings.categories.last().unwrap(), "Other");
}

#[test]
fn save_settings_overwrites_wholesale() {
    let mut ledger = setup();
    let mut settings = ledger.get_settings().unwrap();
    settings.monthly_goal = 750.0;
    settings.categories.push("Pets".to_string());
    ledger.save_settings(&settings).unwrap();
    assert_eq!(ledger.get_settings().unwrap(), settings);
}

#[test]
fn partial_settings_object_fills_missing_fields_from_defaults() {
    let mut store = MemoryStore::default();
    store
        .set("settings", serde_json::json!({"monthlyGoal": 750.0}))
        .unwrap();
    let ledger = LedgerStore::open(store).unwrap();

    let settings = ledger.get_settings().unwrap();
    assert_eq!(settings.monthly_goal, 750.0);
    assert_eq!(settings.categories, Settings::default().categories);
}

#[test]
fn goal_command_parses_leniently() {
    let mut ledger = setup();
    run_settings(&mut ledger, &["goal", "1234.5"]).unwrap();
    assert_eq!(ledger.get_settings().unwrap().monthly_goal, 1234.5);

    // the original coerced unparseable goals to zero
    run_settings(&mut ledger, &["goal", "plenty"]).unwrap();
    assert_eq!(ledger.get_settings().unwrap().monthly_goal, 0.0);
}

#[test]
fn category_add_trims_and_rejects_duplicates() {
    let mut ledger = setup();
    run_category(&mut ledger, &["add", "  Pets  "]).unwrap();
    assert!(
        ledger
            .get_settings()
            .unwrap()
            .categories
            .contains(&"Pets".to_string())
    );

    let before = ledger.get_settings().unwrap();
    assert!(run_category(&mut ledger, &["add", "Pets"]).is_err());
    assert_eq!(ledger.get_settings().unwrap(), before);
}

#[test]
fn category_rm_orphans_referencing_transactions() {
    let mut ledger = setup();
    ledger
        .save(
            TransactionInput {
                id: None,
                description: Some("Lunch".to_string()),
                amount: Some("12".to_string()),
                kind: Some(TransactionKind::Expense),
                category: Some("Food".to_string()),
                date: Some("2024-05-01".parse().unwrap()),
            },
            Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap(),
        )
        .unwrap();

    run_category(&mut ledger, &["rm", "Food"]).unwrap();
    assert!(
        !ledger
            .get_settings()
            .unwrap()
            .categories
            .contains(&"Food".to_string())
    );
    // the transaction keeps its now-orphaned category
    let tx = ledger.get_by_id(1).unwrap().unwrap();
    assert_eq!(tx.category, "Food");
}

#[test]
fn category_rm_of_unknown_name_changes_nothing() {
    let mut ledger = setup();
    let before = ledger.get_settings().unwrap();
    run_category(&mut ledger, &["rm", "Yachts"]).unwrap();
    assert_eq!(ledger.get_settings().unwrap(), before);
}
