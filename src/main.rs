// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use financeflow::ledger::LedgerStore;
use financeflow::{cli, commands, store};

fn main() -> Result<()> {
    init_logger();

    let cli = cli::build_cli();
    let matches = cli.get_matches();

    let mut ledger = LedgerStore::open(store::JsonFileStore::open_default()?)?;

    match matches.subcommand() {
        Some(("init", _)) => {
            println!("Ledger initialized at {}", store::data_dir()?.display());
        }
        Some(("tx", sub)) => commands::transactions::handle(&mut ledger, sub)?,
        Some(("dashboard", sub)) => commands::dashboard::handle(&ledger, sub)?,
        Some(("report", sub)) => commands::reports::handle(&ledger, sub)?,
        Some(("category", sub)) => commands::categories::handle(&mut ledger, sub)?,
        Some(("settings", sub)) => commands::settings::handle(&mut ledger, sub)?,
        Some(("export", sub)) => commands::exporter::handle(&ledger, sub)?,
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}

fn init_logger() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("{}=warn", env!("CARGO_CRATE_NAME"))));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
