// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command, value_parser};

fn json_flags(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .help("Print the result as pretty JSON"),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .help("Print the result as JSON lines"),
    )
}

pub fn build_cli() -> Command {
    Command::new("financeflow")
        .about("Personal income/expense ledger with dashboard stats and filtered reports")
        .version(env!("CARGO_PKG_VERSION"))
        .subcommand(Command::new("init").about("Initialize the ledger data directory"))
        .subcommand(
            Command::new("tx")
                .about("Manage transactions")
                .subcommand(
                    Command::new("add")
                        .about("Record a new transaction")
                        .arg(
                            Arg::new("description")
                                .long("description")
                                .required(true)
                                .help("What the money was for"),
                        )
                        .arg(Arg::new("amount").long("amount").required(true))
                        .arg(
                            Arg::new("type")
                                .long("type")
                                .required(true)
                                .help("income or expense"),
                        )
                        .arg(Arg::new("category").long("category").required(true))
                        .arg(
                            Arg::new("date")
                                .long("date")
                                .required(true)
                                .help("Calendar day (YYYY-MM-DD)"),
                        ),
                )
                .subcommand(
                    Command::new("edit")
                        .about("Update fields of an existing transaction")
                        .arg(
                            Arg::new("id")
                                .long("id")
                                .required(true)
                                .value_parser(value_parser!(i64)),
                        )
                        .arg(Arg::new("description").long("description"))
                        .arg(Arg::new("amount").long("amount"))
                        .arg(Arg::new("type").long("type"))
                        .arg(Arg::new("category").long("category"))
                        .arg(Arg::new("date").long("date")),
                )
                .subcommand(
                    Command::new("rm").about("Delete a transaction").arg(
                        Arg::new("id")
                            .long("id")
                            .required(true)
                            .value_parser(value_parser!(i64)),
                    ),
                )
                .subcommand(json_flags(
                    Command::new("list")
                        .about("List transactions, most recent first")
                        .arg(
                            Arg::new("limit")
                                .long("limit")
                                .value_parser(value_parser!(usize)),
                        ),
                )),
        )
        .subcommand(json_flags(
            Command::new("dashboard")
                .about("Current-month totals, category breakdown and 6-month trend")
                .arg(
                    Arg::new("date")
                        .long("date")
                        .help("Reference date (YYYY-MM-DD), defaults to today"),
                ),
        ))
        .subcommand(json_flags(
            Command::new("report")
                .about("Filtered view over all transactions with its own summary")
                .arg(Arg::new("from").long("from").help("Start date, inclusive"))
                .arg(Arg::new("to").long("to").help("End date, inclusive"))
                .arg(
                    Arg::new("type")
                        .long("type")
                        .default_value("all")
                        .help("all, income or expense"),
                )
                .arg(
                    Arg::new("category")
                        .long("category")
                        .default_value("all")
                        .help("Exact category name, or all"),
                ),
        ))
        .subcommand(
            Command::new("category")
                .about("Manage the category list")
                .subcommand(Command::new("add").arg(Arg::new("name").required(true)))
                .subcommand(Command::new("rm").arg(Arg::new("name").required(true)))
                .subcommand(Command::new("list")),
        )
        .subcommand(
            Command::new("settings")
                .about("Show or edit settings")
                .subcommand(json_flags(Command::new("show")))
                .subcommand(
                    Command::new("goal")
                        .about("Set the monthly savings goal")
                        .arg(Arg::new("amount").required(true)),
                ),
        )
        .subcommand(
            Command::new("export").about("Export the ledger").subcommand(
                Command::new("transactions")
                    .arg(
                        Arg::new("format")
                            .long("format")
                            .default_value("csv")
                            .help("csv or json"),
                    )
                    .arg(Arg::new("out").long("out").required(true)),
            ),
        )
}
