// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::db::DB_ENV;
use clap::{Arg, ArgAction, Command, value_parser};
use std::path::PathBuf;

fn json_flags(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .help("Print as pretty JSON"),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .conflicts_with("json")
            .help("Print as JSON lines"),
    )
}

fn entry_fields(cmd: Command) -> Command {
    cmd.arg(Arg::new("name").long("name").help("Expense name (cut to 50 characters)"))
        .arg(
            Arg::new("amount")
                .long("amount")
                .help("Amount as written, comma for decimals (e.g. 1.500,00)"),
        )
        .arg(
            Arg::new("cents")
                .long("cents")
                .conflicts_with("amount")
                .help("Amount as a raw digit stream of cents (e.g. 150000)"),
        )
        .arg(
            Arg::new("category")
                .long("category")
                .help("Category id: housing, transport, food, leisure, other"),
        )
}

fn id_arg() -> Arg {
    Arg::new("id")
        .long("id")
        .required(true)
        .value_parser(value_parser!(i64))
        .help("Expense id (see `expense list`)")
}

pub fn build_cli() -> Command {
    Command::new("expensecalc")
        .version(clap::crate_version!())
        .about("Salary and expense calculator with category breakdown and PDF/DOC reports")
        .arg(
            Arg::new("db")
                .long("db")
                .global(true)
                .env(DB_ENV)
                .value_parser(value_parser!(PathBuf))
                .help("Path of the data file (defaults to the platform data dir)"),
        )
        .subcommand(Command::new("init").about("Create the data file and print its location"))
        .subcommand(
            Command::new("salary")
                .about("Salary")
                .subcommand(
                    Command::new("set")
                        .arg(Arg::new("value").required(true))
                        .arg(
                            Arg::new("cents")
                                .long("cents")
                                .action(ArgAction::SetTrue)
                                .help("Read VALUE as a raw digit stream of cents"),
                        ),
                )
                .subcommand(Command::new("show")),
        )
        .subcommand(
            Command::new("expense")
                .about("Expense entries")
                .subcommand(entry_fields(Command::new("add").about("Append an expense")))
                .subcommand(entry_fields(
                    Command::new("set").about("Edit an expense").arg(id_arg()),
                ))
                .subcommand(Command::new("rm").about("Remove an expense").arg(id_arg()))
                .subcommand(json_flags(Command::new("list").about("List expenses"))),
        )
        .subcommand(json_flags(
            Command::new("summary").about("Salary, total expenses and final balance"),
        ))
        .subcommand(json_flags(
            Command::new("chart").about("Spending per category, ready for a pie chart"),
        ))
        .subcommand(Command::new("categories").about("List the expense categories"))
        .subcommand(
            Command::new("export")
                .about("Export a report or the raw data")
                .arg(
                    Arg::new("format")
                        .required(true)
                        .value_parser(["pdf", "doc", "json", "csv"]),
                )
                .arg(Arg::new("out").long("out").help("Output file")),
        )
        .subcommand(
            Command::new("import")
                .about("Replace the current data with a JSON snapshot")
                .arg(Arg::new("path").long("path").required(true)),
        )
        .subcommand(Command::new("reset").about("Clear all stored data"))
}
