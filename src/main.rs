// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use std::path::PathBuf;

use expensecalc::{cli, commands, db, logging, persistence::SqliteGateway};

fn main() -> Result<()> {
    logging::init();
    let cli = cli::build_cli();
    let matches = cli.get_matches();

    let path = db::resolve_db_path(matches.get_one::<PathBuf>("db").map(PathBuf::as_path))?;
    let gateway = SqliteGateway::open(&path)?;

    match matches.subcommand() {
        Some(("init", _)) => {
            println!("Data file initialized at {}", path.display());
        }
        Some(("salary", sub)) => commands::salary::handle(&gateway, sub)?,
        Some(("expense", sub)) => commands::expenses::handle(&gateway, sub)?,
        Some(("summary", sub)) => commands::summary::handle(&gateway, sub)?,
        Some(("chart", sub)) => commands::chart::handle(&gateway, sub)?,
        Some(("categories", _)) => commands::categories::handle()?,
        Some(("export", sub)) => commands::exporter::handle(&gateway, sub)?,
        Some(("import", sub)) => commands::importer::handle(&gateway, sub)?,
        Some(("reset", _)) => commands::reset::handle(&gateway)?,
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
