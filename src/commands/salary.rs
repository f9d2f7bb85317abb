// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::persistence::{SnapshotGateway, load_store, save_store};
use anyhow::Result;

pub fn handle(gateway: &dyn SnapshotGateway, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("set", sub)) => set(gateway, sub)?,
        Some(("show", _)) => {
            let store = load_store(gateway)?;
            println!("Salário: {}", store.salary());
        }
        _ => {}
    }
    Ok(())
}

fn set(gateway: &dyn SnapshotGateway, sub: &clap::ArgMatches) -> Result<()> {
    let value = sub.get_one::<String>("value").unwrap();
    let mut store = load_store(gateway)?;
    if sub.get_flag("cents") {
        store.set_salary_digits(value);
    } else {
        store.set_salary_decimal(value);
    }
    save_store(gateway, &store)?;
    println!("Salary set to {}", store.salary());
    Ok(())
}
