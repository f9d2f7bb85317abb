// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::money::format_signed;
use crate::persistence::{SnapshotGateway, load_store};
use crate::totals::Totals;
use crate::utils::{maybe_print_json, pretty_table};
use anyhow::Result;

pub fn handle(gateway: &dyn SnapshotGateway, m: &clap::ArgMatches) -> Result<()> {
    let json_flag = m.get_flag("json");
    let jsonl_flag = m.get_flag("jsonl");
    let store = load_store(gateway)?;
    let totals = Totals::compute(&store.snapshot());
    if !maybe_print_json(json_flag, jsonl_flag, &totals)? {
        println!("{}", pretty_table(&["Item", "Amount"], summary_rows(&totals)));
        if totals.balance.is_sign_negative() && !totals.balance.is_zero() {
            eprintln!("Expenses exceed the salary.");
        }
    }
    Ok(())
}

pub fn summary_rows(totals: &Totals) -> Vec<Vec<String>> {
    vec![
        vec!["Salário".into(), format_signed(totals.salary)],
        vec!["Total de Despesas".into(), format_signed(totals.total_expenses)],
        vec!["Saldo Final".into(), format_signed(totals.balance)],
    ]
}
