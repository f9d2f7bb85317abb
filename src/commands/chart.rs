// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::chart::{chart_points, has_chart_data};
use crate::money::format_signed;
use crate::persistence::{SnapshotGateway, load_store};
use crate::utils::{maybe_print_json, swatch_cell};
use anyhow::Result;
use comfy_table::{Cell, Table, presets::UTF8_FULL};

pub fn handle(gateway: &dyn SnapshotGateway, m: &clap::ArgMatches) -> Result<()> {
    let json_flag = m.get_flag("json");
    let jsonl_flag = m.get_flag("jsonl");
    let store = load_store(gateway)?;
    let points = chart_points(store.entries());
    if maybe_print_json(json_flag, jsonl_flag, &points)? {
        return Ok(());
    }
    if !has_chart_data(store.entries()) {
        println!("No expenses to chart.");
        return Ok(());
    }

    let mut t = Table::new();
    t.load_preset(UTF8_FULL);
    t.set_header(["Category", "Amount", "%", "Color"].map(Cell::new));
    for p in &points {
        t.add_row(vec![
            swatch_cell(p.label, p.color),
            Cell::new(format_signed(p.value)),
            Cell::new(format!("{:.1}", p.share)),
            swatch_cell(p.color, p.color),
        ]);
    }
    println!("{}", t);
    Ok(())
}
