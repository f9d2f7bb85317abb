// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{Category, EntryField, EntryId};
use crate::persistence::{SnapshotGateway, load_store, save_store};
use crate::store::ExpenseStore;
use crate::utils::{maybe_print_json, pretty_table};
use anyhow::Result;
use serde::Serialize;

pub fn handle(gateway: &dyn SnapshotGateway, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(gateway, sub)?,
        Some(("set", sub)) => set(gateway, sub)?,
        Some(("rm", sub)) => rm(gateway, sub)?,
        Some(("list", sub)) => list(gateway, sub)?,
        _ => {}
    }
    Ok(())
}

fn add(gateway: &dyn SnapshotGateway, sub: &clap::ArgMatches) -> Result<()> {
    let mut store = load_store(gateway)?;
    let id = match store.add() {
        Ok(id) => id,
        Err(err) => {
            // Full list: tell the user once, leave the data alone.
            eprintln!("{}", err);
            return Ok(());
        }
    };
    apply_fields(&mut store, id, sub);
    save_store(gateway, &store)?;
    println!("Added expense #{} (id {})", store.len(), id);
    Ok(())
}

fn set(gateway: &dyn SnapshotGateway, sub: &clap::ArgMatches) -> Result<()> {
    let id = *sub.get_one::<i64>("id").unwrap();
    let mut store = load_store(gateway)?;
    if !store.contains(id) {
        println!("No expense with id {}", id);
        return Ok(());
    }
    apply_fields(&mut store, id, sub);
    save_store(gateway, &store)?;
    println!("Updated expense {}", id);
    Ok(())
}

fn rm(gateway: &dyn SnapshotGateway, sub: &clap::ArgMatches) -> Result<()> {
    let id = *sub.get_one::<i64>("id").unwrap();
    let mut store = load_store(gateway)?;
    if store.remove(id) {
        save_store(gateway, &store)?;
        println!("Removed expense {}", id);
    } else {
        println!("No expense with id {}", id);
    }
    Ok(())
}

fn apply_fields(store: &mut ExpenseStore, id: EntryId, sub: &clap::ArgMatches) {
    if let Some(name) = sub.get_one::<String>("name") {
        store.update(id, EntryField::Name, name);
    }
    if let Some(amount) = sub.get_one::<String>("amount") {
        store.update(id, EntryField::Amount, amount);
    }
    if let Some(cents) = sub.get_one::<String>("cents") {
        store.key_amount(id, cents);
    }
    if let Some(category) = sub.get_one::<String>("category") {
        let category = category.trim();
        if Category::from_id(category).is_none() {
            eprintln!("Unknown category '{}', stored as given", category);
        }
        store.update(id, EntryField::Category, category);
    }
}

fn list(gateway: &dyn SnapshotGateway, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let store = load_store(gateway)?;
    let data = list_rows(&store);
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let rows: Vec<Vec<String>> = data
            .iter()
            .map(|r| {
                vec![
                    r.number.to_string(),
                    r.id.to_string(),
                    r.name.clone(),
                    r.category.clone(),
                    r.amount.clone(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["#", "ID", "Name", "Category", "Amount"], rows)
        );
    }
    Ok(())
}

#[derive(Debug, Serialize)]
pub struct ExpenseRow {
    pub number: usize,
    pub id: EntryId,
    pub name: String,
    pub category: String,
    pub amount: String,
}

pub fn list_rows(store: &ExpenseStore) -> Vec<ExpenseRow> {
    store
        .entries()
        .iter()
        .enumerate()
        .map(|(i, e)| ExpenseRow {
            number: i + 1,
            id: e.id,
            name: e.name.clone(),
            category: e.category_label().to_string(),
            amount: e.amount.format(),
        })
        .collect()
}
