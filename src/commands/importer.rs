// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::Snapshot;
use crate::persistence::{SnapshotGateway, save_store};
use crate::store::ExpenseStore;
use anyhow::{Context, Result};
use std::path::Path;

pub fn handle(gateway: &dyn SnapshotGateway, m: &clap::ArgMatches) -> Result<()> {
    let path = m.get_one::<String>("path").unwrap().trim();
    let store = import_snapshot(gateway, Path::new(path))?;
    println!(
        "Imported {} expenses and salary {} from {}",
        store.len(),
        store.salary(),
        path
    );
    Ok(())
}

/// Replace the stored state with the snapshot in `path`; the store limits
/// (entry cap, name length) are applied on the way in.
pub fn import_snapshot(gateway: &dyn SnapshotGateway, path: &Path) -> Result<ExpenseStore> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Open snapshot {}", path.display()))?;
    let snapshot: Snapshot = serde_json::from_str(&raw)
        .with_context(|| format!("Invalid snapshot JSON in {}", path.display()))?;
    let store = ExpenseStore::from_snapshot(snapshot);
    save_store(gateway, &store)?;
    Ok(store)
}
