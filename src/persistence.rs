// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Durable storage for the salary/expense snapshot.

use crate::db;
use crate::models::Snapshot;
use crate::store::ExpenseStore;
use anyhow::{Context, Result};
use rusqlite::{Connection, OptionalExtension, params};
use std::cell::RefCell;
use std::path::Path;
use tracing::{debug, info, warn};

/// Fixed key the snapshot is stored under.
pub const SNAPSHOT_KEY: &str = "expenses_data";

pub trait SnapshotGateway {
    /// `None` means nothing usable is stored (first run).
    fn load(&self) -> Result<Option<Snapshot>>;

    fn save(&self, snapshot: &Snapshot) -> Result<()>;

    fn clear(&self) -> Result<()>;
}

/// Snapshot kept as JSON in a SQLite key-value table.
pub struct SqliteGateway {
    conn: Connection,
}

impl SqliteGateway {
    pub fn new(conn: Connection) -> Result<Self> {
        db::init_schema(&conn)?;
        Ok(SqliteGateway { conn })
    }

    pub fn open(path: &Path) -> Result<Self> {
        Self::new(db::open(path)?)
    }

    pub fn connection(&self) -> &Connection {
        &self.conn
    }
}

impl SnapshotGateway for SqliteGateway {
    fn load(&self) -> Result<Option<Snapshot>> {
        let raw: Option<String> = self
            .conn
            .query_row(
                "SELECT value FROM kv_store WHERE key=?1",
                params![SNAPSHOT_KEY],
                |r| r.get(0),
            )
            .optional()
            .context("Read stored snapshot")?;
        let Some(raw) = raw else {
            debug!("no stored snapshot");
            return Ok(None);
        };
        match serde_json::from_str::<Snapshot>(&raw) {
            Ok(snapshot) => Ok(Some(snapshot)),
            Err(err) => {
                warn!(%err, "stored snapshot is unreadable, starting fresh");
                Ok(None)
            }
        }
    }

    fn save(&self, snapshot: &Snapshot) -> Result<()> {
        let payload = serde_json::to_string(snapshot)?;
        self.conn
            .execute(
                "INSERT INTO kv_store(key, value, updated_at) VALUES (?1, ?2, datetime('now'))
                 ON CONFLICT(key) DO UPDATE SET value=excluded.value, updated_at=excluded.updated_at",
                params![SNAPSHOT_KEY, payload],
            )
            .context("Write snapshot")?;
        debug!(expenses = snapshot.expenses.len(), "snapshot saved");
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        self.conn
            .execute("DELETE FROM kv_store WHERE key=?1", params![SNAPSHOT_KEY])
            .context("Clear snapshot")?;
        Ok(())
    }
}

/// In-process gateway; nothing outlives the value.
#[derive(Debug, Default)]
pub struct MemoryGateway {
    slot: RefCell<Option<Snapshot>>,
}

impl MemoryGateway {
    pub fn with_snapshot(snapshot: Snapshot) -> Self {
        MemoryGateway {
            slot: RefCell::new(Some(snapshot)),
        }
    }
}

impl SnapshotGateway for MemoryGateway {
    fn load(&self) -> Result<Option<Snapshot>> {
        Ok(self.slot.borrow().clone())
    }

    fn save(&self, snapshot: &Snapshot) -> Result<()> {
        *self.slot.borrow_mut() = Some(snapshot.clone());
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        self.slot.borrow_mut().take();
        Ok(())
    }
}

/// Load the stored state. On first run the fresh store is saved right away so
/// the id of its blank row stays valid for the next command.
pub fn load_store(gateway: &dyn SnapshotGateway) -> Result<ExpenseStore> {
    match gateway.load()? {
        Some(snapshot) => Ok(ExpenseStore::from_snapshot(snapshot)),
        None => {
            info!("no saved data, starting with an empty expense list");
            let store = ExpenseStore::new();
            save_store(gateway, &store)?;
            Ok(store)
        }
    }
}

pub fn save_store(gateway: &dyn SnapshotGateway, store: &ExpenseStore) -> Result<()> {
    gateway.save(&store.snapshot())
}
