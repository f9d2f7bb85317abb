// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{EntryField, EntryId, ExpenseEntry, Snapshot};
use crate::money::MoneyValue;
use chrono::Utc;
use tracing::{debug, warn};

pub const MAX_ENTRIES: usize = 100;
pub const MAX_NAME_CHARS: usize = 50;

// Loaded ids above this are renumbered so new ids always have room to grow.
const MAX_LOADED_ID: EntryId = EntryId::MAX / 2;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("Limit of 100 expenses reached.")]
    CapacityReached,
}

/// Salary and the ordered list of expense entries being edited.
///
/// Insertion order is kept; reports number entries 1..N in this order.
#[derive(Debug, Clone)]
pub struct ExpenseStore {
    salary: MoneyValue,
    entries: Vec<ExpenseEntry>,
    last_id: EntryId,
}

impl Default for ExpenseStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ExpenseStore {
    /// First-run state: zero salary and one empty row.
    pub fn new() -> Self {
        let mut store = ExpenseStore {
            salary: MoneyValue::ZERO,
            entries: Vec::new(),
            last_id: 0,
        };
        store.reset();
        store
    }

    /// Adopt an externally loaded snapshot, re-applying the store limits.
    pub fn from_snapshot(snapshot: Snapshot) -> Self {
        let Snapshot {
            salary,
            mut expenses,
        } = snapshot;
        if expenses.len() > MAX_ENTRIES {
            warn!(
                count = expenses.len(),
                "snapshot holds more than {} expenses; keeping the first {}",
                MAX_ENTRIES,
                MAX_ENTRIES
            );
            expenses.truncate(MAX_ENTRIES);
        }
        for entry in &mut expenses {
            entry.name = truncate_name(&entry.name);
        }
        if expenses.iter().any(|e| e.id > MAX_LOADED_ID) {
            warn!("snapshot ids out of range, renumbering expenses from 1");
            for (entry, id) in expenses.iter_mut().zip(1..) {
                entry.id = id;
            }
        }
        let last_id = expenses.iter().map(|e| e.id).max().unwrap_or(0);
        ExpenseStore {
            salary,
            entries: expenses,
            last_id,
        }
    }

    pub fn salary(&self) -> MoneyValue {
        self.salary
    }

    pub fn entries(&self) -> &[ExpenseEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, id: EntryId) -> Option<&ExpenseEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    pub fn contains(&self, id: EntryId) -> bool {
        self.get(id).is_some()
    }

    pub fn set_salary_digits(&mut self, raw: &str) {
        self.salary = MoneyValue::parse_digits(raw);
    }

    pub fn set_salary_decimal(&mut self, raw: &str) {
        self.salary = MoneyValue::parse_decimal(raw);
    }

    /// Append an empty "other" entry. Rejected once the list is full.
    pub fn add(&mut self) -> Result<EntryId, StoreError> {
        if self.entries.len() >= MAX_ENTRIES {
            warn!("expense list is full, add rejected");
            return Err(StoreError::CapacityReached);
        }
        Ok(self.push_blank())
    }

    /// Returns whether an entry was removed; removing twice is harmless.
    pub fn remove(&mut self, id: EntryId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.id != id);
        before != self.entries.len()
    }

    /// Returns false (and changes nothing) when `id` is unknown.
    pub fn update(&mut self, id: EntryId, field: EntryField, value: &str) -> bool {
        let Some(entry) = self.entries.iter_mut().find(|e| e.id == id) else {
            debug!(id, "update for unknown expense ignored");
            return false;
        };
        match field {
            EntryField::Name => entry.name = truncate_name(value),
            EntryField::Amount => entry.amount = MoneyValue::parse_decimal(value),
            EntryField::Category => entry.category = value.to_string(),
        }
        true
    }

    /// Amount typed as a raw digit stream (cents).
    pub fn key_amount(&mut self, id: EntryId, raw: &str) -> bool {
        match self.entries.iter_mut().find(|e| e.id == id) {
            Some(entry) => {
                entry.amount = MoneyValue::parse_digits(raw);
                true
            }
            None => false,
        }
    }

    /// Back to zero salary and a single empty row.
    pub fn reset(&mut self) {
        self.salary = MoneyValue::ZERO;
        self.entries.clear();
        self.push_blank();
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            salary: self.salary,
            expenses: self.entries.clone(),
        }
    }

    fn push_blank(&mut self) -> EntryId {
        let id = self.next_id();
        self.entries.push(ExpenseEntry::blank(id));
        id
    }

    // Creation time in ms, bumped so ids never repeat or go backwards.
    fn next_id(&mut self) -> EntryId {
        let id = Utc::now()
            .timestamp_millis()
            .max(self.last_id.saturating_add(1));
        self.last_id = id;
        id
    }
}

fn truncate_name(name: &str) -> String {
    name.chars().take(MAX_NAME_CHARS).collect()
}
