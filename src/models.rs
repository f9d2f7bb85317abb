// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::money::MoneyValue;
use serde::{Deserialize, Serialize};

pub type EntryId = i64;

/// Label used in reports for entries whose category id is not recognised.
pub const UNKNOWN_CATEGORY_LABEL: &str = "Sem categoria";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Housing,
    Transport,
    Food,
    Leisure,
    Other,
}

pub struct CategoryInfo {
    pub id: &'static str,
    pub legacy_id: &'static str,
    pub name: &'static str,
    pub color: &'static str,
}

// Indexed by `Category as usize`; order is the display order.
static CATEGORY_TABLE: [CategoryInfo; 5] = [
    CategoryInfo { id: "housing", legacy_id: "moradia", name: "Moradia", color: "#FF6B6B" },
    CategoryInfo { id: "transport", legacy_id: "transporte", name: "Transporte", color: "#4ECDC4" },
    CategoryInfo { id: "food", legacy_id: "alimentacao", name: "Alimentação", color: "#45B7D1" },
    CategoryInfo { id: "leisure", legacy_id: "lazer", name: "Lazer", color: "#96CEB4" },
    CategoryInfo { id: "other", legacy_id: "outros", name: "Outros", color: "#D4A5A5" },
];

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Housing,
        Category::Transport,
        Category::Food,
        Category::Leisure,
        Category::Other,
    ];

    pub fn info(self) -> &'static CategoryInfo {
        &CATEGORY_TABLE[self as usize]
    }

    pub fn id(self) -> &'static str {
        self.info().id
    }

    pub fn name(self) -> &'static str {
        self.info().name
    }

    pub fn color(self) -> &'static str {
        self.info().color
    }

    /// Exact match on the current id or on the Portuguese id older data used.
    pub fn from_id(id: &str) -> Option<Category> {
        Category::ALL
            .into_iter()
            .find(|c| c.info().id == id || c.info().legacy_id == id)
    }
}

fn default_category() -> String {
    Category::Other.id().to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseEntry {
    pub id: EntryId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub amount: MoneyValue,
    /// Raw category id; unknown ids are kept as they are.
    #[serde(default = "default_category")]
    pub category: String,
}

impl ExpenseEntry {
    pub fn blank(id: EntryId) -> Self {
        ExpenseEntry {
            id,
            name: String::new(),
            amount: MoneyValue::ZERO,
            category: default_category(),
        }
    }

    pub fn category(&self) -> Option<Category> {
        Category::from_id(&self.category)
    }

    pub fn category_label(&self) -> &'static str {
        self.category()
            .map(Category::name)
            .unwrap_or(UNKNOWN_CATEGORY_LABEL)
    }
}

/// Salary plus the ordered expense list; what gets persisted and exported.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub salary: MoneyValue,
    #[serde(default)]
    pub expenses: Vec<ExpenseEntry>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryField {
    Name,
    Amount,
    Category,
}
