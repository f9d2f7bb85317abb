// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{Category, ExpenseEntry, Snapshot};
use crate::money::MoneyValue;
use rust_decimal::Decimal;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryTotal {
    pub category: Category,
    pub name: &'static str,
    pub amount: Decimal,
    pub color: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Totals {
    pub salary: Decimal,
    pub total_expenses: Decimal,
    /// Signed; negative when expenses exceed the salary.
    pub balance: Decimal,
}

impl Totals {
    pub fn compute(snapshot: &Snapshot) -> Self {
        Totals {
            salary: snapshot.salary.amount(),
            total_expenses: total_expenses(&snapshot.expenses),
            balance: balance(snapshot.salary, &snapshot.expenses),
        }
    }
}

pub fn total_expenses(expenses: &[ExpenseEntry]) -> Decimal {
    expenses.iter().map(|e| e.amount.amount()).sum()
}

pub fn balance(salary: MoneyValue, expenses: &[ExpenseEntry]) -> Decimal {
    salary.amount() - total_expenses(expenses)
}

/// Per-category sums in declaration order, skipping categories that sum to zero.
/// Entries with an unknown category id are not attributed to any slice.
pub fn by_category(expenses: &[ExpenseEntry]) -> Vec<CategoryTotal> {
    Category::ALL
        .into_iter()
        .filter_map(|category| {
            let amount: Decimal = expenses
                .iter()
                .filter(|e| e.category() == Some(category))
                .map(|e| e.amount.amount())
                .sum();
            if amount.is_zero() {
                return None;
            }
            Some(CategoryTotal {
                category,
                name: category.name(),
                amount,
                color: category.color(),
            })
        })
        .collect()
}
