// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::ExpenseEntry;
use crate::totals::by_category;
use rust_decimal::Decimal;
use serde::Serialize;

/// One pie slice.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartPoint {
    pub label: &'static str,
    pub value: Decimal,
    pub color: &'static str,
    /// Percentage of the charted total, one decimal place.
    pub share: Decimal,
}

/// The chart is only worth drawing when something has a positive amount.
pub fn has_chart_data(expenses: &[ExpenseEntry]) -> bool {
    expenses.iter().any(|e| !e.amount.is_zero())
}

pub fn chart_points(expenses: &[ExpenseEntry]) -> Vec<ChartPoint> {
    let slices = by_category(expenses);
    let total: Decimal = slices.iter().map(|s| s.amount).sum();
    slices
        .into_iter()
        .map(|s| ChartPoint {
            label: s.name,
            value: s.amount,
            color: s.color,
            share: if total.is_zero() {
                Decimal::ZERO
            } else {
                (s.amount * Decimal::ONE_HUNDRED / total).round_dp(1)
            },
        })
        .collect()
}
