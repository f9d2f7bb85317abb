// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Monetary values in the fixed pt-BR / BRL locale.
//!
//! Every parser here is total: malformed input degrades to zero and
//! oversized input saturates at [`MAX_AMOUNT`].

use once_cell::sync::Lazy;
use regex::Regex;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;

pub const CURRENCY_SYMBOL: &str = "R$";

/// Upper bound for any stored amount, in whole currency units.
pub const MAX_AMOUNT: i64 = 1_000_000_000;

static NON_DIGITS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^0-9]+").unwrap());
static NON_DECIMAL: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^0-9,]+").unwrap());

/// A non-negative amount with cents granularity, clamped to `[0, MAX_AMOUNT]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(from = "Decimal", into = "Decimal")]
pub struct MoneyValue(Decimal);

impl MoneyValue {
    pub const ZERO: MoneyValue = MoneyValue(Decimal::ZERO);

    pub fn max() -> Self {
        MoneyValue(Decimal::from(MAX_AMOUNT))
    }

    /// Round to cents and pin into `[0, MAX_AMOUNT]`.
    pub fn clamp(amount: Decimal) -> Self {
        let cents = round_cents(amount);
        if cents.is_zero() || cents.is_sign_negative() {
            Self::ZERO
        } else if cents > Decimal::from(MAX_AMOUNT) {
            Self::max()
        } else {
            MoneyValue(cents)
        }
    }

    /// Keystroke input: every digit counts, the result is read as cents.
    ///
    /// `"500000"` and `"R$ 5.000,00"` both give 5000.00.
    pub fn parse_digits(raw: &str) -> Self {
        let digits = NON_DIGITS.replace_all(raw, "");
        let digits = digits.trim_start_matches('0');
        if digits.is_empty() {
            return Self::ZERO;
        }
        // 12+ significant digits of cents is already at or past the cap.
        if digits.len() > 11 {
            return Self::max();
        }
        match digits.parse::<i64>() {
            Ok(cents) => Self::clamp(Decimal::new(cents, 2)),
            Err(_) => Self::ZERO,
        }
    }

    /// Edited formatted value: digits and a comma as decimal separator.
    ///
    /// Everything after a second comma is ignored.
    pub fn parse_decimal(raw: &str) -> Self {
        let kept = NON_DECIMAL.replace_all(raw, "");
        let mut parts = kept.split(',');
        let whole = parts.next().unwrap_or("").trim_start_matches('0');
        let frac: String = parts.next().unwrap_or("").chars().take(9).collect();
        if whole.len() > 10 {
            return Self::max();
        }
        let whole = if whole.is_empty() { "0" } else { whole };
        let frac = if frac.is_empty() { "0" } else { frac.as_str() };
        format!("{}.{}", whole, frac)
            .parse::<Decimal>()
            .map(Self::clamp)
            .unwrap_or(Self::ZERO)
    }

    pub fn amount(&self) -> Decimal {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    pub fn format(&self) -> String {
        format_signed(self.0)
    }
}

impl From<Decimal> for MoneyValue {
    fn from(d: Decimal) -> Self {
        MoneyValue::clamp(d)
    }
}

impl From<MoneyValue> for Decimal {
    fn from(m: MoneyValue) -> Self {
        m.0
    }
}

impl fmt::Display for MoneyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format())
    }
}

fn round_cents(d: Decimal) -> Decimal {
    d.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Render any signed amount as `R$ 1.234,56` (or `-R$ 1.234,56`).
pub fn format_signed(amount: Decimal) -> String {
    let rounded = round_cents(amount);
    let negative = rounded.is_sign_negative() && !rounded.is_zero();
    let plain = format!("{:.2}", rounded.abs());
    let (whole, frac) = plain.split_once('.').unwrap_or((plain.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    format!(
        "{}{} {},{}",
        if negative { "-" } else { "" },
        CURRENCY_SYMBOL,
        grouped,
        frac
    )
}
