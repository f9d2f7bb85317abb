// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use expensecalc::chart::{chart_points, has_chart_data};
use expensecalc::models::{Category, EntryField, ExpenseEntry};
use expensecalc::money::{MoneyValue, format_signed};
use expensecalc::store::ExpenseStore;
use expensecalc::totals::{Totals, balance, by_category, total_expenses};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn entry(id: i64, cents: &str, category: &str) -> ExpenseEntry {
    ExpenseEntry {
        id,
        name: format!("e{id}"),
        amount: MoneyValue::parse_digits(cents),
        category: category.into(),
    }
}

#[test]
fn empty_list() {
    let salary = MoneyValue::parse_digits("123456");
    assert_eq!(total_expenses(&[]), Decimal::ZERO);
    assert_eq!(balance(salary, &[]), dec!(1234.56));
    assert!(by_category(&[]).is_empty());
}

#[test]
fn salary_and_one_food_expense() {
    let mut store = ExpenseStore::new();
    store.set_salary_digits("500000");
    let id = store.entries()[0].id;
    store.key_amount(id, "150000");
    store.update(id, EntryField::Category, "food");

    let snap = store.snapshot();
    let totals = Totals::compute(&snap);
    assert_eq!(store.salary().format(), "R$ 5.000,00");
    assert_eq!(format_signed(totals.total_expenses), "R$ 1.500,00");
    assert_eq!(format_signed(totals.balance), "R$ 3.500,00");

    let slices = by_category(&snap.expenses);
    assert_eq!(slices.len(), 1);
    assert_eq!(slices[0].name, "Alimentação");
    assert_eq!(slices[0].amount, dec!(1500.00));
    assert_eq!(slices[0].color, "#45B7D1");
}

#[test]
fn balance_can_go_negative() {
    let expenses = vec![entry(1, "300000", "housing"), entry(2, "50000", "food")];
    let salary = MoneyValue::parse_digits("200000");
    assert_eq!(balance(salary, &expenses), dec!(-1500));
}

#[test]
fn categories_keep_declaration_order_and_skip_zero() {
    let expenses = vec![
        entry(1, "100", "other"),
        entry(2, "90000", "housing"),
        entry(3, "0", "transport"),
        entry(4, "500", "other"),
        entry(5, "2500", "leisure"),
        entry(6, "777", "mystery"),
        entry(7, "1000", "moradia"),
    ];
    let slices = by_category(&expenses);
    let names: Vec<Category> = slices.iter().map(|s| s.category).collect();
    assert_eq!(
        names,
        vec![Category::Housing, Category::Leisure, Category::Other]
    );
    assert_eq!(slices[0].amount, dec!(910));
    assert_eq!(slices[2].amount, dec!(6));
    assert!(slices.iter().all(|s| !s.amount.is_zero()));

    // Unknown ids still count towards the total, just not towards a slice.
    assert_eq!(total_expenses(&expenses), dec!(948.77));
}

#[test]
fn same_input_same_output() {
    let expenses = vec![entry(1, "1234", "food"), entry(2, "4321", "transport")];
    assert_eq!(by_category(&expenses), by_category(&expenses));
    assert_eq!(total_expenses(&expenses), total_expenses(&expenses));
}

#[test]
fn chart_points_carry_shares() {
    let expenses = vec![
        entry(1, "7500", "housing"),
        entry(2, "2500", "food"),
        entry(3, "999", "unknown"),
    ];
    assert!(has_chart_data(&expenses));
    let points = chart_points(&expenses);
    assert_eq!(points.len(), 2);
    assert_eq!(points[0].label, "Moradia");
    assert_eq!(points[0].color, "#FF6B6B");
    assert_eq!(points[0].share, dec!(75.0));
    assert_eq!(points[1].share, dec!(25.0));
}

#[test]
fn nothing_to_chart_for_zero_amounts() {
    let expenses = vec![entry(1, "0", "food")];
    assert!(!has_chart_data(&expenses));
    assert!(chart_points(&expenses).is_empty());
}
