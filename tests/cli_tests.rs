// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use expensecalc::commands::{exporter, expenses, importer, reset, salary};
use expensecalc::persistence::{SnapshotGateway, SqliteGateway, load_store};
use expensecalc::{cli, totals::Totals};
use rusqlite::Connection;
use rust_decimal_macros::dec;
use tempfile::tempdir;

fn gateway() -> SqliteGateway {
    SqliteGateway::new(Connection::open_in_memory().unwrap()).unwrap()
}

fn run(gw: &dyn SnapshotGateway, args: &[&str]) {
    let mut argv = vec!["expensecalc"];
    argv.extend_from_slice(args);
    let matches = cli::build_cli().get_matches_from(argv);
    match matches.subcommand() {
        Some(("salary", sub)) => salary::handle(gw, sub).unwrap(),
        Some(("expense", sub)) => expenses::handle(gw, sub).unwrap(),
        Some(("export", sub)) => exporter::handle(gw, sub).unwrap(),
        Some(("import", sub)) => importer::handle(gw, sub).unwrap(),
        Some(("reset", _)) => reset::handle(gw).unwrap(),
        other => panic!("unexpected command {:?}", other.map(|(name, _)| name)),
    }
}

#[test]
fn salary_and_expense_flow() {
    let gw = gateway();
    run(&gw, &["salary", "set", "500000", "--cents"]);
    run(
        &gw,
        &["expense", "add", "--name", "Mercado", "--cents", "150000", "--category", "food"],
    );

    let store = load_store(&gw).unwrap();
    // First-run blank row plus the added one.
    assert_eq!(store.len(), 2);
    let totals = Totals::compute(&store.snapshot());
    assert_eq!(totals.total_expenses, dec!(1500));
    assert_eq!(totals.balance, dec!(3500));

    let rows = expenses::list_rows(&store);
    assert_eq!(rows[1].number, 2);
    assert_eq!(rows[1].name, "Mercado");
    assert_eq!(rows[1].category, "Alimentação");
    assert_eq!(rows[1].amount, "R$ 1.500,00");
}

#[test]
fn expense_set_and_rm() {
    let gw = gateway();
    run(&gw, &["salary", "set", "3.000,00"]);
    let id = load_store(&gw).unwrap().entries()[0].id.to_string();

    run(
        &gw,
        &["expense", "set", "--id", &id, "--name", "Aluguel", "--amount", "1.250,90", "--category", "housing"],
    );
    let store = load_store(&gw).unwrap();
    assert_eq!(store.salary().amount(), dec!(3000));
    let e = &store.entries()[0];
    assert_eq!(e.name, "Aluguel");
    assert_eq!(e.amount.amount(), dec!(1250.90));
    assert_eq!(e.category, "housing");

    run(&gw, &["expense", "rm", "--id", &id]);
    assert!(load_store(&gw).unwrap().is_empty());
    // Second removal is a no-op.
    run(&gw, &["expense", "rm", "--id", &id]);
    assert!(load_store(&gw).unwrap().is_empty());
}

#[test]
fn set_on_fresh_data_targets_the_blank_row() {
    let gw = gateway();
    let id = load_store(&gw).unwrap().entries()[0].id;
    assert!(gw.load().unwrap().is_some());

    run(&gw, &["expense", "set", "--id", &id.to_string(), "--name", "Aluguel"]);
    let saved = gw.load().unwrap().unwrap();
    assert_eq!(saved.expenses.len(), 1);
    assert_eq!(saved.expenses[0].id, id);
    assert_eq!(saved.expenses[0].name, "Aluguel");

    run(&gw, &["reset"]);
    let id = load_store(&gw).unwrap().entries()[0].id;
    run(&gw, &["expense", "set", "--id", &id.to_string(), "--cents", "9990"]);
    let saved = gw.load().unwrap().unwrap();
    assert_eq!(saved.expenses[0].id, id);
    assert_eq!(saved.expenses[0].amount.amount(), dec!(99.90));
}

#[test]
fn add_beyond_cap_leaves_data_untouched() {
    let gw = gateway();
    for _ in 0..99 {
        run(&gw, &["expense", "add"]);
    }
    let before = gw.load().unwrap().unwrap();
    assert_eq!(before.expenses.len(), 100);

    run(&gw, &["expense", "add", "--name", "extra"]);
    assert_eq!(gw.load().unwrap().unwrap(), before);
}

#[test]
fn amount_and_cents_conflict() {
    let res = cli::build_cli().try_get_matches_from([
        "expensecalc", "expense", "add", "--amount", "1,00", "--cents", "100",
    ]);
    assert!(res.is_err());
}

#[test]
fn export_rejects_unknown_format() {
    let res = cli::build_cli().try_get_matches_from(["expensecalc", "export", "xml"]);
    assert!(res.is_err());
    assert!(exporter::default_file_name("xml").is_err());
}

#[test]
fn export_then_import_json() {
    let gw = gateway();
    run(&gw, &["salary", "set", "1234567", "--cents"]);
    run(&gw, &["expense", "add", "--name", "Gasolina", "--cents", "25000", "--category", "transport"]);

    let dir = tempdir().unwrap();
    let out = dir.path().join("despesas.json");
    let out_str = out.to_string_lossy().to_string();
    run(&gw, &["export", "json", "--out", &out_str]);
    let exported = gw.load().unwrap().unwrap();

    run(&gw, &["reset"]);
    assert!(gw.load().unwrap().is_none());

    run(&gw, &["import", "--path", &out_str]);
    assert_eq!(gw.load().unwrap().unwrap(), exported);
}

#[test]
fn export_doc_and_csv() {
    let gw = gateway();
    run(&gw, &["salary", "set", "500000", "--cents"]);
    let id = load_store(&gw).unwrap().entries()[0].id.to_string();
    run(&gw, &["expense", "set", "--id", &id, "--name", "Mercado", "--cents", "150000", "--category", "food"]);

    let dir = tempdir().unwrap();
    let doc = dir.path().join("relatorio.doc");
    let doc_str = doc.to_string_lossy().to_string();
    run(&gw, &["export", "doc", "--out", &doc_str]);
    let text = std::fs::read_to_string(&doc).unwrap();
    assert!(text.starts_with("RELATÓRIO DE DESPESAS"));
    assert!(text.contains("1. Mercado (Alimentação): R$ 1.500,00"));
    assert!(text.contains("Saldo Final: R$ 3.500,00"));

    let csv_path = dir.path().join("despesas.csv");
    let csv_str = csv_path.to_string_lossy().to_string();
    run(&gw, &["export", "csv", "--out", &csv_str]);
    let mut rdr = csv::Reader::from_path(&csv_path).unwrap();
    let records: Vec<csv::StringRecord> = rdr.records().map(|r| r.unwrap()).collect();
    assert_eq!(records.len(), 1);
    assert_eq!(&records[0][2], "Mercado");
    assert_eq!(&records[0][3], "food");
    assert_eq!(&records[0][4], "1500.00");
}

#[test]
fn import_rejects_broken_file() {
    let gw = gateway();
    let dir = tempdir().unwrap();
    let path = dir.path().join("broken.json");
    std::fs::write(&path, "{ nope").unwrap();
    let err = importer::import_snapshot(&gw, &path).unwrap_err();
    assert!(err.to_string().contains("Invalid snapshot JSON"));
    assert!(gw.load().unwrap().is_none());
}
