// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::Snapshot;
use crate::persistence::{SnapshotGateway, load_store};
use crate::report::{DOC_FILE_NAME, PDF_FILE_NAME, Report, write_doc, write_pdf};
use anyhow::{Result, anyhow};
use chrono::{Local, NaiveDate};
use std::path::{Path, PathBuf};

pub fn handle(gateway: &dyn SnapshotGateway, m: &clap::ArgMatches) -> Result<()> {
    let fmt = m.get_one::<String>("format").unwrap().to_lowercase();
    let out = match m.get_one::<String>("out") {
        Some(p) => PathBuf::from(p),
        None => PathBuf::from(default_file_name(&fmt)?),
    };
    // Exporters work on an owned copy of the data.
    let snapshot = load_store(gateway)?.snapshot();
    export(&snapshot, &fmt, &out, Local::now().date_naive())?;
    println!("Exported {} to {}", fmt, out.display());
    Ok(())
}

pub fn default_file_name(fmt: &str) -> Result<&'static str> {
    match fmt {
        "pdf" => Ok(PDF_FILE_NAME),
        "doc" => Ok(DOC_FILE_NAME),
        "json" => Ok("despesas.json"),
        "csv" => Ok("despesas.csv"),
        _ => Err(anyhow!("Unknown format: {} (use pdf|doc|json|csv)", fmt)),
    }
}

pub fn export(snapshot: &Snapshot, fmt: &str, out: &Path, date: NaiveDate) -> Result<()> {
    match fmt {
        "pdf" => write_pdf(&Report::build(snapshot, date), out),
        "doc" => write_doc(&Report::build(snapshot, date), out),
        "json" => {
            std::fs::write(out, serde_json::to_string_pretty(snapshot)?)?;
            Ok(())
        }
        "csv" => {
            let mut wtr = csv::Writer::from_path(out)?;
            wtr.write_record(["number", "id", "name", "category", "amount"])?;
            for (i, e) in snapshot.expenses.iter().enumerate() {
                wtr.write_record([
                    (i + 1).to_string(),
                    e.id.to_string(),
                    e.name.clone(),
                    e.category.clone(),
                    e.amount.amount().to_string(),
                ])?;
            }
            wtr.flush()?;
            Ok(())
        }
        _ => Err(anyhow!("Unknown format: {} (use pdf|doc|json|csv)", fmt)),
    }
}
