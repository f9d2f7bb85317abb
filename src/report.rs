// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Expense reports: the shared report model, the text (DOC) rendering and
//! the paginated PDF rendering.

use crate::models::{ExpenseEntry, Snapshot};
use crate::money::format_signed;
use crate::totals::Totals;
use anyhow::{Context, Result, anyhow};
use chrono::NaiveDate;
use printpdf::{BuiltinFont, Mm, PdfDocument};
use std::fs;
use std::path::Path;
use tracing::info;

pub const REPORT_TITLE: &str = "Relatório de Despesas";
pub const REPORT_FOOTER: &str = "Calculadora de Despesas - Desenvolvido por Dev. Alex Paz";
pub const PDF_FILE_NAME: &str = "relatorio-despesas.pdf";
pub const DOC_FILE_NAME: &str = "relatorio-despesas.doc";

// A4 portrait, positions in mm measured from the top edge.
const PAGE_WIDTH_MM: f32 = 210.0;
const PAGE_HEIGHT_MM: f32 = 297.0;
const LEFT_MARGIN_MM: f32 = 20.0;
const FIRST_EXPENSE_Y: f32 = 65.0;
const LINE_STEP: f32 = 10.0;
const PAGE_BREAK_Y: f32 = 250.0;
const PAGE_TOP_Y: f32 = 20.0;
const FOOTER_Y: f32 = 280.0;

#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub date: String,
    pub salary: String,
    pub expense_lines: Vec<String>,
    pub total_expenses: String,
    pub balance: String,
}

impl Report {
    /// Takes the snapshot by reference and copies what it needs, so the
    /// store can keep changing while the report is written.
    pub fn build(snapshot: &Snapshot, date: NaiveDate) -> Self {
        let totals = Totals::compute(snapshot);
        Report {
            date: date.format("%d/%m/%Y").to_string(),
            salary: format_signed(totals.salary),
            expense_lines: snapshot
                .expenses
                .iter()
                .enumerate()
                .map(|(i, e)| expense_line(i + 1, e))
                .collect(),
            total_expenses: format_signed(totals.total_expenses),
            balance: format_signed(totals.balance),
        }
    }

    pub fn render_text(&self) -> String {
        let mut out = String::from("RELATÓRIO DE DESPESAS\n\n");
        out.push_str(&format!("Data: {}\n", self.date));
        out.push_str(&format!("Salário: {}\n\n", self.salary));
        out.push_str("DESPESAS:\n");
        for line in &self.expense_lines {
            out.push_str(line);
            out.push('\n');
        }
        out.push_str(&format!("\nTotal de Despesas: {}", self.total_expenses));
        out.push_str(&format!("\nSaldo Final: {}", self.balance));
        out.push_str(&format!("\n\n{}", REPORT_FOOTER));
        out
    }
}

/// `"3. Aluguel (Moradia): R$ 1.200,00"`, numbered from 1.
pub fn expense_line(number: usize, entry: &ExpenseEntry) -> String {
    format!(
        "{}. {} ({}): {}",
        number,
        entry.name,
        entry.category_label(),
        entry.amount
    )
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlacedText {
    pub text: String,
    pub size: f32,
    /// Distance from the top of the page, in mm.
    pub y: f32,
}

impl PlacedText {
    fn new(text: impl Into<String>, size: f32, y: f32) -> Self {
        PlacedText {
            text: text.into(),
            size,
            y,
        }
    }
}

/// Lay the report out on A4 pages. Expense lines start at 65mm and move down
/// 10mm each; a line that would start below 250mm goes to a new page at 20mm.
pub fn layout_pages(report: &Report) -> Vec<Vec<PlacedText>> {
    let mut pages = Vec::new();
    let mut current = vec![
        PlacedText::new(REPORT_TITLE, 16.0, 20.0),
        PlacedText::new(format!("Data: {}", report.date), 12.0, 30.0),
        PlacedText::new(format!("Salário: {}", report.salary), 12.0, 40.0),
        PlacedText::new("Despesas:", 12.0, 55.0),
    ];

    let mut y = FIRST_EXPENSE_Y;
    for line in &report.expense_lines {
        if y > PAGE_BREAK_Y {
            pages.push(std::mem::take(&mut current));
            y = PAGE_TOP_Y;
        }
        current.push(PlacedText::new(line.as_str(), 12.0, y));
        y += LINE_STEP;
    }

    // Total and balance must both sit above the footer.
    if y + 2.0 * LINE_STEP >= FOOTER_Y {
        pages.push(std::mem::take(&mut current));
        y = PAGE_TOP_Y;
    }
    y += LINE_STEP;
    current.push(PlacedText::new(
        format!("Total de Despesas: {}", report.total_expenses),
        12.0,
        y,
    ));
    y += LINE_STEP;
    current.push(PlacedText::new(format!("Saldo Final: {}", report.balance), 12.0, y));
    current.push(PlacedText::new(REPORT_FOOTER, 10.0, FOOTER_Y));
    pages.push(current);
    pages
}

pub fn render_pdf(report: &Report) -> Result<Vec<u8>> {
    let pages = layout_pages(report);
    let (doc, first_page, first_layer) = PdfDocument::new(
        REPORT_TITLE,
        Mm(PAGE_WIDTH_MM.into()),
        Mm(PAGE_HEIGHT_MM.into()),
        "Layer 1",
    );
    let font = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| anyhow!("Load PDF font: {:?}", e))?;

    let mut targets = vec![(first_page, first_layer)];
    for _ in 1..pages.len() {
        targets.push(doc.add_page(
            Mm(PAGE_WIDTH_MM.into()),
            Mm(PAGE_HEIGHT_MM.into()),
            "Layer 1",
        ));
    }

    for (placed, (page, layer)) in pages.iter().zip(targets) {
        let layer = doc.get_page(page).get_layer(layer);
        for t in placed {
            layer.use_text(
                t.text.clone(),
                t.size.into(),
                Mm(LEFT_MARGIN_MM.into()),
                Mm((PAGE_HEIGHT_MM - t.y).into()),
                &font,
            );
        }
    }

    doc.save_to_bytes()
        .map_err(|e| anyhow!("Render PDF: {:?}", e))
}

pub fn write_pdf(report: &Report, path: &Path) -> Result<()> {
    let bytes = render_pdf(report)?;
    fs::write(path, bytes).with_context(|| format!("Write {}", path.display()))?;
    info!(path = %path.display(), lines = report.expense_lines.len(), "PDF report written");
    Ok(())
}

pub fn write_doc(report: &Report, path: &Path) -> Result<()> {
    fs::write(path, report.render_text())
        .with_context(|| format!("Write {}", path.display()))?;
    info!(path = %path.display(), lines = report.expense_lines.len(), "DOC report written");
    Ok(())
}
