//! Turnover command - business income against the ₦50m small company threshold

use super::{print_json, print_table, read_entries};
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;
use tabled::Tabled;
use taxpaddy::core::{
    format_naira, turnover_status, EntryKind, TaxYear, TurnoverEntry, TurnoverStatus,
};

#[derive(Args, Debug)]
pub struct TurnoverCommand {
    /// Ledger file (CSV, or JSON with a .json extension). Reads from stdin if not specified.
    #[arg(default_value = "-")]
    file: PathBuf,

    /// Tax year to filter (calendar year, e.g. 2026)
    #[arg(short, long)]
    year: Option<i32>,

    /// Output as JSON instead of formatted text
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Serialize)]
struct TurnoverOutput<'a> {
    #[serde(flatten)]
    status: &'a TurnoverStatus,
    entries: Vec<&'a TurnoverEntry>,
}

#[derive(Debug, Clone, Tabled)]
struct EntryRow {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Kind")]
    kind: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

impl TurnoverCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        let tax_year = self.year.map(TaxYear);
        let entries = read_entries(&self.file)?;
        let status = turnover_status(&entries, tax_year)?;

        let in_year: Vec<&TurnoverEntry> = entries
            .iter()
            .filter(|e| tax_year.is_none_or(|y| y.contains(e.date)))
            .collect();

        if self.json {
            print_json(&TurnoverOutput {
                status: &status,
                entries: in_year,
            })
        } else {
            print_text(&status, &in_year);
            Ok(())
        }
    }
}

fn print_text(status: &TurnoverStatus, entries: &[&TurnoverEntry]) {
    let year_str = status
        .tax_year
        .map_or("All Years".to_string(), |y| y.to_string());

    println!();
    println!("TURNOVER WATCHDOG ({})", year_str);
    if let Some((start, end)) = status
        .tax_year
        .and_then(|y| Some((y.start_date()?, y.end_date()?)))
    {
        println!("  Period: {} to {}", start, end);
    }
    println!();

    if entries.is_empty() {
        println!("No transactions recorded yet.");
    } else {
        let rows = entries
            .iter()
            .map(|e| EntryRow {
                date: e.date.format("%Y-%m-%d").to_string(),
                description: e.description.clone(),
                kind: kind_name(e.kind()).to_string(),
                amount: format_naira(e.amount),
            })
            .collect();
        print_table(rows);
    }
    println!();

    println!(
        "  Turnover: {} / {} ({}%)",
        format_naira(status.turnover),
        format_naira(status.threshold),
        status.percentage
    );
    println!(
        "  Excluded gifts/loans/support: {} ({} entries)",
        format_naira(status.excluded),
        status.excluded_entries
    );
    println!();

    if status.exceeded {
        println!("\u{26A0} THRESHOLD EXCEEDED");
        println!("  You have crossed the small company threshold and may now be liable");
        println!("  for Company Income Tax (CIT) filing obligations.");
    } else {
        println!("\u{2713} SMALL COMPANY STATUS");
        println!(
            "  Below the threshold, {} of headroom remaining.",
            format_naira(status.remaining())
        );
    }
    println!();
}

fn kind_name(kind: EntryKind) -> &'static str {
    match kind {
        EntryKind::Income => "Income",
        EntryKind::NonIncome => "Non-Income",
    }
}
