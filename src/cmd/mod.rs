pub mod cit;
pub mod deadlines;
pub mod pit;
pub mod schema;
pub mod turnover;
pub mod vat;

use anyhow::Context;
use serde::Serialize;
use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;
use taxpaddy::core::{read_entries_csv, read_entries_json, TurnoverEntry};
use tabled::{
    settings::{object::Rows, Alignment, Modify, Style},
    Table, Tabled,
};

/// Read a turnover ledger (CSV, or JSON by `.json` extension), or stdin with "-"
pub fn read_entries(path: &Path) -> anyhow::Result<Vec<TurnoverEntry>> {
    if path.as_os_str() == "-" {
        return read_from_stdin();
    }

    let file = File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
    let reader = BufReader::new(file);
    if path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("json")) {
        read_entries_json(reader)
    } else {
        read_entries_csv(reader)
    }
}

fn read_from_stdin() -> anyhow::Result<Vec<TurnoverEntry>> {
    let stdin = io::stdin();
    let mut reader = BufReader::new(stdin.lock());

    let mut buffer = Vec::new();
    reader.read_to_end(&mut buffer)?;

    if buffer.is_empty() {
        anyhow::bail!("No input received. Provide a file or pipe data to stdin.");
    }

    if buffer.iter().find(|b| !b.is_ascii_whitespace()) == Some(&b'{') {
        read_entries_json(io::Cursor::new(buffer))
    } else {
        read_entries_csv(io::Cursor::new(buffer))
    }
}

pub fn print_table<T: Tabled>(rows: Vec<T>) {
    let table = Table::new(rows)
        .with(Style::rounded())
        .with(Modify::new(Rows::new(1..)).with(Alignment::right()))
        .to_string();
    println!("{}", table);
}

pub fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
