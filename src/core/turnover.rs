//! ₦50m turnover watchdog: business income tracked against the small
//! company threshold.

use super::cit::CompanySize;
use super::error::InvalidInputError;
use super::money::{deserialize_naira, ensure_valid_amount, to_kobo};
use super::ng::{TaxYear, SMALL_COMPANY_TURNOVER};
use anyhow::Context;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use schemars::gen::SchemaGenerator;
use schemars::schema::{InstanceType, Schema, SchemaObject};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::io::Read;
use taxpaddy_derive::CsvSchema;

/// A column of a CSV input file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CsvField {
    pub name: &'static str,
    pub required: bool,
    pub description: &'static str,
}

/// Classification of money received.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum EntryKind {
    /// Business income, counts towards turnover
    #[default]
    Income,
    /// Genuine gift, loan or support; excluded from turnover
    NonIncome,
}

/// Root of the JSON form of a turnover ledger.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct TurnoverInput {
    pub entries: Vec<TurnoverEntry>,
}

/// A single inflow recorded in the turnover ledger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema, CsvSchema)]
pub struct TurnoverEntry {
    /// Identifier for linking back to source records
    #[serde(default)]
    pub id: Option<String>,
    /// Date received (YYYY-MM-DD)
    #[schemars(with = "String")]
    pub date: NaiveDate,
    /// Amount in Naira; thousands separators allowed
    #[serde(deserialize_with = "deserialize_naira")]
    #[schemars(schema_with = "naira_schema")]
    pub amount: Decimal,
    /// What the money was for, e.g. the invoice or narration
    pub description: String,
    /// income or non-income (gift, loan, support); blank counts as income
    #[serde(default)]
    pub kind: Option<EntryKind>,
}

// Amounts are read from JSON strings ("5,000,000") or plain numbers.
fn naira_schema(_gen: &mut SchemaGenerator) -> Schema {
    SchemaObject {
        instance_type: Some(vec![InstanceType::String, InstanceType::Number].into()),
        ..Default::default()
    }
    .into()
}

impl TurnoverEntry {
    pub fn kind(&self) -> EntryKind {
        self.kind.unwrap_or_default()
    }

    pub fn counts_towards_turnover(&self) -> bool {
        self.kind() == EntryKind::Income
    }

    pub fn validate(&self) -> Result<(), InvalidInputError> {
        if self.description.trim().is_empty() {
            return Err(InvalidInputError::Empty {
                field: "description",
            });
        }
        if self.amount <= Decimal::ZERO {
            return Err(InvalidInputError::NonPositive {
                field: "amount",
                value: self.amount,
            });
        }
        ensure_valid_amount("amount", self.amount)?;
        Ok(())
    }
}

/// Read and validate a CSV turnover ledger, ordered by date.
pub fn read_entries_csv<R: Read>(reader: R) -> anyhow::Result<Vec<TurnoverEntry>> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut entries = Vec::new();
    for (i, result) in rdr.deserialize().enumerate() {
        // header is line 1
        let line = i + 2;
        let entry: TurnoverEntry =
            result.with_context(|| format!("malformed entry on line {line}"))?;
        entry
            .validate()
            .with_context(|| format!("invalid entry on line {line}"))?;
        warn_if_unlabeled(&entry);
        entries.push(entry);
    }
    log::info!("Read {} csv records", entries.len());

    entries.sort_by_key(|e| e.date);
    Ok(entries)
}

/// Read and validate a JSON turnover ledger, ordered by date.
pub fn read_entries_json<R: Read>(reader: R) -> anyhow::Result<Vec<TurnoverEntry>> {
    let input: TurnoverInput = serde_json::from_reader(reader)?;
    let mut entries = input.entries;
    for entry in &entries {
        entry
            .validate()
            .with_context(|| format!("invalid entry dated {}", entry.date))?;
        warn_if_unlabeled(entry);
    }
    log::info!("Read {} json records", entries.len());

    entries.sort_by_key(|e| e.date);
    Ok(entries)
}

fn warn_if_unlabeled(entry: &TurnoverEntry) {
    if entry.kind.is_none() {
        log::warn!(
            "Entry '{}' on {} has no kind; counting it as income",
            entry.description,
            entry.date
        );
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TurnoverStatus {
    /// `None` when every entry is counted regardless of year
    pub tax_year: Option<TaxYear>,
    pub turnover: Decimal,
    /// Inflows classified as gifts, loans or support
    pub excluded: Decimal,
    pub threshold: Decimal,
    /// Turnover as a percentage of the threshold, capped at 100
    pub percentage: Decimal,
    /// Set once turnover reaches the threshold
    pub exceeded: bool,
    pub counted_entries: usize,
    pub excluded_entries: usize,
}

impl TurnoverStatus {
    pub fn company_size(&self) -> CompanySize {
        CompanySize::from_turnover(self.turnover)
    }

    /// Headroom left before the threshold is crossed.
    pub fn remaining(&self) -> Decimal {
        (self.threshold - self.turnover).max(Decimal::ZERO)
    }
}

/// Total business income against the small company threshold.
///
/// The watchdog flags turnover that has reached the threshold, while CIT
/// only applies once turnover is above it (see [`CompanySize::from_turnover`]).
pub fn turnover_status(
    entries: &[TurnoverEntry],
    year: Option<TaxYear>,
) -> Result<TurnoverStatus, InvalidInputError> {
    let (counted, excluded): (Vec<&TurnoverEntry>, Vec<&TurnoverEntry>) = entries
        .iter()
        .filter(|e| year.is_none_or(|y| y.contains(e.date)))
        .partition(|e| e.counts_towards_turnover());

    let turnover = total("turnover", &counted)?;
    let excluded_total = total("excluded", &excluded)?;
    let threshold = SMALL_COMPANY_TURNOVER;

    let percentage = (turnover / threshold * dec!(100))
        .min(dec!(100))
        .round_dp(1)
        .normalize();

    Ok(TurnoverStatus {
        tax_year: year,
        turnover: to_kobo(turnover),
        excluded: to_kobo(excluded_total),
        threshold,
        percentage,
        exceeded: turnover >= threshold,
        counted_entries: counted.len(),
        excluded_entries: excluded.len(),
    })
}

fn total(field: &'static str, entries: &[&TurnoverEntry]) -> Result<Decimal, InvalidInputError> {
    entries.iter().try_fold(Decimal::ZERO, |sum, e| {
        sum.checked_add(e.amount)
            .ok_or(InvalidInputError::Overflow { field })
    })
}
