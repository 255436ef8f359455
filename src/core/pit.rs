//! Personal Income Tax: rent relief followed by progressive marginal bands.

use super::error::InvalidInputError;
use super::money::{ensure_valid_amount, naira_from_f64, parse_naira, to_kobo};
use super::ng::{PIT_BANDS, PIT_EXEMPT_BAND, RENT_RELIEF_CAP, RENT_RELIEF_RATE};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct PitInput {
    /// Total annual income before deductions
    #[schemars(with = "f64")]
    pub gross_annual_income: Decimal,
    /// Rent paid in the tax year; only used for relief
    #[schemars(with = "f64")]
    pub annual_rent_paid: Decimal,
}

impl PitInput {
    pub fn new(gross_annual_income: Decimal, annual_rent_paid: Decimal) -> Self {
        PitInput {
            gross_annual_income,
            annual_rent_paid,
        }
    }

    pub fn from_f64(
        gross_annual_income: f64,
        annual_rent_paid: f64,
    ) -> Result<Self, InvalidInputError> {
        Ok(PitInput {
            gross_annual_income: naira_from_f64("gross annual income", gross_annual_income)?,
            annual_rent_paid: naira_from_f64("annual rent paid", annual_rent_paid)?,
        })
    }

    /// Parse user-entered amounts; thousands separators are accepted.
    pub fn parse(
        gross_annual_income: &str,
        annual_rent_paid: &str,
    ) -> Result<Self, InvalidInputError> {
        Ok(PitInput {
            gross_annual_income: parse_naira("gross annual income", gross_annual_income)?,
            annual_rent_paid: parse_naira("annual rent paid", annual_rent_paid)?,
        })
    }
}

/// The slice of taxable income charged at one marginal rate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BandCharge {
    pub lower: Decimal,
    /// `None` for the unbounded top band
    pub upper: Option<Decimal>,
    pub rate: Decimal,
    pub taxed: Decimal,
    pub tax: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PitResult {
    pub gross: Decimal,
    pub relief: Decimal,
    pub taxable: Decimal,
    pub tax: Decimal,
    /// Bands that received a non-zero slice of taxable income, lowest first
    pub bands: Vec<BandCharge>,
}

impl PitResult {
    /// Tax spread evenly over twelve monthly PAYE deductions.
    pub fn monthly_tax(&self) -> Decimal {
        to_kobo(self.tax / dec!(12))
    }

    /// Tax as a fraction of gross income, to four decimal places.
    pub fn effective_rate(&self) -> Decimal {
        if self.gross.is_zero() {
            Decimal::ZERO
        } else {
            (self.tax / self.gross).round_dp(4)
        }
    }
}

/// Rent relief: the lowest of 20% of gross income, the ₦500,000 cap and the
/// rent actually paid.
pub fn rent_relief(gross_annual_income: Decimal, annual_rent_paid: Decimal) -> Decimal {
    (gross_annual_income * RENT_RELIEF_RATE)
        .min(RENT_RELIEF_CAP)
        .min(annual_rent_paid)
}

/// Calculate rent relief, taxable income and income tax.
pub fn calculate_pit(input: &PitInput) -> Result<PitResult, InvalidInputError> {
    let gross = ensure_valid_amount("gross annual income", input.gross_annual_income)?;
    let rent = ensure_valid_amount("annual rent paid", input.annual_rent_paid)?;

    let relief = rent_relief(gross, rent);
    let taxable = (gross - relief).max(Decimal::ZERO);
    log::debug!(
        "PIT gross {}, rent {}, relief {}, taxable {}",
        gross,
        rent,
        relief,
        taxable
    );

    let (tax, bands) = band_tax(taxable);

    Ok(PitResult {
        gross: to_kobo(gross),
        relief: to_kobo(relief),
        taxable: to_kobo(taxable),
        tax: to_kobo(tax),
        bands,
    })
}

/// Walk the marginal bands. Income on a band boundary stays in the lower band.
fn band_tax(taxable: Decimal) -> (Decimal, Vec<BandCharge>) {
    let mut bands = Vec::new();
    if taxable.is_zero() {
        return (Decimal::ZERO, bands);
    }

    bands.push(BandCharge {
        lower: Decimal::ZERO,
        upper: Some(PIT_EXEMPT_BAND),
        rate: Decimal::ZERO,
        taxed: to_kobo(taxable.min(PIT_EXEMPT_BAND)),
        tax: Decimal::ZERO,
    });

    // The exempt band is only deducted once income rises above it.
    if taxable <= PIT_EXEMPT_BAND {
        return (Decimal::ZERO, bands);
    }

    let mut remaining = taxable - PIT_EXEMPT_BAND;
    let mut lower = PIT_EXEMPT_BAND;
    let mut tax = Decimal::ZERO;

    for band in PIT_BANDS.iter() {
        if remaining <= Decimal::ZERO {
            break;
        }
        let taxed = band.width.map_or(remaining, |width| remaining.min(width));
        let charge = taxed * band.rate;
        log::debug!("PIT band from {} @ {}: {} -> {}", lower, band.rate, taxed, charge);

        bands.push(BandCharge {
            lower,
            upper: band.width.map(|width| lower + width),
            rate: band.rate,
            taxed: to_kobo(taxed),
            tax: to_kobo(charge),
        });

        tax += charge;
        remaining -= taxed;
        lower += taxed;
    }

    (tax, bands)
}
