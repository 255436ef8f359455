//! Statutory figures for the Nigerian tax regime (Nigeria Tax Act 2025,
//! effective 1 January 2026).

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Share of gross income that may be claimed as rent relief.
pub const RENT_RELIEF_RATE: Decimal = dec!(0.20);
/// Ceiling on rent relief regardless of income or rent paid.
pub const RENT_RELIEF_CAP: Decimal = dec!(500000);

/// Taxable income at or below this amount pays no income tax.
pub const PIT_EXEMPT_BAND: Decimal = dec!(800000);

/// A marginal income tax band above the exempt band.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PitBand {
    /// Width of the band in Naira; `None` for the unbounded top band.
    pub width: Option<Decimal>,
    pub rate: Decimal,
}

/// Marginal bands applied, in order, to taxable income above [`PIT_EXEMPT_BAND`].
pub const PIT_BANDS: [PitBand; 5] = [
    PitBand {
        width: Some(dec!(2200000)),
        rate: dec!(0.15),
    },
    PitBand {
        width: Some(dec!(9000000)),
        rate: dec!(0.18),
    },
    PitBand {
        width: Some(dec!(13000000)),
        rate: dec!(0.21),
    },
    PitBand {
        width: Some(dec!(25000000)),
        rate: dec!(0.23),
    },
    PitBand {
        width: None,
        rate: dec!(0.25),
    },
];

/// Standard VAT rate. The only representation of the rate in the crate.
pub const VAT_RATE: Decimal = dec!(0.075);

/// VAT revenue sharing formula between the tiers of government.
pub const VAT_SHARE_FEDERAL: Decimal = dec!(0.10);
pub const VAT_SHARE_STATE: Decimal = dec!(0.55);
pub const VAT_SHARE_LOCAL: Decimal = dec!(0.35);

/// Companies with turnover at or below this amount are small companies and
/// pay no Company Income Tax.
pub const SMALL_COMPANY_TURNOVER: Decimal = dec!(50000000);
pub const CIT_RATE: Decimal = dec!(0.30);
pub const DEVELOPMENT_LEVY_RATE: Decimal = dec!(0.04);

/// Day of the month PAYE deductions must be remitted.
pub const PAYE_DUE_DAY: u32 = 10;
/// Day of the month VAT returns must be filed and paid.
pub const VAT_DUE_DAY: u32 = 21;

/// Nigerian tax year, which follows the calendar year.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema,
)]
pub struct TaxYear(pub i32);

impl TaxYear {
    pub fn from_date(date: NaiveDate) -> Self {
        TaxYear(date.year())
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.0
    }

    /// 1 January; `None` for years outside chrono's date range
    pub fn start_date(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.0, 1, 1)
    }

    /// 31 December; `None` for years outside chrono's date range
    pub fn end_date(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.0, 12, 31)
    }
}

impl std::fmt::Display for TaxYear {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
