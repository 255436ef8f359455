//! Company Income Tax and the small company exemption.

use super::error::InvalidInputError;
use super::money::{ensure_valid_amount, parse_naira, to_kobo};
use super::ng::{CIT_RATE, DEVELOPMENT_LEVY_RATE, SMALL_COMPANY_TURNOVER};
use rust_decimal::Decimal;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum CompanySize {
    /// Turnover at or below ₦50m: exempt from CIT
    Small,
    Large,
}

impl CompanySize {
    pub fn from_turnover(turnover: Decimal) -> Self {
        if turnover > SMALL_COMPANY_TURNOVER {
            CompanySize::Large
        } else {
            CompanySize::Small
        }
    }
}

impl std::fmt::Display for CompanySize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CompanySize::Small => write!(f, "Small company"),
            CompanySize::Large => write!(f, "Large company"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct CitInput {
    /// Annual turnover, used for the small company test
    #[schemars(with = "f64")]
    pub turnover: Decimal,
    /// Profit the rates are charged on
    #[schemars(with = "f64")]
    pub assessable_profit: Decimal,
}

impl CitInput {
    pub fn new(turnover: Decimal, assessable_profit: Decimal) -> Self {
        CitInput {
            turnover,
            assessable_profit,
        }
    }

    pub fn parse(turnover: &str, assessable_profit: &str) -> Result<Self, InvalidInputError> {
        Ok(CitInput {
            turnover: parse_naira("turnover", turnover)?,
            assessable_profit: parse_naira("assessable profit", assessable_profit)?,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CitResult {
    pub company_size: CompanySize,
    pub cit: Decimal,
    pub development_levy: Decimal,
    pub total: Decimal,
}

pub fn calculate_cit(input: &CitInput) -> Result<CitResult, InvalidInputError> {
    let turnover = ensure_valid_amount("turnover", input.turnover)?;
    let profit = ensure_valid_amount("assessable profit", input.assessable_profit)?;

    let company_size = CompanySize::from_turnover(turnover);
    let (cit, development_levy) = match company_size {
        CompanySize::Small => (Decimal::ZERO, Decimal::ZERO),
        CompanySize::Large => (
            to_kobo(profit * CIT_RATE),
            to_kobo(profit * DEVELOPMENT_LEVY_RATE),
        ),
    };
    log::debug!("CIT turnover {}: {}", turnover, company_size);

    Ok(CitResult {
        company_size,
        cit,
        development_levy,
        total: cit + development_levy,
    })
}
