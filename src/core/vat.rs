//! Value Added Tax at the flat standard rate, and the revenue sharing formula.

use super::error::InvalidInputError;
use super::money::{ensure_valid_amount, naira_from_f64, parse_naira, to_kobo};
use super::ng::{VAT_RATE, VAT_SHARE_FEDERAL, VAT_SHARE_STATE};
use rust_decimal::Decimal;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct VatInput {
    /// Transaction amount
    #[schemars(with = "f64")]
    pub amount: Decimal,
    /// Whether `amount` already contains VAT
    pub inclusive: bool,
}

impl VatInput {
    pub fn new(amount: Decimal, inclusive: bool) -> Self {
        VatInput { amount, inclusive }
    }

    pub fn from_f64(amount: f64, inclusive: bool) -> Result<Self, InvalidInputError> {
        Ok(VatInput {
            amount: naira_from_f64("amount", amount)?,
            inclusive,
        })
    }

    pub fn parse(amount: &str, inclusive: bool) -> Result<Self, InvalidInputError> {
        Ok(VatInput {
            amount: parse_naira("amount", amount)?,
            inclusive,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VatResult {
    pub vat_amount: Decimal,
    /// Amount excluding VAT
    pub net_amount: Decimal,
    /// Amount including VAT
    pub gross_amount: Decimal,
}

impl VatResult {
    pub fn sharing(&self) -> VatSharing {
        share(self.vat_amount)
    }
}

/// Split of VAT revenue between federal, state and local government.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VatSharing {
    pub federal: Decimal,
    pub state: Decimal,
    pub local: Decimal,
}

/// Add VAT to an exclusive amount, or extract it from an inclusive one.
pub fn calculate_vat(input: &VatInput) -> Result<VatResult, InvalidInputError> {
    let amount = ensure_valid_amount("amount", input.amount)?;

    let result = if input.inclusive {
        let vat = to_kobo(amount - amount / (Decimal::ONE + VAT_RATE));
        VatResult {
            vat_amount: vat,
            net_amount: to_kobo(amount) - vat,
            gross_amount: to_kobo(amount),
        }
    } else {
        let vat = to_kobo(amount * VAT_RATE);
        VatResult {
            vat_amount: vat,
            net_amount: to_kobo(amount),
            gross_amount: to_kobo(amount) + vat,
        }
    };

    log::debug!(
        "VAT on {} ({}): {}",
        amount,
        if input.inclusive { "inclusive" } else { "exclusive" },
        result.vat_amount
    );
    Ok(result)
}

/// Apply the 10% / 55% / 35% sharing formula to an amount of VAT collected.
pub fn vat_sharing(vat: Decimal) -> Result<VatSharing, InvalidInputError> {
    let vat = ensure_valid_amount("vat", vat)?;
    Ok(share(vat))
}

// Local government takes the rounding remainder so the shares always add up.
fn share(vat: Decimal) -> VatSharing {
    let vat = to_kobo(vat);
    let federal = to_kobo(vat * VAT_SHARE_FEDERAL);
    let state = to_kobo(vat * VAT_SHARE_STATE);
    VatSharing {
        federal,
        state,
        local: vat - federal - state,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use crate::core::money::MAX_AMOUNT;
    use rust_decimal_macros::dec;

    fn vat(amount: Decimal, inclusive: bool) -> VatResult {
        calculate_vat(&VatInput::new(amount, inclusive)).unwrap()
    }

    #[test]
    fn exclusive_amount_adds_seven_and_a_half_percent() {
        let result = vat(dec!(100000), false);
        assert_eq!(result.vat_amount, dec!(7500));
        assert_eq!(result.net_amount, dec!(100000));
        assert_eq!(result.gross_amount, dec!(107500));
    }

    #[test]
    fn inclusive_amount_extracts_vat() {
        let result = vat(dec!(107500), true);
        assert_eq!(result.vat_amount, dec!(7500));
        assert_eq!(result.net_amount, dec!(100000));
        assert_eq!(result.gross_amount, dec!(107500));
    }

    #[test]
    fn inclusive_extraction_rounds_to_kobo() {
        // 100 - 100 / 1.075 = 6.976744...
        let result = vat(dec!(100), true);
        assert_eq!(result.vat_amount, dec!(6.98));
        assert_eq!(result.net_amount, dec!(93.02));
    }

    #[test]
    fn zero_amount_has_no_vat() {
        assert_eq!(vat(dec!(0), true).vat_amount, dec!(0));
        assert_eq!(vat(dec!(0), false).vat_amount, dec!(0));
    }

    #[test]
    fn negative_amount_rejected() {
        assert_eq!(
            calculate_vat(&VatInput::new(dec!(-0.01), false)),
            Err(InvalidInputError::Negative {
                field: "amount",
                value: dec!(-0.01)
            })
        );
    }

    #[test]
    fn nan_amount_rejected() {
        assert_eq!(
            VatInput::from_f64(f64::NAN, false),
            Err(InvalidInputError::NotFinite { field: "amount" })
        );
        assert_eq!(
            VatInput::parse("NaN", false),
            Err(InvalidInputError::NotFinite { field: "amount" })
        );
    }

    #[test]
    fn oversized_amount_rejected() {
        let amount = VatInput::parse("79,000,000,000,000,000,000,000,000,000", false);
        assert!(matches!(
            amount,
            Err(InvalidInputError::TooLarge { field: "amount", .. })
        ));
        for inclusive in [false, true] {
            assert_eq!(
                calculate_vat(&VatInput::new(Decimal::MAX, inclusive)),
                Err(InvalidInputError::TooLarge {
                    field: "amount",
                    max: MAX_AMOUNT
                })
            );
        }
        assert!(vat_sharing(Decimal::MAX).is_err());
    }

    #[test]
    fn largest_accepted_amount_is_computed() {
        let result = vat(MAX_AMOUNT, false);
        assert_eq!(result.gross_amount, MAX_AMOUNT * dec!(1.075));
    }

    #[test]
    fn sharing_formula() {
        let sharing = vat_sharing(dec!(7500)).unwrap();
        assert_eq!(sharing.federal, dec!(750));
        assert_eq!(sharing.state, dec!(4125));
        assert_eq!(sharing.local, dec!(2625));
    }

    #[test]
    fn sharing_remainder_goes_to_local_government() {
        let sharing = vat_sharing(dec!(0.01)).unwrap();
        assert_eq!(sharing.federal, dec!(0));
        assert_eq!(sharing.state, dec!(0.01));
        assert_eq!(sharing.local, dec!(0));
        assert!(vat_sharing(dec!(-1)).is_err());
    }

    proptest! {
        #[test]
        fn vat_round_trips_through_inclusive_total(kobo in 1i64..1_000_000_000_000i64) {
            let amount = Decimal::new(kobo, 2);
            let added = vat(amount, false).vat_amount;
            let extracted = vat(amount * (Decimal::ONE + VAT_RATE), true).vat_amount;
            prop_assert!((added - extracted).abs() <= dec!(0.01));
        }

        #[test]
        fn inclusive_vat_never_exceeds_amount(kobo in 0i64..1_000_000_000_000i64) {
            let amount = Decimal::new(kobo, 2);
            let result = vat(amount, true);
            prop_assert!(result.vat_amount >= Decimal::ZERO);
            prop_assert!(result.vat_amount <= amount);
            prop_assert_eq!(result.net_amount + result.vat_amount, amount);
        }

        #[test]
        fn shares_sum_to_vat(kobo in 0i64..1_000_000_000_000i64) {
            let collected = Decimal::new(kobo, 2);
            let sharing = vat_sharing(collected).unwrap();
            prop_assert_eq!(sharing.federal + sharing.state + sharing.local, collected);
            prop_assert!(sharing.local >= Decimal::ZERO);
        }
    }
}
