//! Naira amounts: validation at the input boundary, kobo rounding and display.

use super::error::InvalidInputError;
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::de::{self, Visitor};
use serde::Deserializer;
use std::str::FromStr;

/// Decimal places of a kobo, the smallest Naira unit.
pub const KOBO_DP: u32 = 2;

/// Round to the nearest kobo, halves away from zero.
///
/// Applied once to each figure a calculation returns, never to
/// intermediate values.
pub fn to_kobo(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(KOBO_DP, RoundingStrategy::MidpointAwayFromZero)
}

/// Largest amount the engine accepts: ₦1 quadrillion. Sums and products of
/// amounts in this range stay well inside `Decimal`.
pub const MAX_AMOUNT: Decimal = dec!(1000000000000000);

/// Reject negative amounts and amounts above [`MAX_AMOUNT`].
pub fn ensure_valid_amount(
    field: &'static str,
    amount: Decimal,
) -> Result<Decimal, InvalidInputError> {
    if amount.is_sign_negative() && !amount.is_zero() {
        return Err(InvalidInputError::Negative {
            field,
            value: amount,
        });
    }
    if amount > MAX_AMOUNT {
        return Err(InvalidInputError::TooLarge {
            field,
            max: MAX_AMOUNT,
        });
    }
    Ok(amount)
}

/// Convert a floating point amount, rejecting NaN, infinities and negatives.
pub fn naira_from_f64(field: &'static str, value: f64) -> Result<Decimal, InvalidInputError> {
    if !value.is_finite() {
        return Err(InvalidInputError::NotFinite { field });
    }
    let amount = Decimal::from_f64(value).ok_or_else(|| InvalidInputError::Unparseable {
        field,
        input: value.to_string(),
    })?;
    ensure_valid_amount(field, amount)
}

/// Parse a user-entered amount such as `5,000,000` or `₦1,200,000.50`.
///
/// At most one leading sign is allowed, before the optional `₦`. Thousands
/// separators must split the whole part into groups of three digits.
pub fn parse_naira(field: &'static str, text: &str) -> Result<Decimal, InvalidInputError> {
    let unparseable = || InvalidInputError::Unparseable {
        field,
        input: text.to_string(),
    };

    let trimmed = text.trim();
    let (negative, unsigned) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };
    let body = unsigned.strip_prefix('₦').unwrap_or(unsigned).trim();

    if body.is_empty() {
        return Err(InvalidInputError::Empty { field });
    }
    if body.starts_with(['+', '-']) {
        return Err(unparseable());
    }
    if matches!(
        body.to_ascii_lowercase().as_str(),
        "nan" | "inf" | "infinity"
    ) {
        return Err(InvalidInputError::NotFinite { field });
    }

    let digits = strip_separators(body).ok_or_else(unparseable)?;
    let amount = Decimal::from_str(&digits)
        .or_else(|_| Decimal::from_scientific(&digits))
        .map_err(|_| unparseable())?;
    let amount = if negative && !amount.is_zero() {
        -amount
    } else {
        amount
    };
    ensure_valid_amount(field, amount)
}

fn strip_separators(body: &str) -> Option<String> {
    if !body.contains(',') {
        return Some(body.to_string());
    }
    let (whole, frac) = match body.split_once('.') {
        Some((whole, frac)) => (whole, Some(frac)),
        None => (body, None),
    };
    if frac.is_some_and(|f| f.contains(',')) {
        return None;
    }

    let is_digits = |group: &str| group.chars().all(|c| c.is_ascii_digit());
    let mut groups = whole.split(',');
    let first = groups.next()?;
    if first.is_empty() || first.len() > 3 || !is_digits(first) {
        return None;
    }

    let mut digits = first.to_string();
    for group in groups {
        if group.len() != 3 || !is_digits(group) {
            return None;
        }
        digits.push_str(group);
    }
    if let Some(frac) = frac {
        digits.push('.');
        digits.push_str(frac);
    }
    Some(digits)
}

/// Serde adapter for amounts given as numbers or as text with thousands
/// separators (`"5,000,000"`).
pub fn deserialize_naira<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(NairaVisitor)
}

struct NairaVisitor;

impl<'de> Visitor<'de> for NairaVisitor {
    type Value = Decimal;

    fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "a non-negative Naira amount")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Decimal, E> {
        parse_naira("amount", v).map_err(E::custom)
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Decimal, E> {
        ensure_valid_amount("amount", Decimal::from(v)).map_err(E::custom)
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Decimal, E> {
        ensure_valid_amount("amount", Decimal::from(v)).map_err(E::custom)
    }

    // Shortest round-trip text avoids carrying binary noise into the Decimal.
    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Decimal, E> {
        if !v.is_finite() {
            return Err(E::custom(InvalidInputError::NotFinite { field: "amount" }));
        }
        parse_naira("amount", &v.to_string()).map_err(E::custom)
    }
}

/// Format as `₦1,234,567.89`.
pub fn format_naira(amount: Decimal) -> String {
    let rounded = to_kobo(amount);
    let digits = format!("{:.2}", rounded.abs());
    let (whole, frac) = digits.split_once('.').unwrap_or((digits.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    format!("{sign}₦{grouped}.{frac}")
}

/// Format a fraction (`0.075`) as a percentage (`7.5%`).
pub fn format_rate(rate: Decimal) -> String {
    format!("{}%", (rate * Decimal::ONE_HUNDRED).normalize())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn kobo_rounding_is_half_away_from_zero() {
        assert_eq!(to_kobo(dec!(0.125)), dec!(0.13));
        assert_eq!(to_kobo(dec!(0.135)), dec!(0.14));
        assert_eq!(to_kobo(dec!(0.1249)), dec!(0.12));
    }

    #[test]
    fn parse_accepts_separators_and_symbol() {
        assert_eq!(parse_naira("gross", "5,000,000").unwrap(), dec!(5000000));
        assert_eq!(parse_naira("gross", " ₦1,200,000.50 ").unwrap(), dec!(1200000.50));
        assert_eq!(parse_naira("gross", "0").unwrap(), dec!(0));
        assert_eq!(parse_naira("gross", "1e6").unwrap(), dec!(1000000));
    }

    #[test]
    fn parse_rejects_bad_input() {
        assert_eq!(
            parse_naira("gross", "-1"),
            Err(InvalidInputError::Negative {
                field: "gross",
                value: dec!(-1)
            })
        );
        assert_eq!(
            parse_naira("gross", "NaN"),
            Err(InvalidInputError::NotFinite { field: "gross" })
        );
        assert_eq!(
            parse_naira("gross", "-inf"),
            Err(InvalidInputError::NotFinite { field: "gross" })
        );
        assert_eq!(
            parse_naira("gross", ""),
            Err(InvalidInputError::Empty { field: "gross" })
        );
        assert!(matches!(
            parse_naira("gross", "five million"),
            Err(InvalidInputError::Unparseable { .. })
        ));
    }

    #[test]
    fn parse_allows_a_single_leading_sign() {
        assert_eq!(parse_naira("amount", "+5").unwrap(), dec!(5));
        assert!(matches!(
            parse_naira("amount", "-₦5"),
            Err(InvalidInputError::Negative { .. })
        ));
        for text in ["+-5", "-₦-5", "--5", "₦-5", "-+5"] {
            assert!(
                matches!(
                    parse_naira("amount", text),
                    Err(InvalidInputError::Unparseable { .. })
                ),
                "{text} should be rejected"
            );
        }
    }

    #[test]
    fn parse_rejects_misplaced_separators() {
        for text in ["1,2,3", ",500", "1000,000", "1,000,", "12345,678", "1,000.5,0"] {
            assert!(
                matches!(
                    parse_naira("amount", text),
                    Err(InvalidInputError::Unparseable { .. })
                ),
                "{text} should be rejected"
            );
        }
        assert_eq!(parse_naira("amount", "999,999.99").unwrap(), dec!(999999.99));
    }

    #[test]
    fn parse_rejects_amounts_above_maximum() {
        assert_eq!(
            parse_naira("amount", "79,000,000,000,000,000,000,000,000,000"),
            Err(InvalidInputError::TooLarge {
                field: "amount",
                max: MAX_AMOUNT
            })
        );
        assert_eq!(
            parse_naira("amount", "1,000,000,000,000,000").unwrap(),
            MAX_AMOUNT
        );
    }

    #[test]
    fn negative_zero_is_accepted() {
        assert_eq!(parse_naira("rent", "-0").unwrap(), dec!(0));
    }

    #[test]
    fn from_f64_rejects_non_finite() {
        assert_eq!(
            naira_from_f64("amount", f64::NAN),
            Err(InvalidInputError::NotFinite { field: "amount" })
        );
        assert_eq!(
            naira_from_f64("amount", f64::INFINITY),
            Err(InvalidInputError::NotFinite { field: "amount" })
        );
        assert!(matches!(
            naira_from_f64("amount", -0.5),
            Err(InvalidInputError::Negative { .. })
        ));
        assert_eq!(naira_from_f64("amount", 1500.25).unwrap(), dec!(1500.25));
    }

    #[test]
    fn naira_display() {
        assert_eq!(format_naira(dec!(0)), "₦0.00");
        assert_eq!(format_naira(dec!(999)), "₦999.00");
        assert_eq!(format_naira(dec!(1000)), "₦1,000.00");
        assert_eq!(format_naira(dec!(10430000)), "₦10,430,000.00");
        assert_eq!(format_naira(dec!(123456.785)), "₦123,456.79");
        assert_eq!(format_naira(dec!(-2500)), "-₦2,500.00");
    }

    #[test]
    fn rate_display() {
        assert_eq!(format_rate(dec!(0.075)), "7.5%");
        assert_eq!(format_rate(dec!(0.15)), "15%");
        assert_eq!(format_rate(dec!(0)), "0%");
    }
}
