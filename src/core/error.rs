use rust_decimal::Decimal;

/// Input that the engine refuses to compute with.
///
/// This is the only error the calculations raise. It is never retried or
/// clamped: the caller is expected to ask the user to correct the value.
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum InvalidInputError {
    #[error("{field} must not be negative: {value}")]
    Negative { field: &'static str, value: Decimal },
    #[error("{field} must be a finite number")]
    NotFinite { field: &'static str },
    #[error("{field} is not a valid amount: '{input}'")]
    Unparseable { field: &'static str, input: String },
    #[error("{field} must be greater than zero: {value}")]
    NonPositive { field: &'static str, value: Decimal },
    #[error("{field} must not exceed {max}")]
    TooLarge { field: &'static str, max: Decimal },
    #[error("{field} is too large to total")]
    Overflow { field: &'static str },
    #[error("{field} must not be empty")]
    Empty { field: &'static str },
}
