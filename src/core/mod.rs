pub mod cit;
pub mod deadlines;
pub mod error;
pub mod money;
pub mod ng;
pub mod pit;
pub mod turnover;
pub mod vat;

// Flat public surface for domain types and functions.
pub use cit::{calculate_cit, CitInput, CitResult, CompanySize};
pub use deadlines::{next_deadline, upcoming_deadlines, Deadline, DeadlineKind};
pub use error::InvalidInputError;
pub use money::{format_naira, format_rate, naira_from_f64, parse_naira, to_kobo};
pub use ng::TaxYear;
pub use pit::{calculate_pit, rent_relief, BandCharge, PitInput, PitResult};
pub use turnover::{
    read_entries_csv, read_entries_json, turnover_status, CsvField, EntryKind, TurnoverEntry,
    TurnoverInput, TurnoverStatus,
};
pub use vat::{calculate_vat, vat_sharing, VatInput, VatResult, VatSharing};
