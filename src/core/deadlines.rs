//! Monthly remittance deadlines for PAYE and VAT.

use super::ng::{PAYE_DUE_DAY, VAT_DUE_DAY};
use chrono::{Datelike, Months, NaiveDate};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum DeadlineKind {
    Paye,
    Vat,
}

impl DeadlineKind {
    pub fn due_day(self) -> u32 {
        match self {
            DeadlineKind::Paye => PAYE_DUE_DAY,
            DeadlineKind::Vat => VAT_DUE_DAY,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            DeadlineKind::Paye => "PAYE Remittance",
            DeadlineKind::Vat => "VAT Remittance",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            DeadlineKind::Paye => "Deadline to remit Pay As You Earn (PAYE) taxes.",
            DeadlineKind::Vat => "Deadline to file and pay Value Added Tax (VAT).",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Deadline {
    pub date: NaiveDate,
    pub kind: DeadlineKind,
    pub title: &'static str,
    pub description: &'static str,
}

impl Deadline {
    fn new(kind: DeadlineKind, date: NaiveDate) -> Self {
        Deadline {
            date,
            kind,
            title: kind.title(),
            description: kind.description(),
        }
    }

    pub fn days_until(&self, today: NaiveDate) -> i64 {
        (self.date - today).num_days()
    }
}

/// The next due date on `day` of the month. A deadline falling today is
/// still upcoming; once it has passed it rolls to the following month.
fn next_monthly(today: NaiveDate, day: u32) -> Option<NaiveDate> {
    match today.with_day(day) {
        Some(this_month) if today <= this_month => Some(this_month),
        _ => today
            .with_day(1)?
            .checked_add_months(Months::new(1))?
            .with_day(day),
    }
}

/// Every upcoming deadline, soonest first.
pub fn upcoming_deadlines(today: NaiveDate) -> Vec<Deadline> {
    let mut deadlines: Vec<Deadline> = [DeadlineKind::Paye, DeadlineKind::Vat]
        .into_iter()
        .filter_map(|kind| next_monthly(today, kind.due_day()).map(|date| Deadline::new(kind, date)))
        .collect();
    deadlines.sort_by_key(|d| d.date);
    deadlines
}

pub fn next_deadline(today: NaiveDate) -> Option<Deadline> {
    upcoming_deadlines(today).into_iter().next()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn paye_comes_first_early_in_the_month() {
        let today = date(2026, 3, 2);
        let deadlines = upcoming_deadlines(today);
        assert_eq!(deadlines.len(), 2);
        assert_eq!(deadlines[0].kind, DeadlineKind::Paye);
        assert_eq!(deadlines[0].date, date(2026, 3, 10));
        assert_eq!(deadlines[1].date, date(2026, 3, 21));
        assert_eq!(deadlines[0].days_until(today), 8);
    }

    #[test]
    fn deadline_due_today_is_still_upcoming() {
        let next = next_deadline(date(2026, 3, 10)).unwrap();
        assert_eq!(next.kind, DeadlineKind::Paye);
        assert_eq!(next.date, date(2026, 3, 10));
        assert_eq!(next.days_until(date(2026, 3, 10)), 0);
    }

    #[test]
    fn paye_rolls_over_after_the_tenth() {
        let next = next_deadline(date(2026, 3, 11)).unwrap();
        assert_eq!(next.kind, DeadlineKind::Vat);
        assert_eq!(next.date, date(2026, 3, 21));

        let deadlines = upcoming_deadlines(date(2026, 3, 11));
        assert_eq!(deadlines[1].date, date(2026, 4, 10));
    }

    #[test]
    fn both_roll_into_next_year_after_december_twenty_first() {
        let deadlines = upcoming_deadlines(date(2026, 12, 22));
        assert_eq!(deadlines[0].date, date(2027, 1, 10));
        assert_eq!(deadlines[1].date, date(2027, 1, 21));
    }

    #[test]
    fn end_of_month_rolls_cleanly() {
        let deadlines = upcoming_deadlines(date(2026, 1, 31));
        assert_eq!(deadlines[0].date, date(2026, 2, 10));
        assert_eq!(deadlines[0].title, "PAYE Remittance");
    }
}
