//! Deadlines command - upcoming PAYE and VAT remittance dates

use super::{print_json, print_table};
use chrono::{Local, NaiveDate};
use clap::Args;
use serde::Serialize;
use tabled::Tabled;
use taxpaddy::core::{upcoming_deadlines, Deadline};

#[derive(Args, Debug)]
pub struct DeadlinesCommand {
    /// Date to count from (YYYY-MM-DD), defaults to today
    #[arg(short, long)]
    date: Option<NaiveDate>,

    /// Output as JSON instead of formatted table
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Serialize)]
struct DeadlineView {
    #[serde(flatten)]
    deadline: Deadline,
    days_until: i64,
}

#[derive(Debug, Clone, Tabled)]
struct DeadlineRow {
    #[tabled(rename = "Due")]
    date: String,
    #[tabled(rename = "Deadline")]
    title: String,
    #[tabled(rename = "Days")]
    days: i64,
    #[tabled(rename = "Description")]
    description: String,
}

impl DeadlinesCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        let today = self.date.unwrap_or_else(|| Local::now().date_naive());
        let deadlines = upcoming_deadlines(today);
        log::debug!("{} deadlines from {}", deadlines.len(), today);

        if self.json {
            let views: Vec<_> = deadlines
                .into_iter()
                .map(|deadline| DeadlineView {
                    days_until: deadline.days_until(today),
                    deadline,
                })
                .collect();
            return print_json(&views);
        }

        println!();
        println!("UPCOMING DEADLINES (from {})", today.format("%-d %B %Y"));
        println!();
        let rows = deadlines
            .iter()
            .map(|d| DeadlineRow {
                date: d.date.format("%Y-%m-%d").to_string(),
                title: d.title.to_string(),
                days: d.days_until(today),
                description: d.description.to_string(),
            })
            .collect();
        print_table(rows);
        println!();
        Ok(())
    }
}
