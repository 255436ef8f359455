//! CIT command - small company test and Company Income Tax

use super::print_json;
use clap::Args;
use taxpaddy::core::ng::{CIT_RATE, DEVELOPMENT_LEVY_RATE, SMALL_COMPANY_TURNOVER};
use taxpaddy::core::{calculate_cit, format_naira, format_rate, CitInput, CitResult, CompanySize};

#[derive(Args, Debug)]
pub struct CitCommand {
    /// Annual turnover in Naira
    #[arg(short, long, allow_hyphen_values = true)]
    turnover: String,

    /// Assessable profit in Naira
    #[arg(short, long, allow_hyphen_values = true)]
    profit: String,

    /// Output as JSON instead of formatted text
    #[arg(long)]
    json: bool,
}

impl CitCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        let input = CitInput::parse(&self.turnover, &self.profit)?;
        let result = calculate_cit(&input)?;

        if self.json {
            print_json(&result)
        } else {
            print_text(&result);
            Ok(())
        }
    }
}

fn print_text(result: &CitResult) {
    println!();
    println!("COMPANY INCOME TAX");
    println!();
    match result.company_size {
        CompanySize::Small => println!(
            "  {}: turnover at or below {}, exempt from CIT",
            result.company_size,
            format_naira(SMALL_COMPANY_TURNOVER)
        ),
        CompanySize::Large => {
            println!(
                "  {}: turnover above {}",
                result.company_size,
                format_naira(SMALL_COMPANY_TURNOVER)
            );
            println!("  CIT @ {}: {}", format_rate(CIT_RATE), format_naira(result.cit));
            println!(
                "  Development levy @ {}: {}",
                format_rate(DEVELOPMENT_LEVY_RATE),
                format_naira(result.development_levy)
            );
        }
    }
    println!();
    println!("TOTAL PAYABLE: {}", format_naira(result.total));
    println!();
}
