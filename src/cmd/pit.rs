//! PIT command - rent relief, taxable income and income tax by band

use super::{print_json, print_table};
use clap::Args;
use rust_decimal::Decimal;
use serde::Serialize;
use tabled::Tabled;
use taxpaddy::core::{calculate_pit, format_naira, format_rate, PitInput, PitResult};

#[derive(Args, Debug)]
pub struct PitCommand {
    /// Gross annual income in Naira (e.g. 5,000,000)
    #[arg(short, long, allow_hyphen_values = true)]
    gross: String,

    /// Annual rent paid, used for rent relief
    #[arg(short, long, default_value = "0", allow_hyphen_values = true)]
    rent: String,

    /// Output as JSON instead of formatted text
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Serialize)]
struct PitOutput<'a> {
    #[serde(flatten)]
    result: &'a PitResult,
    monthly_tax: Decimal,
    effective_rate: Decimal,
}

#[derive(Debug, Clone, Tabled)]
struct BandRow {
    #[tabled(rename = "Band")]
    band: String,
    #[tabled(rename = "Rate")]
    rate: String,
    #[tabled(rename = "Taxed")]
    taxed: String,
    #[tabled(rename = "Tax")]
    tax: String,
}

impl PitCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        let input = PitInput::parse(&self.gross, &self.rent)?;
        let result = calculate_pit(&input)?;

        if self.json {
            print_json(&PitOutput {
                result: &result,
                monthly_tax: result.monthly_tax(),
                effective_rate: result.effective_rate(),
            })
        } else {
            self.print_text(&result);
            Ok(())
        }
    }

    fn print_text(&self, result: &PitResult) {
        println!();
        println!("PERSONAL INCOME TAX");
        println!();
        println!("  Gross income:   {}", format_naira(result.gross));
        println!("  Rent relief:    {}", format_naira(result.relief));
        println!("  Taxable income: {}", format_naira(result.taxable));
        println!();

        if !result.bands.is_empty() {
            let rows = result
                .bands
                .iter()
                .map(|b| BandRow {
                    band: match b.upper {
                        Some(upper) => format!("{} - {}", format_naira(b.lower), format_naira(upper)),
                        None => format!("above {}", format_naira(b.lower)),
                    },
                    rate: format_rate(b.rate),
                    taxed: format_naira(b.taxed),
                    tax: format_naira(b.tax),
                })
                .collect();
            print_table(rows);
            println!();
        }

        println!(
            "TOTAL TAX PAYABLE: {} (monthly PAYE {}, effective rate {})",
            format_naira(result.tax),
            format_naira(result.monthly_tax()),
            format_rate(result.effective_rate())
        );
        println!();
    }
}
