//! VAT command - VAT on a transaction and how the revenue is shared

use super::print_json;
use clap::Args;
use serde::Serialize;
use taxpaddy::core::ng::VAT_RATE;
use taxpaddy::core::{calculate_vat, format_naira, format_rate, VatInput, VatResult, VatSharing};

#[derive(Args, Debug)]
pub struct VatCommand {
    /// Transaction amount in Naira
    #[arg(short, long, allow_hyphen_values = true)]
    amount: String,

    /// The amount already includes VAT
    #[arg(short, long)]
    inclusive: bool,

    /// Output as JSON instead of formatted text
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Serialize)]
struct VatOutput {
    inclusive: bool,
    #[serde(flatten)]
    result: VatResult,
    sharing: VatSharing,
}

impl VatCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        let input = VatInput::parse(&self.amount, self.inclusive)?;
        let result = calculate_vat(&input)?;

        if self.json {
            print_json(&VatOutput {
                inclusive: self.inclusive,
                result,
                sharing: result.sharing(),
            })
        } else {
            self.print_text(&result);
            Ok(())
        }
    }

    fn print_text(&self, result: &VatResult) {
        let sharing = result.sharing();

        println!();
        println!("VALUE ADDED TAX ({})", format_rate(VAT_RATE));
        println!();
        println!("  VAT amount: {}", format_naira(result.vat_amount));
        if self.inclusive {
            println!("  Original base: {}", format_naira(result.net_amount));
        } else {
            println!("  Total with VAT: {}", format_naira(result.gross_amount));
        }
        println!();
        println!("REVENUE SHARING");
        println!("  Federal: {}", format_naira(sharing.federal));
        println!("  State:   {}", format_naira(sharing.state));
        println!("  Local:   {}", format_naira(sharing.local));
        println!();
    }
}
