use clap::{Parser, Subcommand};

mod cmd;

#[derive(Parser, Debug)]
#[command(
    name = "taxpaddy",
    version,
    about = "Nigerian Tax Calculator: Personal Income Tax, VAT, CIT and the ₦50m turnover watchdog"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Personal Income Tax with rent relief
    Pit(cmd::pit::PitCommand),
    /// Value Added Tax on a transaction
    Vat(cmd::vat::VatCommand),
    /// Company Income Tax and the small company test
    Cit(cmd::cit::CitCommand),
    /// Track turnover against the ₦50m small company threshold
    Turnover(cmd::turnover::TurnoverCommand),
    /// Upcoming PAYE and VAT remittance deadlines
    Deadlines(cmd::deadlines::DeadlinesCommand),
    /// Print the turnover ledger input format
    Schema(cmd::schema::SchemaCommand),
}

fn main() -> anyhow::Result<()> {
    pretty_env_logger::init();

    let cli = Cli::parse();
    match cli.command {
        Command::Pit(pit) => pit.exec(),
        Command::Vat(vat) => vat.exec(),
        Command::Cit(cit) => cit.exec(),
        Command::Turnover(turnover) => turnover.exec(),
        Command::Deadlines(deadlines) => deadlines.exec(),
        Command::Schema(schema) => schema.exec(),
    }
}
