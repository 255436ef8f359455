//! Schema command - print the expected turnover ledger formats

use clap::Args;
use schemars::schema_for;
use taxpaddy::core::{TurnoverEntry, TurnoverInput};

#[derive(Args, Debug)]
pub struct SchemaCommand {
    /// Output format: json-schema, csv-header or csv-fields
    #[arg(value_enum, default_value = "json-schema")]
    format: SchemaFormat,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum SchemaFormat {
    /// JSON Schema for the JSON ledger format
    JsonSchema,
    /// CSV header row with column names
    CsvHeader,
    /// CSV column descriptions
    CsvFields,
}

impl SchemaCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        match self.format {
            SchemaFormat::JsonSchema => self.print_json_schema(),
            SchemaFormat::CsvHeader => self.print_csv_header(),
            SchemaFormat::CsvFields => self.print_csv_fields(),
        }
    }

    fn print_json_schema(&self) -> anyhow::Result<()> {
        let schema = schema_for!(TurnoverInput);
        println!("{}", serde_json::to_string_pretty(&schema)?);
        Ok(())
    }

    fn print_csv_header(&self) -> anyhow::Result<()> {
        println!("{}", TurnoverEntry::csv_header().join(","));
        Ok(())
    }

    fn print_csv_fields(&self) -> anyhow::Result<()> {
        println!("CSV Ledger Format");
        println!("=================");
        println!();
        for field in TurnoverEntry::csv_schema() {
            let req = if field.required { "required" } else { "optional" };
            println!("{:12} ({:8})  {}", field.name, req, field.description);
        }
        println!();
        println!("Amounts may use thousands separators; quote them in CSV (\"5,000,000\").");
        Ok(())
    }
}
