//! Command implementations for the northwind CLI

pub mod customers;
pub mod overview;
pub mod products;
pub mod shippers;

use std::fmt::Display;

use anyhow::Result;
use clap::ValueEnum;
use serde::Serialize;

pub use customers::run_customers;
pub use overview::{run_check, run_overview};
pub use products::run_products;
pub use shippers::run_shippers;

/// How command results are written to stdout
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Format {
    /// One line per record
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
}

/// Print a list of records.
pub fn print_records<T: Display + Serialize>(records: &[T], format: Format) -> Result<()> {
    match format {
        Format::Text => {
            for record in records {
                println!("{record}");
            }
        }
        Format::Json => println!("{}", serde_json::to_string_pretty(records)?),
    }
    Ok(())
}

/// Print a single record.
pub fn print_record<T: Display + Serialize>(record: &T, format: Format) -> Result<()> {
    match format {
        Format::Text => println!("{record}"),
        Format::Json => println!("{}", serde_json::to_string_pretty(record)?),
    }
    Ok(())
}

/// Report that a lookup found nothing. Not an error for `get`.
pub fn print_not_found(entity: &str, key: &dyn Display, format: Format) -> Result<()> {
    match format {
        Format::Text => println!("{entity} '{key}' not found"),
        Format::Json => println!("null"),
    }
    Ok(())
}

/// Confirmation line for writes, suppressed in JSON mode.
pub fn print_done(message: impl Display, format: Format) {
    if format == Format::Text {
        println!("{message}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use northwind_core::Shipper;

    #[test]
    fn json_output_serializes_records() {
        let shippers = vec![Shipper::new("Speedy Express", Some("(503) 555-9831".into()))];
        let json = serde_json::to_string_pretty(&shippers).unwrap();
        assert!(json.contains("\"company_name\": \"Speedy Express\""));
        print_records(&shippers, Format::Json).unwrap();
    }
}
