//! Shipper commands
//!
//! Commands: list, get, add, update, delete

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use northwind_db::{Shipper, ShipperRepo};
use sqlx::MySqlPool;

use super::{print_done, print_not_found, print_record, print_records, Format};

#[derive(Parser, Debug)]
pub struct ShippersArgs {
    #[command(subcommand)]
    pub command: ShipperCommands,
}

#[derive(Subcommand, Debug)]
pub enum ShipperCommands {
    /// List every shipper
    List,
    /// Show one shipper by id
    Get(ShipperKeyArgs),
    /// Add a shipper; the server assigns its id
    Add(AddShipperArgs),
    /// Change the company name or phone of a shipper
    Update(UpdateShipperArgs),
    /// Delete a shipper by id
    Delete(ShipperKeyArgs),
}

#[derive(Parser, Debug)]
pub struct ShipperKeyArgs {
    /// Shipper id
    shipper_id: i32,
}

#[derive(Parser, Debug)]
pub struct AddShipperArgs {
    /// Company name
    #[arg(long)]
    company: String,

    /// Phone number
    #[arg(long)]
    phone: Option<String>,
}

#[derive(Parser, Debug)]
pub struct UpdateShipperArgs {
    /// Shipper id
    shipper_id: i32,

    /// Company name
    #[arg(long)]
    company: Option<String>,

    /// Phone number
    #[arg(long)]
    phone: Option<String>,
}

pub async fn run_shippers(pool: &MySqlPool, args: ShippersArgs, format: Format) -> Result<()> {
    let repo = ShipperRepo::new(pool);

    match args.command {
        ShipperCommands::List => {
            let shippers = repo.get_all().await?;
            print_records(&shippers, format)
        }
        ShipperCommands::Get(args) => match repo.find(&args.shipper_id).await? {
            Some(shipper) => print_record(&shipper, format),
            None => print_not_found("shipper", &args.shipper_id, format),
        },
        ShipperCommands::Add(args) => {
            let shipper = repo.add(Shipper::new(args.company, args.phone)).await?;
            if let Some(id) = shipper.shipper_id {
                print_done(format!("added shipper {id}"), format);
            }
            print_record(&shipper, format)
        }
        ShipperCommands::Update(args) => {
            let mut shipper = repo
                .find(&args.shipper_id)
                .await?
                .with_context(|| format!("shipper '{}' not found", args.shipper_id))?;
            if let Some(company) = args.company {
                shipper.company_name = company;
            }
            if args.phone.is_some() {
                shipper.phone = args.phone;
            }
            repo.update(&shipper).await?;
            print_done(format!("updated shipper {}", args.shipper_id), format);
            print_record(&shipper, format)
        }
        ShipperCommands::Delete(args) => {
            repo.delete(&args.shipper_id).await?;
            print_done(format!("deleted shipper {}", args.shipper_id), format);
            Ok(())
        }
    }
}
