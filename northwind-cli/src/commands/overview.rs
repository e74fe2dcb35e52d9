//! Whole-database commands: overview and check

use anyhow::{Context, Result};
use northwind_core::DatabaseConfig;
use northwind_db::{check_connection, CustomerRepo, ProductRepo, ShipperRepo};
use serde_json::json;
use sqlx::MySqlPool;
use tracing::info;

use super::{print_records, Format};

/// List customers, products and shippers in turn.
pub async fn run_overview(pool: &MySqlPool, format: Format) -> Result<()> {
    let customers = CustomerRepo::new(pool).get_all().await?;
    let products = ProductRepo::new(pool).get_all().await?;
    let shippers = ShipperRepo::new(pool).get_all().await?;

    match format {
        Format::Text => {
            println!("Customers ({})", customers.len());
            print_records(&customers, format)?;
            println!();
            println!("Products ({})", products.len());
            print_records(&products, format)?;
            println!();
            println!("Shippers ({})", shippers.len());
            print_records(&shippers, format)?;
        }
        Format::Json => {
            let overview = json!({
                "customers": customers,
                "products": products,
                "shippers": shippers,
            });
            println!("{}", serde_json::to_string_pretty(&overview)?);
        }
    }
    Ok(())
}

/// Acquire one connection and ping the server.
pub async fn run_check(pool: &MySqlPool, config: &DatabaseConfig, format: Format) -> Result<()> {
    check_connection(pool)
        .await
        .with_context(|| format!("Cannot reach {} at {}", config.database, config.address))?;
    info!(address = %config.address, "connection ok");

    match format {
        Format::Text => println!("ok: {} at {}", config.database, config.address),
        Format::Json => println!(
            "{}",
            json!({ "ok": true, "address": config.address, "database": config.database })
        ),
    }
    Ok(())
}
