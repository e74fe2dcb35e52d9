//! northwind-core: record types and configuration shared by the
//! storage layer and the `northwind` CLI.

pub mod config;
pub mod error;
pub mod model;

pub use config::{DatabaseConfig, NorthwindConfig};
pub use error::{ConfigError, Result};
pub use model::{Customer, Order, Product, Shipper};
