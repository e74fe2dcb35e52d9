//! Northwind record types
//!
//! Plain data holders, one per table row. Foreign keys are carried as
//! identifier values only; nothing here follows them.

pub mod customer;
pub mod order;
pub mod product;
pub mod shipper;

pub use customer::Customer;
pub use order::Order;
pub use product::Product;
pub use shipper::Shipper;

use std::fmt;

/// Writes `value` or `-` when the column is NULL.
pub(crate) struct OrDash<'a, T>(pub &'a Option<T>);

impl<T: fmt::Display> fmt::Display for OrDash<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(value) => value.fmt(f),
            None => f.pad("-"),
        }
    }
}
