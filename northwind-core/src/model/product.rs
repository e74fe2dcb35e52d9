use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::OrDash;

/// Row of the `Products` table.
///
/// `product_id` is assigned by the server on insert: it is `None` for a
/// product built in memory and `Some` once read back or inserted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub product_id: Option<i32>,
    pub product_name: String,
    pub supplier_id: Option<i32>,
    pub category_id: Option<i32>,
    pub quantity_per_unit: Option<String>,
    pub unit_price: Option<Decimal>,
    pub units_in_stock: Option<i32>,
    pub units_on_order: Option<i32>,
    pub reorder_level: Option<i32>,
    /// 0 for an active product, 1 for a discontinued one.
    pub discontinued: i32,
}

impl Product {
    pub fn new(product_name: impl Into<String>) -> Self {
        Self {
            product_name: product_name.into(),
            ..Default::default()
        }
    }

    pub fn is_discontinued(&self) -> bool {
        self.discontinued != 0
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:>4} {} | {} | {} | in stock {}, on order {}",
            OrDash(&self.product_id),
            self.product_name,
            OrDash(&self.quantity_per_unit),
            OrDash(&self.unit_price),
            OrDash(&self.units_in_stock),
            OrDash(&self.units_on_order),
        )?;
        if self.is_discontinued() {
            f.write_str(" (discontinued)")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn fresh_product_has_no_key() {
        let product = Product::new("Marzipan Chocolate Bar");
        assert_eq!(product.product_id, None);
        assert!(!product.is_discontinued());
    }

    #[test]
    fn price_compares_by_value() {
        let mut stored = Product::new("Chai");
        stored.unit_price = Some(Decimal::from_str("4.4400").unwrap());
        let mut typed = Product::new("Chai");
        typed.unit_price = Some(Decimal::from_str("4.44").unwrap());
        assert_eq!(stored, typed);
    }

    #[test]
    fn display_flags_discontinued() {
        let mut product = Product::new("Chef Anton's Gumbo Mix");
        product.product_id = Some(5);
        product.discontinued = 1;
        let line = product.to_string();
        assert!(line.starts_with("   5 Chef Anton's Gumbo Mix"));
        assert!(line.ends_with("(discontinued)"));
    }
}
