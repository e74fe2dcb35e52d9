use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::OrDash;

/// Row of the `Orders` table.
///
/// Dates are kept as the server renders them (`YYYY-MM-DD HH:MM:SS`).
/// Orders have no accessor; the type exists so callers can
/// carry order data alongside the other records.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub order_id: i32,
    pub customer_id: Option<String>,
    pub employee_id: Option<i32>,
    pub order_date: Option<String>,
    pub required_date: Option<String>,
    pub shipped_date: Option<String>,
    /// Shipper id of the carrier.
    pub ship_via: Option<i32>,
    pub freight: Option<Decimal>,
    pub ship_name: Option<String>,
    pub ship_address: Option<String>,
    pub ship_city: Option<String>,
    pub ship_region: Option<String>,
    pub ship_postal_code: Option<String>,
    pub ship_country: Option<String>,
}

impl Order {
    pub fn new(order_id: i32) -> Self {
        Self {
            order_id,
            ..Default::default()
        }
    }

    pub fn is_shipped(&self) -> bool {
        self.shipped_date.is_some()
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} | ordered {} | shipped {} via {}",
            self.order_id,
            OrDash(&self.customer_id),
            OrDash(&self.order_date),
            OrDash(&self.shipped_date),
            OrDash(&self.ship_via),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unshipped_until_shipped_date_set() {
        let mut order = Order::new(10248);
        assert!(!order.is_shipped());
        order.shipped_date = Some("1996-07-16 00:00:00".into());
        assert!(order.is_shipped());
    }

    #[test]
    fn serializes_with_field_names() {
        let mut order = Order::new(10248);
        order.customer_id = Some("VINET".into());
        let json = serde_json::to_value(&order).unwrap();
        assert_eq!(json["order_id"], 10248);
        assert_eq!(json["customer_id"], "VINET");
        assert!(json["freight"].is_null());
    }
}
