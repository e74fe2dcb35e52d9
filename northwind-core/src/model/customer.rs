use std::fmt;

use serde::{Deserialize, Serialize};

use super::OrDash;

/// Row of the `Customers` table.
///
/// `customer_id` is a caller-chosen business code (e.g. `ALFKI`), not a
/// surrogate key, so it is always present, even before the first insert.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub customer_id: String,
    pub company_name: String,
    pub contact_name: Option<String>,
    pub contact_title: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub region: Option<String>,
    pub postal_code: Option<String>,
    pub country: Option<String>,
    pub phone: Option<String>,
    pub fax: Option<String>,
}

impl Customer {
    /// Create a customer with its two required columns; everything else starts NULL.
    pub fn new(customer_id: impl Into<String>, company_name: impl Into<String>) -> Self {
        Self {
            customer_id: customer_id.into(),
            company_name: company_name.into(),
            ..Default::default()
        }
    }
}

impl fmt::Display for Customer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:<6} {} | {} | {}, {} | {}",
            self.customer_id,
            self.company_name,
            OrDash(&self.contact_name),
            OrDash(&self.city),
            OrDash(&self.country),
            OrDash(&self.phone),
        )
    }
}
