use std::fmt;

use serde::{Deserialize, Serialize};

use super::OrDash;

/// Row of the `Shippers` table. `shipper_id` is server-generated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shipper {
    pub shipper_id: Option<i32>,
    pub company_name: String,
    pub phone: Option<String>,
}

impl Shipper {
    pub fn new(company_name: impl Into<String>, phone: Option<String>) -> Self {
        Self {
            shipper_id: None,
            company_name: company_name.into(),
            phone,
        }
    }
}

impl fmt::Display for Shipper {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:>4} {} | {}",
            OrDash(&self.shipper_id),
            self.company_name,
            OrDash(&self.phone)
        )
    }
}
