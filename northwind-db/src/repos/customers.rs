//! `Customers` table mapping

use northwind_core::Customer;

use super::TableRepo;
use crate::table::{column, Column, Entity, KeyStrategy};

/// Accessor for `Customers`, keyed by the caller-chosen `CustomerID`.
pub type CustomerRepo<'a> = TableRepo<'a, Customer>;

static COLUMNS: [Column<Customer>; 10] = [
    column!("CompanyName" => company_name),
    column!("ContactName" => contact_name),
    column!("ContactTitle" => contact_title),
    column!("Address" => address),
    column!("City" => city),
    column!("Region" => region),
    column!("PostalCode" => postal_code),
    column!("Country" => country),
    column!("Phone" => phone),
    column!("Fax" => fax),
];

impl Entity for Customer {
    type Key = String;

    const NAME: &'static str = "customer";
    const TABLE: &'static str = "Customers";
    const KEY_COLUMN: &'static str = "CustomerID";
    const KEY_STRATEGY: KeyStrategy<String> = KeyStrategy::Supplied;

    fn columns() -> &'static [Column<Self>] {
        &COLUMNS
    }

    // An empty code is treated as unassigned.
    fn key(&self) -> Option<String> {
        Some(self.customer_id.clone()).filter(|id| !id.is_empty())
    }

    fn set_key(&mut self, key: String) {
        self.customer_id = key;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::mysql::MySqlArguments;
    use sqlx::Arguments;

    #[test]
    fn column_order_matches_table() {
        let names: Vec<_> = Customer::columns().iter().map(|c| c.name).collect();
        assert_eq!(
            names,
            [
                "CompanyName",
                "ContactName",
                "ContactTitle",
                "Address",
                "City",
                "Region",
                "PostalCode",
                "Country",
                "Phone",
                "Fax"
            ]
        );
    }

    #[test]
    fn empty_code_has_no_key() {
        assert_eq!(Customer::default().key(), None);
        assert_eq!(
            Customer::new("ALFKI", "Alfreds Futterkiste").key().as_deref(),
            Some("ALFKI")
        );
    }

    #[test]
    fn binds_one_value_per_column() {
        let customer = Customer::new("ALFKI", "Alfreds Futterkiste");
        let mut args = MySqlArguments::default();
        customer.bind_columns(&mut args).unwrap();
        assert_eq!(args.len(), 10);
    }
}
