//! `Shippers` table mapping

use northwind_core::Shipper;

use super::TableRepo;
use crate::table::{column, generated_i32, Column, Entity, KeyStrategy};

pub type ShipperRepo<'a> = TableRepo<'a, Shipper>;

static COLUMNS: [Column<Shipper>; 2] = [
    column!("CompanyName" => company_name),
    column!("Phone" => phone),
];

impl Entity for Shipper {
    type Key = i32;

    const NAME: &'static str = "shipper";
    const TABLE: &'static str = "Shippers";
    const KEY_COLUMN: &'static str = "ShipperID";
    const KEY_STRATEGY: KeyStrategy<i32> = KeyStrategy::Generated {
        from_insert_id: generated_i32,
    };

    fn columns() -> &'static [Column<Self>] {
        &COLUMNS
    }

    fn key(&self) -> Option<i32> {
        self.shipper_id
    }

    fn set_key(&mut self, key: i32) {
        self.shipper_id = Some(key);
    }
}
