//! `Products` table mapping

use northwind_core::Product;

use super::TableRepo;
use crate::table::{column, generated_i32, Column, Entity, KeyStrategy};

/// Accessor for `Products`; `ProductID` is assigned by the server.
pub type ProductRepo<'a> = TableRepo<'a, Product>;

static COLUMNS: [Column<Product>; 9] = [
    column!("ProductName" => product_name),
    column!("SupplierID" => supplier_id),
    column!("CategoryID" => category_id),
    column!("QuantityPerUnit" => quantity_per_unit),
    column!("UnitPrice" => unit_price),
    column!("UnitsInStock" => units_in_stock),
    column!("UnitsOnOrder" => units_on_order),
    column!("ReorderLevel" => reorder_level),
    column!("Discontinued" => discontinued),
];

impl Entity for Product {
    type Key = i32;

    const NAME: &'static str = "product";
    const TABLE: &'static str = "Products";
    const KEY_COLUMN: &'static str = "ProductID";
    const KEY_STRATEGY: KeyStrategy<i32> = KeyStrategy::Generated {
        from_insert_id: generated_i32,
    };

    fn columns() -> &'static [Column<Self>] {
        &COLUMNS
    }

    fn key(&self) -> Option<i32> {
        self.product_id
    }

    fn set_key(&mut self, key: i32) {
        self.product_id = Some(key);
    }
}
