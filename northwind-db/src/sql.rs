//! Statement text for each accessor operation
//!
//! Built from an entity's column mapping. Values are never spliced in:
//! every value is a positional `?` bound by the caller in the order the
//! columns appear here. Keyed statements (UPDATE, DELETE, lookups) always
//! end in `WHERE <key> = ?`; there is no builder for an unfiltered one.

use crate::table::Entity;

/// Key column followed by the non-key columns, in declaration order.
pub fn projection<T: Entity>() -> impl Iterator<Item = &'static str> {
    std::iter::once(T::KEY_COLUMN).chain(T::columns().iter().map(|c| c.name))
}

fn join(names: impl Iterator<Item = &'static str>) -> String {
    names.collect::<Vec<_>>().join(", ")
}

fn placeholders(count: usize) -> String {
    vec!["?"; count].join(", ")
}

fn key_filter<T: Entity>() -> String {
    format!("WHERE {} = ?", T::KEY_COLUMN)
}

/// `SELECT <key>, <columns..> FROM <table>`
pub fn select_all<T: Entity>() -> String {
    format!("SELECT {} FROM {}", join(projection::<T>()), T::TABLE)
}

/// `SELECT <key>, <columns..> FROM <table> WHERE <key> = ?`
pub fn select_by_key<T: Entity>() -> String {
    format!("{} {}", select_all::<T>(), key_filter::<T>())
}

/// `SELECT 1 FROM <table> WHERE <key> = ?`
pub fn exists_by_key<T: Entity>() -> String {
    format!("SELECT 1 FROM {} {}", T::TABLE, key_filter::<T>())
}

/// `INSERT INTO <table> (..) VALUES (?, ..)`
///
/// The key column is included only when the caller supplies it.
pub fn insert<T: Entity>() -> String {
    let columns: Vec<&'static str> = if T::KEY_STRATEGY.is_generated() {
        T::columns().iter().map(|c| c.name).collect()
    } else {
        projection::<T>().collect()
    };
    format!(
        "INSERT INTO {} ({}) VALUES ({})",
        T::TABLE,
        columns.join(", "),
        placeholders(columns.len())
    )
}

/// `UPDATE <table> SET <column> = ?, .. WHERE <key> = ?`
///
/// Sets every non-key column; the key itself is never rewritten.
pub fn update_by_key<T: Entity>() -> String {
    let assignments = T::columns()
        .iter()
        .map(|c| format!("{} = ?", c.name))
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        "UPDATE {} SET {} {}",
        T::TABLE,
        assignments,
        key_filter::<T>()
    )
}

/// `DELETE FROM <table> WHERE <key> = ?`
pub fn delete_by_key<T: Entity>() -> String {
    format!("DELETE FROM {} {}", T::TABLE, key_filter::<T>())
}

#[cfg(test)]
mod tests {
    use super::*;
    use northwind_core::{Customer, Product, Shipper};

    fn count_placeholders(sql: &str) -> usize {
        sql.matches('?').count()
    }

    #[test]
    fn select_lists_key_then_columns() {
        assert_eq!(
            select_all::<Shipper>(),
            "SELECT ShipperID, CompanyName, Phone FROM Shippers"
        );
        assert_eq!(
            select_by_key::<Shipper>(),
            "SELECT ShipperID, CompanyName, Phone FROM Shippers WHERE ShipperID = ?"
        );
    }

    #[test]
    fn generated_key_is_left_out_of_insert() {
        assert_eq!(
            insert::<Product>(),
            "INSERT INTO Products (ProductName, SupplierID, CategoryID, QuantityPerUnit, \
             UnitPrice, UnitsInStock, UnitsOnOrder, ReorderLevel, Discontinued) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)"
        );
        assert_eq!(
            insert::<Shipper>(),
            "INSERT INTO Shippers (CompanyName, Phone) VALUES (?, ?)"
        );
    }

    #[test]
    fn supplied_key_is_part_of_insert() {
        let sql = insert::<Customer>();
        assert!(sql.starts_with("INSERT INTO Customers (CustomerID, CompanyName, "));
        assert_eq!(count_placeholders(&sql), 11);
    }

    #[test]
    fn update_sets_every_non_key_column_and_filters_on_key() {
        assert_eq!(
            update_by_key::<Shipper>(),
            "UPDATE Shippers SET CompanyName = ?, Phone = ? WHERE ShipperID = ?"
        );

        let sql = update_by_key::<Product>();
        assert!(!sql.contains("ProductID = ?,"), "key must not be rewritten: {sql}");
        assert!(sql.ends_with("WHERE ProductID = ?"));
        assert_eq!(count_placeholders(&sql), Product::columns().len() + 1);
    }

    #[test]
    fn keyed_statements_always_filter() {
        for sql in [
            delete_by_key::<Customer>(),
            delete_by_key::<Product>(),
            delete_by_key::<Shipper>(),
            update_by_key::<Customer>(),
            exists_by_key::<Customer>(),
        ] {
            assert!(sql.contains(" WHERE "), "unfiltered statement: {sql}");
            assert!(sql.ends_with(" = ?"), "{sql}");
        }
        assert_eq!(
            delete_by_key::<Customer>(),
            "DELETE FROM Customers WHERE CustomerID = ?"
        );
    }

    #[test]
    fn placeholder_count_matches_bound_values() {
        fn check<T: Entity>() {
            let columns = T::columns().len();
            let key_in_insert = usize::from(!T::KEY_STRATEGY.is_generated());
            assert_eq!(count_placeholders(&insert::<T>()), columns + key_in_insert);
            assert_eq!(count_placeholders(&update_by_key::<T>()), columns + 1);
            assert_eq!(count_placeholders(&select_by_key::<T>()), 1);
            assert_eq!(count_placeholders(&select_all::<T>()), 0);
        }
        check::<Customer>();
        check::<Product>();
        check::<Shipper>();
    }
}
