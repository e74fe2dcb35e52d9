//! Column mapping between records and table rows
//!
//! Each entity declares one static list of [`Column`]s. The SELECT
//! projection, the INSERT and UPDATE column lists, parameter binding and
//! row materialization all walk that same list in the same order, so the
//! SQL text and the values bound to it cannot drift apart.

use std::fmt;

use sqlx::error::BoxDynError;
use sqlx::mysql::{MySqlArguments, MySqlRow};
use sqlx::{Arguments, Decode, Encode, MySql, Row, Type};

/// One non-key column: its name and how to move its value in and out of a record.
pub struct Column<T> {
    pub name: &'static str,
    pub(crate) bind: fn(&T, &mut MySqlArguments) -> Result<(), BoxDynError>,
    pub(crate) read: fn(&mut T, &MySqlRow, &'static str) -> Result<(), sqlx::Error>,
}

impl<T> Column<T> {
    /// Append this column's value from `record` to `args`.
    pub fn bind(&self, record: &T, args: &mut MySqlArguments) -> Result<(), BoxDynError> {
        (self.bind)(record, args)
    }

    /// Decode this column from `row` into `record`.
    pub fn read(&self, record: &mut T, row: &MySqlRow) -> Result<(), sqlx::Error> {
        (self.read)(record, row, self.name)
    }
}

impl<T> fmt::Debug for Column<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Column").field(&self.name).finish()
    }
}

/// Declare a [`Column`] backed by a record field: `column!("CompanyName" => company_name)`.
macro_rules! column {
    ($name:literal => $field:ident) => {
        $crate::table::Column {
            name: $name,
            bind: |record, args| {
                ::sqlx::Arguments::add(args, ::std::clone::Clone::clone(&record.$field))
            },
            read: |record, row, name| {
                record.$field = ::sqlx::Row::try_get(row, name)?;
                ::std::result::Result::Ok(())
            },
        }
    };
}

pub(crate) use column;

/// Who assigns the primary key.
pub enum KeyStrategy<K> {
    /// The caller chooses the key; INSERT binds it like any other column.
    Supplied,
    /// The server assigns the key; INSERT omits it and the accessor reads
    /// `last_insert_id` back through `from_insert_id`.
    Generated { from_insert_id: fn(u64) -> Option<K> },
}

impl<K> KeyStrategy<K> {
    pub fn is_generated(&self) -> bool {
        matches!(self, Self::Generated { .. })
    }
}

/// A record type with a table behind it.
pub trait Entity: Default + Send + Sync + Unpin + 'static {
    /// Primary key value
    type Key: Clone
        + fmt::Display
        + Send
        + Sync
        + 'static
        + for<'q> Encode<'q, MySql>
        + for<'r> Decode<'r, MySql>
        + Type<MySql>;

    /// Lowercase singular name used in errors and logs
    const NAME: &'static str;
    const TABLE: &'static str;
    const KEY_COLUMN: &'static str;
    const KEY_STRATEGY: KeyStrategy<Self::Key>;

    /// Non-key columns in declaration order.
    fn columns() -> &'static [Column<Self>];

    /// The record's key, or `None` if it has not been assigned yet.
    fn key(&self) -> Option<Self::Key>;

    fn set_key(&mut self, key: Self::Key);

    /// Build a record from a row produced by a projection of [`sql::projection`](crate::sql::projection).
    fn from_row(row: &MySqlRow) -> Result<Self, sqlx::Error> {
        let mut record = Self::default();
        record.set_key(row.try_get(Self::KEY_COLUMN)?);
        for column in Self::columns() {
            column.read(&mut record, row)?;
        }
        Ok(record)
    }

    /// Bind every non-key column of `self`, in declaration order.
    fn bind_columns(&self, args: &mut MySqlArguments) -> Result<(), BoxDynError> {
        for column in Self::columns() {
            column.bind(self, args)?;
        }
        Ok(())
    }
}

/// Convert a MySQL `last_insert_id` into an `INT` key. Zero means nothing was generated.
pub(crate) fn generated_i32(id: u64) -> Option<i32> {
    i32::try_from(id).ok().filter(|id| *id > 0)
}

/// Bind a key value after the record columns (UPDATE) or on its own (SELECT, DELETE).
pub(crate) fn bind_key<K>(key: &K, args: &mut MySqlArguments) -> Result<(), BoxDynError>
where
    K: Clone + Send + 'static + for<'q> Encode<'q, MySql> + Type<MySql>,
{
    args.add(key.clone())
}
