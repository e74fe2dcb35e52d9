//! Entity accessors
//!
//! [`TableRepo`] implements the five CRUD operations once, for any
//! [`Entity`]. The per-entity modules declare the column mapping and name
//! the instantiation (`CustomerRepo`, `ProductRepo`, `ShipperRepo`).
//!
//! Each call follows the same shape:
//! - build statement text and bind values before touching the pool
//! - acquire one pooled connection; a failure here is always `DbError::Connection`
//! - run exactly one statement (update may add one existence probe)
//! - the `PoolConnection` drops on every return path, handing the connection back

pub mod customers;
pub mod products;
pub mod shippers;

use std::marker::PhantomData;

use sqlx::error::BoxDynError;
use sqlx::mysql::MySqlArguments;
use sqlx::pool::PoolConnection;
use sqlx::{MySql, MySqlPool};
use tracing::{debug, warn};

use crate::error::{DbError, Operation, Target};
use crate::sql;
use crate::table::{bind_key, Entity, KeyStrategy};

pub use customers::CustomerRepo;
pub use products::ProductRepo;
pub use shippers::ShipperRepo;

/// Generic accessor over one table
pub struct TableRepo<'a, T> {
    pool: &'a MySqlPool,
    _entity: PhantomData<fn() -> T>,
}

impl<'a, T: Entity> TableRepo<'a, T> {
    pub fn new(pool: &'a MySqlPool) -> Self {
        Self {
            pool,
            _entity: PhantomData,
        }
    }

    async fn acquire(&self, target: &Target) -> Result<PoolConnection<MySql>, DbError> {
        self.pool
            .acquire()
            .await
            .map_err(|source| DbError::connection(target.clone(), source))
    }

    /// Every row of the table, in whatever order the server returns them.
    pub async fn get_all(&self) -> Result<Vec<T>, DbError> {
        let target = Target::table::<T>(Operation::GetAll);
        let sql = sql::select_all::<T>();

        let mut conn = self.acquire(&target).await?;
        debug!(entity = T::NAME, %sql, "get_all");
        let rows = sqlx::query(&sql)
            .fetch_all(&mut *conn)
            .await
            .map_err(|e| target.fail(e))?;

        rows.iter()
            .map(T::from_row)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| target.fail(e))
    }

    /// Look a record up by key. `Ok(None)` means no such row.
    pub async fn find(&self, key: &T::Key) -> Result<Option<T>, DbError> {
        let target = Target::keyed::<T>(Operation::Find, key);
        let sql = sql::select_by_key::<T>();

        let mut conn = self.acquire(&target).await?;
        debug!(entity = T::NAME, %key, "find");
        let row = sqlx::query(&sql)
            .bind(key.clone())
            .fetch_optional(&mut *conn)
            .await
            .map_err(|e| target.fail(e))?;

        row.as_ref()
            .map(T::from_row)
            .transpose()
            .map_err(|e| target.fail(e))
    }

    /// Insert `record` and return it with its key populated.
    ///
    /// For a server-generated key any key already on the record is ignored
    /// and replaced by the one the server assigned. For a caller-supplied key
    /// an existing row with the same key fails with a duplicate-key
    /// [`DbError::Statement`].
    pub async fn add(&self, mut record: T) -> Result<T, DbError> {
        let sql = sql::insert::<T>();
        let mut args = MySqlArguments::default();

        let target = match T::KEY_STRATEGY {
            KeyStrategy::Supplied => {
                let key = record.key().ok_or_else(|| DbError::MissingKey {
                    target: Target::table::<T>(Operation::Add),
                })?;
                let target = Target::keyed::<T>(Operation::Add, &key);
                bind_key(&key, &mut args).map_err(|e| encode_error(&target, e))?;
                target
            }
            KeyStrategy::Generated { .. } => Target::table::<T>(Operation::Add),
        };
        record
            .bind_columns(&mut args)
            .map_err(|e| encode_error(&target, e))?;

        let mut conn = self.acquire(&target).await?;
        debug!(entity = T::NAME, "add");
        let result = sqlx::query_with(&sql, args)
            .execute(&mut *conn)
            .await
            .map_err(|e| target.fail(e))?;

        if let KeyStrategy::Generated { from_insert_id } = T::KEY_STRATEGY {
            let id = result.last_insert_id();
            let key = from_insert_id(id).ok_or_else(|| {
                DbError::statement(
                    target.clone(),
                    sqlx::Error::Decode(format!("unusable generated key {id}").into()),
                )
            })?;
            debug!(entity = T::NAME, %key, "generated key assigned");
            record.set_key(key);
        }

        Ok(record)
    }

    /// Write every non-key column of `record` to the row with its key.
    pub async fn update(&self, record: &T) -> Result<(), DbError> {
        let key = record.key().ok_or_else(|| DbError::MissingKey {
            target: Target::table::<T>(Operation::Update),
        })?;
        let target = Target::keyed::<T>(Operation::Update, &key);
        let sql = sql::update_by_key::<T>();

        let mut args = MySqlArguments::default();
        record
            .bind_columns(&mut args)
            .map_err(|e| encode_error(&target, e))?;
        bind_key(&key, &mut args).map_err(|e| encode_error(&target, e))?;

        let mut conn = self.acquire(&target).await?;
        debug!(entity = T::NAME, %key, "update");
        let result = sqlx::query_with(&sql, args)
            .execute(&mut *conn)
            .await
            .map_err(|e| target.fail(e))?;

        match result.rows_affected() {
            1 => Ok(()),
            0 => {
                // MySQL reports changed rows, not matched rows, unless the
                // client negotiated FOUND_ROWS: a no-op rewrite also reads 0.
                let exists = sqlx::query(&sql::exists_by_key::<T>())
                    .bind(key.clone())
                    .fetch_optional(&mut *conn)
                    .await
                    .map_err(|e| target.fail(e))?
                    .is_some();
                if exists {
                    Ok(())
                } else {
                    Err(DbError::NotFound { target })
                }
            }
            n => {
                warn!(entity = T::NAME, %key, rows = n, "keyed update touched more than one row");
                Ok(())
            }
        }
    }

    /// Delete the row with `key`.
    pub async fn delete(&self, key: &T::Key) -> Result<(), DbError> {
        let target = Target::keyed::<T>(Operation::Delete, key);
        let sql = sql::delete_by_key::<T>();

        let mut conn = self.acquire(&target).await?;
        debug!(entity = T::NAME, %key, "delete");
        let result = sqlx::query(&sql)
            .bind(key.clone())
            .execute(&mut *conn)
            .await
            .map_err(|e| target.fail(e))?;

        match result.rows_affected() {
            0 => Err(DbError::NotFound { target }),
            1 => Ok(()),
            n => {
                warn!(entity = T::NAME, %key, rows = n, "keyed delete removed more than one row");
                Ok(())
            }
        }
    }
}

fn encode_error(target: &Target, source: BoxDynError) -> DbError {
    DbError::statement(target.clone(), sqlx::Error::Encode(source))
}
