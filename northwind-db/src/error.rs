//! Error taxonomy for accessor calls
//!
//! Every error names the entity, operation and (when there is one) key it
//! happened on, so "no such customer" never looks like "database down".

use std::fmt;

use thiserror::Error;

use crate::table::Entity;

/// Accessor operation, used for error context and log fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    GetAll,
    Find,
    Add,
    Update,
    Delete,
}

impl Operation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::GetAll => "get_all",
            Self::Find => "find",
            Self::Add => "add",
            Self::Update => "update",
            Self::Delete => "delete",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What a failed call was doing: `update product '42'`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    pub entity: &'static str,
    pub operation: Operation,
    pub key: Option<String>,
}

impl Target {
    /// Target for a call that addresses the whole table.
    pub fn table<T: Entity>(operation: Operation) -> Self {
        Self {
            entity: T::NAME,
            operation,
            key: None,
        }
    }

    /// Target for a call addressed to one key.
    pub fn keyed<T: Entity>(operation: Operation, key: &T::Key) -> Self {
        Self {
            entity: T::NAME,
            operation,
            key: Some(key.to_string()),
        }
    }

    /// Wrap a driver error raised while executing a statement for this target.
    pub fn fail(&self, source: sqlx::Error) -> DbError {
        DbError::classify(self.clone(), source)
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.operation, self.entity)?;
        if let Some(key) = &self.key {
            write!(f, " '{}'", key)?;
        }
        Ok(())
    }
}

/// Coarse error class for callers that branch on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Connection,
    Statement,
    NotFound,
    MissingKey,
}

/// Accessor error
#[derive(Debug, Error)]
pub enum DbError {
    /// No connection could be acquired, or it broke mid-statement
    #[error("{target}: connection failed: {source}")]
    Connection {
        target: Target,
        #[source]
        source: sqlx::Error,
    },

    /// The server rejected or could not run the statement
    #[error("{target}: statement failed: {source}")]
    Statement {
        target: Target,
        #[source]
        source: sqlx::Error,
    },

    /// Keyed update or delete matched no row
    #[error("{target}: not found")]
    NotFound { target: Target },

    /// Record carries no key, so there is nothing to filter on
    #[error("{target}: record has no key")]
    MissingKey { target: Target },
}

impl DbError {
    /// Acquisition failures are always connection errors, whatever the driver says.
    pub fn connection(target: Target, source: sqlx::Error) -> Self {
        Self::Connection { target, source }
    }

    pub fn statement(target: Target, source: sqlx::Error) -> Self {
        Self::Statement { target, source }
    }

    /// Sort a driver error from statement execution into connection or statement failure.
    pub fn classify(target: Target, source: sqlx::Error) -> Self {
        if is_connection_error(&source) {
            Self::Connection { target, source }
        } else {
            Self::Statement { target, source }
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Connection { .. } => ErrorKind::Connection,
            Self::Statement { .. } => ErrorKind::Statement,
            Self::NotFound { .. } => ErrorKind::NotFound,
            Self::MissingKey { .. } => ErrorKind::MissingKey,
        }
    }

    pub fn target(&self) -> &Target {
        match self {
            Self::Connection { target, .. }
            | Self::Statement { target, .. }
            | Self::NotFound { target }
            | Self::MissingKey { target } => target,
        }
    }

    pub fn is_connection(&self) -> bool {
        self.kind() == ErrorKind::Connection
    }

    pub fn is_not_found(&self) -> bool {
        self.kind() == ErrorKind::NotFound
    }

    /// True when the server refused a row because its key already exists.
    pub fn is_duplicate_key(&self) -> bool {
        match self {
            Self::Statement {
                source: sqlx::Error::Database(db_err),
                ..
            } => db_err.is_unique_violation(),
            _ => false,
        }
    }
}

fn is_connection_error(err: &sqlx::Error) -> bool {
    matches!(
        err,
        sqlx::Error::Io(_)
            | sqlx::Error::Tls(_)
            | sqlx::Error::Protocol(_)
            | sqlx::Error::Configuration(_)
            | sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed
            | sqlx::Error::WorkerCrashed
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use northwind_core::{Customer, Product};
    use std::io;

    #[test]
    fn target_display_names_operation_entity_and_key() {
        let target = Target::keyed::<Product>(Operation::Update, &42);
        assert_eq!(target.to_string(), "update product '42'");

        let target = Target::table::<Customer>(Operation::GetAll);
        assert_eq!(target.to_string(), "get_all customer");
    }

    #[test]
    fn not_found_display() {
        let err = DbError::NotFound {
            target: Target::keyed::<Customer>(Operation::Delete, &"ALFKI".to_string()),
        };
        assert_eq!(err.to_string(), "delete customer 'ALFKI': not found");
        assert!(err.is_not_found());
        assert!(!err.is_connection());
    }

    #[test]
    fn transport_failures_classify_as_connection() {
        let target = Target::keyed::<Product>(Operation::Find, &7);
        let refused = io::Error::new(io::ErrorKind::ConnectionRefused, "refused");

        for source in [
            sqlx::Error::PoolTimedOut,
            sqlx::Error::PoolClosed,
            sqlx::Error::Io(refused),
            sqlx::Error::Protocol("unexpected packet".into()),
        ] {
            let err = target.fail(source);
            assert_eq!(err.kind(), ErrorKind::Connection, "{err}");
        }
    }

    #[test]
    fn row_level_failures_classify_as_statement() {
        let target = Target::table::<Product>(Operation::GetAll);

        let err = target.fail(sqlx::Error::ColumnNotFound("UnitPrice".into()));
        assert_eq!(err.kind(), ErrorKind::Statement);
        assert!(err.to_string().starts_with("get_all product: statement failed"));

        let err = target.fail(sqlx::Error::RowNotFound);
        assert_eq!(err.kind(), ErrorKind::Statement);
        assert!(!err.is_duplicate_key());
    }

    #[test]
    fn acquisition_errors_stay_connection_errors() {
        let target = Target::table::<Customer>(Operation::GetAll);
        let err = DbError::connection(target.clone(), sqlx::Error::RowNotFound);
        assert!(err.is_connection());
        assert_eq!(err.target(), &target);
    }
}
