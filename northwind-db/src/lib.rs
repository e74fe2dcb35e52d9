//! northwind-db: data-access layer for the Northwind schema
//!
//! # Design Principles
//!
//! - The pool is passed to each accessor explicitly; there is no global handle
//! - One pooled connection per call, returned on every exit path
//! - Every statement binds its values; no SQL is assembled from record data
//! - Each entity declares its column mapping once; statements and row
//!   materialization are derived from it
//! - Callers can tell "no such row" apart from "database unreachable"

pub mod error;
pub mod pool;
pub mod repos;
pub mod sql;
pub mod table;

pub use error::{DbError, ErrorKind, Operation, Target};
pub use pool::{check_connection, connect_lazy, connect_options, create_pool};
pub use repos::{CustomerRepo, ProductRepo, ShipperRepo, TableRepo};
pub use table::{Column, Entity, KeyStrategy};

pub use northwind_core::{Customer, Product, Shipper};
