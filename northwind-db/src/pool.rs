//! Connection provider
//!
//! Hands out pooled MySQL connections built from a [`DatabaseConfig`].
//! Accessors borrow the pool and acquire one connection per call; the
//! connection returns to the pool when the guard drops.

use northwind_core::DatabaseConfig;
use sqlx::mysql::{MySqlConnectOptions, MySqlPoolOptions};
use sqlx::{Connection, MySqlPool};
use tracing::{debug, info};

/// Translate settings into driver connect options.
///
/// # Errors
///
/// Returns `sqlx::Error::Configuration` if the address does not parse or a
/// pool limit is out of range.
pub fn connect_options(config: &DatabaseConfig) -> Result<MySqlConnectOptions, sqlx::Error> {
    config
        .validate()
        .map_err(|err| sqlx::Error::Configuration(Box::new(err)))?;
    let (host, port) = config
        .host_port()
        .map_err(|err| sqlx::Error::Configuration(Box::new(err)))?;

    let mut options = MySqlConnectOptions::new()
        .host(&host)
        .port(port)
        .username(&config.username)
        .database(&config.database);
    if !config.password.is_empty() {
        options = options.password(&config.password);
    }
    Ok(options)
}

fn pool_options(config: &DatabaseConfig) -> MySqlPoolOptions {
    MySqlPoolOptions::new()
        .max_connections(config.max_connections.max(1))
        .acquire_timeout(config.acquire_timeout())
}

/// Create a pool and open its first connection.
///
/// # Errors
///
/// Returns an error if the address is invalid or the server cannot be reached.
///
/// # Example
///
/// ```ignore
/// let pool = create_pool(&DatabaseConfig::default()).await?;
/// ```
pub async fn create_pool(config: &DatabaseConfig) -> Result<MySqlPool, sqlx::Error> {
    let options = connect_options(config)?;
    let pool = pool_options(config).connect_with(options).await?;
    info!(
        address = %config.address,
        database = %config.database,
        max_connections = config.max_connections,
        "connected"
    );
    Ok(pool)
}

/// Create a pool without connecting. The first acquire opens a connection,
/// so an unreachable server surfaces as an error from that call instead.
pub fn connect_lazy(config: &DatabaseConfig) -> Result<MySqlPool, sqlx::Error> {
    let options = connect_options(config)?;
    debug!(address = %config.address, "lazy pool created");
    Ok(pool_options(config).connect_lazy_with(options))
}

/// Round-trip a ping over one pooled connection.
pub async fn check_connection(pool: &MySqlPool) -> Result<(), sqlx::Error> {
    let mut conn = pool.acquire().await?;
    conn.ping().await
}
