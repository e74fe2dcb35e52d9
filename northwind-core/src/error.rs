//! Configuration errors for northwind-core.
//!
//! Library-level errors are `thiserror` enums; the CLI wraps them in
//! `anyhow` at the command boundary.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// Config file exists but could not be read
    #[error("failed to read config file {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Config file is not valid TOML for [`NorthwindConfig`](crate::NorthwindConfig)
    #[error("failed to parse config file {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// A database address that is not `host` or `host:port`
    #[error("invalid database address '{address}': {reason}")]
    InvalidAddress { address: String, reason: String },

    /// A pool acquire timeout outside `1..=max` seconds
    #[error("acquire timeout of {secs}s is out of range (1..={max})")]
    InvalidTimeout { secs: u64, max: u64 },
}

pub type Result<T> = std::result::Result<T, ConfigError>;

impl ConfigError {
    pub fn invalid_address(address: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidAddress {
            address: address.into(),
            reason: reason.into(),
        }
    }
}
