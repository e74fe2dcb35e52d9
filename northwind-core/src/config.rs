//! Connection settings for the Northwind database.
//!
//! Resolution order, lowest to highest priority:
//! 1. built-in defaults
//! 2. `~/.northwind/config.toml` (`[database]` table)
//! 3. `NORTHWIND_*` environment variables
//! 4. CLI flags (applied by the binary)

use std::env;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ConfigError, Result};

/// MySQL's standard port, used when the address has none.
pub const DEFAULT_PORT: u16 = 3306;

const DEFAULT_MAX_CONNECTIONS: u32 = 5;
const DEFAULT_ACQUIRE_TIMEOUT_SECS: u64 = 30;

/// Longest pool acquire timeout accepted, in seconds.
pub const MAX_ACQUIRE_TIMEOUT_SECS: u64 = 3600;

pub const ENV_ADDRESS: &str = "NORTHWIND_ADDRESS";
pub const ENV_DATABASE: &str = "NORTHWIND_DATABASE";
pub const ENV_USERNAME: &str = "NORTHWIND_USERNAME";
pub const ENV_PASSWORD: &str = "NORTHWIND_PASSWORD";

/// Top-level config file layout
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NorthwindConfig {
    pub database: DatabaseConfig,
}

/// Where and as whom to connect
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// `host` or `host:port`; IPv6 hosts go in brackets (`[::1]:3306`)
    pub address: String,
    pub database: String,
    pub username: String,
    pub password: String,
    pub max_connections: u32,
    pub acquire_timeout_secs: u64,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            address: format!("localhost:{DEFAULT_PORT}"),
            database: "northwind".to_string(),
            username: "root".to_string(),
            password: String::new(),
            max_connections: DEFAULT_MAX_CONNECTIONS,
            acquire_timeout_secs: DEFAULT_ACQUIRE_TIMEOUT_SECS,
        }
    }
}

// Keeps the password out of logs and panic messages.
impl fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("address", &self.address)
            .field("database", &self.database)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("max_connections", &self.max_connections)
            .field("acquire_timeout_secs", &self.acquire_timeout_secs)
            .finish()
    }
}

impl DatabaseConfig {
    /// Split `address` into host and port.
    pub fn host_port(&self) -> Result<(String, u16)> {
        parse_address(&self.address)
    }

    /// Pool acquire timeout, clamped to `1..=MAX_ACQUIRE_TIMEOUT_SECS` seconds.
    pub fn acquire_timeout(&self) -> Duration {
        Duration::from_secs(self.acquire_timeout_secs.clamp(1, MAX_ACQUIRE_TIMEOUT_SECS))
    }

    /// Check every setting a pool is built from.
    pub fn validate(&self) -> Result<()> {
        self.host_port()?;
        if !(1..=MAX_ACQUIRE_TIMEOUT_SECS).contains(&self.acquire_timeout_secs) {
            return Err(ConfigError::InvalidTimeout {
                secs: self.acquire_timeout_secs,
                max: MAX_ACQUIRE_TIMEOUT_SECS,
            });
        }
        Ok(())
    }

    /// Overlay `NORTHWIND_*` variables from the process environment.
    pub fn apply_env(&mut self) {
        self.apply_overrides(|key| env::var(key).ok());
    }

    /// Overlay values from `lookup`, keyed by the `NORTHWIND_*` names.
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(address) = lookup(ENV_ADDRESS) {
            self.address = address;
        }
        if let Some(database) = lookup(ENV_DATABASE) {
            self.database = database;
        }
        if let Some(username) = lookup(ENV_USERNAME) {
            self.username = username;
        }
        if let Some(password) = lookup(ENV_PASSWORD) {
            self.password = password;
        }
    }
}

impl NorthwindConfig {
    /// Load `~/.northwind/config.toml` when it exists, then apply the environment.
    pub fn load() -> Result<Self> {
        let path = Self::config_path();
        let mut config = if path.exists() {
            Self::load_from(&path)?
        } else {
            debug!("no config file at {}, using defaults", path.display());
            Self::default()
        };
        config.database.apply_env();
        Ok(config)
    }

    /// Parse a config file without consulting the environment.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("loaded config from {}", path.display());
        Ok(config)
    }

    /// `~/.northwind`
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".northwind")
    }

    /// `~/.northwind/config.toml`
    pub fn config_path() -> PathBuf {
        Self::config_dir().join("config.toml")
    }
}

fn parse_address(address: &str) -> Result<(String, u16)> {
    let address = address.trim();
    if address.is_empty() {
        return Err(ConfigError::invalid_address(address, "address is empty"));
    }

    let (host, port) = if let Some(rest) = address.strip_prefix('[') {
        let (host, tail) = rest
            .split_once(']')
            .ok_or_else(|| ConfigError::invalid_address(address, "unclosed '['"))?;
        match tail {
            "" => (host, None),
            _ => match tail.strip_prefix(':') {
                Some(port) => (host, Some(port)),
                None => {
                    return Err(ConfigError::invalid_address(
                        address,
                        "expected ':' after ']'",
                    ))
                }
            },
        }
    } else if address.matches(':').count() > 1 {
        // bare IPv6 literal, no port
        (address, None)
    } else {
        match address.split_once(':') {
            Some((host, port)) => (host, Some(port)),
            None => (address, None),
        }
    };

    if host.is_empty() {
        return Err(ConfigError::invalid_address(address, "host is empty"));
    }

    let port = match port {
        None => DEFAULT_PORT,
        Some(port) => port
            .parse::<u16>()
            .ok()
            .filter(|p| *p != 0)
            .ok_or_else(|| {
                ConfigError::invalid_address(address, format!("invalid port '{port}'"))
            })?,
    };

    Ok((host.to_string(), port))
}
