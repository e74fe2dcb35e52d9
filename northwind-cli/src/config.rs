//! Connection settings for the CLI
//!
//! Layers `.env` files, `~/.northwind/config.toml`, `NORTHWIND_*` variables and
//! command-line flags into one [`DatabaseConfig`].

use anyhow::{Context, Result};
use clap::Args;
use northwind_core::config::MAX_ACQUIRE_TIMEOUT_SECS;
use northwind_core::{DatabaseConfig, NorthwindConfig};
use tracing::debug;

/// Database connection flags, shared by every subcommand
#[derive(Args, Debug, Clone, Default)]
pub struct ConnectionArgs {
    /// Server address as host or host:port
    #[arg(long, global = true, env = "NORTHWIND_ADDRESS", value_name = "HOST[:PORT]")]
    pub address: Option<String>,

    /// Database name
    #[arg(long, global = true, env = "NORTHWIND_DATABASE")]
    pub database: Option<String>,

    /// Database user
    #[arg(long, short = 'u', global = true, env = "NORTHWIND_USERNAME")]
    pub username: Option<String>,

    /// Database password
    #[arg(long, global = true, env = "NORTHWIND_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,

    /// Maximum pooled connections
    #[arg(long, global = true, value_name = "N")]
    pub max_connections: Option<u32>,

    /// Seconds to wait for a pooled connection before giving up (1-3600)
    #[arg(
        long,
        global = true,
        value_name = "SECS",
        value_parser = clap::value_parser!(u64).range(1..=MAX_ACQUIRE_TIMEOUT_SECS)
    )]
    pub acquire_timeout: Option<u64>,
}

impl ConnectionArgs {
    /// Overlay the flags that were given onto `config`.
    pub fn apply(&self, config: &mut DatabaseConfig) {
        if let Some(address) = &self.address {
            config.address = address.clone();
        }
        if let Some(database) = &self.database {
            config.database = database.clone();
        }
        if let Some(username) = &self.username {
            config.username = username.clone();
        }
        if let Some(password) = &self.password {
            config.password = password.clone();
        }
        if let Some(max_connections) = self.max_connections {
            config.max_connections = max_connections;
        }
        if let Some(secs) = self.acquire_timeout {
            config.acquire_timeout_secs = secs;
        }
    }
}

/// Load `.env` files into the process environment.
///
/// The current directory wins over `~/.northwind/.env`; neither overrides
/// variables that are already set.
pub fn load_dotenv() {
    if let Ok(path) = dotenvy::dotenv() {
        debug!("Loaded .env from current directory: {}", path.display());
    }

    let env_file = NorthwindConfig::config_dir().join(".env");
    if env_file.exists() {
        match dotenvy::from_path(&env_file) {
            Ok(()) => debug!("Loaded .env from {}", env_file.display()),
            Err(e) => debug!("Failed to load {}: {}", env_file.display(), e),
        }
    }
}

/// Resolve the effective connection settings.
pub fn resolve(args: &ConnectionArgs) -> Result<DatabaseConfig> {
    load_dotenv();
    let mut config = NorthwindConfig::load()
        .context("Failed to load ~/.northwind/config.toml")?
        .database;
    args.apply(&mut config);
    config.validate().context("Invalid connection settings")?;
    debug!(?config, "resolved connection settings");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn acquire_timeout_flag_is_range_checked() {
        use clap::Parser;

        #[derive(Parser)]
        struct Flags {
            #[command(flatten)]
            connection: ConnectionArgs,
        }

        let flags = Flags::try_parse_from(["northwind", "--acquire-timeout", "3600"]).unwrap();
        assert_eq!(flags.connection.acquire_timeout, Some(3600));

        for bad in ["0", "3601", "18446744073709551615"] {
            assert!(
                Flags::try_parse_from(["northwind", "--acquire-timeout", bad]).is_err(),
                "accepted {bad}"
            );
        }
    }

    #[test]
    fn only_given_flags_override() {
        let args = ConnectionArgs {
            address: Some("db.internal:3307".into()),
            acquire_timeout: Some(2),
            ..Default::default()
        };
        let mut config = DatabaseConfig {
            username: "reporting".into(),
            ..Default::default()
        };
        args.apply(&mut config);

        assert_eq!(config.address, "db.internal:3307");
        assert_eq!(config.acquire_timeout_secs, 2);
        assert_eq!(config.username, "reporting");
        assert_eq!(config.database, "northwind");
    }
}
