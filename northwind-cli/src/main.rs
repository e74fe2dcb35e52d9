//! northwind CLI - browse and edit the Northwind sample database
//!
//! Wires the connection provider to the entity accessors:
//! - `overview` lists customers, products and shippers
//! - `customers`, `products`, `shippers` expose list/get/add/update/delete
//! - `check` verifies the server is reachable

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use northwind_db::connect_lazy;

mod commands;
mod config;
mod tracing_setup;

use commands::Format;
use config::ConnectionArgs;
use tracing_setup::TracingConfig;

#[derive(Parser, Debug)]
#[command(
    name = "northwind",
    author,
    version,
    about = "Browse and edit the Northwind sample database",
    long_about = "Create, read, update and delete Northwind customers, products and shippers. \
                  Connection settings come from ~/.northwind/config.toml, NORTHWIND_* \
                  environment variables (or a .env file) and the flags below, in increasing priority."
)]
struct Cli {
    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(long, global = true)]
    debug: bool,

    /// Output format
    #[arg(long, global = true, value_enum, default_value_t = Format::Text)]
    format: Format,

    #[command(flatten)]
    connection: ConnectionArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List customers, products and shippers
    Overview,
    /// Customer operations (list, get, add, update, delete)
    Customers(commands::customers::CustomersArgs),
    /// Product operations (list, get, add, update, delete)
    Products(commands::products::ProductsArgs),
    /// Shipper operations (list, get, add, update, delete)
    Shippers(commands::shippers::ShippersArgs),
    /// Check that the database is reachable
    Check,
    /// Generate shell completion scripts
    Completions(CompletionsArgs),
}

#[derive(Parser, Debug)]
struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    shell: Shell,
}

#[derive(ValueEnum, Debug, Clone, Copy)]
#[allow(clippy::enum_variant_names)] // PowerShell is a proper noun, not a suffix
enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    tracing_setup::init(&TracingConfig { debug: cli.debug }).ok();

    let command = match cli.command {
        Commands::Completions(args) => return run_completions(args),
        command => command,
    };

    let db_config = config::resolve(&cli.connection)?;
    let pool = connect_lazy(&db_config).context("Failed to configure connection pool")?;

    match command {
        Commands::Overview => commands::run_overview(&pool, cli.format).await?,
        Commands::Customers(args) => commands::run_customers(&pool, args, cli.format).await?,
        Commands::Products(args) => commands::run_products(&pool, args, cli.format).await?,
        Commands::Shippers(args) => commands::run_shippers(&pool, args, cli.format).await?,
        Commands::Check => commands::run_check(&pool, &db_config, cli.format).await?,
        Commands::Completions(args) => run_completions(args)?,
    }

    pool.close().await;
    Ok(())
}

fn run_completions(args: CompletionsArgs) -> Result<()> {
    use clap::CommandFactory;
    use clap_complete::{generate, Shell as CompletionShell};
    use std::io;

    let mut cmd = Cli::command();
    let bin_name = cmd.get_name().to_string();

    let shell = match args.shell {
        Shell::Bash => CompletionShell::Bash,
        Shell::Zsh => CompletionShell::Zsh,
        Shell::Fish => CompletionShell::Fish,
        Shell::PowerShell => CompletionShell::PowerShell,
        Shell::Elvish => CompletionShell::Elvish,
    };

    generate(shell, &mut cmd, bin_name, &mut io::stdout());

    Ok(())
}
