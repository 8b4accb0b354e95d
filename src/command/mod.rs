//! Operator-facing command-line entry points.
//!
//! Each subcommand resolves a target record from an operator-supplied key,
//! confirms the operation where destructive, and invokes the matching
//! service. Interactive fallbacks (selection, confirmation) only engage
//! when stdin is a terminal; unattended invocations fail fast instead of
//! prompting.

pub mod backup;
pub mod location;
pub mod node;
pub mod server;

use clap::{Parser, Subcommand};

use crate::{config::Config, error::AppError, startup};

/// Control panel for game-server locations, nodes, servers, and backups.
#[derive(Parser)]
#[command(name = "nodeboard", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Manage locations
    #[command(subcommand)]
    Location(location::LocationCommands),
    /// Manage nodes
    #[command(subcommand)]
    Node(node::NodeCommands),
    /// Manage servers
    #[command(subcommand)]
    Server(server::ServerCommands),
    /// Manage backups
    #[command(subcommand)]
    Backup(backup::BackupCommands),
}

/// Loads configuration, connects to the database, and dispatches `cli`.
///
/// The daemon client and archive store are only constructed for the
/// subcommands that talk to them, so e.g. location management works without
/// object storage configured.
pub async fn run(cli: Cli) -> Result<(), AppError> {
    let config = Config::from_env()?;
    let db = startup::connect_to_database(&config).await?;

    match cli.command {
        Commands::Location(command) => location::run(&db, command).await,
        Commands::Node(command) => node::run(&db, command).await,
        Commands::Server(command) => {
            let daemon = startup::setup_daemon_client(&config)?;
            server::run(&db, &daemon, command).await
        }
        Commands::Backup(command) => {
            let daemon = startup::setup_daemon_client(&config)?;
            let archives = startup::setup_archive_store(&config).await?;
            backup::run(&db, &daemon, archives.as_ref(), command).await
        }
    }
}
