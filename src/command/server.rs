//! Server suspension commands.

use clap::Subcommand;
use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::{
    daemon::DaemonClient, data::server::ServerRepository, error::AppError,
    service::suspension::SuspensionService,
};

#[derive(Subcommand)]
pub enum ServerCommands {
    /// Suspend a server and pause its process on the node
    Suspend {
        /// UUID of the server
        uuid: String,
    },
    /// Unsuspend a server and resume its process on the node
    Unsuspend {
        /// UUID of the server
        uuid: String,
    },
    /// Flip the server's current suspension state
    Toggle {
        /// UUID of the server
        uuid: String,
    },
}

pub async fn run(
    db: &DatabaseConnection,
    daemon: &dyn DaemonClient,
    command: ServerCommands,
) -> Result<(), AppError> {
    let (raw_uuid, action) = match &command {
        ServerCommands::Suspend { uuid } => (uuid, Some("suspend")),
        ServerCommands::Unsuspend { uuid } => (uuid, Some("unsuspend")),
        ServerCommands::Toggle { uuid } => (uuid, None),
    };

    let server = resolve_server(db, raw_uuid).await?;

    SuspensionService::new(db, daemon)
        .toggle(&server, action)
        .await?;

    // Read the stored row back so the message reflects what was committed.
    let server = ServerRepository::new(db)
        .find_by_id(server.id)
        .await?
        .ok_or_else(|| AppError::NotFound("Server not found.".to_string()))?;

    if server.suspended {
        println!("Server {} has been suspended.", server.name);
    } else {
        println!("Server {} has been unsuspended.", server.name);
    }

    Ok(())
}

async fn resolve_server(
    db: &DatabaseConnection,
    raw: &str,
) -> Result<entity::server::Model, AppError> {
    let uuid = Uuid::parse_str(raw).map_err(|_| {
        AppError::InvalidArgument(format!(r#""{}" is not a valid server UUID."#, raw))
    })?;

    ServerRepository::new(db)
        .find_by_uuid(uuid)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("No server with the UUID {} was found.", uuid)))
}
