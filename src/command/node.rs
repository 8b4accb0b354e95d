//! Node lifecycle commands.

use clap::Subcommand;
use sea_orm::DatabaseConnection;

use crate::{
    data::node::NodeRepository, error::AppError, service::node::NodeDeletionService,
};

#[derive(Subcommand)]
pub enum NodeCommands {
    /// Delete a node from the panel
    Delete {
        /// Name of the node to delete
        name: String,
    },
}

pub async fn run(db: &DatabaseConnection, command: NodeCommands) -> Result<(), AppError> {
    match command {
        NodeCommands::Delete { name } => {
            let node = NodeRepository::new(db)
                .find_by_name(&name)
                .await?
                .ok_or_else(|| {
                    AppError::NotFound(format!("No node with the name {} was found.", name))
                })?;

            NodeDeletionService::new(db).handle(node.id).await?;
            println!("Node {} has been deleted.", node.name);

            Ok(())
        }
    }
}
