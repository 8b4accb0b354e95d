use sea_orm::DatabaseConnection;

use crate::{
    data::{node::NodeRepository, server::ServerRepository},
    error::AppError,
};

/// Deletes a node once no servers are assigned to it.
///
/// Same guard pattern as location deletion, one level down the
/// location → node → server chain.
pub struct NodeDeletionService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> NodeDeletionService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Deletes the node with the given id.
    ///
    /// # Returns
    /// - `Ok(())` - Node removed
    /// - `Err(AppError::HasActiveServers)` - One or more servers still live on it
    /// - `Err(AppError)` - Database error
    pub async fn handle(&self, node_id: i32) -> Result<(), AppError> {
        let servers = ServerRepository::new(self.db)
            .count_for_node(node_id)
            .await?;

        if servers > 0 {
            return Err(AppError::HasActiveServers);
        }

        NodeRepository::new(self.db).delete(node_id).await?;

        Ok(())
    }
}
