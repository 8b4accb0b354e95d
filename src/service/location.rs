use sea_orm::DatabaseConnection;

use crate::{
    data::{location::LocationRepository, node::NodeRepository},
    error::AppError,
};

/// Deletes a location once no nodes reference it.
pub struct LocationDeletionService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> LocationDeletionService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Deletes the location with the given id.
    ///
    /// Refused while any node is assigned to the location; nodes have to be
    /// moved or deleted first.
    ///
    /// # Returns
    /// - `Ok(())` - Location removed
    /// - `Err(AppError::HasActiveNodes)` - One or more nodes still reference it
    /// - `Err(AppError)` - Database error
    pub async fn handle(&self, location_id: i32) -> Result<(), AppError> {
        let nodes = NodeRepository::new(self.db)
            .count_for_location(location_id)
            .await?;

        if nodes > 0 {
            return Err(AppError::HasActiveNodes);
        }

        LocationRepository::new(self.db).delete(location_id).await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::{builder::TestBuilder, factory};

    #[tokio::test]
    async fn location_with_nodes_cannot_be_deleted() {
        let test = TestBuilder::new()
            .with_panel_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let location = factory::create_location(db).await.unwrap();
        factory::create_node(db, location.id).await.unwrap();

        let result = LocationDeletionService::new(db).handle(location.id).await;

        assert!(matches!(result, Err(AppError::HasActiveNodes)));
        assert!(LocationRepository::new(db)
            .find_by_id(location.id)
            .await
            .unwrap()
            .is_some());
    }

    #[tokio::test]
    async fn empty_location_is_deleted() {
        let test = TestBuilder::new()
            .with_panel_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let location = factory::create_location(db).await.unwrap();

        LocationDeletionService::new(db)
            .handle(location.id)
            .await
            .unwrap();

        assert!(LocationRepository::new(db)
            .find_by_id(location.id)
            .await
            .unwrap()
            .is_none());
    }
}
