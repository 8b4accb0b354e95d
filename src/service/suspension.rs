use std::str::FromStr;

use sea_orm::DatabaseConnection;

use crate::{
    daemon::{DaemonClient, DaemonCommand},
    data::{node::NodeRepository, server::ServerRepository},
    error::AppError,
};

/// Direction of a suspension toggle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SuspendAction {
    Suspend,
    Unsuspend,
}

impl SuspendAction {
    /// Desired value of the server's suspended flag.
    fn target(self) -> bool {
        matches!(self, SuspendAction::Suspend)
    }
}

impl FromStr for SuspendAction {
    type Err = AppError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw {
            "suspend" => Ok(SuspendAction::Suspend),
            "unsuspend" => Ok(SuspendAction::Unsuspend),
            other => Err(AppError::InvalidArgument(format!(
                r#"Expected one of: "suspend", "unsuspend". Got: "{}""#,
                other
            ))),
        }
    }
}

/// Flips a server's suspended flag and pushes it to the owning node's daemon.
pub struct SuspensionService<'a> {
    db: &'a DatabaseConnection,
    daemon: &'a dyn DaemonClient,
}

impl<'a> SuspensionService<'a> {
    pub fn new(db: &'a DatabaseConnection, daemon: &'a dyn DaemonClient) -> Self {
        Self { db, daemon }
    }

    /// Toggles suspension for `server`.
    ///
    /// `action` of `None` flips whatever the current state is;
    /// `Some("suspend")` / `Some("unsuspend")` force a direction, and any
    /// other value is rejected with a message naming the two valid values.
    /// When the server is already in the requested state this returns
    /// immediately without touching the database or the daemon.
    ///
    /// The flag is committed locally before the daemon sync so the panel is
    /// the source of truth; a failed sync therefore surfaces to the caller
    /// with the local change already in place, and the node converges on the
    /// next successful sync. Two concurrent toggles race benignly: the sync
    /// carries the full desired state and the row update is last-write-wins.
    ///
    /// # Arguments
    /// - `server` - The server to toggle
    /// - `action` - Optional explicit direction, `"suspend"` or `"unsuspend"`
    ///
    /// # Returns
    /// - `Ok(())` - Server already in the desired state, or flag committed
    ///   and daemon synced
    /// - `Err(AppError::InvalidArgument)` - Unrecognized action value
    /// - `Err(AppError)` - Database or daemon failure
    pub async fn toggle(
        &self,
        server: &entity::server::Model,
        action: Option<&str>,
    ) -> Result<(), AppError> {
        let repo = ServerRepository::new(self.db);

        // Decide against the stored row, not the caller's copy.
        let server = repo
            .find_by_id(server.id)
            .await?
            .ok_or_else(|| AppError::NotFound("Server not found.".to_string()))?;

        let action = match action {
            Some(raw) => raw.parse::<SuspendAction>()?,
            None => {
                if server.suspended {
                    SuspendAction::Unsuspend
                } else {
                    SuspendAction::Suspend
                }
            }
        };

        if action.target() == server.suspended {
            return Ok(());
        }

        let node_id = server.node_id;
        let server_uuid = server.uuid;

        let updated = repo.set_suspended(server, action.target()).await?;

        let node = NodeRepository::new(self.db)
            .find_by_id(node_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Node not found.".to_string()))?;

        self.daemon
            .send_command(
                &node,
                DaemonCommand::SyncSuspension {
                    server_uuid,
                    suspended: updated.suspended,
                },
            )
            .await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::daemon::test::RecordingDaemon;
    use reqwest::StatusCode;
    use test_utils::{builder::TestBuilder, factory};

    async fn suspended_flag(db: &DatabaseConnection, id: i32) -> bool {
        ServerRepository::new(db)
            .find_by_id(id)
            .await
            .unwrap()
            .unwrap()
            .suspended
    }

    #[tokio::test]
    async fn server_is_suspended_and_unsuspended() {
        let test = TestBuilder::new()
            .with_panel_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let (_, _, node, server) = factory::helpers::create_server_with_dependencies(db)
            .await
            .unwrap();

        let daemon = RecordingDaemon::new();
        let service = SuspensionService::new(db, &daemon);

        service.toggle(&server, None).await.unwrap();
        assert!(suspended_flag(db, server.id).await);

        service.toggle(&server, Some("unsuspend")).await.unwrap();
        assert!(!suspended_flag(db, server.id).await);

        let sent = daemon.sent();
        assert_eq!(sent.len(), 2);
        assert_eq!(sent[0].node_id, node.id);
        assert_eq!(
            sent[0].command,
            DaemonCommand::SyncSuspension {
                server_uuid: server.uuid,
                suspended: true,
            }
        );
        assert_eq!(
            sent[1].command,
            DaemonCommand::SyncSuspension {
                server_uuid: server.uuid,
                suspended: false,
            }
        );
    }

    #[tokio::test]
    async fn no_action_is_taken_if_suspension_status_is_unchanged() {
        let test = TestBuilder::new()
            .with_panel_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let (_, _, _, server) = factory::helpers::create_server_with_dependencies(db)
            .await
            .unwrap();

        let daemon = RecordingDaemon::new();
        let service = SuspensionService::new(db, &daemon);

        service.toggle(&server, Some("unsuspend")).await.unwrap();
        assert!(!suspended_flag(db, server.id).await);
        assert_eq!(daemon.sent_count(), 0);

        service.toggle(&server, Some("suspend")).await.unwrap();
        service.toggle(&server, Some("suspend")).await.unwrap();

        assert!(suspended_flag(db, server.id).await);
        assert_eq!(daemon.sent_count(), 1);
    }

    #[tokio::test]
    async fn auto_toggle_flips_the_current_state() {
        let test = TestBuilder::new()
            .with_panel_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let (_, _, _, server) = factory::helpers::create_server_with_dependencies(db)
            .await
            .unwrap();

        let daemon = RecordingDaemon::new();
        let service = SuspensionService::new(db, &daemon);

        service.toggle(&server, None).await.unwrap();
        assert!(suspended_flag(db, server.id).await);

        service.toggle(&server, None).await.unwrap();
        assert!(!suspended_flag(db, server.id).await);

        service.toggle(&server, None).await.unwrap();
        assert!(suspended_flag(db, server.id).await);

        assert_eq!(daemon.sent_count(), 3);
    }

    #[tokio::test]
    async fn exception_is_thrown_if_invalid_actions_are_passed() {
        let test = TestBuilder::new()
            .with_panel_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let (_, _, _, server) = factory::helpers::create_server_with_dependencies(db)
            .await
            .unwrap();

        let daemon = RecordingDaemon::new();
        let result = SuspensionService::new(db, &daemon)
            .toggle(&server, Some("foo"))
            .await;

        match result {
            Err(AppError::InvalidArgument(message)) => {
                assert_eq!(message, r#"Expected one of: "suspend", "unsuspend". Got: "foo""#);
            }
            other => panic!("expected invalid argument error, got {:?}", other),
        }
        assert_eq!(daemon.sent_count(), 0);
    }

    #[tokio::test]
    async fn failed_sync_propagates_after_the_local_commit() {
        let test = TestBuilder::new()
            .with_panel_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let (_, _, _, server) = factory::helpers::create_server_with_dependencies(db)
            .await
            .unwrap();

        let daemon = RecordingDaemon::new();
        daemon.fail_next_with_status(StatusCode::BAD_GATEWAY);

        let result = SuspensionService::new(db, &daemon)
            .toggle(&server, Some("suspend"))
            .await;

        assert!(matches!(result, Err(AppError::DaemonErr(_))));
        // The panel-side flag is already committed; the node catches up on
        // the next successful sync.
        assert!(suspended_flag(db, server.id).await);
    }
}
