//! Client adapter for the per-node daemon.
//!
//! The panel never supervises processes itself; it issues lifecycle
//! commands to the daemon running on each node. This module defines the
//! commands, the transport-agnostic [`DaemonClient`] capability the
//! reconcilers depend on, and the HTTP implementation bound to a node's
//! `scheme://fqdn:port` endpoint.

mod client;

pub use client::HttpDaemonClient;

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::daemon::DaemonError;

/// A lifecycle command the panel can issue against a node's daemon.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DaemonCommand {
    /// Remove a backup archive held on the node's filesystem.
    DeleteBackup {
        server_uuid: Uuid,
        backup_uuid: Uuid,
    },
    /// Push the desired suspension state for a server.
    ///
    /// Carries the full desired state rather than a delta, so replaying or
    /// reordering syncs converges on the last write.
    SyncSuspension { server_uuid: Uuid, suspended: bool },
}

impl DaemonCommand {
    /// HTTP method the command maps to.
    pub(crate) fn method(&self) -> reqwest::Method {
        match self {
            DaemonCommand::DeleteBackup { .. } => reqwest::Method::DELETE,
            DaemonCommand::SyncSuspension { .. } => reqwest::Method::POST,
        }
    }

    /// Path on the daemon API, relative to the node's base URL.
    pub(crate) fn path(&self) -> String {
        match self {
            DaemonCommand::DeleteBackup {
                server_uuid,
                backup_uuid,
            } => format!("/api/servers/{}/backups/{}", server_uuid, backup_uuid),
            DaemonCommand::SyncSuspension { server_uuid, .. } => {
                format!("/api/servers/{}/sync", server_uuid)
            }
        }
    }

    /// JSON body, when the command carries one.
    pub(crate) fn body(&self) -> Option<serde_json::Value> {
        match self {
            DaemonCommand::DeleteBackup { .. } => None,
            DaemonCommand::SyncSuspension { suspended, .. } => {
                Some(serde_json::json!({ "suspended": suspended }))
            }
        }
    }
}

/// Capability for issuing lifecycle commands against a node's daemon.
///
/// Reconcilers depend on this trait rather than on the HTTP client so tests
/// can substitute an in-memory fake.
#[async_trait]
pub trait DaemonClient: Send + Sync {
    /// Issues `command` against `node`'s daemon.
    ///
    /// # Returns
    /// - `Ok(())` - The daemon acknowledged the command with a 2xx response
    /// - `Err(DaemonError)` - Transport failure or non-2xx response
    async fn send_command(
        &self,
        node: &entity::node::Model,
        command: DaemonCommand,
    ) -> Result<(), DaemonError>;
}
