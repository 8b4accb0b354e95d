//! Storage adapters for archived backups.
//!
//! Daemon-held backups live on the node's filesystem and are removed
//! through the daemon client; object-storage backups are removed here. The
//! [`ArchiveStore`] capability keeps reconcilers independent of the real
//! S3 client.

mod s3;

pub use s3::S3ArchiveStore;

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::storage::StorageError;

/// Builds the deterministic object key for a backup archive.
///
/// Archives are laid out as `{server_uuid}/{backup_uuid}.tar.gz` so a
/// server's backups share a prefix.
pub fn archive_key(server_uuid: Uuid, backup_uuid: Uuid) -> String {
    format!("{}/{}.tar.gz", server_uuid, backup_uuid)
}

/// Capability for deleting archived backups from an object store.
#[async_trait]
pub trait ArchiveStore: Send + Sync {
    /// Bucket this store operates on.
    fn bucket(&self) -> &str;

    /// Deletes the object at `key`.
    ///
    /// Object stores treat deleting a missing object as success, so there
    /// is no not-found case to absorb on this path.
    async fn delete_object(&self, key: &str) -> Result<(), StorageError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn archive_key_joins_uuids_with_the_tarball_suffix() {
        let server_uuid = Uuid::parse_str("3674121e-ae71-4dcd-9801-07c4d2a9b131").unwrap();
        let backup_uuid = Uuid::parse_str("d2e8ae72-9cf7-4df8-8b86-6ab5f49ff8f3").unwrap();

        assert_eq!(
            archive_key(server_uuid, backup_uuid),
            "3674121e-ae71-4dcd-9801-07c4d2a9b131/d2e8ae72-9cf7-4df8-8b86-6ab5f49ff8f3.tar.gz"
        );
    }
}
