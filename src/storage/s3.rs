use async_trait::async_trait;
use aws_sdk_s3::Client;

use crate::error::storage::StorageError;
use crate::storage::ArchiveStore;

/// [`ArchiveStore`] backed by an S3-compatible bucket.
pub struct S3ArchiveStore {
    client: Client,
    bucket: String,
}

impl S3ArchiveStore {
    /// Loads AWS configuration from the environment and binds the store to
    /// `bucket`.
    ///
    /// # Arguments
    /// - `bucket` - Bucket holding the backup archives
    /// - `endpoint` - Endpoint URL override for S3-compatible stores
    ///   outside AWS (MinIO, Ceph, etc.)
    pub async fn new(bucket: impl Into<String>, endpoint: Option<&str>) -> Self {
        let mut loader = aws_config::ConfigLoader::default();
        if let Some(endpoint) = endpoint {
            loader = loader.endpoint_url(endpoint);
        }
        let conf = loader.load().await;

        Self {
            client: Client::new(&conf),
            bucket: bucket.into(),
        }
    }
}

#[async_trait]
impl ArchiveStore for S3ArchiveStore {
    fn bucket(&self) -> &str {
        &self.bucket
    }

    async fn delete_object(&self, key: &str) -> Result<(), StorageError> {
        self.client
            .delete_object()
            .bucket(&self.bucket)
            .key(key)
            .send()
            .await
            .map_err(|err| StorageError::S3(Box::new(aws_sdk_s3::Error::from(err))))?;

        Ok(())
    }
}
