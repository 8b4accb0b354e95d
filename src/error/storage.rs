use thiserror::Error;

/// Failure deleting an archived backup from object storage.
#[derive(Error, Debug)]
pub enum StorageError {
    /// The object store rejected or failed the request.
    #[error(transparent)]
    S3(#[from] Box<aws_sdk_s3::Error>),
}
