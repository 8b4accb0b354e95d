use std::time::Duration;

use crate::error::{config::ConfigError, AppError};

const DEFAULT_DAEMON_TIMEOUT_SECS: u64 = 15;

pub struct Config {
    pub database_url: String,

    /// Bucket holding object-storage backup archives. Only required when a
    /// backup with the `s3` disk tag is operated on.
    pub s3_bucket: Option<String>,

    /// Endpoint override for S3-compatible stores outside AWS.
    pub s3_endpoint: Option<String>,

    /// Upper bound on any single daemon request.
    pub daemon_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let daemon_timeout_secs = match std::env::var("DAEMON_TIMEOUT_SECS") {
            Ok(raw) => raw
                .parse::<u64>()
                .map_err(|_| ConfigError::InvalidEnvVar("DAEMON_TIMEOUT_SECS".to_string()))?,
            Err(_) => DEFAULT_DAEMON_TIMEOUT_SECS,
        };

        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            s3_bucket: std::env::var("S3_BUCKET").ok(),
            s3_endpoint: std::env::var("S3_ENDPOINT").ok(),
            daemon_timeout: Duration::from_secs(daemon_timeout_secs),
        })
    }
}
