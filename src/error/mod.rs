//! Error types for the panel core.
//!
//! This module provides the application's error hierarchy. The `AppError`
//! enum is the top-level error type that wraps domain-specific errors; the
//! command layer is responsible for rendering it to the operator. Variants
//! carrying a message (`NotFound`, `InvalidArgument`, and the precondition
//! violations) are displayable as-is.

pub mod config;
pub mod daemon;
pub mod storage;

use thiserror::Error;

use crate::error::{config::ConfigError, daemon::DaemonError, storage::StorageError};

/// Top-level application error type.
///
/// Aggregates all error types that can occur in the application. Most
/// variants use `#[from]` for automatic conversion; precondition violations
/// are direct variants carrying their operator-facing message.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Database operation error from SeaORM.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// The daemon was unreachable or rejected a command.
    ///
    /// Carries the HTTP status when one was received. The backup deletion
    /// path absorbs the 404 case itself; every other failure surfaces here
    /// unchanged.
    #[error(transparent)]
    DaemonErr(#[from] DaemonError),

    /// Object storage rejected or failed an archive operation.
    #[error(transparent)]
    StorageErr(#[from] StorageError),

    /// HTTP client construction error from reqwest.
    #[error(transparent)]
    ReqwestErr(#[from] reqwest::Error),

    /// Interactive prompt failure from the terminal.
    #[error(transparent)]
    PromptErr(#[from] dialoguer::Error),

    /// The backup is locked and completed successfully, so it is retained.
    ///
    /// Raised before any remote call; the record is left untouched.
    #[error("Cannot delete a backup that is marked as locked.")]
    BackupLocked,

    /// The location still has nodes referencing it.
    #[error("Cannot delete a location that has active nodes attached to it.")]
    HasActiveNodes,

    /// The node still has servers assigned to it.
    #[error("Cannot delete a node that has active servers attached to it.")]
    HasActiveServers,

    /// Caller supplied a value outside the accepted set.
    ///
    /// The message enumerates the valid values verbatim.
    #[error("{0}")]
    InvalidArgument(String),

    /// Lookup by an operator-supplied key matched no record.
    #[error("{0}")]
    NotFound(String),
}
