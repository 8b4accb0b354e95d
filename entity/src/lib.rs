//! SeaORM entity models for the panel's durable records.
//!
//! Each module defines one table: users own servers, servers live on nodes,
//! nodes belong to locations, and backups belong to servers. Lifecycle
//! fields (`server::ServerStatus`, `backup::BackupDisk`) are closed enums
//! rather than free-form strings.

pub mod backup;
pub mod location;
pub mod node;
pub mod prelude;
pub mod server;
pub mod user;
