//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations for each
//! domain in the application. Repositories use SeaORM entity models internally and keep
//! query details out of the service layer. All database queries, updates, and deletes
//! are performed through these repositories.

pub mod backup;
pub mod location;
pub mod node;
pub mod server;

#[cfg(test)]
mod test;
