//! Location factory for creating test location entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test locations with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::location::LocationFactory;
///
/// let location = LocationFactory::new(&db)
///     .short("eu-west")
///     .build()
///     .await?;
/// ```
pub struct LocationFactory<'a> {
    db: &'a DatabaseConnection,
    short: String,
    long: Option<String>,
}

impl<'a> LocationFactory<'a> {
    /// Creates a new LocationFactory with default values.
    ///
    /// Defaults:
    /// - short: `"loc{id}"` where id is auto-incremented
    /// - long: `Some("Test Location {id}")`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            short: format!("loc{}", id),
            long: Some(format!("Test Location {}", id)),
        }
    }

    /// Sets the short identifying code.
    pub fn short(mut self, short: impl Into<String>) -> Self {
        self.short = short.into();
        self
    }

    /// Sets the long description.
    pub fn long(mut self, long: Option<String>) -> Self {
        self.long = long;
        self
    }

    /// Inserts the location into the database.
    pub async fn build(self) -> Result<entity::location::Model, DbErr> {
        entity::location::ActiveModel {
            short: ActiveValue::Set(self.short),
            long: ActiveValue::Set(self.long),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a location with default values.
pub async fn create_location(db: &DatabaseConnection) -> Result<entity::location::Model, DbErr> {
    LocationFactory::new(db).build().await
}
