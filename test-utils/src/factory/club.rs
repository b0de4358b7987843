//! Club factory for creating test club entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test clubs with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let club = ClubFactory::new(&db, owner.id)
///     .name("Chess Club")
///     .build()
///     .await?;
/// ```
pub struct ClubFactory<'a> {
    db: &'a DatabaseConnection,
    created_by: i32,
    name: String,
    description: String,
}

impl<'a> ClubFactory<'a> {
    /// Creates a new ClubFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Club {id}"` where id is auto-incremented
    /// - description: `"Test club description"`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `created_by` - ID of the owning user
    pub fn new(db: &'a DatabaseConnection, created_by: i32) -> Self {
        let id = next_id();
        Self {
            db,
            created_by,
            name: format!("Club {}", id),
            description: "Test club description".to_string(),
        }
    }

    /// Sets the club name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the club description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Builds and inserts the club entity into the database.
    pub async fn build(self) -> Result<entity::club::Model, DbErr> {
        entity::club::ActiveModel {
            name: ActiveValue::Set(self.name),
            description: ActiveValue::Set(self.description),
            created_by: ActiveValue::Set(self.created_by),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a club with default values owned by `created_by`.
pub async fn create_club(
    db: &DatabaseConnection,
    created_by: i32,
) -> Result<entity::club::Model, DbErr> {
    ClubFactory::new(db, created_by).build().await
}
