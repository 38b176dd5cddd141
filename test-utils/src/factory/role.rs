//! Role factory for creating test role entities.

use crate::factory::helpers::{next_id, FACTORY_ACTOR};
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test roles with customizable fields.
pub struct RoleFactory<'a> {
    db: &'a DatabaseConnection,
    id: Option<i32>,
    name: String,
    description: String,
    status: String,
}

impl<'a> RoleFactory<'a> {
    /// Creates a new RoleFactory with default values.
    ///
    /// Defaults:
    /// - id: assigned by the database
    /// - name: `"Role {n}"` where n is auto-incremented
    /// - description: `"Test role"`
    /// - status: `"Active"`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let n = next_id();
        Self {
            db,
            id: None,
            name: format!("Role {}", n),
            description: "Test role".to_string(),
            status: "Active".to_string(),
        }
    }

    /// Forces a specific primary key, used to reproduce seeded roles.
    pub fn id(mut self, id: i32) -> Self {
        self.id = Some(id);
        self
    }

    /// Sets the name for the role.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the status for the role.
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    /// Builds and inserts the role entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::role::Model)` - Created role entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::role::Model, DbErr> {
        let now = Utc::now();
        entity::role::ActiveModel {
            id: match self.id {
                Some(id) => ActiveValue::Set(id),
                None => ActiveValue::NotSet,
            },
            name: ActiveValue::Set(self.name),
            description: ActiveValue::Set(self.description),
            status: ActiveValue::Set(self.status),
            created_by: ActiveValue::Set(FACTORY_ACTOR.to_string()),
            modified_by: ActiveValue::Set(FACTORY_ACTOR.to_string()),
            created_at: ActiveValue::Set(now),
            modified_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a role with default values.
pub async fn create_role(db: &DatabaseConnection) -> Result<entity::role::Model, DbErr> {
    RoleFactory::new(db).build().await
}
