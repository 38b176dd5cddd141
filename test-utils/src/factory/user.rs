//! User factory for creating test account entities.
//!
//! This module provides factory methods for creating user entities with sensible
//! defaults, reducing boilerplate in tests. The factory supports customization
//! through a builder pattern.

use crate::factory::helpers::{next_id, FACTORY_ACTOR};
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test users with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::user::UserFactory;
///
/// let user = UserFactory::new(&db)
///     .login_id("a@x.com")
///     .password("p1")
///     .build()
///     .await?;
/// ```
pub struct UserFactory<'a> {
    db: &'a DatabaseConnection,
    first_name: String,
    last_name: String,
    login_id: String,
    password: String,
    status: String,
    role_id: i32,
    image_id: Option<i32>,
    failed_login_attempts: i32,
}

impl<'a> UserFactory<'a> {
    /// Creates a new UserFactory with default values.
    ///
    /// Defaults:
    /// - login_id: `"user{n}@test.com"` where n is auto-incremented
    /// - first_name / last_name: `"First{n}"` / `"Last{n}"`
    /// - password: `"password"`
    /// - status: `"Active"`
    /// - role_id: `2`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let n = next_id();
        Self {
            db,
            first_name: format!("First{}", n),
            last_name: format!("Last{}", n),
            login_id: format!("user{}@test.com", n),
            password: "password".to_string(),
            status: "Active".to_string(),
            role_id: 2,
            image_id: None,
            failed_login_attempts: 0,
        }
    }

    /// Sets the login id (and email) for the user.
    pub fn login_id(mut self, login_id: impl Into<String>) -> Self {
        self.login_id = login_id.into();
        self
    }

    /// Sets the plaintext password for the user.
    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.password = password.into();
        self
    }

    /// Sets first and last name for the user.
    pub fn name(mut self, first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        self.first_name = first_name.into();
        self.last_name = last_name.into();
        self
    }

    /// Sets the status for the user.
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    /// Sets the role id for the user.
    pub fn role_id(mut self, role_id: i32) -> Self {
        self.role_id = role_id;
        self
    }

    /// Sets the profile image reference for the user.
    pub fn image_id(mut self, image_id: i32) -> Self {
        self.image_id = Some(image_id);
        self
    }

    /// Sets the failed login counter for the user.
    pub fn failed_login_attempts(mut self, attempts: i32) -> Self {
        self.failed_login_attempts = attempts;
        self
    }

    /// Builds and inserts the user entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::user::Model)` - Created user entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::user::Model, DbErr> {
        let now = Utc::now();
        entity::user::ActiveModel {
            first_name: ActiveValue::Set(self.first_name),
            last_name: ActiveValue::Set(self.last_name),
            email: ActiveValue::Set(self.login_id.clone()),
            login_id: ActiveValue::Set(self.login_id),
            password: ActiveValue::Set(self.password),
            gender: ActiveValue::Set(None),
            dob: ActiveValue::Set(None),
            phone: ActiveValue::Set(None),
            alternate_mobile: ActiveValue::Set(None),
            status: ActiveValue::Set(self.status),
            role_id: ActiveValue::Set(self.role_id),
            image_id: ActiveValue::Set(self.image_id),
            failed_login_attempts: ActiveValue::Set(self.failed_login_attempts),
            last_login: ActiveValue::Set(None),
            created_by: ActiveValue::Set(FACTORY_ACTOR.to_string()),
            modified_by: ActiveValue::Set(FACTORY_ACTOR.to_string()),
            created_at: ActiveValue::Set(now),
            modified_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a user with default values.
///
/// Shorthand for `UserFactory::new(db).build().await`.
pub async fn create_user(db: &DatabaseConnection) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).build().await
}

/// Creates a user with the given credentials.
///
/// Shorthand for `UserFactory::new(db).login_id(login_id).password(password).build().await`.
pub async fn create_user_with_credentials(
    db: &DatabaseConnection,
    login_id: impl Into<String>,
    password: impl Into<String>,
) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db)
        .login_id(login_id)
        .password(password)
        .build()
        .await
}
