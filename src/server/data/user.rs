//! User data repository for database operations.
//!
//! This module provides the `UserRepository` for managing account records. Besides
//! the generic persistence port it exposes the targeted updates the authentication
//! workflow needs: atomic login attempt bookkeeping, password changes and the
//! profile image reference.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, Condition, DatabaseConnection,
    DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::{
    data::repository::{map_not_updated, not_found, unknown_key, Repository},
    model::{
        context::ActorContext,
        record::Record,
        user::{User, DEFAULT_MEMBER_ROLE_ID},
    },
};

/// Repository providing database operations for account management.
pub struct UserRepository {
    db: DatabaseConnection,
}

impl UserRepository {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Database connection, the pool handle is cloned
    pub fn new(db: &DatabaseConnection) -> Self {
        Self { db: db.clone() }
    }

    /// Finds an account by its login id.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - Account found
    /// - `Ok(None)` - No account with that login id
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_login_id(&self, login_id: &str) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find()
            .filter(entity::user::Column::LoginId.eq(login_id))
            .one(&self.db)
            .await?;

        Ok(entity.map(User::from_entity))
    }

    /// Increments the failed login counter in a single statement.
    ///
    /// The increment happens inside the database so concurrent failures are never lost.
    pub async fn record_login_failure(&self, id: i32) -> Result<(), DbErr> {
        let result = entity::prelude::User::update_many()
            .col_expr(
                entity::user::Column::FailedLoginAttempts,
                increment(entity::user::Column::FailedLoginAttempts),
            )
            .filter(entity::user::Column::Id.eq(id))
            .exec(&self.db)
            .await?;

        if result.rows_affected == 0 {
            return Err(not_found(id));
        }
        Ok(())
    }

    /// Resets the failed login counter and stamps the last login time in one update.
    pub async fn record_login_success(&self, id: i32, at: DateTime<Utc>) -> Result<(), DbErr> {
        let result = entity::prelude::User::update_many()
            .col_expr(entity::user::Column::FailedLoginAttempts, Expr::value(0))
            .col_expr(entity::user::Column::LastLogin, Expr::value(at))
            .filter(entity::user::Column::Id.eq(id))
            .exec(&self.db)
            .await?;

        if result.rows_affected == 0 {
            return Err(not_found(id));
        }
        Ok(())
    }

    /// Replaces the stored password.
    pub async fn set_password(
        &self,
        id: i32,
        password: &str,
        ctx: &ActorContext,
    ) -> Result<(), DbErr> {
        entity::user::ActiveModel {
            id: ActiveValue::Unchanged(id),
            password: ActiveValue::Set(password.to_string()),
            modified_by: ActiveValue::Set(ctx.login_id.clone()),
            modified_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .update(&self.db)
        .await
        .map_err(map_not_updated(id))?;

        Ok(())
    }

    /// Points the account at a profile image attachment.
    pub async fn set_image(&self, id: i32, image_id: i32, ctx: &ActorContext) -> Result<(), DbErr> {
        entity::user::ActiveModel {
            id: ActiveValue::Unchanged(id),
            image_id: ActiveValue::Set(Some(image_id)),
            modified_by: ActiveValue::Set(ctx.login_id.clone()),
            modified_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .update(&self.db)
        .await
        .map_err(map_not_updated(id))?;

        Ok(())
    }
}

fn increment(column: entity::user::Column) -> Expr {
    use sea_orm::sea_query::ExprTrait;

    Expr::col(column).add(1)
}

fn filter_condition(filter: &User) -> Condition {
    let mut condition = Condition::all();

    if !filter.first_name.is_empty() {
        condition = condition.add(entity::user::Column::FirstName.starts_with(&filter.first_name));
    }
    if !filter.last_name.is_empty() {
        condition = condition.add(entity::user::Column::LastName.starts_with(&filter.last_name));
    }
    if !filter.login_id.is_empty() {
        condition = condition.add(entity::user::Column::LoginId.starts_with(&filter.login_id));
    }
    if !filter.status.is_empty() {
        condition = condition.add(entity::user::Column::Status.eq(filter.status.as_str()));
    }
    if let Some(role_id) = filter.role_id {
        condition = condition.add(entity::user::Column::RoleId.eq(role_id));
    }

    condition
}

#[async_trait]
impl Repository for UserRepository {
    type Record = User;

    async fn find_by_id(&self, id: i32, _ctx: &ActorContext) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find_by_id(id).one(&self.db).await?;

        Ok(entity.map(User::from_entity))
    }

    async fn find_by_unique_key(
        &self,
        key: &str,
        value: &str,
        _ctx: &ActorContext,
    ) -> Result<Option<User>, DbErr> {
        match key {
            "loginId" => self.find_by_login_id(value).await,
            other => Err(unknown_key(other, "user")),
        }
    }

    async fn add(&self, record: &User, ctx: &ActorContext) -> Result<i32, DbErr> {
        let now = Utc::now();
        let email = if record.email.is_empty() {
            record.login_id.clone()
        } else {
            record.email.clone()
        };

        let entity = entity::user::ActiveModel {
            first_name: ActiveValue::Set(record.first_name.clone()),
            last_name: ActiveValue::Set(record.last_name.clone()),
            login_id: ActiveValue::Set(record.login_id.clone()),
            password: ActiveValue::Set(record.password.clone()),
            email: ActiveValue::Set(email),
            gender: ActiveValue::Set(record.gender.clone()),
            dob: ActiveValue::Set(record.dob),
            phone: ActiveValue::Set(record.phone.clone()),
            alternate_mobile: ActiveValue::Set(record.alternate_mobile.clone()),
            status: ActiveValue::Set(record.status.clone()),
            role_id: ActiveValue::Set(record.role_id.unwrap_or(DEFAULT_MEMBER_ROLE_ID)),
            image_id: ActiveValue::Set(record.image_id),
            failed_login_attempts: ActiveValue::Set(0),
            last_login: ActiveValue::Set(None),
            created_by: ActiveValue::Set(ctx.login_id.clone()),
            modified_by: ActiveValue::Set(ctx.login_id.clone()),
            created_at: ActiveValue::Set(now),
            modified_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(&self.db)
        .await?;

        Ok(entity.id)
    }

    /// Updates profile fields of an account.
    ///
    /// Login bookkeeping (failed attempts, last login) is never touched here, an
    /// empty password keeps the stored one and the image reference only changes
    /// when the record carries one.
    async fn update(&self, record: &User, ctx: &ActorContext) -> Result<(), DbErr> {
        let Some(id) = record.persisted_id() else {
            return Err(DbErr::Custom("Cannot update a user without an id".to_string()));
        };

        let mut model = entity::user::ActiveModel {
            id: ActiveValue::Unchanged(id),
            first_name: ActiveValue::Set(record.first_name.clone()),
            last_name: ActiveValue::Set(record.last_name.clone()),
            login_id: ActiveValue::Set(record.login_id.clone()),
            gender: ActiveValue::Set(record.gender.clone()),
            dob: ActiveValue::Set(record.dob),
            phone: ActiveValue::Set(record.phone.clone()),
            alternate_mobile: ActiveValue::Set(record.alternate_mobile.clone()),
            modified_by: ActiveValue::Set(ctx.login_id.clone()),
            modified_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        };

        if !record.email.is_empty() {
            model.email = ActiveValue::Set(record.email.clone());
        }
        if !record.password.is_empty() {
            model.password = ActiveValue::Set(record.password.clone());
        }
        if !record.status.is_empty() {
            model.status = ActiveValue::Set(record.status.clone());
        }
        if let Some(role_id) = record.role_id {
            model.role_id = ActiveValue::Set(role_id);
        }
        if let Some(image_id) = record.image_id {
            model.image_id = ActiveValue::Set(Some(image_id));
        }

        model.update(&self.db).await.map_err(map_not_updated(id))?;

        Ok(())
    }

    async fn delete(&self, id: i32, ctx: &ActorContext) -> Result<User, DbErr> {
        let Some(user) = self.find_by_id(id, ctx).await? else {
            return Err(not_found(id));
        };

        entity::prelude::User::delete_by_id(id).exec(&self.db).await?;

        Ok(user)
    }

    async fn search(
        &self,
        filter: &User,
        page: u64,
        page_size: u64,
        _ctx: &ActorContext,
    ) -> Result<Vec<User>, DbErr> {
        let entities = entity::prelude::User::find()
            .filter(filter_condition(filter))
            .order_by_asc(entity::user::Column::Id)
            .paginate(&self.db, page_size)
            .fetch_page(page)
            .await?;

        Ok(entities.into_iter().map(User::from_entity).collect())
    }
}
