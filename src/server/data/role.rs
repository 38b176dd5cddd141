use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::{
    data::repository::{map_not_updated, not_found, unknown_key, Repository},
    model::{context::ActorContext, record::Record, role::Role},
};

pub struct RoleRepository {
    db: DatabaseConnection,
}

impl RoleRepository {
    pub fn new(db: &DatabaseConnection) -> Self {
        Self { db: db.clone() }
    }

    pub async fn find_by_name(&self, name: &str) -> Result<Option<Role>, DbErr> {
        let entity = entity::prelude::Role::find()
            .filter(entity::role::Column::Name.eq(name))
            .one(&self.db)
            .await?;

        Ok(entity.map(Role::from_entity))
    }
}

#[async_trait]
impl Repository for RoleRepository {
    type Record = Role;

    async fn find_by_id(&self, id: i32, _ctx: &ActorContext) -> Result<Option<Role>, DbErr> {
        let entity = entity::prelude::Role::find_by_id(id).one(&self.db).await?;

        Ok(entity.map(Role::from_entity))
    }

    async fn find_by_unique_key(
        &self,
        key: &str,
        value: &str,
        _ctx: &ActorContext,
    ) -> Result<Option<Role>, DbErr> {
        match key {
            "name" => self.find_by_name(value).await,
            other => Err(unknown_key(other, "role")),
        }
    }

    async fn add(&self, record: &Role, ctx: &ActorContext) -> Result<i32, DbErr> {
        let now = Utc::now();
        let entity = entity::role::ActiveModel {
            name: ActiveValue::Set(record.name.clone()),
            description: ActiveValue::Set(record.description.clone()),
            status: ActiveValue::Set(record.status.clone()),
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

    async fn update(&self, record: &Role, ctx: &ActorContext) -> Result<(), DbErr> {
        let Some(id) = record.persisted_id() else {
            return Err(DbErr::Custom("Cannot update a role without an id".to_string()));
        };

        entity::role::ActiveModel {
            id: ActiveValue::Unchanged(id),
            name: ActiveValue::Set(record.name.clone()),
            description: ActiveValue::Set(record.description.clone()),
            status: ActiveValue::Set(record.status.clone()),
            modified_by: ActiveValue::Set(ctx.login_id.clone()),
            modified_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .update(&self.db)
        .await
        .map_err(map_not_updated(id))?;

        Ok(())
    }

    async fn delete(&self, id: i32, ctx: &ActorContext) -> Result<Role, DbErr> {
        let Some(role) = self.find_by_id(id, ctx).await? else {
            return Err(not_found(id));
        };

        entity::prelude::Role::delete_by_id(id).exec(&self.db).await?;

        Ok(role)
    }

    async fn search(
        &self,
        filter: &Role,
        page: u64,
        page_size: u64,
        _ctx: &ActorContext,
    ) -> Result<Vec<Role>, DbErr> {
        let mut condition = Condition::all();
        if !filter.name.is_empty() {
            condition = condition.add(entity::role::Column::Name.starts_with(&filter.name));
        }
        if !filter.description.is_empty() {
            condition =
                condition.add(entity::role::Column::Description.starts_with(&filter.description));
        }
        if !filter.status.is_empty() {
            condition = condition.add(entity::role::Column::Status.eq(filter.status.as_str()));
        }

        let entities = entity::prelude::Role::find()
            .filter(condition)
            .order_by_asc(entity::role::Column::Id)
            .paginate(&self.db, page_size)
            .fetch_page(page)
            .await?;

        Ok(entities.into_iter().map(Role::from_entity).collect())
    }
}
