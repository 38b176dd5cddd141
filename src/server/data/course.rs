use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::{
    data::repository::{map_not_updated, not_found, unknown_key, Repository},
    model::{context::ActorContext, course::Course, record::Record},
};

pub struct CourseRepository {
    db: DatabaseConnection,
}

impl CourseRepository {
    pub fn new(db: &DatabaseConnection) -> Self {
        Self { db: db.clone() }
    }
}

#[async_trait]
impl Repository for CourseRepository {
    type Record = Course;

    async fn find_by_id(&self, id: i32, _ctx: &ActorContext) -> Result<Option<Course>, DbErr> {
        let entity = entity::prelude::Course::find_by_id(id).one(&self.db).await?;

        Ok(entity.map(Course::from_entity))
    }

    async fn find_by_unique_key(
        &self,
        key: &str,
        value: &str,
        _ctx: &ActorContext,
    ) -> Result<Option<Course>, DbErr> {
        if key != "name" {
            return Err(unknown_key(key, "course"));
        }

        let entity = entity::prelude::Course::find()
            .filter(entity::course::Column::Name.eq(value))
            .one(&self.db)
            .await?;

        Ok(entity.map(Course::from_entity))
    }

    async fn add(&self, record: &Course, ctx: &ActorContext) -> Result<i32, DbErr> {
        let now = Utc::now();
        let entity = entity::course::ActiveModel {
            name: ActiveValue::Set(record.name.clone()),
            duration: ActiveValue::Set(record.duration.clone()),
            description: ActiveValue::Set(record.description.clone()),
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

    async fn update(&self, record: &Course, ctx: &ActorContext) -> Result<(), DbErr> {
        let Some(id) = record.persisted_id() else {
            return Err(DbErr::Custom("Cannot update a course without an id".to_string()));
        };

        entity::course::ActiveModel {
            id: ActiveValue::Unchanged(id),
            name: ActiveValue::Set(record.name.clone()),
            duration: ActiveValue::Set(record.duration.clone()),
            description: ActiveValue::Set(record.description.clone()),
            modified_by: ActiveValue::Set(ctx.login_id.clone()),
            modified_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .update(&self.db)
        .await
        .map_err(map_not_updated(id))?;

        Ok(())
    }

    async fn delete(&self, id: i32, ctx: &ActorContext) -> Result<Course, DbErr> {
        let Some(course) = self.find_by_id(id, ctx).await? else {
            return Err(not_found(id));
        };

        entity::prelude::Course::delete_by_id(id).exec(&self.db).await?;

        Ok(course)
    }

    async fn search(
        &self,
        filter: &Course,
        page: u64,
        page_size: u64,
        _ctx: &ActorContext,
    ) -> Result<Vec<Course>, DbErr> {
        let mut condition = Condition::all();
        if !filter.name.is_empty() {
            condition = condition.add(entity::course::Column::Name.starts_with(&filter.name));
        }
        if !filter.duration.is_empty() {
            condition =
                condition.add(entity::course::Column::Duration.starts_with(&filter.duration));
        }

        let entities = entity::prelude::Course::find()
            .filter(condition)
            .order_by_asc(entity::course::Column::Id)
            .paginate(&self.db, page_size)
            .fetch_page(page)
            .await?;

        Ok(entities.into_iter().map(Course::from_entity).collect())
    }
}
