//! Attachment data repository.
//!
//! Attachments are not exposed through the generic CRUD handler, so this
//! repository only offers what the attachment collaborator needs.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait};

use crate::server::{
    data::repository::map_not_updated,
    model::{attachment::Attachment, context::ActorContext},
};

pub struct AttachmentRepository {
    db: DatabaseConnection,
}

impl AttachmentRepository {
    pub fn new(db: &DatabaseConnection) -> Self {
        Self { db: db.clone() }
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Attachment>, DbErr> {
        let entity = entity::prelude::Attachment::find_by_id(id)
            .one(&self.db)
            .await?;

        Ok(entity.map(Attachment::from_entity))
    }

    /// Inserts the attachment, or replaces it in place when it carries a persisted id.
    ///
    /// # Returns
    /// - `Ok(i32)` - Id of the stored attachment
    /// - `Err(DbErr::RecordNotFound)` - The given id no longer exists
    /// - `Err(DbErr)` - Database error during insert or update
    pub async fn save(&self, attachment: &Attachment, ctx: &ActorContext) -> Result<i32, DbErr> {
        let now = Utc::now();

        if let Some(id) = attachment.id.filter(|id| *id > 0) {
            entity::attachment::ActiveModel {
                id: ActiveValue::Unchanged(id),
                name: ActiveValue::Set(attachment.name.clone()),
                content_type: ActiveValue::Set(attachment.content_type.clone()),
                description: ActiveValue::Set(attachment.description.clone()),
                path: ActiveValue::Set(attachment.path.clone()),
                user_id: ActiveValue::Set(attachment.user_id),
                data: ActiveValue::Set(attachment.data.clone()),
                modified_by: ActiveValue::Set(ctx.login_id.clone()),
                modified_at: ActiveValue::Set(now),
                ..Default::default()
            }
            .update(&self.db)
            .await
            .map_err(map_not_updated(id))?;

            return Ok(id);
        }

        let entity = entity::attachment::ActiveModel {
            name: ActiveValue::Set(attachment.name.clone()),
            content_type: ActiveValue::Set(attachment.content_type.clone()),
            description: ActiveValue::Set(attachment.description.clone()),
            path: ActiveValue::Set(attachment.path.clone()),
            user_id: ActiveValue::Set(attachment.user_id),
            data: ActiveValue::Set(attachment.data.clone()),
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
}
