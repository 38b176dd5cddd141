use sea_orm::{DatabaseConnection, DbErr};

use crate::server::{
    data::attachment::AttachmentRepository,
    error::AppError,
    model::{attachment::Attachment, context::ActorContext},
};

/// Attachment collaborator used by the profile picture upload.
pub struct AttachmentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AttachmentService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Stores the attachment, replacing it in place when it carries a persisted id.
    ///
    /// A stale id (the attachment was removed meanwhile) falls back to inserting
    /// a new attachment.
    pub async fn save(&self, attachment: Attachment, ctx: &ActorContext) -> Result<i32, AppError> {
        let repo = AttachmentRepository::new(self.db);

        match repo.save(&attachment, ctx).await {
            Err(DbErr::RecordNotFound(_)) => {
                let fresh = Attachment {
                    id: None,
                    ..attachment
                };
                Ok(repo.save(&fresh, ctx).await?)
            }
            result => Ok(result?),
        }
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Attachment>, AppError> {
        let repo = AttachmentRepository::new(self.db);
        Ok(repo.find_by_id(id).await?)
    }
}
