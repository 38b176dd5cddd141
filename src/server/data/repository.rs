//! Persistence port implemented by every entity repository.

use async_trait::async_trait;
use sea_orm::DbErr;

use crate::server::model::{context::ActorContext, record::Record};

/// Per-entity storage capability used by the generic entity service.
///
/// Implementations must return search results in a stable order so that
/// repeated calls with the same filter and page yield the same records.
#[async_trait]
pub trait Repository: Send + Sync {
    type Record: Record;

    async fn find_by_id(&self, id: i32, ctx: &ActorContext)
        -> Result<Option<Self::Record>, DbErr>;

    /// Looks up a record by its natural key.
    ///
    /// # Returns
    /// - `Err(DbErr::Custom)` - `key` is not a unique key of this entity
    async fn find_by_unique_key(
        &self,
        key: &str,
        value: &str,
        ctx: &ActorContext,
    ) -> Result<Option<Self::Record>, DbErr>;

    /// Inserts the record and returns its generated id.
    async fn add(&self, record: &Self::Record, ctx: &ActorContext) -> Result<i32, DbErr>;

    /// Updates the persisted record with the same id.
    ///
    /// # Returns
    /// - `Err(DbErr::RecordNotFound)` - No record holds that id
    async fn update(&self, record: &Self::Record, ctx: &ActorContext) -> Result<(), DbErr>;

    /// Deletes the record and returns what was removed.
    ///
    /// # Returns
    /// - `Err(DbErr::RecordNotFound)` - No record holds that id
    async fn delete(&self, id: i32, ctx: &ActorContext) -> Result<Self::Record, DbErr>;

    /// Returns page `page` (zero based) of records matching the filter template.
    async fn search(
        &self,
        filter: &Self::Record,
        page: u64,
        page_size: u64,
        ctx: &ActorContext,
    ) -> Result<Vec<Self::Record>, DbErr>;
}

pub(crate) fn not_found(id: i32) -> DbErr {
    DbErr::RecordNotFound(format!("Record not found with id {}", id))
}

pub(crate) fn unknown_key(key: &str, entity: &str) -> DbErr {
    DbErr::Custom(format!("'{}' is not a unique key of {}", key, entity))
}

/// Maps a no-op update onto the not-found error the port promises.
pub(crate) fn map_not_updated(id: i32) -> impl FnOnce(DbErr) -> DbErr {
    move |err| match err {
        DbErr::RecordNotUpdated => not_found(id),
        other => other,
    }
}
