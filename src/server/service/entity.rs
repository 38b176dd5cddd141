//! Generic entity service shared by every CRUD resource.

use sea_orm::{DbErr, SqlErr};

use crate::server::{
    data::repository::Repository,
    error::AppError,
    model::{context::ActorContext, record::Record},
};

/// Enforces the record invariants on top of a persistence port.
///
/// Uniqueness is not checked by `add`/`update` themselves; callers do the
/// application level lookup. A unique constraint violation raised by storage is
/// still translated into the same `Conflict` the caller would have produced.
pub struct EntityService<P: Repository> {
    repo: P,
}

impl<P: Repository> EntityService<P> {
    pub fn new(repo: P) -> Self {
        Self { repo }
    }

    pub async fn find_by_id(
        &self,
        id: i32,
        ctx: &ActorContext,
    ) -> Result<Option<P::Record>, AppError> {
        Ok(self.repo.find_by_id(id, ctx).await?)
    }

    /// Looks a record up by natural key.
    ///
    /// An empty `key` means the entity has no uniqueness rule, so nothing is queried.
    pub async fn find_by_unique_key(
        &self,
        key: &str,
        value: &str,
        ctx: &ActorContext,
    ) -> Result<Option<P::Record>, AppError> {
        if key.is_empty() {
            return Ok(None);
        }

        Ok(self.repo.find_by_unique_key(key, value, ctx).await?)
    }

    /// Inserts the record and returns the generated id.
    ///
    /// # Returns
    /// - `Err(AppError::Conflict)` - Storage rejected a duplicate unique key
    pub async fn add(&self, record: &P::Record, ctx: &ActorContext) -> Result<i32, AppError> {
        self.repo
            .add(record, ctx)
            .await
            .map_err(write_error::<P::Record>)
    }

    /// Updates a persisted record.
    ///
    /// # Returns
    /// - `Err(AppError::BadRequest)` - The record has no persisted id
    /// - `Err(AppError::NotFound)` - No record holds that id
    /// - `Err(AppError::Conflict)` - Storage rejected a duplicate unique key
    pub async fn update(&self, record: &P::Record, ctx: &ActorContext) -> Result<(), AppError> {
        if record.persisted_id().is_none() {
            return Err(AppError::BadRequest(format!(
                "{} cannot be updated without an id",
                P::Record::label()
            )));
        }

        self.repo
            .update(record, ctx)
            .await
            .map_err(write_error::<P::Record>)
    }

    /// Deletes a record, returning what was removed.
    ///
    /// # Returns
    /// - `Err(AppError::NotFound)` - No record holds that id
    pub async fn delete(&self, id: i32, ctx: &ActorContext) -> Result<P::Record, AppError> {
        self.repo.delete(id, ctx).await.map_err(|err| match err {
            DbErr::RecordNotFound(msg) => AppError::NotFound(msg),
            other => other.into(),
        })
    }

    /// Fetches one page of records matching `filter`.
    ///
    /// A page whose row offset cannot be expressed by the database is past the
    /// end of any table, so it comes back empty without a query.
    pub async fn search(
        &self,
        filter: &P::Record,
        page: u64,
        page_size: u64,
        ctx: &ActorContext,
    ) -> Result<Vec<P::Record>, AppError> {
        if !page_in_range(page, page_size) {
            return Ok(Vec::new());
        }

        Ok(self.repo.search(filter, page, page_size, ctx).await?)
    }
}

/// Whether the last row of `page` still fits a signed 64-bit offset.
pub fn page_in_range(page: u64, page_size: u64) -> bool {
    page.checked_add(1)
        .and_then(|pages| pages.checked_mul(page_size))
        .is_some_and(|rows| rows <= i64::MAX as u64)
}

/// Message reported when a natural key is already taken.
pub fn duplicate_message<R: Record>() -> String {
    format!("{} already exist", R::label())
}

fn write_error<R: Record>(err: DbErr) -> AppError {
    if let Some(SqlErr::UniqueConstraintViolation(_)) = err.sql_err() {
        return AppError::Conflict(duplicate_message::<R>());
    }

    match err {
        DbErr::RecordNotFound(msg) => AppError::NotFound(msg),
        other => other.into(),
    }
}
